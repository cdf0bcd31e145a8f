//! Subscription plan tier for a law record

use std::fmt;

use crate::model::{Derived, Record};

const MAKER_FUNCTIONS: [&str; 4] = ["Enacting Maker", "Amending Maker", "Revoking Maker", "Making"];

const PUBLIC_STATUSES: [&str; 2] = ["✔ In force", "⭕ Part Revocation / Repeal"];
const PLANNED: &str = "⚠ Planned";
const REVOKED: &str = "❌ Revoked / Repealed / Abolished";

const PUBLIC_TYPES: [&str; 2] = ["Act", "Regulation"];
const ORDER: &str = "Order";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Public,
    Starter,
    Supporter,
    Sponsor,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Public => "PUBLIC",
            Tier::Starter => "STARTER",
            Tier::Supporter => "SUPPORTER",
            Tier::Sponsor => "SPONSOR",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowest tier whose conditions all hold
pub fn tier(record: &Record) -> Tier {
    let function = record.text("function");
    if !MAKER_FUNCTIONS.contains(&function.as_str()) || !record.is_set("family") {
        return Tier::Sponsor;
    }

    let live = record.text("live");
    let class = record.text("type_class");
    let public_status = PUBLIC_STATUSES.contains(&live.as_str());
    let public_type = PUBLIC_TYPES.contains(&class.as_str());
    let starter_status = public_status || live == PLANNED;
    let starter_type = public_type || class == ORDER;

    if public_status && public_type {
        Tier::Public
    } else if starter_status && starter_type {
        Tier::Starter
    } else if (starter_status || live == REVOKED) && starter_type {
        Tier::Supporter
    } else {
        Tier::Sponsor
    }
}

pub fn plan(record: &Record) -> Derived {
    Derived::Value(tier(record).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn law(function: &str, live: &str, class: &str) -> Record {
        Record::new()
            .with("function", function)
            .with("live", live)
            .with("type_class", class)
            .with("family", "OH&S: Occupational / Personal Safety")
    }

    #[test]
    fn test_public_tier() {
        assert_eq!(tier(&law("Making", "✔ In force", "Act")), Tier::Public);
        assert_eq!(
            tier(&law("Amending Maker", "⭕ Part Revocation / Repeal", "Regulation")),
            Tier::Public
        );
    }

    #[test]
    fn test_starter_tier_adds_planned_and_orders() {
        assert_eq!(tier(&law("Making", "⚠ Planned", "Act")), Tier::Starter);
        assert_eq!(tier(&law("Making", "✔ In force", "Order")), Tier::Starter);
    }

    #[test]
    fn test_supporter_tier_adds_revoked() {
        assert_eq!(
            tier(&law("Revoking Maker", "❌ Revoked / Repealed / Abolished", "Order")),
            Tier::Supporter
        );
    }

    #[test]
    fn test_sponsor_fallbacks() {
        assert_eq!(tier(&law("Taking", "✔ In force", "Act")), Tier::Sponsor);
        assert_eq!(tier(&law("Making", "✔ In force", "Notice")), Tier::Sponsor);
        assert_eq!(tier(&law("Making", "", "Act")), Tier::Sponsor);

        let no_family = Record::new()
            .with("function", "Making")
            .with("live", "✔ In force")
            .with("type_class", "Act");
        assert_eq!(tier(&no_family), Tier::Sponsor);
    }

    #[test]
    fn test_plan_always_has_a_value() {
        assert_eq!(plan(&Record::new()).as_str(), "SPONSOR");
        assert_eq!(plan(&law("Making", "✔ In force", "Act")).as_str(), "PUBLIC");
    }
}
