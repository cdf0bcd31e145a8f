//! Reference, year and date extraction from German regulation titles

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Derived, Record};
use crate::rules::RuleTable;

pub const TITLE_FIELD: &str = "title";

const MONTHS: [(&str, &str); 12] = [
    ("Januar", "01"),
    ("Februar", "02"),
    ("März", "03"),
    ("April", "04"),
    ("Mai", "05"),
    ("Juni", "06"),
    ("Juli", "07"),
    ("August", "08"),
    ("September", "09"),
    ("Oktober", "10"),
    ("November", "11"),
    ("Dezember", "12"),
];

/// Technical-rule prefixes in priority order
const TECH_RULE_PREFIXES: [&str; 10] = [
    "AMR", "ASR", "RAB", "TRBS", "TRBA", "TRGS", "TRLV", "TROS", "TREMF", "DGUV",
];

fn tech_rule_pattern(prefix: &str) -> String {
    match prefix {
        "ASR" => r"ASR[ ]?[A-Z]?\.?[ ]?[0-9]*\.?[0-9]*".to_string(),
        "DGUV" => r"DGUV[ ]?[A-Za-z]*\.?[ ]?[0-9]*\.?[0-9]*".to_string(),
        _ => format!(r"{prefix}[ ]?N?r?\.?[ ]?[0-9]*\.?[0-9]*"),
    }
}

static TECH_RULES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    TECH_RULE_PREFIXES
        .into_iter()
        .map(|prefix| {
            let pattern = Regex::new(&tech_rule_pattern(prefix)).expect("Valid regex");
            (prefix, pattern)
        })
        .collect()
});

// The `|` inside the classes is a literal, kept as the host wrote it.
static YEARS: LazyLock<[Regex; 6]> = LazyLock::new(|| {
    [
        r"(19[7|8|9][0-9])/",
        r"(20[0|1|2][0-9])/",
        r"/(19[7|8|9][0-9])",
        r"/(20[0|1|2][0-9])",
        r"(20[0|1|2][0-9])",
        r"(19[7|8|9][0-9])",
    ]
    .map(|pattern| Regex::new(pattern).expect("Valid regex"))
});

static MONTH_NUMBERS: LazyLock<RuleTable> =
    LazyLock::new(|| RuleTable::new("month", TITLE_FIELD, &MONTHS).expect("Valid regex"));

static DAY: LazyLock<Regex> = LazyLock::new(|| {
    let months = MONTHS.map(|(name, _)| name).join("|");
    Regex::new(&format!(r"([0-9][0-9]?)\.[ ](?:{months})")).expect("Valid regex")
});

/// Technical-rule reference such as `TRGS 555` or `ASR A1.3`
pub fn tech_rule(record: &Record) -> Derived {
    let title = record.text(TITLE_FIELD);
    let Some((_, pattern)) = TECH_RULES
        .iter()
        .find(|(prefix, _)| title.contains(prefix))
    else {
        return Derived::Empty;
    };
    pattern
        .find(&title)
        .map(|m| Derived::from_string(m.as_str().to_string()))
        .unwrap_or(Derived::Empty)
}

/// Four-digit year; slash-adjacent years win over bare ones
pub fn year(record: &Record) -> Derived {
    let title = record.text(TITLE_FIELD);
    YEARS
        .iter()
        .find_map(|pattern| pattern.captures(&title))
        .and_then(|caps| caps.get(1))
        .map(|m| Derived::Value(m.as_str().to_string()))
        .unwrap_or(Derived::Empty)
}

/// Day of month written before a German month name (`3. Mai`)
pub fn day(record: &Record) -> Derived {
    let title = record.text(TITLE_FIELD);
    DAY.captures(&title)
        .and_then(|caps| caps.get(1))
        .map(|m| Derived::Value(m.as_str().to_string()))
        .unwrap_or(Derived::Empty)
}

/// Two-digit month number of the first German month name in calendar order
pub fn month(record: &Record) -> Derived {
    MONTH_NUMBERS
        .first_label(&record.text(TITLE_FIELD))
        .map(|number| Derived::Value(number.to_string()))
        .unwrap_or(Derived::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> Record {
        Record::new().with(TITLE_FIELD, title)
    }

    #[test]
    fn test_tech_rule_stops_at_title_text() {
        assert_eq!(tech_rule(&titled("TRGS 555 - Ersatzstoffe")).as_str(), "TRGS 555");
        assert_eq!(
            tech_rule(&titled("Technische Regel TRBS 1201 Teil 1")).as_str(),
            "TRBS 1201"
        );
    }

    #[test]
    fn test_tech_rule_asr_letter_and_decimal() {
        assert_eq!(
            tech_rule(&titled("ASR A1.3 Sicherheits- und Gesundheitsschutzkennzeichnung")).as_str(),
            "ASR A1.3"
        );
    }

    #[test]
    fn test_tech_rule_dguv_keeps_kind_word() {
        assert_eq!(
            tech_rule(&titled("DGUV Vorschrift 1 Grundsätze der Prävention")).as_str(),
            "DGUV Vorschrift 1"
        );
    }

    #[test]
    fn test_tech_rule_prefix_priority_beats_position() {
        // AMR is tested before TRGS even though TRGS comes first in the title
        assert_eq!(
            tech_rule(&titled("TRGS 900 und AMR 3.1")).as_str(),
            "AMR 3.1"
        );
    }

    #[test]
    fn test_tech_rule_no_prefix() {
        assert_eq!(tech_rule(&titled("Arbeitsschutzgesetz")), Derived::Empty);
        assert_eq!(tech_rule(&Record::new()), Derived::Empty);
    }

    #[test]
    fn test_year_prefers_slash_adjacent() {
        assert_eq!(year(&titled("2021/")).as_str(), "2021");
        assert_eq!(year(&titled("1987")).as_str(), "1987");
        assert_eq!(year(&titled("Richtlinie 2003 und 1989/391/EWG")).as_str(), "1989");
        assert_eq!(year(&titled("Verordnung (EU) 2016/425")).as_str(), "2016");
        assert_eq!(year(&titled("Nr. 391/2009")).as_str(), "2009");
    }

    #[test]
    fn test_year_out_of_range() {
        assert_eq!(year(&titled("1850 und 2030")), Derived::Empty);
    }

    #[test]
    fn test_day_needs_month_name() {
        assert_eq!(
            day(&titled("Verordnung vom 12. Dezember 1996")).as_str(),
            "12"
        );
        assert_eq!(day(&titled("vom 3. Mai 2002")).as_str(), "3");
        assert_eq!(day(&titled("Abschnitt 12. Teil")), Derived::Empty);
    }

    #[test]
    fn test_month_lookup() {
        assert_eq!(month(&titled("vom 12. Dezember 1996")).as_str(), "12");
        assert_eq!(month(&titled("März 2010")).as_str(), "03");
        assert_eq!(month(&titled("kein Datum")), Derived::Empty);
    }

    #[test]
    fn test_month_first_in_calendar_order() {
        assert_eq!(month(&titled("Dezember bis Januar")).as_str(), "01");
    }
}
