//! Field derivers: pure functions from one record to one derived string
//!
//! Every deriver is synchronous and side-effect free. Compiled patterns live
//! in process-wide statics, so derivers can run on any number of threads.

pub mod extract;
pub mod keys;
pub mod plan;
pub mod slug;
pub mod tags;
pub mod url;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::model::{Derived, Record};

pub use keys::{BlankFields, KeyPolicy};
pub use plan::Tier;
pub use slug::UrlVariant;

/// Built-in derivers, addressed by their kebab-case names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeriverKind {
    Dutyholders,
    DutyholdersLoose,
    DutyholdersRus,
    DutyType,
    Popimar,
    UkKey,
    DeKey,
    Url,
    UrlTitle,
    TechRule,
    Year,
    Day,
    Month,
    Plan,
}

impl DeriverKind {
    pub const ALL: [DeriverKind; 14] = [
        DeriverKind::Dutyholders,
        DeriverKind::DutyholdersLoose,
        DeriverKind::DutyholdersRus,
        DeriverKind::DutyType,
        DeriverKind::Popimar,
        DeriverKind::UkKey,
        DeriverKind::DeKey,
        DeriverKind::Url,
        DeriverKind::UrlTitle,
        DeriverKind::TechRule,
        DeriverKind::Year,
        DeriverKind::Day,
        DeriverKind::Month,
        DeriverKind::Plan,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DeriverKind::Dutyholders => "dutyholders",
            DeriverKind::DutyholdersLoose => "dutyholders-loose",
            DeriverKind::DutyholdersRus => "dutyholders-rus",
            DeriverKind::DutyType => "duty-type",
            DeriverKind::Popimar => "popimar",
            DeriverKind::UkKey => "uk-key",
            DeriverKind::DeKey => "de-key",
            DeriverKind::Url => "url",
            DeriverKind::UrlTitle => "url-title",
            DeriverKind::TechRule => "tech-rule",
            DeriverKind::Year => "year",
            DeriverKind::Day => "day",
            DeriverKind::Month => "month",
            DeriverKind::Plan => "plan",
        }
    }

    /// Record fields the deriver reads
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            DeriverKind::Dutyholders
            | DeriverKind::DutyholdersLoose
            | DeriverKind::DutyholdersRus
            | DeriverKind::DutyType
            | DeriverKind::Popimar => &[tags::TEXT_FIELD],
            DeriverKind::UkKey => &[
                "uk",
                "flow",
                "part",
                "chapter",
                "heading",
                "section",
                "regulation",
                "sub_section",
                "sub_regulation",
                "paragraph",
                "record_type",
                "amendment",
                "region",
                "duplicate",
            ],
            DeriverKind::DeKey => &[
                "de",
                "flow",
                "article_type",
                "part",
                "chapter",
                "section",
                "sub_section",
                "article",
                "para",
                "sub",
                "extra",
            ],
            DeriverKind::Url => &[
                "acronym",
                "_url",
                "address",
                "number",
                "title",
                "dguv_fachbereich_subject",
                "dguv_sachgebiet_subject",
            ],
            DeriverKind::UrlTitle => &["acronym", "_url", "title"],
            DeriverKind::TechRule | DeriverKind::Year | DeriverKind::Day | DeriverKind::Month => {
                &[extract::TITLE_FIELD]
            }
            DeriverKind::Plan => &["function", "live", "family", "type_class"],
        }
    }

    /// One-line description for listings
    pub fn summary(&self) -> &'static str {
        match self {
            DeriverKind::Dutyholders => "Duty-holder roles named in the text",
            DeriverKind::DutyholdersLoose => "Duty-holder roles, unbounded patterns",
            DeriverKind::DutyholdersRus => "Duty-holder roles in Russian-law English texts",
            DeriverKind::DutyType => "Kinds of provision the text makes",
            DeriverKind::Popimar => "POPIMAR management-system categories",
            DeriverKind::UkKey => "Composite key for a UK legal-text record",
            DeriverKind::DeKey => "Composite key for a German legal-text record",
            DeriverKind::Url => "Publisher URL of a German regulation",
            DeriverKind::UrlTitle => "URL title slug of a DGUV publication",
            DeriverKind::TechRule => "Technical-rule reference in the title",
            DeriverKind::Year => "Year in the title",
            DeriverKind::Day => "Day of month in the title",
            DeriverKind::Month => "Month number in the title",
            DeriverKind::Plan => "Subscription plan tier of a law",
        }
    }
}

impl fmt::Display for DeriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeriverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeriverKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| s.to_string())
    }
}

impl Serialize for DeriverKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Run one deriver over a record
pub fn derive(kind: DeriverKind, record: &Record, key_policy: KeyPolicy) -> Derived {
    match kind {
        DeriverKind::Dutyholders => tag_record(&tags::DUTYHOLDERS, record),
        DeriverKind::DutyholdersLoose => tag_record(&tags::DUTYHOLDERS_LOOSE, record),
        DeriverKind::DutyholdersRus => tag_record(&tags::DUTYHOLDERS_RUS, record),
        DeriverKind::DutyType => tag_record(&tags::DUTY_TYPES, record),
        DeriverKind::Popimar => tag_record(&tags::POPIMAR, record),
        DeriverKind::UkKey => Derived::from_string(keys::uk_key(record, key_policy)),
        DeriverKind::DeKey => Derived::from_string(keys::de_key(record)),
        DeriverKind::Url => url::url(record),
        DeriverKind::UrlTitle => url::url_title(record),
        DeriverKind::TechRule => extract::tech_rule(record),
        DeriverKind::Year => extract::year(record),
        DeriverKind::Day => extract::day(record),
        DeriverKind::Month => extract::month(record),
        DeriverKind::Plan => plan::plan(record),
    }
}

/// Tag the field a table reads with that table's labels
pub fn tag_record(table: &crate::rules::RuleTable, record: &Record) -> Derived {
    Derived::from_string(table.tag(&record.text(table.field())))
}
