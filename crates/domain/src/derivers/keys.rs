//! Key-field builders for UK and German legal-text records

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use regex::Regex;

use crate::model::Record;

/// How blank locator fields are treated in UK keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankFields {
    /// Blank locators contribute neither value nor separator
    #[default]
    Skip,
    /// Every locator slot keeps its separator, blank or not
    Positional,
}

/// Options for key building
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyPolicy {
    pub blank_fields: BlankFields,
}

/// UK locator slots; each slot lists fallback field names in priority order
const UK_LOCATORS: &[&[&str]] = &[
    &["part"],
    &["chapter"],
    &["heading"],
    &["section", "regulation"],
    &["sub_section", "sub_regulation"],
    &["paragraph"],
];

const DE_LOCATORS: &[&str] = &[
    "part",
    "chapter",
    "section",
    "sub_section",
    "article",
    "para",
    "sub",
    "extra",
];

/// Record-type suffixes; `true` means the amendment id follows the code
const RECORD_TYPE_SUFFIXES: &[(&str, &str, bool)] = &[
    ("heading, amendment", "_aa", false),
    ("amendment, general", "_aa_", true),
    ("amendment, textual", "_aa_", true),
    ("heading, modification", "_am", false),
    ("modification", "_am_", true),
    ("heading, extent", "_ae", false),
    ("extent", "_ae_", true),
    ("heading, commencement", "_c", false),
    ("commencement", "_c", true),
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Nation {
    England,
    Wales,
    Scotland,
    NorthernIreland,
}

/// Region rows, most inclusive first; first row whose nations are all named wins
const REGIONS: &[(&[Nation], &str)] = &[
    (
        &[
            Nation::England,
            Nation::Wales,
            Nation::Scotland,
            Nation::NorthernIreland,
        ],
        "_UK",
    ),
    (&[Nation::England, Nation::Wales, Nation::Scotland], "_GB"),
    (
        &[Nation::England, Nation::Wales, Nation::NorthernIreland],
        "_EWNI",
    ),
    (&[Nation::England, Nation::Wales], "_EW"),
    (&[Nation::England, Nation::Scotland], "_ES"),
    (&[Nation::England], "_E"),
    (&[Nation::Wales], "_W"),
    (&[Nation::Scotland], "_S"),
    (&[Nation::NorthernIreland], "_NI"),
];

static UK_WHOLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bUK\b|United Kingdom").expect("Valid regex"));

static NATION_PATTERNS: LazyLock<[(Nation, Regex); 4]> = LazyLock::new(|| {
    [
        (Nation::England, Regex::new(r"England|\bE\b").expect("Valid regex")),
        (Nation::Wales, Regex::new(r"Wales|\bW\b").expect("Valid regex")),
        (Nation::Scotland, Regex::new(r"Scotland|\bS\b").expect("Valid regex")),
        (
            Nation::NorthernIreland,
            Regex::new(r"Northern Ireland|\bNI\b").expect("Valid regex"),
        ),
    ]
});

static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("Valid regex"));

/// Build the UK key field
pub fn uk_key(record: &Record, policy: KeyPolicy) -> String {
    let flow = record.text("flow");
    let mut key = record.text("uk");

    match flow.as_str() {
        "pre" => push_uk_locators(&mut key, record, policy),
        "" | "main" => {
            key.push('_');
            push_uk_locators(&mut key, record, policy);
        }
        "post" => key.push('-'),
        other if DIGIT.is_match(other) => {
            key.push('-');
            key.push_str(other);
            key.push('_');
            push_uk_locators(&mut key, record, policy);
        }
        _ => {}
    }

    let mut key = trim_underscores(key);
    key.push_str(&record_type_suffix(record));
    key.push_str(region_suffix(&record.text("region")));
    if record.is_set("duplicate") {
        key.push_str("_dup");
    }
    key
}

fn push_uk_locators(key: &mut String, record: &Record, policy: KeyPolicy) {
    for slot in UK_LOCATORS {
        let value = record.first_text(slot);
        if value.is_empty() && policy.blank_fields == BlankFields::Skip {
            continue;
        }
        key.push_str(&value);
        key.push('_');
    }
}

fn record_type_suffix(record: &Record) -> String {
    let record_type = record.text("record_type");
    RECORD_TYPE_SUFFIXES
        .iter()
        .find(|(name, _, _)| *name == record_type)
        .map(|(_, code, with_amendment)| {
            if *with_amendment {
                format!("{}{}", code, record.text("amendment"))
            } else {
                code.to_string()
            }
        })
        .unwrap_or_default()
}

/// Jurisdiction suffix for a free-text region field
pub fn region_suffix(region: &str) -> &'static str {
    if region.trim().is_empty() {
        return "";
    }
    if UK_WHOLE.is_match(region) {
        return "_UK";
    }

    let named: Vec<Nation> = NATION_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(region))
        .map(|(nation, _)| *nation)
        .collect();

    REGIONS
        .iter()
        .find(|(nations, _)| nations.iter().all(|n| named.contains(n)))
        .map(|(_, code)| *code)
        .unwrap_or("")
}

/// Build the German key field; blank locators are always skipped
pub fn de_key(record: &Record) -> String {
    let flow = record.text("flow");
    let article_type = record.text("article_type");
    let mut key = record.text("de");
    key.push(' ');

    match flow.as_str() {
        "pre" => {
            if article_type == "eingangsformel" {
                key.push('_');
            }
            if article_type != "titel" {
                key.push_str("_ ");
                key.push_str(&article_type);
            }
        }
        "" | "main" => {
            key.push_str("§ ");
            push_de_locators(&mut key, record);
            if article_type.contains("fußnote") {
                key.push_str("fn");
            }
        }
        "prov" => {
            key.push('+');
            push_de_locators(&mut key, record);
        }
        "post" => {
            key.push_str(" 🗒 ");
            push_de_locators(&mut key, record);
        }
        other => {
            key.push_str(" > ");
            key.push_str(other);
            key.push('_');
            key.push_str(&article_type);
            for name in DE_LOCATORS {
                let value = record.text(name);
                if !value.is_empty() {
                    key.push('_');
                    key.push_str(&value);
                }
            }
        }
    }

    trim_underscores(key)
}

fn push_de_locators(key: &mut String, record: &Record) {
    for name in DE_LOCATORS {
        let value = record.text(name);
        if !value.is_empty() {
            key.push_str(&value);
            key.push('_');
        }
    }
}

fn trim_underscores(mut key: String) -> String {
    let trimmed = key.trim_end_matches('_').len();
    key.truncate(trimmed);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIONAL: KeyPolicy = KeyPolicy {
        blank_fields: BlankFields::Positional,
    };

    fn uk_record() -> Record {
        Record::new().with("uk", "UK")
    }

    #[test]
    fn test_uk_key_skips_blank_locators() {
        let record = uk_record()
            .with("part", "1")
            .with("chapter", "")
            .with("section", "5");
        assert_eq!(uk_key(&record, KeyPolicy::default()), "UK_1_5");
    }

    #[test]
    fn test_uk_key_positional_keeps_slots() {
        let record = uk_record()
            .with("part", "1")
            .with("chapter", "")
            .with("heading", "5");
        assert_eq!(uk_key(&record, POSITIONAL), "UK_1__5");

        let record = uk_record().with("part", "1").with("section", "5");
        assert_eq!(uk_key(&record, POSITIONAL), "UK_1___5");
    }

    #[test]
    fn test_uk_key_never_doubles_or_trails_underscores_when_skipping() {
        let names = ["part", "chapter", "heading", "section", "sub_section", "paragraph"];
        for mask in 0u32..(1 << names.len()) {
            let mut record = uk_record();
            for (bit, name) in names.iter().enumerate() {
                let value = if mask & (1 << bit) != 0 { "7" } else { "" };
                record = record.with(name, value);
            }
            let key = uk_key(&record, KeyPolicy::default());
            assert!(!key.contains("__"), "mask {mask}: {key}");
            assert!(!key.ends_with('_'), "mask {mask}: {key}");
        }
    }

    #[test]
    fn test_uk_key_never_trails_underscores_positional() {
        let record = uk_record().with("part", "2");
        assert_eq!(uk_key(&record, POSITIONAL), "UK_2");
        assert_eq!(uk_key(&uk_record(), POSITIONAL), "UK");
    }

    #[test]
    fn test_uk_key_regulation_fallback() {
        let record = uk_record()
            .with("regulation", "4")
            .with("sub_regulation", "2");
        assert_eq!(uk_key(&record, KeyPolicy::default()), "UK_4_2");
    }

    #[test]
    fn test_uk_key_flows() {
        let record = uk_record().with("part", "1").with("flow", "pre");
        assert_eq!(uk_key(&record, KeyPolicy::default()), "UK1");

        let record = uk_record().with("part", "1").with("flow", "post");
        assert_eq!(uk_key(&record, KeyPolicy::default()), "UK-");

        let record = uk_record().with("part", "1").with("flow", "2");
        assert_eq!(uk_key(&record, KeyPolicy::default()), "UK-2_1");

        let record = uk_record().with("part", "1").with("flow", "schedule");
        assert_eq!(uk_key(&record, KeyPolicy::default()), "UK");
    }

    #[test]
    fn test_uk_key_record_type_suffixes() {
        let base = uk_record().with("section", "3").with("amendment", "F1");
        let cases = [
            ("heading, amendment", "UK_3_aa"),
            ("amendment, textual", "UK_3_aa_F1"),
            ("amendment, general", "UK_3_aa_F1"),
            ("heading, modification", "UK_3_am"),
            ("modification", "UK_3_am_F1"),
            ("heading, extent", "UK_3_ae"),
            ("extent", "UK_3_ae_F1"),
            ("heading, commencement", "UK_3_c"),
            ("commencement", "UK_3_cF1"),
            ("section", "UK_3"),
        ];
        for (record_type, expected) in cases {
            let record = base.clone().with("record_type", record_type);
            assert_eq!(uk_key(&record, KeyPolicy::default()), expected);
        }
    }

    #[test]
    fn test_region_suffix_first_match_wins() {
        assert_eq!(region_suffix("UK"), "_UK");
        assert_eq!(region_suffix("England, Wales, Scotland, Northern Ireland"), "_UK");
        assert_eq!(region_suffix("England, Wales, Scotland"), "_GB");
        assert_eq!(region_suffix("E+W+S"), "_GB");
        assert_eq!(region_suffix("England, Wales"), "_EW");
        assert_eq!(region_suffix("England and Wales and Northern Ireland"), "_EWNI");
        assert_eq!(region_suffix("Scotland"), "_S");
        assert_eq!(region_suffix("Northern Ireland"), "_NI");
        assert_eq!(region_suffix(""), "");
        assert_eq!(region_suffix("Gibraltar"), "");
    }

    #[test]
    fn test_uk_key_region_and_duplicate_suffixes() {
        let record = uk_record()
            .with("section", "1")
            .with("record_type", "extent")
            .with("amendment", "F2")
            .with("region", "England, Wales")
            .with("duplicate", true);
        assert_eq!(uk_key(&record, KeyPolicy::default()), "UK_1_ae_F2_EW_dup");

        let record = uk_record().with("section", "1").with("duplicate", false);
        assert_eq!(uk_key(&record, KeyPolicy::default()), "UK_1");
    }

    fn de_record() -> Record {
        Record::new().with("de", "ArbSchG")
    }

    #[test]
    fn test_de_key_main_flow() {
        let record = de_record()
            .with("section", "2")
            .with("article", "5")
            .with("para", "1");
        assert_eq!(de_key(&record), "ArbSchG § 2_5_1");
    }

    #[test]
    fn test_de_key_footnote_marker() {
        let record = de_record()
            .with("flow", "main")
            .with("article", "3")
            .with("article_type", "fußnote");
        assert_eq!(de_key(&record), "ArbSchG § 3_fn");
    }

    #[test]
    fn test_de_key_preamble() {
        // Only underscores are trimmed; the separator space stays
        let record = de_record().with("flow", "pre").with("article_type", "titel");
        assert_eq!(de_key(&record), "ArbSchG ");

        let record = de_record()
            .with("flow", "pre")
            .with("article_type", "eingangsformel");
        assert_eq!(de_key(&record), "ArbSchG __ eingangsformel");

        let record = de_record()
            .with("flow", "pre")
            .with("article_type", "inhaltsübersicht");
        assert_eq!(de_key(&record), "ArbSchG _ inhaltsübersicht");
    }

    #[test]
    fn test_de_key_prov_and_post() {
        let record = de_record().with("flow", "prov").with("article", "20");
        assert_eq!(de_key(&record), "ArbSchG +20");

        let record = de_record().with("flow", "post").with("part", "1");
        assert_eq!(de_key(&record), "ArbSchG  🗒 1");
    }

    #[test]
    fn test_de_key_custom_flow() {
        let record = de_record()
            .with("flow", "anlage")
            .with("article_type", "artikel")
            .with("part", "1")
            .with("section", "3");
        assert_eq!(de_key(&record), "ArbSchG  > anlage_artikel_1_3");
    }

    #[test]
    fn test_de_key_blank_locators_leave_no_separator() {
        let names = DE_LOCATORS;
        for mask in 0u32..(1 << names.len()) {
            let mut record = de_record();
            for (bit, name) in names.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    record = record.with(name, "9");
                }
            }
            let key = de_key(&record);
            assert!(!key.contains("__"), "mask {mask}: {key}");
            assert!(!key.ends_with('_'), "mask {mask}: {key}");
        }
    }
}
