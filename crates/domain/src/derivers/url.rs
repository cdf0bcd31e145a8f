//! Publisher URL and URL-title derivation for German regulations

use std::sync::LazyLock;

use regex::Regex;

use super::slug::{UrlVariant, subject_slug, title_slug};
use crate::model::{Derived, Record};

const DGUV_BASE: &str = "https://publikationen.dguv.de/regelwerk/";
const BAUA_BASE: &str =
    "https://www.baua.de/DE/Angebote/Rechtstexte-und-Technische-Regeln/Regelwerk/";
const GESETZE_BASE: &str = "https://www.gesetze-im-internet.de/";
/// Query suffix the DGUV shop appends to catalogue links
const DGUV_CATALOGUE: &str = "?c=13";

static DGUV: LazyLock<Regex> = LazyLock::new(|| Regex::new("DGUV").expect("Valid regex"));
static NUMBER_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.| ").expect("Valid regex"));

/// Parsed `_url` selector: known variant, blank, or an unknown string
enum Selector {
    Known(UrlVariant),
    Blank,
    Unknown(String),
}

fn selector(record: &Record) -> Selector {
    let raw = record.text("_url");
    if raw.is_empty() {
        return Selector::Blank;
    }
    match raw.parse() {
        Ok(variant) => Selector::Known(variant),
        Err(unknown) => Selector::Unknown(unknown),
    }
}

fn is_dguv(record: &Record) -> bool {
    DGUV.is_match(&record.text("acronym"))
}

/// Publisher URL for a regulation record
pub fn url(record: &Record) -> Derived {
    let acronym = record.text("acronym");
    let address = record.text("address");

    if is_dguv(record) {
        return match selector(record) {
            Selector::Known(variant) => dguv_url(variant, record)
                .map(Derived::from_string)
                .unwrap_or_else(|| unrecognized(variant.as_str())),
            Selector::Blank => Derived::Empty,
            Selector::Unknown(raw) => unrecognized(&raw),
        };
    }

    if matches!(selector(record), Selector::Known(UrlVariant::Baua)) {
        let document = if address.is_empty() {
            format!("{}-{}", acronym, baua_number(&record.text("number")))
        } else {
            address
        };
        return Derived::Value(format!("{}{}/{}.html", BAUA_BASE, acronym, document));
    }

    if !address.is_empty() {
        return Derived::Value(format!("{}{}", GESETZE_BASE, address));
    }
    if !acronym.is_empty() {
        return Derived::Value(format!("{}{}", GESETZE_BASE, acronym.to_lowercase()));
    }
    Derived::Empty
}

/// URL-safe title slug for a DGUV record
pub fn url_title(record: &Record) -> Derived {
    if !is_dguv(record) {
        return Derived::Empty;
    }
    match selector(record) {
        Selector::Known(UrlVariant::Baua) => unrecognized(UrlVariant::Baua.as_str()),
        Selector::Known(variant) => title_slug(variant, &record.text("title"))
            .map(Derived::from_string)
            .unwrap_or(Derived::Empty),
        Selector::Blank => Derived::Empty,
        Selector::Unknown(raw) => unrecognized(&raw),
    }
}

fn unrecognized(selector: &str) -> Derived {
    Derived::Unrecognized {
        selector: selector.to_string(),
    }
}

fn baua_number(number: &str) -> String {
    NUMBER_SEPARATORS
        .replace_all(number, "-")
        .replace(' ', "")
}

/// `publikationen-nach-fachbereich/<fachbereich>/<sachgebiet>/`
fn subject_path(record: &Record) -> String {
    format!(
        "{}publikationen-nach-fachbereich/{}/{}/",
        DGUV_BASE,
        subject_slug(&record.text("dguv_fachbereich_subject")),
        subject_slug(&record.text("dguv_sachgebiet_subject")),
    )
}

fn dguv_url(variant: UrlVariant, record: &Record) -> Option<String> {
    let address = record.text("address");
    let slug = || title_slug(variant, &record.text("title")).unwrap_or_default();

    let url = match variant {
        UrlVariant::DguvLong => format!(
            "{}{}/{}{}",
            subject_path(record),
            address,
            slug(),
            DGUV_CATALOGUE
        ),
        UrlVariant::DguvShort => format!(
            "{}dguv-vorschriften/{}/{}{}",
            DGUV_BASE,
            address,
            slug(),
            DGUV_CATALOGUE
        ),
        UrlVariant::DguvRegel => format!(
            "{}dguv-regeln/{}/{}{}",
            DGUV_BASE,
            address,
            slug(),
            DGUV_CATALOGUE
        ),
        UrlVariant::DguvRegelLong
        | UrlVariant::DguvInfoLong
        | UrlVariant::DguvGrundsatzLong => {
            format!("{}{}/{}", subject_path(record), address, slug())
        }
        UrlVariant::DguvInfo => {
            format!("{}dguv-informationen/{}/{}", DGUV_BASE, address, slug())
        }
        UrlVariant::DguvGrundsatz => {
            format!("{}dguv-grundsaetze/{}/{}", DGUV_BASE, address, slug())
        }
        UrlVariant::DguvUniq => format!("{}dguv-vorschriften/{}", DGUV_BASE, address),
        UrlVariant::DguvInfoUniq => format!("{}dguv-informationen/{}", DGUV_BASE, address),
        UrlVariant::DguvRegelUniq => format!("{}dguv-regeln/{}", DGUV_BASE, address),
        UrlVariant::DguvGrundsatzUniq => format!("{}dguv-grundsaetze/{}", DGUV_BASE, address),
        UrlVariant::DguvInfoLongUniq | UrlVariant::DguvGrundsatzLongUniq => {
            format!("{}{}", subject_path(record), address)
        }
        UrlVariant::Baua => return None,
    };
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dguv(variant: &str) -> Record {
        Record::new()
            .with("acronym", "DGUV Vorschrift")
            .with("_url", variant)
            .with("address", "1")
            .with("title", "Grundsätze der Prävention")
            .with("dguv_fachbereich_subject", "Organisation des Arbeitsschutzes")
            .with("dguv_sachgebiet_subject", "Betriebsärztliche (Sicherheitstechnische) Betreuung")
    }

    const SUBJECTS: &str = "https://publikationen.dguv.de/regelwerk/publikationen-nach-fachbereich/organisation-des-arbeitsschutzes/betriebsärztliche-sicherheitstechnische-betreuung/";

    #[test]
    fn test_dguv_short_url() {
        assert_eq!(
            url(&dguv("dguv_short")).as_str(),
            "https://publikationen.dguv.de/regelwerk/dguv-vorschriften/1/grundsätze-der-prävention?c=13"
        );
    }

    #[test]
    fn test_dguv_long_url_uses_subject_path() {
        assert_eq!(
            url(&dguv("dguv_long")).into_string(),
            format!("{SUBJECTS}1/grundsätze-der-prävention?c=13")
        );
        assert_eq!(
            url(&dguv("dguv_regel_long")).into_string(),
            format!("{SUBJECTS}1/grundsätze-der-prävention")
        );
    }

    #[test]
    fn test_dguv_grundsatz_url_uses_transliterated_slug() {
        assert_eq!(
            url(&dguv("dguv_grundsatz")).as_str(),
            "https://publikationen.dguv.de/regelwerk/dguv-grundsaetze/1/grundsaetze-der-praevention"
        );
    }

    #[test]
    fn test_dguv_uniq_urls_have_no_title() {
        assert_eq!(
            url(&dguv("dguv_uniq")).as_str(),
            "https://publikationen.dguv.de/regelwerk/dguv-vorschriften/1"
        );
        assert_eq!(
            url(&dguv("dguv_info_long_uniq")).into_string(),
            format!("{SUBJECTS}1")
        );
        assert_eq!(
            url(&dguv("dguv_grundsatz_uniq")).as_str(),
            "https://publikationen.dguv.de/regelwerk/dguv-grundsaetze/1"
        );
    }

    #[test]
    fn test_every_dguv_variant_but_baua_builds_a_url() {
        for variant in UrlVariant::ALL {
            let derived = url(&dguv(variant.as_str()));
            if variant == UrlVariant::Baua {
                assert!(matches!(derived, Derived::Unrecognized { .. }));
            } else {
                assert!(
                    derived.as_str().starts_with(DGUV_BASE),
                    "{variant}: {derived:?}"
                );
            }
        }
    }

    #[test]
    fn test_unknown_selector_is_unrecognized() {
        assert_eq!(
            url(&dguv("dguv_nope")),
            Derived::Unrecognized {
                selector: "dguv_nope".to_string()
            }
        );
        assert_eq!(url(&dguv("")), Derived::Empty);
    }

    #[test]
    fn test_baua_url_prefers_address() {
        let record = Record::new()
            .with("acronym", "TRGS")
            .with("_url", "baua")
            .with("address", "TRGS-555");
        assert_eq!(
            url(&record).as_str(),
            "https://www.baua.de/DE/Angebote/Rechtstexte-und-Technische-Regeln/Regelwerk/TRGS/TRGS-555.html"
        );
    }

    #[test]
    fn test_baua_url_from_number() {
        let record = Record::new()
            .with("acronym", "ASR")
            .with("_url", "baua")
            .with("number", "A1.3");
        assert_eq!(
            url(&record).as_str(),
            "https://www.baua.de/DE/Angebote/Rechtstexte-und-Technische-Regeln/Regelwerk/ASR/ASR-A1-3.html"
        );
    }

    #[test]
    fn test_gesetze_fallback() {
        let record = Record::new().with("acronym", "ArbSchG").with("address", "arbschg");
        assert_eq!(url(&record).as_str(), "https://www.gesetze-im-internet.de/arbschg");

        let record = Record::new().with("acronym", "BetrSichV");
        assert_eq!(url(&record).as_str(), "https://www.gesetze-im-internet.de/betrsichv");

        assert_eq!(url(&Record::new()), Derived::Empty);
    }

    #[test]
    fn test_url_title_matches_variant_pipeline() {
        assert_eq!(
            url_title(&dguv("dguv_grundsatz")).as_str(),
            "grundsaetze-der-praevention"
        );
        assert_eq!(
            url_title(&dguv("dguv_uniq")).as_str(),
            "grundsätze der prävention"
        );
    }

    #[test]
    fn test_url_title_empty_for_variants_without_slug() {
        assert_eq!(url_title(&dguv("dguv_grundsatz_uniq")), Derived::Empty);
        assert_eq!(url_title(&dguv("dguv_grundsatz_long_uniq")), Derived::Empty);
    }

    #[test]
    fn test_url_title_unrecognized_selectors() {
        assert_eq!(
            url_title(&dguv("baua")),
            Derived::Unrecognized {
                selector: "baua".to_string()
            }
        );
        assert_eq!(
            url_title(&dguv("dguv_nope")),
            Derived::Unrecognized {
                selector: "dguv_nope".to_string()
            }
        );
        assert_eq!(url_title(&dguv("")), Derived::Empty);
    }

    #[test]
    fn test_url_title_empty_outside_dguv() {
        let record = Record::new()
            .with("acronym", "TRGS")
            .with("_url", "dguv_info")
            .with("title", "x");
        assert_eq!(url_title(&record), Derived::Empty);
    }
}
