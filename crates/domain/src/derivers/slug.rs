//! Title slug pipelines, one literal pipeline per URL variant
//!
//! Each variant strips its own character set in its own order. The pipelines
//! look alike but are not interchangeable: existing publisher URLs were cut
//! with exactly these steps.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// `_url` selector values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlVariant {
    DguvLong,
    DguvShort,
    DguvRegel,
    DguvRegelLong,
    DguvInfo,
    DguvInfoLong,
    DguvGrundsatz,
    DguvGrundsatzLong,
    DguvUniq,
    DguvInfoUniq,
    DguvInfoLongUniq,
    DguvRegelUniq,
    DguvGrundsatzUniq,
    DguvGrundsatzLongUniq,
    Baua,
}

impl UrlVariant {
    pub const ALL: [UrlVariant; 15] = [
        UrlVariant::DguvLong,
        UrlVariant::DguvShort,
        UrlVariant::DguvRegel,
        UrlVariant::DguvRegelLong,
        UrlVariant::DguvInfo,
        UrlVariant::DguvInfoLong,
        UrlVariant::DguvGrundsatz,
        UrlVariant::DguvGrundsatzLong,
        UrlVariant::DguvUniq,
        UrlVariant::DguvInfoUniq,
        UrlVariant::DguvInfoLongUniq,
        UrlVariant::DguvRegelUniq,
        UrlVariant::DguvGrundsatzUniq,
        UrlVariant::DguvGrundsatzLongUniq,
        UrlVariant::Baua,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrlVariant::DguvLong => "dguv_long",
            UrlVariant::DguvShort => "dguv_short",
            UrlVariant::DguvRegel => "dguv_regel",
            UrlVariant::DguvRegelLong => "dguv_regel_long",
            UrlVariant::DguvInfo => "dguv_info",
            UrlVariant::DguvInfoLong => "dguv_info_long",
            UrlVariant::DguvGrundsatz => "dguv_grundsatz",
            UrlVariant::DguvGrundsatzLong => "dguv_grundsatz_long",
            UrlVariant::DguvUniq => "dguv_uniq",
            UrlVariant::DguvInfoUniq => "dguv_info_uniq",
            UrlVariant::DguvInfoLongUniq => "dguv_info_long_uniq",
            UrlVariant::DguvRegelUniq => "dguv_regel_uniq",
            UrlVariant::DguvGrundsatzUniq => "dguv_grundsatz_uniq",
            UrlVariant::DguvGrundsatzLongUniq => "dguv_grundsatz_long_uniq",
            UrlVariant::Baua => "baua",
        }
    }
}

impl fmt::Display for UrlVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrlVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UrlVariant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Valid slug pattern")
}

// Host bracket expressions are written out as the alternatives RE2 parses them into.
static HYPHEN_SPACE: LazyLock<Regex> = LazyLock::new(|| re(r"- "));
static COMMA_PARENS: LazyLock<Regex> = LazyLock::new(|| re(r"[,|\(\)]"));
static COMMA_PARENS_COLONS: LazyLock<Regex> = LazyLock::new(|| re(r"[,|\(\):;]"));
static REGEL_DASHES: LazyLock<Regex> = LazyLock::new(|| re(r"[\[ ]- |- | -|-\]"));
static REGEL_LONG_DASHES: LazyLock<Regex> = LazyLock::new(|| re(r"[´|\[ ]- |- | -|-\]"));
static INFO_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| re(r#"[\[?]| &|„|"|”|!|\(|\)|:"#));
static INFO_LONG_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| re(r#"[\[?]| &|„|"|”|!|\(|\)|:|;\]"#));
static GRUNDSATZ_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| re(r#"[§|\[?]| &|„|"|”|!|\(|\)|:|;\]"#));
static SEMICOLON: LazyLock<Regex> = LazyLock::new(|| re(r";"));
static HYPHEN_SLASH: LazyLock<Regex> = LazyLock::new(|| re(r"-/"));
static COMMA_RUNS: LazyLock<Regex> = LazyLock::new(|| re(r"-, |, "));
static INFO_DASHES: LazyLock<Regex> = LazyLock::new(|| re(r"[\[,]|´| - |- | -|-\]"));
static SPACE: LazyLock<Regex> = LazyLock::new(|| re(r" "));
static SUBJECT_PUNCT: LazyLock<Regex> = LazyLock::new(|| re(r"[-|,\(\)]"));

fn base(title: &str) -> String {
    title.to_lowercase().trim().to_string()
}

fn remove(text: &str, pattern: &Regex) -> String {
    pattern.replace_all(text, "").into_owned()
}

fn replace(text: &str, pattern: &Regex, with: &str) -> String {
    pattern.replace_all(text, with).into_owned()
}

fn hyphenate(text: &str) -> String {
    replace(text, &SPACE, "-")
}

fn transliterate(text: &str) -> String {
    text.replace('ä', "ae")
        .replace('ö', "oe")
        .replace('ü', "ue")
        .replace('ß', "ss")
}

fn long_short(title: &str) -> String {
    let s = replace(&base(title), &HYPHEN_SPACE, " ");
    let s = remove(&s, &COMMA_PARENS);
    hyphenate(&s)
}

fn regel(title: &str) -> String {
    let s = remove(&base(title), &COMMA_PARENS_COLONS);
    let s = replace(&s, &REGEL_DASHES, " ");
    hyphenate(&s)
}

fn regel_long(title: &str) -> String {
    let s = remove(&base(title), &COMMA_PARENS_COLONS);
    let s = replace(&s, &REGEL_LONG_DASHES, " ");
    hyphenate(&s)
}

fn info(title: &str) -> String {
    let s = remove(&base(title), &INFO_PUNCT);
    let s = remove(&s, &SEMICOLON);
    let s = replace(&s, &HYPHEN_SLASH, "/");
    let s = replace(&s, &COMMA_RUNS, ",");
    let s = replace(&s, &INFO_DASHES, " ");
    hyphenate(&s)
}

fn info_long(title: &str) -> String {
    let s = remove(&base(title), &INFO_LONG_PUNCT);
    let s = replace(&s, &HYPHEN_SLASH, "/");
    let s = replace(&s, &COMMA_RUNS, ",");
    let s = replace(&s, &INFO_DASHES, " ");
    hyphenate(&s)
}

fn grundsatz(title: &str) -> String {
    let s = remove(&base(title), &GRUNDSATZ_PUNCT);
    let s = replace(&s, &HYPHEN_SLASH, "/");
    let s = replace(&s, &COMMA_RUNS, ",");
    let s = replace(&s, &INFO_DASHES, " ");
    transliterate(&hyphenate(&s))
}

/// Slugify a title with the pipeline of `variant`; `None` for variants without one
pub fn title_slug(variant: UrlVariant, title: &str) -> Option<String> {
    let slug = match variant {
        UrlVariant::DguvLong | UrlVariant::DguvShort => long_short(title),
        UrlVariant::DguvRegel => regel(title),
        UrlVariant::DguvRegelLong => regel_long(title),
        UrlVariant::DguvInfo => info(title),
        UrlVariant::DguvInfoLong | UrlVariant::DguvInfoLongUniq => info_long(title),
        UrlVariant::DguvGrundsatz | UrlVariant::DguvGrundsatzLong => grundsatz(title),
        UrlVariant::DguvUniq | UrlVariant::DguvInfoUniq | UrlVariant::DguvRegelUniq => {
            base(title)
        }
        UrlVariant::DguvGrundsatzUniq | UrlVariant::DguvGrundsatzLongUniq | UrlVariant::Baua => {
            return None;
        }
    };
    Some(slug)
}

/// Slug for a subject-classification path segment
pub fn subject_slug(subject: &str) -> String {
    hyphenate(&remove(&base(subject), &SUBJECT_PUNCT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(variant: UrlVariant, title: &str) -> String {
        title_slug(variant, title).unwrap()
    }

    #[test]
    fn test_variant_names_round_trip() {
        for variant in UrlVariant::ALL {
            assert_eq!(variant.as_str().parse::<UrlVariant>(), Ok(variant));
        }
        assert_eq!("dguv_unknown".parse::<UrlVariant>(), Err("dguv_unknown".to_string()));
    }

    #[test]
    fn test_long_short_turns_hyphen_space_into_space() {
        assert_eq!(
            slug(UrlVariant::DguvShort, "  Grundsätze der Prävention - Teil 1 (neu), Stand "),
            "grundsätze-der-prävention--teil-1-neu-stand"
        );
        assert_eq!(
            slug(UrlVariant::DguvLong, "Lärm- und Vibrationsschutz"),
            "lärm--und-vibrationsschutz"
        );
    }

    #[test]
    fn test_regel_strips_colons_and_dashes() {
        assert_eq!(
            slug(UrlVariant::DguvRegel, "Branche Abwasser: Betrieb - Wartung; Teil 2"),
            "branche-abwasser-betrieb-wartung-teil-2"
        );
        // A bare hyphen inside a word survives
        assert_eq!(slug(UrlVariant::DguvRegel, "Hoch-Bau"), "hoch-bau");
    }

    #[test]
    fn test_regel_long_only_drops_acute_before_dash() {
        assert_eq!(slug(UrlVariant::DguvRegelLong, "a´- b"), "a-b");
        assert_eq!(slug(UrlVariant::DguvRegelLong, "a´b"), "a´b");
        assert_eq!(slug(UrlVariant::DguvRegel, "a´- b"), "a´-b");
    }

    #[test]
    fn test_info_pipeline() {
        assert_eq!(
            slug(
                UrlVariant::DguvInfo,
                "„Sicher arbeiten!“ - Leitern, Tritte & Gerüste? (Teil 1): Hinweise"
            ),
            "sicher-arbeiten“-leitern-tritte-gerüste-teil-1-hinweise"
        );
    }

    #[test]
    fn test_info_removes_semicolons_info_long_keeps_them() {
        assert_eq!(slug(UrlVariant::DguvInfo, "a; b"), "a-b");
        assert_eq!(slug(UrlVariant::DguvInfoLong, "a; b"), "a;-b");
        assert_eq!(slug(UrlVariant::DguvInfoLong, "a;] b"), "a-b");
    }

    #[test]
    fn test_info_comma_and_slash_runs() {
        assert_eq!(slug(UrlVariant::DguvInfo, "Heben-, Tragen"), "heben-tragen");
        assert_eq!(slug(UrlVariant::DguvInfo, "Ein-/Ausgang"), "ein/ausgang");
    }

    #[test]
    fn test_grundsatz_transliterates_after_hyphenation() {
        assert_eq!(
            slug(UrlVariant::DguvGrundsatz, "§ 3 Prüfung für Gefährdungsbeurteilung - Größe"),
            "-3-pruefung-fuer-gefaehrdungsbeurteilung-groesse"
        );
        assert_eq!(slug(UrlVariant::DguvGrundsatzLong, "Straße"), "strasse");
    }

    #[test]
    fn test_uniq_variants_only_trim_and_lowercase() {
        for variant in [
            UrlVariant::DguvUniq,
            UrlVariant::DguvInfoUniq,
            UrlVariant::DguvRegelUniq,
        ] {
            assert_eq!(
                slug(variant, "  Unfallverhütung (Allgemein) "),
                "unfallverhütung (allgemein)"
            );
        }
    }

    #[test]
    fn test_variants_without_title_slug() {
        assert_eq!(title_slug(UrlVariant::DguvGrundsatzUniq, "x"), None);
        assert_eq!(title_slug(UrlVariant::DguvGrundsatzLongUniq, "x"), None);
        assert_eq!(title_slug(UrlVariant::Baua, "x"), None);
    }

    #[test]
    fn test_slugs_are_idempotent_per_variant() {
        let titles = [
            "Grundsätze der Prävention",
            "Branche Abwasser: Betrieb - Wartung",
            "Sicher arbeiten! Leitern, Tritte (Teil 1)",
            "Straße & Gehweg; Winterdienst",
            "Lärm- und Vibrationsschutz",
        ];
        for variant in UrlVariant::ALL {
            for title in titles {
                let Some(once) = title_slug(variant, title) else {
                    continue;
                };
                let twice = title_slug(variant, &once).unwrap();
                assert_eq!(once, twice, "{variant} not idempotent for {title:?}");
            }
        }
    }

    #[test]
    fn test_subject_slug() {
        assert_eq!(
            subject_slug(" Bauwesen (Hoch- und Tiefbau), Gerüste "),
            "bauwesen-hoch-und-tiefbau-gerüste"
        );
    }
}
