use once_cell::sync::Lazy;
use regex::Regex;

static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(.*$").expect("Hardcode regex pattern"));
static CORPORATE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(ltd|limited|inc|corp|co|corporation)\b").expect("Hardcode regex pattern")
});
static NON_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z\s]").expect("Hardcode regex pattern"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Hardcode regex pattern"));

/// Normalizes a free-text company name: drops the parenthetical tail,
/// removes corporate suffixes, turns hyphens into spaces, strips anything
/// that is not an ASCII letter or whitespace, and collapses the result to
/// single-spaced trimmed text. The steps feed each other, so suffix removal
/// has to happen before punctuation is stripped ("Corp." still matches as a
/// whole word).
///
/// A value equal to `missing_label` is returned untouched.
pub fn clean_company_name(name: &str, missing_label: &str) -> String {
    if name == missing_label {
        return name.to_string();
    }
    let name = PARENTHETICAL.replace_all(name, "");
    let name = CORPORATE_SUFFIX.replace_all(&name, "");
    let name = name.replace('-', " ");
    let name = NON_LETTER.replace_all(&name, "");
    let name = WHITESPACE_RUN.replace_all(&name, " ");
    name.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(name: &str) -> String {
        clean_company_name(name, "N/A")
    }

    #[test]
    fn drops_parenthetical_and_suffix() {
        assert_eq!(clean("Acme Mining Ltd. (formerly XYZ)"), "Acme Mining");
    }

    #[test]
    fn missing_label_passes_through_unchanged() {
        assert_eq!(clean("N/A"), "N/A");
    }

    #[test]
    fn hyphens_become_spaces() {
        assert_eq!(clean("Rio-Tinto Corp"), "Rio Tinto");
    }

    #[test]
    fn suffixes_match_case_insensitively_as_whole_words() {
        assert_eq!(clean("Noranda INC"), "Noranda");
        assert_eq!(clean("Cominco Limited"), "Cominco");
        // "co" inside a word is not a suffix
        assert_eq!(clean("Cobalt Refinery Co"), "Cobalt Refinery");
    }

    #[test]
    fn punctuation_adjacent_suffixes_still_match() {
        assert_eq!(clean("Falconbridge, Ltd."), "Falconbridge");
    }

    #[test]
    fn strips_non_letters_and_collapses_whitespace() {
        assert_eq!(clean("Hudson Bay  Mining & Smelting"), "Hudson Bay Mining Smelting");
        assert_eq!(clean("2088109 Ontario"), "Ontario");
    }

    #[test]
    fn already_clean_names_are_stable() {
        assert_eq!(clean("Rio Tinto"), "Rio Tinto");
    }
}
