//! Dimension key normalization.
//!
//! The analysis consumer keys its score maps off these strings, so the rule
//! must stay stable: lower-case, drop every whitespace character, drop `&`.

/// Normalizes a dimension display name into its analysis key.
///
/// `"Team Dynamics & Leadership"` becomes `"teamdynamicsleadership"`.
pub fn normalize_dimension_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '&')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_spaces_and_ampersand() {
        assert_eq!(
            normalize_dimension_key("Team Dynamics & Leadership"),
            "teamdynamicsleadership"
        );
    }

    #[test]
    fn lowercases_plain_names() {
        assert_eq!(
            normalize_dimension_key("Technical Excellence"),
            "technicalexcellence"
        );
    }

    #[test]
    fn strips_tabs_and_newlines_too() {
        assert_eq!(normalize_dimension_key("Growth\t&\nInnovation"), "growthinnovation");
    }

    #[test]
    fn keeps_other_punctuation() {
        assert_eq!(normalize_dimension_key("R&D / Ops-Work"), "rd/ops-work");
    }
}
