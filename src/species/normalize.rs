use std::sync::LazyLock;

use regex::Regex;

use crate::species::table::{lookup, SPECIES_MAP};

/// Label used when a feature carries no usable species.
pub const UNKNOWN_SPECIES: &str = "Unknown";

/// Surveyor marker for unidentified stands.
const NOT_DETERMINED: &str = "Not Determined";

/// Keys this short never take part in substring matching.
const MIN_SUBSTRING_KEY_LEN: usize = 3;

/// Compound community descriptions, e.g. "Q. robur - I. aquifolium" or "Alder/Willow".
static COMPOUND_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" - |/").expect("valid separator pattern")
});

/// Clean a list of raw species strings.
///
/// Empty entries and entries containing "Not Determined" are dropped; every other
/// entry yields exactly one label, resolved in order by
/// 1. exact match against the species table,
/// 2. exact match of the first matching part of a compound description,
/// 3. the first table key (in table order) contained in the string,
/// 4. the trimmed string itself.
pub fn normalize_species<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|entry| {
            let trimmed = entry.as_ref().trim();
            if trimmed.is_empty() || trimmed.contains(NOT_DETERMINED) { return None }
            Some(normalize_entry(trimmed))
        })
        .collect()
}

/// Clean a single raw value, falling back to [`UNKNOWN_SPECIES`].
pub fn clean_species(raw: &str) -> String {
    normalize_species([raw]).into_iter().next()
        .unwrap_or_else(|| UNKNOWN_SPECIES.to_string())
}

fn normalize_entry(trimmed: &str) -> String {
    if let Some(label) = lookup(trimmed) { return label.to_string() }

    if let Some(label) = COMPOUND_SEPARATOR.split(trimmed).find_map(|part| lookup(part.trim())) {
        return label.to_string()
    }

    SPECIES_MAP.iter()
        .find(|(key, _)| key.len() >= MIN_SUBSTRING_KEY_LEN && trimmed.contains(key))
        .map_or_else(|| trimmed.to_string(), |(_, label)| label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_key_maps_to_its_label() {
        for (key, label) in SPECIES_MAP {
            assert_eq!(normalize_species([*key]), vec![label.to_string()]);
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(normalize_species(["  Q. robur \t"]), vec!["Quercus robur"]);
    }

    #[test]
    fn empty_and_undetermined_entries_are_dropped() {
        let raw = ["", "Not Determined", "Q. robur", "   ", "Species Not Determined", "Hazel"];
        assert_eq!(normalize_species(raw), vec!["Quercus robur", "Corylus avellana"]);
    }

    #[test]
    fn compound_description_uses_first_matching_part() {
        assert_eq!(normalize_species(["Wet woodland - A. glutinosa - S. cinerea"]), vec!["Alnus glutinosa"]);
        assert_eq!(normalize_species(["Mixed/F. excelsior/Q. robur"]), vec!["Fraxinus excelsior"]);
    }

    #[test]
    fn substring_scan_follows_table_order() {
        // "Quercus petraea" is listed after "Q. robur" and never reached.
        assert_eq!(clean_species("Old Q. robur stand with Quercus petraea"), "Quercus robur");
        assert_eq!(clean_species("Ashy soil with Hazel scrub"), "Corylus avellana");
    }

    #[test]
    fn unmatched_strings_pass_through_trimmed() {
        assert_eq!(normalize_species([" Bog cotton "]), vec!["Bog cotton"]);
    }

    #[test]
    fn clean_species_falls_back_to_unknown() {
        assert_eq!(clean_species("Not Determined"), UNKNOWN_SPECIES);
        assert_eq!(clean_species(""), UNKNOWN_SPECIES);
        assert_eq!(clean_species("Q. robur"), "Quercus robur");
    }

    #[test]
    fn one_output_per_kept_input() {
        let raw = vec!["Q. robur".to_string(), "Rowan".into(), "Unlisted thing".into()];
        assert_eq!(normalize_species(&raw).len(), raw.len());
    }
}
