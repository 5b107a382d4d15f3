//! crates/km_display/src/labels.rs
//! Party-name shortenings for the 7-character display. Pure and total:
//! names without a table entry pass through unchanged.

/// Normalize a party name for display.
///
/// The table carries the published long names that do not fit (or barely
/// fit) one frame; everything else is already display-ready.
pub fn normalize_label(name: &str) -> &str {
    match name {
        "GRÜNE" => "GRÜN",
        "DIE LINKE" => "LINKE",
        "Sonstige" => "Sonst",
        "FREIE WÄHLER" => "FW",
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabled_names_are_shortened() {
        assert_eq!(normalize_label("GRÜNE"), "GRÜN");
        assert_eq!(normalize_label("DIE LINKE"), "LINKE");
        assert_eq!(normalize_label("Sonstige"), "Sonst");
        assert_eq!(normalize_label("FREIE WÄHLER"), "FW");
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(normalize_label("FDP"), "FDP");
        assert_eq!(normalize_label("CDU/CSU"), "CDU/CSU");
        assert_eq!(normalize_label(""), "");
    }
}
