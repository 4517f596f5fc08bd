//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use chrono::{DateTime, TimeZone};

/// Inline confirmation shown after a successful save.
/// Ex: "2024-05-01 13:37:00 - Tags saved successfully!"
pub(crate) fn saved_banner<Tz>(at: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{} - Tags saved successfully!", at.format("%Y-%m-%d %H:%M:%S"))
}

/// Field label for the metadata panel. Ex: "TITLE:"
pub(crate) fn field_label(key: &str) -> String {
    format!("{key}:")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_saved_banner_format() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 13, 37, 0).unwrap();
        assert_eq!(saved_banner(at), "2024-05-01 13:37:00 - Tags saved successfully!");
    }

    #[test]
    fn test_field_label() {
        assert_eq!(field_label("MUSICBRAINZ_TRACKID"), "MUSICBRAINZ_TRACKID:");
    }
}
