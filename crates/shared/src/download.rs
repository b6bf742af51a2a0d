use chrono::{NaiveDate, Utc};

const FILE_PREFIX: &str = "dm-editor-map-";

/// PNG export name for the given day, e.g. `dm-editor-map-2024-07-01.png`.
pub fn download_filename(date: NaiveDate) -> String {
    format!("{FILE_PREFIX}{}.png", date.format("%Y-%m-%d"))
}

/// Export name stamped with today's UTC date.
pub fn todays_download_filename() -> String {
    download_filename(Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_pattern(name: &str) -> bool {
        let Some(rest) = name.strip_prefix(FILE_PREFIX) else {
            return false;
        };
        let Some(date) = rest.strip_suffix(".png") else {
            return false;
        };
        date.len() == 10 && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
    }

    #[test]
    fn test_download_filename_format() {
        let d = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(download_filename(d), "dm-editor-map-2024-07-01.png");
    }

    #[test]
    fn test_download_filename_pads_month_and_day() {
        let d = NaiveDate::from_ymd_opt(2023, 1, 9).unwrap();
        assert_eq!(download_filename(d), "dm-editor-map-2023-01-09.png");
    }

    #[test]
    fn test_todays_filename_uses_current_date() {
        let before = Utc::now().date_naive();
        let name = todays_download_filename();
        let after = Utc::now().date_naive();
        assert!(matches_pattern(&name), "unexpected name {name}");
        assert!(name == download_filename(before) || name == download_filename(after));
    }
}
