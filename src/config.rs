use chrono::{FixedOffset, Offset as _, Utc};

pub const DEFAULT_STORAGE_BASE_URL: &str = "http://127.0.0.1:8000/storage";
pub const DEFAULT_CONTACT_NUMBER: &str = "6285156172215";
pub const DEFAULT_SITE_NAME: &str = "Optimal Untuk Negeri";
pub const DEFAULT_RECOMMENDED_COUNT: usize = 5;
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 7;

/// Static values the page is rendered against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Base URL covers are served from; cover filenames are appended.
    pub storage_base_url: String,
    /// WhatsApp number (international format, digits only) for the order link.
    pub contact_number: String,
    pub site_name: String,
    pub recommended_count: usize,
    /// Offset used to turn stored UTC timestamps into a calendar date.
    pub utc_offset_hours: i32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_base_url: DEFAULT_STORAGE_BASE_URL.to_owned(),
            contact_number: DEFAULT_CONTACT_NUMBER.to_owned(),
            site_name: DEFAULT_SITE_NAME.to_owned(),
            recommended_count: DEFAULT_RECOMMENDED_COUNT,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

impl SiteConfig {
    /// Defaults overridden by `BOOKPAGE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let storage_base_url = non_empty("BOOKPAGE_STORAGE_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_owned())
            .unwrap_or(defaults.storage_base_url);
        let contact_number = non_empty("BOOKPAGE_CONTACT_NUMBER")
            .filter(|v| v.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or(defaults.contact_number);
        let site_name = non_empty("BOOKPAGE_SITE_NAME").unwrap_or(defaults.site_name);
        let recommended_count = non_empty("BOOKPAGE_RECOMMENDED_COUNT")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| (1..=50).contains(v))
            .unwrap_or(defaults.recommended_count);
        let utc_offset_hours = non_empty("BOOKPAGE_UTC_OFFSET_HOURS")
            .and_then(|v| v.parse::<i32>().ok())
            .filter(|v| (-12..=14).contains(v))
            .unwrap_or(defaults.utc_offset_hours);

        Self {
            storage_base_url,
            contact_number,
            site_name,
            recommended_count,
            utc_offset_hours,
        }
    }

    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).unwrap_or_else(|| Utc.fix())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(SiteConfig::from_lookup(lookup(&[])), SiteConfig::default());
    }

    #[test]
    fn overrides_are_trimmed_and_validated() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("BOOKPAGE_STORAGE_BASE_URL", " https://cdn.example.com/storage/ "),
            ("BOOKPAGE_CONTACT_NUMBER", "+62 812"),
            ("BOOKPAGE_SITE_NAME", "Toko Buku"),
            ("BOOKPAGE_RECOMMENDED_COUNT", "0"),
            ("BOOKPAGE_UTC_OFFSET_HOURS", "8"),
        ]));

        assert_eq!(config.storage_base_url, "https://cdn.example.com/storage");
        assert_eq!(config.contact_number, DEFAULT_CONTACT_NUMBER);
        assert_eq!(config.site_name, "Toko Buku");
        assert_eq!(config.recommended_count, DEFAULT_RECOMMENDED_COUNT);
        assert_eq!(config.utc_offset().local_minus_utc(), 8 * 3600);
    }
}
