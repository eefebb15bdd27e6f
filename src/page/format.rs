use chrono::{DateTime, FixedOffset, Locale, Utc};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::catalog::model::Price;

pub const ZERO_PRICE_TEXT: &str = "Rp. 0";
pub const COVER_PLACEHOLDER: &str = "no-image.png";

/// `Rp75.000`, `Rp12.500,50`; zero or missing prices read `Rp. 0`.
pub fn format_rupiah(price: Option<Price>) -> String {
    let Some(price) = price.filter(|p| !p.is_zero()) else {
        return ZERO_PRICE_TEXT.to_owned();
    };

    let mut out = format!("Rp{}", group_thousands(price.rupiah()));
    if price.sen() != 0 {
        out.push_str(&format!(",{:02}", price.sen()));
    }
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Long Indonesian date, e.g. `17 Agustus 2024`, in the given offset.
pub fn format_date_id(at: DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset)
        .format_localized("%-d %B %Y", Locale::id_ID)
        .to_string()
}

pub fn cover_url(storage_base_url: &str, cover: Option<&str>) -> String {
    let cover = cover
        .map(|c| c.trim().trim_start_matches('/'))
        .filter(|c| !c.is_empty())
        .unwrap_or(COVER_PLACEHOLDER);
    format!("{}/{cover}", storage_base_url.trim_end_matches('/'))
}

pub fn order_message(title: &str) -> String {
    format!("Halo, saya tertarik dengan buku \"{title}\"")
}

/// WhatsApp deep link with the order message pre-filled.
pub fn whatsapp_link(contact_number: &str, title: &str) -> String {
    let message = order_message(title);
    let text = utf8_percent_encode(&message, NON_ALPHANUMERIC);
    format!("https://wa.me/{contact_number}?text={text}")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    #[test]
    fn zero_and_missing_prices_use_fixed_text() {
        assert_eq!(format_rupiah(None), "Rp. 0");
        assert_eq!(format_rupiah(Some(Price(0))), "Rp. 0");
    }

    #[test]
    fn rupiah_uses_dot_grouping() {
        assert_eq!(format_rupiah(Some(Price::from_rupiah(50_000))), "Rp50.000");
        assert_eq!(format_rupiah(Some(Price::from_rupiah(75_000))), "Rp75.000");
        assert_eq!(format_rupiah(Some(Price::from_rupiah(999))), "Rp999");
        assert_eq!(
            format_rupiah(Some(Price::from_rupiah(1_234_567))),
            "Rp1.234.567"
        );
        assert_eq!(format_rupiah(Some(Price(1_250_050))), "Rp12.500,50");
        assert_eq!(format_rupiah(Some(Price(5))), "Rp0,05");
    }

    #[test]
    fn date_is_long_indonesian_in_offset() {
        let wib = FixedOffset::east_opt(7 * 3600).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 8, 16, 20, 0, 0).unwrap();
        assert_eq!(format_date_id(at, wib), "17 Agustus 2024");

        let at = Utc.with_ymd_and_hms(2023, 1, 5, 1, 0, 0).unwrap();
        assert_eq!(format_date_id(at, wib), "5 Januari 2023");
    }

    #[test]
    fn cover_falls_back_to_placeholder() {
        let base = "http://127.0.0.1:8000/storage/";
        assert_eq!(
            cover_url(base, Some("covers/a.jpg")),
            "http://127.0.0.1:8000/storage/covers/a.jpg"
        );
        assert_eq!(
            cover_url(base, None),
            "http://127.0.0.1:8000/storage/no-image.png"
        );
        assert_eq!(
            cover_url(base, Some("  ")),
            "http://127.0.0.1:8000/storage/no-image.png"
        );
    }

    #[test]
    fn whatsapp_link_keeps_plain_titles_readable() {
        assert_eq!(
            whatsapp_link("62812", "Laut Biru"),
            "https://wa.me/62812?text=Halo%2C%20saya%20tertarik%20dengan%20buku%20%22Laut%20Biru%22"
        );
    }

    #[test]
    fn whatsapp_link_encodes_message() {
        assert_eq!(
            whatsapp_link("6285156172215", "Laut & Biru"),
            "https://wa.me/6285156172215?text=Halo%2C%20saya%20tertarik%20dengan%20buku%20%22Laut%20%26%20Biru%22"
        );
    }
}
