//! Formatting helpers for price displays.

use time::macros::format_description;
use time::Date;

pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("£{value:.2}"),
        None => "-".to_string(),
    }
}

pub fn format_delta(delta: f64) -> String {
    if delta > 0.0 {
        format!("+£{delta:.2}")
    } else if delta < 0.0 {
        format!("-£{:.2}", delta.abs())
    } else {
        "£0.00".to_string()
    }
}

pub fn format_rating(value: f64) -> String {
    format!("{value:.1}")
}

/// API date labels are ISO `YYYY-MM-DD`; anything else passes through as-is.
pub fn format_date_label(raw: &str) -> String {
    Date::parse(raw, &format_description!("[year]-[month]-[day]"))
        .ok()
        .and_then(|date| {
            date.format(&format_description!("[day padding:none] [month repr:short] [year]"))
                .ok()
        })
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_carries_sign_and_currency() {
        assert_eq!(format_delta(12.5), "+£12.50");
        assert_eq!(format_delta(-3.0), "-£3.00");
        assert_eq!(format_delta(0.0), "£0.00");
    }

    #[test]
    fn iso_dates_become_badges_and_other_labels_pass_through() {
        assert_eq!(format_date_label("2024-11-02"), "2 Nov 2024");
        assert_eq!(format_date_label("week 44"), "week 44");
    }
}
