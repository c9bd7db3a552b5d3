//! Long-form date rendering, e.g. "April 5th, 2024".

use chrono::{Datelike, NaiveDate};

use crate::models::{CyclePrediction, PredictionView};

pub const DATE_PLACEHOLDER: &str = "Pick a date";

pub fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

pub fn fertile_window(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} to {}", long_date(start), long_date(end))
}

pub fn date_label(date: Option<NaiveDate>) -> String {
    date.map(long_date)
        .unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
}

pub fn days_label(n: u32) -> String {
    format!("{} days", n)
}

pub fn prediction_view(prediction: &CyclePrediction) -> PredictionView {
    PredictionView {
        next_period: long_date(prediction.next_period_start),
        ovulation_day: long_date(prediction.ovulation_day),
        fertile_window: fertile_window(
            prediction.fertile_window.start,
            prediction.fertile_window.end,
        ),
    }
}

fn ordinal_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn long_date_uses_ordinal_day() {
        assert_eq!(long_date(date("2024-04-05")), "April 5th, 2024");
        assert_eq!(long_date(date("2024-01-01")), "January 1st, 2024");
        assert_eq!(long_date(date("2024-02-22")), "February 22nd, 2024");
        assert_eq!(long_date(date("2025-01-03")), "January 3rd, 2025");
        assert_eq!(long_date(date("2024-12-31")), "December 31st, 2024");
    }

    #[test]
    fn teens_take_th() {
        assert_eq!(long_date(date("2024-03-11")), "March 11th, 2024");
        assert_eq!(long_date(date("2024-03-12")), "March 12th, 2024");
        assert_eq!(long_date(date("2024-03-13")), "March 13th, 2024");
        assert_eq!(long_date(date("2024-03-21")), "March 21st, 2024");
        assert_eq!(long_date(date("2024-03-23")), "March 23rd, 2024");
    }

    #[test]
    fn fertile_window_joins_with_to() {
        assert_eq!(
            fertile_window(date("2024-12-31"), date("2025-01-06")),
            "December 31st, 2024 to January 6th, 2025"
        );
    }

    #[test]
    fn unset_date_shows_placeholder() {
        assert_eq!(date_label(None), "Pick a date");
        assert_eq!(date_label(Some(date("2024-07-04"))), "July 4th, 2024");
    }

    #[test]
    fn option_label() {
        assert_eq!(days_label(28), "28 days");
        assert_eq!(days_label(1), "1 days");
    }
}
