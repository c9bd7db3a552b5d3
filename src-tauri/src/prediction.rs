use chrono::{Duration, NaiveDate};

use crate::models::{CyclePrediction, FertileWindow};

/// Days between ovulation and the start of the following period.
pub const LUTEAL_PHASE_DAYS: i64 = 14;
/// Fertile window opens this many days before ovulation...
pub const FERTILE_DAYS_BEFORE: i64 = 5;
/// ...and closes this many days after it.
pub const FERTILE_DAYS_AFTER: i64 = 1;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("All fields are required!")]
    MissingInput,
    #[error("date out of range")]
    OutOfRange,
}

/// Predict the next period, ovulation day and fertile window from the start
/// of the last period and the average cycle length in days.
pub fn predict(last_period_start: NaiveDate, cycle_length: u32) -> Result<CyclePrediction, PredictError> {
    let cycle_length = i64::from(cycle_length);

    let next_period_start = shift(last_period_start, cycle_length)?;
    let ovulation_day = shift(last_period_start, cycle_length - LUTEAL_PHASE_DAYS)?;
    let fertile_start = shift(ovulation_day, -FERTILE_DAYS_BEFORE)?;
    let fertile_end = shift(ovulation_day, FERTILE_DAYS_AFTER)?;

    Ok(CyclePrediction {
        next_period_start,
        ovulation_day,
        fertile_window: FertileWindow {
            start: fertile_start,
            end: fertile_end,
        },
    })
}

fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate, PredictError> {
    date.checked_add_signed(Duration::days(days))
        .ok_or(PredictError::OutOfRange)
}
