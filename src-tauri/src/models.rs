use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw selections made in the form. Every field starts unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CycleInput {
    pub last_period_start: Option<NaiveDate>,
    pub cycle_length: Option<u32>,
    pub period_duration: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FertileWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CyclePrediction {
    pub next_period_start: NaiveDate,
    pub ovulation_day: NaiveDate,
    pub fertile_window: FertileWindow,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Predicted,
}

/// One entry of a single-choice selection control.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: u32,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOptions {
    pub cycle_length: Vec<SelectOption>,
    pub period_duration: Vec<SelectOption>,
}

/// Prediction block with every date already formatted for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictionView {
    pub next_period: String,
    pub ovulation_day: String,
    pub fertile_window: String,
}

/// Data returned to frontend for rendering the form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictorView {
    pub date_label: String,
    pub last_period_start: Option<NaiveDate>,
    pub cycle_length: Option<u32>,
    pub period_duration: Option<u32>,
    pub phase: Phase,
    pub prediction: Option<PredictionView>,
}
