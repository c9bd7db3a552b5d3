use chrono::NaiveDate;

use crate::format;
use crate::models::{CycleInput, CyclePrediction, Phase, PredictorView};
use crate::prediction::{self, PredictError};

/// The cycle prediction form: the user's three selections plus the
/// prediction currently on display.
///
/// A displayed prediction is only replaced by another successful `predict`
/// or cleared by `reset`. Changing a selection afterwards leaves it as is.
#[derive(Debug, Clone, Default)]
pub struct CyclePredictor {
    input: CycleInput,
    prediction: Option<CyclePrediction>,
}

impl CyclePredictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &CycleInput {
        &self.input
    }

    pub fn prediction(&self) -> Option<&CyclePrediction> {
        self.prediction.as_ref()
    }

    pub fn phase(&self) -> Phase {
        match self.prediction {
            Some(_) => Phase::Predicted,
            None => Phase::Idle,
        }
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        tracing::debug!(%date, "last period start selected");
        self.input.last_period_start = Some(date);
    }

    /// Deselect the last period start. A displayed prediction stays.
    pub fn clear_date(&mut self) {
        tracing::debug!("last period start cleared");
        self.input.last_period_start = None;
    }

    pub fn select_cycle_length(&mut self, days: u32) {
        tracing::debug!(days, "cycle length selected");
        self.input.cycle_length = Some(days);
    }

    pub fn select_period_duration(&mut self, days: u32) {
        tracing::debug!(days, "period duration selected");
        self.input.period_duration = Some(days);
    }

    /// Compute and display a prediction from the current selections.
    ///
    /// Period duration must be selected but does not enter the calculation.
    pub fn predict(&mut self) -> Result<&CyclePrediction, PredictError> {
        let (start, cycle_length) = match self.input {
            CycleInput {
                last_period_start: Some(start),
                cycle_length: Some(cycle_length),
                period_duration: Some(_),
            } => (start, cycle_length),
            _ => {
                tracing::warn!(input = ?self.input, "prediction requested with missing input");
                return Err(PredictError::MissingInput);
            }
        };

        let prediction = prediction::predict(start, cycle_length)?;
        tracing::info!(
            next_period = %prediction.next_period_start,
            ovulation = %prediction.ovulation_day,
            fertile_start = %prediction.fertile_window.start,
            fertile_end = %prediction.fertile_window.end,
            "cycle predicted"
        );

        Ok(&*self.prediction.insert(prediction))
    }

    /// Clear every selection and the displayed prediction.
    pub fn reset(&mut self) {
        tracing::debug!("predictor reset");
        self.input = CycleInput::default();
        self.prediction = None;
    }

    pub fn view(&self) -> PredictorView {
        PredictorView {
            date_label: format::date_label(self.input.last_period_start),
            last_period_start: self.input.last_period_start,
            cycle_length: self.input.cycle_length,
            period_duration: self.input.period_duration,
            phase: self.phase(),
            prediction: self.prediction.as_ref().map(format::prediction_view),
        }
    }
}
