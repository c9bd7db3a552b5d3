use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::models::{PredictorView, SelectOptions};
use crate::predictor::CyclePredictor;
use crate::settings::AppSettings;

/// App state shared by every command: one predictor per window.
///
/// Errors come back as their display message, ready to be shown as a toast.
pub struct AppState {
    pub settings: AppSettings,
    pub predictor: Mutex<CyclePredictor>,
}

impl AppState {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings,
            predictor: Mutex::new(CyclePredictor::new()),
        }
    }

    fn predictor(&self) -> Result<MutexGuard<'_, CyclePredictor>, String> {
        self.predictor.lock().map_err(|e| e.to_string())
    }

    pub fn view(&self) -> Result<PredictorView, String> {
        Ok(self.predictor()?.view())
    }

    pub fn options(&self) -> SelectOptions {
        self.settings.options()
    }

    /// Select the last period start from a `YYYY-MM-DD` string.
    /// `None` or a blank string deselects the date.
    pub fn select_date(&self, date: Option<&str>) -> Result<PredictorView, String> {
        let date = match date.map(str::trim).filter(|d| !d.is_empty()) {
            Some(d) => Some(NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|e| e.to_string())?),
            None => None,
        };
        let mut predictor = self.predictor()?;
        match date {
            Some(date) => predictor.select_date(date),
            None => predictor.clear_date(),
        }
        Ok(predictor.view())
    }

    pub fn select_cycle_length(&self, days: u32) -> Result<PredictorView, String> {
        let days = self
            .settings
            .check_cycle_length(days)
            .map_err(|e| e.to_string())?;
        let mut predictor = self.predictor()?;
        predictor.select_cycle_length(days);
        Ok(predictor.view())
    }

    pub fn select_period_duration(&self, days: u32) -> Result<PredictorView, String> {
        let days = self
            .settings
            .check_period_duration(days)
            .map_err(|e| e.to_string())?;
        let mut predictor = self.predictor()?;
        predictor.select_period_duration(days);
        Ok(predictor.view())
    }

    pub fn predict(&self) -> Result<PredictorView, String> {
        let mut predictor = self.predictor()?;
        predictor.predict().map_err(|e| e.to_string())?;
        Ok(predictor.view())
    }

    pub fn reset(&self) -> Result<PredictorView, String> {
        let mut predictor = self.predictor()?;
        predictor.reset();
        Ok(predictor.view())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}
