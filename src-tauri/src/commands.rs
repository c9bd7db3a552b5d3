use tauri::State;

use crate::models::{PredictorView, SelectOptions};
use crate::state::AppState;

#[tauri::command]
pub fn get_view(state: State<'_, AppState>) -> Result<PredictorView, String> {
    state.view()
}

#[tauri::command]
pub fn get_options(state: State<'_, AppState>) -> SelectOptions {
    state.options()
}

#[tauri::command]
pub fn select_date(
    date: Option<String>,
    state: State<'_, AppState>,
) -> Result<PredictorView, String> {
    state.select_date(date.as_deref())
}

#[tauri::command]
pub fn select_cycle_length(days: u32, state: State<'_, AppState>) -> Result<PredictorView, String> {
    state.select_cycle_length(days)
}

#[tauri::command]
pub fn select_period_duration(
    days: u32,
    state: State<'_, AppState>,
) -> Result<PredictorView, String> {
    state.select_period_duration(days)
}

#[tauri::command]
pub fn predict(state: State<'_, AppState>) -> Result<PredictorView, String> {
    state.predict()
}

#[tauri::command]
pub fn reset(state: State<'_, AppState>) -> Result<PredictorView, String> {
    state.reset()
}
