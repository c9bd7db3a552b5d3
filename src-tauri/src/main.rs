// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use cykel_predict::{commands, logging, AppSettings, AppState};

fn main() {
    let settings = AppSettings::from_env().unwrap_or_else(|e| {
        eprintln!("invalid settings, using defaults: {}", e);
        AppSettings::default()
    });
    logging::init(&settings);

    tauri::Builder::default()
        .manage(AppState::new(settings))
        .invoke_handler(tauri::generate_handler![
            commands::get_view,
            commands::get_options,
            commands::select_date,
            commands::select_cycle_length,
            commands::select_period_duration,
            commands::predict,
            commands::reset,
        ])
        .run(tauri::generate_context!())
        .expect("error while running cykel");
}
