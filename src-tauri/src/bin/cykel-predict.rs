use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

use cykel_predict::{logging, AppSettings, CyclePredictor, PredictorView};

#[derive(Parser)]
#[command(name = "cykel-predict")]
#[command(about = "Predict the next period, ovulation day and fertile window")]
struct Cli {
    /// Start date of the last period (YYYY-MM-DD)
    #[arg(short = 's', long, value_name = "DATE")]
    last_period_start: Option<NaiveDate>,

    /// Average cycle length in days
    #[arg(short = 'c', long, value_name = "DAYS")]
    cycle_length: Option<u32>,

    /// Period duration in days
    #[arg(short = 'd', long, value_name = "DAYS")]
    period_duration: Option<u32>,

    /// Print the prediction as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let settings = AppSettings::from_env().context("failed to load settings")?;
    logging::init(&settings);

    let view = run(&args, &settings)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_prediction(&view);
    }
    Ok(())
}

/// Feed the flags into a predictor the way the form would and predict.
fn run(args: &Cli, settings: &AppSettings) -> anyhow::Result<PredictorView> {
    let mut predictor = CyclePredictor::new();
    if let Some(date) = args.last_period_start {
        predictor.select_date(date);
    }
    if let Some(days) = args.cycle_length {
        predictor.select_cycle_length(settings.check_cycle_length(days)?);
    }
    if let Some(days) = args.period_duration {
        predictor.select_period_duration(settings.check_period_duration(days)?);
    }

    predictor.predict()?;
    Ok(predictor.view())
}

fn print_prediction(view: &PredictorView) {
    let Some(prediction) = &view.prediction else {
        return;
    };
    println!("Your Cycle Prediction");
    println!("  Next Period Start: {}", prediction.next_period);
    println!("  Ovulation Day:     {}", prediction.ovulation_day);
    println!("  Fertile Window:    {}", prediction.fertile_window);
}
