use tracing_subscriber::EnvFilter;

use crate::settings::AppSettings;

/// Install the global `tracing` subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(settings: &AppSettings) {
    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|e| {
        eprintln!("invalid log filter {:?}: {}", settings.log_filter, e);
        EnvFilter::new("info")
    });

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    #[cfg(not(test))]
    let builder = builder.with_writer(std::io::stderr);
    #[cfg(test)]
    let builder = builder.with_test_writer();

    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        let settings = AppSettings {
            log_filter: "not a [valid filter".into(),
            ..AppSettings::default()
        };
        init(&settings);
        init(&AppSettings::default());
        tracing::info!("logging initialised");
    }
}
