//! Environment-driven configuration.
//!
//! Every setting falls back to its default when the variable is missing or
//! does not parse, so a bare `cargo run --bin monitor` works out of the box.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::models::Instrument;
use crate::services::yahoo::DEFAULT_BASE_URL;

const DEFAULT_INSTRUMENTS: [(&str, &str); 10] = [
    ("EURUSD=X", "EUR/USD"),
    ("BRL=X", "USD/BRL"),
    ("^BVSP", "IBOVESPA"),
    ("^GSPC", "S&P 500"),
    ("PETR4.SA", "Petrobras"),
    ("VALE3.SA", "Vale"),
    ("ITUB4.SA", "Itaú"),
    ("AAPL", "Apple"),
    ("MSFT", "Microsoft"),
    ("TSLA", "Tesla"),
];

/// Deployment environment, used to pick the log format.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn default_instruments() -> Vec<Instrument> {
    DEFAULT_INSTRUMENTS
        .iter()
        .map(|(ticker, name)| Instrument::new(*ticker, *name))
        .collect()
}

/// Parse `TICKER:Name,TICKER:Name`. An entry without `:` is named after its
/// ticker; repeated tickers keep their first occurrence.
pub fn parse_instruments(raw: &str) -> Vec<Instrument> {
    let mut instruments: Vec<Instrument> = Vec::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (ticker, name) = match entry.split_once(':') {
            Some((ticker, name)) if !name.trim().is_empty() => (ticker.trim(), name.trim()),
            Some((ticker, _)) => (ticker.trim(), ticker.trim()),
            None => (entry, entry),
        };

        if ticker.is_empty() || instruments.iter().any(|i| i.ticker == ticker) {
            continue;
        }
        instruments.push(Instrument::new(ticker, name));
    }

    instruments
}

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub instruments: Vec<Instrument>,
    pub cadence: Duration,
    pub min_sleep: Duration,
    pub fetch_timeout: Duration,
    pub lookback_period: String,
    pub sampling_interval: String,
    pub output_path: PathBuf,
    pub data_source_url: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            instruments: default_instruments(),
            cadence: Duration::from_secs(5),
            min_sleep: Duration::from_millis(100),
            fetch_timeout: Duration::from_secs(10),
            lookback_period: "1d".to_string(),
            sampling_interval: "1m".to_string(),
            output_path: PathBuf::from("market_forecast.csv"),
            data_source_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl MonitorConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let instruments = env::var("MONITOR_INSTRUMENTS")
            .ok()
            .map(|raw| parse_instruments(&raw))
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.instruments);

        let cadence = env::var("CADENCE_SECONDS")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|s| s.is_finite() && *s > 0.0)
            .map(Duration::from_secs_f64)
            .unwrap_or(defaults.cadence);

        let min_sleep = env::var("MIN_SLEEP_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.min_sleep);

        let fetch_timeout = env::var("FETCH_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|s| *s > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.fetch_timeout);

        Self {
            instruments,
            cadence,
            min_sleep,
            fetch_timeout,
            lookback_period: non_empty_var("LOOKBACK_PERIOD").unwrap_or(defaults.lookback_period),
            sampling_interval: non_empty_var("SAMPLING_INTERVAL")
                .unwrap_or(defaults.sampling_interval),
            output_path: non_empty_var("OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            data_source_url: non_empty_var("YAHOO_BASE_URL").unwrap_or(defaults.data_source_url),
        }
    }

    pub fn tickers(&self) -> Vec<String> {
        self.instruments.iter().map(|i| i.ticker.clone()).collect()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
