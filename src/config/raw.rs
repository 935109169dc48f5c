use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("hbnb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Option<Api>,
    pub booking: Option<Booking>,
    pub session: Option<Session>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Api {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub request_timeout: Duration,
}

impl Default for Api {
    fn default() -> Self {
        Config::default().api.expect("API configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Booking {
    pub cleaning_fee: Option<f64>,
    pub service_fee: Option<f64>,
    pub check_in_time: Option<String>,
}

impl Default for Booking {
    fn default() -> Self {
        Config::default().booking.expect("Booking configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Session {
    pub dir: PathBuf,
}

impl Default for Session {
    fn default() -> Self {
        Config::default().session.expect("Session configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.api.is_some());
        assert!(cfg.booking.is_some());
        assert!(cfg.session.is_some());
    }

    #[test]
    fn default_api_config() {
        let cfg = Api::default();
        assert_eq!(cfg.base_url, "http://localhost:5000");
        assert_eq!(cfg.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn partial_booking_section() {
        let cfg: Config = toml::from_str(
            r#"
            [booking]
            service-fee = 99.5
            "#,
        )
        .unwrap();
        let booking = cfg.booking.unwrap();
        assert_eq!(booking.service_fee, Some(99.5));
        assert!(booking.cleaning_fee.is_none());
        assert!(cfg.api.is_none());
    }
}
