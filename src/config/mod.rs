use anyhow::{anyhow, Result};
use hbnb_core::{
    cancellation::DEFAULT_CHECK_IN_TIME,
    pricing::Fees,
    usecases::BookingPolicy,
};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};
use time::{macros::format_description, Time};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "hbnb.toml";

pub const ENV_NAME_API_URL: &str = "HBNB_API_URL";

pub struct Config {
    pub api: Api,
    pub booking: BookingPolicy,
    pub session: Session,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_url) = env::var(ENV_NAME_API_URL) {
            cfg.api.base_url = api_url;
        }
        Ok(cfg)
    }
}

pub struct Api {
    /// Backend origin without the `/api/v1` prefix.
    pub base_url: String,
    pub request_timeout: Duration,
}

pub struct Session {
    /// File system directory for the session and favorites.
    pub dir: PathBuf,
}

fn parse_check_in_time(s: &str) -> Result<Time> {
    Time::parse(s.trim(), format_description!("[hour]:[minute]"))
        .map_err(|err| anyhow!("Invalid check-in time '{s}': {err}"))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            api,
            booking,
            session,
        } = from;

        let raw::Api {
            base_url,
            request_timeout,
        } = api.unwrap_or_default();
        if base_url.trim().is_empty() {
            return Err(anyhow!("Missing API base URL"));
        }
        let api = Api {
            base_url,
            request_timeout,
        };

        let raw::Booking {
            cleaning_fee,
            service_fee,
            check_in_time,
        } = booking.unwrap_or_default();
        let fees = Fees {
            cleaning: cleaning_fee.unwrap_or(Fees::DEFAULT_CLEANING),
            service: service_fee.unwrap_or(Fees::DEFAULT_SERVICE),
        };
        if fees.cleaning < 0.0 || fees.service < 0.0 {
            return Err(anyhow!("Fees must not be negative"));
        }
        let check_in_time = check_in_time
            .as_deref()
            .map(parse_check_in_time)
            .transpose()?
            .unwrap_or(DEFAULT_CHECK_IN_TIME);
        let booking = BookingPolicy {
            fees,
            check_in_time,
        };

        let raw::Session { dir } = session.unwrap_or_default();
        let session = Session { dir };

        Ok(Self {
            api,
            booking,
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg: Config = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(cfg.booking, BookingPolicy::default());
        assert_eq!(cfg.session.dir, PathBuf::from(".hbnb"));
    }

    #[test]
    fn custom_booking_policy() {
        let raw: raw::Config = toml::from_str(
            r#"
            [booking]
            cleaning-fee = 0.0
            check-in-time = "14:30"
            "#,
        )
        .unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert_eq!(cfg.booking.fees.cleaning, 0.0);
        assert_eq!(cfg.booking.fees.service, Fees::DEFAULT_SERVICE);
        assert_eq!(cfg.booking.check_in_time, time!(14:30));
        assert_eq!(cfg.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn reject_invalid_check_in_time() {
        let raw: raw::Config = toml::from_str(
            r#"
            [booking]
            check-in-time = "3pm"
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw).is_err());
    }

    #[test]
    fn reject_negative_fees() {
        let raw: raw::Config = toml::from_str(
            r#"
            [booking]
            service-fee = -1.0
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw).is_err());
    }
}
