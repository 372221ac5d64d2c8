use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

/// How stored emails are compared against a submitted one when deciding
/// between create and update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmailMatch {
    /// Byte-for-byte equality.
    #[default]
    Exact,
    /// ASCII and Unicode case folding before comparison.
    CaseInsensitive,
}

impl EmailMatch {
    /// The lookup key a store should index `email` under.
    pub fn key(&self, email: &str) -> String {
        match self {
            EmailMatch::Exact => email.to_string(),
            EmailMatch::CaseInsensitive => email.to_lowercase(),
        }
    }
}

impl FromStr for EmailMatch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "exact" | "case_sensitive" => Ok(EmailMatch::Exact),
            "case_insensitive" | "insensitive" => Ok(EmailMatch::CaseInsensitive),
            other => Err(Error::Config(format!("Unknown email match policy: {}", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub email_match: EmailMatch,
    pub request_timeout: Option<Duration>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            database_max_connections: get_env_parse_or("DATABASE_MAX_CONNECTIONS", 10)?,
            email_match: get_env_parse_or("EMAIL_MATCH", EmailMatch::default())?,
            request_timeout: get_env_parse_opt::<u64>("REQUEST_TIMEOUT_SECS")?
                .map(Duration::from_secs),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_opt<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(None),
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(get_env_parse_opt(name)?.unwrap_or(default))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
