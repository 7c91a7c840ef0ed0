use anyhow::{Context, Result};

const DEFAULT_CODEFORCES_API_URL: &str = "https://codeforces.com/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub api_keys: String,
    pub codeforces_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            host: var("HOST").context("Cannot load HOST env variable")?,
            port: var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: var("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            api_keys: var("API_KEYS").unwrap_or_default(),
            codeforces_api_url: var("CODEFORCES_API_URL")
                .unwrap_or_else(|| DEFAULT_CODEFORCES_API_URL.to_string()),
        })
    }
}
