use anyhow::{anyhow, Result};

pub const DEFAULT_DATABASE_URL: &str = "database.db";
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub database_url: String,
    pub server_addr: String,
    pub frontend_url: Option<String>, // CORS origin, any origin when unset
    pub sentry_dsn: Option<String>,
    pub mail: MailConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &str| optional(key).ok_or_else(|| anyhow!("{} must be set", key));

        Ok(Self {
            database_url: optional("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            server_addr: optional("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string()),
            frontend_url: optional("FRONTEND_URL"),
            sentry_dsn: optional("SENTRY_DSN"),
            mail: MailConfig {
                smtp_host: optional("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
                smtp_username: required("SMTP_USERNAME")?,
                smtp_password: required("SMTP_PASSWORD")?,
                from: required("EMAIL_FROM")?,
                to: required("EMAIL_TO")?,
            },
        })
    }
}
