mod app;

pub use app::UsersViewer;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_PATH: &str = "assets/config.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub api_url: String,
    #[serde(default)]
    pub env: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;

    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = serde_json::from_str(text).context("Invalid config")?;
    Ok(config)
}

pub fn users_url(api_url: &str) -> String {
    format!("{}/users", api_url.trim_end_matches('/'))
}

pub fn fetch_users(api_url: &str) -> Result<Vec<User>> {
    let users = reqwest::blocking::get(users_url(api_url))?
        .error_for_status()?
        .json()?;

    Ok(users)
}

/// Prefers the HTTP status when the API answered, otherwise the error chain.
pub fn describe_fetch_error(error: &anyhow::Error) -> String {
    match error
        .downcast_ref::<reqwest::Error>()
        .and_then(reqwest::Error::status)
    {
        Some(status) => format!("Error when fetching users: {}", status.as_u16()),
        None => format!("Error when fetching users: {:#}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config() {
        let config = parse_config(r#"{"apiUrl": "https://api.example.com/dev", "env": "dev"}"#)
            .expect("valid config");

        assert_eq!(
            config,
            Config {
                api_url: "https://api.example.com/dev".to_string(),
                env: "dev".to_string(),
            }
        );
    }

    #[test]
    fn config_requires_api_url() {
        assert!(parse_config(r#"{"env": "dev"}"#).is_err());
    }

    #[test]
    fn missing_config_file_names_the_path() {
        let error = load_config("does/not/exist.json").expect_err("no such file");
        assert!(error.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn builds_users_url() {
        assert_eq!(users_url("https://api.example.com"), "https://api.example.com/users");
        assert_eq!(users_url("https://api.example.com/prod/"), "https://api.example.com/prod/users");
    }

    #[test]
    fn deserializes_users_from_handler_body() {
        let body = r#"[{"id":"1","name":"Alice","address":"1 Main St"},{"id":"2","name":"Bob","age":40}]"#;
        let users: Vec<User> = serde_json::from_str(body).expect("valid body");

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].address, "1 Main St");
        assert_eq!(users[1].name, "Bob");
        assert_eq!(users[1].address, "");
    }

    #[test]
    fn describes_transport_errors() {
        let error = anyhow::anyhow!("connection refused");
        assert_eq!(
            describe_fetch_error(&error),
            "Error when fetching users: connection refused"
        );
    }
}
