use anyhow::{anyhow, Result};

pub const TABLE_NAME_VAR: &str = "DYNAMODB_TABLE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup(TABLE_NAME_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| anyhow!("{} not set", TABLE_NAME_VAR))?;

        Ok(Self { table_name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_table_name() {
        let config = Config::from_lookup(|key| {
            (key == TABLE_NAME_VAR).then(|| "users-table".to_string())
        })
        .expect("table name is set");

        assert_eq!(config.table_name, "users-table");
    }

    #[test]
    fn missing_table_name_is_an_error() {
        let error = Config::from_lookup(|_| None).expect_err("nothing is set");
        assert_eq!(error.to_string(), "DYNAMODB_TABLE not set");
    }

    #[test]
    fn blank_table_name_is_an_error() {
        let error = Config::from_lookup(|_| Some("  ".to_string())).expect_err("blank value");
        assert!(error.to_string().contains(TABLE_NAME_VAR));
    }
}
