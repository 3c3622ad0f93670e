use crate::utils::error::{Result, SignupError};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 確認 host 與 port 能組成合法的 HTTP 位址
pub fn validate_bind_address(field_name: &str, host: &str, port: u16) -> Result<()> {
    validate_non_empty_string(field_name, host)?;
    validate_range(field_name, port, 1, u16::MAX)?;

    let candidate = format!("http://{}:{}/", host, port);
    match Url::parse(&candidate) {
        Ok(url) if url.host_str().is_some() => Ok(()),
        Ok(_) => Err(SignupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: "Address has no host component".to_string(),
        }),
        Err(e) => Err(SignupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: format!("Invalid host: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SignupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SignupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(SignupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SignupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_entries(field_name: &str, values: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value.as_str()) {
            return Err(SignupError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SignupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bind_address() {
        assert!(validate_bind_address("server", "127.0.0.1", 8000).is_ok());
        assert!(validate_bind_address("server", "localhost", 80).is_ok());
        assert!(validate_bind_address("server", "0.0.0.0", 0).is_err());
        assert!(validate_bind_address("server", "", 8000).is_err());
        assert!(validate_bind_address("server", "bad host", 8000).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_participants", 12, 1).is_ok());
        assert!(validate_positive_number("max_participants", 0, 1).is_err());
    }

    #[test]
    fn test_validate_unique_entries() {
        let emails = vec![
            "michael@mergington.edu".to_string(),
            "daniel@mergington.edu".to_string(),
        ];
        assert!(validate_unique_entries("participants", &emails).is_ok());

        let duplicated = vec![
            "michael@mergington.edu".to_string(),
            "michael@mergington.edu".to_string(),
        ];
        assert!(validate_unique_entries("participants", &duplicated).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "./activities.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }
}
