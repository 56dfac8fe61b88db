use std::collections::HashMap;

use crate::error::AppError;

/// Decoded query string that keeps every value of a repeated key.
#[derive(Debug, Default)]
pub struct QueryParams {
    values: HashMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn parse(query: Option<&str>) -> Self {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        if let Some(query) = query {
            for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
                values
                    .entry(key.into_owned())
                    .or_default()
                    .push(value.into_owned());
            }
        }
        Self { values }
    }

    /// Last value given for `key`.
    pub fn string(&self, key: &str) -> Option<String> {
        self.values.get(key).and_then(|v| v.last()).cloned()
    }

    pub fn required_string(&self, key: &str) -> Result<String, AppError> {
        self.string(key).ok_or_else(|| {
            AppError::BadRequest(format!("Missing required query parameter '{}'", key))
        })
    }

    /// Every value given for `key`, in request order. Fails when there are none.
    pub fn required_list(&self, key: &str) -> Result<Vec<String>, AppError> {
        match self.values.get(key) {
            Some(list) if !list.is_empty() => Ok(list.clone()),
            _ => Err(AppError::BadRequest(format!(
                "Missing required query parameter '{}'",
                key
            ))),
        }
    }

    pub fn bool(&self, key: &str) -> Result<Option<bool>, AppError> {
        self.string(key)
            .map(|raw| {
                parse_bool(&raw).ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Query parameter '{}' must be a boolean, got '{}'",
                        key, raw
                    ))
                })
            })
            .transpose()
    }

    pub fn int(&self, key: &str) -> Result<Option<i64>, AppError> {
        self.string(key)
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|_| {
                    AppError::BadRequest(format!(
                        "Query parameter '{}' must be an integer, got '{}'",
                        key, raw
                    ))
                })
            })
            .transpose()
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}
