use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

pub fn encode<T: Serialize>(entity: &T) -> Result<String> {
    Ok(serde_json::to_string(entity)?)
}

pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    Ok(serde_json::from_str(raw)?)
}

/// Decode a whole partition. Corrupt or missing data degrades to an empty
/// collection so a bad blob can never wedge every caller of the store.
pub fn decode_collection<T: DeserializeOwned>(key: &str, raw: Option<String>) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(key, %err, "discarding undecodable collection");
            Vec::new()
        }
    }
}

/// Legacy records carry ids as numbers, floats (epoch millis plus a random
/// fraction) or numeric strings. Accept all three.
pub fn flexible_id<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(id) => Ok(id),
        Raw::Float(id) => Ok(id as i64),
        Raw::Text(id) => id
            .trim()
            .parse::<f64>()
            .map(|v| v as i64)
            .map_err(|_| serde::de::Error::custom(format!("invalid id '{}'", id))),
    }
}

/// Numeric fields the forms stored as strings (`desiredSalary`).
pub fn flexible_opt_i64<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
        None,
    }

    match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Int(v)) => Ok(Some(v)),
        Some(Raw::Float(v)) => Ok(Some(v as i64)),
        Some(Raw::Text(v)) => Ok(v.trim().parse::<i64>().ok()),
        _ => Ok(None),
    }
}

/// Same tolerance for the optional string foreign keys (`employerId`).
pub fn flexible_opt_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        None,
    }

    match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(v)) => Ok(Some(v)),
        Some(Raw::Int(v)) => Ok(Some(v.to_string())),
        _ => Ok(None),
    }
}
