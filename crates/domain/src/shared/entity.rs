use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;
use uuid::Uuid;

pub trait Entity {
    fn id(&self) -> &ID;
}

/// Identifier of a record as issued by the backing store.
///
/// The store hands out uuids, but hand-entered and imported records may carry
/// any non-blank string, so the value is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ID(String);

impl ID {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn inner(self) -> String {
        self.0
    }
}

impl Default for ID {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(InvalidIDError::Malformed(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl Serialize for ID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IDVisitor;

        impl<'de> Visitor<'de> for IDVisitor {
            type Value = ID;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A valid string id representation")
            }

            fn visit_str<E>(self, value: &str) -> Result<ID, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<ID>()
                    .map_err(|_| E::custom(format!("Malformed id: {}", value)))
            }

            // Numeric primary keys show up in older exports
            fn visit_u64<E>(self, value: u64) -> Result<ID, E>
            where
                E: serde::de::Error,
            {
                Ok(ID(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<ID, E>
            where
                E: serde::de::Error,
            {
                Ok(ID(value.to_string()))
            }
        }

        deserializer.deserialize_any(IDVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_rejects_blank_ids() {
        assert!("".parse::<ID>().is_err());
        assert!("   ".parse::<ID>().is_err());
        assert!("c1".parse::<ID>().is_ok());
    }

    #[test]
    fn it_deserializes_string_and_numeric_ids() {
        let id: ID = serde_json::from_str("\"8f9c6b1e-1c1f-4d8e-9b0b-5a4f3c2d1e0f\"").unwrap();
        assert_eq!(id.as_str(), "8f9c6b1e-1c1f-4d8e-9b0b-5a4f3c2d1e0f");
        let id: ID = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");
        assert!(serde_json::from_str::<ID>("\"\"").is_err());
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ID::new(), ID::new());
    }
}
