//! Evidentiary image references

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Reference to an evidentiary image (storage path or blob key)
///
/// Every check-in and check-out carries one; late arrivals may attach a
/// second supporting proof. Blank references are rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageProof(String);

impl ImageProof {
    pub fn new(reference: impl Into<String>) -> DomainResult<Self> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err(DomainError::Validation(
                "image proof reference must not be blank".into(),
            ));
        }
        Ok(Self(reference))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
