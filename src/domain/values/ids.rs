//! Identifier value types
//!
//! Opaque positive-integer identities. Construction rejects zero and
//! negative values so an id in hand is always a valid reference.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

macro_rules! id_type {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn new(value: i64) -> DomainResult<Self> {
                if value <= 0 {
                    return Err(DomainError::Validation(format!(
                        concat!($label, " must be positive, got {}"),
                        value
                    )));
                }
                Ok(Self(value))
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = DomainError;

            fn try_from(value: i64) -> DomainResult<Self> {
                Self::new(value)
            }
        }
    };
}

id_type!(AttendanceId, "attendance id");
id_type!(EmployeeId, "employee id");
id_type!(OutletId, "outlet id");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_are_accepted() {
        let id = EmployeeId::new(7).unwrap();
        assert_eq!(id.value(), 7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(
            AttendanceId::new(0),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn negative_is_rejected() {
        assert!(matches!(OutletId::new(-3), Err(DomainError::Validation(_))));
    }

    #[test]
    fn try_from_delegates_to_new() {
        assert!(EmployeeId::try_from(12).is_ok());
        assert!(EmployeeId::try_from(-1).is_err());
    }
}
