//! Employee read model

use serde::{Deserialize, Serialize};

use crate::domain::values::EmployeeId;

/// Employee as seen by the attendance subsystem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub full_name: String,
    /// Backing user account, when the employee can log in
    pub user_id: Option<i64>,
    pub is_active: bool,
}

impl Employee {
    pub fn new(id: EmployeeId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            user_id: None,
            is_active: true,
        }
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}
