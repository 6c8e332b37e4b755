use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Synthetic identity assigned when an employee is created.
///
/// Two employees that happen to share a name and username are still distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Display fields of an employee.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    /// City only.
    pub location: String,
    pub photo: String,
    pub cell: String,
    pub detailed_address: String,
    pub birthday: String,
    pub username: String,
}

/// A directory entry. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: EmployeeId,
    profile: Profile,
}

impl Employee {
    pub fn new(profile: Profile) -> Self {
        Self {
            id: EmployeeId::new(),
            profile,
        }
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn username(&self) -> &str {
        &self.profile.username
    }
}
