use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::routes::Route;

pub(crate) type SubjectId = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum Role {
    SystemAdmin,
    NormalUser,
    StoreOwner,
}

impl Role {
    pub(crate) const ALL: [Role; 3] = [Role::SystemAdmin, Role::NormalUser, Role::StoreOwner];

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Role::SystemAdmin => "SYSTEM_ADMIN",
            Role::NormalUser => "NORMAL_USER",
            Role::StoreOwner => "STORE_OWNER",
        }
    }

    /// The one dashboard this role lands on.
    pub(crate) fn dashboard(&self) -> Route {
        match self {
            Role::SystemAdmin => Route::Admin,
            Role::NormalUser => Route::User,
            Role::StoreOwner => Route::StoreOwner,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Role::SystemAdmin => "SYSTEM ADMIN",
            Role::NormalUser => "NORMAL USER",
            Role::StoreOwner => "STORE OWNER",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown role: {0}")]
pub(crate) struct UnknownRole(String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CurrentUser {
    pub(crate) id: SubjectId,
    pub(crate) role: Role,
}
