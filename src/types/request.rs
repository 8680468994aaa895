use serde::Serialize;

use crate::types::user::Role;

#[derive(Debug, Serialize)]
pub(crate) struct LoginData {
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterData {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) address: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewUser {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) address: String,
    pub(crate) role: Role,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewStore {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) address: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssignOwner {
    pub(crate) owner_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RatingData {
    pub(crate) rating: u8,
    pub(crate) store_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdatePasswordData {
    pub(crate) current_password: String,
    pub(crate) new_password: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub(crate) enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Column ordering for the admin tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Sort {
    pub(crate) sort_by: String,
    pub(crate) order: SortOrder,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            sort_by: "createdAt".into(),
            order: SortOrder::Desc,
        }
    }
}

impl Sort {
    /// Clicking the same ascending column flips it to descending; anything else sorts ascending.
    pub(crate) fn toggle(&self, column: &str) -> Self {
        let order = match (self.sort_by == column, self.order) {
            (true, SortOrder::Asc) => SortOrder::Desc,
            _ => SortOrder::Asc,
        };

        Self {
            sort_by: column.to_owned(),
            order,
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserFilters {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) address: String,
    #[serde(serialize_with = "role_or_empty")]
    pub(crate) role: Option<Role>,
    #[serde(flatten)]
    pub(crate) sort: Sort,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoreFilters {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) address: String,
    #[serde(flatten)]
    pub(crate) sort: Sort,
}

/// Store search on the user dashboard. Empty terms are left out of the query.
#[derive(Debug, Default, Serialize)]
pub(crate) struct StoreSearch {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub(crate) name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub(crate) address: String,
}

fn role_or_empty<S: serde::Serializer>(role: &Option<Role>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(role.map(|role| role.as_str()).unwrap_or_default())
}
