pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod store_owner;
pub(crate) mod user;

use serde_json::Value;

use crate::core::client::Client;
use crate::core::error::Error;
use crate::core::session::Session;
use crate::types::request::UpdatePasswordData;
use crate::types::user::Role;
use crate::utils::validate::Validator;

/// Dashboards check their own role on load, whatever the route guard allowed.
pub(crate) fn require_role(session: &Session, role: Role) -> Result<(), Error> {
    if session.is_authenticated() && session.user_role() == Some(role) {
        Ok(())
    } else {
        Err(Error::Unauthenticated)
    }
}

pub(crate) async fn change_password(
    client: &Client,
    validator: &Validator,
    namespace: &str,
    data: UpdatePasswordData,
    confirmation: &str,
) -> Result<(), Error> {
    validator.password_change(&data, confirmation)?;

    client
        .put::<Value, _>(&format!("{}/change-password", namespace), &data)
        .await?;

    tracing::info!("password changed");

    Ok(())
}
