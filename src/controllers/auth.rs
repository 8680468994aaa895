use serde_json::Value;
use tracing::instrument;

use crate::core::client::Client;
use crate::core::error::Error;
use crate::routes::Route;
use crate::types::request::{LoginData, RegisterData};
use crate::types::response;
use crate::utils::validate::Validator;

#[derive(Clone, Debug)]
pub(crate) struct AuthController {
    client: Client,
    validator: Validator,
}

impl AuthController {
    pub(crate) fn new(client: Client, validator: Validator) -> Self {
        Self { client, validator }
    }

    /// Stores the issued token and hands back the root route, which dispatches by role.
    #[instrument(skip_all)]
    pub(crate) async fn login(&self, data: LoginData) -> Result<Route, Error> {
        self.validator.login(&data)?;

        let response = self
            .client
            .post::<response::Login, _>("/auth/login", &data)
            .await?;

        self.client.session().login(&response.token)?;

        tracing::info!("logged in");

        Ok(Route::Root)
    }

    #[instrument(skip_all)]
    pub(crate) async fn register(&self, data: RegisterData) -> Result<Route, Error> {
        self.validator.registration(&data)?;

        self.client
            .post::<Value, _>("/auth/register", &data)
            .await?;

        tracing::info!("registered");

        Ok(Route::Login)
    }

    pub(crate) fn logout(&self) -> Result<Route, Error> {
        self.client.session().logout()?;

        Ok(Route::Login)
    }
}
