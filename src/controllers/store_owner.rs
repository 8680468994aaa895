use reqwest::StatusCode;
use tracing::instrument;

use crate::controllers::change_password;
use crate::core::client::Client;
use crate::core::error::Error;
use crate::types::request::UpdatePasswordData;
use crate::types::response::OwnerDashboard;
use crate::utils::validate::Validator;

const NO_STORE_ASSIGNED: &str = "No store assigned to you yet. Please contact admin.";

#[derive(Clone, Debug)]
pub(crate) struct StoreOwnerController {
    client: Client,
    validator: Validator,
}

impl StoreOwnerController {
    pub(crate) fn new(client: Client, validator: Validator) -> Self {
        Self { client, validator }
    }

    #[instrument(skip_all)]
    pub(crate) async fn dashboard(&self) -> Result<OwnerDashboard, Error> {
        match self.client.get::<OwnerDashboard>("/store-owner/dashboard").await {
            Err(e) if e.status() == Some(StatusCode::NOT_FOUND) => Err(Error::Http {
                status: StatusCode::NOT_FOUND,
                message: NO_STORE_ASSIGNED.into(),
            }),
            result => result,
        }
    }

    pub(crate) async fn change_password(
        &self,
        data: UpdatePasswordData,
        confirmation: &str,
    ) -> Result<(), Error> {
        change_password(
            &self.client,
            &self.validator,
            "/store-owner",
            data,
            confirmation,
        )
        .await
    }
}
