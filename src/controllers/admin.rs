use serde_json::Value;
use tracing::instrument;

use crate::core::client::Client;
use crate::core::error::Error;
use crate::types::request::{AssignOwner, NewStore, NewUser, StoreFilters, UserFilters};
use crate::types::response::{self, AdminStore, Stats};
use crate::utils::validate::Validator;

#[derive(Clone, Debug)]
pub(crate) struct AdminController {
    client: Client,
    validator: Validator,
}

impl AdminController {
    pub(crate) fn new(client: Client, validator: Validator) -> Self {
        Self { client, validator }
    }

    #[instrument(skip_all)]
    pub(crate) async fn stats(&self) -> Result<Stats, Error> {
        self.client.get("/admin/dashboard").await
    }

    #[instrument(skip_all)]
    pub(crate) async fn users(&self, filters: &UserFilters) -> Result<Vec<response::User>, Error> {
        let query = serde_urlencoded::to_string(filters)?;

        self.client.get(&format!("/admin/users?{}", query)).await
    }

    #[instrument(skip_all)]
    pub(crate) async fn stores(&self, filters: &StoreFilters) -> Result<Vec<AdminStore>, Error> {
        let query = serde_urlencoded::to_string(filters)?;

        self.client.get(&format!("/admin/stores?{}", query)).await
    }

    #[instrument(skip_all)]
    pub(crate) async fn add_user(&self, user: NewUser) -> Result<(), Error> {
        self.validator.new_user(&user)?;

        self.client.post::<Value, _>("/admin/users", &user).await?;

        tracing::info!(role = %user.role, "user created");

        Ok(())
    }

    /// Creates the store, then assigns its owner when one is given.
    #[instrument(skip_all)]
    pub(crate) async fn add_store(
        &self,
        store: NewStore,
        owner_id: Option<i64>,
    ) -> Result<response::Created, Error> {
        self.validator.new_store(&store)?;

        let created = self
            .client
            .post::<response::Created, _>("/admin/stores", &store)
            .await?;

        if let Some(owner_id) = owner_id {
            self.client
                .put::<Value, _>(
                    &format!("/admin/stores/{}/owner", created.id),
                    &AssignOwner { owner_id },
                )
                .await?;
        }

        tracing::info!(id = created.id, "store created");

        Ok(created)
    }
}
