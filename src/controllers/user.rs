use serde_json::Value;
use tracing::instrument;

use crate::controllers::change_password;
use crate::core::client::Client;
use crate::core::error::Error;
use crate::types::request::{RatingData, StoreSearch, UpdatePasswordData};
use crate::types::response::Store;
use crate::utils::validate::Validator;

#[derive(Clone, Debug)]
pub(crate) struct UserController {
    client: Client,
    validator: Validator,
}

impl UserController {
    pub(crate) fn new(client: Client, validator: Validator) -> Self {
        Self { client, validator }
    }

    #[instrument(skip_all)]
    pub(crate) async fn stores(&self, search: &StoreSearch) -> Result<Vec<Store>, Error> {
        let query = serde_urlencoded::to_string(search)?;

        let endpoint = match query.is_empty() {
            true => "/user/stores".to_owned(),
            false => format!("/user/stores?{}", query),
        };

        self.client.get(&endpoint).await
    }

    pub(crate) async fn store(&self, id: i64) -> Result<Option<Store>, Error> {
        Ok(self
            .stores(&StoreSearch::default())
            .await?
            .into_iter()
            .find(|store| store.id == id))
    }

    /// Updates the user's existing rating of `store`, or creates one.
    #[instrument(skip_all, fields(store = store.id))]
    pub(crate) async fn rate(&self, store: &Store, rating: u8) -> Result<(), Error> {
        self.validator.rating(rating)?;

        let body = RatingData {
            rating,
            store_id: store.id,
        };

        match store.user_rating_id {
            Some(rating_id) => {
                self.client
                    .put::<Value, _>(&format!("/user/ratings/{}", rating_id), &body)
                    .await?
            }
            None => self.client.post::<Value, _>("/user/ratings", &body).await?,
        };

        tracing::info!(rating, "rating submitted");

        Ok(())
    }

    pub(crate) async fn change_password(
        &self,
        data: UpdatePasswordData,
        confirmation: &str,
    ) -> Result<(), Error> {
        change_password(&self.client, &self.validator, "/user", data, confirmation).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::tests::{client, serve};
    use axum::extract::{Json, Path, RawQuery};
    use axum::routing::{get, post, put};
    use axum::Router;
    use parking_lot::Mutex;
    use serde_json::json;
    use std::sync::Arc;

    type Calls = Arc<Mutex<Vec<(String, Value)>>>;

    fn controller(url: &str) -> UserController {
        UserController::new(client(url), Validator::new().unwrap())
    }

    fn store(user_rating_id: Option<i64>) -> Store {
        Store {
            id: 3,
            name: "Corner Grocery".into(),
            address: "1 Main St".into(),
            overall_rating: None,
            user_rating: user_rating_id.map(|_| 2),
            user_rating_id,
        }
    }

    fn rating_backend(calls: Calls) -> Router {
        let created = calls.clone();

        Router::new()
            .route(
                "/user/ratings",
                post(move |Json(body): Json<Value>| {
                    let calls = created.clone();
                    async move {
                        calls.lock().push(("POST".into(), body));
                        Json(json!({ "id": 1 }))
                    }
                }),
            )
            .route(
                "/user/ratings/{id}",
                put(move |Path(id): Path<i64>, Json(body): Json<Value>| {
                    let calls = calls.clone();
                    async move {
                        calls.lock().push((format!("PUT {}", id), body));
                        Json(json!({ "id": id }))
                    }
                }),
            )
    }

    #[tokio::test]
    async fn test_search_query() {
        let app = Router::new().route(
            "/user/stores",
            get(|RawQuery(query): RawQuery| async move {
                Json(json!([{ "id": 1, "name": query.unwrap_or_default(), "address": "" }]))
            }),
        );
        let user = controller(&serve(app).await);

        let all = user.stores(&StoreSearch::default()).await.unwrap();
        assert_eq!(all[0].name, "");

        let filtered = user
            .stores(&StoreSearch {
                name: "corner".into(),
                address: String::new(),
            })
            .await
            .unwrap();
        assert_eq!(filtered[0].name, "name=corner");
    }

    #[tokio::test]
    async fn test_new_rating_is_posted() {
        let calls = Calls::default();
        let user = controller(&serve(rating_backend(calls.clone())).await);

        user.rate(&store(None), 4).await.unwrap();

        assert_eq!(
            *calls.lock(),
            vec![("POST".to_string(), json!({ "rating": 4, "storeId": 3 }))]
        );
    }

    #[tokio::test]
    async fn test_existing_rating_is_updated() {
        let calls = Calls::default();
        let user = controller(&serve(rating_backend(calls.clone())).await);

        user.rate(&store(Some(21)), 5).await.unwrap();

        assert_eq!(
            *calls.lock(),
            vec![("PUT 21".to_string(), json!({ "rating": 5, "storeId": 3 }))]
        );
    }

    #[tokio::test]
    async fn test_rating_out_of_range_is_not_sent() {
        let calls = Calls::default();
        let user = controller(&serve(rating_backend(calls.clone())).await);

        let err = user.rate(&store(None), 0).await.unwrap_err();

        assert_eq!(err.to_string(), "Please select a rating");
        assert!(calls.lock().is_empty());
    }

    #[tokio::test]
    async fn test_change_password() {
        let app = Router::new().route(
            "/user/change-password",
            put(|Json(body): Json<Value>| async move {
                assert_eq!(body["currentPassword"], "Old#pass1");
                assert_eq!(body["newPassword"], "New#pass12");
                Json(json!({ "message": "Password updated" }))
            }),
        );
        let user = controller(&serve(app).await);

        user.change_password(
            UpdatePasswordData {
                current_password: "Old#pass1".into(),
                new_password: "New#pass12".into(),
            },
            "New#pass12",
        )
        .await
        .unwrap();
    }
}
