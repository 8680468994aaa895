pub(crate) mod nav;
pub(crate) mod pages;

use crate::controllers::require_role;
use crate::core::fetch::Resource;
use crate::core::state::AppState;
use crate::routes::Route;
use crate::types::request::{StoreFilters, StoreSearch, UserFilters};
use crate::types::user::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum View {
    Home,
    Login,
    Register,
    Admin,
    User,
    StoreOwner,
    NotFound,
}

impl View {
    /// The role a dashboard checks for itself when it loads.
    fn required_role(&self) -> Option<Role> {
        match self {
            View::Admin => Some(Role::SystemAdmin),
            View::User => Some(Role::NormalUser),
            View::StoreOwner => Some(Role::StoreOwner),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Page {
    pub(crate) route: Route,
    pub(crate) view: View,
    pub(crate) body: String,
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.body)
    }
}

/// Options the dashboards pass through to their listings.
#[derive(Debug, Default)]
pub(crate) struct Listing {
    pub(crate) users: UserFilters,
    pub(crate) stores: StoreFilters,
    pub(crate) search: StoreSearch,
}

/// Navigates to `path` and renders whatever view it settles on.
///
/// Load failures are shown inside the page; they never abort the navigation.
pub(crate) async fn open(state: &AppState, path: &str, listing: Listing) -> Page {
    let mut resolved = state.router.navigate(path);

    if let Some(role) = resolved.view.required_role() {
        if require_role(&state.session, role).is_err() {
            tracing::debug!(view = ?resolved.view, "dashboard role check failed");
            resolved = state.router.navigate(Route::Login.path());
        }
    }

    let body = match resolved.view {
        View::Home => pages::home(),
        View::Login => pages::login(),
        View::Register => pages::register(),
        View::NotFound => pages::not_found(resolved.route.path()),
        View::Admin => admin(state, listing).await,
        View::User => user(state, listing.search).await,
        View::StoreOwner => store_owner(state).await,
    };

    Page {
        body: format!("{}\n\n{}", nav::render(&state.session), body),
        route: resolved.route,
        view: resolved.view,
    }
}

fn failed(message: &str) -> String {
    format!("Error: {}", message)
}

async fn admin(state: &AppState, listing: Listing) -> String {
    let controller = state.admin_controller.clone();
    let stats = Resource::load(async move { controller.stats().await });

    let controller = state.admin_controller.clone();
    let filters = listing.users;
    let users = Resource::load(async move { controller.users(&filters).await });

    let controller = state.admin_controller.clone();
    let filters = listing.stores;
    let stores = Resource::load(async move { controller.stores(&filters).await });

    let (stats, users, stores) = tokio::join!(stats.ready(), users.ready(), stores.ready());

    match (stats, users, stores) {
        (Ok(stats), Ok(users), Ok(stores)) => pages::admin(&stats, &users, &stores),
        (Err(message), _, _) | (_, Err(message), _) | (_, _, Err(message)) => failed(&message),
    }
}

async fn user(state: &AppState, search: StoreSearch) -> String {
    let controller = state.user_controller.clone();
    let stores = Resource::load(async move { controller.stores(&search).await });

    match stores.ready().await {
        Ok(stores) => pages::user_stores(&stores),
        Err(message) => failed(&message),
    }
}

async fn store_owner(state: &AppState) -> String {
    let controller = state.store_owner_controller.clone();
    let dashboard = Resource::load(async move { controller.dashboard().await });

    match dashboard.ready().await {
        Ok(dashboard) => pages::store_owner(&dashboard),
        Err(message) => failed(&message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::tests::serve;
    use crate::core::session::Session;
    use crate::token::claims::tests::token_for;
    use crate::token::store::MemoryStore;
    use axum::extract::Json;
    use axum::http::StatusCode;
    use axum::routing::get;
    use serde_json::json;

    fn backend() -> axum::Router {
        axum::Router::new()
            .route(
                "/admin/dashboard",
                get(|| async { Json(json!({ "totalUsers": 3, "totalStores": 1, "totalRatings": 4 })) }),
            )
            .route("/admin/users", get(|| async { Json(json!([])) }))
            .route("/admin/stores", get(|| async { Json(json!([])) }))
            .route(
                "/user/stores",
                get(|| async {
                    Json(json!([{ "id": 1, "name": "Corner Grocery", "address": "1 Main St", "overallRating": 4 }]))
                }),
            )
            .route(
                "/store-owner/dashboard",
                get(|| async {
                    (StatusCode::NOT_FOUND, Json(json!({ "message": "Store not found" })))
                }),
            )
    }

    async fn state(token: Option<String>) -> AppState {
        let session = Session::new(MemoryStore::new());
        if let Some(token) = token {
            session.login(&token).unwrap();
        }
        AppState::with_session(&serve(backend()).await, session, false).unwrap()
    }

    #[tokio::test]
    async fn test_admin_root_renders_admin_dashboard() {
        let state = state(Some(token_for("SYSTEM_ADMIN", 3600))).await;

        let page = open(&state, "/", Listing::default()).await;

        assert_eq!(page.route, Route::Admin);
        assert!(page.body.contains("Total Users:   3"));
        assert!(page.body.contains("Admin (/admin) | Logout"));
    }

    #[tokio::test]
    async fn test_dashboard_checks_its_own_role() {
        let state = state(Some(token_for("SYSTEM_ADMIN", 3600))).await;

        // the guard lets any authenticated user through; the user dashboard does not
        assert_eq!(state.router.navigate("/user").view, View::User);

        let page = open(&state, "/user", Listing::default()).await;
        assert_eq!(page.route, Route::Login);
        assert_eq!(page.view, View::Login);
    }

    #[tokio::test]
    async fn test_user_dashboard_lists_stores() {
        let state = state(Some(token_for("NORMAL_USER", 3600))).await;

        let page = open(&state, "/user", Listing::default()).await;

        assert_eq!(page.view, View::User);
        assert!(page.body.contains("Corner Grocery"));
        assert!(page.body.contains("Overall Rating: 4.0"));
    }

    #[tokio::test]
    async fn test_owner_failure_rendered_inline() {
        let state = state(Some(token_for("STORE_OWNER", 3600))).await;

        let page = open(&state, "/store-owner", Listing::default()).await;

        assert_eq!(page.view, View::StoreOwner);
        assert!(page
            .body
            .ends_with("Error: No store assigned to you yet. Please contact admin."));
    }

    #[tokio::test]
    async fn test_visitor_pages() {
        let state = state(None).await;

        assert_eq!(open(&state, "/", Listing::default()).await.view, View::Home);
        assert_eq!(
            open(&state, "/admin", Listing::default()).await.view,
            View::Login
        );

        let page = open(&state, "/dashboard", Listing::default()).await;
        assert_eq!(page.view, View::NotFound);
        assert!(page.body.contains("Nothing lives at /dashboard"));
    }
}
