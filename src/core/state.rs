use crate::controllers::admin::AdminController;
use crate::controllers::auth::AuthController;
use crate::controllers::store_owner::StoreOwnerController;
use crate::controllers::user::UserController;
use crate::core::client::Client;
use crate::core::config::Args;
use crate::core::error::ConfigError;
use crate::core::session::Session;
use crate::routes::router::Router;
use crate::token::store::FileStore;
use crate::utils::validate::Validator;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) session: Session,
    pub(crate) router: Router,
    pub(crate) auth_controller: AuthController,
    pub(crate) admin_controller: AdminController,
    pub(crate) user_controller: UserController,
    pub(crate) store_owner_controller: StoreOwnerController,
}

impl AppState {
    pub(crate) fn new(config: &Args) -> Result<Self, ConfigError> {
        let store = FileStore::new(&config.session_dir);

        tracing::debug!("session file at {}", store.path().display());

        Self::with_session(&config.api_base, Session::new(store), config.enforce_roles)
    }

    pub(crate) fn with_session(
        api_base: &str,
        session: Session,
        enforce_roles: bool,
    ) -> Result<Self, ConfigError> {
        let client = Client::new(api_base, session.clone())?;
        let validator = Validator::new()?;

        Ok(AppState {
            session: session.clone(),
            router: Router::new(session, enforce_roles),
            auth_controller: AuthController::new(client.clone(), validator.clone()),
            admin_controller: AdminController::new(client.clone(), validator.clone()),
            user_controller: UserController::new(client.clone(), validator.clone()),
            store_owner_controller: StoreOwnerController::new(client, validator),
        })
    }
}
