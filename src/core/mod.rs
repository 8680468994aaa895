pub(crate) mod client;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod fetch;
pub(crate) mod session;
pub(crate) mod state;
