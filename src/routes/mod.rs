pub(crate) mod guard;
pub(crate) mod router;

use std::fmt::Display;

/// Client-side locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Root,
    Login,
    Register,
    Admin,
    User,
    StoreOwner,
    NotFound(String),
}

impl Route {
    /// Query strings, fragments and trailing slashes are ignored. Matching is case-insensitive.
    pub(crate) fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        match path.to_ascii_lowercase().as_str() {
            "" => Route::Root,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/admin" => Route::Admin,
            "/user" => Route::User,
            "/store-owner" => Route::StoreOwner,
            _ => Route::NotFound(path.to_owned()),
        }
    }

    pub(crate) fn path(&self) -> &str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Admin => "/admin",
            Route::User => "/user",
            Route::StoreOwner => "/store-owner",
            Route::NotFound(path) => path,
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Root);
        assert_eq!(Route::parse(""), Route::Root);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/register/"), Route::Register);
        assert_eq!(Route::parse("/Admin"), Route::Admin);
        assert_eq!(Route::parse("/user?name=corner"), Route::User);
        assert_eq!(Route::parse("/store-owner#ratings"), Route::StoreOwner);
    }

    #[test]
    fn test_parse_wildcard() {
        assert_eq!(
            Route::parse("/dashboard"),
            Route::NotFound("/dashboard".into())
        );
        assert_eq!(
            Route::parse("/admin/users"),
            Route::NotFound("/admin/users".into())
        );
    }

    #[test]
    fn test_paths_round_trip() {
        for route in [
            Route::Root,
            Route::Login,
            Route::Register,
            Route::Admin,
            Route::User,
            Route::StoreOwner,
        ] {
            assert_eq!(Route::parse(route.path()), route);
        }
    }
}
