use crate::core::session::Session;
use crate::routes::guard::{Access, Guard};
use crate::routes::Route;
use crate::types::user::Role;
use crate::views::View;

const MAX_REDIRECTS: usize = 8;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Navigation {
    Render(View),
    Redirect(Route),
}

/// Where a navigation ended up.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Resolved {
    pub(crate) route: Route,
    pub(crate) view: View,
}

#[derive(Clone, Debug)]
pub(crate) struct Router {
    session: Session,
    enforce_roles: bool,
}

impl Router {
    pub(crate) fn new(session: Session, enforce_roles: bool) -> Self {
        Self {
            session,
            enforce_roles,
        }
    }

    fn guarded(&self, roles: &'static [Role], view: View) -> Navigation {
        match Guard::new(roles)
            .enforcing(self.enforce_roles)
            .check(&self.session)
        {
            Access::Granted => Navigation::Render(view),
            Access::Denied { redirect } => Navigation::Redirect(redirect),
        }
    }

    /// Landing page for visitors, role dashboard for everyone else.
    fn root(&self) -> Navigation {
        if !self.session.is_authenticated() {
            return Navigation::Render(View::Home);
        }

        match self.session.user_role() {
            Some(role) => Navigation::Redirect(role.dashboard()),
            None => Navigation::Redirect(Route::Login),
        }
    }

    /// A single routing step.
    pub(crate) fn resolve(&self, route: &Route) -> Navigation {
        match route {
            Route::Root => self.root(),
            Route::Login => Navigation::Render(View::Login),
            Route::Register => Navigation::Render(View::Register),
            Route::Admin => self.guarded(&[Role::SystemAdmin], View::Admin),
            Route::User => self.guarded(&[Role::NormalUser], View::User),
            Route::StoreOwner => self.guarded(&[Role::StoreOwner], View::StoreOwner),
            Route::NotFound(_) => Navigation::Render(View::NotFound),
        }
    }

    /// Follows redirects from `path` until something renders.
    pub(crate) fn navigate(&self, path: &str) -> Resolved {
        let mut route = Route::parse(path);

        for _ in 0..MAX_REDIRECTS {
            match self.resolve(&route) {
                Navigation::Render(view) => return Resolved { route, view },
                Navigation::Redirect(next) => {
                    tracing::debug!(from = %route, to = %next, "redirect");
                    route = next;
                }
            }
        }

        tracing::error!("too many redirects while navigating to {}", path);

        Resolved {
            route: Route::Login,
            view: View::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::claims::tests::token_for;
    use crate::token::store::MemoryStore;

    fn router(token: Option<String>, enforce_roles: bool) -> Router {
        let session = Session::new(MemoryStore::new());
        if let Some(token) = token {
            session.login(&token).unwrap();
        }
        Router::new(session, enforce_roles)
    }

    #[test]
    fn test_admin_lands_on_admin_dashboard() {
        let router = router(Some(token_for("SYSTEM_ADMIN", 3600)), false);

        assert_eq!(router.resolve(&Route::Root), Navigation::Redirect(Route::Admin));
        assert_eq!(
            router.navigate("/"),
            Resolved {
                route: Route::Admin,
                view: View::Admin
            }
        );
    }

    #[test]
    fn test_admin_deep_link_to_user_view_renders() {
        let router = router(Some(token_for("SYSTEM_ADMIN", 3600)), false);

        assert_eq!(router.resolve(&Route::User), Navigation::Render(View::User));
        assert_eq!(router.navigate("/user").view, View::User);
    }

    #[test]
    fn test_root_dispatch_per_role() {
        let cases = [
            ("NORMAL_USER", Route::User, View::User),
            ("STORE_OWNER", Route::StoreOwner, View::StoreOwner),
            ("SUPERVISOR", Route::Login, View::Login),
        ];

        for (role, route, view) in cases {
            let router = router(Some(token_for(role, 3600)), false);
            assert_eq!(router.navigate("/"), Resolved { route, view }, "{role}");
        }
    }

    #[test]
    fn test_visitor_sees_home() {
        let router = router(None, false);

        assert_eq!(router.navigate("/").view, View::Home);
    }

    #[test]
    fn test_visitor_redirected_from_guarded_routes() {
        let router = router(None, false);

        for path in ["/admin", "/user", "/store-owner"] {
            assert_eq!(
                router.navigate(path),
                Resolved {
                    route: Route::Login,
                    view: View::Login
                },
                "{path}"
            );
        }
    }

    #[test]
    fn test_expired_session_redirected_from_guarded_routes() {
        let router = router(Some(token_for("SYSTEM_ADMIN", -10)), false);

        assert!(!router.session.is_authenticated());
        for path in ["/admin", "/user", "/store-owner"] {
            assert_eq!(router.navigate(path).route, Route::Login, "{path}");
        }
        assert_eq!(router.navigate("/").view, View::Home);
    }

    #[test]
    fn test_public_routes() {
        let router = router(None, false);

        assert_eq!(router.navigate("/login").view, View::Login);
        assert_eq!(router.navigate("/register").view, View::Register);
        assert_eq!(
            router.navigate("/nowhere"),
            Resolved {
                route: Route::NotFound("/nowhere".into()),
                view: View::NotFound
            }
        );
    }

    #[test]
    fn test_enforced_roles_block_mismatched_dashboards() {
        let router = router(Some(token_for("NORMAL_USER", 3600)), true);

        assert_eq!(router.navigate("/admin").route, Route::Login);
        assert_eq!(router.navigate("/store-owner").route, Route::Login);
        assert_eq!(router.navigate("/user").view, View::User);
        assert_eq!(router.navigate("/").view, View::User);
    }
}
