use crate::core::session::Session;
use crate::routes::Route;
use crate::types::user::Role;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Access {
    Granted,
    Denied { redirect: Route },
}

/// Gate in front of a protected view.
///
/// An unauthenticated visitor goes to the login view and the destination is
/// forgotten. `roles` are only checked when enforcement is on; otherwise any
/// authenticated visitor gets in and the view is left to check its own role.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Guard {
    roles: &'static [Role],
    enforce_roles: bool,
}

impl Guard {
    pub(crate) const fn new(roles: &'static [Role]) -> Self {
        Self {
            roles,
            enforce_roles: false,
        }
    }

    pub(crate) const fn enforcing(mut self, enforce_roles: bool) -> Self {
        self.enforce_roles = enforce_roles;
        self
    }

    pub(crate) fn check(&self, session: &Session) -> Access {
        if !session.is_authenticated() {
            return Access::Denied {
                redirect: Route::Login,
            };
        }

        if self.enforce_roles {
            let allowed = session
                .user_role()
                .is_some_and(|role| self.roles.contains(&role));

            if !allowed {
                tracing::debug!("role not permitted for this view");
                return Access::Denied {
                    redirect: Route::Login,
                };
            }
        }

        Access::Granted
    }
}
