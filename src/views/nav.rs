use crate::core::session::Session;
use crate::routes::Route;
use crate::types::user::Role;

pub(crate) const TITLE: &str = "Rating System";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum NavItem {
    Link(&'static str, Route),
    Logout,
}

pub(crate) fn items(session: &Session) -> Vec<NavItem> {
    if !session.is_authenticated() {
        return vec![
            NavItem::Link("Login", Route::Login),
            NavItem::Link("Register", Route::Register),
        ];
    }

    let mut items = Vec::with_capacity(2);

    match session.user_role() {
        Some(Role::SystemAdmin) => items.push(NavItem::Link("Admin", Route::Admin)),
        Some(Role::NormalUser) => items.push(NavItem::Link("Dashboard", Route::User)),
        Some(Role::StoreOwner) => items.push(NavItem::Link("Store", Route::StoreOwner)),
        None => {}
    }

    items.push(NavItem::Logout);
    items
}

pub(crate) fn render(session: &Session) -> String {
    let links = items(session)
        .into_iter()
        .map(|item| match item {
            NavItem::Link(label, route) => format!("{} ({})", label, route),
            NavItem::Logout => "Logout".to_owned(),
        })
        .collect::<Vec<_>>()
        .join(" | ");

    format!("{} [/] :: {}", TITLE, links)
}
