//! Plain-text page bodies.

use std::fmt::Write;

use crate::types::response::{AdminStore, OwnerDashboard, Stats, Store, User};
use crate::utils::validate::{ADDRESS_MAX, NAME_LENGTH, PASSWORD_LENGTH, RATING_RANGE};

pub(crate) fn stars(rating: u8) -> String {
    (RATING_RANGE.0..=RATING_RANGE.1)
        .map(|star| if star <= rating { '★' } else { '☆' })
        .collect()
}

fn score(score: Option<f64>, missing: &str) -> String {
    match score {
        Some(score) => format!("{:.1}", score),
        None => missing.to_owned(),
    }
}

pub(crate) fn home() -> String {
    [
        "Welcome to the Store Rating System",
        "",
        "Browse stores, rate them from 1 to 5, and see what others think.",
        "",
        "  storerate login --email <email>      sign in",
        "  storerate register ...               create an account",
    ]
    .join("\n")
}

pub(crate) fn login() -> String {
    [
        "Login",
        "",
        "  storerate login --email <email> --password <password>",
        "",
        "Don't have an account? See `storerate register --help`.",
    ]
    .join("\n")
}

pub(crate) fn register() -> String {
    format!(
        "Register\n\n  \
         Full name     {}-{} characters\n  \
         Email         a valid address\n  \
         Password      {}-{} characters, 1 uppercase, 1 special\n  \
         Address       at most {} characters\n\n\
         Already have an account? See `storerate login --help`.",
        NAME_LENGTH.0, NAME_LENGTH.1, PASSWORD_LENGTH.0, PASSWORD_LENGTH.1, ADDRESS_MAX
    )
}

pub(crate) fn not_found(path: &str) -> String {
    format!(
        "404 - Page Not Found\n\nNothing lives at {}. Try `storerate open /`.",
        path
    )
}

pub(crate) fn admin(stats: &Stats, users: &[User], stores: &[AdminStore]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Admin Dashboard\n");
    let _ = writeln!(out, "Total Users:   {}", stats.total_users);
    let _ = writeln!(out, "Total Stores:  {}", stats.total_stores);
    let _ = writeln!(out, "Total Ratings: {}", stats.total_ratings);

    let _ = writeln!(out, "\nUsers ({})", users.len());
    for user in users {
        let _ = writeln!(
            out,
            "  #{:<5} {:<30} {:<30} {:<12} {}",
            user.id,
            user.name,
            user.email,
            user.role.label(),
            user.address
        );
    }

    let _ = writeln!(out, "\nStores ({})", stores.len());
    for store in stores {
        let _ = writeln!(
            out,
            "  #{:<5} {:<30} {:<30} {:<10} {}",
            store.id,
            store.name,
            store.email,
            score(store.average_rating, "No ratings"),
            store.address
        );
    }

    out.trim_end().to_owned()
}

pub(crate) fn user_stores(stores: &[Store]) -> String {
    let mut out = format!("Available Stores ({})\n", stores.len());

    for store in stores {
        let _ = writeln!(out, "\n#{} {}", store.id, store.name);
        let _ = writeln!(out, "  Address:        {}", store.address);
        let _ = writeln!(
            out,
            "  Overall Rating: {}",
            score(store.overall_rating, "No ratings yet")
        );

        match store.user_rating {
            Some(rating) => {
                let _ = writeln!(out, "  Your Rating:    {} ({} stars)", stars(rating), rating);
                let _ = writeln!(out, "  Update with:    storerate rate {} <1-5>", store.id);
            }
            None => {
                let _ = writeln!(out, "  Rate with:      storerate rate {} <1-5>", store.id);
            }
        }
    }

    out.trim_end().to_owned()
}

pub(crate) fn store_owner(dashboard: &OwnerDashboard) -> String {
    let Some(store) = &dashboard.store else {
        return "Store Owner Dashboard\n\nNo store is linked to your account yet.".into();
    };

    let mut out = String::from("Store Owner Dashboard\n\n");

    let _ = writeln!(out, "{}", store.name);
    let _ = writeln!(out, "  Email:   {}", store.email);
    let _ = writeln!(out, "  Address: {}", store.address);
    let _ = writeln!(
        out,
        "\nAverage Rating: {}",
        score(dashboard.average_rating, "No ratings")
    );
    let _ = writeln!(out, "Total Ratings:  {}", dashboard.total_ratings);
    let _ = writeln!(out, "\nRecent Ratings");

    if dashboard.recent_ratings.is_empty() {
        let _ = writeln!(out, "  No ratings yet.");
    }

    for rating in &dashboard.recent_ratings {
        let _ = writeln!(
            out,
            "  {}  {:<24} {}",
            stars(rating.rating),
            rating
                .user
                .as_ref()
                .map(|user| user.name.as_str())
                .unwrap_or("Anonymous"),
            rating.created_at.format("%Y-%m-%d")
        );
    }

    out.trim_end().to_owned()
}
