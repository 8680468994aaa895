use chrono::{DateTime, Utc};
use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::controllers::require_role;
use crate::core::error::Error;
use crate::core::state::AppState;
use crate::routes::Route;
use crate::token::claims;
use crate::types::request::{
    LoginData, NewStore, NewUser, RegisterData, Sort, StoreFilters, StoreSearch,
    UpdatePasswordData, UserFilters,
};
use crate::types::user::Role;
use crate::views::{self, Listing, Page};

#[derive(Debug, Parser)]
#[command(name = "storerate", version, about = "Store rating client")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Navigate to a page, e.g. `/`, `/admin`, `/user`, `/store-owner`
    Open {
        #[arg(default_value = "/")]
        path: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Log in and open your dashboard
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        address: String,
    },
    Logout,
    /// Show who the stored session belongs to
    Whoami,
    /// Rate a store from 1 to 5, replacing your previous rating of it
    Rate { store_id: i64, rating: u8 },
    /// Change your password
    Password {
        #[arg(long)]
        current: String,
        #[arg(long = "new")]
        new_password: String,
        #[arg(long)]
        confirm: String,
    },
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Debug, Subcommand)]
pub(crate) enum AdminCommand {
    /// Create a user with any role
    AddUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        address: String,
        #[arg(long, default_value = "NORMAL_USER")]
        role: Role,
    },
    /// Create a store, optionally assigning its owner
    AddStore {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        owner_id: Option<i64>,
    },
}

#[derive(Debug, ClapArgs)]
pub(crate) struct FilterArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    address: String,
    /// Only list users with this role
    #[arg(long)]
    role: Option<Role>,
    /// Column to sort admin listings by, ascending
    #[arg(long)]
    sort_by: Option<String>,
    /// Toggle the sort column a second time, making it descending
    #[arg(long, requires = "sort_by")]
    desc: bool,
}

impl FilterArgs {
    fn into_listing(self) -> Listing {
        let mut sort = Sort::default();

        // each flag is one click on the column header
        if let Some(column) = &self.sort_by {
            sort = sort.toggle(column);

            if self.desc {
                sort = sort.toggle(column);
            }
        }

        Listing {
            users: UserFilters {
                name: self.name.clone(),
                email: self.email.clone(),
                address: self.address.clone(),
                role: self.role,
                sort: sort.clone(),
            },
            stores: StoreFilters {
                name: self.name.clone(),
                email: self.email,
                address: self.address.clone(),
                sort,
            },
            search: StoreSearch {
                name: self.name,
                address: self.address,
            },
        }
    }
}

fn show(requested: &str, page: &Page) {
    tracing::debug!(route = %page.route, view = ?page.view, "rendered");

    if Route::parse(requested) != page.route {
        println!("(redirected to {})\n", page.route);
    }

    println!("{}", page);
}

async fn open(state: &AppState, route: &Route) {
    let page = views::open(state, route.path(), Listing::default()).await;
    show(route.path(), &page);
}

pub(crate) async fn execute(state: &AppState, command: Command) -> Result<(), Error> {
    match command {
        Command::Open { path, filters } => {
            let page = views::open(state, &path, filters.into_listing()).await;
            show(&path, &page);
        }
        Command::Login { email, password } => {
            let next = state
                .auth_controller
                .login(LoginData { email, password })
                .await?;

            open(state, &next).await;
        }
        Command::Register {
            name,
            email,
            password,
            address,
        } => {
            let next = state
                .auth_controller
                .register(RegisterData {
                    name,
                    email,
                    password,
                    address,
                })
                .await?;

            println!("Registration successful! Please login.\n");
            open(state, &next).await;
        }
        Command::Logout => {
            state.auth_controller.logout()?;
            println!("Logged out.");
        }
        Command::Whoami => whoami(state),
        Command::Rate { store_id, rating } => {
            require_role(&state.session, Role::NormalUser)?;

            let store = state
                .user_controller
                .store(store_id)
                .await?
                .ok_or_else(|| Error::Http {
                    status: reqwest::StatusCode::NOT_FOUND,
                    message: format!("Store {} not found", store_id),
                })?;

            state.user_controller.rate(&store, rating).await?;

            println!("Rating submitted successfully!\n");
            open(state, &Route::User).await;
        }
        Command::Password {
            current,
            new_password,
            confirm,
        } => {
            if !state.session.is_authenticated() {
                return Err(Error::Unauthenticated);
            }

            let data = UpdatePasswordData {
                current_password: current,
                new_password,
            };

            match state.session.user_role() {
                Some(Role::StoreOwner) => {
                    state
                        .store_owner_controller
                        .change_password(data, &confirm)
                        .await?
                }
                _ => state.user_controller.change_password(data, &confirm).await?,
            }

            println!("Password changed successfully!");
        }
        Command::Admin(command) => {
            require_role(&state.session, Role::SystemAdmin)?;
            admin(state, command).await?;
            open(state, &Route::Admin).await;
        }
    }

    Ok(())
}

async fn admin(state: &AppState, command: AdminCommand) -> Result<(), Error> {
    match command {
        AdminCommand::AddUser {
            name,
            email,
            password,
            address,
            role,
        } => {
            state
                .admin_controller
                .add_user(NewUser {
                    name,
                    email,
                    password,
                    address,
                    role,
                })
                .await?;

            println!("User created successfully!\n");
        }
        AdminCommand::AddStore {
            name,
            email,
            address,
            owner_id,
        } => {
            state
                .admin_controller
                .add_store(
                    NewStore {
                        name,
                        email,
                        address,
                    },
                    owner_id,
                )
                .await?;

            println!("Store created successfully!\n");
        }
    }

    Ok(())
}

fn whoami(state: &AppState) {
    if !state.session.is_authenticated() {
        println!("Not logged in.");
        return;
    }

    match state.session.current_user() {
        Some(user) => println!("User #{} ({})", user.id, user.role),
        None => println!("Logged in with an unrecognised role."),
    }

    let expiry = state
        .session
        .token()
        .and_then(|token| claims::decode_expiry(&token).ok())
        .and_then(|exp| DateTime::<Utc>::from_timestamp(exp.floor() as i64, 0));

    if let Some(expiry) = expiry {
        println!("Session expires {}", expiry.format("%Y-%m-%d %H:%M:%S UTC"));
    }
}
