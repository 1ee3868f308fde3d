use dioxus::prelude::*;
use store::{ClinicConfig, Section};

use views::{
    Accounting, AppShell, Doctor, Executive, ForgotPassword, Login, Management, Patient, Profile,
    Reception, Register, ResetPassword,
};

mod settings;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password/:token")]
    ResetPassword { token: String },
    #[layout(AppShell)]
        #[route("/patient")]
        Patient {},
        #[route("/reception")]
        Reception {},
        #[route("/doctor")]
        Doctor {},
        #[route("/accounting")]
        Accounting {},
        #[route("/management")]
        Management {},
        #[route("/executive")]
        Executive {},
        #[route("/profile")]
        Profile {},
}

impl Route {
    fn for_section(section: Section) -> Route {
        match section {
            Section::Patient => Route::Patient {},
            Section::Reception => Route::Reception {},
            Section::Doctor => Route::Doctor {},
            Section::Accounting => Route::Accounting {},
            Section::Management => Route::Management {},
            Section::Executive => Route::Executive {},
            Section::Profile => Route::Profile {},
        }
    }

    fn section(&self) -> Option<Section> {
        match self {
            Route::Patient {} => Some(Section::Patient),
            Route::Reception {} => Some(Section::Reception),
            Route::Doctor {} => Some(Section::Doctor),
            Route::Accounting {} => Some(Section::Accounting),
            Route::Management {} => Some(Section::Management),
            Route::Executive {} => Some(Section::Executive),
            Route::Profile {} => Some(Section::Profile),
            _ => None,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .ok();

    let config = match settings::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring unreadable settings: {}", e);
            ClinicConfig::default()
        }
    };
    tracing::info!("Using API at {}", config.api.base_url);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<ClinicConfig>();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::CLINIC_CSS }
        ui::AuthProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if state.loading {
            return;
        }
        match state.role() {
            Some(role) => nav.replace(Route::for_section(role.home())),
            None => nav.replace(Route::Login {}),
        };
    });

    rsx! {
        div { class: "page", p { class: "muted", "Loading…" } }
    }
}
