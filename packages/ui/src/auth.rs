//! Authentication context and the shared API handle.
//!
//! [`AuthProvider`] owns four context signals (auth state, config, base
//! client, activity log) and exposes them to views through [`ApiHandle`], a
//! `Copy` bundle that event handlers can move into their closures.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{AuthSession, ClinicConfig, Role, User};

use crate::activity_log::{log_activity, ActivityLog, LogLevel};
use crate::repo::make_repo;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<AuthSession>,
    /// True until the persisted session has been restored.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    fn ready(session: Option<AuthSession>) -> Self {
        Self {
            session,
            loading: false,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }
}

pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>()
}

/// Everything a view needs to call the backend and report the outcome.
#[derive(Clone, Copy)]
pub struct ApiHandle {
    base: Signal<ApiClient>,
    auth: Signal<AuthState>,
    config: Signal<ClinicConfig>,
    log: Signal<ActivityLog>,
}

impl ApiHandle {
    /// Client carrying the current bearer token.
    pub fn client(&self) -> ApiClient {
        let token = self.auth.read().token();
        self.base.read().with_token(token)
    }

    pub fn config(&self) -> ClinicConfig {
        self.config.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.auth.read().user().cloned()
    }

    fn actor(&self) -> Option<String> {
        self.auth.peek().user().map(|u| u.display_name().to_string())
    }

    pub fn sign_in(&self, session: AuthSession) {
        let mut auth = self.auth;
        let mut log = self.log;
        let name = session.user.display_name().to_string();
        log_activity(
            &mut log,
            LogLevel::Success,
            &format!("Signed in as {} ({})", name, session.user.role.label()),
            Some(name),
        );
        persist_session(Some(session.clone()));
        auth.set(AuthState::ready(Some(session)));
    }

    pub fn sign_out(&self) {
        let mut auth = self.auth;
        let mut log = self.log;
        let actor = self.actor();
        persist_session(None);
        auth.set(AuthState::ready(None));
        log_activity(&mut log, LogLevel::Info, "Signed out", actor);
    }

    /// Replace the signed-in user after a profile edit.
    pub fn update_user(&self, user: User) {
        let mut auth = self.auth;
        let Some(mut session) = auth.peek().session.clone() else {
            return;
        };
        session.user = user;
        persist_session(Some(session.clone()));
        auth.set(AuthState::ready(Some(session)));
    }

    pub fn save_config(&self, config: ClinicConfig) {
        let mut base = self.base;
        let mut current = self.config;
        if base.peek().base_url() != config.api.base_url.trim_end_matches('/') {
            base.set(ApiClient::new(config.api.base_url.clone()));
        }
        let to_store = config.clone();
        spawn(async move {
            if let Err(e) = make_repo().set_config(&to_store).await {
                tracing::error!("Failed to persist config: {}", e);
            }
        });
        current.set(config);
        self.done("Settings saved");
    }

    /// Record a failed call and return the banner text. A 401 on a live
    /// session signs the user out.
    pub fn fail(&self, err: &ApiError, action: &str) -> String {
        let mut log = self.log;
        let message = err.user_message(action);
        tracing::warn!("{}: {}", message, err);
        log_activity(&mut log, LogLevel::Error, &message, self.actor());
        if err.is_unauthorized() && self.auth.peek().session.is_some() {
            self.sign_out();
        }
        message
    }

    pub fn done(&self, message: &str) {
        let mut log = self.log;
        tracing::info!("{}", message);
        log_activity(&mut log, LogLevel::Success, message, self.actor());
    }
}

fn persist_session(session: Option<AuthSession>) {
    spawn(async move {
        let repo = make_repo();
        match session {
            Some(session) => {
                if let Err(e) = repo.save_session(&session).await {
                    tracing::error!("Failed to persist session: {}", e);
                }
            }
            None => repo.clear_session().await,
        }
    });
}

/// Provider component that manages authentication state.
/// `config` is the platform default, overridden by a config saved on this device.
#[component]
pub fn AuthProvider(config: ClinicConfig, children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    let mut config_signal = use_signal(|| config.clone());
    let mut base = use_signal(|| ApiClient::new(config.api.base_url.clone()));
    let mut log = use_signal(ActivityLog::default);

    use_context_provider(|| auth_state);
    use_context_provider(|| config_signal);
    use_context_provider(|| log);
    use_context_provider(|| ApiHandle {
        base,
        auth: auth_state,
        config: config_signal,
        log,
    });

    // Restore config and session, then confirm the token is still accepted.
    let fallback_url = config.api.base_url.clone();
    let _ = use_resource(move || {
        let fallback_url = fallback_url.clone();
        async move {
            let repo = make_repo();
            let mut client = ApiClient::new(fallback_url);
            if let Some(stored) = repo.stored_config().await {
                client = ApiClient::new(stored.api.base_url.clone());
                base.set(client.clone());
                config_signal.set(stored);
            }

            let Some(session) = repo.load_session().await else {
                auth_state.set(AuthState::ready(None));
                return;
            };

            match client.with_token(Some(session.token.clone())).current_user().await {
                Ok(user) => {
                    let session = AuthSession { user, ..session };
                    if let Err(e) = repo.save_session(&session).await {
                        tracing::warn!("Failed to refresh stored session: {}", e);
                    }
                    auth_state.set(AuthState::ready(Some(session)));
                }
                Err(e) if e.is_unauthorized() => {
                    tracing::info!("Stored session rejected, signing out");
                    repo.clear_session().await;
                    auth_state.set(AuthState::ready(None));
                }
                Err(e) => {
                    // Backend unreachable: keep the session, pages will report errors.
                    tracing::warn!("Could not verify session: {}", e);
                    log_activity(
                        &mut log,
                        LogLevel::Warning,
                        "Server unreachable, working with the saved session",
                        Some(session.user.display_name().to_string()),
                    );
                    auth_state.set(AuthState::ready(Some(session)));
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "btn btn-secondary btn-small".to_string())] class: String,
) -> Element {
    let api = use_api();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| api.sign_out(),
            "{label}"
        }
    }
}
