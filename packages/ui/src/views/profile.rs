use dioxus::prelude::*;
use store::{validate, ClinicConfig, PasswordChange, ProfileUpdate};

use crate::auth::use_api;
use crate::components::{Banner, Button, Field, Input, Notice};

use super::opt_text;

/// Account details, password change and the connection settings stored on
/// this device.
#[component]
pub fn ProfileView() -> Element {
    let api = use_api();
    let user = api.user();
    let config = api.config();

    let mut name = use_signal(|| user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let mut email = use_signal(|| user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let mut phone = use_signal(|| {
        user.as_ref()
            .and_then(|u| u.phone.clone())
            .unwrap_or_default()
    });
    let mut profile_notice = use_signal(|| None::<Notice>);

    let mut current = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut password_notice = use_signal(|| None::<Notice>);

    let mut base_url = use_signal(|| config.api.base_url.clone());
    let mut page_size = use_signal(|| config.ui.page_size.to_string());
    let mut settings_notice = use_signal(|| None::<Notice>);

    let save_profile = move |_| {
        if name().trim().is_empty() {
            profile_notice.set(Some(Notice::Error("Name is required".to_string())));
            return;
        }
        if let Err(e) = validate::email(&email()) {
            profile_notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        let update = ProfileUpdate {
            name: Some(name().trim().to_string()),
            email: Some(email().trim().to_lowercase()),
            phone: opt_text(&phone()),
        };
        spawn(async move {
            match api.client().update_profile(&update).await {
                Ok(user) => {
                    api.update_user(user);
                    api.done("Profile updated");
                    profile_notice.set(Some(Notice::Success("Profile updated".to_string())));
                }
                Err(e) => profile_notice.set(Some(Notice::Error(api.fail(&e, "save profile")))),
            }
        });
    };

    let change_password = move |_| {
        if let Err(e) = validate::password_change(&current(), &new_password(), &confirm()) {
            password_notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        let change = PasswordChange {
            current_password: current(),
            new_password: new_password(),
        };
        spawn(async move {
            match api.client().change_password(&change).await {
                Ok(()) => {
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                    api.done("Password changed");
                    password_notice.set(Some(Notice::Success("Password changed".to_string())));
                }
                Err(e) => password_notice.set(Some(Notice::Error(api.fail(&e, "save password")))),
            }
        });
    };

    let save_settings = move |_| {
        let url = base_url().trim().to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            settings_notice.set(Some(Notice::Error(
                "API address must start with http:// or https://".to_string(),
            )));
            return;
        }
        let Some(size) = page_size().trim().parse::<usize>().ok().filter(|n| *n > 0) else {
            settings_notice.set(Some(Notice::Error("Rows per page must be a positive number".to_string())));
            return;
        };
        let mut next = api.config();
        next.api.base_url = url;
        next.ui.page_size = size;
        api.save_config(next);
        settings_notice.set(Some(Notice::Success("Settings saved".to_string())));
    };

    let reset_settings = move |_| {
        let defaults = ClinicConfig::default();
        base_url.set(defaults.api.base_url.clone());
        page_size.set(defaults.ui.page_size.to_string());
        settings_notice.set(None);
    };

    rsx! {
        h1 { class: "page-title", "Profile" }

        section {
            class: "section",
            h2 { class: "section-title", "Account" }
            Banner { notice: profile_notice }
            div {
                class: "form-grid",
                Field { label: "Name", html_for: "profile-name",
                    Input { id: "profile-name", value: name(), oninput: move |evt: FormEvent| name.set(evt.value()) }
                }
                Field { label: "Email", html_for: "profile-email",
                    Input { id: "profile-email", r#type: "email", value: email(), oninput: move |evt: FormEvent| email.set(evt.value()) }
                }
                Field { label: "Phone", html_for: "profile-phone",
                    Input { id: "profile-phone", r#type: "tel", value: phone(), oninput: move |evt: FormEvent| phone.set(evt.value()) }
                }
            }
            div { class: "form-actions", Button { onclick: save_profile, "Save profile" } }
        }

        section {
            class: "section",
            h2 { class: "section-title", "Password" }
            Banner { notice: password_notice }
            div {
                class: "form-grid",
                Field { label: "Current password", html_for: "pw-current",
                    Input { id: "pw-current", r#type: "password", value: current(), oninput: move |evt: FormEvent| current.set(evt.value()) }
                }
                Field { label: "New password", html_for: "pw-new",
                    Input { id: "pw-new", r#type: "password", value: new_password(), oninput: move |evt: FormEvent| new_password.set(evt.value()) }
                }
                Field { label: "Confirm new password", html_for: "pw-confirm",
                    Input { id: "pw-confirm", r#type: "password", value: confirm(), oninput: move |evt: FormEvent| confirm.set(evt.value()) }
                }
            }
            div { class: "form-actions", Button { onclick: change_password, "Change password" } }
        }

        section {
            class: "section",
            h2 { class: "section-title", "Connection" }
            Banner { notice: settings_notice }
            div {
                class: "form-grid",
                Field { label: "API address", html_for: "settings-url",
                    Input { id: "settings-url", r#type: "url", value: base_url(), oninput: move |evt: FormEvent| base_url.set(evt.value()) }
                }
                Field { label: "Rows per page", html_for: "settings-page-size",
                    Input { id: "settings-page-size", r#type: "number", value: page_size(), oninput: move |evt: FormEvent| page_size.set(evt.value()) }
                }
            }
            p { class: "muted", "Stored on this device only." }
            div {
                class: "form-actions",
                Button { onclick: save_settings, "Save settings" }
                Button { variant: crate::components::ButtonVariant::Secondary, onclick: reset_settings, "Restore defaults" }
            }
        }
    }
}
