//! Sign-in, registration and password recovery screens.
//!
//! Navigation is left to the platform: each view reports its outcome
//! through callbacks and the platform pushes the matching route.

use dioxus::prelude::*;
use store::{validate, RegisterRequest, Role};

use crate::auth::use_api;
use crate::components::{Banner, Button, Field, Input, Notice};

use super::opt_text;

#[component]
pub fn LoginView(
    on_signed_in: EventHandler<Role>,
    on_register: EventHandler<()>,
    on_forgot: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut notice = use_signal(|| None::<Notice>);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if let Err(e) = validate::login(&email(), &password()) {
            notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        busy.set(true);
        spawn(async move {
            let result = api.client().login(&email(), &password()).await;
            busy.set(false);
            match result {
                Ok(session) => {
                    let role = session.user.role;
                    api.sign_in(session);
                    on_signed_in.call(role);
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "sign in")))),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-form",
                h1 { "Sign in" }
                Banner { notice }
                Field { label: "Email", html_for: "login-email",
                    Input {
                        id: "login-email",
                        r#type: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                Field { label: "Password", html_for: "login-password",
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                div {
                    class: "form-actions",
                    Button { disabled: busy(), onclick: submit,
                        if busy() { "Signing in…" } else { "Sign in" }
                    }
                }
                p {
                    button { class: "link", r#type: "button", onclick: move |_| on_forgot.call(()), "Forgot your password?" }
                }
                p {
                    "No account yet? "
                    button { class: "link", r#type: "button", onclick: move |_| on_register.call(()), "Create one" }
                }
            }
        }
    }
}

/// New accounts are created as patients by the backend.
#[component]
pub fn RegisterView(on_registered: EventHandler<Role>, on_login: EventHandler<()>) -> Element {
    let api = use_api();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut notice = use_signal(|| None::<Notice>);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if let Err(e) = validate::registration(&name(), &email(), &password(), &confirm()) {
            notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        let request = RegisterRequest {
            name: name().trim().to_string(),
            email: email().trim().to_lowercase(),
            password: password(),
            phone: opt_text(&phone()),
        };
        busy.set(true);
        spawn(async move {
            let result = api.client().register(&request).await;
            busy.set(false);
            match result {
                Ok(session) => {
                    let role = session.user.role;
                    api.sign_in(session);
                    on_registered.call(role);
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "register")))),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-form",
                h1 { "Create account" }
                Banner { notice }
                Field { label: "Full name", html_for: "reg-name",
                    Input { id: "reg-name", value: name(), oninput: move |evt: FormEvent| name.set(evt.value()) }
                }
                Field { label: "Email", html_for: "reg-email",
                    Input { id: "reg-email", r#type: "email", value: email(), oninput: move |evt: FormEvent| email.set(evt.value()) }
                }
                Field { label: "Phone (optional)", html_for: "reg-phone",
                    Input { id: "reg-phone", r#type: "tel", value: phone(), oninput: move |evt: FormEvent| phone.set(evt.value()) }
                }
                Field { label: "Password", html_for: "reg-password",
                    Input { id: "reg-password", r#type: "password", value: password(), oninput: move |evt: FormEvent| password.set(evt.value()) }
                }
                Field { label: "Confirm password", html_for: "reg-confirm",
                    Input { id: "reg-confirm", r#type: "password", value: confirm(), oninput: move |evt: FormEvent| confirm.set(evt.value()) }
                }
                div {
                    class: "form-actions",
                    Button { disabled: busy(), onclick: submit,
                        if busy() { "Creating…" } else { "Create account" }
                    }
                }
                p {
                    "Already registered? "
                    button { class: "link", r#type: "button", onclick: move |_| on_login.call(()), "Sign in" }
                }
            }
        }
    }
}

#[component]
pub fn ForgotPasswordView(on_login: EventHandler<()>) -> Element {
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut notice = use_signal(|| None::<Notice>);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if let Err(e) = validate::email(&email()) {
            notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        busy.set(true);
        spawn(async move {
            let result = api.client().forgot_password(&email()).await;
            busy.set(false);
            match result {
                Ok(message) => {
                    api.done("Password reset requested");
                    notice.set(Some(Notice::Success(message)));
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "request a password reset")))),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-form",
                h1 { "Reset your password" }
                p { class: "muted", "We will email you a link to choose a new password." }
                Banner { notice }
                Field { label: "Email", html_for: "forgot-email",
                    Input { id: "forgot-email", r#type: "email", value: email(), oninput: move |evt: FormEvent| email.set(evt.value()) }
                }
                div {
                    class: "form-actions",
                    Button { disabled: busy(), onclick: submit, "Send reset link" }
                }
                p {
                    button { class: "link", r#type: "button", onclick: move |_| on_login.call(()), "Back to sign in" }
                }
            }
        }
    }
}

/// Landing page of the emailed reset link; `token` comes from the URL.
#[component]
pub fn ResetPasswordView(token: String, on_login: EventHandler<()>) -> Element {
    let api = use_api();
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut notice = use_signal(|| None::<Notice>);
    let mut busy = use_signal(|| false);
    let mut finished = use_signal(|| false);

    let submit = move |_| {
        let token = token.clone();
        if let Err(e) = validate::reset_password(&token, &password(), &confirm()) {
            notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        busy.set(true);
        spawn(async move {
            let result = api.client().reset_password(&token, &password()).await;
            busy.set(false);
            match result {
                Ok(message) => {
                    api.done("Password reset");
                    password.set(String::new());
                    confirm.set(String::new());
                    finished.set(true);
                    notice.set(Some(Notice::Success(message)));
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "reset password")))),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-form",
                h1 { "Choose a new password" }
                Banner { notice }
                if !finished() {
                    Field { label: "New password", html_for: "reset-password",
                        Input { id: "reset-password", r#type: "password", value: password(), oninput: move |evt: FormEvent| password.set(evt.value()) }
                    }
                    Field { label: "Confirm password", html_for: "reset-confirm",
                        Input { id: "reset-confirm", r#type: "password", value: confirm(), oninput: move |evt: FormEvent| confirm.set(evt.value()) }
                    }
                    div {
                        class: "form-actions",
                        Button { disabled: busy(), onclick: submit, "Save password" }
                    }
                }
                p {
                    button { class: "link", r#type: "button", onclick: move |_| on_login.call(()), "Back to sign in" }
                }
            }
        }
    }
}
