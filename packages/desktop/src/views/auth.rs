use dioxus::prelude::*;
use store::Role;

use crate::Route;

/// Sends a visitor who already holds a session to their home dashboard.
fn use_signed_in_redirect() {
    let auth = ui::use_auth();
    let nav = use_navigator();
    use_effect(move || {
        let state = auth();
        if let (false, Some(role)) = (state.loading, state.role()) {
            nav.replace(Route::for_section(role.home()));
        }
    });
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    use_signed_in_redirect();

    rsx! {
        ui::views::LoginView {
            on_signed_in: move |role: Role| {
                nav.replace(Route::for_section(role.home()));
            },
            on_register: move |_| {
                nav.push(Route::Register {});
            },
            on_forgot: move |_| {
                nav.push(Route::ForgotPassword {});
            },
        }
    }
}

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    use_signed_in_redirect();

    rsx! {
        ui::views::RegisterView {
            on_registered: move |role: Role| {
                nav.replace(Route::for_section(role.home()));
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn ForgotPassword() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::ForgotPasswordView {
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn ResetPassword(token: String) -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::ResetPasswordView {
            token,
            on_login: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
