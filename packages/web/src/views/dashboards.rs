use dioxus::prelude::*;
use store::Section;

use crate::Route;

#[component]
pub fn AppShell() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();
    let section = route.section().unwrap_or(Section::Profile);

    rsx! {
        ui::RoleShell {
            section,
            on_navigate: move |target: Section| {
                nav.push(Route::for_section(target));
            },
            on_signed_out: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Patient() -> Element {
    rsx! { ui::views::PatientView {} }
}

#[component]
pub fn Reception() -> Element {
    rsx! { ui::views::ReceptionView {} }
}

#[component]
pub fn Doctor() -> Element {
    rsx! { ui::views::DoctorView {} }
}

#[component]
pub fn Accounting() -> Element {
    rsx! { ui::views::AccountingView {} }
}

#[component]
pub fn Management() -> Element {
    rsx! { ui::views::ManagementView {} }
}

#[component]
pub fn Executive() -> Element {
    rsx! { ui::views::ExecutiveView {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ui::views::ProfileView {} }
}
