use dioxus::prelude::*;
use store::Section;

use crate::activity_log_panel::ActivityLogToggle;
use crate::auth::{use_auth, LogoutButton};
use crate::icons::{
    FaBuilding, FaCalculator, FaCalendarCheck, FaChartLine, FaHospital, FaStethoscope, FaUser,
    FaUserGear,
};
use crate::Icon;

fn section_icon(section: Section) -> Element {
    match section {
        Section::Patient => rsx! { Icon { icon: FaCalendarCheck, width: 14, height: 14 } },
        Section::Reception => rsx! { Icon { icon: FaHospital, width: 14, height: 14 } },
        Section::Doctor => rsx! { Icon { icon: FaStethoscope, width: 14, height: 14 } },
        Section::Accounting => rsx! { Icon { icon: FaCalculator, width: 14, height: 14 } },
        Section::Management => rsx! { Icon { icon: FaBuilding, width: 14, height: 14 } },
        Section::Executive => rsx! { Icon { icon: FaChartLine, width: 14, height: 14 } },
        Section::Profile => rsx! { Icon { icon: FaUserGear, width: 14, height: 14 } },
    }
}

/// Top bar shared by every signed-in page. Links are the sections the
/// current role may open; platforms map a [`Section`] to their own route.
#[component]
pub fn Navbar(active: Section, on_navigate: EventHandler<Section>) -> Element {
    let auth = use_auth();
    let state = auth();
    let Some(user) = state.user().cloned() else {
        return rsx! {};
    };
    let sections = user.role.sections();
    let role_label = user.role.label();
    let name = user.display_name().to_string();

    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "Clinic" }
            for (section, title) in sections.iter().map(|s| (*s, s.title())) {
                button {
                    key: "{title}",
                    class: if section == active { "navbar-link active" } else { "navbar-link" },
                    r#type: "button",
                    onclick: move |_| on_navigate.call(section),
                    {section_icon(section)}
                    span { "{title}" }
                }
            }
            span { class: "navbar-spacer" }
            span {
                class: "navbar-user",
                Icon { icon: FaUser, width: 12, height: 12 }
                " {name} "
                span { class: "muted", "({role_label})" }
            }
            ActivityLogToggle {}
            LogoutButton {}
        }
    }
}
