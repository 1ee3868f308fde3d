use dioxus::prelude::*;
use store::Section;

use crate::activity_log_panel::ActivityLogPanel;
use crate::auth::use_auth;
use crate::navbar::Navbar;

/// Frame around every signed-in page: waits for the stored session, sends
/// anonymous visitors away through `on_signed_out`, and refuses sections
/// the current role may not open.
#[component]
pub fn RoleShell(
    section: Section,
    on_navigate: EventHandler<Section>,
    on_signed_out: EventHandler<()>,
    children: Element,
) -> Element {
    let auth = use_auth();

    use_effect(move || {
        let state = auth();
        if !state.loading && state.session.is_none() {
            on_signed_out.call(());
        }
    });

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "page", p { class: "muted", "Loading…" } }
        };
    }
    let Some(role) = state.role() else {
        return rsx! {};
    };

    let body = if role.can_access(section) {
        rsx! { {children} }
    } else {
        let home = role.home();
        let home_title = home.title();
        let section_title = section.title();
        rsx! {
            div {
                class: "section",
                h2 { class: "section-title", "Not authorized" }
                p { "Your account cannot open the {section_title} area." }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_navigate.call(home),
                    "Go to {home_title}"
                }
            }
        }
    };

    rsx! {
        Navbar { active: section, on_navigate: on_navigate }
        main {
            class: "page",
            {body}
        }
        ActivityLogPanel {}
    }
}
