use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaClockRotateLeft, FaTriangleExclamation,
};
use dioxus_free_icons::Icon;

use crate::activity_log::{use_activity_log, LogEntry, LogLevel};

#[component]
fn LevelIcon(level: LogLevel) -> Element {
    match level {
        LogLevel::Info => rsx! { Icon { icon: FaCircleInfo, width: 12, height: 12 } },
        LogLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 12, height: 12 } },
        LogLevel::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 12, height: 12 } },
        LogLevel::Error => rsx! { Icon { icon: FaCircleExclamation, width: 12, height: 12 } },
    }
}

#[component]
fn EntryRow(entry: LogEntry) -> Element {
    let time = entry.at.format("%H:%M:%S").to_string();
    let class = format!("activity-log-entry {}", entry.level.class());
    let actor = entry.actor.clone();

    rsx! {
        div {
            class: "{class}",
            LevelIcon { level: entry.level }
            span { class: "activity-log-time", "{time}" }
            if let Some(actor) = actor {
                span { class: "activity-log-actor", "{actor}" }
            }
            span { "{entry.message}" }
        }
    }
}

/// Floating panel listing the session's activity, newest first.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log.read().visible {
        return rsx! {};
    }

    let shown = log.read().shown();
    let errors_only = log.read().errors_only;

    rsx! {
        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Activity" }
                label {
                    class: "activity-log-filter",
                    input {
                        r#type: "checkbox",
                        checked: errors_only,
                        onchange: move |evt: FormEvent| log.write().errors_only = evt.checked(),
                    }
                    " Errors only"
                }
                div {
                    button {
                        class: "btn btn-small btn-secondary",
                        onclick: move |_| log.write().clear(),
                        "Clear"
                    }
                    button {
                        class: "btn btn-small btn-secondary",
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if shown.is_empty() {
                    p { class: "muted", "Nothing yet." }
                }
                for (i, entry) in shown.into_iter().enumerate() {
                    EntryRow { key: "{i}", entry }
                }
            }
        }
    }
}

/// Navbar button opening the panel; shows the error count when there is one.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let errors = log.read().error_count();
    let class = if errors > 0 {
        "activity-log-toggle has-errors"
    } else {
        "activity-log-toggle"
    };

    rsx! {
        button {
            class: "{class}",
            title: "Activity log",
            onclick: move |_| {
                let visible = log.read().visible;
                log.write().visible = !visible;
            },
            Icon { icon: FaClockRotateLeft, width: 12, height: 12 }
            if errors > 0 {
                " {errors}"
            }
        }
    }
}
