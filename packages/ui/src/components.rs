//! Small building blocks shared by every dashboard.

use dioxus::prelude::*;

use store::{AppointmentStatus, LabTestStatus, Page};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Link,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
            ButtonVariant::Link => "link",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] small: bool,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = if small {
        format!("{} btn-small", variant.class())
    } else {
        variant.class().to_string()
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { r#for: "{html_for}", {children} }
    }
}

#[component]
pub fn Input(
    id: String,
    value: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(into)] placeholder: Option<String>,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            r#type: r#type,
            placeholder: placeholder,
            disabled,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    id: String,
    value: String,
    #[props(default = 3)] rows: u32,
    #[props(into)] placeholder: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            rows: "{rows}",
            placeholder: placeholder,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// `<select>` over `(value, label)` pairs. An empty `placeholder` entry is
/// prepended so "nothing chosen" is representable.
#[component]
pub fn Select(
    id: String,
    value: String,
    options: Vec<(String, String)>,
    #[props(into)] placeholder: Option<String>,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            value: "{value}",
            onchange: move |evt| onchange.call(evt),
            if let Some(placeholder) = placeholder {
                option { value: "", selected: value.is_empty(), "{placeholder}" }
            }
            for (option_value, label) in options {
                option {
                    key: "{option_value}",
                    selected: option_value == value,
                    value: "{option_value}",
                    "{label}"
                }
            }
        }
    }
}

/// Label plus control in the form grid.
#[component]
pub fn Field(label: String, html_for: String, children: Element) -> Element {
    rsx! {
        div {
            class: "field",
            Label { html_for: html_for, "{label}" }
            {children}
        }
    }
}

/// Inline message shown at the top of a page or panel.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Error(String),
    Success(String),
    Info(String),
}

impl Notice {
    fn class(&self) -> &'static str {
        match self {
            Notice::Error(_) => "banner banner-error",
            Notice::Success(_) => "banner banner-success",
            Notice::Info(_) => "banner banner-info",
        }
    }

    fn text(&self) -> &str {
        match self {
            Notice::Error(s) | Notice::Success(s) | Notice::Info(s) => s,
        }
    }
}

/// Renders the notice held in `notice`, if any, with a dismiss control.
#[component]
pub fn Banner(notice: Signal<Option<Notice>>) -> Element {
    let mut notice = notice;
    let Some(current) = notice() else {
        return rsx! {};
    };

    let text = current.text().to_string();

    rsx! {
        div {
            class: current.class(),
            role: "alert",
            span { "{text}" }
            button {
                class: "link",
                r#type: "button",
                onclick: move |_| notice.set(None),
                "Dismiss"
            }
        }
    }
}

/// Previous / next controls under a paged table.
#[component]
pub fn Pagination(
    page: usize,
    total_pages: usize,
    first: usize,
    last: usize,
    total: usize,
    on_change: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            class: "pagination",
            button {
                class: "btn btn-secondary btn-small",
                r#type: "button",
                disabled: page <= 1,
                onclick: move |_| on_change.call(page.saturating_sub(1)),
                "Previous"
            }
            span { "Page {page} of {total_pages}" }
            span { class: "muted", "{first}-{last} of {total}" }
            button {
                class: "btn btn-secondary btn-small",
                r#type: "button",
                disabled: page >= total_pages,
                onclick: move |_| on_change.call(page + 1),
                "Next"
            }
        }
    }
}

/// Convenience wrapper feeding a [`Page`] into [`Pagination`].
pub fn pager<T>(page: &Page<T>, on_change: EventHandler<usize>) -> Element {
    rsx! {
        Pagination {
            page: page.page,
            total_pages: page.total_pages,
            first: page.first_index(),
            last: page.last_index(),
            total: page.total_items,
            on_change: on_change,
        }
    }
}

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn StatusBadge(status: AppointmentStatus) -> Element {
    let class = format!("badge badge-{}", status.as_str());
    let label = status.label();
    rsx! {
        span { class: "{class}", "{label}" }
    }
}

#[component]
pub fn LabStatusBadge(status: LabTestStatus) -> Element {
    let class = match status {
        LabTestStatus::Completed => "badge badge-completed",
        LabTestStatus::Cancelled => "badge badge-cancelled",
        LabTestStatus::InProgress => "badge badge-warning",
        LabTestStatus::Ordered => "badge badge-scheduled",
    };
    let label = status.label();
    rsx! {
        span { class: class, "{label}" }
    }
}
