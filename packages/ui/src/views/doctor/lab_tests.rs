use dioxus::prelude::*;
use store::money::format_cents;
use store::{validate, LabTest, LabTestInput, LabTestStatus, LabTestType};

use crate::auth::use_api;
use crate::components::{Button, ButtonVariant, Field, LabStatusBadge, Notice, Select, Textarea};
use crate::views::opt_text;

fn blank(doctor_id: i64, customer_id: i64) -> LabTestInput {
    LabTestInput {
        customer_id,
        doctor_id,
        ..LabTestInput::default()
    }
}

fn type_options(types: &[LabTestType], currency: &str) -> Vec<(String, String)> {
    types
        .iter()
        .map(|t| {
            let mut label = t.name.clone();
            if let Some(code) = &t.code {
                label = format!("{label} [{code}]");
            }
            if let Some(price) = t.price_cents {
                label = format!("{label} · {}", format_cents(price, currency));
            }
            (t.id.to_string(), label)
        })
        .collect()
}

fn status_options() -> Vec<(String, String)> {
    LabTestStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

#[component]
pub(super) fn LabTestsPanel(
    doctor_id: i64,
    customer_id: i64,
    notice: Signal<Option<Notice>>,
) -> Element {
    let api = use_api();
    let mut notice = notice;
    let mut tests = use_signal(Vec::<LabTest>::new);
    let mut types = use_signal(Vec::<LabTestType>::new);
    let mut form = use_signal(|| blank(doctor_id, customer_id));
    let mut editing = use_signal(|| None::<i64>);

    let _tests = use_resource(move || async move {
        let client = api.client();
        match client.list_lab_tests(Some(customer_id)).await {
            Ok(list) => tests.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load lab tests")))),
        }
        match client.list_lab_test_types().await {
            Ok(list) => types.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load lab test types")))),
        }
    });

    let save = move |_| {
        let mut input = form();
        input.result = input.result.as_deref().and_then(opt_text);
        input.notes = input.notes.as_deref().and_then(opt_text);
        if let Err(e) = validate::lab_test(&input) {
            notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        let target = editing();
        spawn(async move {
            let client = api.client();
            let result = match target {
                Some(id) => client.update_lab_test(id, &input).await,
                None => client.create_lab_test(&input).await,
            };
            match result {
                Ok(saved) => {
                    let mut list = tests.write();
                    match list.iter_mut().find(|t| t.id == saved.id) {
                        Some(existing) => *existing = saved,
                        None => list.insert(0, saved),
                    }
                    drop(list);
                    api.done("Lab order saved");
                    notice.set(Some(Notice::Success("Lab order saved".to_string())));
                    form.set(blank(doctor_id, customer_id));
                    editing.set(None);
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "save lab order")))),
            }
        });
    };

    let remove = move |id: i64| {
        spawn(async move {
            match api.client().delete_lab_test(id).await {
                Ok(()) => {
                    tests.write().retain(|t| t.id != id);
                    api.done(&format!("Deleted lab order #{id}"));
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "delete lab order")))),
            }
        });
    };

    let current = form();
    let currency = api.config().ui.currency;
    let type_name = move |id: i64| {
        types
            .read()
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("#{id}"))
    };

    rsx! {
        section {
            class: "section",
            h2 { class: "section-title", "Lab orders" }
            table {
                class: "data",
                thead { tr { th { "Test" } th { "Status" } th { "Result" } th { "Notes" } th {} } }
                tbody {
                    for test in tests.read().iter() {
                        tr {
                            key: "{test.id}",
                            td { {test.test_type_name.clone().unwrap_or_else(|| type_name(test.test_type_id))} }
                            td { LabStatusBadge { status: test.status } }
                            td { {test.result.clone().unwrap_or_default()} }
                            td { {test.notes.clone().unwrap_or_default()} }
                            td {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    small: true,
                                    onclick: {
                                        let input = LabTestInput::from(test);
                                        let id = test.id;
                                        move |_| {
                                            form.set(input.clone());
                                            editing.set(Some(id));
                                        }
                                    },
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    small: true,
                                    onclick: {
                                        let id = test.id;
                                        move |_| remove(id)
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            h3 { if editing().is_some() { "Update lab order" } else { "Order a test" } }
            div {
                class: "form-grid",
                Field { label: "Test", html_for: "lab-type",
                    Select {
                        id: "lab-type",
                        value: if current.test_type_id > 0 { current.test_type_id.to_string() } else { String::new() },
                        options: type_options(&types.read(), &currency),
                        placeholder: "Choose a test",
                        onchange: move |evt: FormEvent| {
                            form.write().test_type_id = validate::parse_id(&evt.value()).unwrap_or(0);
                        },
                    }
                }
                Field { label: "Status", html_for: "lab-status",
                    Select {
                        id: "lab-status",
                        value: current.status.as_str().to_string(),
                        options: status_options(),
                        onchange: move |evt: FormEvent| {
                            if let Some(status) = LabTestStatus::parse(&evt.value()) {
                                form.write().status = status;
                            }
                        },
                    }
                }
                Field { label: "Result", html_for: "lab-result",
                    Textarea { id: "lab-result", value: current.result.clone().unwrap_or_default(), oninput: move |evt: FormEvent| form.write().result = Some(evt.value()) }
                }
                Field { label: "Notes", html_for: "lab-notes",
                    Textarea { id: "lab-notes", value: current.notes.clone().unwrap_or_default(), oninput: move |evt: FormEvent| form.write().notes = Some(evt.value()) }
                }
            }
            div {
                class: "form-actions",
                Button { onclick: save, if editing().is_some() { "Save changes" } else { "Place order" } }
                if editing().is_some() {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            form.set(blank(doctor_id, customer_id));
                            editing.set(None);
                        },
                        "Cancel edit"
                    }
                }
            }
        }
    }
}
