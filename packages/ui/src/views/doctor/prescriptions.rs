use dioxus::prelude::*;
use store::{validate, Medication, Prescription, PrescriptionInput};

use crate::auth::use_api;
use crate::components::{Button, ButtonVariant, Field, Input, Notice};
use crate::views::opt_text;

fn blank(doctor_id: i64, customer_id: i64) -> PrescriptionInput {
    PrescriptionInput {
        customer_id,
        doctor_id,
        ..PrescriptionInput::default()
    }
}

/// Prescriptions for one patient, with a medication lookup feeding the form.
#[component]
pub(super) fn PrescriptionsPanel(
    doctor_id: i64,
    customer_id: i64,
    notice: Signal<Option<Notice>>,
) -> Element {
    let api = use_api();
    let mut notice = notice;
    let mut prescriptions = use_signal(Vec::<Prescription>::new);
    let mut form = use_signal(|| blank(doctor_id, customer_id));
    let mut days = use_signal(String::new);
    let mut editing = use_signal(|| None::<i64>);
    let mut medication_label = use_signal(String::new);
    let mut lookup = use_signal(String::new);
    let mut matches = use_signal(Vec::<Medication>::new);

    let _prescriptions = use_resource(move || async move {
        match api.client().list_prescriptions(Some(customer_id)).await {
            Ok(list) => prescriptions.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load prescriptions")))),
        }
    });

    let search = move |_| {
        let term = lookup().trim().to_string();
        if term.is_empty() {
            matches.set(Vec::new());
            return;
        }
        spawn(async move {
            match api.client().search_medications(&term).await {
                Ok(list) => {
                    if list.is_empty() {
                        notice.set(Some(Notice::Info(format!("No medication matches \"{term}\""))));
                    }
                    matches.set(list);
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load medications")))),
            }
        });
    };

    let mut reset = move || {
        form.set(blank(doctor_id, customer_id));
        days.set(String::new());
        medication_label.set(String::new());
        editing.set(None);
    };

    let save = move |_| {
        let mut input = form();
        input.dosage = input.dosage.trim().to_string();
        input.frequency = input.frequency.trim().to_string();
        input.instructions = input.instructions.as_deref().and_then(opt_text);
        input.duration_days = days().trim().parse().unwrap_or(0);
        if let Err(e) = validate::prescription(&input) {
            notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        let target = editing();
        spawn(async move {
            let client = api.client();
            let result = match target {
                Some(id) => client.update_prescription(id, &input).await,
                None => client.create_prescription(&input).await,
            };
            match result {
                Ok(saved) => {
                    let mut list = prescriptions.write();
                    match list.iter_mut().find(|p| p.id == saved.id) {
                        Some(existing) => *existing = saved,
                        None => list.insert(0, saved),
                    }
                    drop(list);
                    api.done("Prescription saved");
                    notice.set(Some(Notice::Success("Prescription saved".to_string())));
                    reset();
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "save prescription")))),
            }
        });
    };

    let remove = move |id: i64| {
        spawn(async move {
            match api.client().delete_prescription(id).await {
                Ok(()) => {
                    prescriptions.write().retain(|p| p.id != id);
                    api.done(&format!("Deleted prescription #{id}"));
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "delete prescription")))),
            }
        });
    };

    let current = form();
    let chosen = if medication_label().is_empty() {
        "None chosen".to_string()
    } else {
        medication_label()
    };

    rsx! {
        section {
            class: "section",
            h2 { class: "section-title", "Prescriptions" }
            table {
                class: "data",
                thead { tr { th { "Medication" } th { "Dosage" } th { "Frequency" } th { "Days" } th {} } }
                tbody {
                    for rx in prescriptions.read().iter() {
                        tr {
                            key: "{rx.id}",
                            td { {rx.medication_name.clone().unwrap_or_else(|| format!("#{}", rx.medication_id))} }
                            td { "{rx.dosage}" }
                            td { "{rx.frequency}" }
                            td { class: "num", "{rx.duration_days}" }
                            td {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    small: true,
                                    onclick: {
                                        let input = PrescriptionInput::from(rx);
                                        let label = rx.medication_name.clone().unwrap_or_default();
                                        let id = rx.id;
                                        move |_| {
                                            days.set(input.duration_days.to_string());
                                            form.set(input.clone());
                                            medication_label.set(label.clone());
                                            editing.set(Some(id));
                                        }
                                    },
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    small: true,
                                    onclick: {
                                        let id = rx.id;
                                        move |_| remove(id)
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            h3 { if editing().is_some() { "Edit prescription" } else { "New prescription" } }
            div {
                class: "filters",
                Field { label: "Find medication", html_for: "rx-lookup",
                    Input { id: "rx-lookup", r#type: "search", value: lookup(), oninput: move |evt: FormEvent| lookup.set(evt.value()) }
                }
                Button { variant: ButtonVariant::Secondary, onclick: search, "Search" }
            }
            if !matches.read().is_empty() {
                ul {
                    for med in matches.read().iter() {
                        li {
                            key: "{med.id}",
                            button {
                                class: "link",
                                r#type: "button",
                                onclick: {
                                    let id = med.id;
                                    let label = med.label();
                                    move |_| {
                                        form.write().medication_id = id;
                                        medication_label.set(label.clone());
                                        matches.set(Vec::new());
                                    }
                                },
                                {med.label()}
                            }
                        }
                    }
                }
            }
            p { "Medication: " strong { "{chosen}" } }
            div {
                class: "form-grid",
                Field { label: "Dosage", html_for: "rx-dosage",
                    Input { id: "rx-dosage", placeholder: "500 mg", value: current.dosage.clone(), oninput: move |evt: FormEvent| form.write().dosage = evt.value() }
                }
                Field { label: "Frequency", html_for: "rx-frequency",
                    Input { id: "rx-frequency", placeholder: "twice daily", value: current.frequency.clone(), oninput: move |evt: FormEvent| form.write().frequency = evt.value() }
                }
                Field { label: "Days", html_for: "rx-days",
                    Input { id: "rx-days", r#type: "number", value: days(), oninput: move |evt: FormEvent| days.set(evt.value()) }
                }
                Field { label: "Instructions", html_for: "rx-instructions",
                    Input { id: "rx-instructions", value: current.instructions.clone().unwrap_or_default(), oninput: move |evt: FormEvent| form.write().instructions = Some(evt.value()) }
                }
            }
            div {
                class: "form-actions",
                Button { onclick: save, "Save prescription" }
                if editing().is_some() {
                    Button { variant: ButtonVariant::Secondary, onclick: move |_| reset(), "Cancel edit" }
                }
            }
        }
    }
}
