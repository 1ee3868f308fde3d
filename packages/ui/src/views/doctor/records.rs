use dioxus::prelude::*;
use store::{validate, MedicalRecord, MedicalRecordInput};

use crate::auth::use_api;
use crate::components::{Button, ButtonVariant, Field, Input, Notice, Textarea};
use crate::views::{format_datetime, opt_text};

fn blank(doctor_id: i64, customer_id: i64) -> MedicalRecordInput {
    MedicalRecordInput {
        customer_id,
        doctor_id,
        ..MedicalRecordInput::default()
    }
}

#[component]
pub(super) fn RecordsPanel(
    doctor_id: i64,
    customer_id: i64,
    notice: Signal<Option<Notice>>,
) -> Element {
    let api = use_api();
    let mut notice = notice;
    let mut records = use_signal(Vec::<MedicalRecord>::new);
    let mut form = use_signal(|| blank(doctor_id, customer_id));
    let mut editing = use_signal(|| None::<i64>);

    let _records = use_resource(move || async move {
        match api.client().list_medical_records(Some(customer_id)).await {
            Ok(list) => records.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load medical records")))),
        }
    });

    let save = move |_| {
        let mut input = form();
        input.diagnosis = input.diagnosis.trim().to_string();
        input.symptoms = input.symptoms.as_deref().and_then(opt_text);
        input.treatment = input.treatment.as_deref().and_then(opt_text);
        input.notes = input.notes.as_deref().and_then(opt_text);
        if let Err(e) = validate::medical_record(&input) {
            notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        let target = editing();
        spawn(async move {
            let client = api.client();
            let result = match target {
                Some(id) => client.update_medical_record(id, &input).await,
                None => client.create_medical_record(&input).await,
            };
            match result {
                Ok(saved) => {
                    let mut list = records.write();
                    match list.iter_mut().find(|r| r.id == saved.id) {
                        Some(existing) => *existing = saved,
                        None => list.insert(0, saved),
                    }
                    drop(list);
                    api.done("Medical record saved");
                    notice.set(Some(Notice::Success("Medical record saved".to_string())));
                    form.set(blank(doctor_id, customer_id));
                    editing.set(None);
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "save medical record")))),
            }
        });
    };

    let remove = move |id: i64| {
        spawn(async move {
            match api.client().delete_medical_record(id).await {
                Ok(()) => {
                    records.write().retain(|r| r.id != id);
                    api.done(&format!("Deleted medical record #{id}"));
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "delete medical record")))),
            }
        });
    };

    let current = form();

    rsx! {
        section {
            class: "section",
            h2 { class: "section-title", "Medical records" }
            table {
                class: "data",
                thead { tr { th { "Date" } th { "Diagnosis" } th { "Symptoms" } th { "Treatment" } th {} } }
                tbody {
                    for record in records.read().iter() {
                        tr {
                            key: "{record.id}",
                            td { {record.created_at.as_ref().map(format_datetime).unwrap_or_default()} }
                            td { "{record.diagnosis}" }
                            td { {record.symptoms.clone().unwrap_or_default()} }
                            td { {record.treatment.clone().unwrap_or_default()} }
                            td {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    small: true,
                                    onclick: {
                                        let input = MedicalRecordInput::from(record);
                                        let id = record.id;
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
                                        let id = record.id;
                                        move |_| remove(id)
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            h3 { if editing().is_some() { "Edit record" } else { "New record" } }
            div {
                class: "form-grid",
                Field { label: "Diagnosis", html_for: "mr-diagnosis",
                    Input { id: "mr-diagnosis", value: current.diagnosis.clone(), oninput: move |evt: FormEvent| form.write().diagnosis = evt.value() }
                }
                Field { label: "Symptoms", html_for: "mr-symptoms",
                    Textarea { id: "mr-symptoms", value: current.symptoms.clone().unwrap_or_default(), oninput: move |evt: FormEvent| form.write().symptoms = Some(evt.value()) }
                }
                Field { label: "Treatment", html_for: "mr-treatment",
                    Textarea { id: "mr-treatment", value: current.treatment.clone().unwrap_or_default(), oninput: move |evt: FormEvent| form.write().treatment = Some(evt.value()) }
                }
                Field { label: "Notes", html_for: "mr-notes",
                    Textarea { id: "mr-notes", value: current.notes.clone().unwrap_or_default(), oninput: move |evt: FormEvent| form.write().notes = Some(evt.value()) }
                }
            }
            div {
                class: "form-actions",
                Button { onclick: save, "Save record" }
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
