//! Doctor dashboard: the day's appointments and, for the chosen patient,
//! medical records, prescriptions and lab orders.

use api::AppointmentQuery;
use dioxus::prelude::*;
use store::{
    validate, Appointment, AppointmentStatus, AppointmentUpdate, Customer,
};

use crate::auth::use_api;
use crate::components::{Banner, Button, ButtonVariant, Field, Notice, Select, StatusBadge};

use super::{customer_name, customer_options, format_datetime, now};

mod lab_tests;
mod prescriptions;
mod records;

use lab_tests::LabTestsPanel;
use prescriptions::PrescriptionsPanel;
use records::RecordsPanel;

/// The signed-in doctor's user id is their doctor id.
#[component]
pub fn DoctorView() -> Element {
    let api = use_api();
    let doctor_id = api.user().map(|u| u.id).unwrap_or_default();

    let mut notice = use_signal(|| None::<Notice>);
    let mut appointments = use_signal(Vec::<Appointment>::new);
    let mut customers = use_signal(Vec::<Customer>::new);
    let mut patient_choice = use_signal(String::new);
    let mut show_past = use_signal(|| false);

    let _appointments = use_resource(move || async move {
        let query = AppointmentQuery::for_doctor(doctor_id);
        match api.client().list_appointments(&query).await {
            Ok(mut list) => {
                list.sort_by_key(|a| a.scheduled_at);
                appointments.set(list);
            }
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load appointments")))),
        }
    });

    let _customers = use_resource(move || async move {
        match api.client().list_customers("").await {
            Ok(list) => customers.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load patients")))),
        }
    });

    let set_status = move |(id, status): (i64, AppointmentStatus)| {
        spawn(async move {
            match api
                .client()
                .update_appointment(id, &AppointmentUpdate::status(status))
                .await
            {
                Ok(updated) => {
                    if let Some(slot) = appointments.write().iter_mut().find(|a| a.id == id) {
                        *slot = updated;
                    }
                    api.done(&format!("Appointment #{id} marked {}", status.label()));
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "save appointment")))),
            }
        });
    };

    let today = now().date();
    let visible: Vec<Appointment> = appointments
        .read()
        .iter()
        .filter(|a| show_past() || a.scheduled_at.date() >= today)
        .cloned()
        .collect();
    let patient_id = validate::parse_id(&patient_choice());

    rsx! {
        h1 { class: "page-title", "Doctor" }
        Banner { notice }

        section {
            class: "section",
            h2 { class: "section-title", "My appointments" }
            label {
                input {
                    r#type: "checkbox",
                    checked: show_past(),
                    onchange: move |evt: FormEvent| show_past.set(evt.checked()),
                }
                " Include past appointments"
            }
            if visible.is_empty() {
                p { class: "muted", "No appointments." }
            } else {
                table {
                    class: "data",
                    thead { tr { th { "When" } th { "Patient" } th { "Reason" } th { "Status" } th {} } }
                    tbody {
                        for appt in visible.iter() {
                            tr {
                                key: "{appt.id}",
                                td { {format_datetime(&appt.scheduled_at)} }
                                td { {appt.customer_name.clone().unwrap_or_else(|| customer_name(&customers.read(), appt.customer_id))} }
                                td { {appt.reason.clone().unwrap_or_default()} }
                                td { StatusBadge { status: appt.status } }
                                td {
                                    Button {
                                        variant: ButtonVariant::Secondary,
                                        small: true,
                                        onclick: {
                                            let customer_id = appt.customer_id;
                                            move |_| patient_choice.set(customer_id.to_string())
                                        },
                                        "Open chart"
                                    }
                                    if appt.is_active() && appt.status != AppointmentStatus::Completed {
                                        Button {
                                            small: true,
                                            onclick: {
                                                let id = appt.id;
                                                move |_| set_status((id, AppointmentStatus::Completed))
                                            },
                                            "Complete"
                                        }
                                        Button {
                                            variant: ButtonVariant::Danger,
                                            small: true,
                                            onclick: {
                                                let id = appt.id;
                                                move |_| set_status((id, AppointmentStatus::NoShow))
                                            },
                                            "No-show"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        section {
            class: "section",
            h2 { class: "section-title", "Patient chart" }
            Field { label: "Patient", html_for: "doc-patient",
                Select {
                    id: "doc-patient",
                    value: patient_choice(),
                    options: customer_options(&customers.read()),
                    placeholder: "Choose a patient",
                    onchange: move |evt: FormEvent| patient_choice.set(evt.value()),
                }
            }
        }

        if let Some(customer_id) = patient_id {
            div {
                key: "{customer_id}",
                RecordsPanel { doctor_id, customer_id, notice }
                PrescriptionsPanel { doctor_id, customer_id, notice }
                LabTestsPanel { doctor_id, customer_id, notice }
            }
        } else {
            p { class: "muted", "Choose a patient to see their records." }
        }
    }
}
