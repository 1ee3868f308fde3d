use api::AppointmentQuery;
use chrono::Duration;
use dioxus::prelude::*;
use store::filters::upcoming;
use store::schedule::within_schedule;
use store::{
    validate, Appointment, Doctor, LabTest, MedicalRecord, NewAppointment, Prescription, Schedule,
    DEFAULT_DURATION_MINUTES,
};

use crate::auth::use_api;
use crate::components::{
    Banner, Button, ButtonVariant, Field, Input, LabStatusBadge, ModalOverlay, Notice, Select,
    StatusBadge,
};

use super::{doctor_options, format_datetime, now, opt_text};

/// A patient's own appointments, booking form and clinical history. The
/// signed-in user's id doubles as their customer id.
#[component]
pub fn PatientView() -> Element {
    let api = use_api();
    let customer_id = api.user().map(|u| u.id).unwrap_or_default();

    let mut notice = use_signal(|| None::<Notice>);
    let mut reload = use_signal(|| 0u32);
    let mut appointments = use_signal(Vec::<Appointment>::new);
    let mut doctors = use_signal(Vec::<Doctor>::new);
    let mut schedules = use_signal(Vec::<Schedule>::new);
    let mut records = use_signal(Vec::<MedicalRecord>::new);
    let mut prescriptions = use_signal(Vec::<Prescription>::new);
    let mut lab_tests = use_signal(Vec::<LabTest>::new);

    let mut doctor_choice = use_signal(String::new);
    let mut slot = use_signal(String::new);
    let mut reason = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut cancelling = use_signal(|| None::<Appointment>);

    let _appointments = use_resource(move || async move {
        let _ = reload();
        let query = AppointmentQuery::for_customer(customer_id);
        match api.client().list_appointments(&query).await {
            Ok(list) => appointments.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load appointments")))),
        }
    });

    let _doctors = use_resource(move || async move {
        let client = api.client();
        match client.list_doctors(None).await {
            Ok(list) => doctors.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load doctors")))),
        }
        match client.list_schedules(None).await {
            Ok(list) => schedules.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load schedules")))),
        }
    });

    let _history = use_resource(move || async move {
        let client = api.client();
        match client.list_medical_records(Some(customer_id)).await {
            Ok(list) => records.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load medical records")))),
        }
        match client.list_prescriptions(Some(customer_id)).await {
            Ok(list) => prescriptions.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load prescriptions")))),
        }
        match client.list_lab_tests(Some(customer_id)).await {
            Ok(list) => lab_tests.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load lab tests")))),
        }
    });

    let book = move |_| {
        let checked = validate::appointment(
            Some(customer_id),
            validate::parse_id(&doctor_choice()),
            validate::parse_datetime_local(&slot()),
            now(),
        );
        let (customer_id, doctor_id, scheduled_at) = match checked {
            Ok(parts) => parts,
            Err(e) => {
                notice.set(Some(Notice::Error(e.to_string())));
                return;
            }
        };
        let end = scheduled_at + Duration::minutes(i64::from(DEFAULT_DURATION_MINUTES));
        if !within_schedule(doctor_id, scheduled_at, end, &schedules.read()) {
            notice.set(Some(Notice::Error(
                "The doctor does not see patients at that time".to_string(),
            )));
            return;
        }
        let clinic_id = doctors
            .read()
            .iter()
            .find(|d| d.id == doctor_id)
            .and_then(|d| d.clinic_id);
        let new = NewAppointment {
            customer_id,
            doctor_id,
            clinic_id,
            scheduled_at,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            reason: opt_text(&reason()),
        };
        busy.set(true);
        spawn(async move {
            let result = api.client().create_appointment(&new).await;
            busy.set(false);
            match result {
                Ok(appt) => {
                    let when = format_datetime(&appt.scheduled_at);
                    api.done(&format!("Booked appointment #{}", appt.id));
                    notice.set(Some(Notice::Success(format!("Appointment booked for {when}"))));
                    slot.set(String::new());
                    reason.set(String::new());
                    reload += 1;
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "save appointment")))),
            }
        });
    };

    let confirm_cancel = move |_| {
        let Some(appt) = cancelling() else {
            return;
        };
        cancelling.set(None);
        spawn(async move {
            match api.client().cancel_appointment(appt.id).await {
                Ok(_) => {
                    api.done(&format!("Cancelled appointment #{}", appt.id));
                    notice.set(Some(Notice::Success("Appointment cancelled".to_string())));
                    reload += 1;
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "save appointment")))),
            }
        });
    };

    let coming = upcoming(&appointments.read(), now());
    let mut history: Vec<Appointment> = appointments
        .read()
        .iter()
        .filter(|a| !coming.iter().any(|c| c.id == a.id))
        .cloned()
        .collect();
    history.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));

    rsx! {
        h1 { class: "page-title", "My appointments" }
        Banner { notice }

        section {
            class: "section",
            h2 { class: "section-title", "Book an appointment" }
            div {
                class: "form-grid",
                Field { label: "Doctor", html_for: "book-doctor",
                    Select {
                        id: "book-doctor",
                        value: doctor_choice(),
                        options: doctor_options(&doctors.read()),
                        placeholder: "Choose a doctor",
                        onchange: move |evt: FormEvent| doctor_choice.set(evt.value()),
                    }
                }
                Field { label: "Date and time", html_for: "book-slot",
                    Input { id: "book-slot", r#type: "datetime-local", value: slot(), oninput: move |evt: FormEvent| slot.set(evt.value()) }
                }
                Field { label: "Reason", html_for: "book-reason",
                    Input { id: "book-reason", value: reason(), oninput: move |evt: FormEvent| reason.set(evt.value()) }
                }
            }
            div {
                class: "form-actions",
                Button { disabled: busy(), onclick: book, if busy() { "Booking…" } else { "Book" } }
            }
        }

        section {
            class: "section",
            h2 { class: "section-title", "Upcoming" }
            if coming.is_empty() {
                p { class: "muted", "No upcoming appointments." }
            } else {
                table {
                    class: "data",
                    thead { tr { th { "When" } th { "Doctor" } th { "Reason" } th { "Status" } th {} } }
                    tbody {
                        for appt in coming.iter() {
                            tr {
                                key: "{appt.id}",
                                td { {format_datetime(&appt.scheduled_at)} }
                                td { {appt.doctor_name.clone().unwrap_or_else(|| super::doctor_name(&doctors.read(), appt.doctor_id))} }
                                td { {appt.reason.clone().unwrap_or_default()} }
                                td { StatusBadge { status: appt.status } }
                                td {
                                    if appt.status.is_cancellable() {
                                        Button {
                                            variant: ButtonVariant::Danger,
                                            small: true,
                                            onclick: {
                                                let target = appt.clone();
                                                move |_| cancelling.set(Some(target.clone()))
                                            },
                                            "Cancel"
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
            h2 { class: "section-title", "Past and cancelled" }
            if history.is_empty() {
                p { class: "muted", "Nothing here yet." }
            } else {
                table {
                    class: "data",
                    thead { tr { th { "When" } th { "Doctor" } th { "Status" } } }
                    tbody {
                        for appt in history.iter() {
                            tr {
                                key: "{appt.id}",
                                td { {format_datetime(&appt.scheduled_at)} }
                                td { {appt.doctor_name.clone().unwrap_or_default()} }
                                td { StatusBadge { status: appt.status } }
                            }
                        }
                    }
                }
            }
        }

        section {
            class: "section",
            h2 { class: "section-title", "Medical records" }
            if records.read().is_empty() {
                p { class: "muted", "No records on file." }
            } else {
                table {
                    class: "data",
                    thead { tr { th { "Date" } th { "Diagnosis" } th { "Treatment" } } }
                    tbody {
                        for record in records.read().iter() {
                            tr {
                                key: "{record.id}",
                                td { {record.created_at.as_ref().map(format_datetime).unwrap_or_default()} }
                                td { "{record.diagnosis}" }
                                td { {record.treatment.clone().unwrap_or_default()} }
                            }
                        }
                    }
                }
            }
        }

        section {
            class: "section",
            h2 { class: "section-title", "Prescriptions" }
            if prescriptions.read().is_empty() {
                p { class: "muted", "No prescriptions." }
            } else {
                table {
                    class: "data",
                    thead { tr { th { "Medication" } th { "Dosage" } th { "Frequency" } th { "Days" } th { "Instructions" } } }
                    tbody {
                        for rx in prescriptions.read().iter() {
                            tr {
                                key: "{rx.id}",
                                td { {rx.medication_name.clone().unwrap_or_else(|| format!("#{}", rx.medication_id))} }
                                td { "{rx.dosage}" }
                                td { "{rx.frequency}" }
                                td { class: "num", "{rx.duration_days}" }
                                td { {rx.instructions.clone().unwrap_or_default()} }
                            }
                        }
                    }
                }
            }
        }

        section {
            class: "section",
            h2 { class: "section-title", "Lab tests" }
            if lab_tests.read().is_empty() {
                p { class: "muted", "No lab tests ordered." }
            } else {
                table {
                    class: "data",
                    thead { tr { th { "Test" } th { "Status" } th { "Result" } } }
                    tbody {
                        for test in lab_tests.read().iter() {
                            tr {
                                key: "{test.id}",
                                td { {test.test_type_name.clone().unwrap_or_else(|| format!("#{}", test.test_type_id))} }
                                td { LabStatusBadge { status: test.status } }
                                td { {test.result.clone().unwrap_or_else(|| "Pending".to_string())} }
                            }
                        }
                    }
                }
            }
        }

        if let Some(appt) = cancelling() {
            ModalOverlay {
                on_close: move |_| cancelling.set(None),
                h2 { "Cancel appointment?" }
                p { {format!("{} with {}", format_datetime(&appt.scheduled_at), appt.doctor_name.clone().unwrap_or_default())} }
                div {
                    class: "form-actions",
                    Button { variant: ButtonVariant::Danger, onclick: confirm_cancel, "Cancel appointment" }
                    Button { variant: ButtonVariant::Secondary, onclick: move |_| cancelling.set(None), "Keep it" }
                }
            }
        }
    }
}
