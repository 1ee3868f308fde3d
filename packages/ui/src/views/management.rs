use dioxus::prelude::*;
use store::schedule::schedule_overlaps;
use store::{validate, weekday_name, Clinic, Doctor, Schedule, ScheduleInput};

use crate::auth::use_api;
use crate::components::{Banner, Button, ButtonVariant, Field, Input, Notice, Select};

use super::{doctor_name, doctor_options};

fn weekday_options() -> Vec<(String, String)> {
    (0u8..7)
        .map(|d| (d.to_string(), weekday_name(d).to_string()))
        .collect()
}

fn clinic_options(clinics: &[Clinic]) -> Vec<(String, String)> {
    clinics
        .iter()
        .map(|c| (c.id.to_string(), c.name.clone()))
        .collect()
}

/// Clinics and doctors (read only) plus the doctors' weekly hours.
#[component]
pub fn ManagementView() -> Element {
    let api = use_api();

    let mut notice = use_signal(|| None::<Notice>);
    let mut clinics = use_signal(Vec::<Clinic>::new);
    let mut doctors = use_signal(Vec::<Doctor>::new);
    let mut schedules = use_signal(Vec::<Schedule>::new);
    let mut clinic_filter = use_signal(String::new);

    let mut editing = use_signal(|| None::<i64>);
    let mut doctor_choice = use_signal(String::new);
    let mut weekday = use_signal(|| "0".to_string());
    let mut start = use_signal(|| "09:00".to_string());
    let mut end = use_signal(|| "17:00".to_string());

    let _load = use_resource(move || async move {
        let client = api.client();
        match client.list_clinics().await {
            Ok(list) => clinics.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load clinics")))),
        }
        match client.list_doctors(None).await {
            Ok(list) => doctors.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load doctors")))),
        }
        match client.list_schedules(None).await {
            Ok(list) => schedules.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load schedules")))),
        }
    });

    let mut reset_form = move || {
        editing.set(None);
        doctor_choice.set(String::new());
        weekday.set("0".to_string());
        start.set("09:00".to_string());
        end.set("17:00".to_string());
    };

    let save = move |_| {
        let (Some(start_time), Some(end_time)) =
            (validate::parse_time(&start()), validate::parse_time(&end()))
        else {
            notice.set(Some(Notice::Error("Enter start and end times".to_string())));
            return;
        };
        let doctor_id = validate::parse_id(&doctor_choice()).unwrap_or(0);
        let input = ScheduleInput {
            doctor_id,
            clinic_id: doctors
                .read()
                .iter()
                .find(|d| d.id == doctor_id)
                .and_then(|d| d.clinic_id),
            weekday: weekday().parse().unwrap_or(7),
            start_time,
            end_time,
        };
        if let Err(e) = validate::schedule(&input) {
            notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        let target = editing();
        if let Some(clash) = schedule_overlaps(&input, &schedules.read(), target) {
            notice.set(Some(Notice::Error(format!(
                "Overlaps the {} {}-{} block",
                weekday_name(clash.weekday),
                clash.start_time.format("%H:%M"),
                clash.end_time.format("%H:%M")
            ))));
            return;
        }
        spawn(async move {
            let client = api.client();
            let result = match target {
                Some(id) => client.update_schedule(id, &input).await,
                None => client.create_schedule(&input).await,
            };
            match result {
                Ok(saved) => {
                    let mut list = schedules.write();
                    match list.iter_mut().find(|s| s.id == saved.id) {
                        Some(existing) => *existing = saved,
                        None => list.push(saved),
                    }
                    drop(list);
                    api.done("Schedule saved");
                    notice.set(Some(Notice::Success("Schedule saved".to_string())));
                    reset_form();
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "save schedule")))),
            }
        });
    };

    let remove = move |id: i64| {
        spawn(async move {
            match api.client().delete_schedule(id).await {
                Ok(()) => {
                    schedules.write().retain(|s| s.id != id);
                    api.done(&format!("Deleted schedule #{id}"));
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "delete schedule")))),
            }
        });
    };

    let clinic_id = validate::parse_id(&clinic_filter());
    let shown_doctors: Vec<Doctor> = doctors
        .read()
        .iter()
        .filter(|d| clinic_id.is_none() || d.clinic_id == clinic_id)
        .cloned()
        .collect();
    let mut blocks: Vec<Schedule> = schedules
        .read()
        .iter()
        .filter(|s| shown_doctors.iter().any(|d| d.id == s.doctor_id))
        .cloned()
        .collect();
    blocks.sort_by_key(|s| (s.doctor_id, s.weekday, s.start_time));
    let clinic_name = move |id: Option<i64>| {
        id.and_then(|id| clinics.read().iter().find(|c| c.id == id).map(|c| c.name.clone()))
            .unwrap_or_default()
    };

    rsx! {
        h1 { class: "page-title", "Management" }
        Banner { notice }

        section {
            class: "section",
            h2 { class: "section-title", "Clinics" }
            table {
                class: "data",
                thead { tr { th { "Name" } th { "Address" } th { "Phone" } th { "Doctors" } } }
                tbody {
                    for clinic in clinics.read().iter() {
                        tr {
                            key: "{clinic.id}",
                            td { "{clinic.name}" }
                            td { {clinic.address.clone().unwrap_or_default()} }
                            td { {clinic.phone.clone().unwrap_or_default()} }
                            td { class: "num", {doctors.read().iter().filter(|d| d.clinic_id == Some(clinic.id)).count().to_string()} }
                        }
                    }
                }
            }
        }

        section {
            class: "section",
            h2 { class: "section-title", "Doctors" }
            div {
                class: "filters",
                Field { label: "Clinic", html_for: "mg-clinic",
                    Select {
                        id: "mg-clinic",
                        value: clinic_filter(),
                        options: clinic_options(&clinics.read()),
                        placeholder: "All clinics",
                        onchange: move |evt: FormEvent| clinic_filter.set(evt.value()),
                    }
                }
            }
            table {
                class: "data",
                thead { tr { th { "Name" } th { "Specialty" } th { "Clinic" } } }
                tbody {
                    for doctor in shown_doctors.iter() {
                        tr {
                            key: "{doctor.id}",
                            td { "{doctor.name}" }
                            td { {doctor.specialty.clone().unwrap_or_default()} }
                            td { {clinic_name(doctor.clinic_id)} }
                        }
                    }
                }
            }
        }

        section {
            class: "section",
            h2 { class: "section-title", "Weekly hours" }
            table {
                class: "data",
                thead { tr { th { "Doctor" } th { "Day" } th { "From" } th { "To" } th {} } }
                tbody {
                    for block in blocks.iter() {
                        tr {
                            key: "{block.id}",
                            td { {doctor_name(&doctors.read(), block.doctor_id)} }
                            td { {weekday_name(block.weekday)} }
                            td { {block.start_time.format("%H:%M").to_string()} }
                            td { {block.end_time.format("%H:%M").to_string()} }
                            td {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    small: true,
                                    onclick: {
                                        let block = block.clone();
                                        move |_| {
                                            editing.set(Some(block.id));
                                            doctor_choice.set(block.doctor_id.to_string());
                                            weekday.set(block.weekday.to_string());
                                            start.set(block.start_time.format("%H:%M").to_string());
                                            end.set(block.end_time.format("%H:%M").to_string());
                                        }
                                    },
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    small: true,
                                    onclick: {
                                        let id = block.id;
                                        move |_| remove(id)
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            h3 { if editing().is_some() { "Edit block" } else { "Add block" } }
            div {
                class: "form-grid",
                Field { label: "Doctor", html_for: "sc-doctor",
                    Select {
                        id: "sc-doctor",
                        value: doctor_choice(),
                        options: doctor_options(&doctors.read()),
                        placeholder: "Choose a doctor",
                        onchange: move |evt: FormEvent| doctor_choice.set(evt.value()),
                    }
                }
                Field { label: "Day", html_for: "sc-weekday",
                    Select {
                        id: "sc-weekday",
                        value: weekday(),
                        options: weekday_options(),
                        onchange: move |evt: FormEvent| weekday.set(evt.value()),
                    }
                }
                Field { label: "From", html_for: "sc-start",
                    Input { id: "sc-start", r#type: "time", value: start(), oninput: move |evt: FormEvent| start.set(evt.value()) }
                }
                Field { label: "To", html_for: "sc-end",
                    Input { id: "sc-end", r#type: "time", value: end(), oninput: move |evt: FormEvent| end.set(evt.value()) }
                }
            }
            div {
                class: "form-actions",
                Button { onclick: save, "Save block" }
                if editing().is_some() {
                    Button { variant: ButtonVariant::Secondary, onclick: move |_| reset_form(), "Cancel edit" }
                }
            }
        }
    }
}
