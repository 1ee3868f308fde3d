//! Front desk: the clinic-wide appointment book, patient registry, booking
//! on a patient's behalf and the doctors' weekly hours.

use api::AppointmentQuery;
use chrono::Duration;
use dioxus::prelude::*;
use store::filters::{search_customers, AppointmentFilter};
use store::schedule::{conflicting_ids, overlaps, within_schedule};
use store::{
    paginate, validate, weekday_name, Appointment, AppointmentStatus, AppointmentUpdate, Customer,
    Doctor, NewAppointment, NewCustomer, Schedule, DEFAULT_DURATION_MINUTES,
};

use crate::auth::use_api;
use crate::components::{
    pager, Banner, Button, ButtonVariant, Field, Input, ModalOverlay, Notice, Select, StatusBadge,
    Textarea,
};

use super::{customer_name, customer_options, doctor_name, doctor_options, format_datetime, now, opt_text};

fn status_options() -> Vec<(String, String)> {
    AppointmentStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

#[component]
pub fn ReceptionView() -> Element {
    let api = use_api();

    let mut notice = use_signal(|| None::<Notice>);
    let mut reload = use_signal(|| 0u32);
    let mut appointments = use_signal(Vec::<Appointment>::new);
    let mut doctors = use_signal(Vec::<Doctor>::new);
    let mut customers = use_signal(Vec::<Customer>::new);
    let mut schedules = use_signal(Vec::<Schedule>::new);

    let mut status_filter = use_signal(String::new);
    let mut doctor_filter = use_signal(String::new);
    let mut from_filter = use_signal(String::new);
    let mut to_filter = use_signal(String::new);
    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let _appointments = use_resource(move || async move {
        let _ = reload();
        match api.client().list_appointments(&AppointmentQuery::default()).await {
            Ok(list) => appointments.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load appointments")))),
        }
    });

    let _reference = use_resource(move || async move {
        let client = api.client();
        match client.list_doctors(None).await {
            Ok(list) => doctors.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load doctors")))),
        }
        match client.list_customers("").await {
            Ok(list) => customers.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load patients")))),
        }
        match client.list_schedules(None).await {
            Ok(list) => schedules.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load schedules")))),
        }
    });

    let set_status = move |(id, status): (i64, AppointmentStatus)| {
        spawn(async move {
            let update = AppointmentUpdate::status(status);
            match api.client().update_appointment(id, &update).await {
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

    let filter = AppointmentFilter {
        status: AppointmentStatus::parse(&status_filter()),
        doctor_id: validate::parse_id(&doctor_filter()),
        from: validate::parse_date(&from_filter()),
        to: validate::parse_date(&to_filter()),
        query: query(),
    };
    let mut filtered = filter.apply(&appointments.read());
    filtered.sort_by_key(|a| a.scheduled_at);
    let per_page = api.config().ui.page_size;
    let current = paginate(&filtered, page(), per_page);
    let conflicts = conflicting_ids(&appointments.read());
    let flagged = filtered.iter().filter(|a| conflicts.contains(&a.id)).count();

    rsx! {
        h1 { class: "page-title", "Reception" }
        Banner { notice }

        section {
            class: "section",
            h2 { class: "section-title", "Appointments" }
            div {
                class: "filters",
                Field { label: "Status", html_for: "flt-status",
                    Select {
                        id: "flt-status",
                        value: status_filter(),
                        options: status_options(),
                        placeholder: "Any status",
                        onchange: move |evt: FormEvent| { status_filter.set(evt.value()); page.set(1); },
                    }
                }
                Field { label: "Doctor", html_for: "flt-doctor",
                    Select {
                        id: "flt-doctor",
                        value: doctor_filter(),
                        options: doctor_options(&doctors.read()),
                        placeholder: "Any doctor",
                        onchange: move |evt: FormEvent| { doctor_filter.set(evt.value()); page.set(1); },
                    }
                }
                Field { label: "From", html_for: "flt-from",
                    Input { id: "flt-from", r#type: "date", value: from_filter(), oninput: move |evt: FormEvent| { from_filter.set(evt.value()); page.set(1); } }
                }
                Field { label: "To", html_for: "flt-to",
                    Input { id: "flt-to", r#type: "date", value: to_filter(), oninput: move |evt: FormEvent| { to_filter.set(evt.value()); page.set(1); } }
                }
                Field { label: "Search", html_for: "flt-query",
                    Input { id: "flt-query", r#type: "search", placeholder: "Patient, doctor or reason", value: query(), oninput: move |evt: FormEvent| { query.set(evt.value()); page.set(1); } }
                }
            }
            if flagged > 0 {
                p { class: "badge badge-warning", "{flagged} appointment(s) overlap another booking for the same doctor" }
            }
            if current.items.is_empty() {
                p { class: "muted", "No appointments match." }
            } else {
                table {
                    class: "data",
                    thead { tr { th { "When" } th { "Patient" } th { "Doctor" } th { "Reason" } th { "Status" } th { "Change status" } } }
                    tbody {
                        for appt in current.items.iter() {
                            tr {
                                key: "{appt.id}",
                                class: if conflicts.contains(&appt.id) { "conflict" } else { "" },
                                td {
                                    {format_datetime(&appt.scheduled_at)}
                                    if conflicts.contains(&appt.id) {
                                        " "
                                        span { class: "badge badge-warning", "Conflict" }
                                    }
                                }
                                td { {appt.customer_name.clone().unwrap_or_else(|| customer_name(&customers.read(), appt.customer_id))} }
                                td { {appt.doctor_name.clone().unwrap_or_else(|| doctor_name(&doctors.read(), appt.doctor_id))} }
                                td { {appt.reason.clone().unwrap_or_default()} }
                                td { StatusBadge { status: appt.status } }
                                td {
                                    Select {
                                        id: "status-{appt.id}",
                                        value: appt.status.as_str().to_string(),
                                        options: status_options(),
                                        onchange: {
                                            let id = appt.id;
                                            let before = appt.status;
                                            move |evt: FormEvent| {
                                                if let Some(status) = AppointmentStatus::parse(&evt.value()) {
                                                    if status != before {
                                                        set_status((id, status));
                                                    }
                                                }
                                            }
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
            {pager(&current, EventHandler::new(move |p: usize| page.set(p)))}
        }

        BookingPanel { notice, reload, appointments, doctors, customers, schedules }
        CustomerPanel { notice, customers }

        section {
            class: "section",
            h2 { class: "section-title", "Doctor hours" }
            if schedules.read().is_empty() {
                p { class: "muted", "No weekly hours published." }
            } else {
                table {
                    class: "data",
                    thead { tr { th { "Doctor" } th { "Day" } th { "From" } th { "To" } } }
                    tbody {
                        for block in sorted_schedules(&schedules.read()) {
                            tr {
                                key: "{block.id}",
                                td { {doctor_name(&doctors.read(), block.doctor_id)} }
                                td { {weekday_name(block.weekday)} }
                                td { {block.start_time.format("%H:%M").to_string()} }
                                td { {block.end_time.format("%H:%M").to_string()} }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn sorted_schedules(schedules: &[Schedule]) -> Vec<Schedule> {
    let mut sorted = schedules.to_vec();
    sorted.sort_by_key(|s| (s.doctor_id, s.weekday, s.start_time));
    sorted
}

/// Booking form for the front desk. Rejects slots outside the doctor's
/// hours or overlapping one of their active appointments.
#[component]
fn BookingPanel(
    notice: Signal<Option<Notice>>,
    reload: Signal<u32>,
    appointments: Signal<Vec<Appointment>>,
    doctors: Signal<Vec<Doctor>>,
    customers: Signal<Vec<Customer>>,
    schedules: Signal<Vec<Schedule>>,
) -> Element {
    let api = use_api();
    let mut notice = notice;
    let mut reload = reload;
    let mut customer_choice = use_signal(String::new);
    let mut doctor_choice = use_signal(String::new);
    let mut slot = use_signal(String::new);
    let mut duration = use_signal(|| DEFAULT_DURATION_MINUTES.to_string());
    let mut reason = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let book = move |_| {
        let checked = validate::appointment(
            validate::parse_id(&customer_choice()),
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
        let minutes = duration()
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|m| *m > 0)
            .unwrap_or(DEFAULT_DURATION_MINUTES);
        let end = scheduled_at + Duration::minutes(i64::from(minutes));
        if !within_schedule(doctor_id, scheduled_at, end, &schedules.read()) {
            notice.set(Some(Notice::Error(
                "That slot is outside the doctor's hours".to_string(),
            )));
            return;
        }
        let proposed = Appointment {
            id: 0,
            customer_id,
            customer_name: None,
            doctor_id,
            doctor_name: None,
            clinic_id: None,
            scheduled_at,
            duration_minutes: minutes,
            status: AppointmentStatus::Scheduled,
            reason: None,
            fee_cents: None,
        };
        if let Some(clash) = appointments.read().iter().find(|a| overlaps(a, &proposed)) {
            notice.set(Some(Notice::Error(format!(
                "The doctor already has appointment #{} at {}",
                clash.id,
                format_datetime(&clash.scheduled_at)
            ))));
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
            duration_minutes: minutes,
            reason: opt_text(&reason()),
        };
        busy.set(true);
        spawn(async move {
            let result = api.client().create_appointment(&new).await;
            busy.set(false);
            match result {
                Ok(appt) => {
                    api.done(&format!("Booked appointment #{}", appt.id));
                    notice.set(Some(Notice::Success(format!(
                        "Booked {} for {}",
                        format_datetime(&appt.scheduled_at),
                        customer_name(&customers.read(), appt.customer_id)
                    ))));
                    slot.set(String::new());
                    reason.set(String::new());
                    reload += 1;
                }
                Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "save appointment")))),
            }
        });
    };

    rsx! {
        section {
            class: "section",
            h2 { class: "section-title", "Book for a patient" }
            div {
                class: "form-grid",
                Field { label: "Patient", html_for: "rb-customer",
                    Select {
                        id: "rb-customer",
                        value: customer_choice(),
                        options: customer_options(&customers.read()),
                        placeholder: "Choose a patient",
                        onchange: move |evt: FormEvent| customer_choice.set(evt.value()),
                    }
                }
                Field { label: "Doctor", html_for: "rb-doctor",
                    Select {
                        id: "rb-doctor",
                        value: doctor_choice(),
                        options: doctor_options(&doctors.read()),
                        placeholder: "Choose a doctor",
                        onchange: move |evt: FormEvent| doctor_choice.set(evt.value()),
                    }
                }
                Field { label: "Date and time", html_for: "rb-slot",
                    Input { id: "rb-slot", r#type: "datetime-local", value: slot(), oninput: move |evt: FormEvent| slot.set(evt.value()) }
                }
                Field { label: "Minutes", html_for: "rb-duration",
                    Input { id: "rb-duration", r#type: "number", value: duration(), oninput: move |evt: FormEvent| duration.set(evt.value()) }
                }
                Field { label: "Reason", html_for: "rb-reason",
                    Input { id: "rb-reason", value: reason(), oninput: move |evt: FormEvent| reason.set(evt.value()) }
                }
            }
            div {
                class: "form-actions",
                Button { disabled: busy(), onclick: book, "Book appointment" }
            }
        }
    }
}

#[component]
fn CustomerPanel(notice: Signal<Option<Notice>>, customers: Signal<Vec<Customer>>) -> Element {
    let api = use_api();
    let mut notice = notice;
    let mut customers = customers;
    let mut search = use_signal(String::new);
    let mut creating = use_signal(|| false);
    let mut form = use_signal(NewCustomer::default);
    let mut dob = use_signal(String::new);
    let mut form_notice = use_signal(|| None::<Notice>);

    let save = move |_| {
        let mut new = form();
        new.name = new.name.trim().to_string();
        new.phone = new.phone.trim().to_string();
        new.email = new.email.as_deref().and_then(opt_text);
        new.address = new.address.as_deref().and_then(opt_text);
        new.date_of_birth = validate::parse_date(&dob());
        if let Err(e) = validate::customer(&new) {
            form_notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        spawn(async move {
            match api.client().create_customer(&new).await {
                Ok(customer) => {
                    api.done(&format!("Registered patient {}", customer.name));
                    notice.set(Some(Notice::Success(format!("Registered {}", customer.name))));
                    customers.write().push(customer);
                    form.set(NewCustomer::default());
                    dob.set(String::new());
                    form_notice.set(None);
                    creating.set(false);
                }
                Err(e) => form_notice.set(Some(Notice::Error(api.fail(&e, "save patient")))),
            }
        });
    };

    let matches = search_customers(&customers.read(), &search());

    rsx! {
        section {
            class: "section",
            h2 { class: "section-title", "Patients" }
            div {
                class: "filters",
                Field { label: "Search", html_for: "cust-search",
                    Input { id: "cust-search", r#type: "search", placeholder: "Name, phone or email", value: search(), oninput: move |evt: FormEvent| search.set(evt.value()) }
                }
                Button { variant: ButtonVariant::Secondary, onclick: move |_| creating.set(true), "New patient" }
            }
            table {
                class: "data",
                thead { tr { th { "Name" } th { "Phone" } th { "Email" } th { "Born" } } }
                tbody {
                    for customer in matches.iter() {
                        tr {
                            key: "{customer.id}",
                            td { "{customer.name}" }
                            td { "{customer.phone}" }
                            td { {customer.email.clone().unwrap_or_default()} }
                            td { {customer.date_of_birth.map(|d| d.to_string()).unwrap_or_default()} }
                        }
                    }
                }
            }
            if matches.is_empty() {
                p { class: "muted", "No patients found." }
            }
        }

        if creating() {
            ModalOverlay {
                on_close: move |_| creating.set(false),
                h2 { "New patient" }
                Banner { notice: form_notice }
                Field { label: "Full name", html_for: "nc-name",
                    Input { id: "nc-name", value: form().name, oninput: move |evt: FormEvent| form.write().name = evt.value() }
                }
                Field { label: "Phone", html_for: "nc-phone",
                    Input { id: "nc-phone", r#type: "tel", value: form().phone, oninput: move |evt: FormEvent| form.write().phone = evt.value() }
                }
                Field { label: "Email", html_for: "nc-email",
                    Input { id: "nc-email", r#type: "email", value: form().email.unwrap_or_default(), oninput: move |evt: FormEvent| form.write().email = Some(evt.value()) }
                }
                Field { label: "Date of birth", html_for: "nc-dob",
                    Input { id: "nc-dob", r#type: "date", value: dob(), oninput: move |evt: FormEvent| dob.set(evt.value()) }
                }
                Field { label: "Address", html_for: "nc-address",
                    Textarea { id: "nc-address", rows: 2, value: form().address.unwrap_or_default(), oninput: move |evt: FormEvent| form.write().address = Some(evt.value()) }
                }
                div {
                    class: "form-actions",
                    Button { onclick: save, "Save patient" }
                    Button { variant: ButtonVariant::Secondary, onclick: move |_| creating.set(false), "Cancel" }
                }
            }
        }
    }
}
