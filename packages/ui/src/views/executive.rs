use api::AppointmentQuery;
use dioxus::prelude::*;
use store::money::format_cents;
use store::stats::{load_by_doctor, AppointmentStats};
use store::{demo, ledger, payroll, Appointment, AppointmentStatus, Clinic};

use crate::auth::use_api;
use crate::components::{Banner, Notice, StatusBadge};

/// Headline figures across every clinic. Revenue is the fees of completed
/// appointments; payroll cost and the ledger come from the bundled figures.
#[component]
pub fn ExecutiveView() -> Element {
    let api = use_api();
    let config = api.config();

    let mut notice = use_signal(|| None::<Notice>);
    let mut appointments = use_signal(Vec::<Appointment>::new);
    let mut clinics = use_signal(Vec::<Clinic>::new);

    let _load = use_resource(move || async move {
        let client = api.client();
        match client.list_appointments(&AppointmentQuery::default()).await {
            Ok(list) => appointments.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load appointments")))),
        }
        match client.list_clinics().await {
            Ok(list) => clinics.set(list),
            Err(e) => notice.set(Some(Notice::Error(api.fail(&e, "load clinics")))),
        }
    });

    let stats = AppointmentStats::from_appointments(&appointments.read());
    let busiest = load_by_doctor(&appointments.read());
    let payroll_totals = payroll::totals(&payroll::compute_all(
        &demo::payroll_entries(),
        &config.payroll,
    ));
    let cash = ledger::balance(&demo::payments());
    let net = stats.revenue_cents - payroll_totals.gross_cents;

    let currency = config.ui.currency.clone();
    let money = move |cents: i64| format_cents(cents, &currency);
    let completion = format!("{:.1}%", stats.completion_rate * 100.0);
    let per_clinic: Vec<(String, usize)> = clinics
        .read()
        .iter()
        .map(|c| {
            let count = appointments
                .read()
                .iter()
                .filter(|a| a.clinic_id == Some(c.id) && a.is_active())
                .count();
            (c.name.clone(), count)
        })
        .collect();

    rsx! {
        h1 { class: "page-title", "Executive overview" }
        Banner { notice }

        div {
            class: "kpis",
            div { class: "kpi", span { class: "kpi-label", "Appointments" } span { class: "kpi-value", "{stats.total}" } }
            div { class: "kpi", span { class: "kpi-label", "Completion rate" } span { class: "kpi-value", "{completion}" } }
            div { class: "kpi", span { class: "kpi-label", "Revenue" } span { class: "kpi-value", {money(stats.revenue_cents)} } }
            div { class: "kpi", span { class: "kpi-label", "Payroll cost" } span { class: "kpi-value", {money(payroll_totals.gross_cents)} } }
            div { class: "kpi", span { class: "kpi-label", "Net (revenue − payroll)" } span { class: "kpi-value", {money(net)} } }
            div { class: "kpi", span { class: "kpi-label", "Ledger balance" } span { class: "kpi-value", {money(cash)} } }
        }

        section {
            class: "section",
            h2 { class: "section-title", "By status" }
            table {
                class: "data",
                tbody {
                    for status in AppointmentStatus::ALL {
                        tr {
                            key: "{status:?}",
                            td { StatusBadge { status } }
                            td { class: "num", {stats.count(status).to_string()} }
                        }
                    }
                }
            }
        }

        section {
            class: "section",
            h2 { class: "section-title", "Doctor workload" }
            if busiest.is_empty() {
                p { class: "muted", "No active appointments." }
            } else {
                table {
                    class: "data",
                    thead { tr { th { "Doctor" } th { "Active appointments" } } }
                    tbody {
                        for (name, count) in busiest.iter() {
                            tr {
                                key: "{name}",
                                td { "{name}" }
                                td { class: "num", "{count}" }
                            }
                        }
                    }
                }
            }
        }

        if !per_clinic.is_empty() {
            section {
                class: "section",
                h2 { class: "section-title", "Clinics" }
                table {
                    class: "data",
                    thead { tr { th { "Clinic" } th { "Active appointments" } } }
                    tbody {
                        for (name, count) in per_clinic.iter() {
                            tr {
                                key: "{name}",
                                td { "{name}" }
                                td { class: "num", "{count}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
