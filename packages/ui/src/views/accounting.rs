use dioxus::prelude::*;
use store::money::{format_cents, parse_amount};
use store::{demo, ledger, paginate, payroll, validate, Payment, PaymentKind};

use crate::auth::use_api;
use crate::components::{pager, Banner, Button, ButtonVariant, Field, Input, Notice, Select};

use super::{now, opt_text};

/// Payroll for the current staff list and the payment ledger. Both start
/// from the bundled figures; entries added here live until the page closes.
#[component]
pub fn AccountingView() -> Element {
    let api = use_api();
    let config = api.config();

    let mut notice = use_signal(|| None::<Notice>);
    let mut payments = use_signal(demo::payments);
    let mut page = use_signal(|| 1usize);

    let mut date = use_signal(|| now().date().format("%Y-%m-%d").to_string());
    let mut description = use_signal(String::new);
    let mut kind = use_signal(|| PaymentKind::Income.as_str().to_string());
    let mut amount = use_signal(String::new);
    let mut method = use_signal(String::new);

    let add_payment = move |_| {
        let Some(day) = validate::parse_date(&date()) else {
            notice.set(Some(Notice::Error("Enter a valid date".to_string())));
            return;
        };
        let amount_cents = match validate::payment(&description(), parse_amount(&amount())) {
            Ok(cents) => cents,
            Err(e) => {
                notice.set(Some(Notice::Error(e.to_string())));
                return;
            }
        };
        let payment_kind = PaymentKind::parse(&kind()).unwrap_or(PaymentKind::Income);
        let id = ledger::next_id(&payments.read());
        payments.write().push(Payment {
            id,
            date: day,
            description: description().trim().to_string(),
            kind: payment_kind,
            amount_cents,
            method: opt_text(&method()),
        });
        api.done(&format!("Recorded ledger entry #{id}"));
        notice.set(Some(Notice::Success("Entry recorded".to_string())));
        description.set(String::new());
        amount.set(String::new());
        method.set(String::new());
    };

    let currency = config.ui.currency.clone();
    let money = move |cents: i64| format_cents(cents, &currency);

    let lines = payroll::compute_all(&demo::payroll_entries(), &config.payroll);
    let totals = payroll::totals(&lines);

    let rows = ledger::rows(&payments.read());
    let (income, expense) = ledger::income_and_expense(&payments.read());
    let balance = ledger::balance(&payments.read());
    let current = paginate(&rows, page(), config.ui.page_size);
    let tax_percent = config.payroll.tax_rate * 100.0;
    let standard_hours = config.payroll.standard_hours;
    let multiplier = config.payroll.overtime_multiplier;

    rsx! {
        h1 { class: "page-title", "Accounting" }
        Banner { notice }

        section {
            class: "section",
            h2 { class: "section-title", "Payroll" }
            p { class: "muted", "Tax {tax_percent:.0}% · overtime beyond {standard_hours} h at ×{multiplier}" }
            table {
                class: "data",
                thead {
                    tr {
                        th { "Staff" } th { "Role" } th { "Base" } th { "Overtime" }
                        th { "Bonus" } th { "Gross" } th { "Tax" } th { "Deductions" } th { "Net" }
                    }
                }
                tbody {
                    for line in lines.iter() {
                        tr {
                            key: "{line.staff_id}",
                            td { "{line.staff_name}" }
                            td { {line.role.label()} }
                            td { class: "num", {money(line.base_cents)} }
                            td { class: "num", {format!("{:.1} h · {}", line.overtime_hours, money(line.overtime_cents))} }
                            td { class: "num", {money(line.bonus_cents)} }
                            td { class: "num", {money(line.gross_cents)} }
                            td { class: "num", {money(line.tax_cents)} }
                            td { class: "num", {money(line.deductions_cents)} }
                            td { class: "num", strong { {money(line.net_cents)} } }
                        }
                    }
                }
                tfoot {
                    tr {
                        th { "Total ({totals.headcount})" }
                        th {} th {} th {} th {}
                        th { class: "num", {money(totals.gross_cents)} }
                        th { class: "num", {money(totals.tax_cents)} }
                        th { class: "num", {money(totals.deductions_cents)} }
                        th { class: "num", {money(totals.net_cents)} }
                    }
                }
            }
        }

        section {
            class: "section",
            h2 { class: "section-title", "Payments ledger" }
            div {
                class: "kpis",
                div { class: "kpi", span { class: "kpi-label", "Income" } span { class: "kpi-value", {money(income)} } }
                div { class: "kpi", span { class: "kpi-label", "Expenses" } span { class: "kpi-value", {money(expense)} } }
                div { class: "kpi", span { class: "kpi-label", "Balance" } span { class: "kpi-value", {money(balance)} } }
            }
            table {
                class: "data",
                thead { tr { th { "Date" } th { "Description" } th { "Method" } th { "Amount" } th { "Balance" } } }
                tbody {
                    for row in current.items.iter() {
                        tr {
                            key: "{row.payment.id}",
                            td { {row.payment.date.to_string()} }
                            td { "{row.payment.description}" }
                            td { {row.payment.method.clone().unwrap_or_default()} }
                            td { class: "num", {money(row.payment.signed_amount())} }
                            td { class: "num", {money(row.balance_cents)} }
                        }
                    }
                }
            }
            {pager(&current, EventHandler::new(move |p: usize| page.set(p)))}

            h3 { "Record an entry" }
            div {
                class: "form-grid",
                Field { label: "Date", html_for: "pay-date",
                    Input { id: "pay-date", r#type: "date", value: date(), oninput: move |evt: FormEvent| date.set(evt.value()) }
                }
                Field { label: "Description", html_for: "pay-desc",
                    Input { id: "pay-desc", value: description(), oninput: move |evt: FormEvent| description.set(evt.value()) }
                }
                Field { label: "Type", html_for: "pay-kind",
                    Select {
                        id: "pay-kind",
                        value: kind(),
                        options: vec![
                            (PaymentKind::Income.as_str().to_string(), "Income".to_string()),
                            (PaymentKind::Expense.as_str().to_string(), "Expense".to_string()),
                        ],
                        onchange: move |evt: FormEvent| kind.set(evt.value()),
                    }
                }
                Field { label: "Amount", html_for: "pay-amount",
                    Input { id: "pay-amount", placeholder: "0.00", value: amount(), oninput: move |evt: FormEvent| amount.set(evt.value()) }
                }
                Field { label: "Method", html_for: "pay-method",
                    Input { id: "pay-method", placeholder: "card, cash, transfer…", value: method(), oninput: move |evt: FormEvent| method.set(evt.value()) }
                }
            }
            div {
                class: "form-actions",
                Button { onclick: add_payment, "Add entry" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        payments.set(demo::payments());
                        page.set(1);
                    },
                    "Reset ledger"
                }
            }
        }
    }
}
