//! Overview dashboard.
//!
//! Display-only aggregates over the seeded fixture sets; every figure is
//! recomputed on render, nothing is cached or fetched.

use crate::domain::{a001_customer, a002_quote, a004_support_ticket, a006_invoice};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::number_format::format_money;
use crate::shared::date_utils::format_date_opt;
use contracts::domain::a001_customer::aggregate::CustomerStatus;
use contracts::domain::a002_quote::aggregate::QuoteStatus;
use contracts::domain::a004_support_ticket::aggregate::TicketStatus;
use contracts::domain::a006_invoice::aggregate::InvoiceStatus;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn OverviewDashboard() -> impl IntoView {
    let quotes = a002_quote::model::seed_quotes();
    let tickets = a004_support_ticket::model::seed_tickets();
    let invoices = a006_invoice::model::seed_invoices();
    let customers = a001_customer::model::seed_customers();

    let pipeline_value: f64 = quotes
        .iter()
        .filter(|q| matches!(q.status, QuoteStatus::Draft | QuoteStatus::Sent))
        .map(|q| q.suggested_price)
        .sum();

    let decided = quotes
        .iter()
        .filter(|q| {
            matches!(
                q.status,
                QuoteStatus::Accepted | QuoteStatus::Rejected | QuoteStatus::Expired
            )
        })
        .count();
    let accepted = quotes
        .iter()
        .filter(|q| q.status == QuoteStatus::Accepted)
        .count();
    let acceptance_rate = if decided == 0 {
        None
    } else {
        Some(accepted as f64 / decided as f64 * 100.0)
    };

    let open_tickets = tickets
        .iter()
        .filter(|t| matches!(t.status, TicketStatus::Open | TicketStatus::InProgress))
        .count();

    let overdue_total: f64 = invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Overdue)
        .map(|i| i.amount)
        .sum();

    let active_customers = customers
        .iter()
        .filter(|c| c.status == CustomerStatus::Active)
        .count();

    let ticket_status = if open_tickets > 3 {
        IndicatorStatus::Warning
    } else {
        IndicatorStatus::Neutral
    };
    let overdue_status = if overdue_total > 0.0 {
        IndicatorStatus::Bad
    } else {
        IndicatorStatus::Good
    };

    // Most recent quotes for the bottom table
    let mut recent = quotes.clone();
    recent.sort_by(|a, b| b.base.metadata.created_at.cmp(&a.base.metadata.created_at));
    recent.truncate(5);

    let money_format = ValueFormat::Money {
        currency: "$".to_string(),
    };
    let percent_format = ValueFormat::Percent { decimals: 1 };

    view! {
        <div class="content">
            <PageHeader title="Overview" subtitle="Demo data across all modules".to_string()>
                <></>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Open Pipeline".to_string()
                    icon_name="dollar-sign".to_string()
                    value=Signal::derive(move || Some(pipeline_value))
                    format=money_format.clone()
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Quote Acceptance".to_string()
                    icon_name="percent".to_string()
                    value=Signal::derive(move || acceptance_rate)
                    format=percent_format
                    status=Signal::derive(|| IndicatorStatus::Good)
                />
                <StatCard
                    label="Open Tickets".to_string()
                    icon_name="life-buoy".to_string()
                    value=Signal::derive(move || Some(open_tickets as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(move || ticket_status)
                />
                <StatCard
                    label="Overdue Invoices".to_string()
                    icon_name="credit-card".to_string()
                    value=Signal::derive(move || Some(overdue_total))
                    format=money_format
                    status=Signal::derive(move || overdue_status)
                />
                <StatCard
                    label="Active Customers".to_string()
                    icon_name="customers".to_string()
                    value=Signal::derive(move || Some(active_customers as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
            </div>

            <h3 class="section-title">"Recent Quotes"</h3>
            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Number"</th>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Price"</th>
                            <th class="table__header-cell">"Valid Until"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {recent.into_iter().map(|q| view! {
                            <tr class="table__row">
                                <td class="table__cell">{q.base.code.clone()}</td>
                                <td class="table__cell">{q.customer_name.clone()}</td>
                                <td class="table__cell">{q.status.display_name()}</td>
                                <td class="table__cell table__cell--numeric">{format_money(q.suggested_price)}</td>
                                <td class="table__cell">{format_date_opt(q.valid_until)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
