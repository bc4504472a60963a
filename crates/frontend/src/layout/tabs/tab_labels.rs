//! Tab labels - single source of truth for tab titles.
//!
//! Aggregate tabs take their `list_name` from contracts; dashboards and
//! system pages are hardcoded here. Fallback: the key itself.

use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_quote::aggregate::Quote;
use contracts::domain::a003_employee::aggregate::Employee;
use contracts::domain::a004_support_ticket::aggregate::SupportTicket;
use contracts::domain::a005_shipment::aggregate::Shipment;
use contracts::domain::a006_invoice::aggregate::Invoice;
use contracts::domain::common::AggregateRoot;

/// Readable tab title for a given key.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Aggregates ────────────────────────────────────────────────────
        "a001_customer" => Customer::list_name(),
        "a002_quote" => Quote::list_name(),
        "a003_employee" => Employee::list_name(),
        "a004_support_ticket" => SupportTicket::list_name(),
        "a005_shipment" => Shipment::list_name(),
        "a006_invoice" => Invoice::list_name(),

        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_overview" => "Overview",

        // ── System (sys_*) ────────────────────────────────────────────────
        "sys_numbering" => "Numbering Schemes",

        _ => "Unknown",
    }
}
