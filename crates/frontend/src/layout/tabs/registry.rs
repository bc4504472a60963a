//! Tab content registry - single source of truth for mapping tab.key -> View
//!
//! `render_tab_content` resolves a tab key to the page component that
//! renders it. All tab keys are collected here in one place.

use crate::dashboards::d400_overview::OverviewDashboard;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_quote::ui::list::QuoteList;
use crate::domain::a003_employee::ui::list::EmployeeList;
use crate::domain::a004_support_ticket::ui::list::SupportTicketList;
use crate::domain::a005_shipment::ui::list::ShipmentList;
use crate::domain::a006_invoice::ui::list::InvoiceList;
use crate::system::numbering::ui::NumberingSettingsPage;
use leptos::prelude::*;

/// Render the content of a tab by its key.
///
/// Unknown keys get an explicit placeholder instead of a panic; a stale
/// URL must not take the whole shell down.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Domain aggregates (a001-a006)
        // ═══════════════════════════════════════════════════════════════════
        "a001_customer" => view! { <CustomerList /> }.into_any(),
        "a002_quote" => view! { <QuoteList /> }.into_any(),
        "a003_employee" => view! { <EmployeeList /> }.into_any(),
        "a004_support_ticket" => view! { <SupportTicketList /> }.into_any(),
        "a005_shipment" => view! { <ShipmentList /> }.into_any(),
        "a006_invoice" => view! { <InvoiceList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Dashboards (d4xx)
        // ═══════════════════════════════════════════════════════════════════
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // System pages (sys_*)
        // ═══════════════════════════════════════════════════════════════════
        "sys_numbering" => view! { <NumberingSettingsPage /> }.into_any(),

        unknown => {
            leptos::logging::log!("No page registered for tab key '{}'", unknown);
            view! {
                <div class="content">
                    <div class="empty-state">
                        {format!("Unknown page: {}", unknown)}
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
