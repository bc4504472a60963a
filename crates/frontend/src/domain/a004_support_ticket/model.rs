//! Seeded demo data and the simulated save path for support tickets.

use contracts::domain::a004_support_ticket::aggregate::{
    SupportTicket, SupportTicketDto, TicketId, TicketPriority, TicketStatus,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use gloo_timers::future::TimeoutFuture;

const SAVE_DELAY_MS: u32 = 600;

#[allow(clippy::too_many_arguments)]
fn seeded(
    now: chrono::DateTime<chrono::Utc>,
    days_back: i64,
    code: &str,
    subject: &str,
    status: TicketStatus,
    priority: TicketPriority,
    category: &str,
    requester: &str,
    assigned_to: &str,
) -> SupportTicket {
    let base = BaseAggregate::with_metadata(
        TicketId::new_v4(),
        code.to_string(),
        subject.to_string(),
        None,
        EntityMetadata::seeded_days_back(now, days_back),
    );
    SupportTicket {
        base,
        status,
        priority,
        category: category.to_string(),
        requester: requester.to_string(),
        assigned_to: assigned_to.to_string(),
    }
}

/// Ticket ages straddle the 7/30/90-day buckets on purpose.
pub fn seed_tickets() -> Vec<SupportTicket> {
    let now = chrono::Utc::now();

    vec![
        seeded(
            now, 0, "TKT-2025-0891", "ERP login fails with SSO redirect loop",
            TicketStatus::Open, TicketPriority::Critical, "Access",
            "Nisha Gupta", "IT Helpdesk L2",
        ),
        seeded(
            now, 1, "TKT-2025-0890", "Quote PDF export misaligns line items",
            TicketStatus::InProgress, TicketPriority::High, "CPQ",
            "Rahul Verma", "App Support",
        ),
        seeded(
            now, 6, "TKT-2025-0884", "Leave balance not updating after approval",
            TicketStatus::InProgress, TicketPriority::Medium, "HR",
            "Divya Menon", "App Support",
        ),
        seeded(
            now, 7, "TKT-2025-0882", "Request CAB slot for warehouse scanner rollout",
            TicketStatus::Open, TicketPriority::Low, "Change Management",
            "Karan Singh", "IT Helpdesk L1",
        ),
        seeded(
            now, 8, "TKT-2025-0879", "Invoice aging report shows duplicate rows",
            TicketStatus::Resolved, TicketPriority::Medium, "Finance",
            "Meera Pillai", "App Support",
        ),
        seeded(
            now, 26, "TKT-2025-0860", "Shipment tracking page times out",
            TicketStatus::Resolved, TicketPriority::High, "Logistics",
            "Arjun Shah", "Platform Team",
        ),
        seeded(
            now, 64, "TKT-2025-0812", "Add POSH training module to onboarding",
            TicketStatus::Closed, TicketPriority::Low, "HR",
            "Sneha Kulkarni", "HR Systems",
        ),
        seeded(
            now, 95, "TKT-2025-0760", "Quarterly access review export",
            TicketStatus::Closed, TicketPriority::Medium, "Access",
            "Vikram Iyer", "IT Helpdesk L2",
        ),
    ]
}

/// Simulated save: waits like a request would, then drops the payload.
pub async fn save_form(_dto: &SupportTicketDto) -> Result<(), String> {
    TimeoutFuture::new(SAVE_DELAY_MS).await;
    Ok(())
}
