//! Seeded demo data and the simulated save path for invoices.

use contracts::domain::a006_invoice::aggregate::{Invoice, InvoiceDto, InvoiceId, InvoiceStatus};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use gloo_timers::future::TimeoutFuture;

const SAVE_DELAY_MS: u32 = 600;

#[allow(clippy::too_many_arguments)]
fn seeded(
    now: chrono::DateTime<chrono::Utc>,
    days_back: i64,
    code: &str,
    title: &str,
    status: InvoiceStatus,
    customer: &str,
    amount: f64,
    due: (i32, u32, u32),
) -> Invoice {
    let base = BaseAggregate::with_metadata(
        InvoiceId::new_v4(),
        code.to_string(),
        title.to_string(),
        None,
        EntityMetadata::seeded_days_back(now, days_back),
    );
    Invoice {
        base,
        status,
        customer_name: customer.to_string(),
        amount,
        due_date: chrono::NaiveDate::from_ymd_opt(due.0, due.1, due.2),
    }
}

pub fn seed_invoices() -> Vec<Invoice> {
    let now = chrono::Utc::now();

    vec![
        seeded(
            now, 2, "INV-2025-08-001043", "Milestone 1 - retrofit engineering",
            InvoiceStatus::Sent, "ACME Industries", 37_500.0, (2025, 9, 6),
        ),
        seeded(
            now, 8, "INV-2025-07-001039", "Automation pilot - commissioning",
            InvoiceStatus::Paid, "Initech Logistics", 86_250.0, (2025, 8, 15),
        ),
        seeded(
            now, 16, "INV-2025-07-001034", "Tooling package - balance",
            InvoiceStatus::Overdue, "Umbrella Fabrication", 43_950.0, (2025, 7, 25),
        ),
        seeded(
            now, 31, "INV-2025-07-001028", "Ventilation rework - advance",
            InvoiceStatus::Paid, "Stark Metalworks", 56_700.0, (2025, 7, 20),
        ),
        seeded(
            now, 55, "INV-2025-06-001015", "Robotics study retainer",
            InvoiceStatus::Draft, "Wayne Tooling", 12_250.0, (2025, 7, 1),
        ),
    ]
}

/// Simulated save: waits like a request would, then drops the payload.
pub async fn save_form(_dto: &InvoiceDto) -> Result<(), String> {
    TimeoutFuture::new(SAVE_DELAY_MS).await;
    Ok(())
}
