//! Seeded demo data and the simulated save path for quotes.
//!
//! There is no backend in the demo: the list is a fixed fixture set and
//! "Save" only pretends a request is in flight before discarding the
//! payload.

use contracts::domain::a002_quote::aggregate::{Quote, QuoteDto, QuoteId, QuoteStatus};
use contracts::domain::a002_quote::version::{QuoteVersion, QuoteVersionStatus};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use gloo_timers::future::TimeoutFuture;

const SAVE_DELAY_MS: u32 = 600;

#[allow(clippy::too_many_arguments)]
fn seeded(
    now: chrono::DateTime<chrono::Utc>,
    days_back: i64,
    code: &str,
    description: &str,
    customer: &str,
    status: QuoteStatus,
    total_cost: f64,
    suggested_price: f64,
    margin_percent: f64,
    valid_until: Option<chrono::NaiveDate>,
) -> Quote {
    let base = BaseAggregate::with_metadata(
        QuoteId::new_v4(),
        code.to_string(),
        description.to_string(),
        None,
        EntityMetadata::seeded_days_back(now, days_back),
    );
    Quote {
        base,
        status,
        customer_name: customer.to_string(),
        total_cost,
        suggested_price,
        margin_percent,
        valid_until,
    }
}

/// Demo fixture set; ages are spread so the date-range filter has
/// something to bite on.
pub fn seed_quotes() -> Vec<Quote> {
    let now = chrono::Utc::now();
    let date = |y, m, d| chrono::NaiveDate::from_ymd_opt(y, m, d);

    vec![
        seeded(
            now,
            2,
            "QT-25-00267",
            "CNC milling line retrofit",
            "ACME Industries",
            QuoteStatus::Sent,
            100_000.0,
            125_000.0,
            20.0,
            date(2025, 9, 30),
        ),
        seeded(
            now,
            5,
            "QT-25-00266",
            "Packaging conveyor upgrade",
            "Globex Manufacturing",
            QuoteStatus::Draft,
            48_500.0,
            59_900.0,
            19.0,
            date(2025, 9, 15),
        ),
        seeded(
            now,
            12,
            "QT-25-00261",
            "Warehouse automation pilot",
            "Initech Logistics",
            QuoteStatus::Accepted,
            230_000.0,
            287_500.0,
            20.0,
            date(2025, 8, 31),
        ),
        seeded(
            now,
            25,
            "QT-25-00254",
            "Press shop tooling package",
            "Umbrella Fabrication",
            QuoteStatus::Rejected,
            76_400.0,
            87_900.0,
            13.1,
            date(2025, 8, 10),
        ),
        seeded(
            now,
            44,
            "QT-25-00243",
            "Paint line ventilation rework",
            "Stark Metalworks",
            QuoteStatus::Accepted,
            152_000.0,
            189_000.0,
            19.6,
            date(2025, 7, 31),
        ),
        seeded(
            now,
            70,
            "QT-25-00228",
            "Assembly cell robotics study",
            "Wayne Tooling",
            QuoteStatus::Expired,
            18_900.0,
            24_500.0,
            22.9,
            date(2025, 6, 30),
        ),
        seeded(
            now,
            120,
            "QT-25-00197",
            "Plant-wide PLC migration",
            "ACME Industries",
            QuoteStatus::Accepted,
            410_000.0,
            512_500.0,
            20.0,
            date(2025, 5, 31),
        ),
    ]
}

/// Pricing revision history for one quote.
///
/// Fixture data keyed by quote code; quotes without an entry get a
/// single current revision derived from the quote itself.
pub fn seed_versions(quote: &Quote) -> Vec<QuoteVersion> {
    let now = chrono::Utc::now();
    let at = |days_back: i64| now - chrono::Duration::days(days_back);

    match quote.base.code.as_str() {
        "QT-25-00267" => vec![
            QuoteVersion {
                version_no: 1,
                status: QuoteVersionStatus::Superseded,
                total_cost: 92_000.0,
                suggested_price: 115_000.0,
                margin_percent: 20.0,
                created_at: at(9),
                notes: "Initial estimate from site survey".to_string(),
            },
            QuoteVersion {
                version_no: 2,
                status: QuoteVersionStatus::Superseded,
                total_cost: 100_000.0,
                suggested_price: 120_000.0,
                margin_percent: 16.7,
                created_at: at(6),
                notes: "Added spindle replacement scope".to_string(),
            },
            QuoteVersion {
                version_no: 3,
                status: QuoteVersionStatus::Current,
                total_cost: 100_000.0,
                suggested_price: 125_000.0,
                margin_percent: 20.0,
                created_at: at(2),
                notes: "Price aligned with approval guidance".to_string(),
            },
        ],
        "QT-25-00261" => vec![
            QuoteVersion {
                version_no: 1,
                status: QuoteVersionStatus::Superseded,
                total_cost: 245_000.0,
                suggested_price: 300_000.0,
                margin_percent: 18.3,
                created_at: at(20),
                notes: "First pass, two pick stations".to_string(),
            },
            QuoteVersion {
                version_no: 2,
                status: QuoteVersionStatus::Current,
                total_cost: 230_000.0,
                suggested_price: 287_500.0,
                margin_percent: 20.0,
                created_at: at(12),
                notes: "De-scoped to single station pilot".to_string(),
            },
        ],
        _ => vec![QuoteVersion {
            version_no: 1,
            status: QuoteVersionStatus::Current,
            total_cost: quote.total_cost,
            suggested_price: quote.suggested_price,
            margin_percent: quote.margin_percent,
            created_at: quote.base.metadata.created_at,
            notes: String::new(),
        }],
    }
}

/// Simulated save: waits like a request would, then drops the payload.
pub async fn save_form(_dto: &QuoteDto) -> Result<(), String> {
    TimeoutFuture::new(SAVE_DELAY_MS).await;
    Ok(())
}
