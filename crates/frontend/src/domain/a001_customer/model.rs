//! Seeded demo data and the simulated save path for customers.

use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto, CustomerId, CustomerStatus};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use gloo_timers::future::TimeoutFuture;

const SAVE_DELAY_MS: u32 = 600;

#[allow(clippy::too_many_arguments)]
fn seeded(
    now: chrono::DateTime<chrono::Utc>,
    days_back: i64,
    code: &str,
    name: &str,
    status: CustomerStatus,
    industry: &str,
    city: &str,
    contact: &str,
    email: &str,
) -> Customer {
    let base = BaseAggregate::with_metadata(
        CustomerId::new_v4(),
        code.to_string(),
        name.to_string(),
        None,
        EntityMetadata::seeded_days_back(now, days_back),
    );
    Customer {
        base,
        status,
        industry: industry.to_string(),
        city: city.to_string(),
        contact_person: contact.to_string(),
        email: email.to_string(),
    }
}

pub fn seed_customers() -> Vec<Customer> {
    let now = chrono::Utc::now();

    vec![
        seeded(
            now, 3, "CUS-0112", "ACME Industries", CustomerStatus::Active,
            "Industrial Machinery", "Pune", "Rohan Mehta", "rohan.mehta@acme.example",
        ),
        seeded(
            now, 6, "CUS-0111", "Globex Manufacturing", CustomerStatus::Prospect,
            "Consumer Goods", "Chennai", "Priya Nair", "priya.nair@globex.example",
        ),
        seeded(
            now, 15, "CUS-0108", "Initech Logistics", CustomerStatus::Active,
            "Logistics", "Mumbai", "Arjun Shah", "arjun.shah@initech.example",
        ),
        seeded(
            now, 28, "CUS-0104", "Umbrella Fabrication", CustomerStatus::Inactive,
            "Metal Fabrication", "Ahmedabad", "Kavita Rao", "kavita.rao@umbrella.example",
        ),
        seeded(
            now, 41, "CUS-0101", "Stark Metalworks", CustomerStatus::Active,
            "Metal Fabrication", "Coimbatore", "Vikram Iyer", "vikram.iyer@stark.example",
        ),
        seeded(
            now, 80, "CUS-0095", "Wayne Tooling", CustomerStatus::Lead,
            "Tooling", "Bengaluru", "Sneha Kulkarni", "sneha.k@wayne.example",
        ),
    ]
}

/// Simulated save: waits like a request would, then drops the payload.
pub async fn save_form(_dto: &CustomerDto) -> Result<(), String> {
    TimeoutFuture::new(SAVE_DELAY_MS).await;
    Ok(())
}
