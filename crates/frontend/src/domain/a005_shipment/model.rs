//! Seeded demo data and the simulated save path for shipments.

use contracts::domain::a005_shipment::aggregate::{
    Shipment, ShipmentDto, ShipmentId, ShipmentStatus,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use gloo_timers::future::TimeoutFuture;

const SAVE_DELAY_MS: u32 = 600;

#[allow(clippy::too_many_arguments)]
fn seeded(
    now: chrono::DateTime<chrono::Utc>,
    days_back: i64,
    code: &str,
    reference: &str,
    status: ShipmentStatus,
    carrier: &str,
    origin: &str,
    destination: &str,
    ship_date: (i32, u32, u32),
) -> Shipment {
    let base = BaseAggregate::with_metadata(
        ShipmentId::new_v4(),
        code.to_string(),
        reference.to_string(),
        None,
        EntityMetadata::seeded_days_back(now, days_back),
    );
    Shipment {
        base,
        status,
        carrier: carrier.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        ship_date: chrono::NaiveDate::from_ymd_opt(ship_date.0, ship_date.1, ship_date.2),
    }
}

pub fn seed_shipments() -> Vec<Shipment> {
    let now = chrono::Utc::now();

    vec![
        seeded(
            now, 1, "SHP-2025-0147", "Spindle assemblies for ACME retrofit",
            ShipmentStatus::InTransit, "BlueDart Surface", "Pune", "Nashik",
            (2025, 8, 5),
        ),
        seeded(
            now, 3, "SHP-2025-0146", "Conveyor belts, Globex order 2 of 3",
            ShipmentStatus::Pending, "Gati KWE", "Chennai", "Hosur",
            (2025, 8, 9),
        ),
        seeded(
            now, 10, "SHP-2025-0142", "Pilot cell robot arm",
            ShipmentStatus::Delayed, "TCI Freight", "Mumbai", "Bengaluru",
            (2025, 7, 28),
        ),
        seeded(
            now, 21, "SHP-2025-0138", "Press tooling crate",
            ShipmentStatus::Delivered, "Safexpress", "Ahmedabad", "Rajkot",
            (2025, 7, 17),
        ),
        seeded(
            now, 40, "SHP-2025-0129", "Ventilation ducting, Stark paint line",
            ShipmentStatus::Delivered, "BlueDart Surface", "Coimbatore", "Salem",
            (2025, 6, 28),
        ),
    ]
}

/// Simulated save: waits like a request would, then drops the payload.
pub async fn save_form(_dto: &ShipmentDto) -> Result<(), String> {
    TimeoutFuture::new(SAVE_DELAY_MS).await;
    Ok(())
}
