use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipmentId(pub Uuid);

impl ShipmentId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ShipmentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ShipmentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentStatus {
    Pending,
    InTransit,
    Delivered,
    Delayed,
}

impl ShipmentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "pending",
            ShipmentStatus::InTransit => "in_transit",
            ShipmentStatus::Delivered => "delivered",
            ShipmentStatus::Delayed => "delayed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "Pending",
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::Delivered => "Delivered",
            ShipmentStatus::Delayed => "Delayed",
        }
    }

    pub fn all() -> Vec<ShipmentStatus> {
        vec![
            ShipmentStatus::Pending,
            ShipmentStatus::InTransit,
            ShipmentStatus::Delivered,
            ShipmentStatus::Delayed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(ShipmentStatus::Pending),
            "in_transit" => Some(ShipmentStatus::InTransit),
            "delivered" => Some(ShipmentStatus::Delivered),
            "delayed" => Some(ShipmentStatus::Delayed),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    #[serde(flatten)]
    pub base: BaseAggregate<ShipmentId>,

    pub status: ShipmentStatus,

    #[serde(default)]
    pub carrier: String,

    #[serde(default)]
    pub origin: String,

    #[serde(default)]
    pub destination: String,

    #[serde(rename = "shipDate")]
    pub ship_date: Option<chrono::NaiveDate>,
}

impl Shipment {
    pub fn new_for_insert(
        code: String,
        description: String,
        status: ShipmentStatus,
        carrier: String,
        origin: String,
        destination: String,
        ship_date: Option<chrono::NaiveDate>,
    ) -> Self {
        let base = BaseAggregate::new(ShipmentId::new_v4(), code, description);

        Self {
            base,
            status,
            carrier,
            origin,
            destination,
            ship_date,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ShipmentDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.status = ShipmentStatus::from_code(&dto.status).unwrap_or(ShipmentStatus::Pending);
        self.carrier = dto.carrier.clone().unwrap_or_default();
        self.origin = dto.origin.clone().unwrap_or_default();
        self.destination = dto.destination.clone().unwrap_or_default();
        self.ship_date = dto.ship_date;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Shipment reference must not be empty".into());
        }
        if self.carrier.trim().is_empty() {
            return Err("Carrier must not be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Shipment {
    type Id = ShipmentId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "shipment"
    }

    fn element_name() -> &'static str {
        "Shipment"
    }

    fn list_name() -> &'static str {
        "Shipments"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub status: String,
    pub carrier: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    #[serde(rename = "shipDate")]
    pub ship_date: Option<chrono::NaiveDate>,
    pub comment: Option<String>,
}

impl Default for ShipmentDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            status: ShipmentStatus::Pending.code().to_string(),
            carrier: None,
            origin: None,
            destination: None,
            ship_date: None,
            comment: None,
        }
    }
}
