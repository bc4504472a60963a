use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteId(pub Uuid);

impl QuoteId {
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

impl AggregateId for QuoteId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(QuoteId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStatus {
    Draft,
    Sent,
    Accepted,
    Rejected,
    Expired,
}

impl QuoteStatus {
    pub fn code(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "draft",
            QuoteStatus::Sent => "sent",
            QuoteStatus::Accepted => "accepted",
            QuoteStatus::Rejected => "rejected",
            QuoteStatus::Expired => "expired",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "Draft",
            QuoteStatus::Sent => "Sent",
            QuoteStatus::Accepted => "Accepted",
            QuoteStatus::Rejected => "Rejected",
            QuoteStatus::Expired => "Expired",
        }
    }

    pub fn all() -> Vec<QuoteStatus> {
        vec![
            QuoteStatus::Draft,
            QuoteStatus::Sent,
            QuoteStatus::Accepted,
            QuoteStatus::Rejected,
            QuoteStatus::Expired,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(QuoteStatus::Draft),
            "sent" => Some(QuoteStatus::Sent),
            "accepted" => Some(QuoteStatus::Accepted),
            "rejected" => Some(QuoteStatus::Rejected),
            "expired" => Some(QuoteStatus::Expired),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Sales quote (CPQ module).
///
/// Pricing fields are plain display values. Price is intentionally NOT
/// validated against cost (the source system accepts any combination).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    #[serde(flatten)]
    pub base: BaseAggregate<QuoteId>,

    pub status: QuoteStatus,

    #[serde(rename = "customerName", default)]
    pub customer_name: String,

    #[serde(rename = "totalCost", default)]
    pub total_cost: f64,

    #[serde(rename = "suggestedPrice", default)]
    pub suggested_price: f64,

    #[serde(rename = "marginPercent", default)]
    pub margin_percent: f64,

    #[serde(rename = "validUntil")]
    pub valid_until: Option<chrono::NaiveDate>,
}

impl Quote {
    pub fn new_for_insert(
        code: String,
        description: String,
        customer_name: String,
        status: QuoteStatus,
        total_cost: f64,
        suggested_price: f64,
        margin_percent: f64,
        valid_until: Option<chrono::NaiveDate>,
    ) -> Self {
        let base = BaseAggregate::new(QuoteId::new_v4(), code, description);

        Self {
            base,
            status,
            customer_name,
            total_cost,
            suggested_price,
            margin_percent,
            valid_until,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &QuoteDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.status = QuoteStatus::from_code(&dto.status).unwrap_or(QuoteStatus::Draft);
        self.customer_name = dto.customer_name.clone();
        self.total_cost = dto.total_cost;
        self.suggested_price = dto.suggested_price;
        self.margin_percent = dto.margin_percent;
        self.valid_until = dto.valid_until;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Quote title must not be empty".into());
        }
        if self.customer_name.trim().is_empty() {
            return Err("Customer must not be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Quote {
    type Id = QuoteId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "quote"
    }

    fn element_name() -> &'static str {
        "Quote"
    }

    fn list_name() -> &'static str {
        "Quotes"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub status: String,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "totalCost")]
    pub total_cost: f64,
    #[serde(rename = "suggestedPrice")]
    pub suggested_price: f64,
    #[serde(rename = "marginPercent")]
    pub margin_percent: f64,
    #[serde(rename = "validUntil")]
    pub valid_until: Option<chrono::NaiveDate>,
    pub comment: Option<String>,
}

impl Default for QuoteDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            status: QuoteStatus::Draft.code().to_string(),
            customer_name: String::new(),
            total_cost: 0.0,
            suggested_price: 0.0,
            margin_percent: 0.0,
            valid_until: None,
            comment: None,
        }
    }
}
