use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceId(pub Uuid);

impl InvoiceId {
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

impl AggregateId for InvoiceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InvoiceId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub fn code(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Sent => "Sent",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
        }
    }

    pub fn all() -> Vec<InvoiceStatus> {
        vec![
            InvoiceStatus::Draft,
            InvoiceStatus::Sent,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(InvoiceStatus::Draft),
            "sent" => Some(InvoiceStatus::Sent),
            "paid" => Some(InvoiceStatus::Paid),
            "overdue" => Some(InvoiceStatus::Overdue),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(flatten)]
    pub base: BaseAggregate<InvoiceId>,

    pub status: InvoiceStatus,

    #[serde(rename = "customerName", default)]
    pub customer_name: String,

    #[serde(default)]
    pub amount: f64,

    #[serde(rename = "dueDate")]
    pub due_date: Option<chrono::NaiveDate>,
}

impl Invoice {
    pub fn new_for_insert(
        code: String,
        description: String,
        status: InvoiceStatus,
        customer_name: String,
        amount: f64,
        due_date: Option<chrono::NaiveDate>,
    ) -> Self {
        let base = BaseAggregate::new(InvoiceId::new_v4(), code, description);

        Self {
            base,
            status,
            customer_name,
            amount,
            due_date,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &InvoiceDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.status = InvoiceStatus::from_code(&dto.status).unwrap_or(InvoiceStatus::Draft);
        self.customer_name = dto.customer_name.clone();
        self.amount = dto.amount;
        self.due_date = dto.due_date;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Invoice title must not be empty".into());
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

impl AggregateRoot for Invoice {
    type Id = InvoiceId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "invoice"
    }

    fn element_name() -> &'static str {
        "Invoice"
    }

    fn list_name() -> &'static str {
        "Invoices"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub status: String,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    pub amount: f64,
    #[serde(rename = "dueDate")]
    pub due_date: Option<chrono::NaiveDate>,
    pub comment: Option<String>,
}

impl Default for InvoiceDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            status: InvoiceStatus::Draft.code().to_string(),
            customer_name: String::new(),
            amount: 0.0,
            due_date: None,
            comment: None,
        }
    }
}
