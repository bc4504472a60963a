use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
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

impl AggregateId for CustomerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CustomerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    Lead,
    Prospect,
    Active,
    Inactive,
}

impl CustomerStatus {
    pub fn code(&self) -> &'static str {
        match self {
            CustomerStatus::Lead => "lead",
            CustomerStatus::Prospect => "prospect",
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CustomerStatus::Lead => "Lead",
            CustomerStatus::Prospect => "Prospect",
            CustomerStatus::Active => "Active",
            CustomerStatus::Inactive => "Inactive",
        }
    }

    pub fn all() -> Vec<CustomerStatus> {
        vec![
            CustomerStatus::Lead,
            CustomerStatus::Prospect,
            CustomerStatus::Active,
            CustomerStatus::Inactive,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "lead" => Some(CustomerStatus::Lead),
            "prospect" => Some(CustomerStatus::Prospect),
            "active" => Some(CustomerStatus::Active),
            "inactive" => Some(CustomerStatus::Inactive),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(flatten)]
    pub base: BaseAggregate<CustomerId>,

    pub status: CustomerStatus,

    #[serde(default)]
    pub industry: String,

    #[serde(default)]
    pub city: String,

    #[serde(rename = "contactPerson", default)]
    pub contact_person: String,

    #[serde(default)]
    pub email: String,
}

impl Customer {
    pub fn new_for_insert(
        code: String,
        description: String,
        status: CustomerStatus,
        industry: String,
        city: String,
        contact_person: String,
        email: String,
    ) -> Self {
        let base = BaseAggregate::new(CustomerId::new_v4(), code, description);

        Self {
            base,
            status,
            industry,
            city,
            contact_person,
            email,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &CustomerDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.status = CustomerStatus::from_code(&dto.status).unwrap_or(CustomerStatus::Lead);
        self.industry = dto.industry.clone().unwrap_or_default();
        self.city = dto.city.clone().unwrap_or_default();
        self.contact_person = dto.contact_person.clone().unwrap_or_default();
        self.email = dto.email.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Customer name must not be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Customer code must not be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub status: String,
    pub industry: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "contactPerson")]
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub comment: Option<String>,
}

impl Default for CustomerDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            status: CustomerStatus::Lead.code().to_string(),
            industry: None,
            city: None,
            contact_person: None,
            email: None,
            comment: None,
        }
    }
}
