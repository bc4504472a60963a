use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(pub Uuid);

impl TicketId {
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

impl AggregateId for TicketId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(TicketId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status / Priority
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }

    pub fn all() -> Vec<TicketStatus> {
        vec![
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
            TicketStatus::Closed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "open" => Some(TicketStatus::Open),
            "in_progress" => Some(TicketStatus::InProgress),
            "resolved" => Some(TicketStatus::Resolved),
            "closed" => Some(TicketStatus::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    pub fn code(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Critical => "critical",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Critical => "Critical",
        }
    }

    pub fn all() -> Vec<TicketPriority> {
        vec![
            TicketPriority::Low,
            TicketPriority::Medium,
            TicketPriority::High,
            TicketPriority::Critical,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "low" => Some(TicketPriority::Low),
            "medium" => Some(TicketPriority::Medium),
            "high" => Some(TicketPriority::High),
            "critical" => Some(TicketPriority::Critical),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportTicket {
    #[serde(flatten)]
    pub base: BaseAggregate<TicketId>,

    pub status: TicketStatus,

    pub priority: TicketPriority,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub requester: String,

    #[serde(rename = "assignedTo", default)]
    pub assigned_to: String,
}

impl SupportTicket {
    pub fn new_for_insert(
        code: String,
        description: String,
        status: TicketStatus,
        priority: TicketPriority,
        category: String,
        requester: String,
        assigned_to: String,
    ) -> Self {
        let base = BaseAggregate::new(TicketId::new_v4(), code, description);

        Self {
            base,
            status,
            priority,
            category,
            requester,
            assigned_to,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &SupportTicketDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.status = TicketStatus::from_code(&dto.status).unwrap_or(TicketStatus::Open);
        self.priority =
            TicketPriority::from_code(&dto.priority).unwrap_or(TicketPriority::Medium);
        self.category = dto.category.clone().unwrap_or_default();
        self.requester = dto.requester.clone().unwrap_or_default();
        self.assigned_to = dto.assigned_to.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Ticket subject must not be empty".into());
        }
        if self.requester.trim().is_empty() {
            return Err("Requester must not be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for SupportTicket {
    type Id = TicketId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "support_ticket"
    }

    fn element_name() -> &'static str {
        "Support Ticket"
    }

    fn list_name() -> &'static str {
        "Support Tickets"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportTicketDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub category: Option<String>,
    pub requester: Option<String>,
    #[serde(rename = "assignedTo")]
    pub assigned_to: Option<String>,
    pub comment: Option<String>,
}

impl Default for SupportTicketDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            status: TicketStatus::Open.code().to_string(),
            priority: TicketPriority::Medium.code().to_string(),
            category: None,
            requester: None,
            assigned_to: None,
            comment: None,
        }
    }
}
