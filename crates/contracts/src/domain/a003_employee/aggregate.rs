use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::department::Department;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
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

impl AggregateId for EmployeeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EmployeeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Resigned,
}

impl EmployeeStatus {
    pub fn code(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::OnLeave => "on_leave",
            EmployeeStatus::Resigned => "resigned",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On Leave",
            EmployeeStatus::Resigned => "Resigned",
        }
    }

    pub fn all() -> Vec<EmployeeStatus> {
        vec![
            EmployeeStatus::Active,
            EmployeeStatus::OnLeave,
            EmployeeStatus::Resigned,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(EmployeeStatus::Active),
            "on_leave" => Some(EmployeeStatus::OnLeave),
            "resigned" => Some(EmployeeStatus::Resigned),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(flatten)]
    pub base: BaseAggregate<EmployeeId>,

    pub status: EmployeeStatus,

    pub department: Department,

    #[serde(default)]
    pub designation: String,

    #[serde(rename = "joinDate")]
    pub join_date: Option<chrono::NaiveDate>,

    #[serde(default)]
    pub email: String,
}

impl Employee {
    pub fn new_for_insert(
        code: String,
        description: String,
        status: EmployeeStatus,
        department: Department,
        designation: String,
        join_date: Option<chrono::NaiveDate>,
        email: String,
    ) -> Self {
        let base = BaseAggregate::new(EmployeeId::new_v4(), code, description);

        Self {
            base,
            status,
            department,
            designation,
            join_date,
            email,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &EmployeeDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.status = EmployeeStatus::from_code(&dto.status).unwrap_or(EmployeeStatus::Active);
        self.department =
            Department::from_code(&dto.department).unwrap_or(Department::Operations);
        self.designation = dto.designation.clone().unwrap_or_default();
        self.join_date = dto.join_date;
        self.email = dto.email.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Employee name must not be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Employee code must not be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Employee {
    type Id = EmployeeId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "employee"
    }

    fn element_name() -> &'static str {
        "Employee"
    }

    fn list_name() -> &'static str {
        "Employees"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub status: String,
    pub department: String,
    pub designation: Option<String>,
    #[serde(rename = "joinDate")]
    pub join_date: Option<chrono::NaiveDate>,
    pub email: Option<String>,
    pub comment: Option<String>,
}

impl Default for EmployeeDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            status: EmployeeStatus::Active.code().to_string(),
            department: Department::Operations.code().to_string(),
            designation: None,
            join_date: None,
            email: None,
            comment: None,
        }
    }
}
