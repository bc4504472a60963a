use serde::{Deserialize, Serialize};

/// Organizational departments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Sales,
    Marketing,
    Finance,
    HumanResources,
    Operations,
}

impl Department {
    /// Stable code used in filters and DTOs
    pub fn code(&self) -> &'static str {
        match self {
            Department::Engineering => "engineering",
            Department::Sales => "sales",
            Department::Marketing => "marketing",
            Department::Finance => "finance",
            Department::HumanResources => "hr",
            Department::Operations => "operations",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Finance => "Finance",
            Department::HumanResources => "Human Resources",
            Department::Operations => "Operations",
        }
    }

    /// All departments
    pub fn all() -> Vec<Department> {
        vec![
            Department::Engineering,
            Department::Sales,
            Department::Marketing,
            Department::Finance,
            Department::HumanResources,
            Department::Operations,
        ]
    }

    /// Parse from the stable code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "engineering" => Some(Department::Engineering),
            "sales" => Some(Department::Sales),
            "marketing" => Some(Department::Marketing),
            "finance" => Some(Department::Finance),
            "hr" => Some(Department::HumanResources),
            "operations" => Some(Department::Operations),
            _ => None,
        }
    }
}

impl ToString for Department {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
