use crate::shared::version_diff::PricingSnapshot;
use serde::{Deserialize, Serialize};

/// Immutable pricing snapshot of a quote at a given revision.
///
/// Versions are supplied as fixture data and are read-only; comparing two
/// of them goes through `shared::version_diff`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteVersion {
    #[serde(rename = "versionNo")]
    pub version_no: u32,

    pub status: QuoteVersionStatus,

    #[serde(rename = "totalCost")]
    pub total_cost: f64,

    #[serde(rename = "suggestedPrice")]
    pub suggested_price: f64,

    #[serde(rename = "marginPercent")]
    pub margin_percent: f64,

    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,

    #[serde(default)]
    pub notes: String,
}

impl QuoteVersion {
    pub fn snapshot(&self) -> PricingSnapshot {
        PricingSnapshot {
            total_cost: self.total_cost,
            suggested_price: self.suggested_price,
            margin_percent: self.margin_percent,
        }
    }

    pub fn label(&self) -> String {
        format!("v{}", self.version_no)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteVersionStatus {
    Current,
    Superseded,
}

impl QuoteVersionStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            QuoteVersionStatus::Current => "Current",
            QuoteVersionStatus::Superseded => "Superseded",
        }
    }
}
