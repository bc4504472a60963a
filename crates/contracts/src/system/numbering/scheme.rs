use serde::{Deserialize, Serialize};

// ============================================================================
// Scheme building blocks
// ============================================================================

/// Token separator used between number segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Separator {
    Dash,
    Slash,
    Underscore,
    None,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Dash => "-",
            Separator::Slash => "/",
            Separator::Underscore => "_",
            Separator::None => "",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Separator::Dash => "Dash (-)",
            Separator::Slash => "Slash (/)",
            Separator::Underscore => "Underscore (_)",
            Separator::None => "None",
        }
    }

    pub fn all() -> Vec<Separator> {
        vec![
            Separator::Dash,
            Separator::Slash,
            Separator::Underscore,
            Separator::None,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "-" => Some(Separator::Dash),
            "/" => Some(Separator::Slash),
            "_" => Some(Separator::Underscore),
            "" => Some(Separator::None),
            _ => None,
        }
    }
}

/// How the year token is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearFormat {
    TwoDigit,
    FourDigit,
}

impl YearFormat {
    pub fn code(&self) -> &'static str {
        match self {
            YearFormat::TwoDigit => "YY",
            YearFormat::FourDigit => "YYYY",
        }
    }

    pub fn all() -> Vec<YearFormat> {
        vec![YearFormat::TwoDigit, YearFormat::FourDigit]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "YY" => Some(YearFormat::TwoDigit),
            "YYYY" => Some(YearFormat::FourDigit),
            _ => None,
        }
    }
}

/// When the sequence counter resets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetFrequency {
    Never,
    Monthly,
    Yearly,
    PerDocument,
}

impl ResetFrequency {
    pub fn code(&self) -> &'static str {
        match self {
            ResetFrequency::Never => "never",
            ResetFrequency::Monthly => "monthly",
            ResetFrequency::Yearly => "yearly",
            ResetFrequency::PerDocument => "per_document",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResetFrequency::Never => "Never",
            ResetFrequency::Monthly => "Monthly",
            ResetFrequency::Yearly => "Yearly",
            ResetFrequency::PerDocument => "Per Document",
        }
    }

    pub fn all() -> Vec<ResetFrequency> {
        vec![
            ResetFrequency::Never,
            ResetFrequency::Monthly,
            ResetFrequency::Yearly,
            ResetFrequency::PerDocument,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "never" => Some(ResetFrequency::Never),
            "monthly" => Some(ResetFrequency::Monthly),
            "yearly" => Some(ResetFrequency::Yearly),
            "per_document" => Some(ResetFrequency::PerDocument),
            _ => None,
        }
    }
}

/// Document families that carry their own numbering scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    Quote,
    Contract,
    Proposal,
    Invoice,
    PurchaseOrder,
}

impl DocumentKind {
    pub fn code(&self) -> &'static str {
        match self {
            DocumentKind::Quote => "quote",
            DocumentKind::Contract => "contract",
            DocumentKind::Proposal => "proposal",
            DocumentKind::Invoice => "invoice",
            DocumentKind::PurchaseOrder => "purchase_order",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentKind::Quote => "Quote",
            DocumentKind::Contract => "Contract",
            DocumentKind::Proposal => "Proposal",
            DocumentKind::Invoice => "Invoice",
            DocumentKind::PurchaseOrder => "Purchase Order",
        }
    }

    pub fn all() -> Vec<DocumentKind> {
        vec![
            DocumentKind::Quote,
            DocumentKind::Contract,
            DocumentKind::Proposal,
            DocumentKind::Invoice,
            DocumentKind::PurchaseOrder,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "quote" => Some(DocumentKind::Quote),
            "contract" => Some(DocumentKind::Contract),
            "proposal" => Some(DocumentKind::Proposal),
            "invoice" => Some(DocumentKind::Invoice),
            "purchase_order" => Some(DocumentKind::PurchaseOrder),
            _ => None,
        }
    }
}

// ============================================================================
// Numbering scheme
// ============================================================================

/// Configuration describing how a document number is assembled.
///
/// The formatted output is fully determined by these fields; generation
/// has no side effects and no failure modes (every field is constrained
/// by the settings form controls).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberingScheme {
    pub prefix: String,
    pub separator: Separator,

    #[serde(rename = "includeYear")]
    pub include_year: bool,
    #[serde(rename = "yearFormat")]
    pub year_format: YearFormat,

    #[serde(rename = "includeMonth")]
    pub include_month: bool,

    /// Optional fixed branch token (for example "HQ", "BLR")
    #[serde(rename = "branchCode")]
    pub branch_code: Option<String>,

    /// Optional fixed category token (for example "STD", "ENT")
    #[serde(rename = "categoryCode")]
    pub category_code: Option<String>,

    #[serde(rename = "sequenceLength")]
    pub sequence_length: usize,

    #[serde(rename = "currentSequence")]
    pub current_sequence: u64,

    #[serde(rename = "resetFrequency")]
    pub reset_frequency: ResetFrequency,
}

impl NumberingScheme {
    /// Render the number this scheme would produce at `now`.
    ///
    /// Segments appear in a fixed order: prefix, year, month, branch,
    /// category, zero-padded sequence. The month token is always the
    /// two-digit month of `now`. An empty separator concatenates the
    /// segments directly.
    ///
    /// The sequence is padded to `sequence_length` digits but never
    /// truncated: a counter that has outgrown the configured width keeps
    /// all its digits.
    pub fn generate_sample(&self, now: chrono::DateTime<chrono::Utc>) -> String {
        let mut segments: Vec<String> = vec![self.prefix.clone()];

        if self.include_year {
            let token = match self.year_format {
                YearFormat::TwoDigit => now.format("%y").to_string(),
                YearFormat::FourDigit => now.format("%Y").to_string(),
            };
            segments.push(token);
        }

        if self.include_month {
            segments.push(now.format("%m").to_string());
        }

        if let Some(branch) = self.branch_code.as_deref() {
            if !branch.is_empty() {
                segments.push(branch.to_string());
            }
        }

        if let Some(category) = self.category_code.as_deref() {
            if !category.is_empty() {
                segments.push(category.to_string());
            }
        }

        segments.push(format!(
            "{:0width$}",
            self.current_sequence,
            width = self.sequence_length
        ));

        segments.join(self.separator.as_str())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.prefix.trim().is_empty() {
            return Err("Prefix must not be empty".into());
        }
        if self.sequence_length < 1 {
            return Err("Sequence length must be at least 1".into());
        }
        Ok(())
    }
}

impl Default for NumberingScheme {
    fn default() -> Self {
        Self {
            prefix: "DOC".to_string(),
            separator: Separator::Dash,
            include_year: true,
            year_format: YearFormat::TwoDigit,
            include_month: false,
            branch_code: None,
            category_code: None,
            sequence_length: 5,
            current_sequence: 1,
            reset_frequency: ResetFrequency::Yearly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn mid_2025() -> chrono::DateTime<chrono::Utc> {
        Utc.with_ymd_and_hms(2025, 7, 15, 10, 30, 0).unwrap()
    }

    fn quote_scheme() -> NumberingScheme {
        NumberingScheme {
            prefix: "QT".to_string(),
            separator: Separator::Dash,
            include_year: true,
            year_format: YearFormat::TwoDigit,
            include_month: false,
            branch_code: None,
            category_code: None,
            sequence_length: 5,
            current_sequence: 267,
            reset_frequency: ResetFrequency::Yearly,
        }
    }

    #[test]
    fn test_reference_sample() {
        assert_eq!(quote_scheme().generate_sample(mid_2025()), "QT-25-00267");
    }

    #[test]
    fn test_prefix_and_padded_sequence_bracket_the_output() {
        let scheme = quote_scheme();
        let sample = scheme.generate_sample(mid_2025());
        assert!(sample.starts_with("QT"));
        assert!(sample.ends_with("00267"));
    }

    #[test]
    fn test_four_digit_year_and_month() {
        let mut scheme = quote_scheme();
        scheme.year_format = YearFormat::FourDigit;
        scheme.include_month = true;
        assert_eq!(scheme.generate_sample(mid_2025()), "QT-2025-07-00267");
    }

    #[test]
    fn test_branch_and_category_tokens() {
        let mut scheme = quote_scheme();
        scheme.branch_code = Some("HQ".to_string());
        scheme.category_code = Some("ENT".to_string());
        assert_eq!(scheme.generate_sample(mid_2025()), "QT-25-HQ-ENT-00267");
    }

    #[test]
    fn test_empty_separator_concatenates() {
        let mut scheme = quote_scheme();
        scheme.separator = Separator::None;
        assert_eq!(scheme.generate_sample(mid_2025()), "QT2500267");
    }

    #[test]
    fn test_sequence_overflow_is_not_truncated() {
        let mut scheme = quote_scheme();
        scheme.sequence_length = 4;
        scheme.current_sequence = 12345;
        assert_eq!(scheme.generate_sample(mid_2025()), "QT-25-12345");
    }

    #[test]
    fn test_serde_field_names_follow_the_settings_form() {
        let json = serde_json::to_value(quote_scheme()).unwrap();
        assert_eq!(json["sequenceLength"], 5);
        assert_eq!(json["currentSequence"], 267);
        assert_eq!(json["resetFrequency"], "Yearly");
    }
}
