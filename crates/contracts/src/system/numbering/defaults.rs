use super::scheme::{DocumentKind, NumberingScheme, ResetFrequency, Separator, YearFormat};
use once_cell::sync::Lazy;

/// Factory-default schemes, one per document kind.
///
/// The settings page starts from these and edits a local copy; nothing is
/// persisted in the demo.
static DEFAULT_SCHEMES: Lazy<Vec<(DocumentKind, NumberingScheme)>> = Lazy::new(|| {
    vec![
        (
            DocumentKind::Quote,
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
            },
        ),
        (
            DocumentKind::Contract,
            NumberingScheme {
                prefix: "CTR".to_string(),
                separator: Separator::Dash,
                include_year: true,
                year_format: YearFormat::FourDigit,
                include_month: false,
                branch_code: None,
                category_code: None,
                sequence_length: 4,
                current_sequence: 58,
                reset_frequency: ResetFrequency::Yearly,
            },
        ),
        (
            DocumentKind::Proposal,
            NumberingScheme {
                prefix: "PRP".to_string(),
                separator: Separator::Slash,
                include_year: true,
                year_format: YearFormat::TwoDigit,
                include_month: true,
                branch_code: None,
                category_code: None,
                sequence_length: 3,
                current_sequence: 12,
                reset_frequency: ResetFrequency::Monthly,
            },
        ),
        (
            DocumentKind::Invoice,
            NumberingScheme {
                prefix: "INV".to_string(),
                separator: Separator::Dash,
                include_year: true,
                year_format: YearFormat::FourDigit,
                include_month: true,
                branch_code: None,
                category_code: None,
                sequence_length: 6,
                current_sequence: 1043,
                reset_frequency: ResetFrequency::Monthly,
            },
        ),
        (
            DocumentKind::PurchaseOrder,
            NumberingScheme {
                prefix: "PO".to_string(),
                separator: Separator::Dash,
                include_year: true,
                year_format: YearFormat::TwoDigit,
                include_month: false,
                branch_code: Some("HQ".to_string()),
                category_code: None,
                sequence_length: 5,
                current_sequence: 891,
                reset_frequency: ResetFrequency::Never,
            },
        ),
    ]
});

/// Factory-default scheme for one document kind
pub fn default_scheme_for(kind: DocumentKind) -> NumberingScheme {
    DEFAULT_SCHEMES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, scheme)| scheme.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_default() {
        for kind in DocumentKind::all() {
            let scheme = default_scheme_for(kind);
            assert!(scheme.validate().is_ok(), "default for {:?}", kind);
        }
    }
}
