//! Document numbering schemes
//!
//! A scheme describes how sequential document identifiers (quote,
//! contract, proposal numbers) are formatted. Schemes are edited on the
//! settings page; generation itself is a pure formatting step.

pub mod defaults;
pub mod scheme;

pub use defaults::default_scheme_for;
pub use scheme::{DocumentKind, NumberingScheme, ResetFrequency, Separator, YearFormat};
