//! Tab management module
//!
//! Contains:
//! - `tab` - a single item in the tab strip
//! - `tabs` - the strip plus the stack of tab pages
//! - `page` - TabPage wrapper for one tab's content
//! - `registry` - mapping tab.key -> View (single source of truth)
//! - `tab_labels` - single source of truth for tab titles

pub mod page;
pub mod registry;
pub mod tab;
pub mod tab_labels;
pub mod tabs;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
pub use tabs::Tabs;
