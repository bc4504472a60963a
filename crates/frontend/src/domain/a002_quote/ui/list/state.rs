use contracts::domain::a002_quote::aggregate::QuoteStatus;
use contracts::shared::filter::DateRangeFilter;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct QuoteListState {
    pub search_term: String,
    pub status_filter: Option<QuoteStatus>,
    pub date_range: DateRangeFilter,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for QuoteListState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filter: None,
            date_range: DateRangeFilter::AllTime,
            sort_field: "code".to_string(),
            sort_ascending: false,
        }
    }
}

impl QuoteListState {
    /// Number of non-default filter criteria (drives the badge in the panel)
    pub fn active_filters_count(&self) -> usize {
        let mut count = 0;
        if !self.search_term.trim().is_empty() {
            count += 1;
        }
        if self.status_filter.is_some() {
            count += 1;
        }
        if self.date_range != DateRangeFilter::AllTime {
            count += 1;
        }
        count
    }
}

pub fn create_state() -> RwSignal<QuoteListState> {
    RwSignal::new(QuoteListState::default())
}
