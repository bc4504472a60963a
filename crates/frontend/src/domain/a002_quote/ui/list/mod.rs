pub mod state;

use self::state::create_state;
use crate::domain::a002_quote::model;
use crate::domain::a002_quote::ui::details::QuoteDetails;
use crate::domain::a002_quote::ui::versions::QuoteVersionsModal;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::table::number_format::format_money;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a002_quote::aggregate::{Quote, QuoteStatus};
use contracts::shared::filter::{text_matches, DateRangeFilter};
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct QuoteRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub customer_name: String,
    pub status: QuoteStatus,
    pub total_cost: f64,
    pub suggested_price: f64,
    pub margin_percent: f64,
    pub valid_until: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Quote> for QuoteRow {
    fn from(q: &Quote) -> Self {
        Self {
            id: q.to_string_id(),
            code: q.base.code.clone(),
            description: q.base.description.clone(),
            customer_name: q.customer_name.clone(),
            status: q.status,
            total_cost: q.total_cost,
            suggested_price: q.suggested_price,
            margin_percent: q.margin_percent,
            valid_until: format_date_opt(q.valid_until),
            created_at: q.base.metadata.created_at,
        }
    }
}

impl Sortable for QuoteRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.to_lowercase().cmp(&other.code.to_lowercase()),
            "description" => self
                .description
                .to_lowercase()
                .cmp(&other.description.to_lowercase()),
            "customer" => self
                .customer_name
                .to_lowercase()
                .cmp(&other.customer_name.to_lowercase()),
            "status" => self.status.code().cmp(other.status.code()),
            "total_cost" => self
                .total_cost
                .partial_cmp(&other.total_cost)
                .unwrap_or(Ordering::Equal),
            "suggested_price" => self
                .suggested_price
                .partial_cmp(&other.suggested_price)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

fn status_badge_class(status: QuoteStatus) -> &'static str {
    match status {
        QuoteStatus::Draft => "badge badge--neutral",
        QuoteStatus::Sent => "badge badge--info",
        QuoteStatus::Accepted => "badge badge--success",
        QuoteStatus::Rejected => "badge badge--error",
        QuoteStatus::Expired => "badge badge--warning",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn QuoteList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let state = create_state();
    let (quotes, set_quotes) = signal::<Vec<Quote>>(model::seed_quotes());
    let filter_expanded = RwSignal::new(false);

    let reload = move || set_quotes.set(model::seed_quotes());

    let open_details_modal = move |id: Option<String>| {
        let id_val = id.clone();
        modal_stack.push_with_style(
            Some("max-width: min(760px, 95vw); width: min(760px, 95vw);".to_string()),
            move |handle| {
                view! {
                    <QuoteDetails
                        id=id_val.clone()
                        on_saved=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                        on_cancel=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let open_versions_modal = move |id: String| {
        modal_stack.push_with_style(
            Some("max-width: min(860px, 95vw); width: min(860px, 95vw);".to_string()),
            move |handle| {
                view! {
                    <QuoteVersionsModal
                        quote_id=id.clone()
                        on_close=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    // All criteria are AND-combined; the source vector is never mutated.
    let filtered_rows = move || {
        let s = state.get();
        let now = chrono::Utc::now();
        let mut rows: Vec<QuoteRow> = quotes
            .get()
            .iter()
            .filter(|q| {
                text_matches(
                    &s.search_term,
                    &[&q.base.code, &q.base.description, &q.customer_name],
                )
            })
            .filter(|q| s.status_filter.map_or(true, |f| q.status == f))
            .filter(|q| s.date_range.contains(now, q.base.metadata.created_at))
            .map(QuoteRow::from)
            .collect();
        sort_list(&mut rows, &s.sort_field, s.sort_ascending);
        rows
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>"Quotes"</h2>
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || state.get().search_term)
                        on_change=Callback::new(move |term: String| {
                            state.update(|s| s.search_term = term);
                        })
                        placeholder="Search code, title or customer..."
                    />
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        "New Quote"
                    </button>
                    <button class="button button--secondary" on:click=move |_| reload()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=Signal::derive(move || state.get().active_filters_count())
                filter_content=move || view! {
                    <div class="filter-panel__fields">
                        <label class="filter-field">
                            <span class="filter-field__label">"Status"</span>
                            <select
                                class="filter-field__select"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| s.status_filter = QuoteStatus::from_code(&value));
                                }
                            >
                                <option value="" selected=move || state.get().status_filter.is_none()>
                                    "All statuses"
                                </option>
                                {QuoteStatus::all().into_iter().map(|st| view! {
                                    <option
                                        value=st.code()
                                        selected=move || state.get().status_filter == Some(st)
                                    >
                                        {st.display_name()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </label>
                        <label class="filter-field">
                            <span class="filter-field__label">"Created"</span>
                            <select
                                class="filter-field__select"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| {
                                        s.date_range = DateRangeFilter::from_code(&value)
                                            .unwrap_or(DateRangeFilter::AllTime);
                                    });
                                }
                            >
                                {DateRangeFilter::all().into_iter().map(|range| view! {
                                    <option
                                        value=range.code()
                                        selected=move || state.get().date_range == range
                                    >
                                        {range.display_name()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </label>
                    </div>
                }.into_any()
                filter_tags=move || view! {
                    <div class="filter-tags">
                        {move || state.get().status_filter.map(|st| view! {
                            <FilterTag
                                label=format!("Status: {}", st.display_name())
                                on_remove=Callback::new(move |_| {
                                    state.update(|s| s.status_filter = None);
                                })
                            />
                        })}
                        {move || {
                            let range = state.get().date_range;
                            (range != DateRangeFilter::AllTime).then(|| view! {
                                <FilterTag
                                    label=format!("Created: {}", range.display_name())
                                    on_remove=Callback::new(move |_| {
                                        state.update(|s| s.date_range = DateRangeFilter::AllTime);
                                    })
                                />
                            })
                        }}
                    </div>
                }.into_any()
            />

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("code")>
                                "Number"
                                <span class={move || get_sort_class(&state.get().sort_field, "code")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "code", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("description")>
                                "Title"
                                <span class={move || get_sort_class(&state.get().sort_field, "description")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "description", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("customer")>
                                "Customer"
                                <span class={move || get_sort_class(&state.get().sort_field, "customer")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "customer", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("status")>
                                "Status"
                                <span class={move || get_sort_class(&state.get().sort_field, "status")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "status", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--numeric table__header-cell--sortable" on:click=toggle_sort("total_cost")>
                                "Total Cost"
                                <span class={move || get_sort_class(&state.get().sort_field, "total_cost")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "total_cost", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--numeric table__header-cell--sortable" on:click=toggle_sort("suggested_price")>
                                "Price"
                                <span class={move || get_sort_class(&state.get().sort_field, "suggested_price")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "suggested_price", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--numeric">"Margin %"</th>
                            <th class="table__header-cell">"Valid Until"</th>
                            <th class="table__header-cell">"Versions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered_rows();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="9">
                                            "No quotes match the current filters"
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                rows.into_iter().map(|row| {
                                    let id_for_click = row.id.clone();
                                    let id_for_versions = row.id.clone();
                                    view! {
                                        <tr
                                            class="table__row"
                                            on:click=move |_| open_details_modal(Some(id_for_click.clone()))
                                        >
                                            <td class="table__cell">{row.code}</td>
                                            <td class="table__cell">{row.description}</td>
                                            <td class="table__cell">{row.customer_name}</td>
                                            <td class="table__cell">
                                                <span class=status_badge_class(row.status)>
                                                    {row.status.display_name()}
                                                </span>
                                            </td>
                                            <td class="table__cell table__cell--numeric">{format_money(row.total_cost)}</td>
                                            <td class="table__cell table__cell--numeric">{format_money(row.suggested_price)}</td>
                                            <td class="table__cell table__cell--numeric">{format!("{:.1}", row.margin_percent)}</td>
                                            <td class="table__cell">{row.valid_until}</td>
                                            <td class="table__cell">
                                                <button
                                                    class="button button--ghost"
                                                    title="Version history"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        open_versions_modal(id_for_versions.clone());
                                                    }
                                                >
                                                    {icon("history")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <div class="list-footer">
                {move || format!("{} of {} quotes", filtered_rows().len(), quotes.get().len())}
            </div>
        </div>
    }
}
