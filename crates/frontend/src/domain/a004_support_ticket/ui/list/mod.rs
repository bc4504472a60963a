use crate::domain::a004_support_ticket::model;
use crate::domain::a004_support_ticket::ui::details::SupportTicketDetails;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a004_support_ticket::aggregate::{
    SupportTicket, TicketPriority, TicketStatus,
};
use contracts::shared::filter::{text_matches, DateRangeFilter};
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct TicketRow {
    pub id: String,
    pub code: String,
    pub subject: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub category: String,
    pub requester: String,
    pub assigned_to: String,
    pub created_ts: chrono::DateTime<chrono::Utc>,
    pub created_at: String,
}

impl From<&SupportTicket> for TicketRow {
    fn from(t: &SupportTicket) -> Self {
        Self {
            id: t.to_string_id(),
            code: t.base.code.clone(),
            subject: t.base.description.clone(),
            status: t.status,
            priority: t.priority,
            category: t.category.clone(),
            requester: t.requester.clone(),
            assigned_to: t.assigned_to.clone(),
            created_ts: t.base.metadata.created_at,
            created_at: format_datetime(t.base.metadata.created_at),
        }
    }
}

impl Sortable for TicketRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "subject" => self
                .subject
                .to_lowercase()
                .cmp(&other.subject.to_lowercase()),
            "requester" => self
                .requester
                .to_lowercase()
                .cmp(&other.requester.to_lowercase()),
            "created_at" => self.created_ts.cmp(&other.created_ts),
            _ => Ordering::Equal,
        }
    }
}

fn status_badge_class(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Open => "badge badge--error",
        TicketStatus::InProgress => "badge badge--info",
        TicketStatus::Resolved => "badge badge--success",
        TicketStatus::Closed => "badge badge--neutral",
    }
}

fn priority_badge_class(priority: TicketPriority) -> &'static str {
    match priority {
        TicketPriority::Low => "badge badge--neutral",
        TicketPriority::Medium => "badge badge--info",
        TicketPriority::High => "badge badge--warning",
        TicketPriority::Critical => "badge badge--error",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SupportTicketList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let (tickets, set_tickets) = signal::<Vec<SupportTicket>>(model::seed_tickets());
    let (search_term, set_search_term) = signal(String::new());
    let (status_filter, set_status_filter) = signal::<Option<TicketStatus>>(None);
    let (priority_filter, set_priority_filter) = signal::<Option<TicketPriority>>(None);
    let (date_range, set_date_range) = signal(DateRangeFilter::AllTime);
    let (sort_field, set_sort_field) = signal("created_at".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);
    let filter_expanded = RwSignal::new(true);

    let active_filters_count = move || {
        let mut count = 0;
        if !search_term.get().trim().is_empty() {
            count += 1;
        }
        if status_filter.get().is_some() {
            count += 1;
        }
        if priority_filter.get().is_some() {
            count += 1;
        }
        if date_range.get() != DateRangeFilter::AllTime {
            count += 1;
        }
        count
    };

    let open_details_modal = move |id: Option<String>| {
        let id_val = id.clone();
        modal_stack.push_with_style(
            Some("max-width: min(680px, 95vw); width: min(680px, 95vw);".to_string()),
            move |handle| {
                view! {
                    <SupportTicketDetails
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

    let filtered_rows = move || {
        let term = search_term.get();
        let status = status_filter.get();
        let priority = priority_filter.get();
        let range = date_range.get();
        let now = chrono::Utc::now();
        let mut rows: Vec<TicketRow> = tickets
            .get()
            .iter()
            .filter(|t| {
                text_matches(
                    &term,
                    &[&t.base.code, &t.base.description, &t.requester, &t.category],
                )
            })
            .filter(|t| status.map_or(true, |f| t.status == f))
            .filter(|t| priority.map_or(true, |f| t.priority == f))
            .filter(|t| range.contains(now, t.base.metadata.created_at))
            .map(TicketRow::from)
            .collect();
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get() == field {
                set_sort_ascending.update(|v| *v = !*v);
            } else {
                set_sort_field.set(field.to_string());
                set_sort_ascending.set(true);
            }
        }
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>"Support Tickets"</h2>
                <div class="header__actions">
                    <SearchInput
                        value=search_term
                        on_change=Callback::new(move |term: String| set_search_term.set(term))
                        placeholder="Search subject, requester or category..."
                    />
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        "New Ticket"
                    </button>
                    <button class="button button--secondary" on:click=move |_| set_tickets.set(model::seed_tickets())>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=Signal::derive(active_filters_count)
                filter_content=move || view! {
                    <div class="filter-panel__fields">
                        <label class="filter-field">
                            <span class="filter-field__label">"Status"</span>
                            <select
                                class="filter-field__select"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_status_filter.set(TicketStatus::from_code(&value));
                                }
                            >
                                <option value="" selected=move || status_filter.get().is_none()>
                                    "All statuses"
                                </option>
                                {TicketStatus::all().into_iter().map(|st| view! {
                                    <option value=st.code() selected=move || status_filter.get() == Some(st)>
                                        {st.display_name()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </label>
                        <label class="filter-field">
                            <span class="filter-field__label">"Priority"</span>
                            <select
                                class="filter-field__select"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_priority_filter.set(TicketPriority::from_code(&value));
                                }
                            >
                                <option value="" selected=move || priority_filter.get().is_none()>
                                    "All priorities"
                                </option>
                                {TicketPriority::all().into_iter().map(|p| view! {
                                    <option value=p.code() selected=move || priority_filter.get() == Some(p)>
                                        {p.display_name()}
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
                                    set_date_range.set(
                                        DateRangeFilter::from_code(&value)
                                            .unwrap_or(DateRangeFilter::AllTime),
                                    );
                                }
                            >
                                {DateRangeFilter::all().into_iter().map(|range| view! {
                                    <option value=range.code() selected=move || date_range.get() == range>
                                        {range.display_name()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </label>
                    </div>
                }.into_any()
                filter_tags=move || view! {
                    <div class="filter-tags">
                        {move || status_filter.get().map(|st| view! {
                            <FilterTag
                                label=format!("Status: {}", st.display_name())
                                on_remove=Callback::new(move |_| set_status_filter.set(None))
                            />
                        })}
                        {move || priority_filter.get().map(|p| view! {
                            <FilterTag
                                label=format!("Priority: {}", p.display_name())
                                on_remove=Callback::new(move |_| set_priority_filter.set(None))
                            />
                        })}
                        {move || {
                            let range = date_range.get();
                            (range != DateRangeFilter::AllTime).then(|| view! {
                                <FilterTag
                                    label=format!("Created: {}", range.display_name())
                                    on_remove=Callback::new(move |_| set_date_range.set(DateRangeFilter::AllTime))
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
                                "Ticket"
                                <span class={move || get_sort_class(&sort_field.get(), "code")}>
                                    {move || get_sort_indicator(&sort_field.get(), "code", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("subject")>
                                "Subject"
                                <span class={move || get_sort_class(&sort_field.get(), "subject")}>
                                    {move || get_sort_indicator(&sort_field.get(), "subject", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Priority"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("requester")>
                                "Requester"
                                <span class={move || get_sort_class(&sort_field.get(), "requester")}>
                                    {move || get_sort_indicator(&sort_field.get(), "requester", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell">"Assigned To"</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("created_at")>
                                "Created"
                                <span class={move || get_sort_class(&sort_field.get(), "created_at")}>
                                    {move || get_sort_indicator(&sort_field.get(), "created_at", sort_ascending.get())}
                                </span>
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered_rows();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="8">
                                            "No tickets match the current filters"
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                rows.into_iter().map(|row| {
                                    let id_for_click = row.id.clone();
                                    view! {
                                        <tr
                                            class="table__row"
                                            on:click=move |_| open_details_modal(Some(id_for_click.clone()))
                                        >
                                            <td class="table__cell">{row.code}</td>
                                            <td class="table__cell">{row.subject}</td>
                                            <td class="table__cell">
                                                <span class=status_badge_class(row.status)>
                                                    {row.status.display_name()}
                                                </span>
                                            </td>
                                            <td class="table__cell">
                                                <span class=priority_badge_class(row.priority)>
                                                    {row.priority.display_name()}
                                                </span>
                                            </td>
                                            <td class="table__cell">{row.category}</td>
                                            <td class="table__cell">{row.requester}</td>
                                            <td class="table__cell">{row.assigned_to}</td>
                                            <td class="table__cell">{row.created_at}</td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <div class="list-footer">
                {move || format!("{} of {} tickets", filtered_rows().len(), tickets.get().len())}
            </div>
        </div>
    }
}
