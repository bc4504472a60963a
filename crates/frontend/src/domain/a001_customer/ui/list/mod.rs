use crate::domain::a001_customer::model;
use crate::domain::a001_customer::ui::details::CustomerDetails;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerStatus};
use contracts::shared::filter::text_matches;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct CustomerRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub status: CustomerStatus,
    pub industry: String,
    pub city: String,
    pub contact_person: String,
    pub email: String,
    pub created_ts: chrono::DateTime<chrono::Utc>,
    pub created_at: String,
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.to_string_id(),
            code: c.base.code.clone(),
            name: c.base.description.clone(),
            status: c.status,
            industry: c.industry.clone(),
            city: c.city.clone(),
            contact_person: c.contact_person.clone(),
            email: c.email.clone(),
            created_ts: c.base.metadata.created_at,
            created_at: format_datetime(c.base.metadata.created_at),
        }
    }
}

impl Sortable for CustomerRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.to_lowercase().cmp(&other.code.to_lowercase()),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "industry" => self
                .industry
                .to_lowercase()
                .cmp(&other.industry.to_lowercase()),
            "city" => self.city.to_lowercase().cmp(&other.city.to_lowercase()),
            "created_at" => self.created_ts.cmp(&other.created_ts),
            _ => Ordering::Equal,
        }
    }
}

fn status_badge_class(status: CustomerStatus) -> &'static str {
    match status {
        CustomerStatus::Lead => "badge badge--info",
        CustomerStatus::Prospect => "badge badge--warning",
        CustomerStatus::Active => "badge badge--success",
        CustomerStatus::Inactive => "badge badge--neutral",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let (customers, set_customers) = signal::<Vec<Customer>>(model::seed_customers());
    let (search_term, set_search_term) = signal(String::new());
    let (status_filter, set_status_filter) = signal::<Option<CustomerStatus>>(None);
    let (sort_field, set_sort_field) = signal("name".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let open_details_modal = move |id: Option<String>| {
        let id_val = id.clone();
        modal_stack.push_with_style(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            move |handle| {
                view! {
                    <CustomerDetails
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
        let mut rows: Vec<CustomerRow> = customers
            .get()
            .iter()
            .filter(|c| {
                text_matches(
                    &term,
                    &[&c.base.code, &c.base.description, &c.city, &c.contact_person],
                )
            })
            .filter(|c| status.map_or(true, |f| c.status == f))
            .map(CustomerRow::from)
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
                <h2>"Customers"</h2>
                <div class="header__actions">
                    <SearchInput
                        value=search_term
                        on_change=Callback::new(move |term: String| set_search_term.set(term))
                        placeholder="Search name, city or contact..."
                    />
                    <select
                        class="filter-field__select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_status_filter.set(CustomerStatus::from_code(&value));
                        }
                    >
                        <option value="" selected=move || status_filter.get().is_none()>
                            "All statuses"
                        </option>
                        {CustomerStatus::all().into_iter().map(|st| view! {
                            <option value=st.code() selected=move || status_filter.get() == Some(st)>
                                {st.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        "New Customer"
                    </button>
                    <button class="button button--secondary" on:click=move |_| set_customers.set(model::seed_customers())>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("code")>
                                "Code"
                                <span class={move || get_sort_class(&sort_field.get(), "code")}>
                                    {move || get_sort_indicator(&sort_field.get(), "code", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Name"
                                <span class={move || get_sort_class(&sort_field.get(), "name")}>
                                    {move || get_sort_indicator(&sort_field.get(), "name", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("industry")>
                                "Industry"
                                <span class={move || get_sort_class(&sort_field.get(), "industry")}>
                                    {move || get_sort_indicator(&sort_field.get(), "industry", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("city")>
                                "City"
                                <span class={move || get_sort_class(&sort_field.get(), "city")}>
                                    {move || get_sort_indicator(&sort_field.get(), "city", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell">"Contact"</th>
                            <th class="table__header-cell">"Email"</th>
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
                                            "No customers match the current filters"
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
                                            <td class="table__cell">{row.name}</td>
                                            <td class="table__cell">
                                                <span class=status_badge_class(row.status)>
                                                    {row.status.display_name()}
                                                </span>
                                            </td>
                                            <td class="table__cell">{row.industry}</td>
                                            <td class="table__cell">{row.city}</td>
                                            <td class="table__cell">{row.contact_person}</td>
                                            <td class="table__cell">{row.email}</td>
                                            <td class="table__cell">{row.created_at}</td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
