use crate::domain::a006_invoice::model;
use crate::domain::a006_invoice::ui::details::InvoiceDetails;
use crate::shared::components::table::number_format::format_money;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a006_invoice::aggregate::{Invoice, InvoiceStatus};
use contracts::shared::filter::text_matches;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct InvoiceRow {
    pub id: String,
    pub code: String,
    pub title: String,
    pub status: InvoiceStatus,
    pub customer_name: String,
    pub amount: f64,
    pub due_date: String,
}

impl From<&Invoice> for InvoiceRow {
    fn from(i: &Invoice) -> Self {
        Self {
            id: i.to_string_id(),
            code: i.base.code.clone(),
            title: i.base.description.clone(),
            status: i.status,
            customer_name: i.customer_name.clone(),
            amount: i.amount,
            due_date: format_date_opt(i.due_date),
        }
    }
}

impl Sortable for InvoiceRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "customer" => self
                .customer_name
                .to_lowercase()
                .cmp(&other.customer_name.to_lowercase()),
            "amount" => self
                .amount
                .partial_cmp(&other.amount)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

fn status_badge_class(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Draft => "badge badge--neutral",
        InvoiceStatus::Sent => "badge badge--info",
        InvoiceStatus::Paid => "badge badge--success",
        InvoiceStatus::Overdue => "badge badge--error",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn InvoiceList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let (invoices, set_invoices) = signal::<Vec<Invoice>>(model::seed_invoices());
    let (search_term, set_search_term) = signal(String::new());
    let (status_filter, set_status_filter) = signal::<Option<InvoiceStatus>>(None);
    let (sort_field, set_sort_field) = signal("code".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    let open_details_modal = move |id: Option<String>| {
        let id_val = id.clone();
        modal_stack.push_with_style(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            move |handle| {
                view! {
                    <InvoiceDetails
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
        let mut rows: Vec<InvoiceRow> = invoices
            .get()
            .iter()
            .filter(|i| {
                text_matches(
                    &term,
                    &[&i.base.code, &i.base.description, &i.customer_name],
                )
            })
            .filter(|i| status.map_or(true, |f| i.status == f))
            .map(InvoiceRow::from)
            .collect();
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    // Display-only footer aggregate over the filtered subset
    let outstanding_total = move || {
        invoices
            .get()
            .iter()
            .filter(|i| matches!(i.status, InvoiceStatus::Sent | InvoiceStatus::Overdue))
            .map(|i| i.amount)
            .sum::<f64>()
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
                <h2>"Invoices"</h2>
                <div class="header__actions">
                    <SearchInput
                        value=search_term
                        on_change=Callback::new(move |term: String| set_search_term.set(term))
                        placeholder="Search number, title or customer..."
                    />
                    <select
                        class="filter-field__select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_status_filter.set(InvoiceStatus::from_code(&value));
                        }
                    >
                        <option value="" selected=move || status_filter.get().is_none()>
                            "All statuses"
                        </option>
                        {InvoiceStatus::all().into_iter().map(|st| view! {
                            <option value=st.code() selected=move || status_filter.get() == Some(st)>
                                {st.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        "New Invoice"
                    </button>
                    <button class="button button--secondary" on:click=move |_| set_invoices.set(model::seed_invoices())>
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
                                "Number"
                                <span class={move || get_sort_class(&sort_field.get(), "code")}>
                                    {move || get_sort_indicator(&sort_field.get(), "code", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("customer")>
                                "Customer"
                                <span class={move || get_sort_class(&sort_field.get(), "customer")}>
                                    {move || get_sort_indicator(&sort_field.get(), "customer", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell table__header-cell--numeric table__header-cell--sortable" on:click=toggle_sort("amount")>
                                "Amount"
                                <span class={move || get_sort_class(&sort_field.get(), "amount")}>
                                    {move || get_sort_indicator(&sort_field.get(), "amount", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell">"Due Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered_rows();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="6">
                                            "No invoices match the current filters"
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
                                            <td class="table__cell">{row.title}</td>
                                            <td class="table__cell">{row.customer_name}</td>
                                            <td class="table__cell">
                                                <span class=status_badge_class(row.status)>
                                                    {row.status.display_name()}
                                                </span>
                                            </td>
                                            <td class="table__cell table__cell--numeric">{format_money(row.amount)}</td>
                                            <td class="table__cell">{row.due_date}</td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <div class="list-footer">
                {move || format!("Outstanding (sent + overdue): {}", format_money(outstanding_total()))}
            </div>
        </div>
    }
}
