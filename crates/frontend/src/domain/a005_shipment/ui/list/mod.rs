use crate::domain::a005_shipment::model;
use crate::domain::a005_shipment::ui::details::ShipmentDetails;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a005_shipment::aggregate::{Shipment, ShipmentStatus};
use contracts::shared::filter::text_matches;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct ShipmentRow {
    pub id: String,
    pub code: String,
    pub reference: String,
    pub status: ShipmentStatus,
    pub carrier: String,
    pub origin: String,
    pub destination: String,
    pub ship_date: String,
}

impl From<&Shipment> for ShipmentRow {
    fn from(s: &Shipment) -> Self {
        Self {
            id: s.to_string_id(),
            code: s.base.code.clone(),
            reference: s.base.description.clone(),
            status: s.status,
            carrier: s.carrier.clone(),
            origin: s.origin.clone(),
            destination: s.destination.clone(),
            ship_date: format_date_opt(s.ship_date),
        }
    }
}

impl Sortable for ShipmentRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "carrier" => self
                .carrier
                .to_lowercase()
                .cmp(&other.carrier.to_lowercase()),
            "origin" => self.origin.to_lowercase().cmp(&other.origin.to_lowercase()),
            "destination" => self
                .destination
                .to_lowercase()
                .cmp(&other.destination.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

fn status_badge_class(status: ShipmentStatus) -> &'static str {
    match status {
        ShipmentStatus::Pending => "badge badge--neutral",
        ShipmentStatus::InTransit => "badge badge--info",
        ShipmentStatus::Delivered => "badge badge--success",
        ShipmentStatus::Delayed => "badge badge--error",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ShipmentList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let (shipments, set_shipments) = signal::<Vec<Shipment>>(model::seed_shipments());
    let (search_term, set_search_term) = signal(String::new());
    let (status_filter, set_status_filter) = signal::<Option<ShipmentStatus>>(None);
    let (sort_field, set_sort_field) = signal("code".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    let open_details_modal = move |id: Option<String>| {
        let id_val = id.clone();
        modal_stack.push_with_style(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            move |handle| {
                view! {
                    <ShipmentDetails
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
        let mut rows: Vec<ShipmentRow> = shipments
            .get()
            .iter()
            .filter(|s| {
                text_matches(
                    &term,
                    &[
                        &s.base.code,
                        &s.base.description,
                        &s.carrier,
                        &s.origin,
                        &s.destination,
                    ],
                )
            })
            .filter(|s| status.map_or(true, |f| s.status == f))
            .map(ShipmentRow::from)
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
                <h2>"Shipments"</h2>
                <div class="header__actions">
                    <SearchInput
                        value=search_term
                        on_change=Callback::new(move |term: String| set_search_term.set(term))
                        placeholder="Search reference, carrier or route..."
                    />
                    <select
                        class="filter-field__select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_status_filter.set(ShipmentStatus::from_code(&value));
                        }
                    >
                        <option value="" selected=move || status_filter.get().is_none()>
                            "All statuses"
                        </option>
                        {ShipmentStatus::all().into_iter().map(|st| view! {
                            <option value=st.code() selected=move || status_filter.get() == Some(st)>
                                {st.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        "New Shipment"
                    </button>
                    <button class="button button--secondary" on:click=move |_| set_shipments.set(model::seed_shipments())>
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
                            <th class="table__header-cell">"Reference"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("carrier")>
                                "Carrier"
                                <span class={move || get_sort_class(&sort_field.get(), "carrier")}>
                                    {move || get_sort_indicator(&sort_field.get(), "carrier", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("origin")>
                                "Origin"
                                <span class={move || get_sort_class(&sort_field.get(), "origin")}>
                                    {move || get_sort_indicator(&sort_field.get(), "origin", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("destination")>
                                "Destination"
                                <span class={move || get_sort_class(&sort_field.get(), "destination")}>
                                    {move || get_sort_indicator(&sort_field.get(), "destination", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell">"Ship Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered_rows();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="7">
                                            "No shipments match the current filters"
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
                                            <td class="table__cell">{row.reference}</td>
                                            <td class="table__cell">
                                                <span class=status_badge_class(row.status)>
                                                    {row.status.display_name()}
                                                </span>
                                            </td>
                                            <td class="table__cell">{row.carrier}</td>
                                            <td class="table__cell">{row.origin}</td>
                                            <td class="table__cell">{row.destination}</td>
                                            <td class="table__cell">{row.ship_date}</td>
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
