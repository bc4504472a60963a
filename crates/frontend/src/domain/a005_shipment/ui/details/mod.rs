use crate::domain::a005_shipment::model;
use crate::shared::toast::ToastService;
use contracts::domain::a005_shipment::aggregate::{ShipmentDto, ShipmentStatus};
use leptos::prelude::*;

#[component]
pub fn ShipmentDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let form = RwSignal::new(ShipmentDto::default());
    let saving = RwSignal::new(false);

    if let Some(existing_id) = id {
        if let Some(shipment) = model::seed_shipments()
            .iter()
            .find(|s| s.to_string_id() == existing_id)
        {
            form.set(ShipmentDto {
                id: Some(shipment.to_string_id()),
                code: Some(shipment.base.code.clone()),
                description: shipment.base.description.clone(),
                status: shipment.status.code().to_string(),
                carrier: Some(shipment.carrier.clone()),
                origin: Some(shipment.origin.clone()),
                destination: Some(shipment.destination.clone()),
                ship_date: shipment.ship_date,
                comment: shipment.base.comment.clone(),
            });
        }
    }

    let is_edit_mode = move || form.get().id.is_some();

    let save = move |_| {
        let current = form.get();
        if current.description.trim().is_empty() {
            toasts.error("Missing Information", "Shipment reference is required");
            return;
        }
        if current
            .carrier
            .as_deref()
            .map_or(true, |c| c.trim().is_empty())
        {
            toasts.error("Missing Information", "Carrier is required");
            return;
        }

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_form(&current).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    toasts.success("Saved", "Shipment saved (demo only, changes are discarded)");
                    on_saved.run(());
                }
                Err(e) => toasts.error("Save failed", &e),
            }
        });
    };

    view! {
        <div class="details-container shipment-details">
            <div class="details-header">
                <h3>{move || if is_edit_mode() { "Edit Shipment" } else { "New Shipment" }}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="description">"Reference"</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || form.get().description
                        on:input=move |ev| {
                            form.update(|f| f.description = event_target_value(&ev));
                        }
                        placeholder="What is being shipped"
                    />
                </div>

                <div class="form-group">
                    <label for="carrier">"Carrier"</label>
                    <input
                        type="text"
                        id="carrier"
                        prop:value=move || form.get().carrier.clone().unwrap_or_default()
                        on:input=move |ev| {
                            form.update(|f| f.carrier = Some(event_target_value(&ev)));
                        }
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="origin">"Origin"</label>
                        <input
                            type="text"
                            id="origin"
                            prop:value=move || form.get().origin.clone().unwrap_or_default()
                            on:input=move |ev| {
                                form.update(|f| f.origin = Some(event_target_value(&ev)));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="destination">"Destination"</label>
                        <input
                            type="text"
                            id="destination"
                            prop:value=move || form.get().destination.clone().unwrap_or_default()
                            on:input=move |ev| {
                                form.update(|f| f.destination = Some(event_target_value(&ev)));
                            }
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="status">"Status"</label>
                        <select
                            id="status"
                            on:change=move |ev| {
                                form.update(|f| f.status = event_target_value(&ev));
                            }
                        >
                            {ShipmentStatus::all().into_iter().map(|st| view! {
                                <option
                                    value=st.code()
                                    selected=move || form.get().status == st.code()
                                >
                                    {st.display_name()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="ship_date">"Ship Date"</label>
                        <input
                            type="date"
                            id="ship_date"
                            prop:value=move || {
                                form.get()
                                    .ship_date
                                    .map(|d| d.format("%Y-%m-%d").to_string())
                                    .unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| {
                                    f.ship_date =
                                        chrono::NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok();
                                });
                            }
                        />
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
