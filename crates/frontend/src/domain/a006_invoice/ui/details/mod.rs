use crate::domain::a006_invoice::model;
use crate::shared::toast::ToastService;
use contracts::domain::a006_invoice::aggregate::{InvoiceDto, InvoiceStatus};
use leptos::prelude::*;

#[component]
pub fn InvoiceDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let form = RwSignal::new(InvoiceDto::default());
    let saving = RwSignal::new(false);

    if let Some(existing_id) = id {
        if let Some(invoice) = model::seed_invoices()
            .iter()
            .find(|i| i.to_string_id() == existing_id)
        {
            form.set(InvoiceDto {
                id: Some(invoice.to_string_id()),
                code: Some(invoice.base.code.clone()),
                description: invoice.base.description.clone(),
                status: invoice.status.code().to_string(),
                customer_name: invoice.customer_name.clone(),
                amount: invoice.amount,
                due_date: invoice.due_date,
                comment: invoice.base.comment.clone(),
            });
        }
    }

    let is_edit_mode = move || form.get().id.is_some();

    let save = move |_| {
        let current = form.get();
        if current.description.trim().is_empty() {
            toasts.error("Missing Information", "Invoice title is required");
            return;
        }
        if current.customer_name.trim().is_empty() {
            toasts.error("Missing Information", "Customer is required");
            return;
        }

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_form(&current).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    toasts.success("Saved", "Invoice saved (demo only, changes are discarded)");
                    on_saved.run(());
                }
                Err(e) => toasts.error("Save failed", &e),
            }
        });
    };

    view! {
        <div class="details-container invoice-details">
            <div class="details-header">
                <h3>{move || if is_edit_mode() { "Edit Invoice" } else { "New Invoice" }}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="description">"Title"</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || form.get().description
                        on:input=move |ev| {
                            form.update(|f| f.description = event_target_value(&ev));
                        }
                        placeholder="What is being billed"
                    />
                </div>

                <div class="form-group">
                    <label for="customer">"Customer"</label>
                    <input
                        type="text"
                        id="customer"
                        prop:value=move || form.get().customer_name
                        on:input=move |ev| {
                            form.update(|f| f.customer_name = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="amount">"Amount"</label>
                        <input
                            type="number"
                            id="amount"
                            min="0"
                            step="50"
                            prop:value=move || form.get().amount.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                form.update(|f| f.amount = value);
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="status">"Status"</label>
                        <select
                            id="status"
                            on:change=move |ev| {
                                form.update(|f| f.status = event_target_value(&ev));
                            }
                        >
                            {InvoiceStatus::all().into_iter().map(|st| view! {
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
                        <label for="due_date">"Due Date"</label>
                        <input
                            type="date"
                            id="due_date"
                            prop:value=move || {
                                form.get()
                                    .due_date
                                    .map(|d| d.format("%Y-%m-%d").to_string())
                                    .unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| {
                                    f.due_date =
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
