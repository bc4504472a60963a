use super::view_model::QuoteDetailsViewModel;
use contracts::domain::a002_quote::aggregate::QuoteStatus;
use leptos::prelude::*;

#[component]
pub fn QuoteDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = QuoteDetailsViewModel::new();
    vm.load_if_needed(id);

    // Clone vm for the individual closures
    let vm_clone = vm.clone();

    view! {
        <div class="details-container quote-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit Quote" } else { "New Quote" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="description">"Title"</label>
                    <input
                        type="text"
                        id="description"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().description
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.description = event_target_value(&ev));
                            }
                        }
                        placeholder="Short description of the scope"
                    />
                </div>

                <div class="form-group">
                    <label for="customer">"Customer"</label>
                    <input
                        type="text"
                        id="customer"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().customer_name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.customer_name = event_target_value(&ev));
                            }
                        }
                        placeholder="Customer name"
                    />
                </div>

                <div class="form-group">
                    <label for="status">"Status"</label>
                    <select
                        id="status"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.status = event_target_value(&ev));
                            }
                        }
                    >
                        {
                            let vm = vm_clone.clone();
                            QuoteStatus::all().into_iter().map(|st| {
                                let vm = vm.clone();
                                view! {
                                    <option
                                        value=st.code()
                                        selected=move || vm.form.get().status == st.code()
                                    >
                                        {st.display_name()}
                                    </option>
                                }
                            }).collect_view()
                        }
                    </select>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="total_cost">"Total Cost"</label>
                        <input
                            type="number"
                            id="total_cost"
                            min="0"
                            step="100"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().total_cost.to_string()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                    vm.form.update(|f| f.total_cost = value);
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="suggested_price">"Suggested Price"</label>
                        <input
                            type="number"
                            id="suggested_price"
                            min="0"
                            step="100"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().suggested_price.to_string()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                    vm.form.update(|f| f.suggested_price = value);
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="margin_percent">"Margin %"</label>
                        <input
                            type="number"
                            id="margin_percent"
                            step="0.1"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().margin_percent.to_string()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                    vm.form.update(|f| f.margin_percent = value);
                                }
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="comment">"Comment"</label>
                    <textarea
                        id="comment"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().comment.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.comment = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        placeholder="Additional notes (optional)"
                        rows="3"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.save_command(on_saved)
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.saving.get()
                    }
                >
                    {
                        let vm = vm_clone.clone();
                        move || if vm.saving.get() {
                            "Saving..."
                        } else if vm.is_edit_mode()() {
                            "Save"
                        } else {
                            "Create"
                        }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
