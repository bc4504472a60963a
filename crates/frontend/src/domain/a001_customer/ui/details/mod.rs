use crate::domain::a001_customer::model;
use crate::shared::toast::ToastService;
use contracts::domain::a001_customer::aggregate::{CustomerDto, CustomerStatus};
use leptos::prelude::*;

#[component]
pub fn CustomerDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let form = RwSignal::new(CustomerDto::default());
    let saving = RwSignal::new(false);

    // Pre-fill from the fixture set when editing
    if let Some(existing_id) = id {
        if let Some(customer) = model::seed_customers()
            .iter()
            .find(|c| c.to_string_id() == existing_id)
        {
            form.set(CustomerDto {
                id: Some(customer.to_string_id()),
                code: Some(customer.base.code.clone()),
                description: customer.base.description.clone(),
                status: customer.status.code().to_string(),
                industry: Some(customer.industry.clone()),
                city: Some(customer.city.clone()),
                contact_person: Some(customer.contact_person.clone()),
                email: Some(customer.email.clone()),
                comment: customer.base.comment.clone(),
            });
        }
    }

    let is_edit_mode = move || form.get().id.is_some();

    let save = move |_| {
        let current = form.get();
        if current.description.trim().is_empty() {
            toasts.error("Missing Information", "Customer name is required");
            return;
        }

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_form(&current).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    toasts.success("Saved", "Customer saved (demo only, changes are discarded)");
                    on_saved.run(());
                }
                Err(e) => toasts.error("Save failed", &e),
            }
        });
    };

    let text_input = move |label: &'static str,
                           id: &'static str,
                           getter: fn(&CustomerDto) -> String,
                           setter: fn(&mut CustomerDto, String)| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type="text"
                    id=id
                    prop:value=move || getter(&form.get())
                    on:input=move |ev| {
                        form.update(|f| setter(f, event_target_value(&ev)));
                    }
                />
            </div>
        }
    };

    view! {
        <div class="details-container customer-details">
            <div class="details-header">
                <h3>{move || if is_edit_mode() { "Edit Customer" } else { "New Customer" }}</h3>
            </div>

            <div class="details-form">
                {text_input("Name", "description", |f| f.description.clone(), |f, v| f.description = v)}
                {text_input("Industry", "industry", |f| f.industry.clone().unwrap_or_default(), |f, v| f.industry = Some(v))}
                {text_input("City", "city", |f| f.city.clone().unwrap_or_default(), |f, v| f.city = Some(v))}
                {text_input("Contact Person", "contact", |f| f.contact_person.clone().unwrap_or_default(), |f, v| f.contact_person = Some(v))}
                {text_input("Email", "email", |f| f.email.clone().unwrap_or_default(), |f, v| f.email = Some(v))}

                <div class="form-group">
                    <label for="status">"Status"</label>
                    <select
                        id="status"
                        on:change=move |ev| {
                            form.update(|f| f.status = event_target_value(&ev));
                        }
                    >
                        {CustomerStatus::all().into_iter().map(|st| view! {
                            <option
                                value=st.code()
                                selected=move || form.get().status == st.code()
                            >
                                {st.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
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
