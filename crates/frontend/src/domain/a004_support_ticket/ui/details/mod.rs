use crate::domain::a004_support_ticket::model;
use crate::shared::toast::ToastService;
use contracts::domain::a004_support_ticket::aggregate::{
    SupportTicketDto, TicketPriority, TicketStatus,
};
use leptos::prelude::*;

#[component]
pub fn SupportTicketDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let form = RwSignal::new(SupportTicketDto::default());
    let saving = RwSignal::new(false);

    if let Some(existing_id) = id {
        if let Some(ticket) = model::seed_tickets()
            .iter()
            .find(|t| t.to_string_id() == existing_id)
        {
            form.set(SupportTicketDto {
                id: Some(ticket.to_string_id()),
                code: Some(ticket.base.code.clone()),
                description: ticket.base.description.clone(),
                status: ticket.status.code().to_string(),
                priority: ticket.priority.code().to_string(),
                category: Some(ticket.category.clone()),
                requester: Some(ticket.requester.clone()),
                assigned_to: Some(ticket.assigned_to.clone()),
                comment: ticket.base.comment.clone(),
            });
        }
    }

    let is_edit_mode = move || form.get().id.is_some();

    let save = move |_| {
        let current = form.get();
        if current.description.trim().is_empty() {
            toasts.error("Missing Information", "Ticket subject is required");
            return;
        }
        if current
            .requester
            .as_deref()
            .map_or(true, |r| r.trim().is_empty())
        {
            toasts.error("Missing Information", "Requester is required");
            return;
        }

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_form(&current).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    toasts.success("Saved", "Ticket saved (demo only, changes are discarded)");
                    on_saved.run(());
                }
                Err(e) => toasts.error("Save failed", &e),
            }
        });
    };

    view! {
        <div class="details-container ticket-details">
            <div class="details-header">
                <h3>{move || if is_edit_mode() { "Edit Ticket" } else { "New Ticket" }}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="description">"Subject"</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || form.get().description
                        on:input=move |ev| {
                            form.update(|f| f.description = event_target_value(&ev));
                        }
                        placeholder="Short problem summary"
                    />
                </div>

                <div class="form-group">
                    <label for="requester">"Requester"</label>
                    <input
                        type="text"
                        id="requester"
                        prop:value=move || form.get().requester.clone().unwrap_or_default()
                        on:input=move |ev| {
                            form.update(|f| f.requester = Some(event_target_value(&ev)));
                        }
                    />
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
                            {TicketStatus::all().into_iter().map(|st| view! {
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
                        <label for="priority">"Priority"</label>
                        <select
                            id="priority"
                            on:change=move |ev| {
                                form.update(|f| f.priority = event_target_value(&ev));
                            }
                        >
                            {TicketPriority::all().into_iter().map(|p| view! {
                                <option
                                    value=p.code()
                                    selected=move || form.get().priority == p.code()
                                >
                                    {p.display_name()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-group">
                    <label for="category">"Category"</label>
                    <input
                        type="text"
                        id="category"
                        prop:value=move || form.get().category.clone().unwrap_or_default()
                        on:input=move |ev| {
                            form.update(|f| f.category = Some(event_target_value(&ev)));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="assigned_to">"Assigned To"</label>
                    <input
                        type="text"
                        id="assigned_to"
                        prop:value=move || form.get().assigned_to.clone().unwrap_or_default()
                        on:input=move |ev| {
                            form.update(|f| f.assigned_to = Some(event_target_value(&ev)));
                        }
                    />
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
