use crate::domain::a003_employee::model;
use crate::shared::toast::ToastService;
use contracts::domain::a003_employee::aggregate::{EmployeeDto, EmployeeStatus};
use contracts::enums::department::Department;
use leptos::prelude::*;

#[component]
pub fn EmployeeDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let form = RwSignal::new(EmployeeDto::default());
    let saving = RwSignal::new(false);

    if let Some(existing_id) = id {
        if let Some(employee) = model::seed_employees()
            .iter()
            .find(|e| e.to_string_id() == existing_id)
        {
            form.set(EmployeeDto {
                id: Some(employee.to_string_id()),
                code: Some(employee.base.code.clone()),
                description: employee.base.description.clone(),
                status: employee.status.code().to_string(),
                department: employee.department.code().to_string(),
                designation: Some(employee.designation.clone()),
                join_date: employee.join_date,
                email: Some(employee.email.clone()),
                comment: employee.base.comment.clone(),
            });
        }
    }

    let is_edit_mode = move || form.get().id.is_some();

    let save = move |_| {
        let current = form.get();
        if current.description.trim().is_empty() {
            toasts.error("Missing Information", "Employee name is required");
            return;
        }

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_form(&current).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    toasts.success("Saved", "Employee saved (demo only, changes are discarded)");
                    on_saved.run(());
                }
                Err(e) => toasts.error("Save failed", &e),
            }
        });
    };

    view! {
        <div class="details-container employee-details">
            <div class="details-header">
                <h3>{move || if is_edit_mode() { "Edit Employee" } else { "New Employee" }}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="description">"Name"</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || form.get().description
                        on:input=move |ev| {
                            form.update(|f| f.description = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="designation">"Designation"</label>
                    <input
                        type="text"
                        id="designation"
                        prop:value=move || form.get().designation.clone().unwrap_or_default()
                        on:input=move |ev| {
                            form.update(|f| f.designation = Some(event_target_value(&ev)));
                        }
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="department">"Department"</label>
                        <select
                            id="department"
                            on:change=move |ev| {
                                form.update(|f| f.department = event_target_value(&ev));
                            }
                        >
                            {Department::all().into_iter().map(|d| view! {
                                <option
                                    value=d.code()
                                    selected=move || form.get().department == d.code()
                                >
                                    {d.display_name()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="status">"Status"</label>
                        <select
                            id="status"
                            on:change=move |ev| {
                                form.update(|f| f.status = event_target_value(&ev));
                            }
                        >
                            {EmployeeStatus::all().into_iter().map(|st| view! {
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

                <div class="form-group">
                    <label for="join_date">"Join Date"</label>
                    <input
                        type="date"
                        id="join_date"
                        prop:value=move || {
                            form.get()
                                .join_date
                                .map(|d| d.format("%Y-%m-%d").to_string())
                                .unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.join_date =
                                    chrono::NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok();
                            });
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="text"
                        id="email"
                        prop:value=move || form.get().email.clone().unwrap_or_default()
                        on:input=move |ev| {
                            form.update(|f| f.email = Some(event_target_value(&ev)));
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
