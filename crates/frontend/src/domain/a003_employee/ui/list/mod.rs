use crate::domain::a003_employee::model;
use crate::domain::a003_employee::ui::details::EmployeeDetails;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a003_employee::aggregate::{Employee, EmployeeStatus};
use contracts::enums::department::Department;
use contracts::shared::filter::text_matches;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct EmployeeRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub status: EmployeeStatus,
    pub department: Department,
    pub designation: String,
    pub join_date: String,
    pub email: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.to_string_id(),
            code: e.base.code.clone(),
            name: e.base.description.clone(),
            status: e.status,
            department: e.department,
            designation: e.designation.clone(),
            join_date: format_date_opt(e.join_date),
            email: e.email.clone(),
        }
    }
}

impl Sortable for EmployeeRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.to_lowercase().cmp(&other.code.to_lowercase()),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "department" => self
                .department
                .display_name()
                .cmp(other.department.display_name()),
            "designation" => self
                .designation
                .to_lowercase()
                .cmp(&other.designation.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

fn status_badge_class(status: EmployeeStatus) -> &'static str {
    match status {
        EmployeeStatus::Active => "badge badge--success",
        EmployeeStatus::OnLeave => "badge badge--warning",
        EmployeeStatus::Resigned => "badge badge--neutral",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let (employees, set_employees) = signal::<Vec<Employee>>(model::seed_employees());
    let (search_term, set_search_term) = signal(String::new());
    let (status_filter, set_status_filter) = signal::<Option<EmployeeStatus>>(None);
    let (department_filter, set_department_filter) = signal::<Option<Department>>(None);
    let (sort_field, set_sort_field) = signal("code".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let open_details_modal = move |id: Option<String>| {
        let id_val = id.clone();
        modal_stack.push_with_style(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            move |handle| {
                view! {
                    <EmployeeDetails
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
        let department = department_filter.get();
        let mut rows: Vec<EmployeeRow> = employees
            .get()
            .iter()
            .filter(|e| {
                text_matches(
                    &term,
                    &[&e.base.code, &e.base.description, &e.designation, &e.email],
                )
            })
            .filter(|e| status.map_or(true, |f| e.status == f))
            .filter(|e| department.map_or(true, |f| e.department == f))
            .map(EmployeeRow::from)
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
                <h2>"Employees"</h2>
                <div class="header__actions">
                    <SearchInput
                        value=search_term
                        on_change=Callback::new(move |term: String| set_search_term.set(term))
                        placeholder="Search name, code or designation..."
                    />
                    <select
                        class="filter-field__select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_department_filter.set(Department::from_code(&value));
                        }
                    >
                        <option value="" selected=move || department_filter.get().is_none()>
                            "All departments"
                        </option>
                        {Department::all().into_iter().map(|d| view! {
                            <option value=d.code() selected=move || department_filter.get() == Some(d)>
                                {d.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                    <select
                        class="filter-field__select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_status_filter.set(EmployeeStatus::from_code(&value));
                        }
                    >
                        <option value="" selected=move || status_filter.get().is_none()>
                            "All statuses"
                        </option>
                        {EmployeeStatus::all().into_iter().map(|st| view! {
                            <option value=st.code() selected=move || status_filter.get() == Some(st)>
                                {st.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        "New Employee"
                    </button>
                    <button class="button button--secondary" on:click=move |_| set_employees.set(model::seed_employees())>
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
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("department")>
                                "Department"
                                <span class={move || get_sort_class(&sort_field.get(), "department")}>
                                    {move || get_sort_indicator(&sort_field.get(), "department", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("designation")>
                                "Designation"
                                <span class={move || get_sort_class(&sort_field.get(), "designation")}>
                                    {move || get_sort_indicator(&sort_field.get(), "designation", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Join Date"</th>
                            <th class="table__header-cell">"Email"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered_rows();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="7">
                                            "No employees match the current filters"
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
                                            <td class="table__cell">{row.department.display_name()}</td>
                                            <td class="table__cell">{row.designation}</td>
                                            <td class="table__cell">
                                                <span class=status_badge_class(row.status)>
                                                    {row.status.display_name()}
                                                </span>
                                            </td>
                                            <td class="table__cell">{row.join_date}</td>
                                            <td class="table__cell">{row.email}</td>
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
