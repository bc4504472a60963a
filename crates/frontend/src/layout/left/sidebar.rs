//! Sidebar component with collapsible menu groups, one per ERP module.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![("d400_overview", tab_label_for_key("d400_overview"), "activity")],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "file-text",
            items: vec![
                ("a002_quote", tab_label_for_key("a002_quote"), "file-text"),
                ("a001_customer", tab_label_for_key("a001_customer"), "customers"),
            ],
        },
        MenuGroup {
            id: "hr",
            label: "Human Resources",
            icon: "users",
            items: vec![("a003_employee", tab_label_for_key("a003_employee"), "users")],
        },
        MenuGroup {
            id: "finance",
            label: "Finance",
            icon: "credit-card",
            items: vec![("a006_invoice", tab_label_for_key("a006_invoice"), "receipt")],
        },
        MenuGroup {
            id: "logistics",
            label: "Logistics",
            icon: "truck",
            items: vec![("a005_shipment", tab_label_for_key("a005_shipment"), "truck")],
        },
        MenuGroup {
            id: "support",
            label: "Support",
            icon: "life-buoy",
            items: vec![(
                "a004_support_ticket",
                tab_label_for_key("a004_support_ticket"),
                "life-buoy",
            )],
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            icon: "settings",
            items: vec![("sys_numbering", tab_label_for_key("sys_numbering"), "hash")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Sales is the landing module, keep it expanded initially
    let expanded_groups = RwSignal::new(vec!["dashboards".to_string(), "sales".to_string()]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                    let group_id = group.id.to_string();
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();

                    view! {
                        <div>
                            // Group header
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded={
                                        let gid_exp = group_id_for_exp.clone();
                                        move || expanded_groups.get().contains(&gid_exp)
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            // Children
                            {
                                let gid_show = group_id.clone();
                                let items_stored = StoredValue::new(group.items.clone());
                                view! {
                                    <Show when=move || expanded_groups.get().contains(&gid_show)>
                                        <div class="app-sidebar__children">
                                            {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                                let item_id = StoredValue::new(id.to_string());
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            let iid = item_id.get_value();
                                                            ctx.active.get().as_ref().map(|a| a == &iid).unwrap_or(false)
                                                        }
                                                        style:padding-left="10px"
                                                        on:click=move |_| {
                                                            ctx.open_tab(id, label);
                                                        }
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{label}</span>
                                                        </div>
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </Show>
                                }
                            }
                        </div>
                    }
                }).collect_view()}
        </div>
    }
}
