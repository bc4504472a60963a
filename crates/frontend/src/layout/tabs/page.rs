//! TabPage component - wrapper around one tab's content
//!
//! Responsible for:
//! - showing/hiding the content depending on the active tab
//! - resolving the content view through the registry

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    // Reactive check whether this tab is the active one
    let is_active = move || {
        let current_active = tabs_store.active.get();
        current_active.as_ref() == Some(&tab_key_for_active_check)
    };

    log!("TabPage created for '{}'", tab_key);

    // Render content using the registry
    let tab_key_for_content = tab_key.clone();
    let content = render_tab_content(&tab_key_for_content);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
