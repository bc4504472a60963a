use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::Tabs;
use crate::layout::Shell;
use crate::shared::modal_stack::ModalHost;
use crate::shared::toast::ToastHost;
use leptos::prelude::*;
// Tab-based navigation; no Router components, the active tab is mirrored
// into the URL query string by AppGlobalContext.

#[component]
pub fn AppRoutes() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Initialize URL integration. This runs once when the component is created.
    tabs_store.init_url_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
        <ModalHost />
        <ToastHost />
    }
}
