use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Centralized modal and toast management
    provide_context(ModalStackService::new());
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
