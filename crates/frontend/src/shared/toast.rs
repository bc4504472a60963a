//! Toast notifications ("Missing Information", "Saved", ...)
//!
//! Same service-through-context shape as the modal stack: pages push
//! toasts, `ToastHost` renders them at the app root and each toast
//! dismisses itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    title: String,
    message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn push(&self, kind: ToastKind, title: &str, message: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                title: title.to_string(),
                message: message.to_string(),
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn success(&self, title: &str, message: &str) {
        self.push(ToastKind::Success, title, message);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.push(ToastKind::Error, title, message);
    }

    pub fn info(&self, title: &str, message: &str) {
        self.push(ToastKind::Info, title, message);
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

/// Renders the toast stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-container">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() on:click=move |_| svc.dismiss(id)>
                            <div class="toast__title">{toast.title}</div>
                            <div class="toast__message">{toast.message}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
