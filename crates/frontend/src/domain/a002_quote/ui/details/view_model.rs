use crate::domain::a002_quote::model;
use crate::shared::toast::ToastService;
use contracts::domain::a002_quote::aggregate::QuoteDto;
use leptos::prelude::*;

/// ViewModel for the quote details form
#[derive(Clone)]
pub struct QuoteDetailsViewModel {
    pub form: RwSignal<QuoteDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    toasts: ToastService,
}

impl QuoteDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(QuoteDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            toasts: use_context::<ToastService>().expect("ToastService not found in context"),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    fn validate_form(dto: &QuoteDto) -> Result<(), &'static str> {
        if dto.description.trim().is_empty() {
            return Err("Quote title is required");
        }
        if dto.customer_name.trim().is_empty() {
            return Err("Customer is required");
        }
        Ok(())
    }

    /// Pre-fill the form from the seeded fixture set when editing
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let quotes = model::seed_quotes();
        let Some(quote) = quotes.iter().find(|q| q.to_string_id() == existing_id) else {
            self.error.set(Some("Quote not found".to_string()));
            return;
        };

        let dto = QuoteDto {
            id: Some(quote.to_string_id()),
            code: Some(quote.base.code.clone()),
            description: quote.base.description.clone(),
            status: quote.status.code().to_string(),
            customer_name: quote.customer_name.clone(),
            total_cost: quote.total_cost,
            suggested_price: quote.suggested_price,
            margin_percent: quote.margin_percent,
            valid_until: quote.valid_until,
            comment: quote.base.comment.clone(),
        };
        self.form.set(dto);
    }

    /// Simulated save: shows the in-flight state, then discards the data.
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get();

        if let Err(msg) = Self::validate_form(&current) {
            self.error.set(Some(msg.to_string()));
            self.toasts.error("Missing Information", msg);
            return;
        }

        let error = self.error;
        let saving = self.saving;
        let toasts = self.toasts;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_form(&current).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    toasts.success("Saved", "Quote saved (demo only, changes are discarded)");
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
