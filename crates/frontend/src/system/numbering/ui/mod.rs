//! Numbering scheme settings page.
//!
//! One scheme per document kind. Every field edit mutates the local copy
//! and the sample preview recomputes immediately; Save only simulates a
//! request (the demo has no persistence, changes live until the tab is
//! closed).

use crate::shared::components::page_header::PageHeader;
use crate::shared::toast::ToastService;
use contracts::system::numbering::{
    default_scheme_for, DocumentKind, NumberingScheme, ResetFrequency, Separator, YearFormat,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

const SAVE_DELAY_MS: u32 = 600;

#[component]
#[allow(non_snake_case)]
pub fn NumberingSettingsPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (selected_kind, set_selected_kind) = signal(DocumentKind::Quote);
    let schemes = RwSignal::new(
        DocumentKind::all()
            .into_iter()
            .map(|kind| (kind, default_scheme_for(kind)))
            .collect::<Vec<(DocumentKind, NumberingScheme)>>(),
    );
    let saving = RwSignal::new(false);

    let current_scheme = move || {
        let kind = selected_kind.get();
        schemes
            .get()
            .into_iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, s)| s)
            .unwrap_or_default()
    };

    // Field edits mutate the scheme in place; the preview below tracks it.
    let update_scheme = move |f: Box<dyn Fn(&mut NumberingScheme)>| {
        let kind = selected_kind.get_untracked();
        schemes.update(|list| {
            if let Some((_, scheme)) = list.iter_mut().find(|(k, _)| *k == kind) {
                f(scheme);
            }
        });
    };

    let sample = move || current_scheme().generate_sample(chrono::Utc::now());

    let save = move |_| {
        let scheme = current_scheme();
        if let Err(msg) = scheme.validate() {
            toasts.error("Missing Information", &msg);
            return;
        }

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(SAVE_DELAY_MS).await;
            saving.set(false);
            toasts.success(
                "Saved",
                "Numbering scheme saved (demo only, changes are discarded)",
            );
        });
    };

    let reset = move |_| {
        let kind = selected_kind.get_untracked();
        schemes.update(|list| {
            if let Some((_, scheme)) = list.iter_mut().find(|(k, _)| *k == kind) {
                *scheme = default_scheme_for(kind);
            }
        });
        toasts.info("Reset", "Scheme restored to factory defaults");
    };

    view! {
        <div class="content">
            <PageHeader
                title="Numbering Schemes"
                subtitle="How quote, contract and invoice numbers are generated".to_string()
            >
                <></>
            </PageHeader>

            <div class="numbering-kinds">
                {DocumentKind::all().into_iter().map(|kind| view! {
                    <button
                        class="kind-tab"
                        class:kind-tab--active=move || selected_kind.get() == kind
                        on:click=move |_| set_selected_kind.set(kind)
                    >
                        {kind.display_name()}
                    </button>
                }).collect_view()}
            </div>

            <div class="numbering-preview">
                <span class="numbering-preview__label">"Sample"</span>
                <span class="numbering-preview__value">{sample}</span>
            </div>

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="prefix">"Prefix"</label>
                        <input
                            type="text"
                            id="prefix"
                            prop:value=move || current_scheme().prefix
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                update_scheme(Box::new(move |s| s.prefix = value.clone()));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="separator">"Separator"</label>
                        <select
                            id="separator"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                update_scheme(Box::new(move |s| {
                                    s.separator =
                                        Separator::from_code(&value).unwrap_or(Separator::Dash);
                                }));
                            }
                        >
                            {Separator::all().into_iter().map(|sep| view! {
                                <option
                                    value=sep.as_str()
                                    selected=move || current_scheme().separator == sep
                                >
                                    {sep.display_name()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group form-group--checkbox">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || current_scheme().include_year
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    update_scheme(Box::new(move |s| s.include_year = checked));
                                }
                            />
                            "Include year"
                        </label>
                    </div>

                    <div class="form-group">
                        <label for="year_format">"Year format"</label>
                        <select
                            id="year_format"
                            disabled=move || !current_scheme().include_year
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                update_scheme(Box::new(move |s| {
                                    s.year_format = YearFormat::from_code(&value)
                                        .unwrap_or(YearFormat::TwoDigit);
                                }));
                            }
                        >
                            {YearFormat::all().into_iter().map(|yf| view! {
                                <option
                                    value=yf.code()
                                    selected=move || current_scheme().year_format == yf
                                >
                                    {yf.code()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group form-group--checkbox">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || current_scheme().include_month
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    update_scheme(Box::new(move |s| s.include_month = checked));
                                }
                            />
                            "Include month"
                        </label>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="branch_code">"Branch code"</label>
                        <input
                            type="text"
                            id="branch_code"
                            placeholder="Optional, e.g. HQ"
                            prop:value=move || current_scheme().branch_code.unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                update_scheme(Box::new(move |s| {
                                    s.branch_code = if value.is_empty() {
                                        None
                                    } else {
                                        Some(value.clone())
                                    };
                                }));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="category_code">"Category code"</label>
                        <input
                            type="text"
                            id="category_code"
                            placeholder="Optional, e.g. ENT"
                            prop:value=move || current_scheme().category_code.unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                update_scheme(Box::new(move |s| {
                                    s.category_code = if value.is_empty() {
                                        None
                                    } else {
                                        Some(value.clone())
                                    };
                                }));
                            }
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="sequence_length">"Sequence length"</label>
                        <input
                            type="number"
                            id="sequence_length"
                            min="1"
                            max="10"
                            prop:value=move || current_scheme().sequence_length.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(1).max(1);
                                update_scheme(Box::new(move |s| s.sequence_length = value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="current_sequence">"Current sequence"</label>
                        <input
                            type="number"
                            id="current_sequence"
                            min="0"
                            prop:value=move || current_scheme().current_sequence.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(0);
                                update_scheme(Box::new(move |s| s.current_sequence = value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="reset_frequency">"Reset frequency"</label>
                        <select
                            id="reset_frequency"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                update_scheme(Box::new(move |s| {
                                    s.reset_frequency = ResetFrequency::from_code(&value)
                                        .unwrap_or(ResetFrequency::Never);
                                }));
                            }
                        >
                            {ResetFrequency::all().into_iter().map(|rf| view! {
                                <option
                                    value=rf.code()
                                    selected=move || current_scheme().reset_frequency == rf
                                >
                                    {rf.display_name()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="btn btn-secondary" on:click=reset>
                    "Reset to defaults"
                </button>
            </div>
        </div>
    }
}
