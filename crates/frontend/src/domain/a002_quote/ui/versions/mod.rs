//! Quote version history and pricing comparison.
//!
//! Versions are read-only pricing snapshots; the comparison table shows
//! signed deltas with up/down indicators and a percent badge. A field
//! whose baseline value is zero renders a dash instead of a percent.

use crate::domain::a002_quote::model;
use crate::shared::components::table::number_format::{format_money, format_percent_signed};
use crate::shared::date_utils::format_datetime;
use contracts::domain::a002_quote::version::{QuoteVersion, QuoteVersionStatus};
use contracts::shared::version_diff::{diff_snapshots, ChangeType, FieldChange};
use leptos::prelude::*;

fn change_badge(change: &FieldChange) -> AnyView {
    let (arrow, cls) = match change.change_type {
        ChangeType::Increase => ("\u{2191}", "change-badge change-badge--up"),
        ChangeType::Decrease => ("\u{2193}", "change-badge change-badge--down"),
        ChangeType::Unchanged => ("", "change-badge change-badge--flat"),
    };
    let text = match change.change_percent {
        Some(pct) => format!("{}{}", arrow, format_percent_signed(pct)),
        None => "\u{2014}".to_string(),
    };
    view! { <span class=cls>{text}</span> }.into_any()
}

#[component]
pub fn QuoteVersionsModal(quote_id: String, on_close: Callback<()>) -> impl IntoView {
    let quotes = model::seed_quotes();
    let quote = quotes.iter().find(|q| q.to_string_id() == quote_id).cloned();

    let Some(quote) = quote else {
        return view! {
            <div class="details-container">
                <div class="error">"Quote not found"</div>
                <div class="details-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        }
        .into_any();
    };

    let versions = StoredValue::new(model::seed_versions(&quote));
    let version_count = versions.with_value(|v| v.len());

    // Default comparison: previous revision against the current one
    let (from_idx, set_from_idx) = signal(version_count.saturating_sub(2));
    let (to_idx, set_to_idx) = signal(version_count - 1);

    let changes = move || {
        versions.with_value(|v| {
            let from = &v[from_idx.get().min(v.len() - 1)];
            let to = &v[to_idx.get().min(v.len() - 1)];
            diff_snapshots(&from.snapshot(), &to.snapshot())
        })
    };

    let version_status_class = |status: QuoteVersionStatus| match status {
        QuoteVersionStatus::Current => "badge badge--success",
        QuoteVersionStatus::Superseded => "badge badge--neutral",
    };

    let title = format!("Version History - {}", quote.base.code);

    view! {
        <div class="details-container quote-versions">
            <div class="details-header">
                <h3>{title}</h3>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Version"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Total Cost"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Price"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Margin %"</th>
                            <th class="table__header-cell">"Created"</th>
                            <th class="table__header-cell">"Notes"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {versions.with_value(|v| v.clone()).into_iter().map(|version: QuoteVersion| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{version.label()}</td>
                                    <td class="table__cell">
                                        <span class=version_status_class(version.status)>
                                            {version.status.display_name()}
                                        </span>
                                    </td>
                                    <td class="table__cell table__cell--numeric">{format_money(version.total_cost)}</td>
                                    <td class="table__cell table__cell--numeric">{format_money(version.suggested_price)}</td>
                                    <td class="table__cell table__cell--numeric">{format!("{:.1}", version.margin_percent)}</td>
                                    <td class="table__cell">{format_datetime(version.created_at)}</td>
                                    <td class="table__cell">{version.notes}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="compare-controls">
                <label class="filter-field">
                    <span class="filter-field__label">"From"</span>
                    <select
                        class="filter-field__select"
                        on:change=move |ev| {
                            if let Ok(idx) = event_target_value(&ev).parse::<usize>() {
                                set_from_idx.set(idx);
                            }
                        }
                    >
                        {versions.with_value(|v| v.clone()).into_iter().enumerate().map(|(i, version)| view! {
                            <option value=i.to_string() selected=move || from_idx.get() == i>
                                {version.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"To"</span>
                    <select
                        class="filter-field__select"
                        on:change=move |ev| {
                            if let Ok(idx) = event_target_value(&ev).parse::<usize>() {
                                set_to_idx.set(idx);
                            }
                        }
                    >
                        {versions.with_value(|v| v.clone()).into_iter().enumerate().map(|(i, version)| view! {
                            <option value=i.to_string() selected=move || to_idx.get() == i>
                                {version.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
            </div>

            <div class="table-container">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Field"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Old"</th>
                            <th class="table__header-cell table__header-cell--numeric">"New"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Delta"</th>
                            <th class="table__header-cell">"Change"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || changes().into_iter().map(|change| {
                            let badge = change_badge(&change);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{change.field}</td>
                                    <td class="table__cell table__cell--numeric">{format_money(change.old_value)}</td>
                                    <td class="table__cell table__cell--numeric">{format_money(change.new_value)}</td>
                                    <td class="table__cell table__cell--numeric">{format_money(change.delta())}</td>
                                    <td class="table__cell">{badge}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="details-actions">
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
    .into_any()
}
