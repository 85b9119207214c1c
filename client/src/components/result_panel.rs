//! Result panel: the predicted digit and its confidence.

#[cfg(test)]
#[path = "result_panel_test.rs"]
mod result_panel_test;

use leptos::prelude::*;

use crate::net::types::Prediction;
use crate::state::prediction::PredictionState;

/// Shown in place of a digit before the first prediction and after a clear.
pub const NO_PREDICTION: &str = "-";

#[must_use]
pub fn label_text(result: Option<&Prediction>) -> String {
    result.map_or_else(|| NO_PREDICTION.to_owned(), |p| p.label.to_string())
}

/// Confidence as a percentage with two decimals, or `None` when there is no
/// result. A confidence of exactly zero still yields `"0.00"`.
#[must_use]
pub fn confidence_text(result: Option<&Prediction>) -> Option<String> {
    result.map(|p| p.confidence.to_string())
}

#[must_use]
pub fn prediction_line(result: Option<&Prediction>) -> String {
    format!("Prediction: {}", label_text(result))
}

#[must_use]
pub fn confidence_line(result: Option<&Prediction>) -> Option<String> {
    confidence_text(result).map(|c| format!("Confidence: {c}%"))
}

/// Reads the shared [`PredictionState`] and renders the last result.
#[component]
pub fn ResultPanel() -> impl IntoView {
    let prediction = expect_context::<RwSignal<PredictionState>>();

    let prediction_text = move || prediction.with(|s| prediction_line(s.result.as_ref()));
    let confidence = move || prediction.with(|s| confidence_line(s.result.as_ref()));
    let awaiting = move || prediction.with(PredictionState::is_awaiting);

    view! {
        <section class="result-panel" aria-live="polite">
            <p class="result-panel__digit">{prediction_text}</p>
            {move || confidence().map(|line| view! { <p class="result-panel__confidence">{line}</p> })}
            <Show when=awaiting>
                <p class="result-panel__pending">"Predicting..."</p>
            </Show>
        </section>
    }
}
