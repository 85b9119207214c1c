//! The single drawing page.

use leptos::prelude::*;

use crate::components::draw_pad::DrawPad;
use crate::components::result_panel::ResultPanel;

#[component]
pub fn PadPage() -> impl IntoView {
    view! {
        <main class="pad-page">
            <h1 class="pad-page__title">"Numerix"</h1>
            <p class="pad-page__hint">"Draw a digit from 0 to 9, then press Predict."</p>
            <DrawPad/>
            <ResultPanel/>
        </main>
    }
}
