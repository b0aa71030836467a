//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Chart & Table Extraction"</h1>
            <p class="subtitle">
                "Upload a PDF or an image. Charts, graphs and tables are detected, "
                "read and analysed: trend, extrema, anomalies and a short summary."
            </p>
        </div>
    }
}
