use leptos::*;

use crate::presentation::ProcessingStage;
use crate::types::ProcessingTask;

/// Progress of the running task: spinner or bar, message, stage checklist.
#[component]
pub fn ProgressView(#[prop(into)] task: Signal<ProcessingTask>) -> impl IntoView {
    let progress = move || task.with(|t| t.progress);
    // Nothing reported yet
    let indeterminate = move || progress() == 0;

    view! {
        <div class="progress-section show">
            <div class="progress-header">
                <span class="spinner" class:indeterminate=indeterminate></span>
                <span class="progress-title">"Analysing your document"</span>
                <Show when=move || !indeterminate() fallback=|| view! {}>
                    <span class="progress-percent">{move || format!("{}%", progress())}</span>
                </Show>
            </div>

            <div class="progress-bar" class:indeterminate=indeterminate>
                <div class="progress-fill" style:width=move || format!("{}%", progress())></div>
            </div>

            <div class="progress-message">{move || task.with(|t| t.message.clone())}</div>

            <ul class="progress-stages">
                {ProcessingStage::ALL
                    .into_iter()
                    .map(|stage| {
                        let state = move || stage.state(progress());
                        view! {
                            <li class=move || format!("stage {}", state().css_class())>
                                <span class="stage-glyph">{move || state().glyph()}</span>
                                " "
                                {stage.label()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
