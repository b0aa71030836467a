//! Results screen: document summary and the grid of extracted elements.

use leptos::*;

use crate::presentation::{format_confidence, format_timestamp, ResultFilter};
use crate::services::ApiClient;
use crate::types::{ExtractionResult, ImageExtraction};

/// Document name, counts and the "new upload" action.
#[component]
pub fn ResultsSummary(
    #[prop(into)] result: Signal<Option<ExtractionResult>>,
    #[prop(into)] on_new_upload: Callback<()>,
) -> impl IntoView {
    let field = move |f: fn(&ExtractionResult) -> String| {
        move || result.with(|r| r.as_ref().map(f).unwrap_or_default())
    };

    view! {
        <div class="results-summary">
            <div class="results-summary-text">
                <div class="results-title">"📄 " {field(|r| r.pdf_name.clone())}</div>
                <div class="results-details">
                    {field(|r| format!("{} page(s)", r.total_pages))}
                    " • "
                    {field(|r| format!("{} element(s), {} chart(s), {} analysed",
                        r.extractions.len(), r.chart_count(), r.analyzed_count()))}
                    " • "
                    {field(|r| format!("processed {}", format_timestamp(&r.processed_at)))}
                </div>
            </div>
            <button class="btn btn-secondary" on:click=move |_| on_new_upload.call(())>
                "New upload"
            </button>
        </div>
    }
}

#[component]
pub fn ResultsGrid(
    /// Extractions in server order
    #[prop(into)]
    extractions: Signal<Vec<ImageExtraction>>,
    /// `image_id` of the selected element
    #[prop(into)]
    selected: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<ImageExtraction>,
    api: ApiClient,
) -> impl IntoView {
    let api = store_value(api);
    let (filter, set_filter) = create_signal(ResultFilter::All);
    let visible = move || extractions.with(|items| filter.get().apply(items));

    view! {
        <div class="results-grid-section">
            <div class="filter-tabs">
                {ResultFilter::ALL
                    .into_iter()
                    .map(|tab| {
                        let count = move || extractions.with(|items| tab.count(items));
                        view! {
                            <button
                                class="filter-tab"
                                class:active=move || filter.get() == tab
                                on:click=move |_| set_filter.set(tab)
                            >
                                {tab.label()}
                                <span class="filter-count">{count}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <div class="results-empty">"Nothing to show for this filter"</div> }
            >
                <div class="results-grid">
                    <For
                        each=visible
                        key=|item| item.image_id.clone()
                        children=move |item| {
                            let image_url = api.with_value(|api| api.image_url(&item.image_id));
                            let id = item.image_id.clone();
                            let is_selected = move || selected.get().as_deref() == Some(id.as_str());
                            let has_analysis = item.has_analysis();
                            let kind = item.kind;
                            let page = item.page_number;
                            let confidence = item.confidence.map(format_confidence);
                            let clicked = item.clone();

                            view! {
                                <div
                                    class="grid-item"
                                    class:selected=is_selected
                                    on:click=move |_| on_select.call(clicked.clone())
                                >
                                    <div class="grid-thumb">
                                        <img src=image_url alt=kind.label() loading="lazy"/>
                                    </div>
                                    <div class="grid-meta">
                                        <span class=format!("kind-badge {}", kind.css_class())>
                                            {kind.icon()} " " {kind.label()}
                                        </span>
                                        <span class="grid-page">"p. " {page}</span>
                                        {confidence.map(|c| view! { <span class="grid-confidence">{c}</span> })}
                                        <Show when=move || has_analysis fallback=|| view! {}>
                                            <span class="analysis-indicator" title="AI analysis available">
                                                "✨ AI"
                                            </span>
                                        </Show>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
