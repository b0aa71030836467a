//! Detailed view of one extracted element and its analysis.

use leptos::*;

use crate::presentation::{format_confidence, format_region, TrendIcon};
use crate::services::ApiClient;
use crate::types::{DataPoint, ImageExtraction, OcrData};

const NO_ANALYSIS: &str = "No analysis available for this element.";
const NO_VALUE: &str = "—";

/// Side panel showing the selected element, or a hint when none is.
#[component]
pub fn DetailPanel(
    #[prop(into)] extraction: Signal<Option<ImageExtraction>>,
    #[prop(into)] on_close: Callback<()>,
    api: ApiClient,
) -> impl IntoView {
    let api = store_value(api);

    view! {
        <aside class="detail-panel">
            {move || match extraction.get() {
                Some(item) => {
                    let image_url = api.with_value(|api| api.image_url(&item.image_id));
                    view! {
                        <div class="detail-header">
                            <button class="detail-close" title="Close" on:click=move |_| on_close.call(())>
                                "✕"
                            </button>
                        </div>
                        <ExtractionDetail extraction=item image_url=image_url/>
                    }
                    .into_view()
                }
                None => view! {
                    <div class="detail-empty">"Select an element to see its analysis"</div>
                }
                .into_view(),
            }}
        </aside>
    }
}

fn format_point(point: Option<&DataPoint>) -> String {
    point.map_or_else(|| NO_VALUE.to_string(), DataPoint::to_string)
}

/// Display-ready analysis fields of one element.
#[derive(Clone, Debug, PartialEq)]
struct DetailFields {
    trend: TrendIcon,
    trend_text: String,
    summary: String,
    max_point: String,
    min_point: String,
    anomalies: Vec<String>,
    key_points: Vec<String>,
    correlations: Vec<String>,
}

impl DetailFields {
    fn from_extraction(extraction: &ImageExtraction) -> Self {
        let inference = extraction.inference.as_ref();

        Self {
            trend: TrendIcon::from_trend(inference.and_then(|i| i.trend.as_deref())),
            trend_text: inference
                .and_then(|i| i.trend.clone())
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| NO_VALUE.to_string()),
            summary: inference
                .map(|i| i.summary.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| NO_ANALYSIS.to_string()),
            max_point: format_point(inference.and_then(|i| i.max_point.as_ref())),
            min_point: format_point(inference.and_then(|i| i.min_point.as_ref())),
            anomalies: inference.map(|i| i.anomalies.clone()).unwrap_or_default(),
            key_points: inference.map(|i| i.key_points.clone()).unwrap_or_default(),
            correlations: inference.map(|i| i.correlations.clone()).unwrap_or_default(),
        }
    }
}

/// Analysis of a single element. Absent inference renders placeholders.
#[component]
pub fn ExtractionDetail(extraction: ImageExtraction, image_url: String) -> impl IntoView {
    let kind = extraction.kind;
    let DetailFields {
        trend,
        trend_text,
        summary,
        max_point,
        min_point,
        anomalies,
        key_points,
        correlations,
    } = DetailFields::from_extraction(&extraction);
    let region = extraction.bbox.as_ref().map(format_region);
    let ocr = extraction.ocr_data.filter(|ocr| !ocr.is_empty());

    view! {
        <div class="extraction-detail">
            <div class="detail-image">
                <img src=image_url alt=kind.label()/>
            </div>

            <div class="detail-meta">
                <span class=format!("kind-badge {}", kind.css_class())>
                    {kind.icon()} " " {kind.label()}
                </span>
                <span class="detail-page">"Page " {extraction.page_number}</span>
                {region.map(|r| view! { <span class="detail-region">{r}</span> })}
                {extraction.confidence.map(|c| view! {
                    <span class="detail-confidence">"Confidence " {format_confidence(c)}</span>
                })}
            </div>

            <div class="detail-field">
                <div class="detail-label">"Trend"</div>
                <div class=format!("detail-value trend {}", trend.css_class())>
                    <span class="trend-icon">{trend.glyph()}</span>
                    " "
                    {trend_text}
                </div>
            </div>

            <div class="detail-field">
                <div class="detail-label">"Summary"</div>
                <div class="detail-value summary">{summary}</div>
            </div>

            <div class="detail-extrema">
                <div class="detail-field">
                    <div class="detail-label">"Maximum"</div>
                    <div class="detail-value">{max_point}</div>
                </div>
                <div class="detail-field">
                    <div class="detail-label">"Minimum"</div>
                    <div class="detail-value">{min_point}</div>
                </div>
            </div>

            // anomalies[]: nothing at all when empty
            {(!anomalies.is_empty()).then(|| view! {
                <div class="detail-field anomalies">
                    <div class="detail-label">"Anomalies " <span class="detail-count">"[" {anomalies.len()} "]"</span></div>
                    <ul>
                        {anomalies.into_iter().map(|a| view! { <li>"⚠️ " {a}</li> }).collect_view()}
                    </ul>
                </div>
            })}

            {(!key_points.is_empty()).then(|| view! {
                <div class="detail-field">
                    <div class="detail-label">"Key points"</div>
                    <ul>
                        {key_points.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
                    </ul>
                </div>
            })}

            {(!correlations.is_empty()).then(|| view! {
                <div class="detail-field">
                    <div class="detail-label">"Correlations"</div>
                    <ul>
                        {correlations.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}
                    </ul>
                </div>
            })}

            {ocr.map(|ocr| view! { <OcrBlock ocr=ocr/> })}
        </div>
    }
}

#[component]
fn OcrBlock(ocr: OcrData) -> impl IntoView {
    let axis = |label: &'static str, value: Option<String>| {
        value.map(|v| view! {
            <div class="ocr-prop">
                <span class="prop-key">{label}</span>
                <span class="prop-value">{v}</span>
            </div>
        })
    };
    let raw_text = ocr.raw_text.trim().to_string();
    let readings = ocr.readings();

    view! {
        <div class="detail-field ocr">
            <div class="detail-label">"Recognized text"</div>
            {axis("title", ocr.title)}
            {axis("x axis", ocr.x_axis)}
            {axis("y axis", ocr.y_axis)}
            {(!ocr.legends.is_empty()).then(|| view! {
                <div class="ocr-prop">
                    <span class="prop-key">"legend"</span>
                    <span class="prop-value">{ocr.legends.join(", ")}</span>
                </div>
            })}
            {(!readings.is_empty()).then(|| view! {
                <div class="ocr-prop">
                    <span class="prop-key">"values"</span>
                    <span class="prop-value">{readings.join(", ")}</span>
                </div>
            })}
            {(!raw_text.is_empty()).then(|| view! { <pre class="ocr-raw">{raw_text}</pre> })}
        </div>
    }
}
