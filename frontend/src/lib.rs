//! Chartscope - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a PDF or an image, following its
//! processing on the extraction service, and browsing the extracted charts,
//! graphs and tables together with their AI analysis.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (backend status)                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the Phase)                                │
//! │  ├── Hero (title, description)                              │
//! │  ├── upload:      UploadForm                                │
//! │  ├── processing:  ProgressView                              │
//! │  └── results:     ResultsSummary + ResultsGrid + DetailPanel│
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Payload types (ProcessingTask, ImageExtraction, etc.)
//! - [`state`] - The upload → processing → results state machine
//! - [`presentation`] - Filters, trend icons and formatting
//! - [`components`] - UI components (Upload, Progress, Results, etc.)
//! - [`services`] - Backend communication (upload, status polling)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod presentation;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Tasks
    ProcessingTask, TaskStatus,
    // Extractions
    ExtractionResult, ImageExtraction, ExtractionKind, BoundingBox, OcrData, Inference, DataPoint,
    // API
    UploadResponse,
    // Errors
    AppError, AppResult,
};

// State machine
pub use state::{Phase, PhaseKind, Transition};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let api = ApiClient::new(ApiConfig::default());

    // Global state for the application
    let phase = create_rw_signal(Phase::default());
    let poll_handle = store_value(None::<PollHandle>);

    let stop_polling = move || {
        poll_handle.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.cancel();
            }
        });
    };

    let on_file = {
        let api = api.clone();
        Callback::new(move |file: File| {
            if !phase.try_update(Phase::begin_upload).unwrap_or(false) {
                return;
            }
            log::info!("📄 Submitting {} ({})", file.name(), file.type_());

            let api = api.clone();
            spawn_local(async move {
                match api.submit_document(&file).await {
                    Ok(response) => {
                        log::info!("✅ Upload accepted, task {}: {}", response.task_id, response.message);
                        stop_polling();
                        phase.update(|p| p.submitted(response.task_id.clone()));

                        let handle = poll_status(api, response.task_id, POLL_INTERVAL_MS, move |task| {
                            let transition = phase
                                .try_update(|p| p.apply_update(task))
                                .unwrap_or(Transition::Stay);
                            if transition.leaves_processing() {
                                stop_polling();
                            }
                        });
                        poll_handle.set_value(Some(handle));
                    }
                    Err(e) => {
                        log::error!("❌ Upload failed: {}", e);
                        phase.update(|p| p.submit_failed(&e));
                    }
                }
            });
        })
    };

    let on_new_upload = Callback::new(move |_: ()| {
        log::info!("🔁 New upload");
        stop_polling();
        phase.update(Phase::reset);
    });

    let on_select = Callback::new(move |extraction: ImageExtraction| {
        phase.update(|p| p.select(Some(extraction.image_id)));
    });

    let on_close_detail = Callback::new(move |_: ()| {
        phase.update(|p| p.select(None));
    });

    // Derived views of the phase
    let kind = create_memo(move |_| phase.with(Phase::kind));
    let uploading = Signal::derive(move || phase.with(Phase::is_uploading));
    let error = Signal::derive(move || phase.with(|p| p.error().map(str::to_string)));
    let task = Signal::derive(move || {
        phase.with(|p| p.task().cloned().unwrap_or_else(|| ProcessingTask::pending("")))
    });
    let result = create_memo(move |_| phase.with(|p| p.result().cloned()));
    let extractions = Signal::derive(move || {
        result.with(|r| r.as_ref().map(|r| r.extractions.clone()).unwrap_or_default())
    });
    let selected = Signal::derive(move || phase.with(|p| p.selected_id().map(str::to_string)));
    let selected_extraction = Signal::derive(move || phase.with(|p| p.selected_extraction().cloned()));

    view! {
        <Header api=api.clone()/>

        <div class="container">
            <Hero/>

            {move || match kind.get() {
                PhaseKind::Upload => view! {
                    <UploadForm uploading=uploading error=error on_file=on_file/>
                }
                .into_view(),
                PhaseKind::Processing => view! {
                    <ProgressView task=task/>
                }
                .into_view(),
                PhaseKind::Results => view! {
                    <div class="results-section">
                        <ResultsSummary result=result on_new_upload=on_new_upload/>
                        <div class="results-layout">
                            <ResultsGrid
                                extractions=extractions
                                selected=selected
                                on_select=on_select
                                api=api.clone()
                            />
                            <DetailPanel
                                extraction=selected_extraction
                                on_close=on_close_detail
                                api=api.clone()
                            />
                        </div>
                    </div>
                }
                .into_view(),
            }}
        </div>

        <Footer/>
    }
}
