//! Root lifecycle: `upload → processing → results`.
//!
//! The whole mutable UI state is one [`Phase`] value. Each phase carries
//! exactly the data it needs, so a results screen without a result (or a
//! selection outside of the results screen) cannot be represented.
//! Errors only ever lead back to [`Phase::Upload`].

use crate::types::{AppError, ExtractionResult, ImageExtraction, ProcessingTask, TaskStatus};

/// Banner text when the server fails a task without saying why.
pub const DEFAULT_PROCESSING_ERROR: &str = "Processing failed";

/// Banner text when a task completes without a result payload.
pub const MISSING_RESULT_ERROR: &str = "Processing finished without results";

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    /// Waiting for a file. `uploading` is set while the submission request
    /// is in flight; `error` holds the last failure, if any.
    Upload {
        uploading: bool,
        error: Option<String>,
    },
    /// Server is working; latest snapshot.
    Processing { task: ProcessingTask },
    /// Done. `selected` is the `image_id` shown in the detail panel.
    Results {
        result: ExtractionResult,
        selected: Option<String>,
    },
}

/// Discriminant of [`Phase`], for cheap comparisons in views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseKind {
    Upload,
    Processing,
    Results,
}

/// Outcome of feeding a status snapshot to the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Still processing, or the snapshot was stale and ignored.
    Stay,
    ToResults,
    ToUpload,
}

impl Transition {
    /// Whether the poll sequence feeding this phase must be cancelled.
    pub fn leaves_processing(self) -> bool {
        self != Transition::Stay
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Upload {
            uploading: false,
            error: None,
        }
    }
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Upload { .. } => PhaseKind::Upload,
            Phase::Processing { .. } => PhaseKind::Processing,
            Phase::Results { .. } => PhaseKind::Results,
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, Phase::Upload { uploading: true, .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Phase::Upload { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn task(&self) -> Option<&ProcessingTask> {
        match self {
            Phase::Processing { task } => Some(task),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&ExtractionResult> {
        match self {
            Phase::Results { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        match self {
            Phase::Results { selected, .. } => selected.as_deref(),
            _ => None,
        }
    }

    pub fn selected_extraction(&self) -> Option<&ImageExtraction> {
        match self {
            Phase::Results {
                result,
                selected: Some(id),
            } => result.find(id),
            _ => None,
        }
    }

    /// A file was accepted and is being submitted.
    ///
    /// Returns `false` (and changes nothing) outside of the upload phase or
    /// while another submission is in flight.
    pub fn begin_upload(&mut self) -> bool {
        match self {
            Phase::Upload { uploading, error } if !*uploading => {
                *uploading = true;
                *error = None;
                true
            }
            _ => false,
        }
    }

    /// The server accepted the file and returned a task id.
    pub fn submitted(&mut self, task_id: impl Into<String>) {
        *self = Phase::Processing {
            task: ProcessingTask::pending(task_id),
        };
    }

    /// Submission (or poll setup) failed before any task existed.
    pub fn submit_failed(&mut self, err: &AppError) {
        *self = Phase::Upload {
            uploading: false,
            error: Some(err.to_string()),
        };
    }

    /// Feed one poll snapshot.
    ///
    /// Snapshots for another task, or arriving outside of the processing
    /// phase, are ignored.
    pub fn apply_update(&mut self, update: ProcessingTask) -> Transition {
        let Phase::Processing { task } = self else {
            log::debug!("Ignoring status of task {} outside of processing", update.task_id);
            return Transition::Stay;
        };
        if !update.task_id.is_empty() && update.task_id != task.task_id {
            log::debug!("Ignoring status of unrelated task {}", update.task_id);
            return Transition::Stay;
        }

        match update.status {
            TaskStatus::Processing => {
                task.progress = update.progress;
                task.message = update.message;
                Transition::Stay
            }
            TaskStatus::Completed => match update.result {
                Some(result) => {
                    log::info!(
                        "✅ Task {} completed: {} extractions",
                        task.task_id,
                        result.extractions.len()
                    );
                    *self = Phase::Results {
                        result,
                        selected: None,
                    };
                    Transition::ToResults
                }
                None => {
                    log::warn!("Task {} completed without a result payload", task.task_id);
                    self.fail_with(MISSING_RESULT_ERROR.to_string(), DEFAULT_PROCESSING_ERROR);
                    Transition::ToUpload
                }
            },
            TaskStatus::Failed => {
                log::warn!("❌ Task {} failed: {}", task.task_id, update.message);
                self.fail_with(update.message, DEFAULT_PROCESSING_ERROR);
                Transition::ToUpload
            }
        }
    }

    /// Select an extraction (or clear the selection) on the results screen.
    pub fn select(&mut self, image_id: Option<String>) {
        if let Phase::Results { result, selected } = self {
            *selected = image_id.filter(|id| result.find(id).is_some());
        }
    }

    /// "New upload": back to the initial, empty state.
    pub fn reset(&mut self) {
        *self = Phase::default();
    }

    fn fail_with(&mut self, message: String, fallback: &str) {
        let message = if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        };
        *self = Phase::Upload {
            uploading: false,
            error: Some(message),
        };
    }
}
