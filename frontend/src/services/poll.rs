//! Status polling.
//!
//! A poll sequence fetches the task status, reports it, and waits
//! `interval` before the next fetch for as long as the task is still
//! processing. The returned [`PollHandle`] stops the sequence; once
//! cancelled no further fetch is made and a response already in flight is
//! dropped instead of reported.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::spawn_local;

use crate::services::api::ApiClient;
use crate::types::{AppResult, ProcessingTask};

/// Cancellation handle of a poll sequence.
///
/// Clones share the same flag. Dropping a handle does not cancel.
#[derive(Clone, Debug, Default)]
pub struct PollHandle {
    cancelled: Rc<Cell<bool>>,
}

impl PollHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// What the loop does after reporting a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollStep {
    Continue,
    Stop,
}

impl PollStep {
    pub fn after(task: &ProcessingTask) -> Self {
        if task.is_terminal() {
            PollStep::Stop
        } else {
            PollStep::Continue
        }
    }
}

/// Start polling `task_id` on the event loop.
pub fn poll_status<F>(client: ApiClient, task_id: String, interval_ms: u32, on_update: F) -> PollHandle
where
    F: FnMut(ProcessingTask) + 'static,
{
    let handle = PollHandle::new();
    let loop_handle = handle.clone();

    log::info!("🔄 Polling task {} every {} ms", task_id, interval_ms);

    spawn_local(async move {
        let fetch = move |id: String| {
            let client = client.clone();
            async move { client.fetch_status(&id).await }
        };
        let sleep = move || TimeoutFuture::new(interval_ms);

        run_poll(task_id, fetch, sleep, loop_handle, on_update).await;
    });

    handle
}

/// The poll loop, independent of the HTTP client and the timer.
///
/// A failed fetch is reported once as a failed snapshot (see
/// [`ProcessingTask::from_fetch_error`]) and ends the loop.
pub async fn run_poll<Fetch, FetchFut, Sleep, SleepFut, OnUpdate>(
    task_id: String,
    mut fetch: Fetch,
    mut sleep: Sleep,
    handle: PollHandle,
    mut on_update: OnUpdate,
) where
    Fetch: FnMut(String) -> FetchFut,
    FetchFut: Future<Output = AppResult<ProcessingTask>>,
    Sleep: FnMut() -> SleepFut,
    SleepFut: Future<Output = ()>,
    OnUpdate: FnMut(ProcessingTask),
{
    loop {
        if handle.is_cancelled() {
            log::debug!("Polling of task {} cancelled", task_id);
            return;
        }

        let snapshot = match fetch(task_id.clone()).await {
            Ok(mut task) => {
                task.task_id = task_id.clone();
                task
            }
            Err(e) => {
                log::error!("❌ Status poll for task {} failed: {}", task_id, e);
                ProcessingTask::from_fetch_error(task_id.clone(), &e)
            }
        };

        // Cancelled while the request was in flight
        if handle.is_cancelled() {
            log::debug!("Dropping stale status of task {}", task_id);
            return;
        }

        let step = PollStep::after(&snapshot);
        on_update(snapshot);

        if step == PollStep::Stop {
            return;
        }
        sleep().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AppError, ExtractionResult, TaskStatus, CONNECTION_FAILED_MESSAGE, UNREADABLE_STATUS_MESSAGE,
    };
    use futures::executor::block_on;
    use futures::future::{ready, Ready};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    fn status(status: TaskStatus, progress: u8) -> ProcessingTask {
        ProcessingTask {
            task_id: String::new(),
            status,
            progress,
            message: format!("{:?} at {}", status, progress),
            result: None,
        }
    }

    /// Drives `run_poll` over a scripted list of fetch outcomes.
    struct Harness {
        script: RefCell<VecDeque<AppResult<ProcessingTask>>>,
        fetches: Cell<usize>,
        sleeps: Cell<usize>,
        updates: RefCell<Vec<ProcessingTask>>,
    }

    impl Harness {
        fn new(script: Vec<AppResult<ProcessingTask>>) -> Rc<Self> {
            Rc::new(Self {
                script: RefCell::new(script.into()),
                fetches: Cell::new(0),
                sleeps: Cell::new(0),
                updates: RefCell::new(Vec::new()),
            })
        }

        fn fetch(self: &Rc<Self>) -> impl FnMut(String) -> Ready<AppResult<ProcessingTask>> {
            let this = Rc::clone(self);
            move |id| {
                assert_eq!(id, "t1");
                this.fetches.set(this.fetches.get() + 1);
                let next = this.script.borrow_mut().pop_front();
                ready(next.expect("poll loop fetched past the end of the script"))
            }
        }

        fn sleep(self: &Rc<Self>) -> impl FnMut() -> Ready<()> {
            let this = Rc::clone(self);
            move || {
                this.sleeps.set(this.sleeps.get() + 1);
                ready(())
            }
        }

        fn on_update(self: &Rc<Self>) -> impl FnMut(ProcessingTask) {
            let this = Rc::clone(self);
            move |task| this.updates.borrow_mut().push(task)
        }

        fn run(self: &Rc<Self>, handle: PollHandle) {
            block_on(run_poll("t1".to_string(), self.fetch(), self.sleep(), handle, self.on_update()));
        }
    }

    #[test]
    fn test_reschedules_only_while_processing() {
        let mut done = status(TaskStatus::Completed, 100);
        done.result = Some(ExtractionResult {
            pdf_name: "doc.pdf".into(),
            processed_at: String::new(),
            total_pages: 1,
            extracted_text: String::new(),
            extractions: Vec::new(),
        });
        let harness = Harness::new(vec![
            Ok(status(TaskStatus::Processing, 10)),
            Ok(status(TaskStatus::Processing, 40)),
            Ok(done),
        ]);

        harness.run(PollHandle::new());

        let updates = harness.updates.borrow();
        assert_eq!(updates.len(), 3);
        assert_eq!(harness.fetches.get(), 3);
        assert_eq!(harness.sleeps.get(), 2);
        assert!(updates.iter().all(|u| u.task_id == "t1"));
        assert_eq!(updates[2].status, TaskStatus::Completed);
    }

    #[test]
    fn test_failed_status_stops_immediately() {
        let harness = Harness::new(vec![Ok(status(TaskStatus::Failed, 0))]);

        harness.run(PollHandle::new());

        assert_eq!(harness.updates.borrow().len(), 1);
        assert_eq!(harness.sleeps.get(), 0);
    }

    #[test]
    fn test_transport_failure_reports_once_and_stops() {
        let harness = Harness::new(vec![
            Ok(status(TaskStatus::Processing, 40)),
            Err(AppError::Network("connection refused".into())),
        ]);

        harness.run(PollHandle::new());

        let updates = harness.updates.borrow();
        assert_eq!(updates.len(), 2);
        assert_eq!(harness.fetches.get(), 2);
        assert_eq!(harness.sleeps.get(), 1);

        let last = &updates[1];
        assert_eq!(last.status, TaskStatus::Failed);
        assert_eq!(last.progress, 0);
        assert_eq!(last.message, CONNECTION_FAILED_MESSAGE);
        assert_eq!(last.task_id, "t1");
    }

    #[test]
    fn test_unreadable_status_is_not_a_connection_failure() {
        let harness = Harness::new(vec![Err(AppError::Decode("missing field `status`".into()))]);

        harness.run(PollHandle::new());

        let updates = harness.updates.borrow();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].status, TaskStatus::Failed);
        assert_eq!(updates[0].message, UNREADABLE_STATUS_MESSAGE);
        assert_eq!(harness.sleeps.get(), 0);
    }

    #[test]
    fn test_cancel_from_update_stops_next_fetch() {
        let harness = Harness::new(vec![
            Ok(status(TaskStatus::Processing, 10)),
            Ok(status(TaskStatus::Processing, 20)),
        ]);
        let handle = PollHandle::new();
        let cancel = handle.clone();
        let updates = Rc::new(Cell::new(0));
        let seen = Rc::clone(&updates);

        block_on(run_poll(
            "t1".to_string(),
            harness.fetch(),
            harness.sleep(),
            handle,
            move |_| {
                seen.set(seen.get() + 1);
                cancel.cancel();
            },
        ));

        assert_eq!(updates.get(), 1);
        assert_eq!(harness.fetches.get(), 1);
    }

    #[test]
    fn test_cancel_during_fetch_drops_stale_update() {
        let harness = Harness::new(Vec::new());
        let handle = PollHandle::new();
        let cancel = handle.clone();

        let fetch = move |_id: String| {
            cancel.cancel();
            let done: AppResult<ProcessingTask> = Ok(status(TaskStatus::Completed, 100));
            ready(done)
        };

        block_on(run_poll("t1".to_string(), fetch, harness.sleep(), handle, harness.on_update()));

        assert!(harness.updates.borrow().is_empty());
        assert_eq!(harness.sleeps.get(), 0);
    }

    #[test]
    fn test_already_cancelled_handle_never_fetches() {
        let harness = Harness::new(Vec::new());
        let handle = PollHandle::new();
        handle.cancel();

        harness.run(handle);

        assert_eq!(harness.fetches.get(), 0);
        assert!(harness.updates.borrow().is_empty());
    }

    #[test]
    fn test_poll_step() {
        assert_eq!(PollStep::after(&status(TaskStatus::Processing, 5)), PollStep::Continue);
        assert_eq!(PollStep::after(&status(TaskStatus::Completed, 100)), PollStep::Stop);
        assert_eq!(PollStep::after(&status(TaskStatus::Failed, 0)), PollStep::Stop);
    }

    #[test]
    fn test_handle_clones_share_flag() {
        let handle = PollHandle::new();
        let clone = handle.clone();
        assert!(!handle.is_cancelled());
        clone.cancel();
        assert!(handle.is_cancelled());
    }
}
