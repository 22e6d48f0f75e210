use std::collections::BTreeMap;
use tokio::task::JoinHandle;

/// Handles of the searches that were spawned and may still be running.
///
/// Calls are never aborted here: a superseded search runs to completion and
/// its result is dropped by the controller.
#[derive(Default)]
pub struct InFlight {
    tasks: BTreeMap<u64, JoinHandle<()>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
        }
    }

    pub fn track(&mut self, request_id: u64, task: JoinHandle<()>) {
        self.reap();
        self.tasks.insert(request_id, task);
    }

    fn reap(&mut self) {
        self.tasks.retain(|_, handle| !handle.is_finished());
    }

    pub fn running(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }

    pub async fn join_all(&mut self) {
        let tasks = std::mem::take(&mut self.tasks);
        for (request_id, handle) in tasks {
            if let Err(e) = handle.await {
                tracing::warn!(request_id, "search task failed: {}", e);
            }
        }
    }
}
