// src/tasks.rs

//! Bookkeeping for background summarization tasks.
//!
//! Every task owns a capacity-1 notification channel created when the task
//! is registered. The registry publishes exactly one terminal event to that
//! channel and then drops the sender, so a subscriber attaching after the
//! task finished still receives the event, and the event stream ends once
//! it has been delivered.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{RwLock, mpsc};
use tracing::{debug, warn};
use uuid::Uuid;

/// Lifecycle states of a background task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

/// Terminal result stored for a finished task.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TaskOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status: TaskStatus,
    pub timestamp: DateTime<Utc>,
}

/// The single terminal event published on a task's notification channel.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TaskEvent {
    SummaryComplete { summary: String, task_id: Uuid },
    SummaryError { error: String, task_id: Uuid },
}

impl TaskEvent {
    /// The SSE event name this terminal event is delivered under.
    pub fn name(&self) -> &'static str {
        match self {
            TaskEvent::SummaryComplete { .. } => "summary_complete",
            TaskEvent::SummaryError { .. } => "summary_error",
        }
    }
}

struct TaskEntry {
    status: TaskStatus,
    outcome: Option<TaskOutcome>,
    sender: Option<mpsc::Sender<TaskEvent>>,
    receiver: Option<mpsc::Receiver<TaskEvent>>,
}

/// In-memory registry of background tasks, keyed by task id. Lives for the
/// process lifetime; nothing is persisted.
#[derive(Default)]
pub struct TaskRegistry {
    tasks: RwLock<HashMap<Uuid, TaskEntry>>,
}

impl TaskRegistry {
    /// Registers a new pending task and its notification channel.
    pub async fn register(&self) -> Uuid {
        let (sender, receiver) = mpsc::channel(1);
        let id = Uuid::new_v4();
        self.tasks.write().await.insert(
            id,
            TaskEntry {
                status: TaskStatus::Pending,
                outcome: None,
                sender: Some(sender),
                receiver: Some(receiver),
            },
        );
        debug!(task_id = %id, "Task registered.");
        id
    }

    pub async fn mark_processing(&self, id: Uuid) {
        if let Some(entry) = self.tasks.write().await.get_mut(&id) {
            entry.status = TaskStatus::Processing;
        }
    }

    /// Records a successful summary and publishes the terminal event.
    pub async fn complete(&self, id: Uuid, summary: String) {
        let outcome = TaskOutcome {
            summary: Some(summary.clone()),
            error: None,
            status: TaskStatus::Completed,
            timestamp: Utc::now(),
        };
        let event = TaskEvent::SummaryComplete {
            summary,
            task_id: id,
        };
        self.finish(id, TaskStatus::Completed, outcome, event).await;
    }

    /// Records a failure and publishes the terminal event. Failures are
    /// per-task; other tasks are untouched.
    pub async fn fail(&self, id: Uuid, error: String) {
        let outcome = TaskOutcome {
            summary: None,
            error: Some(error.clone()),
            status: TaskStatus::Failed,
            timestamp: Utc::now(),
        };
        let event = TaskEvent::SummaryError { error, task_id: id };
        self.finish(id, TaskStatus::Failed, outcome, event).await;
    }

    async fn finish(&self, id: Uuid, status: TaskStatus, outcome: TaskOutcome, event: TaskEvent) {
        let sender = {
            let mut tasks = self.tasks.write().await;
            match tasks.get_mut(&id) {
                Some(entry) => {
                    entry.status = status;
                    entry.outcome = Some(outcome);
                    // Taking the sender guarantees at most one terminal
                    // event per task.
                    entry.sender.take()
                }
                None => {
                    warn!(task_id = %id, "Finished task is not registered.");
                    None
                }
            }
        };

        if let Some(sender) = sender {
            if sender.try_send(event).is_err() {
                warn!(task_id = %id, "Notification channel rejected terminal event.");
            }
        }
    }

    /// Hands out the task's notification channel to its single consumer.
    /// Returns `None` for unknown tasks or when already subscribed.
    pub async fn subscribe(&self, id: Uuid) -> Option<mpsc::Receiver<TaskEvent>> {
        self.tasks
            .write()
            .await
            .get_mut(&id)
            .and_then(|entry| entry.receiver.take())
    }

    /// Current status and terminal outcome, if any.
    pub async fn status(&self, id: Uuid) -> Option<(TaskStatus, Option<TaskOutcome>)> {
        self.tasks
            .read()
            .await
            .get(&id)
            .map(|entry| (entry.status, entry.outcome.clone()))
    }
}
