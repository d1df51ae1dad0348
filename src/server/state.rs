// src/server/state.rs

use std::sync::Arc;

use crate::assistant::Assistant;
use crate::fetcher::Fetcher;
use crate::tasks::TaskRegistry;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<Fetcher>,
    pub assistant: Arc<Assistant>,
    pub tasks: Arc<TaskRegistry>,
}

impl AppState {
    pub fn new(fetcher: Fetcher, assistant: Assistant) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            assistant: Arc::new(assistant),
            tasks: Arc::new(TaskRegistry::default()),
        }
    }
}
