//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record what they were asked for so tests can verify behavior.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{GvizResponse, GvizTable, SheetRequest, SheetSource};
use crate::error::SourceError;

// ============================================================================
// Mock Sheet Source
// ============================================================================

#[derive(Clone)]
enum Behavior {
    Respond(GvizResponse),
    Fail,
    Hang,
}

/// Shared handle on the number of loads a mock has served
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct MockSheetSource {
    behavior: Behavior,
    calls: CallCounter,
    requests: Arc<RwLock<Vec<SheetRequest>>>,
}

impl Default for MockSheetSource {
    fn default() -> Self {
        Self {
            behavior: Behavior::Respond(GvizResponse::default()),
            calls: CallCounter::default(),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl MockSheetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond with a successful payload carrying `table`
    pub fn with_table(self, table: GvizTable) -> Self {
        self.with_response(GvizResponse {
            status: Some("ok".to_string()),
            table: Some(table),
            ..Default::default()
        })
    }

    pub fn with_response(mut self, response: GvizResponse) -> Self {
        self.behavior = Behavior::Respond(response);
        self
    }

    /// Fail every load with an upstream status error
    pub fn failing(mut self) -> Self {
        self.behavior = Behavior::Fail;
        self
    }

    /// Never answer within any reasonable timeout
    pub fn hanging(mut self) -> Self {
        self.behavior = Behavior::Hang;
        self
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }

    pub fn requests(&self) -> Arc<RwLock<Vec<SheetRequest>>> {
        self.requests.clone()
    }
}

#[async_trait]
impl SheetSource for MockSheetSource {
    async fn load(&self, request: &SheetRequest) -> Result<GvizResponse, SourceError> {
        self.calls.0.fetch_add(1, Ordering::SeqCst);
        self.requests.write().unwrap().push(request.clone());

        match &self.behavior {
            Behavior::Respond(response) => Ok(response.clone()),
            Behavior::Fail => Err(SourceError::Status {
                status: 503,
                message: "Service Unavailable".to_string(),
            }),
            Behavior::Hang => {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(GvizResponse::default())
            }
        }
    }
}
