/*
[INPUT]:  Scripted responses queued by tests
[OUTPUT]: In-memory Transport that records every request
[POS]:    Test infrastructure - offline transport double
[UPDATE]: When the Transport contract changes
*/

//! Mock transport for offline tests.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::http::{CedsonHubError, RawResponse, Result, Transport, TransportRequest};

/// A 53-character key, long enough to pass credential validation
pub fn test_api_key() -> String {
    "test_api_key_0123456789abcdefghijklmnopqrstuvwxyz_XYZ".to_string()
}

enum Scripted {
    Response(RawResponse),
    Failure(String),
    Panic(String),
}

/// Transport returning queued responses in order.
///
/// An empty queue behaves like a refused connection.
#[derive(Default)]
pub struct MockTransport {
    queue: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<TransportRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push_raw(status, body.to_string().into_bytes());
    }

    pub fn push_raw(&self, status: u16, body: Vec<u8>) {
        lock(&self.queue).push_back(Scripted::Response(RawResponse { status, body }));
    }

    pub fn push_failure(&self, message: impl Into<String>) {
        lock(&self.queue).push_back(Scripted::Failure(message.into()));
    }

    /// Make the next call panic, as a buggy transport would
    pub fn push_panic(&self, message: impl Into<String>) {
        lock(&self.queue).push_back(Scripted::Panic(message.into()));
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        lock(&self.requests).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn perform(&self, request: TransportRequest) -> Result<RawResponse> {
        lock(&self.requests).push(request);
        let next = lock(&self.queue).pop_front();
        match next {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::Failure(message)) => Err(CedsonHubError::Transport(message)),
            Some(Scripted::Panic(message)) => panic!("{message}"),
            None => Err(CedsonHubError::Transport("connection refused".to_string())),
        }
    }
}
