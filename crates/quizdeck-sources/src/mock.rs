//! In-memory source for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use quizdeck_core::{LoadError, QuizSource};

/// A mock source serving fixed bodies by resource name.
///
/// Unknown resources answer like a missing file (status 404).
#[derive(Default)]
pub struct MockSource {
    bodies: Mutex<HashMap<String, String>>,
    call_count: AtomicU32,
    fetched: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, resource: &str, body: &str) -> Self {
        self.insert(resource, body);
        self
    }

    /// Add or replace a resource body.
    pub fn insert(&self, resource: &str, body: &str) {
        self.bodies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(resource.to_string(), body.to_string());
    }

    /// Remove a resource so later fetches fail.
    pub fn remove(&self, resource: &str) {
        self.bodies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(resource);
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Resources requested so far, in order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl QuizSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn location(&self) -> String {
        "memory".to_string()
    }

    async fn fetch(&self, resource: &str) -> Result<String, LoadError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.fetched
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(resource.to_string());

        self.bodies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(resource)
            .cloned()
            .ok_or_else(|| LoadError::Unavailable {
                resource: resource.to_string(),
                status: 404,
            })
    }
}
