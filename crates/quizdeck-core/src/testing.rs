//! In-memory source shared by this crate's unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::LoadError;
use crate::traits::QuizSource;

/// Serves bodies from a map; unknown resources are a 404.
#[derive(Default)]
pub(crate) struct MemorySource {
    bodies: Mutex<HashMap<String, String>>,
    fetched: Mutex<Vec<String>>,
}

impl MemorySource {
    pub(crate) fn with(bodies: &[(&str, &str)]) -> Arc<Self> {
        let source = Self::default();
        for (resource, body) in bodies {
            source.put(resource, body);
        }
        Arc::new(source)
    }

    /// Add or replace a resource.
    pub(crate) fn put(&self, resource: &str, body: &str) {
        self.bodies
            .lock()
            .unwrap()
            .insert(resource.to_string(), body.to_string());
    }

    /// Resources requested so far, in order.
    pub(crate) fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuizSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn location(&self) -> String {
        "memory".into()
    }

    async fn fetch(&self, resource: &str) -> Result<String, LoadError> {
        self.fetched.lock().unwrap().push(resource.to_string());
        self.bodies
            .lock()
            .unwrap()
            .get(resource)
            .cloned()
            .ok_or_else(|| LoadError::Unavailable {
                resource: resource.to_string(),
                status: 404,
            })
    }
}
