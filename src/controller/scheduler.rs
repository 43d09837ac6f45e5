//! Simulated request latency

use std::time::Duration;

use async_trait::async_trait;

use crate::model::{CodeType, Language};

/// A generation request as seen by a scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub language: Language,
    pub code_type: CodeType,
    pub description: String,
}

/// Decides how long a request waits before it is rendered
#[async_trait]
pub trait LatencyScheduler: Send + Sync {
    async fn wait(&self, request: &GenerationRequest);
}

/// Fixed delay standing in for a remote round trip
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl LatencyScheduler for SimulatedLatency {
    async fn wait(&self, _request: &GenerationRequest) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Renders immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl LatencyScheduler for NoLatency {
    async fn wait(&self, _request: &GenerationRequest) {}
}
