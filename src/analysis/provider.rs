// src/analysis/provider.rs
use std::fmt::Debug;
use std::task::Poll;
use std::time::{Duration, Instant};
use thiserror::Error;

use super::concept::{explain, AnalysisResult};

/// How long the simulated analysis takes to "think".
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Analysis service unavailable: {0}")]
    Unavailable(String),
    #[error("Analysis failed: {0}")]
    Failed(String),
}

/// Something that can turn a concept into an [`AnalysisResult`], eventually.
///
/// Submission never blocks. The returned handle is polled by the UI thread once
/// per frame until it resolves.
pub trait AnalysisProvider: Debug {
    fn submit(&self, concept: &str, now: Instant) -> Box<dyn PendingAnalysis>;
}

/// An analysis that has been submitted but not yet collected.
pub trait PendingAnalysis: Debug {
    fn poll(&mut self, now: Instant) -> Poll<Result<AnalysisResult, ProviderError>>;

    /// Best guess at when `poll` will resolve, if the provider knows.
    fn ready_at(&self) -> Option<Instant> {
        None
    }
}

/// Stand-in provider: answers with the canned explanation after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    latency: Duration,
}

impl SimulatedProvider {
    pub fn new() -> Self {
        Self {
            latency: SIMULATED_LATENCY,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProvider for SimulatedProvider {
    fn submit(&self, concept: &str, now: Instant) -> Box<dyn PendingAnalysis> {
        Box::new(DelayedAnalysis {
            ready_at: now + self.latency,
            result: explain(concept),
        })
    }
}

#[derive(Debug)]
pub struct DelayedAnalysis {
    ready_at: Instant,
    result: AnalysisResult,
}

impl PendingAnalysis for DelayedAnalysis {
    fn poll(&mut self, now: Instant) -> Poll<Result<AnalysisResult, ProviderError>> {
        if now >= self.ready_at {
            Poll::Ready(Ok(self.result.clone()))
        } else {
            Poll::Pending
        }
    }

    fn ready_at(&self) -> Option<Instant> {
        Some(self.ready_at)
    }
}
