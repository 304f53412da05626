// src/state/mod.rs
use std::task::Poll;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::analysis::{AnalysisProvider, AnalysisResult, PendingAnalysis, SimulatedProvider};

pub type RequestId = Uuid;

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Concept,
    Tutor,
    Planner,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Concept, Tab::Tutor, Tab::Planner];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Concept => "concept",
            Tab::Tutor => "tutor",
            Tab::Planner => "planner",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Concept => "🧠 Concept Analyzer",
            Tab::Tutor => "💬 AI Tutor",
            Tab::Planner => "📅 Study Planner",
        }
    }
}

/// Why `request_analysis` did nothing. The UI stays silent either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestRejected {
    #[error("nothing to analyze")]
    EmptyInput,
    #[error("an analysis is already running")]
    AlreadyPending,
}

impl RequestRejected {
    pub fn code(self) -> &'static str {
        match self {
            RequestRejected::EmptyInput => "empty-input",
            RequestRejected::AlreadyPending => "already-pending",
        }
    }
}

#[derive(Debug)]
struct InFlight {
    id: RequestId,
    started: Instant,
    handle: Box<dyn PendingAnalysis>,
}

// Session state for the whole window. Only the methods below mutate it.
#[derive(Debug)]
pub struct AppState {
    active_tab: Tab,
    input_text: String,
    result: Option<AnalysisResult>,
    last_analyzed: Option<DateTime<Local>>,
    error_message: Option<String>,
    in_flight: Option<InFlight>,
    provider: Box<dyn AnalysisProvider>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_provider(Box::new(SimulatedProvider::new()))
    }

    pub fn with_provider(provider: Box<dyn AnalysisProvider>) -> Self {
        Self {
            active_tab: Tab::default(),
            input_text: String::new(),
            result: None,
            last_analyzed: None,
            error_message: None,
            in_flight: None,
            provider,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn last_analyzed(&self) -> Option<DateTime<Local>> {
        self.last_analyzed
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// True when the trigger button should accept a click.
    pub fn can_request(&self) -> bool {
        !self.input_text.trim().is_empty() && !self.is_pending()
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            debug!(from = self.active_tab.id(), to = tab.id(), "switching tab");
        }
        self.active_tab = tab;
    }

    pub fn set_input_text(&mut self, text: String) {
        self.input_text = text;
    }

    /// Starts an analysis of the current input.
    ///
    /// Validation uses the trimmed text; the provider receives it untrimmed.
    pub fn request_analysis(&mut self, now: Instant) -> Result<RequestId, RequestRejected> {
        if self.input_text.trim().is_empty() {
            return Err(RequestRejected::EmptyInput);
        }
        if let Some(in_flight) = &self.in_flight {
            debug!(request = %in_flight.id, "ignoring request while another is running");
            return Err(RequestRejected::AlreadyPending);
        }

        let id = Uuid::new_v4();
        let handle = self.provider.submit(&self.input_text, now);
        info!(request = %id, concept = %self.input_text.trim(), "analysis started");
        self.in_flight = Some(InFlight {
            id,
            started: now,
            handle,
        });
        Ok(id)
    }

    /// Collects the in-flight analysis if it has finished. Returns whether
    /// anything changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return false;
        };

        let outcome = match in_flight.handle.poll(now) {
            Poll::Pending => return false,
            Poll::Ready(outcome) => outcome,
        };

        let elapsed = now.saturating_duration_since(in_flight.started);
        let id = in_flight.id;
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                info!(request = %id, elapsed_ms = elapsed.as_millis() as u64, "analysis finished");
                self.result = Some(result);
                self.last_analyzed = Some(Local::now());
            }
            Err(e) => {
                warn!(request = %id, error = %e, "analysis failed");
                self.error_message = Some(e.to_string());
            }
        }
        true
    }

    /// Time left before the in-flight analysis is expected to resolve.
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        let in_flight = self.in_flight.as_ref()?;
        Some(match in_flight.handle.ready_at() {
            Some(ready_at) => ready_at.saturating_duration_since(now),
            // Unknown schedule, check back on a short interval
            None => Duration::from_millis(100),
        })
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
