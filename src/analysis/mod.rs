// src/analysis/mod.rs
pub mod concept;
pub mod provider;

// Re-export commonly used types
pub use concept::AnalysisResult;
pub use provider::{
    AnalysisProvider,
    PendingAnalysis,
    ProviderError,
    SimulatedProvider,
    SIMULATED_LATENCY
};
