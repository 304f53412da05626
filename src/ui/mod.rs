// src/ui/mod.rs
pub mod concept;
pub mod panel;
pub mod placeholder;
