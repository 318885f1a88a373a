//! Triage Assistant - conversational symptom triage.
//!
//! Walks a patient through a bounded run of follow-up questions, then asks
//! the model for a final recommendation. Every exchange is kept as
//! per-patient, per-session memory so the model backend stays stateless.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
