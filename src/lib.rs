//! Iris Energy Library
//!
//! Core library for the Iris Energy peer-to-peer energy market assistant.

pub mod assistant;
pub mod catalog;
pub mod onboarding;
pub mod storage;
pub mod system;
pub mod types;
