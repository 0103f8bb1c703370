//! Shared type definitions
//!
//! This module contains all shared data types used across the application.

pub mod flow;
pub mod market;
pub mod message;
pub mod provider;
