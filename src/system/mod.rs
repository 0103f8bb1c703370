//! System utilities
//!
//! This module provides system-level functionality like browser hand-off.

pub mod browser;
