//! Onboarding
//!
//! The guided setup a new user walks through: language, phone verification,
//! profile, market role, and the role's credential uploads.

pub mod documents;
pub mod verification;
pub mod wizard;
