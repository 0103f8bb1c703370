//! Phone verification
//!
//! One-time-code verification behind a collaborator trait, keeping the code
//! transport (an SMS gateway in production, a fixed code in demo builds)
//! outside the wizard.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised during phone verification
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Phone number must be exactly 10 digits")]
    InvalidPhone,
    #[error("Code must be exactly 4 digits")]
    InvalidCode,
    #[error("Verification service unavailable: {0}")]
    Unavailable(String),
}

/// A phone number of exactly 10 ASCII digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, VerifyError> {
        let digits = raw.trim();
        if digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(digits.to_string()))
        } else {
            Err(VerifyError::InvalidPhone)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A one-time code of exactly 4 ASCII digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn parse(raw: &str) -> Result<Self, VerifyError> {
        let digits = raw.trim();
        if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(digits.to_string()))
        } else {
            Err(VerifyError::InvalidCode)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Checks one-time codes sent to a phone number
#[async_trait]
pub trait CodeVerifier: Send + Sync {
    /// Whether the code matches what was sent to the number
    async fn verify(&self, phone: &PhoneNumber, code: &OtpCode) -> Result<bool, VerifyError>;
}

/// Verifier that accepts one fixed code. Demo builds and tests use this.
pub struct StaticCodeVerifier {
    accepted: String,
}

impl StaticCodeVerifier {
    pub fn new(accepted: impl Into<String>) -> Self {
        Self {
            accepted: accepted.into(),
        }
    }
}

impl Default for StaticCodeVerifier {
    fn default() -> Self {
        Self::new("0001")
    }
}

#[async_trait]
impl CodeVerifier for StaticCodeVerifier {
    async fn verify(&self, phone: &PhoneNumber, code: &OtpCode) -> Result<bool, VerifyError> {
        let accepted = code.as_str() == self.accepted;
        if accepted {
            tracing::info!("Phone {} verified", phone);
        } else {
            tracing::debug!("Rejected code for {}", phone);
        }
        Ok(accepted)
    }
}
