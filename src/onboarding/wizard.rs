//! Onboarding wizard
//!
//! Step machine for first-run setup: pick a language, verify the phone,
//! fill in the profile, choose a market role, then upload the role's
//! required credentials. Each guard must pass before the next step
//! unlocks; a failed guard leaves the wizard where it was.

use std::sync::Arc;

use thiserror::Error;

use crate::onboarding::documents::{DocumentChecklist, MarketRole};
use crate::onboarding::verification::{CodeVerifier, OtpCode, PhoneNumber, VerifyError};
use crate::storage::settings::SUPPORTED_LANGUAGES;

/// Where the user is in the onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Language,
    Phone,
    Otp,
    Profile,
    Role,
    Verification,
    Complete,
}

impl OnboardingStep {
    /// Prompt title for the step
    pub fn label(&self) -> &'static str {
        match self {
            OnboardingStep::Language => "Choose language",
            OnboardingStep::Phone => "Phone number",
            OnboardingStep::Otp => "Enter code",
            OnboardingStep::Profile => "Your profile",
            OnboardingStep::Role => "Market role",
            OnboardingStep::Verification => "Upload credentials",
            OnboardingStep::Complete => "Done",
        }
    }
}

/// Errors raised by wizard transitions
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("This action belongs to the \"{}\" step", expected.label())]
    WrongStep { expected: OnboardingStep },
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Name is required")]
    MissingName,
    #[error("Code rejected")]
    CodeRejected,
    #[error("{0} required credential(s) still missing")]
    DocumentsMissing(usize),
    #[error(transparent)]
    Verify(#[from] VerifyError),
}

/// Profile details collected during onboarding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: Option<String>,
}

/// Drives a user through first-run setup
pub struct OnboardingWizard {
    step: OnboardingStep,
    verifier: Arc<dyn CodeVerifier>,
    language: Option<String>,
    phone: Option<PhoneNumber>,
    profile: Option<Profile>,
    checklist: Option<DocumentChecklist>,
}

impl OnboardingWizard {
    pub fn new(verifier: Arc<dyn CodeVerifier>) -> Self {
        Self {
            step: OnboardingStep::Language,
            verifier,
            language: None,
            phone: None,
            profile: None,
            checklist: None,
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    /// Pick the app language
    pub fn choose_language(&mut self, language: &str) -> Result<(), WizardError> {
        self.expect_step(OnboardingStep::Language)?;
        if !SUPPORTED_LANGUAGES.contains(&language) {
            return Err(WizardError::UnsupportedLanguage(language.to_string()));
        }
        self.language = Some(language.to_string());
        self.step = OnboardingStep::Phone;
        Ok(())
    }

    /// Submit the phone number; a one-time code goes out on success
    pub fn submit_phone(&mut self, raw: &str) -> Result<(), WizardError> {
        self.expect_step(OnboardingStep::Phone)?;
        let phone = PhoneNumber::parse(raw)?;
        tracing::info!("Sending one-time code to {}", phone);
        self.phone = Some(phone);
        self.step = OnboardingStep::Otp;
        Ok(())
    }

    /// Check the one-time code against the verifier
    pub async fn submit_code(&mut self, raw: &str) -> Result<(), WizardError> {
        self.expect_step(OnboardingStep::Otp)?;
        let code = OtpCode::parse(raw)?;
        let Some(phone) = self.phone.as_ref() else {
            return Err(WizardError::WrongStep {
                expected: OnboardingStep::Phone,
            });
        };
        if !self.verifier.verify(phone, &code).await? {
            return Err(WizardError::CodeRejected);
        }
        self.step = OnboardingStep::Profile;
        Ok(())
    }

    /// Save the profile; name required, email optional
    pub fn submit_profile(&mut self, name: &str, email: Option<&str>) -> Result<(), WizardError> {
        self.expect_step(OnboardingStep::Profile)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(WizardError::MissingName);
        }
        let email = email
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_string);
        self.profile = Some(Profile {
            name: name.to_string(),
            email,
        });
        self.step = OnboardingStep::Role;
        Ok(())
    }

    /// Choose how to participate in the market.
    ///
    /// Re-entering with the same role keeps documents already uploaded;
    /// switching roles starts a fresh checklist.
    pub fn choose_role(&mut self, role: MarketRole) -> Result<(), WizardError> {
        self.expect_step(OnboardingStep::Role)?;
        let keep = matches!(&self.checklist, Some(checklist) if checklist.role() == role);
        if !keep {
            self.checklist = Some(DocumentChecklist::for_role(role));
        }
        self.step = OnboardingStep::Verification;
        Ok(())
    }

    /// Record a credential upload. Returns whether the document was new.
    pub fn upload_document(&mut self, document: &str) -> Result<bool, WizardError> {
        self.expect_step(OnboardingStep::Verification)?;
        let Some(checklist) = self.checklist.as_mut() else {
            return Err(WizardError::WrongStep {
                expected: OnboardingStep::Role,
            });
        };
        Ok(checklist.upload(document))
    }

    /// Finish once every required credential is uploaded
    pub fn finish(&mut self) -> Result<(), WizardError> {
        self.expect_step(OnboardingStep::Verification)?;
        let Some(checklist) = self.checklist.as_ref() else {
            return Err(WizardError::WrongStep {
                expected: OnboardingStep::Role,
            });
        };
        let missing = checklist.missing().len();
        if missing > 0 {
            return Err(WizardError::DocumentsMissing(missing));
        }
        self.step = OnboardingStep::Complete;
        tracing::info!("Onboarding complete");
        Ok(())
    }

    /// Step back one screen. Collected state is kept, so returning to a
    /// step and moving forward again does not redo finished work.
    pub fn back(&mut self) {
        self.step = match self.step {
            OnboardingStep::Language | OnboardingStep::Phone => OnboardingStep::Language,
            OnboardingStep::Otp => OnboardingStep::Phone,
            OnboardingStep::Profile => OnboardingStep::Otp,
            OnboardingStep::Role => OnboardingStep::Profile,
            OnboardingStep::Verification => OnboardingStep::Role,
            OnboardingStep::Complete => OnboardingStep::Complete,
        };
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn checklist(&self) -> Option<&DocumentChecklist> {
        self.checklist.as_ref()
    }

    fn expect_step(&self, expected: OnboardingStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep { expected })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::verification::StaticCodeVerifier;

    fn wizard() -> OnboardingWizard {
        OnboardingWizard::new(Arc::new(StaticCodeVerifier::default()))
    }

    #[tokio::test]
    async fn test_full_walkthrough() {
        let mut wizard = wizard();
        assert_eq!(wizard.step(), OnboardingStep::Language);

        wizard.choose_language("en").unwrap();
        wizard.submit_phone("9876543210").unwrap();
        wizard.submit_code("0001").await.unwrap();
        wizard
            .submit_profile("Asha", Some("asha@example.com"))
            .unwrap();
        wizard.choose_role(MarketRole::Prosumer).unwrap();

        for document in MarketRole::Prosumer.required_documents() {
            assert!(wizard.upload_document(document).unwrap());
        }
        wizard.finish().unwrap();

        assert_eq!(wizard.step(), OnboardingStep::Complete);
        assert_eq!(wizard.language(), Some("en"));
        assert_eq!(wizard.profile().unwrap().name, "Asha");
    }

    #[test]
    fn test_steps_must_run_in_order() {
        let mut wizard = wizard();
        let err = wizard.submit_phone("9876543210").unwrap_err();
        assert!(matches!(
            err,
            WizardError::WrongStep {
                expected: OnboardingStep::Phone
            }
        ));
        assert_eq!(wizard.step(), OnboardingStep::Language);
    }

    #[test]
    fn test_unsupported_language_rejected() {
        let mut wizard = wizard();
        assert!(wizard.choose_language("xx").is_err());
        assert_eq!(wizard.step(), OnboardingStep::Language);
    }

    #[test]
    fn test_invalid_phone_keeps_step() {
        let mut wizard = wizard();
        wizard.choose_language("hi").unwrap();
        assert!(wizard.submit_phone("12345").is_err());
        assert_eq!(wizard.step(), OnboardingStep::Phone);
    }

    #[tokio::test]
    async fn test_wrong_code_can_be_retried() {
        let mut wizard = wizard();
        wizard.choose_language("en").unwrap();
        wizard.submit_phone("9876543210").unwrap();

        let err = wizard.submit_code("1234").await.unwrap_err();
        assert!(matches!(err, WizardError::CodeRejected));
        assert_eq!(wizard.step(), OnboardingStep::Otp);

        wizard.submit_code("0001").await.unwrap();
        assert_eq!(wizard.step(), OnboardingStep::Profile);
    }

    #[tokio::test]
    async fn test_profile_requires_name() {
        let mut wizard = wizard();
        wizard.choose_language("en").unwrap();
        wizard.submit_phone("9876543210").unwrap();
        wizard.submit_code("0001").await.unwrap();

        assert!(matches!(
            wizard.submit_profile("   ", None),
            Err(WizardError::MissingName)
        ));
        assert_eq!(wizard.step(), OnboardingStep::Profile);

        wizard.submit_profile("Ravi", None).unwrap();
        assert!(wizard.profile().unwrap().email.is_none());
    }

    #[tokio::test]
    async fn test_back_keeps_uploaded_documents() {
        let mut wizard = wizard();
        wizard.choose_language("en").unwrap();
        wizard.submit_phone("9876543210").unwrap();
        wizard.submit_code("0001").await.unwrap();
        wizard.submit_profile("Ravi", None).unwrap();
        wizard.choose_role(MarketRole::Seller).unwrap();
        wizard.upload_document("Utility Customer VC").unwrap();

        wizard.back();
        assert_eq!(wizard.step(), OnboardingStep::Role);

        // same role: the earlier upload survives
        wizard.choose_role(MarketRole::Seller).unwrap();
        let checklist = wizard.checklist().unwrap();
        assert_eq!(checklist.missing(), vec!["Seller VC"]);

        // switching roles starts over
        wizard.back();
        wizard.choose_role(MarketRole::Prosumer).unwrap();
        assert!(wizard.checklist().unwrap().uploaded().is_empty());
    }

    #[test]
    fn test_back_stops_at_the_first_step() {
        let mut wizard = wizard();
        wizard.back();
        assert_eq!(wizard.step(), OnboardingStep::Language);
    }

    #[tokio::test]
    async fn test_finish_requires_all_documents() {
        let mut wizard = wizard();
        wizard.choose_language("en").unwrap();
        wizard.submit_phone("9876543210").unwrap();
        wizard.submit_code("0001").await.unwrap();
        wizard.submit_profile("Ravi", None).unwrap();
        wizard.choose_role(MarketRole::Buyer).unwrap();

        wizard.upload_document("Utility Customer VC").unwrap();
        let err = wizard.finish().unwrap_err();
        assert!(matches!(err, WizardError::DocumentsMissing(1)));
        assert_eq!(wizard.step(), OnboardingStep::Verification);

        wizard.upload_document("Consumer VC").unwrap();
        wizard.finish().unwrap();
        assert_eq!(wizard.step(), OnboardingStep::Complete);
    }
}
