//! Market roles and credential requirements
//!
//! Each market role must present a fixed set of verifiable credentials
//! before the account goes live. Uploads are idempotent and the checklist
//! is complete exactly when every required document has been uploaded.

use serde::{Deserialize, Serialize};

/// How the user participates in the energy market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketRole {
    Buyer,
    Seller,
    Prosumer,
}

impl MarketRole {
    /// Parse a stored role string; anything unrecognized is treated as buyer
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "seller" => MarketRole::Seller,
            "prosumer" => MarketRole::Prosumer,
            _ => MarketRole::Buyer,
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            MarketRole::Buyer => "Buyer",
            MarketRole::Seller => "Seller",
            MarketRole::Prosumer => "Prosumer",
        }
    }

    /// One-line pitch shown on the role picker
    pub fn description(&self) -> &'static str {
        match self {
            MarketRole::Buyer => "I want to purchase clean energy for my home or business.",
            MarketRole::Seller => "I have solar panels and want to sell excess energy.",
            MarketRole::Prosumer => "I want to both buy and sell energy dynamically.",
        }
    }

    /// Accent color for the role card
    pub fn accent_color(&self) -> &'static str {
        match self {
            MarketRole::Buyer => "#3EBAF4",
            MarketRole::Seller => "#00E673",
            MarketRole::Prosumer => "#6366F1",
        }
    }

    /// Credentials the role must upload before verification completes
    pub fn required_documents(&self) -> Vec<&'static str> {
        match self {
            MarketRole::Buyer => vec!["Utility Customer VC", "Consumer VC"],
            MarketRole::Seller => vec!["Utility Customer VC", "Seller VC"],
            MarketRole::Prosumer => vec!["Utility Customer VC", "Buyer VC", "Seller VC"],
        }
    }
}

/// Tracks which of a role's required credentials have been uploaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentChecklist {
    role: MarketRole,
    required: Vec<String>,
    uploaded: Vec<String>,
}

impl DocumentChecklist {
    pub fn for_role(role: MarketRole) -> Self {
        Self {
            role,
            required: role
                .required_documents()
                .iter()
                .map(|document| document.to_string())
                .collect(),
            uploaded: Vec::new(),
        }
    }

    pub fn role(&self) -> MarketRole {
        self.role
    }

    /// Record an upload. Repeats of an already-uploaded document and
    /// documents the role does not require are ignored.
    pub fn upload(&mut self, document: &str) -> bool {
        if !self.required.iter().any(|required| required == document) {
            tracing::warn!("Ignoring upload of unrequired document: {}", document);
            return false;
        }
        if self.uploaded.iter().any(|uploaded| uploaded == document) {
            return false;
        }
        self.uploaded.push(document.to_string());
        tracing::info!(
            "Uploaded {} ({}/{})",
            document,
            self.uploaded.len(),
            self.required.len()
        );
        true
    }

    /// Complete once every required document has been uploaded
    pub fn is_complete(&self) -> bool {
        self.uploaded.len() == self.required.len()
    }

    /// Required documents not uploaded yet, in requirement order
    pub fn missing(&self) -> Vec<&str> {
        self.required
            .iter()
            .filter(|required| !self.uploaded.contains(required))
            .map(String::as_str)
            .collect()
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn uploaded(&self) -> &[String] {
        &self.uploaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_defaults_to_buyer() {
        assert_eq!(MarketRole::parse("buyer"), MarketRole::Buyer);
        assert_eq!(MarketRole::parse("SELLER"), MarketRole::Seller);
        assert_eq!(MarketRole::parse(" prosumer "), MarketRole::Prosumer);
        assert_eq!(MarketRole::parse("landlord"), MarketRole::Buyer);
        assert_eq!(MarketRole::parse(""), MarketRole::Buyer);
    }

    #[test]
    fn test_required_documents_per_role() {
        assert_eq!(MarketRole::Buyer.required_documents().len(), 2);
        assert_eq!(MarketRole::Seller.required_documents().len(), 2);

        let prosumer = MarketRole::Prosumer.required_documents();
        assert_eq!(prosumer.len(), 3);
        assert!(prosumer.contains(&"Utility Customer VC"));
        assert!(prosumer.contains(&"Buyer VC"));
        assert!(prosumer.contains(&"Seller VC"));
    }

    #[test]
    fn test_completion_requires_every_document() {
        let mut checklist = DocumentChecklist::for_role(MarketRole::Prosumer);
        assert!(!checklist.is_complete());

        assert!(checklist.upload("Utility Customer VC"));
        assert!(checklist.upload("Buyer VC"));
        assert!(!checklist.is_complete(), "one document still missing");
        assert_eq!(checklist.missing(), vec!["Seller VC"]);

        assert!(checklist.upload("Seller VC"));
        assert!(checklist.is_complete());
        assert!(checklist.missing().is_empty());

        // re-uploading after completion changes nothing
        assert!(!checklist.upload("Seller VC"));
        assert!(checklist.is_complete());
    }

    #[test]
    fn test_upload_is_idempotent() {
        let mut checklist = DocumentChecklist::for_role(MarketRole::Buyer);
        assert!(checklist.upload("Consumer VC"));
        assert!(!checklist.upload("Consumer VC"));
        assert_eq!(checklist.uploaded().len(), 1);
    }

    #[test]
    fn test_unrequired_document_is_ignored() {
        let mut checklist = DocumentChecklist::for_role(MarketRole::Buyer);
        assert!(!checklist.upload("Seller VC"));
        assert!(checklist.uploaded().is_empty());
        assert!(!checklist.is_complete());
    }
}
