//! Electricity provider catalog
//!
//! Distribution utilities supported for credential issuance during
//! verification. The provider's portal is opened in the system browser.

use crate::types::provider::ElectricityProvider;

/// All supported electricity providers
pub fn electricity_providers() -> Vec<ElectricityProvider> {
    vec![
        ElectricityProvider {
            id: "tpddl".to_string(),
            name: "TPDDL".to_string(),
            full_name: "Tata Power Delhi Distribution Limited".to_string(),
            region: "Delhi".to_string(),
            website: "https://www.tatapower-ddl.com".to_string(),
            color: "#0066CC".to_string(),
        },
        ElectricityProvider {
            id: "pvvnl".to_string(),
            name: "PVVNL".to_string(),
            full_name: "Paschimanchal Vidyut Vitran Nigam Limited".to_string(),
            region: "Uttar Pradesh".to_string(),
            website: "https://www.pvvnl.org".to_string(),
            color: "#FF6B35".to_string(),
        },
        ElectricityProvider {
            id: "brpl".to_string(),
            name: "BRPL".to_string(),
            full_name: "BSES Rajdhani Power Limited".to_string(),
            region: "Delhi".to_string(),
            website: "https://www.bsesdelhi.com".to_string(),
            color: "#00A86B".to_string(),
        },
    ]
}

/// Look up a provider by id
pub fn find_provider(id: &str) -> Option<ElectricityProvider> {
    electricity_providers()
        .into_iter()
        .find(|provider| provider.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_catalog() {
        let providers = electricity_providers();
        assert_eq!(providers.len(), 3);
        assert!(providers.iter().all(|p| p.website.starts_with("https://")));
    }

    #[test]
    fn test_find_provider() {
        let provider = find_provider("tpddl").expect("tpddl");
        assert_eq!(provider.full_name, "Tata Power Delhi Distribution Limited");
        assert_eq!(provider.region, "Delhi");

        assert!(find_provider("nope").is_none());
    }
}
