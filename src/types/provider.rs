//! Electricity provider types

use serde::{Deserialize, Serialize};

/// A distribution utility the user can link during verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectricityProvider {
    /// Stable provider id, e.g. `"tpddl"`
    pub id: String,
    /// Short display name
    pub name: String,
    /// Full legal name
    pub full_name: String,
    /// Service region
    pub region: String,
    /// Provider portal, opened in the system browser for credential issuance
    pub website: String,
    /// Brand accent color as a hex string
    pub color: String,
}
