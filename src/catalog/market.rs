//! Marketplace asset catalog
//!
//! The fixed set of energy assets shown on the market screen, with current
//! prices and a week of trend samples.

use crate::types::market::{AssetKind, EnergyAsset};

/// All assets listed on the marketplace
pub fn energy_assets() -> Vec<EnergyAsset> {
    vec![
        EnergyAsset {
            id: "1".to_string(),
            name: "Solar Park Rajasthan".to_string(),
            symbol: "SUN-RJ".to_string(),
            price: 4.25,
            change: 0.15,
            change_percent: 3.65,
            kind: AssetKind::Solar,
            trend: vec![4.10, 4.15, 4.12, 4.18, 4.25, 4.22, 4.25],
            description: "Large-scale solar park located in the Thar Desert capable of generating over 200MW during peak hours.".to_string(),
            location: "Rajasthan, India".to_string(),
            capacity: "250 MW".to_string(),
        },
        EnergyAsset {
            id: "2".to_string(),
            name: "Tamil Nadu Wind Farm".to_string(),
            symbol: "WIND-TN".to_string(),
            price: 3.80,
            change: -0.05,
            change_percent: -1.30,
            kind: AssetKind::Wind,
            trend: vec![3.90, 3.88, 3.85, 3.82, 3.80, 3.78, 3.80],
            description: "Wind energy generation facility utilizing high-efficiency turbines in the coastal regions.".to_string(),
            location: "Tamil Nadu, India".to_string(),
            capacity: "150 MW".to_string(),
        },
        EnergyAsset {
            id: "3".to_string(),
            name: "National Grid (Average)".to_string(),
            symbol: "GRID-IN".to_string(),
            price: 6.50,
            change: 0.45,
            change_percent: 7.43,
            kind: AssetKind::Grid,
            trend: vec![6.00, 6.10, 6.25, 6.30, 6.45, 6.48, 6.50],
            description: "Average price for grid electricity across major distribution networks.".to_string(),
            location: "National".to_string(),
            capacity: "N/A".to_string(),
        },
        EnergyAsset {
            id: "4".to_string(),
            name: "Coastal Hydro Project".to_string(),
            symbol: "HYDR-KA".to_string(),
            price: 5.10,
            change: 0.02,
            change_percent: 0.39,
            kind: AssetKind::Hydro,
            trend: vec![5.08, 5.09, 5.10, 5.10, 5.11, 5.10, 5.10],
            description: "Hydroelectric power station leveraging river flow for consistent green energy.".to_string(),
            location: "Karnataka, India".to_string(),
            capacity: "100 MW".to_string(),
        },
        EnergyAsset {
            id: "5".to_string(),
            name: "Green Valley Solar".to_string(),
            symbol: "GVS-MH".to_string(),
            price: 4.55,
            change: 0.22,
            change_percent: 5.08,
            kind: AssetKind::Solar,
            trend: vec![4.30, 4.35, 4.42, 4.48, 4.55, 4.52, 4.55],
            description: "Community solar project providing clean energy to local residential areas.".to_string(),
            location: "Maharashtra, India".to_string(),
            capacity: "50 MW".to_string(),
        },
    ]
}

/// Look up a single asset by id
pub fn find_asset(id: &str) -> Option<EnergyAsset> {
    energy_assets().into_iter().find(|asset| asset.id == id)
}

/// Case-insensitive search over asset names and symbols
pub fn search_assets(query: &str) -> Vec<EnergyAsset> {
    let query = query.to_lowercase();
    energy_assets()
        .into_iter()
        .filter(|asset| {
            asset.name.to_lowercase().contains(&query)
                || asset.symbol.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let assets = energy_assets();
        assert_eq!(assets.len(), 5);

        let grid = assets.iter().find(|a| a.symbol == "GRID-IN").expect("grid asset");
        assert_eq!(grid.price, 6.50);
        assert_eq!(grid.kind, AssetKind::Grid);
        assert_eq!(grid.trend.len(), 7);
    }

    #[test]
    fn test_find_asset() {
        let asset = find_asset("2").expect("wind farm");
        assert_eq!(asset.symbol, "WIND-TN");
        assert!(!asset.is_positive());

        assert!(find_asset("99").is_none());
    }

    #[test]
    fn test_search_by_name_fragment() {
        let hits = search_assets("solar");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|a| a.kind == AssetKind::Solar));
    }

    #[test]
    fn test_search_by_symbol_is_case_insensitive() {
        let hits = search_assets("wind-tn");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Tamil Nadu Wind Farm");
    }

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(search_assets("").len(), 5);
    }
}
