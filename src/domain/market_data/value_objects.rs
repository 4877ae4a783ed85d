use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - Price
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Label text used by the current-price box
    pub fn label(&self) -> String {
        format!("{:.4}", self.0)
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Market an asset is quoted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum AssetClass {
    #[strum(serialize = "Forex")]
    Forex,
    #[strum(serialize = "Crypto")]
    Crypto,
    #[strum(serialize = "Stocks")]
    Stocks,
    #[strum(serialize = "B3")]
    B3,
}

/// Value Object - the instrument shown on the chart.
///
/// The name is opaque: it is displayed and optionally used to seed the
/// synthetic series, never looked up anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", name)]
pub struct Asset {
    name: String,
    class: AssetClass,
}

impl Asset {
    pub fn new(name: &str, class: AssetClass) -> Result<Self, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Asset name cannot be empty".to_string());
        }
        Ok(Self { name: name.to_uppercase(), class })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> AssetClass {
        self.class
    }

    /// Assets offered by the dashboard selector
    pub fn catalog() -> Vec<Asset> {
        [
            ("EUR/USD", AssetClass::Forex),
            ("GBP/USD", AssetClass::Forex),
            ("BTC/USD", AssetClass::Crypto),
            ("AAPL", AssetClass::Stocks),
            ("GOOGL", AssetClass::Stocks),
            ("PETR4", AssetClass::B3),
        ]
        .into_iter()
        .map(|(name, class)| Self { name: name.to_string(), class })
        .collect()
    }

    /// Look an asset up in the catalog by name (case-insensitive)
    pub fn find(name: &str) -> Option<Asset> {
        let wanted = name.trim().to_uppercase();
        Self::catalog().into_iter().find(|a| a.name == wanted)
    }

    /// Stable 64-bit FNV-1a hash of the name, used as a per-asset seed
    pub fn seed(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;
        self.name
            .bytes()
            .fold(OFFSET, |hash, byte| (hash ^ byte as u64).wrapping_mul(PRIME))
    }
}

impl Default for Asset {
    fn default() -> Self {
        Self { name: "EUR/USD".to_string(), class: AssetClass::Forex }
    }
}

impl From<&str> for Asset {
    /// Catalog entry when known, otherwise a Forex asset with that name.
    /// Blank input selects the default asset.
    fn from(value: &str) -> Self {
        if value.trim().is_empty() {
            return Self::default();
        }
        Self::find(value).unwrap_or_else(|| Self {
            name: value.trim().to_uppercase(),
            class: AssetClass::Forex,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lookup_is_case_insensitive() {
        let asset = Asset::find("btc/usd").unwrap();
        assert_eq!(asset.class(), AssetClass::Crypto);
        assert_eq!(asset.to_string(), "BTC/USD");
    }

    #[test]
    fn seed_is_stable_and_distinct() {
        let eur = Asset::from("EUR/USD");
        let gbp = Asset::from("GBP/USD");
        assert_eq!(eur.seed(), Asset::default().seed());
        assert_ne!(eur.seed(), gbp.seed());
    }

    #[test]
    fn empty_name_rejected() {
        assert!(Asset::new("   ", AssetClass::Forex).is_err());
    }

    #[test]
    fn blank_input_falls_back_to_default() {
        assert_eq!(Asset::from(""), Asset::default());
        assert_eq!(Asset::from("  \t"), Asset::default());
        assert!(!Asset::from("").name().is_empty());
    }

    #[test]
    fn price_label_has_four_decimals() {
        assert_eq!(Price::from(1.08504).label(), "1.0850");
    }
}
