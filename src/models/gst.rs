//! GST treatment codes
//!
//! Every category (and therefore every classified transaction) carries a GST
//! code describing how the 10% goods-and-services tax applies to it. Only
//! standard-rated flows carry a collectible/claimable GST component on the
//! BAS; the other codes all resolve to a zero rate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// The standard GST rate for this jurisdiction
pub const GST_RATE: f64 = 0.10;

/// How GST applies to a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstCode {
    /// Standard-rated supply, 10% GST included in the price
    #[serde(rename = "GST")]
    Gst,
    /// GST-free supply (zero-rated)
    #[serde(rename = "GST_FREE")]
    GstFree,
    /// Input-taxed supply (e.g. bank interest and fees)
    #[serde(rename = "INPUT_TAXED")]
    InputTaxed,
    /// Outside the BAS entirely (wages, government payments, private spending)
    #[serde(rename = "BAS_EXCLUDED")]
    BasExcluded,
}

impl GstCode {
    /// The applicable GST rate for this code
    pub fn rate(&self) -> f64 {
        match self {
            Self::Gst => GST_RATE,
            Self::GstFree | Self::InputTaxed | Self::BasExcluded => 0.0,
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gst => "GST (10%)",
            Self::GstFree => "GST-Free",
            Self::InputTaxed => "Input Taxed",
            Self::BasExcluded => "BAS Excluded",
        }
    }

    /// The wire/storage string for this code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gst => "GST",
            Self::GstFree => "GST_FREE",
            Self::InputTaxed => "INPUT_TAXED",
            Self::BasExcluded => "BAS_EXCLUDED",
        }
    }

    /// Extract the GST component from a tax-inclusive amount under this code
    pub fn component_of(&self, inclusive: Money) -> Money {
        inclusive.gst_component(self.rate())
    }
}

impl fmt::Display for GstCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for GstCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GST" => Ok(Self::Gst),
            "GST_FREE" | "GST-FREE" => Ok(Self::GstFree),
            "INPUT_TAXED" | "INPUT-TAXED" => Ok(Self::InputTaxed),
            "BAS_EXCLUDED" | "BAS-EXCLUDED" => Ok(Self::BasExcluded),
            other => Err(format!("Unknown GST code: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates() {
        assert_eq!(GstCode::Gst.rate(), 0.10);
        assert_eq!(GstCode::GstFree.rate(), 0.0);
        assert_eq!(GstCode::InputTaxed.rate(), 0.0);
        assert_eq!(GstCode::BasExcluded.rate(), 0.0);
    }

    #[test]
    fn test_component_of() {
        let inclusive = Money::from_cents(11000);
        assert_eq!(GstCode::Gst.component_of(inclusive), Money::from_cents(1000));
        assert_eq!(GstCode::GstFree.component_of(inclusive), Money::zero());
    }

    #[test]
    fn test_wire_strings() {
        assert_eq!(GstCode::Gst.as_str(), "GST");
        assert_eq!(GstCode::BasExcluded.as_str(), "BAS_EXCLUDED");
        assert_eq!("GST_FREE".parse::<GstCode>().unwrap(), GstCode::GstFree);
        assert_eq!("input_taxed".parse::<GstCode>().unwrap(), GstCode::InputTaxed);
        assert!("VAT".parse::<GstCode>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&GstCode::Gst).unwrap();
        assert_eq!(json, "\"GST\"");
        let json = serde_json::to_string(&GstCode::BasExcluded).unwrap();
        assert_eq!(json, "\"BAS_EXCLUDED\"");

        let code: GstCode = serde_json::from_str("\"INPUT_TAXED\"").unwrap();
        assert_eq!(code, GstCode::InputTaxed);
    }
}
