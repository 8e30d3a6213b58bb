//! Region handling. The region code comes from the caller's geolocation lookup;
//! anything missing or malformed resolves to a neutral, non-India region.

use serde::{Serialize, Serializer};

const INDIA: &str = "IN";
const NEUTRAL_CODE: &str = "N/A";

/// Two-letter country code, or the neutral region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    code: Option<String>,
}

/// Price labels shown on the welcome letter and investment pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionalPricing {
    /// Value of the full placement plan.
    pub plan_value: &'static str,
    /// Value of the personalised report.
    pub report_value: &'static str,
}

impl Region {
    /// Accepts any two ASCII letters, case-insensitively. Never fails.
    pub fn parse(code: Option<&str>) -> Self {
        let code = code
            .map(str::trim)
            .filter(|c| c.len() == 2 && c.chars().all(|ch| ch.is_ascii_alphabetic()))
            .map(str::to_ascii_uppercase);
        match code {
            Some(code) => Region { code: Some(code) },
            None => Region::neutral(),
        }
    }

    pub fn neutral() -> Self {
        Region::default()
    }

    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or(NEUTRAL_CODE)
    }

    pub fn is_india(&self) -> bool {
        self.code.as_deref() == Some(INDIA)
    }

    pub fn currency_symbol(&self) -> &'static str {
        match self.code() {
            "GB" => "£",
            "DE" | "FR" | "ES" | "IT" | "NL" | "IE" | "AT" | "BE" | "FI" | "GR" | "PT" => "€",
            "IN" => "₹",
            "JP" => "¥",
            "AU" => "A$",
            "CA" => "C$",
            _ => "$",
        }
    }

    pub fn pricing(&self) -> RegionalPricing {
        if self.is_india() {
            RegionalPricing {
                plan_value: "₹6490",
                report_value: "₹2490",
            }
        } else {
            RegionalPricing {
                plan_value: "$189",
                report_value: "$49",
            }
        }
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_india_detected() {
        assert!(Region::parse(Some("IN")).is_india());
        assert!(Region::parse(Some(" in ")).is_india());
    }

    #[test]
    fn test_other_codes_are_not_india() {
        assert!(!Region::parse(Some("US")).is_india());
        assert!(!Region::parse(Some("GB")).is_india());
    }

    #[test]
    fn test_malformed_code_falls_back_to_neutral() {
        for bad in [None, Some(""), Some("IND"), Some("1N"), Some("N/A")] {
            let region = Region::parse(bad);
            assert_eq!(region, Region::neutral(), "input {bad:?}");
            assert!(!region.is_india());
            assert_eq!(region.code(), "N/A");
        }
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(Region::parse(Some("GB")).currency_symbol(), "£");
        assert_eq!(Region::parse(Some("pt")).currency_symbol(), "€");
        assert_eq!(Region::parse(Some("IN")).currency_symbol(), "₹");
        assert_eq!(Region::parse(Some("BR")).currency_symbol(), "$");
        assert_eq!(Region::neutral().currency_symbol(), "$");
    }

    #[test]
    fn test_pricing_by_region() {
        let india = Region::parse(Some("IN")).pricing();
        assert_eq!(india.plan_value, "₹6490");
        assert_eq!(india.report_value, "₹2490");
        assert_eq!(Region::parse(Some("US")).pricing().report_value, "$49");
        assert_eq!(Region::neutral().pricing().plan_value, "$189");
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Region::parse(Some("de"))).unwrap();
        assert_eq!(json, r#""DE""#);
    }
}
