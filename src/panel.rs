use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::decimal::Rate;
use crate::errors::{QuoteError, Result};
use crate::types::Lender;

/// the set of lender offers a comparison runs against
///
/// panels are plain reference data: load one from configuration, or start
/// from the built-in default. the ranking functions accept any `&[Lender]`
/// slice, so the panel's origin never matters to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderPanel {
    pub lenders: Vec<Lender>,
}

impl LenderPanel {
    pub fn new(lenders: Vec<Lender>) -> Self {
        Self { lenders }
    }

    /// namibian retail banks with indicative vehicle-finance terms
    pub fn namibian_default() -> Self {
        use rust_decimal_macros::dec;

        Self::new(vec![
            Lender::new(
                "Bank Windhoek",
                Rate::from_percentage(dec!(11.25)),
                72,
                Rate::from_percentage(dec!(10)),
            ),
            Lender::new(
                "First National Bank",
                Rate::from_percentage(dec!(11.5)),
                72,
                Rate::from_percentage(dec!(10)),
            ),
            Lender::new(
                "Nedbank",
                Rate::from_percentage(dec!(11.95)),
                84,
                Rate::ZERO,
            ),
            Lender::new(
                "Standard Bank",
                Rate::from_percentage(dec!(12.25)),
                84,
                Rate::ZERO,
            ),
            Lender::new(
                "Letshego Bank",
                Rate::from_percentage(dec!(13.5)),
                60,
                Rate::from_percentage(dec!(15)),
            ),
        ])
    }

    /// parse a panel from json; call validate() before quoting against it
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// check every lender and reject duplicate display names
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for lender in &self.lenders {
            lender.validate()?;
            if !seen.insert(lender.name.as_str()) {
                return Err(QuoteError::DuplicateLender {
                    name: lender.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// look up a lender by display name
    pub fn get(&self, name: &str) -> Option<&Lender> {
        self.lenders.iter().find(|l| l.name == name)
    }
}
