/*
[INPUT]:  Currency codes supplied by callers
[OUTPUT]: Currency enum and membership test
[POS]:    Data layer - closed set of supported currencies
[UPDATE]: When CedsonHub adds or removes a currency
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "BTC")]
    Btc,
    #[serde(rename = "LTC")]
    Ltc,
    #[serde(rename = "DOGE")]
    Doge,
}

/// Returned when a code is not one of the supported currencies
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported currency: {0}")]
pub struct UnsupportedCurrency(pub String);

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Btc, Currency::Ltc, Currency::Doge];

    /// Wire code sent to CedsonHub
    pub const fn as_str(self) -> &'static str {
        match self {
            Currency::Btc => "BTC",
            Currency::Ltc => "LTC",
            Currency::Doge => "DOGE",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = UnsupportedCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.as_str() == s)
            .ok_or_else(|| UnsupportedCurrency(s.to_string()))
    }
}

/// Case-sensitive membership test against the supported currency codes.
pub fn is_supported(code: &str) -> bool {
    code.parse::<Currency>().is_ok()
}
