/*
[INPUT]:  Caller arguments for each CedsonHub operation
[OUTPUT]: Validated parameters bound to an endpoint and HTTP method
[POS]:    HTTP layer - one type per remote operation
[UPDATE]: When adding new endpoints or changing request parameters
*/

use reqwest::Method;

use crate::http::Endpoint;
use crate::types::{Amount, Outcome, is_supported};

pub const INVALID_AMOUNT_IN_COINS: &str = "Invalid amount_in_coins";
pub const INVALID_AMOUNT_IN_SATOSHIS: &str = "Invalid amount_in_satoshis";
pub const INVALID_CURRENCY: &str = "Invalid currency";

/// A single CedsonHub operation.
///
/// `params` are appended after `api_key`: as query parameters for GET, as
/// form fields for POST.
pub trait Operation: Send + Sync {
    const ENDPOINT: Endpoint;
    const METHOD: Method = Method::GET;

    /// Client-side check run before anything is sent; `Some` short-circuits
    fn validate(&self) -> Option<Outcome> {
        None
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// GET /get-balance
#[derive(Debug, Clone, Copy, Default)]
pub struct GetBalance;

impl Operation for GetBalance {
    const ENDPOINT: Endpoint = Endpoint::Balance;
}

/// GET /currencies
#[derive(Debug, Clone, Copy, Default)]
pub struct GetSupportedCoins;

impl Operation for GetSupportedCoins {
    const ENDPOINT: Endpoint = Endpoint::Currencies;
}

/// GET /check-user?username={username}
#[derive(Debug, Clone)]
pub struct CheckUser {
    pub username: String,
}

impl Operation for CheckUser {
    const ENDPOINT: Endpoint = Endpoint::CheckUser;

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![("username", self.username.clone())]
    }
}

/// POST /payout
#[derive(Debug, Clone)]
pub struct Payout {
    pub to: String,
    pub currency: String,
    pub amount: Amount,
    pub is_referral: bool,
    pub ip_address: Option<String>,
}

impl Payout {
    pub fn new(to: impl Into<String>, currency: impl Into<String>, amount: Amount) -> Self {
        Self {
            to: to.into(),
            currency: currency.into(),
            amount,
            is_referral: false,
            ip_address: None,
        }
    }

    pub fn referral(mut self, is_referral: bool) -> Self {
        self.is_referral = is_referral;
        self
    }

    pub fn ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }
}

impl Operation for Payout {
    const ENDPOINT: Endpoint = Endpoint::Payout;
    const METHOD: Method = Method::POST;

    fn validate(&self) -> Option<Outcome> {
        if self.amount.amount_in_coins < 0 {
            return Some(Outcome::failure(INVALID_AMOUNT_IN_COINS));
        }
        if self.amount.amount_in_satoshis < 0 {
            return Some(Outcome::failure(INVALID_AMOUNT_IN_SATOSHIS));
        }
        if !is_supported(&self.currency) {
            return Some(Outcome::failure(INVALID_CURRENCY));
        }
        None
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("to", self.to.clone()),
            ("currency", self.currency.clone()),
            ("amount_in_coins", self.amount.amount_in_coins.to_string()),
            (
                "amount_in_satoshis",
                self.amount.amount_in_satoshis.to_string(),
            ),
            ("is_referral", form_bool(self.is_referral)),
        ];
        // a missing ip_address is left out of the form rather than sent empty
        if let Some(ip_address) = &self.ip_address {
            params.push(("ip_address", ip_address.clone()));
        }
        params
    }
}

/// GET /recent-payouts
#[derive(Debug, Clone, Copy, Default)]
pub struct GetRecentPayouts;

impl Operation for GetRecentPayouts {
    const ENDPOINT: Endpoint = Endpoint::RecentPayouts;
}

/// GET /sites-list
#[derive(Debug, Clone, Copy, Default)]
pub struct GetSitesList;

impl Operation for GetSitesList {
    const ENDPOINT: Endpoint = Endpoint::SitesList;
}

/// GET /project-categories
#[derive(Debug, Clone, Copy, Default)]
pub struct GetProjectCategories;

impl Operation for GetProjectCategories {
    const ENDPOINT: Endpoint = Endpoint::ProjectCategories;
}

/// POST /accept-payment/create
///
/// Amounts are not checked locally; the server rejects bad values with a 400.
#[derive(Debug, Clone)]
pub struct CreateInvoice {
    pub currency: String,
    pub amount: Amount,
}

impl CreateInvoice {
    pub fn new(currency: impl Into<String>, amount: Amount) -> Self {
        Self {
            currency: currency.into(),
            amount,
        }
    }
}

impl Operation for CreateInvoice {
    const ENDPOINT: Endpoint = Endpoint::InvoiceCreate;
    const METHOD: Method = Method::POST;

    fn validate(&self) -> Option<Outcome> {
        if is_supported(&self.currency) {
            None
        } else {
            Some(Outcome::failure(INVALID_CURRENCY))
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency", self.currency.clone()),
            ("amount_in_coins", self.amount.amount_in_coins.to_string()),
            (
                "amount_in_satoshis",
                self.amount.amount_in_satoshis.to_string(),
            ),
        ]
    }
}

/// GET /accept-payment/verify?payment_id={payment_id}
#[derive(Debug, Clone, Copy)]
pub struct VerifyInvoice {
    pub payment_id: u64,
}

impl Operation for VerifyInvoice {
    const ENDPOINT: Endpoint = Endpoint::InvoiceVerify;

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![("payment_id", self.payment_id.to_string())]
    }
}

// Form booleans are sent as 1/0.
fn form_bool(value: bool) -> String {
    let encoded = if value { "1" } else { "0" };
    encoded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_rejects_negative_coins_first() {
        let payout = Payout::new("john_doe", "XRP", Amount::new(-1, -1));
        assert_eq!(
            payout.validate().map(|o| o.error().to_string()).as_deref(),
            Some(INVALID_AMOUNT_IN_COINS)
        );
    }

    #[test]
    fn test_payout_rejects_negative_satoshis() {
        let payout = Payout::new("john_doe", "BTC", Amount::new(0, -5));
        assert_eq!(
            payout.validate().map(|o| o.error().to_string()).as_deref(),
            Some(INVALID_AMOUNT_IN_SATOSHIS)
        );
    }

    #[test]
    fn test_payout_rejects_unknown_currency() {
        let payout = Payout::new("john_doe", "XRP", Amount::new(1, 0));
        let outcome = payout.validate().expect("should reject");
        assert!(!outcome.is_success());
        assert_eq!(outcome.error(), INVALID_CURRENCY);
    }

    #[test]
    fn test_payout_params() {
        let payout = Payout::new("john_doe", "LTC", Amount::new(1, 1));
        assert!(payout.validate().is_none());
        assert_eq!(
            payout.params(),
            vec![
                ("to", "john_doe".to_string()),
                ("currency", "LTC".to_string()),
                ("amount_in_coins", "1".to_string()),
                ("amount_in_satoshis", "1".to_string()),
                ("is_referral", "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_payout_optional_params() {
        let params = Payout::new("john_doe", "DOGE", Amount::new(0, 10))
            .referral(true)
            .ip_address("203.0.113.9")
            .params();
        assert!(params.contains(&("is_referral", "1".to_string())));
        assert_eq!(params.last(), Some(&("ip_address", "203.0.113.9".to_string())));
    }

    #[test]
    fn test_create_invoice_checks_currency_only() {
        let invoice = CreateInvoice::new("BTC", Amount::new(-3, -4));
        assert!(invoice.validate().is_none());

        let invoice = CreateInvoice::new("btc", Amount::new(1, 0));
        assert_eq!(
            invoice.validate().map(|o| o.error().to_string()).as_deref(),
            Some(INVALID_CURRENCY)
        );
    }

    #[test]
    fn test_create_invoice_params_omit_payout_fields() {
        let keys: Vec<_> = CreateInvoice::new("BTC", Amount::new(2, 5))
            .params()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, ["currency", "amount_in_coins", "amount_in_satoshis"]);
    }

    #[test]
    fn test_methods() {
        assert_eq!(GetBalance::METHOD, Method::GET);
        assert_eq!(VerifyInvoice::METHOD, Method::GET);
        assert_eq!(Payout::METHOD, Method::POST);
        assert_eq!(CreateInvoice::METHOD, Method::POST);
    }
}
