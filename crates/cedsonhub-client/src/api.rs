/*
[INPUT]:  API key, client configuration and per-call arguments
[OUTPUT]: Outcome for every call, whatever happens underneath
[POS]:    Public entry point - fail-safe facade over the operation clients
[UPDATE]: When adding operations or changing the failure mapping
*/

use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use tracing::{Instrument, debug_span, info, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::http::operation::Payout;
use crate::http::{
    Credential, EndpointCatalog, OperationClient, ReqwestTransport, Result, Transport,
};
use crate::types::{Amount, Outcome};

/// Entry point for CedsonHub calls.
///
/// Every `call_*` method returns an [`Outcome`]. Transport errors, undecodable
/// responses and panics below this layer all become
/// [`Outcome::not_responding`]. Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct CedsonHubApi {
    credential: Arc<Credential>,
    catalog: EndpointCatalog,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for CedsonHubApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CedsonHubApi")
            .field("credential", &self.credential)
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl CedsonHubApi {
    /// Create a client against the production API with default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::with_config(&config)?;
        Self::with_transport(
            api_key,
            EndpointCatalog::new(config.base_url),
            Arc::new(transport),
        )
    }

    /// Create a client on top of any [`Transport`]
    pub fn with_transport(
        api_key: impl Into<String>,
        catalog: EndpointCatalog,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let credential = Credential::new(api_key)?;
        info!(base_url = catalog.base_url(), "cedsonhub client ready");
        Ok(Self {
            credential: Arc::new(credential),
            catalog,
            transport,
        })
    }

    pub fn catalog(&self) -> &EndpointCatalog {
        &self.catalog
    }

    fn client(&self) -> OperationClient<'_> {
        OperationClient::new(&self.credential, &self.catalog, self.transport.as_ref())
    }

    pub async fn call_get_balance(&self) -> Outcome {
        guarded("get_balance", self.client().get_balance()).await
    }

    pub async fn call_get_supported_coins(&self) -> Outcome {
        guarded("get_supported_coins", self.client().get_supported_coins()).await
    }

    pub async fn call_check_username(&self, username: &str) -> Outcome {
        guarded("check_username", self.client().check_user(username)).await
    }

    /// Send a payout.
    ///
    /// `amount_in_coins` and `amount_in_satoshis` go to the server as given;
    /// the payout total is `coins * 100_000_000 + satoshis`.
    pub async fn call_payout(
        &self,
        to: &str,
        currency: &str,
        amount_in_coins: i64,
        amount_in_satoshis: i64,
        is_referral: bool,
        ip_address: Option<&str>,
    ) -> Outcome {
        let mut payout = Payout::new(
            to,
            currency,
            Amount::new(amount_in_coins, amount_in_satoshis),
        )
        .referral(is_referral);
        if let Some(ip_address) = ip_address {
            payout = payout.ip_address(ip_address);
        }
        self.call_payout_with(&payout).await
    }

    /// Send a prepared [`Payout`]
    pub async fn call_payout_with(&self, payout: &Payout) -> Outcome {
        guarded("payout", self.client().payout(payout)).await
    }

    pub async fn call_get_recent_payouts(&self) -> Outcome {
        guarded("get_recent_payouts", self.client().get_recent_payouts()).await
    }

    pub async fn call_get_sites_list(&self) -> Outcome {
        guarded("get_sites_list", self.client().get_sites_list()).await
    }

    pub async fn call_get_project_categories(&self) -> Outcome {
        guarded(
            "get_project_categories",
            self.client().get_project_categories(),
        )
        .await
    }

    pub async fn call_create_invoice(
        &self,
        currency: &str,
        amount_in_coins: i64,
        amount_in_satoshis: i64,
    ) -> Outcome {
        let amount = Amount::new(amount_in_coins, amount_in_satoshis);
        guarded("create_invoice", self.client().create_invoice(currency, amount)).await
    }

    /// Check an invoice; on success `Outcome::invoice_status` reads its state
    pub async fn call_verify_invoice(&self, payment_id: u64) -> Outcome {
        guarded("verify_invoice", self.client().verify_invoice(payment_id)).await
    }
}

/// Run one call, turning errors and panics into the not-responding outcome.
async fn guarded<F>(operation: &'static str, call: F) -> Outcome
where
    F: Future<Output = Result<Outcome>>,
{
    let span = debug_span!("cedsonhub_call", operation, request_id = %Uuid::new_v4());
    let result = AssertUnwindSafe(call).catch_unwind().instrument(span).await;

    match result {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(err)) => {
            warn!(operation, error = %err, "cedsonhub call failed");
            Outcome::not_responding()
        }
        Err(_) => {
            warn!(operation, "cedsonhub call panicked");
            Outcome::not_responding()
        }
    }
}
