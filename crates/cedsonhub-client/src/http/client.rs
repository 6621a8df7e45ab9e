/*
[INPUT]:  API key, endpoint catalog, transport and an Operation
[OUTPUT]: Outcome for a single operation, or a lower-layer error
[POS]:    HTTP layer - per-call operation client
[UPDATE]: When changing request construction or response decoding
*/

use std::fmt;

use reqwest::{Method, Url};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

use crate::http::classify;
use crate::http::operation::{
    CheckUser, CreateInvoice, GetBalance, GetProjectCategories, GetRecentPayouts, GetSitesList,
    GetSupportedCoins, Operation, Payout, VerifyInvoice,
};
use crate::http::{CedsonHubError, EndpointCatalog, RawResponse, Result, Transport, TransportRequest};
use crate::types::{Amount, Outcome};

/// Shortest API key CedsonHub issues
pub const MIN_API_KEY_LEN: usize = 50;

/// Pre-shared API key
pub struct Credential(SecretString);

impl Credential {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.len() < MIN_API_KEY_LEN {
            return Err(CedsonHubError::InvalidApiKey {
                length: api_key.len(),
                min: MIN_API_KEY_LEN,
            });
        }
        Ok(Self(SecretString::from(api_key)))
    }

    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Runs one operation: validate, build, send, classify.
///
/// Holds only borrows, so building one per call costs nothing.
#[derive(Clone, Copy)]
pub struct OperationClient<'a> {
    credential: &'a Credential,
    catalog: &'a EndpointCatalog,
    transport: &'a dyn Transport,
}

impl fmt::Debug for OperationClient<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationClient")
            .field("base_url", &self.catalog.base_url())
            .finish_non_exhaustive()
    }
}

impl<'a> OperationClient<'a> {
    pub fn new(
        credential: &'a Credential,
        catalog: &'a EndpointCatalog,
        transport: &'a dyn Transport,
    ) -> Self {
        Self {
            credential,
            catalog,
            transport,
        }
    }

    /// Execute an operation end to end.
    ///
    /// Validation failures and every HTTP status come back as `Ok(Outcome)`;
    /// `Err` means the server could not be reached or its 200 body was not JSON.
    pub async fn execute<O: Operation>(self, operation: &O) -> Result<Outcome> {
        if let Some(rejected) = operation.validate() {
            debug!(
                endpoint = O::ENDPOINT.name(),
                error = rejected.error(),
                "rejected before dispatch"
            );
            return Ok(rejected);
        }

        let request = self.build_request(operation)?;
        debug!(
            endpoint = O::ENDPOINT.name(),
            method = %request.method,
            url = request.redacted_url(),
            "dispatching request"
        );

        let response = self.transport.perform(request).await?;
        debug!(
            endpoint = O::ENDPOINT.name(),
            status = response.status,
            "response received"
        );

        decode_response(response)
    }

    /// GET requests carry `api_key` and params in the query string, POST
    /// requests in a form body.
    pub fn build_request<O: Operation>(&self, operation: &O) -> Result<TransportRequest> {
        let mut params = vec![("api_key", self.credential.expose().to_string())];
        params.extend(operation.params());

        let base = self.catalog.url_for(O::ENDPOINT);
        let headers = vec![("Accept".to_string(), "application/json".to_string())];

        if O::METHOD == Method::POST {
            let form = params
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect();
            return Ok(TransportRequest {
                method: Method::POST,
                url: base,
                headers,
                form,
            });
        }

        let mut url = Url::parse(&base)?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(TransportRequest {
            method: O::METHOD,
            url: url.into(),
            headers,
            form: Vec::new(),
        })
    }

    pub async fn get_balance(self) -> Result<Outcome> {
        self.execute(&GetBalance).await
    }

    pub async fn get_supported_coins(self) -> Result<Outcome> {
        self.execute(&GetSupportedCoins).await
    }

    pub async fn check_user(self, username: &str) -> Result<Outcome> {
        let operation = CheckUser {
            username: username.to_string(),
        };
        self.execute(&operation).await
    }

    pub async fn payout(self, payout: &Payout) -> Result<Outcome> {
        self.execute(payout).await
    }

    pub async fn get_recent_payouts(self) -> Result<Outcome> {
        self.execute(&GetRecentPayouts).await
    }

    pub async fn get_sites_list(self) -> Result<Outcome> {
        self.execute(&GetSitesList).await
    }

    pub async fn get_project_categories(self) -> Result<Outcome> {
        self.execute(&GetProjectCategories).await
    }

    pub async fn create_invoice(self, currency: &str, amount: Amount) -> Result<Outcome> {
        self.execute(&CreateInvoice::new(currency, amount)).await
    }

    pub async fn verify_invoice(self, payment_id: u64) -> Result<Outcome> {
        self.execute(&VerifyInvoice { payment_id }).await
    }
}

// A 200 must carry JSON; error bodies are decoded best-effort since the
// classifier copes with anything.
fn decode_response(response: RawResponse) -> Result<Outcome> {
    if response.status == 200 {
        let body: Value = serde_json::from_slice(&response.body)?;
        return Ok(classify::success_outcome(body));
    }

    let body = serde_json::from_slice(&response.body).unwrap_or(Value::Null);
    Ok(classify::error_outcome(response.status, &body))
}
