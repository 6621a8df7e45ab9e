/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public CedsonHub client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Client for the CedsonHub payout and payment-acceptance API.
//!
//! [`CedsonHubApi`] is the entry point. Every call returns an [`Outcome`]:
//! a success flag, the decoded payload, and an error message that is empty
//! exactly when the call succeeded.

pub mod api;
pub mod config;
pub mod http;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use api::CedsonHubApi;

pub use config::ClientConfig;

// Re-export commonly used types from http
pub use http::operation::{
    CheckUser, CreateInvoice, GetBalance, GetProjectCategories, GetRecentPayouts, GetSitesList,
    GetSupportedCoins, Payout, VerifyInvoice,
};
pub use http::{
    CedsonHubError,
    Credential,
    Endpoint,
    EndpointCatalog,
    Operation,
    OperationClient,
    RawResponse,
    ReqwestTransport,
    Result,
    Transport,
    TransportRequest,
};

// Re-export all types
pub use types::*;
