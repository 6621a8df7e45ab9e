/*
[INPUT]:  Credential, endpoint catalog, transport and operation arguments
[OUTPUT]: Classified outcomes and lower-layer errors
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod classify;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod operation;
pub mod transport;

pub use error::{CedsonHubError, Result};

pub use classify::{ERROR_FIELDS, SERVER_ERROR, classify};
pub use client::{Credential, MIN_API_KEY_LEN, OperationClient};
pub use endpoints::{DEFAULT_BASE_URL, Endpoint, EndpointCatalog};
pub use operation::Operation;
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportRequest};
