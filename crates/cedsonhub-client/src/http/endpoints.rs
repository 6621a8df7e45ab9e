/*
[INPUT]:  Configured base URL
[OUTPUT]: Fully qualified endpoint URLs
[POS]:    HTTP layer - endpoint catalog
[UPDATE]: When CedsonHub adds, removes or moves an endpoint
*/

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://cedsonhub.site/api/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Balance,
    Currencies,
    CheckUser,
    Payout,
    RecentPayouts,
    SitesList,
    ProjectCategories,
    InvoiceCreate,
    InvoiceVerify,
}

impl Endpoint {
    pub const ALL: [Endpoint; 9] = [
        Endpoint::Balance,
        Endpoint::Currencies,
        Endpoint::CheckUser,
        Endpoint::Payout,
        Endpoint::RecentPayouts,
        Endpoint::SitesList,
        Endpoint::ProjectCategories,
        Endpoint::InvoiceCreate,
        Endpoint::InvoiceVerify,
    ];

    /// Logical operation name, used in logs
    pub const fn name(self) -> &'static str {
        match self {
            Endpoint::Balance => "balance",
            Endpoint::Currencies => "currencies",
            Endpoint::CheckUser => "check-user",
            Endpoint::Payout => "payout",
            Endpoint::RecentPayouts => "recent-payouts",
            Endpoint::SitesList => "sites-list",
            Endpoint::ProjectCategories => "project-categories",
            Endpoint::InvoiceCreate => "invoice-create",
            Endpoint::InvoiceVerify => "invoice-verify",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Balance => "/get-balance",
            Endpoint::Currencies => "/currencies",
            Endpoint::CheckUser => "/check-user",
            Endpoint::Payout => "/payout",
            Endpoint::RecentPayouts => "/recent-payouts",
            Endpoint::SitesList => "/sites-list",
            Endpoint::ProjectCategories => "/project-categories",
            Endpoint::InvoiceCreate => "/accept-payment/create",
            Endpoint::InvoiceVerify => "/accept-payment/verify",
        }
    }
}

/// Binds every [`Endpoint`] to a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointCatalog {
    base_url: String,
}

impl Default for EndpointCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl EndpointCatalog {
    /// Trailing slashes on `base_url` are dropped so paths join cleanly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let catalog = EndpointCatalog::default();
        assert_eq!(
            catalog.url_for(Endpoint::Balance),
            "https://cedsonhub.site/api/v1/get-balance"
        );
        assert_eq!(
            catalog.url_for(Endpoint::InvoiceVerify),
            "https://cedsonhub.site/api/v1/accept-payment/verify"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let catalog = EndpointCatalog::new("http://localhost:8080/api/");
        assert_eq!(catalog.base_url(), "http://localhost:8080/api");
        assert_eq!(
            catalog.url_for(Endpoint::Payout),
            "http://localhost:8080/api/payout"
        );
    }

    #[test]
    fn test_paths_are_distinct() {
        let mut paths: Vec<_> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Endpoint::ALL.len());
    }
}
