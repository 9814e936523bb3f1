use url::Url;

/// Same-domain restriction: exact host string plus explicit port, taken from
/// the seed. Scheme is ignored and subdomains never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainScope {
    host: Option<String>,
    port: Option<u16>,
}

impl DomainScope {
    pub fn from_seed(seed: &Url) -> Self {
        Self {
            host: seed.host_str().map(ToOwned::to_owned),
            port: seed.port(),
        }
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn contains(&self, url: &Url) -> bool {
        match (self.host.as_deref(), url.host_str()) {
            (Some(expected), Some(actual)) => expected == actual && self.port == url.port(),
            _ => false,
        }
    }
}
