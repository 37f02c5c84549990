use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use reqwest::{blocking::Client, redirect::Policy, StatusCode};
use tracing::debug;

use crate::source::DataSource;

/// Data files served over HTTP below a base URL, e.g. the web app's `/data/`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("habitat-map/", env!("CARGO_PKG_VERSION")))
            .redirect(Policy::limited(10))
            .timeout(Duration::from_secs(30))
            .build()
            .context("build HTTP client")?;

        Ok(Self { base_url: base_url.into(), client })
    }

    fn url(&self, rel: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), rel.trim_start_matches('/'))
    }
}

impl DataSource for HttpSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        let url = self.url(rel);
        debug!(%url, "fetching");

        let bytes = self.client.get(&url).send()
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url} returned error status"))?
            .bytes()
            .with_context(|| format!("read body of {url}"))?;

        Ok(Arc::from(bytes.as_ref()))
    }

    fn has(&self, rel: &str) -> bool {
        self.client.head(self.url(rel)).send()
            .is_ok_and(|resp| resp.status() == StatusCode::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_with_a_single_slash() {
        let source = HttpSource::new("https://example.org/data/").unwrap();
        assert_eq!(source.url("/index.json"), "https://example.org/data/index.json");
        assert_eq!(source.url("counties/Cork.geojson"), "https://example.org/data/counties/Cork.geojson");
    }
}
