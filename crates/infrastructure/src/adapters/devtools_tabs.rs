//! Tab accessor for a Chromium browser started with
//! `--remote-debugging-port`.
//!
//! Uses the DevTools HTTP endpoints only:
//! - `GET /json/list` to find the foreground page
//! - `PUT /json/new?<url>` to open the edited URL
//! - `GET /json/close/<id>` to close the page it replaces
//!
//! The HTTP interface has no in-place navigation, so applying replaces the
//! page with a new one carrying the edited URL, and the new page's id is
//! reported back so later applies target it.

use std::time::Duration;

use querylens_application::ports::{ActiveTab, TabAccessor, TabId};
use querylens_application::{ApplicationError, ApplicationResult};
use reqwest::Client;
use serde::Deserialize;
use url::{Url, form_urlencoded};

/// Request timeout for DevTools calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// One debuggable target as listed by `/json/list`.
#[derive(Debug, Clone, Deserialize)]
struct DevToolsTarget {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    url: String,
}

/// DevTools HTTP tab accessor.
pub struct DevToolsTabAccessor {
    client: Client,
    endpoint: Url,
}

impl DevToolsTabAccessor {
    /// Creates an accessor for the given endpoint, e.g. `http://127.0.0.1:9222`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a URL or the HTTP client
    /// cannot be created.
    pub fn new(endpoint: &str) -> ApplicationResult<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ApplicationError::PlatformCall(format!("bad endpoint {endpoint}: {e}")))?;
        let client = Client::builder()
            .user_agent(concat!("QueryLens/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Self::map_error)?;
        Ok(Self { client, endpoint })
    }

    /// Creates an accessor with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    fn route(&self, path: &str) -> ApplicationResult<Url> {
        self.endpoint
            .join(path)
            .map_err(|e| ApplicationError::PlatformCall(format!("bad route {path}: {e}")))
    }

    /// Route that opens `url` in a new page.
    ///
    /// The endpoint unescapes its query once, so the whole URL is encoded
    /// to keep the escapes inside `url` intact.
    fn new_target_route(&self, url: &str) -> ApplicationResult<Url> {
        let mut route = self.route("json/new")?;
        let encoded: String = form_urlencoded::byte_serialize(url.as_bytes()).collect();
        route.set_query(Some(&encoded));
        Ok(route)
    }

    fn map_error(error: reqwest::Error) -> ApplicationError {
        if error.is_timeout() {
            return ApplicationError::PlatformCall("DevTools endpoint timed out".to_string());
        }
        if error.is_connect() {
            return ApplicationError::PlatformCall(format!(
                "cannot reach DevTools endpoint: {error}"
            ));
        }
        ApplicationError::PlatformCall(error.to_string())
    }

    async fn targets(&self) -> ApplicationResult<Vec<DevToolsTarget>> {
        self.client
            .get(self.route("json/list")?)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(Self::map_error)?
            .json()
            .await
            .map_err(Self::map_error)
    }
}

/// Picks the foreground page: the first `page` target in list order.
fn foreground_page(targets: Vec<DevToolsTarget>) -> ActiveTab {
    targets
        .into_iter()
        .find(|t| t.kind == "page")
        .map(|t| ActiveTab {
            id: Some(TabId::new(t.id)),
            url: Some(t.url),
        })
        .unwrap_or_default()
}

impl TabAccessor for DevToolsTabAccessor {
    async fn active_tab(&self) -> ApplicationResult<ActiveTab> {
        let tab = foreground_page(self.targets().await?);
        tracing::debug!(tab = ?tab.id, "resolved DevTools page");
        Ok(tab)
    }

    async fn set_url(&self, tab: &TabId, url: &str) -> ApplicationResult<TabId> {
        let opened: DevToolsTarget = self
            .client
            .put(self.new_target_route(url)?)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(Self::map_error)?
            .json()
            .await
            .map_err(Self::map_error)?;
        let replacement = TabId::new(opened.id);

        // The edited URL is already showing; a stale old page is not an
        // apply failure.
        let close = self.route(&format!("json/close/{}", tab.as_str()))?;
        if let Err(e) = self
            .client
            .get(close)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
        {
            tracing::warn!(old = %tab, error = %e, "could not close replaced DevTools page");
        }

        tracing::info!(old = %tab, new = %replacement, url, "replaced DevTools page");
        Ok(replacement)
    }
}
