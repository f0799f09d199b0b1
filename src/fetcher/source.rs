use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use crate::fetcher::client::PageRetriever;

/// Where the classifier gets page bodies from.
///
/// Every failure collapses into `None`; callers cannot tell a timeout from a
/// 404, only that the page is unavailable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn retrieve(&self, url: &Url) -> Option<String>;
}

#[async_trait]
impl PageSource for PageRetriever {
    async fn retrieve(&self, url: &Url) -> Option<String> {
        match self.fetch(url.as_str()).await {
            Ok(response) => {
                debug!(
                    url = %url,
                    final_url = %response.url_final,
                    status = %response.status,
                    charset = ?response.charset,
                    bytes = response.body_raw.len(),
                    "page fetched"
                );
                Some(response.body_utf8)
            }
            Err(err) => {
                warn!(url = %url, kind = err.kind(), error = %err, "failed to fetch page");
                None
            }
        }
    }
}
