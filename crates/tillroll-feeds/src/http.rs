//! Plain-HTTP acquisition.

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::Uri;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::FeedError;

/// GET a URL and collect the whole body as lossy UTF-8 text.
///
/// Non-2xx answers are failures. No retries, no redirect following.
pub async fn fetch(uri: &Uri) -> Result<String, FeedError> {
    let client: Client<_, Empty<Bytes>> = Client::builder(TokioExecutor::new()).build_http();

    let response = client.get(uri.clone()).await.map_err(|err| FeedError::Http {
        uri: uri.to_string(),
        err: Box::new(err),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status {
            uri: uri.to_string(),
            status,
        });
    }

    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|err| FeedError::Http {
            uri: uri.to_string(),
            err: Box::new(err),
        })?
        .to_bytes();
    tracing::debug!(uri = %uri, bytes = body.len(), "fetched source url");
    Ok(String::from_utf8_lossy(&body).into_owned())
}
