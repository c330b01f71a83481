pub(crate) mod matches;
pub(crate) mod profile;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, TennisError};

const API_ROOT: &str = "tennis/v1";

/// POST a JSON body to an API method and decode the JSON response.
///
/// Every tennis API method is mounted at `{base_url}/tennis/v1/{name}` and
/// invoked via POST.
pub(crate) async fn call<B, T>(
    client: &reqwest::Client,
    base_url: &str,
    method: &str,
    body: &B,
) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let url = format!("{}/{API_ROOT}/{method}", base_url.trim_end_matches('/'));
    debug!(%url, "calling tennis api");

    let response = client
        .post(&url)
        .json(body)
        .send()
        .await
        .map_err(|e| TennisError::Http {
            url: url.clone(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(TennisError::UnexpectedStatus { url, status });
    }

    response
        .json()
        .await
        .map_err(|e| TennisError::ResponseBody { url, source: e })
}
