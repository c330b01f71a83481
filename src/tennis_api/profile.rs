use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{Profile, TokenRequest};
use crate::tennis_api;

#[instrument(skip(client, token))]
pub(crate) async fn get_profile(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
) -> Result<Profile> {
    let body = TokenRequest {
        access_token: token.to_owned(),
    };
    let profile: Profile = tennis_api::call(client, base_url, "getProfile", &body).await?;
    debug!(user_id = %profile.user_id, "fetched profile");
    Ok(profile)
}
