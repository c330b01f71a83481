use tracing::instrument;

use crate::error::Result;
use crate::matchlist::MatchList;
use crate::model::{MatchMessage, Profile};
use crate::tennis_api;

/// The main entry point for talking to the tennis API.
///
/// `TennisClient` wraps a [`reqwest::Client`] plus the service base URL and
/// the caller's access token, and exposes one method per remote call the
/// dashboard and match-detail views depend on.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> tennis_client::Result<()> {
/// use tennis_client::{partition_by_confirmation, TennisClient};
///
/// let client = TennisClient::new("https://example.com/_ah/api", "token");
/// let (confirmed, pending) = partition_by_confirmation(client.get_my_matches().await?);
/// println!("{} confirmed, {} pending", confirmed.len(), pending.len());
/// # Ok(())
/// # }
/// ```
pub struct TennisClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl TennisClient {
    /// Create a new client for the service at `base_url`, authenticating
    /// every call with `access_token`.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, access_token)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            http: client,
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Fetch the authenticated user's profile.
    #[instrument(skip(self))]
    pub async fn get_profile(&self) -> Result<Profile> {
        tennis_api::profile::get_profile(&self.http, &self.base_url, &self.access_token).await
    }

    /// Fetch the user's own matches, normalized to row-oriented records with
    /// confirmed and pending entries still mixed. Split the result with
    /// [`partition_by_confirmation`](crate::matchlist::partition_by_confirmation)
    /// for the two dashboard lists.
    #[instrument(skip(self))]
    pub async fn get_my_matches(&self) -> Result<MatchList> {
        tennis_api::matches::get_my_matches(&self.http, &self.base_url, &self.access_token).await
    }

    /// Fetch matches with open spots and a compatible skill rating, as one
    /// flat list.
    #[instrument(skip(self))]
    pub async fn get_available_matches(&self) -> Result<MatchList> {
        tennis_api::matches::get_available_matches(&self.http, &self.base_url, &self.access_token)
            .await
    }

    /// Ask to join the match identified by `match_key`. Returns whether the
    /// server accepted.
    #[instrument(skip(self))]
    pub async fn join_match(&self, match_key: &str) -> Result<bool> {
        tennis_api::matches::join_match(&self.http, &self.base_url, &self.access_token, match_key)
            .await
    }

    /// Leave the match identified by `match_key`. Returns whether the
    /// server accepted.
    #[instrument(skip(self))]
    pub async fn cancel_match(&self, match_key: &str) -> Result<bool> {
        tennis_api::matches::cancel_match(&self.http, &self.base_url, &self.access_token, match_key)
            .await
    }

    /// Fetch the chat messages posted to a match, oldest first.
    #[instrument(skip(self))]
    pub async fn get_match_messages(&self, match_key: &str) -> Result<Vec<MatchMessage>> {
        tennis_api::matches::get_match_messages(
            &self.http,
            &self.base_url,
            &self.access_token,
            match_key,
        )
        .await
    }

    /// Post a chat message to a match. The server refuses empty messages and
    /// returns `false` for them.
    #[instrument(skip(self, message))]
    pub async fn post_match_message(&self, match_key: &str, message: &str) -> Result<bool> {
        tennis_api::matches::post_match_message(
            &self.http,
            &self.base_url,
            &self.access_token,
            match_key,
            message,
        )
        .await
    }
}
