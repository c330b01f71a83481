use serde::Serialize;
use tracing::instrument;

use crate::client::TennisClient;
use crate::error::Result;
use crate::matchlist::{self, MatchList};
use crate::model::Profile;

/// Everything the dashboard view binds: the user's profile plus the three
/// match lists.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub profile: Profile,
    pub confirmed: MatchList,
    pub pending: MatchList,
    pub available: MatchList,
}

impl DashboardView {
    /// Greeting line shown at the top of the dashboard.
    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.profile.user_id)
    }
}

/// Load the dashboard in one shot.
///
/// The profile, my-matches and available-matches queries are independent and
/// run concurrently; they may complete in any order, and each response feeds
/// a pure transformation with no state shared between them.
#[instrument(skip(client))]
pub async fn load_dashboard(client: &TennisClient) -> Result<DashboardView> {
    let (profile, mine, available) = tokio::join!(
        client.get_profile(),
        client.get_my_matches(),
        client.get_available_matches(),
    );

    let (confirmed, pending) = matchlist::partition_by_confirmation(mine?);
    Ok(DashboardView {
        profile: profile?,
        confirmed,
        pending,
        available: available?,
    })
}
