use tracing::{debug, instrument};

use crate::error::Result;
use crate::matchlist::{self, MatchList};
use crate::model::{
    BooleanResponse, MatchBundle, MatchMessage, StringListRequest, StringListResponse,
    StringRequest, TokenRequest,
};
use crate::tennis_api;

#[instrument(skip(client, token))]
pub(crate) async fn get_my_matches(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
) -> Result<MatchList> {
    let body = TokenRequest {
        access_token: token.to_owned(),
    };
    let bundle: MatchBundle = tennis_api::call(client, base_url, "getMyMatches", &body).await?;
    let records = matchlist::to_records(&bundle)?;
    debug!(count = records.len(), "fetched my matches");
    Ok(records)
}

#[instrument(skip(client, token))]
pub(crate) async fn get_available_matches(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
) -> Result<MatchList> {
    let body = TokenRequest {
        access_token: token.to_owned(),
    };
    let bundle: MatchBundle =
        tennis_api::call(client, base_url, "getAvailableMatches", &body).await?;
    let records = matchlist::to_available_list(&bundle)?;
    debug!(count = records.len(), "fetched available matches");
    Ok(records)
}

#[instrument(skip(client, token))]
pub(crate) async fn join_match(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    match_key: &str,
) -> Result<bool> {
    let body = StringRequest {
        data: match_key.to_owned(),
        access_token: token.to_owned(),
    };
    let status: BooleanResponse = tennis_api::call(client, base_url, "joinMatch", &body).await?;
    debug!(accepted = status.data, "join match");
    Ok(status.data)
}

#[instrument(skip(client, token))]
pub(crate) async fn cancel_match(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    match_key: &str,
) -> Result<bool> {
    let body = StringRequest {
        data: match_key.to_owned(),
        access_token: token.to_owned(),
    };
    let status: BooleanResponse = tennis_api::call(client, base_url, "cancelMatch", &body).await?;
    debug!(accepted = status.data, "cancel match");
    Ok(status.data)
}

#[instrument(skip(client, token))]
pub(crate) async fn get_match_messages(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    match_key: &str,
) -> Result<Vec<MatchMessage>> {
    let body = StringRequest {
        data: match_key.to_owned(),
        access_token: token.to_owned(),
    };
    let raw: StringListResponse = tennis_api::call(client, base_url, "getMatchMsgs", &body).await?;
    let messages = raw
        .data
        .iter()
        .map(|m| MatchMessage::parse(m))
        .collect::<Vec<_>>();
    debug!(count = messages.len(), "fetched match messages");
    Ok(messages)
}

#[instrument(skip(client, token, message))]
pub(crate) async fn post_match_message(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    match_key: &str,
    message: &str,
) -> Result<bool> {
    // The server expects [match_key, message] and refuses empty messages.
    let body = StringListRequest {
        data: vec![match_key.to_owned(), message.to_owned()],
        access_token: token.to_owned(),
    };
    let status: BooleanResponse = tennis_api::call(client, base_url, "postMatchMsg", &body).await?;
    debug!(accepted = status.data, "post match message");
    Ok(status.data)
}
