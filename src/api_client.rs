use std::env;
use std::sync::Arc;

use crate::decode::{decode_bare, decode_friend_list, decode_response, decode_result};
use crate::endpoints;
use crate::error::{EnvVarError, Error};
use crate::transport::{HttpTransport, Transport};
use crate::types::*;

pub const API_KEY_VAR: &str = "STEAM_API_KEY";

/// Client for the Dota 2 and Steam user Web API.
///
/// Every operation issues exactly one GET. Nothing is retried, cached or
/// rate limited, and service-level `status` fields are returned as data.
///
/// Query values are appended as given, without percent-encoding; callers
/// must pass URL-safe identifiers.
pub struct Dota2Api {
    api_key: String,
    transport: Arc<dyn Transport>,
}

impl Dota2Api {
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Ok(Self::with_transport(
            api_key,
            Arc::new(HttpTransport::new()?),
        ))
    }

    pub fn with_transport(api_key: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            api_key: api_key.into(),
            transport,
        }
    }

    // requires STEAM_API_KEY env var
    // can use dotenv
    pub fn from_env() -> Result<Self, Error> {
        let api_key = env::var(API_KEY_VAR).map_err(|e| EnvVarError::new(API_KEY_VAR, e))?;
        Self::new(api_key)
    }

    /// Replaces the key. Not synchronized: set it before sharing the client.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Looks up `endpoint`, appends the key and `params` and fetches the raw body.
    ///
    /// An unknown endpoint fails before anything is sent.
    pub async fn request(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Vec<u8>, Error> {
        self.dispatch(endpoint, Some(self.api_key.as_str()), params).await
    }

    /// Like [`Dota2Api::request`] for endpoints that take no key or parameters.
    pub async fn request_bare(&self, endpoint: &str) -> Result<Vec<u8>, Error> {
        self.dispatch(endpoint, None, &[]).await
    }

    async fn dispatch(
        &self,
        endpoint: &str,
        api_key: Option<&str>,
        params: &[(&str, &str)],
    ) -> Result<Vec<u8>, Error> {
        let base = endpoints::lookup(endpoint)?;
        let url = build_url(base, api_key, params);
        tracing::debug!(
            endpoint,
            with_key = api_key.is_some(),
            params = ?params.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
            "dispatching request"
        );

        self.transport.fetch(&url).await
    }

    /// Recent matches for a Dota 2 account id (not a Steam id).
    pub async fn get_match_history(&self, account_id: &str) -> Result<MatchHistory, Error> {
        let body = self
            .request("GetMatchHistory", &[("account_id", account_id)])
            .await?;
        decode_result(&body)
    }

    /// Matches in recording order, starting at `start_at_match_seq_num`.
    pub async fn get_match_history_by_seq_num(
        &self,
        start_at_match_seq_num: &str,
        matches_requested: &str,
    ) -> Result<MatchHistoryBySeqNum, Error> {
        let body = self
            .request(
                "GetMatchHistoryBySeqNum",
                &[
                    ("start_at_match_seq_num", start_at_match_seq_num),
                    ("matches_requested", matches_requested),
                ],
            )
            .await?;
        decode_result(&body)
    }

    pub async fn get_match_details(&self, match_id: &str) -> Result<MatchDetail, Error> {
        let body = self
            .request("GetMatchDetails", &[("match_id", match_id)])
            .await?;
        decode_result(&body)
    }

    /// Leagues that can be viewed in DotaTV.
    pub async fn get_league_listing(&self) -> Result<LeagueList, Error> {
        let body = self.request("GetLeagueListing", &[]).await?;
        decode_result(&body)
    }

    /// Scoreboards of league games currently being played.
    pub async fn get_live_league_games(&self) -> Result<LeagueGames, Error> {
        let body = self.request("GetLiveLeagueGames", &[]).await?;
        decode_result(&body)
    }

    /// Profiles for a comma-delimited list of 64-bit Steam ids,
    /// e.g. `"76561198092165728,76561197960435530"`.
    pub async fn get_player_summaries(&self, steam_ids: &str) -> Result<PlayerSummaryList, Error> {
        let body = self
            .request("GetPlayerSummaries", &[("steamids", steam_ids)])
            .await?;
        decode_response(&body)
    }

    /// Friends of a Steam user. Only public profiles return anything.
    pub async fn get_friend_list(
        &self,
        steam_id: &str,
        relationship: &str,
    ) -> Result<Vec<FriendInfo>, Error> {
        let body = self
            .request(
                "GetFriendList",
                &[("steamid", steam_id), ("relationship", relationship)],
            )
            .await?;
        decode_friend_list(&body)
    }

    /// Web API server clock. Needs no key, so the bare URL is fetched.
    pub async fn get_server_info(&self) -> Result<ServerInfo, Error> {
        let body = self.request_bare("GetServerInfo").await?;
        decode_bare(&body)
    }

    pub async fn get_heroes(&self) -> Result<Heroes, Error> {
        let body = self.request("GetHeroes", &[]).await?;
        decode_result(&body)
    }

    pub async fn get_game_items(&self) -> Result<GameItems, Error> {
        let body = self.request("GetGameItems", &[]).await?;
        decode_result(&body)
    }

    pub async fn get_tournament_prize_pool(&self, league_id: &str) -> Result<PrizePool, Error> {
        let body = self
            .request("GetTournamentPrizePool", &[("leagueid", league_id)])
            .await?;
        decode_result(&body)
    }
}

fn build_url(base: &str, api_key: Option<&str>, params: &[(&str, &str)]) -> String {
    let mut url = base.to_string();
    let mut sep = '?';
    let key = api_key.map(|k| ("key", k));
    for (name, value) in key.into_iter().chain(params.iter().copied()) {
        url.push(sep);
        url.push_str(name);
        url.push('=');
        url.push_str(value);
        sep = '&';
    }
    url
}
