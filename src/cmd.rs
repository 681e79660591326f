use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use serde::Serialize;

use dota2api::Dota2Api;

#[derive(Parser, Debug)]
#[command(name = "dota2api", about = "Query the Dota 2 Web API")]
pub enum Cmd {
    /// Recent matches of a Dota 2 account id
    MatchHistory { account_id: String },
    /// Matches in recording order from a sequence number
    MatchHistoryBySeqNum {
        start_at_match_seq_num: String,
        #[arg(default_value = "25")]
        matches_requested: String,
    },
    MatchDetails { match_id: String },
    Leagues,
    LiveGames,
    /// Comma-delimited 64-bit Steam ids
    PlayerSummaries { steam_ids: String },
    Friends {
        steam_id: String,
        #[arg(default_value = "friend")]
        relationship: String,
    },
    ServerInfo,
    Heroes,
    Items,
    PrizePool { league_id: String },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

impl Cmd {
    pub async fn run(self) -> anyhow::Result<()> {
        let api = Dota2Api::from_env()?;

        match self {
            Cmd::MatchHistory { account_id } => {
                print_json(&api.get_match_history(&account_id).await?)?;
            }
            Cmd::MatchHistoryBySeqNum {
                start_at_match_seq_num,
                matches_requested,
            } => {
                let history = api
                    .get_match_history_by_seq_num(&start_at_match_seq_num, &matches_requested)
                    .await?;
                print_json(&history)?;
            }
            Cmd::MatchDetails { match_id } => {
                print_json(&api.get_match_details(&match_id).await?)?;
            }
            Cmd::Leagues => print_json(&api.get_league_listing().await?)?,
            Cmd::LiveGames => print_json(&api.get_live_league_games().await?)?,
            Cmd::PlayerSummaries { steam_ids } => {
                print_json(&api.get_player_summaries(&steam_ids).await?)?;
            }
            Cmd::Friends {
                steam_id,
                relationship,
            } => {
                print_json(&api.get_friend_list(&steam_id, &relationship).await?)?;
            }
            Cmd::ServerInfo => {
                let info = api.get_server_info().await?;
                let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;
                print_json(&info)?;
                tracing::info!(skew_secs = info.skew_secs(now), "server clock compared");
            }
            Cmd::Heroes => print_json(&api.get_heroes().await?)?,
            Cmd::Items => print_json(&api.get_game_items().await?)?,
            Cmd::PrizePool { league_id } => {
                print_json(&api.get_tournament_prize_pool(&league_id).await?)?;
            }
        }

        Ok(())
    }
}
