use serde::{Deserialize, Serialize};

use crate::enums::{
    CommunityVisibility, GameMode, LeagueTier, LeaverStatus, LobbyType, PersonaState, SeriesType,
};

/// Picks and bans in a captains mode draft: 6 + 6 bans, 5 + 5 picks.
pub const PICK_BAN_COUNT: usize = 22;
pub const PLAYER_COUNT: usize = 10;

/// Player slots with this bit set belong to Dire.
const DIRE_SLOT_BIT: u8 = 0x80;

// GetMatchHistory

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHistory {
    /// 1 on success, 15 when the account does not expose its history.
    pub status: i32,
    #[serde(rename = "statusDetail", default, skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,
    /// Matches in this response.
    #[serde(default)]
    pub num_results: i32,
    #[serde(default)]
    pub total_results: i32,
    /// Matches left to fetch with follow-up calls.
    #[serde(default)]
    pub results_remaining: i32,
    #[serde(default)]
    pub matches: Vec<MatchInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub match_id: i64,
    pub match_seq_num: i64,
    /// Unix timestamp.
    pub start_time: i64,
    pub lobby_type: LobbyType,
    #[serde(default)]
    pub radiant_team_id: i64,
    #[serde(default)]
    pub dire_team_id: i64,
    pub players: Vec<MatchPlayer>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPlayer {
    /// Missing for bots; 4294967295 for anonymous players.
    #[serde(default)]
    pub account_id: u32,
    pub player_slot: u8,
    pub hero_id: i32,
}

// GetMatchHistoryBySequenceNum

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHistoryBySeqNum {
    pub status: i32,
    #[serde(rename = "statusDetail", default, skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,
    #[serde(default)]
    pub matches: Vec<MatchDetail>,
}

// GetMatchDetails

/// Full record of a finished match.
///
/// Team names, logos, captains and the draft only exist for league and
/// captains mode games; they are left at their defaults otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub match_id: i64,
    pub match_seq_num: i64,
    pub radiant_win: bool,
    #[serde(default)]
    pub pre_game_duration: i32,
    /// Seconds.
    pub duration: i32,
    /// Unix timestamp.
    pub start_time: i64,
    /// Seconds into the game.
    pub first_blood_time: i32,
    pub human_players: i32,
    #[serde(rename = "leagueid")]
    pub league_id: i64,
    pub positive_votes: i32,
    pub negative_votes: i32,
    pub game_mode: GameMode,
    pub lobby_type: LobbyType,
    #[serde(default)]
    pub radiant_captain: i64,
    #[serde(default)]
    pub dire_captain: i64,
    pub tower_status_radiant: i32,
    pub tower_status_dire: i32,
    pub barracks_status_radiant: i32,
    pub barracks_status_dire: i32,
    /// Server cluster, needed to locate the replay.
    pub cluster: i32,
    pub engine: i32,
    #[serde(default)]
    pub picks_bans: Vec<PickBan>,
    pub players: Vec<PlayerStat>,
    #[serde(default)]
    pub radiant_team_id: i64,
    #[serde(default)]
    pub dire_team_id: i64,
    /// Meaning not documented by the service.
    #[serde(default)]
    pub radiant_team_complete: i32,
    #[serde(default)]
    pub dire_team_complete: i32,
    #[serde(default)]
    pub radiant_name: String,
    #[serde(default)]
    pub dire_name: String,
    /// Meaning not documented by the service.
    pub flags: i32,
    pub radiant_score: i32,
    pub dire_score: i32,
    #[serde(default)]
    pub radiant_logo: i64,
    #[serde(default)]
    pub dire_logo: i64,
}

impl MatchDetail {
    pub fn picks(&self) -> impl Iterator<Item = &PickBan> {
        self.picks_bans.iter().filter(|pb| pb.is_pick)
    }

    pub fn bans(&self) -> impl Iterator<Item = &PickBan> {
        self.picks_bans.iter().filter(|pb| !pb.is_pick)
    }

    pub fn radiant_players(&self) -> impl Iterator<Item = &PlayerStat> {
        self.players.iter().filter(|p| p.is_radiant())
    }

    pub fn dire_players(&self) -> impl Iterator<Item = &PlayerStat> {
        self.players.iter().filter(|p| !p.is_radiant())
    }
}

/// One step of the draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickBan {
    /// false for a ban
    pub is_pick: bool,
    pub hero_id: i32,
    /// 0 Radiant, 1 Dire
    pub team: i32,
    /// Position in the draft, 0 to 21.
    pub order: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStat {
    #[serde(default)]
    pub account_id: u32,
    pub player_slot: u8,
    pub hero_id: i32,
    pub item_0: i32,
    pub item_1: i32,
    pub item_2: i32,
    pub item_3: i32,
    pub item_4: i32,
    pub item_5: i32,
    #[serde(default)]
    pub backpack_0: i32,
    #[serde(default)]
    pub backpack_1: i32,
    #[serde(default)]
    pub backpack_2: i32,
    #[serde(default)]
    pub item_neutral: i32,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub leaver_status: LeaverStatus,
    pub last_hits: i32,
    pub denies: i32,
    pub gold_per_min: i32,
    pub xp_per_min: i32,
    pub level: i32,
    #[serde(default)]
    pub net_worth: i32,
    #[serde(default)]
    pub aghanims_scepter: i32,
    #[serde(default)]
    pub aghanims_shard: i32,
    #[serde(default)]
    pub moonshard: i32,
    pub hero_damage: i32,
    pub tower_damage: i32,
    pub hero_healing: i32,
    /// Unspent gold at the end of the match.
    pub gold: i32,
    pub gold_spent: i32,
    #[serde(default)]
    pub scaled_hero_damage: i32,
    #[serde(default)]
    pub scaled_tower_damage: i32,
    #[serde(default)]
    pub scaled_hero_healing: i32,
    #[serde(default)]
    pub ability_upgrades: Vec<AbilityUpgrade>,
}

impl PlayerStat {
    pub fn is_radiant(&self) -> bool {
        self.player_slot & DIRE_SLOT_BIT == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityUpgrade {
    pub ability: i32,
    /// Seconds into the game.
    pub time: i32,
    pub level: i32,
}

// GetLeagueListing

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueList {
    pub leagues: Vec<League>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub name: String,
    #[serde(rename = "leagueid")]
    pub league_id: i64,
    pub description: String,
    pub tournament_url: String,
    /// Item associated with the tournament (ticket, compendium).
    #[serde(rename = "itemdef")]
    pub item_def: i64,
}

// GetLiveLeagueGames

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeagueGames {
    pub games: Vec<LeagueGame>,
    #[serde(default)]
    pub status: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeagueGame {
    pub players: Vec<LivePlayer>,
    #[serde(default)]
    pub radiant_team: Option<LiveTeam>,
    #[serde(default)]
    pub dire_team: Option<LiveTeam>,
    pub lobby_id: u64,
    pub match_id: u64,
    pub spectators: u32,
    pub league_id: u64,
    #[serde(default)]
    pub league_node_id: u64,
    #[serde(rename = "stream_delay_s")]
    pub stream_delay_secs: u32,
    pub radiant_series_wins: u32,
    pub dire_series_wins: u32,
    pub series_type: SeriesType,
    #[serde(default)]
    pub league_tier: LeagueTier,
    /// Absent until the game has left the draft.
    #[serde(default)]
    pub scoreboard: Option<Scoreboard>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivePlayer {
    pub account_id: u64,
    pub name: String,
    pub hero_id: i32,
    /// 0 Radiant, 1 Dire, 2 broadcaster, 4 unassigned
    pub team: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveTeam {
    pub team_name: String,
    pub team_id: u64,
    pub team_logo: u64,
    pub complete: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub duration: f64,
    pub roshan_respawn_timer: i32,
    pub radiant: TeamScoreboard,
    pub dire: TeamScoreboard,
}

// The service repeats an `abilities` key several times per team, which is not
// valid for a struct field; it is left undeclared and skipped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamScoreboard {
    pub score: u32,
    pub tower_state: i64,
    pub barracks_state: i32,
    #[serde(default)]
    pub picks: Vec<HeroRef>,
    #[serde(default)]
    pub bans: Vec<HeroRef>,
    pub players: Vec<LivePlayerStat>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroRef {
    pub hero_id: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LivePlayerStat {
    pub player_slot: u8,
    pub account_id: u64,
    pub hero_id: i32,
    pub kills: u32,
    #[serde(rename = "death")]
    pub deaths: u32,
    pub assists: u32,
    pub last_hits: u32,
    pub denies: u32,
    pub gold: u32,
    pub level: u32,
    pub gold_per_min: u32,
    pub xp_per_min: u32,
    pub ultimate_state: u8,
    pub ultimate_cooldown: u32,
    pub item0: i32,
    pub item1: i32,
    pub item2: i32,
    pub item3: i32,
    pub item4: i32,
    pub item5: i32,
    pub respawn_timer: u32,
    pub position_x: f32,
    pub position_y: f32,
    pub net_worth: u32,
}

// GetPlayerSummaries

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummaryList {
    pub players: Vec<PlayerSummary>,
}

/// Public profile data. Private profiles omit everything past `persona_state`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    #[serde(rename = "steamid")]
    pub steam_id: String,
    #[serde(rename = "communityvisibilitystate")]
    pub community_visibility_state: CommunityVisibility,
    /// Set once the user has configured a community profile.
    #[serde(rename = "profilestate", default)]
    pub profile_state: i32,
    #[serde(rename = "personaname")]
    pub persona_name: String,
    /// Unix timestamp of the last logoff.
    #[serde(rename = "lastlogoff", default)]
    pub last_logoff: i64,
    #[serde(rename = "profileurl")]
    pub profile_url: String,
    /// 32x32
    pub avatar: String,
    /// 64x64
    #[serde(rename = "avatarmedium")]
    pub avatar_medium: String,
    /// 184x184
    #[serde(rename = "avatarfull")]
    pub avatar_full: String,
    #[serde(rename = "personastate")]
    pub persona_state: PersonaState,
    #[serde(rename = "primaryclanid", default)]
    pub primary_clan_id: String,
    #[serde(rename = "timecreated", default)]
    pub time_created: i64,
    /// Meaning not documented by the service.
    #[serde(rename = "personastateflags", default)]
    pub persona_state_flags: i32,
}

// GetFriendList

/// Private profiles get no `friends` at all, which reads as an empty list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendList {
    #[serde(default)]
    pub friends: Vec<FriendInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendInfo {
    #[serde(rename = "steamid")]
    pub steam_id: String,
    pub relationship: String,
    /// Unix timestamp of when the relationship was created.
    pub friend_since: i64,
}

// GetServerInfo

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Unix timestamp.
    #[serde(rename = "servertime")]
    pub server_time: i64,
    #[serde(rename = "servertimestring")]
    pub server_time_string: String,
}

impl ServerInfo {
    /// Seconds between the server clock and `local_unix_time`.
    pub fn skew_secs(&self, local_unix_time: i64) -> i64 {
        (self.server_time - local_unix_time).abs()
    }
}

// GetHeroes / GetGameItems / GetTournamentPrizePool

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heroes {
    pub heroes: Vec<Hero>,
    pub status: i32,
    #[serde(default)]
    pub count: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// e.g. `npc_dota_hero_antimage`
    pub name: String,
    pub id: i32,
    /// Only sent when a language is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameItems {
    pub items: Vec<GameItem>,
    pub status: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameItem {
    pub id: i32,
    /// e.g. `item_blink`
    pub name: String,
    pub cost: i32,
    pub secret_shop: i32,
    pub side_shop: i32,
    pub recipe: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizePool {
    pub prize_pool: u64,
    pub league_id: i64,
    pub status: i32,
}
