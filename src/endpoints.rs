use crate::error::Error;

macro_rules! web_api {
    ($path:literal) => {
        concat!("http://api.steampowered.com/", $path)
    };
}

pub const BASE_URL: &str = web_api!("");

// interface/method/version
const GET_MATCH_HISTORY: &str = web_api!("IDOTA2Match_570/GetMatchHistory/v001/");
const GET_MATCH_HISTORY_BY_SEQ_NUM: &str =
    web_api!("IDOTA2Match_570/GetMatchHistoryBySequenceNum/v0001/");
const GET_MATCH_DETAILS: &str = web_api!("IDOTA2Match_570/GetMatchDetails/v001/");
const GET_LEAGUE_LISTING: &str = web_api!("IDOTA2Match_205790/GetLeagueListing/v0001/");
const GET_LIVE_LEAGUE_GAMES: &str = web_api!("IDOTA2Match_570/GetLiveLeagueGames/v0001/");
const GET_TEAM_INFO_BY_TEAM_ID: &str = web_api!("IDOTA2Match_570/GetTeamInfoByTeamID/v001/");
const GET_PLAYER_SUMMARIES: &str = web_api!("ISteamUser/GetPlayerSummaries/v0002/");
const GET_FRIEND_LIST: &str = web_api!("ISteamUser/GetFriendList/v0001/");
const GET_SERVER_INFO: &str = web_api!("ISteamWebAPIUtil/GetServerInfo/v0001/");
const GET_HEROES: &str = web_api!("IEconDOTA2_570/GetHeroes/v0001/");
const GET_GAME_ITEMS: &str = web_api!("IEconDOTA2_570/GetGameItems/v0001/");
const GET_TOURNAMENT_PRIZE_POOL: &str = web_api!("IEconDOTA2_570/GetTournamentPrizePool/v1/");
const GET_TOP_LIVE_GAME: &str = web_api!("IDOTA2Match_570/GetTopLiveGame/v1/");

/// CDN image bases. Not part of the registry: the API key must never be
/// appended to a CDN request.
pub const ITEMS_IMAGES_URL: &str = "http://cdn.dota2.com/apps/dota2/images/items/";
pub const HERO_IMAGES_URL: &str = "http://cdn.dota2.com/apps/dota2/images/heroes/";

/// Logical endpoint name to fully-qualified Web API URL. Fixed at compile time.
const REGISTRY: &[(&str, &str)] = &[
    ("GetMatchHistory", GET_MATCH_HISTORY),
    ("GetMatchHistoryBySeqNum", GET_MATCH_HISTORY_BY_SEQ_NUM),
    ("GetMatchDetails", GET_MATCH_DETAILS),
    ("GetLeagueListing", GET_LEAGUE_LISTING),
    ("GetLiveLeagueGames", GET_LIVE_LEAGUE_GAMES),
    ("GetTeamInfoByTeamId", GET_TEAM_INFO_BY_TEAM_ID),
    ("GetPlayerSummaries", GET_PLAYER_SUMMARIES),
    ("GetFriendList", GET_FRIEND_LIST),
    ("GetServerInfo", GET_SERVER_INFO),
    ("GetHeroes", GET_HEROES),
    ("GetGameItems", GET_GAME_ITEMS),
    ("GetTournamentPrizePool", GET_TOURNAMENT_PRIZE_POOL),
    ("GetTopLiveGame", GET_TOP_LIVE_GAME),
];

/// Looks up the URL registered for `name`. Names are matched exactly.
pub fn lookup(name: &str) -> Result<&'static str, Error> {
    REGISTRY
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, url)| *url)
        .ok_or_else(|| Error::UnknownEndpoint(name.into()))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(n, _)| *n)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroImageSize {
    /// 59x33
    Small,
    /// 205x115
    Large,
    /// 256x144
    Full,
    /// 235x272 portrait
    Vertical,
}

impl HeroImageSize {
    fn suffix(self) -> &'static str {
        match self {
            HeroImageSize::Small => "_sb.png",
            HeroImageSize::Large => "_lg.png",
            HeroImageSize::Full => "_full.png",
            HeroImageSize::Vertical => "_vert.jpg",
        }
    }
}

/// CDN image for a hero. Accepts either the API name (`npc_dota_hero_axe`)
/// or the short one (`axe`).
pub fn hero_image_url(hero_name: &str, size: HeroImageSize) -> String {
    let short = hero_name
        .strip_prefix("npc_dota_hero_")
        .unwrap_or(hero_name);
    format!("{HERO_IMAGES_URL}{short}{}", size.suffix())
}

/// CDN image for an item, e.g. `item_blink` or `blink`.
pub fn item_image_url(item_name: &str) -> String {
    let short = item_name.strip_prefix("item_").unwrap_or(item_name);
    format!("{ITEMS_IMAGES_URL}{short}_lg.png")
}
