//! Unwrapping of the service's JSON envelopes.
//!
//! Most interfaces wrap their payload as `{"result": {...}}`, `ISteamUser`
//! uses `{"response": {...}}`, the friend list nests one level deeper under
//! `friendslist`, and the server info is returned bare. Service-level status
//! codes inside the payload are not inspected here.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Error;
use crate::types::{FriendInfo, FriendList};

#[derive(Debug, Deserialize)]
struct ResultEnvelope<T> {
    result: T,
}

#[derive(Debug, Deserialize)]
struct ResponseEnvelope<T> {
    response: T,
}

#[derive(Debug, Deserialize)]
struct FriendListEnvelope {
    #[serde(default)]
    friendslist: FriendList,
}

/// Decodes `{"result": T}` and returns `T`.
pub fn decode_result<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    Ok(serde_json::from_slice::<ResultEnvelope<T>>(body)?.result)
}

/// Decodes `{"response": T}` and returns `T`.
pub fn decode_response<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    Ok(serde_json::from_slice::<ResponseEnvelope<T>>(body)?.response)
}

/// Decodes `{"friendslist": {"friends": [...]}}`. A missing list is empty.
pub fn decode_friend_list(body: &[u8]) -> Result<Vec<FriendInfo>, Error> {
    Ok(serde_json::from_slice::<FriendListEnvelope>(body)?
        .friendslist
        .friends)
}

/// Decodes a payload that has no envelope.
pub fn decode_bare<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::enums::{GameMode, LeagueTier, LobbyType, SeriesType};
    use crate::types::*;

    #[test]
    fn test_decode_match_history() {
        let json = r###"
            {
              "result": {
                "status": 1,
                "num_results": 1,
                "total_results": 500,
                "results_remaining": 499,
                "matches": [
                  {
                    "match_id": 4080856812,
                    "match_seq_num": 3553618722,
                    "start_time": 1534722339,
                    "lobby_type": 1,
                    "radiant_team_id": 15,
                    "dire_team_id": 2586976,
                    "players": [
                      { "account_id": 94155156, "player_slot": 0, "hero_id": 96 },
                      { "account_id": 86727555, "player_slot": 128, "hero_id": 36 }
                    ]
                  }
                ]
              }
            }
        "###;

        let history: MatchHistory = decode_result(json.as_bytes()).unwrap();
        assert_eq!(
            history,
            MatchHistory {
                status: 1,
                status_detail: None,
                num_results: 1,
                total_results: 500,
                results_remaining: 499,
                matches: vec![MatchInfo {
                    match_id: 4080856812,
                    match_seq_num: 3553618722,
                    start_time: 1534722339,
                    lobby_type: LobbyType::PRACTICE,
                    radiant_team_id: 15,
                    dire_team_id: 2586976,
                    players: vec![
                        MatchPlayer {
                            account_id: 94155156,
                            player_slot: 0,
                            hero_id: 96,
                        },
                        MatchPlayer {
                            account_id: 86727555,
                            player_slot: 128,
                            hero_id: 36,
                        },
                    ],
                }],
            }
        );
    }

    #[test]
    fn test_service_failure_status_is_data() {
        let json = r#"{"result":{"status":15,"statusDetail":"Cannot get match history for a user that hasn't allowed it"}}"#;

        let history: MatchHistory = decode_result(json.as_bytes()).unwrap();
        assert_eq!(history.status, 15);
        assert_eq!(
            history.status_detail.as_deref(),
            Some("Cannot get match history for a user that hasn't allowed it")
        );
        assert!(history.matches.is_empty());
    }

    #[test]
    fn test_private_friend_list_is_empty() {
        // private profiles come back without the list
        assert!(decode_friend_list(b"{}").unwrap().is_empty());
        assert!(decode_friend_list(br#"{"friendslist":{}}"#)
            .unwrap()
            .is_empty());

        assert!(matches!(
            decode_friend_list(b"<html>Unauthorized</html>"),
            Err(Error::Decode(_))
        ));
        assert!(matches!(
            decode_friend_list(br#"{"friendslist":{"friends":"none"}}"#),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn test_decode_match_details_fixture() {
        let detail: MatchDetail =
            decode_result(include_bytes!("../fixtures/match_details_4080856812.json")).unwrap();

        assert_eq!(detail.match_id, 4080856812);
        assert_eq!(detail.radiant_name, "PSG.LGD");
        assert_eq!(detail.dire_name, "OG");
        assert!(!detail.radiant_win);
        assert_eq!(detail.game_mode, GameMode::CAPTAINS_MODE);
        assert_eq!(detail.lobby_type, LobbyType::PRACTICE);
        assert_eq!(detail.league_id, 9870);
        assert_eq!(detail.picks_bans[0], PickBan {
            is_pick: false,
            hero_id: 67,
            team: 0,
            order: 0,
        });

        let ana = detail
            .players
            .iter()
            .find(|p| p.account_id == 311360822)
            .unwrap();
        assert_eq!(ana.hero_id, 41);
        assert!(!ana.is_radiant());
        assert_eq!(ana.ability_upgrades.len(), 2);
    }

    #[test]
    fn test_match_details_keep_every_field() {
        let raw = include_bytes!("../fixtures/match_details_4080856812.json");
        let recorded: serde_json::Value = serde_json::from_slice(raw).unwrap();

        let detail: MatchDetail = decode_result(raw).unwrap();

        assert_eq!(serde_json::to_value(&detail).unwrap(), recorded["result"]);
    }

    #[test]
    fn test_decode_league_listing() {
        let json = r###"
            {
              "result": {
                "leagues": [
                  {
                    "name": "#DOTA_Item_The_International_2018",
                    "leagueid": 9870,
                    "description": "#DOTA_Item_Desc_The_International_2018",
                    "tournament_url": "http://www.dota2.com/international/overview/",
                    "itemdef": 17428
                  }
                ]
              }
            }
        "###;

        let leagues: LeagueList = decode_result(json.as_bytes()).unwrap();
        assert_eq!(
            leagues,
            LeagueList {
                leagues: vec![League {
                    name: "#DOTA_Item_The_International_2018".into(),
                    league_id: 9870,
                    description: "#DOTA_Item_Desc_The_International_2018".into(),
                    tournament_url: "http://www.dota2.com/international/overview/".into(),
                    item_def: 17428,
                }],
            }
        );
    }

    #[test]
    fn test_decode_live_league_games_fixture() {
        let games: LeagueGames =
            decode_result(include_bytes!("../fixtures/live_league_games.json")).unwrap();

        assert_eq!(games.status, 200);
        assert_eq!(games.games.len(), 2);

        let live = &games.games[0];
        assert_eq!(live.match_id, 4080856812);
        assert_eq!(live.series_type, SeriesType::BEST_OF_5);
        assert_eq!(live.league_tier, LeagueTier::PREMIER);
        assert_eq!(live.stream_delay_secs, 120);
        assert_eq!(
            live.radiant_team,
            Some(LiveTeam {
                team_name: "PSG.LGD".into(),
                team_id: 15,
                team_logo: 543025270456493033,
                complete: true,
            })
        );

        // duplicated `abilities` keys are skipped
        let scoreboard = live.scoreboard.as_ref().unwrap();
        assert_eq!(scoreboard.duration, 1843.5);
        assert_eq!(scoreboard.radiant.picks.len(), 5);
        assert_eq!(scoreboard.dire.bans.len(), 6);
        let player = &scoreboard.radiant.players[0];
        assert_eq!(player.deaths, 3);
        assert_eq!(player.position_x, -1520.25);

        // still drafting: no scoreboard, no teams
        let drafting = &games.games[1];
        assert!(drafting.scoreboard.is_none());
        assert!(drafting.dire_team.is_none());
    }

    fn strip_abilities(value: &mut serde_json::Value) {
        match value {
            serde_json::Value::Object(map) => {
                map.remove("abilities");
                map.values_mut().for_each(strip_abilities);
            }
            serde_json::Value::Array(items) => items.iter_mut().for_each(strip_abilities),
            _ => {}
        }
    }

    /// Every field present in `recorded` is present, with the same value, in `decoded`.
    fn assert_keeps_recorded(decoded: &serde_json::Value, recorded: &serde_json::Value, path: &str) {
        match (decoded, recorded) {
            (serde_json::Value::Object(d), serde_json::Value::Object(r)) => {
                for (key, value) in r {
                    let field = d.get(key).unwrap_or_else(|| panic!("{path}.{key} dropped"));
                    assert_keeps_recorded(field, value, &format!("{path}.{key}"));
                }
            }
            (serde_json::Value::Array(d), serde_json::Value::Array(r)) => {
                assert_eq!(d.len(), r.len(), "{path}");
                for (i, (d, r)) in d.iter().zip(r).enumerate() {
                    assert_keeps_recorded(d, r, &format!("{path}[{i}]"));
                }
            }
            (d, r) => assert_eq!(d, r, "{path}"),
        }
    }

    #[test]
    fn test_live_league_games_keep_every_field() {
        let raw = include_bytes!("../fixtures/live_league_games.json");
        let mut recorded: serde_json::Value = serde_json::from_slice(raw).unwrap();
        strip_abilities(&mut recorded);

        let games: LeagueGames = decode_result(raw).unwrap();
        let decoded = serde_json::to_value(&games).unwrap();

        // the in-progress game carries every declared field
        assert_eq!(decoded["games"][0], recorded["result"]["games"][0]);
        // the drafting game has absent fields filled with defaults
        assert_keeps_recorded(&decoded, &recorded["result"], "result");
    }

    #[test]
    fn test_match_history_by_seq_num_keeps_every_field() {
        let raw = include_bytes!("../fixtures/match_history_by_seq_num.json");
        let recorded: serde_json::Value = serde_json::from_slice(raw).unwrap();

        let history: MatchHistoryBySeqNum = decode_result(raw).unwrap();

        assert_eq!(serde_json::to_value(&history).unwrap(), recorded["result"]);
    }

    #[test]
    fn test_game_items_keep_every_field() {
        let json = r###"
            {
              "result": {
                "items": [
                  {
                    "id": 1,
                    "name": "item_blink",
                    "cost": 2250,
                    "secret_shop": 0,
                    "side_shop": 0,
                    "recipe": 0,
                    "localized_name": "Blink Dagger"
                  },
                  {
                    "id": 5,
                    "name": "item_platemail",
                    "cost": 1400,
                    "secret_shop": 1,
                    "side_shop": 0,
                    "recipe": 0
                  }
                ],
                "status": 200
              }
            }
        "###;
        let recorded: serde_json::Value = serde_json::from_str(json).unwrap();

        let items: GameItems = decode_result(json.as_bytes()).unwrap();

        assert_eq!(items.items[0].localized_name.as_deref(), Some("Blink Dagger"));
        assert_eq!(serde_json::to_value(&items).unwrap(), recorded["result"]);
    }

    #[test]
    fn test_decode_player_summaries() {
        let json = r###"
            {
              "response": {
                "players": [
                  {
                    "steamid": "76561198092165728",
                    "communityvisibilitystate": 3,
                    "profilestate": 1,
                    "personaname": "mjf",
                    "lastlogoff": 1538140400,
                    "profileurl": "https://steamcommunity.com/id/mjf/",
                    "avatar": "https://cdn.example/a.jpg",
                    "avatarmedium": "https://cdn.example/a_medium.jpg",
                    "avatarfull": "https://cdn.example/a_full.jpg",
                    "personastate": 0,
                    "primaryclanid": "103582791429521408",
                    "timecreated": 1367152335,
                    "personastateflags": 0
                  }
                ]
              }
            }
        "###;

        let summaries: PlayerSummaryList = decode_response(json.as_bytes()).unwrap();
        assert_eq!(
            summaries.players,
            vec![PlayerSummary {
                steam_id: "76561198092165728".into(),
                community_visibility_state: crate::enums::CommunityVisibility::FRIENDS_OF_FRIENDS,
                profile_state: 1,
                persona_name: "mjf".into(),
                last_logoff: 1538140400,
                profile_url: "https://steamcommunity.com/id/mjf/".into(),
                avatar: "https://cdn.example/a.jpg".into(),
                avatar_medium: "https://cdn.example/a_medium.jpg".into(),
                avatar_full: "https://cdn.example/a_full.jpg".into(),
                persona_state: crate::enums::PersonaState::OFFLINE,
                primary_clan_id: "103582791429521408".into(),
                time_created: 1367152335,
                persona_state_flags: 0,
            }]
        );
    }

    #[test]
    fn test_decode_friend_list() {
        let json = r###"
            {
              "friendslist": {
                "friends": [
                  { "steamid": "76561198096441766", "relationship": "friend", "friend_since": 1389535609 }
                ]
              }
            }
        "###;

        let friends = decode_friend_list(json.as_bytes()).unwrap();
        assert_eq!(
            friends,
            vec![FriendInfo {
                steam_id: "76561198096441766".into(),
                relationship: "friend".into(),
                friend_since: 1389535609,
            }]
        );
    }

    #[test]
    fn test_decode_server_info() {
        let json = r#"{"servertime":1538140400,"servertimestring":"Fri Sep 28 06:13:20 2018"}"#;

        let info: ServerInfo = decode_bare(json.as_bytes()).unwrap();
        assert_eq!(
            info,
            ServerInfo {
                server_time: 1538140400,
                server_time_string: "Fri Sep 28 06:13:20 2018".into(),
            }
        );
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let truncated = br#"{"result":{"status":1,"num_results":"#;
        assert!(matches!(
            decode_result::<MatchHistory>(truncated),
            Err(Error::Decode(_))
        ));

        let html = b"<html><body>Forbidden</body></html>";
        assert!(matches!(
            decode_bare::<ServerInfo>(html),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        // right payload, wrong envelope
        let json = br#"{"response":{"leagues":[]}}"#;
        assert!(matches!(
            decode_result::<LeagueList>(json),
            Err(Error::Decode(_))
        ));

        // a field of the wrong type fails instead of zeroing
        let json = br#"{"servertime":"soon","servertimestring":""}"#;
        assert!(matches!(
            decode_bare::<ServerInfo>(json),
            Err(Error::Decode(_))
        ));

        // required identity fields cannot be absent
        let json = br#"{"friendslist":{"friends":[{"relationship":"friend","friend_since":1}]}}"#;
        assert!(matches!(decode_friend_list(json), Err(Error::Decode(_))));
    }
}
