//! Integer codes defined by the Web API.
//!
//! Each code is kept as the raw integer the service sent, so values this
//! crate has no name for still round-trip unchanged.

use serde::{Deserialize, Serialize};

macro_rules! service_code {
    (
        $(#[$meta:meta])*
        $name:ident($repr:ty) {
            $($konst:ident = $value:literal => $label:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            $(pub const $konst: Self = Self($value);)*

            /// Human readable name, `None` for codes the service has not documented.
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some($label),)*
                    _ => None,
                }
            }
        }

        impl From<$repr> for $name {
            fn from(v: $repr) -> Self {
                Self(v)
            }
        }
    };
}

service_code! {
    LobbyType(i32) {
        INVALID = -1 => "Invalid",
        PUBLIC_MATCHMAKING = 0 => "Public matchmaking",
        PRACTICE = 1 => "Practice",
        TOURNAMENT = 2 => "Tournament",
        TUTORIAL = 3 => "Tutorial",
        COOP_WITH_AI = 4 => "Co-op with AI",
        TEAM_MATCH = 5 => "Team match",
        SOLO_QUEUE = 6 => "Solo queue",
        RANKED_MATCHMAKING = 7 => "Ranked matchmaking",
        SOLO_MID = 8 => "1v1 solo mid",
    }
}

service_code! {
    SeriesType(i32) {
        NON_SERIES = 0 => "Non-series",
        BEST_OF_3 = 1 => "Best of 3",
        BEST_OF_5 = 2 => "Best of 5",
    }
}

service_code! {
    LeagueTier(i32) {
        AMATEUR = 1 => "Amateur",
        PROFESSIONAL = 2 => "Professional",
        PREMIER = 3 => "Premier",
    }
}

service_code! {
    GameMode(i32) {
        UNKNOWN = 0 => "Unknown",
        ALL_PICK = 1 => "All Pick",
        CAPTAINS_MODE = 2 => "Captains Mode",
        RANDOM_DRAFT = 3 => "Random Draft",
        SINGLE_DRAFT = 4 => "Single Draft",
        ALL_RANDOM = 5 => "All Random",
        INTRO = 6 => "Intro",
        DIRETIDE = 7 => "Diretide",
        REVERSE_CAPTAINS_MODE = 8 => "Reverse Captains Mode",
        THE_GREEVILING = 9 => "The Greeviling",
        TUTORIAL = 10 => "Tutorial",
        MID_ONLY = 11 => "Mid Only",
        LEAST_PLAYED = 12 => "Least Played",
        NEW_PLAYER_POOL = 13 => "New Player Pool",
        COMPENDIUM_MATCHMAKING = 14 => "Compendium Matchmaking",
        CUSTOM = 15 => "Custom",
        CAPTAINS_DRAFT = 16 => "Captains Draft",
        BALANCED_DRAFT = 17 => "Balanced Draft",
        ABILITY_DRAFT = 18 => "Ability Draft",
        EVENT = 19 => "Event",
        ALL_RANDOM_DEATH_MATCH = 20 => "All Random Death Match",
        SOLO_MID_1V1 = 21 => "1v1 Solo Mid",
        RANKED_ALL_PICK = 22 => "Ranked All Pick",
    }
}

service_code! {
    LeaverStatus(i32) {
        NONE = 0 => "None",
        DISCONNECTED = 1 => "Disconnected",
        DISCONNECTED_TOO_LONG = 2 => "Disconnected too long",
        ABANDONED = 3 => "Abandoned",
        AFK = 4 => "AFK",
        NEVER_CONNECTED = 5 => "Never connected",
        NEVER_CONNECTED_TOO_LONG = 6 => "Never connected too long",
    }
}

service_code! {
    PersonaState(i32) {
        OFFLINE = 0 => "Offline",
        ONLINE = 1 => "Online",
        BUSY = 2 => "Busy",
        AWAY = 3 => "Away",
        SNOOZE = 4 => "Snooze",
        LOOKING_TO_TRADE = 5 => "Looking to trade",
        LOOKING_TO_PLAY = 6 => "Looking to play",
    }
}

service_code! {
    /// Profile visibility as seen by the key's owner.
    CommunityVisibility(i32) {
        PRIVATE = 1 => "Private",
        FRIENDS_ONLY = 2 => "Friends only",
        FRIENDS_OF_FRIENDS = 3 => "Friends of friends",
        USERS_ONLY = 4 => "Users only",
        PUBLIC = 5 => "Public",
    }
}
