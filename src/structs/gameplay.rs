use serde::{Deserialize, Serialize};

/// One completed play session, sent under `params.gameplayData` of a
/// `game.saveWebGameplay` call. Field names follow the service's camelCase
/// convention; the replay and save-state fields are always absent in this
/// client but the service still wants them present as nulls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameplayData {
    pub game_id: u64,
    pub score: i64,
    pub play_time: i64,
    /// Path component of the game URL.
    pub game_url: String,
    pub release_number: u32,
    /// UTC, second precision, numeric offset (`2024-05-01T12:34:56+0000`).
    pub created_time: String,
    pub metadata: GameplayMetadata,
    pub is_save_state: bool,
    pub game_state_data: Option<String>,
    pub gameplay_origin: &'static str,
    pub replay_data: Option<String>,
    pub replay_variant: Option<String>,
    pub replay_data_checksum: Option<String>,
    /// Installation identifier of the submitting client.
    pub uuid: String,
    pub checksum: String,
}

/// Undocumented; the web client sends a uniform random value in [1, 500].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameplayMetadata {
    pub gameplay_id: u32,
}

/// The slice of a `game.getWebGameplayDetails` response that a submission
/// depends on. Everything else in the response passes through untouched.
#[derive(Debug, Deserialize)]
pub(crate) struct GameplayDetails {
    pub result: DetailsResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResult {
    pub game: GameDetails,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GameDetails {
    pub id: u64,
    pub release: GameRelease,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GameRelease {
    pub number: u32,
}
