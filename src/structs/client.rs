use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::errors::GameeError;
use crate::structs::gameplay::{GameplayData, GameplayDetails, GameplayMetadata};

/// Gamee API client. Used to interact with the Gamee JSON-RPC API.
///
/// One installation identifier is generated per instance and sent with every
/// request, emulating the persistent device identity the service expects.
#[derive(Debug)]
pub struct Client {
    http_client: reqwest::Client,
    base_url: Url,
    install_uuid: String,
}

/// Gamee client options. Pass this into the `new()` function of the client.
#[derive(Debug, Default)]
pub struct ClientOptions {
    /// Base URL of the Gamee API. Defaults to [`Client::BASE_URL`].
    pub base_url: Option<String>,
    /// Per-request timeout. Defaults to [`Client::TIMEOUT`].
    pub timeout: Option<Duration>,
}

/// JSON-RPC 2.0 envelope. The service dispatches on `method`, not the URL
/// path, and echoes `id` back; the web client sets `id` to the method name.
#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: &'a str,
    method: &'a str,
    params: Value,
}

/// MD5 over `"{score}:{play_time}:{game_path}::{install_uuid}:{seed}"`.
///
/// Reverse-engineered from the obfuscated web client. The field order and the
/// double colon are part of the wire contract; the service rejects any
/// submission whose digest does not match.
fn generate_checksum(score: i64, play_time: i64, game_path: &str, install_uuid: &str) -> String {
    let input = format!(
        "{score}:{play_time}:{game_path}::{install_uuid}:{}",
        Client::SEED
    );
    format!("{:x}", md5::compute(input))
}

/// Extracts the path component of a game URL. The service identifies games
/// by path for every call except the leaderboard one.
fn game_path(game_url: &str) -> Result<String, GameeError> {
    Ok(Url::parse(game_url)?.path().to_string())
}

impl Client {
    /// Default base URL of the Gamee API.
    pub const BASE_URL: &'static str = "https://api.gamee.com/";
    /// Default per-request timeout.
    pub const TIMEOUT: Duration = Duration::from_secs(30);
    /// Shared secret mixed into the gameplay checksum. Fixed by the service.
    pub const SEED: &'static str = "crmjbjm3lczhlgnek9uaxz2l9svlfjw14npauhen";
    /// User agent sent with every request. The service expects a mobile
    /// browser.
    pub const USER_AGENT: &'static str = "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36";

    /// Creates a new Gamee client with a fresh installation identifier.
    pub fn new(options: ClientOptions) -> Result<Self, GameeError> {
        let base_url = Url::parse(options.base_url.as_deref().unwrap_or(Self::BASE_URL))?;
        let http_client = reqwest::Client::builder()
            .timeout(options.timeout.unwrap_or(Self::TIMEOUT))
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            install_uuid: Uuid::new_v4().to_string(),
        })
    }

    /// The installation identifier sent as `X-Install-Uuid` with every
    /// request. Stable for the lifetime of this instance.
    pub fn install_uuid(&self) -> &str {
        &self.install_uuid
    }

    /// Checksum for a gameplay result, bound to this instance's installation
    /// identifier. `game_path` is the path component of the game URL.
    pub fn checksum(&self, score: i64, play_time: i64, game_path: &str) -> String {
        generate_checksum(score, play_time, game_path, &self.install_uuid)
    }

    /// Authorizes through bot login, identifying as a Telegram bot user.
    ///
    /// The response carries the session data, including the bearer token to
    /// pass to the authenticated calls. Token lifecycle is the caller's
    /// responsibility; the client does not store it.
    pub async fn authorize(&self, game_url: &str) -> Result<Value, GameeError> {
        let path = game_path(game_url)?;
        self.rpc_call(
            "user.authentication.botLogin",
            json!({
                "botGameUrl": path,
                "botName": "telegram",
                "botUserIdentifier": null,
            }),
            None,
        )
        .await
    }

    /// Fetches metadata about the web game at the given URL, including its
    /// numeric id and current release number.
    pub async fn get_game_details(&self, game_url: &str) -> Result<Value, GameeError> {
        let path = game_path(game_url)?;
        self.rpc_call("game.getWebGameplayDetails", json!({ "gameUrl": path }), None)
            .await
    }

    /// Checks whether the current session is geographically blocked.
    pub async fn get_geo_block_status(&self, auth_token: &str) -> Result<Value, GameeError> {
        self.rpc_call("user.getGeoBlockStatus", json!({}), Some(auth_token))
            .await
    }

    /// Fetches the leaderboard entries surrounding the current user.
    ///
    /// Unlike the other calls, the service wants the full game URL here, not
    /// just its path.
    pub async fn get_leaderboard_surrounding(
        &self,
        auth_token: &str,
        game_url: &str,
    ) -> Result<Value, GameeError> {
        self.rpc_call(
            "leaderboards.getWebSurroundingByGame",
            json!({ "gameUrl": game_url }),
            Some(auth_token),
        )
        .await
    }

    /// Submits a gameplay result (score and play time in seconds).
    ///
    /// Issues two sequential calls: a details lookup to resolve the game id
    /// and release number, then the submission itself. There is no rollback;
    /// if the lookup succeeds and the submission fails, the caller sees the
    /// submission error. Score and play time are passed through unvalidated.
    pub async fn save_gameplay(
        &self,
        auth_token: &str,
        game_url: &str,
        score: i64,
        play_time: i64,
    ) -> Result<Value, GameeError> {
        let details: GameplayDetails =
            serde_json::from_value(self.get_game_details(game_url).await?)?;
        let path = game_path(game_url)?;

        let gameplay = GameplayData {
            game_id: details.result.game.id,
            score,
            play_time,
            game_url: path.clone(),
            release_number: details.result.game.release.number,
            created_time: Utc::now().format("%Y-%m-%dT%H:%M:%S%z").to_string(),
            metadata: GameplayMetadata {
                gameplay_id: rand::thread_rng().gen_range(1..=500),
            },
            is_save_state: false,
            game_state_data: None,
            gameplay_origin: "game",
            replay_data: None,
            replay_variant: None,
            replay_data_checksum: None,
            uuid: self.install_uuid.clone(),
            checksum: self.checksum(score, play_time, &path),
        };

        self.rpc_call(
            "game.saveWebGameplay",
            json!({ "gameplayData": gameplay }),
            Some(auth_token),
        )
        .await
    }

    /// POSTs one JSON-RPC request to the base URL and returns the parsed
    /// response body verbatim. RPC-level errors inside a 2xx body are the
    /// caller's to interpret.
    async fn rpc_call(
        &self,
        method: &str,
        params: Value,
        auth_token: Option<&str>,
    ) -> Result<Value, GameeError> {
        debug!(method, "sending Gamee RPC request");

        let request = RpcRequest {
            jsonrpc: "2.0",
            id: method,
            method,
            params,
        };

        let mut builder = self
            .http_client
            .post(self.base_url.clone())
            .header(reqwest::header::USER_AGENT, Self::USER_AGENT)
            .header("X-Install-Uuid", &self.install_uuid)
            .json(&request);
        if let Some(token) = auth_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(method, %status, "Gamee RPC request failed");
            return Err(GameeError::Http { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
