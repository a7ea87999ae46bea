use log::{debug, info};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;

use crate::basics::action::PerformAction;
use crate::basics::view::{GameView, Mode, Team};
use crate::command::Dispatcher;
use crate::poll::StateSource;

#[derive(Debug, Error)]
pub enum ClientError {
	#[error("could not reach the server: {0}")]
	Transport(#[from] reqwest::Error),
	/** The server refused the request; the message is shown to the player as-is. */
	#[error("{message}")]
	Rejected { status: u16, message: String },
	#[error("malformed response: {0}")]
	Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedGame {
	pub game_id: String,
	pub player_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JoinedGame {
	pub player_token: String,
}

/** Pulls the human-readable message out of an error body, which may be plain text or `{"detail": ...}`. */
pub fn error_message(body: &str) -> String {
	match serde_json::from_str::<Value>(body) {
		Ok(Value::Object(map)) => match map.get("detail") {
			Some(Value::String(detail)) => detail.clone(),
			Some(detail) => detail.to_string(),
			None => body.trim().to_string(),
		},
		_ => body.trim().to_string(),
	}
}

/** JSON-over-HTTP access to the game server. Cheap to clone. */
#[derive(Debug, Clone)]
pub struct ApiClient {
	http: reqwest::Client,
	base_url: String,
}

impl ApiClient {
	pub fn new(base_url: &str) -> Self {
		Self {
			http: reqwest::Client::new(),
			base_url: base_url.trim_end_matches('/').to_string(),
		}
	}

	async fn post<T: DeserializeOwned>(&self, operation: &str, body: &Value) -> Result<T, ClientError> {
		let response = self.http.post(format!("{}/api/{operation}", self.base_url))
			.json(body)
			.send()
			.await?;

		let status = response.status();
		let text = response.text().await?;

		if !status.is_success() {
			debug!("{operation} rejected with {status}: {text}");
			return Err(ClientError::Rejected { status: status.as_u16(), message: error_message(&text) });
		}

		Ok(serde_json::from_str(&text)?)
	}

	pub async fn create_game(&self, mode: Mode, name: &str, team: Team) -> Result<CreatedGame, ClientError> {
		let team = format!("{team:?}");
		let created: CreatedGame = self.post("create_game", &json!({ "mode": mode.wire_name(), "name": name, "team": team })).await?;

		info!("Created game {}", created.game_id);
		Ok(created)
	}

	pub async fn join_game(&self, game_id: &str, name: &str, team: Team) -> Result<JoinedGame, ClientError> {
		let team = format!("{team:?}");
		let joined = self.post("join_game", &json!({ "game_id": game_id, "name": name, "team": team })).await?;

		info!("Joined game {game_id}");
		Ok(joined)
	}

	pub async fn state(&self, token: &str) -> Result<GameView, ClientError> {
		self.post("state", &json!({ "player_token": token })).await
	}

	/** Sends a command. Every command but starting the game answers with a fresh view. */
	pub async fn perform(&self, token: &str, action: &PerformAction) -> Result<Option<GameView>, ClientError> {
		let body = action.json(token);

		if action.returns_view() {
			self.post(action.endpoint(), &body).await.map(Some)
		}
		else {
			self.post::<Value>(action.endpoint(), &body).await.map(|_| None)
		}
	}
}

impl StateSource for ApiClient {
	fn fetch_state(&self, token: &str) -> impl Future<Output = Result<GameView, ClientError>> + Send {
		self.state(token)
	}
}

impl Dispatcher for ApiClient {
	fn dispatch(&self, token: &str, action: &PerformAction) -> impl Future<Output = Result<Option<GameView>, ClientError>> + Send {
		self.perform(token, action)
	}
}
