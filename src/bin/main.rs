use coup_client::basics::view::{Mode, Team};
use coup_client::client::ApiClient;
use coup_client::command::{CoupClient, Intent};
use coup_client::config::Config;
use coup_client::poll::Poller;
use coup_client::{console, display, logger};
use log::{info, warn};
use std::{collections::HashMap, env, error::Error, sync::Arc};
use tokio::sync::mpsc;

enum Login {
	Create { mode: Mode, name: String, team: Team },
	Join { game_id: String, name: String, team: Team },
	Resume { token: String },
}

fn parse_team(value: &str) -> Result<Team, String> {
	match value.to_uppercase().as_str() {
		"A" => Ok(Team::A),
		"B" => Ok(Team::B),
		_ => Err(format!("Unknown team {value}, expected A or B")),
	}
}

fn parse_mode(value: &str) -> Result<Mode, String> {
	match value.to_lowercase().as_str() {
		"normal" | "normal_team" => Ok(Mode::Normal),
		"super" | "super_team" => Ok(Mode::Super),
		_ => Err(format!("Unknown mode {value}, expected normal or super")),
	}
}

impl Login {
	fn parse(args: &[String]) -> Result<Self, String> {
		let (command, rest) = match args.split_first() {
			Some((first, rest)) if !first.contains('=') => (first.as_str(), rest),
			Some(_) => ("resume", args),
			None => return Err(USAGE.to_string()),
		};
		let mut hash_map = HashMap::new();

		for arg in rest {
			let Some((key, value)) = arg.split_once('=') else {
				return Err(format!("Invalid argument {arg}"));
			};
			hash_map.insert(key.to_string(), value.to_string());
		}

		let get = |key: &str| hash_map.get(key).cloned().ok_or(format!("Missing argument {key}="));

		match command {
			"create" => Ok(Login::Create {
				mode: hash_map.get("mode").map_or(Ok(Mode::Normal), |m| parse_mode(m))?,
				name: get("name")?,
				team: parse_team(&get("team")?)?,
			}),
			"join" => Ok(Login::Join {
				game_id: get("game")?,
				name: get("name")?,
				team: parse_team(&get("team")?)?,
			}),
			"resume" => Ok(Login::Resume { token: get("token")? }),
			_ => Err(USAGE.to_string()),
		}
	}
}

const USAGE: &str = "usage: main create name=<name> team=<A|B> [mode=normal|super] | join game=<id> name=<name> team=<A|B> | token=<token>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
	dotenvy::dotenv().ok();
	let config = Config::from_env();
	let _ = logger::init(config.log_level);

	let args = env::args().collect::<Vec<String>>();
	let login = Login::parse(&args[1..])?;

	let api = ApiClient::new(&config.server);

	let token = match login {
		Login::Create { mode, name, team } => {
			let created = api.create_game(mode, &name, team).await?;
			info!("Share game id {} so others can join.", created.game_id);
			created.player_token
		}
		Login::Join { game_id, name, team } => api.join_game(&game_id, &name, team).await?.player_token,
		Login::Resume { token } => token,
	};
	info!("Session token: {token}");

	let mut poller = Poller::new(Arc::new(api.clone()), config.poll_interval);
	let mut views = poller.subscribe();
	poller.start(token.clone());

	let (intent_sender, mut intent_receiver) = mpsc::unbounded_channel::<Intent>();
	console::spawn_console(intent_sender);
	println!("{}", console::HELP);

	let mut client = CoupClient::new(api, token);
	let mut last_digest = None;

	loop {
		let redraw = tokio::select! {
			changed = views.changed() => {
				if changed.is_err() {
					warn!("Poller went away");
					break;
				}

				let Some(view) = views.borrow_and_update().clone() else {
					continue;
				};

				let digest = view.digest();
				if last_digest == Some(digest) {
					false
				}
				else {
					client.apply_view(view);
					true
				}
			}
			intent = intent_receiver.recv() => match intent {
				Some(intent) => client.handle_intent(intent).await,
				None => break,
			},
		};

		if redraw && let Some(frame) = client.frame() {
			last_digest = Some(frame.view.digest());
			println!("\n{}", display::render(&frame));
		}
	}

	poller.stop();
	Ok(())
}
