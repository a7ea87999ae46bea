use log::warn;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::command::Intent;

pub const HELP: &str = "commands: help | quit | start | target <name> | act <action> | block <duke|captain|ambassador|contessa|coup> | allow | challenge | pass | keep <i> | lose <i> | confirm | show";

pub fn parse(input: &str) -> Option<Intent> {
	let parts: Vec<&str> = input.split_whitespace().collect();
	let arg = parts.get(1..).map(|rest| rest.join(" ")).filter(|rest| !rest.is_empty());

	let intent = match (parts.first()?.to_lowercase().as_str(), arg) {
		("start", None) => Intent::Start,
		("target" | "t", Some(who)) => Intent::Target(who),
		("act" | "a", Some(action)) => Intent::Act(action.parse().ok()?),
		("block" | "b", Some(block)) => Intent::Block(block.parse().ok()?),
		("allow", None) => Intent::Allow,
		("challenge", None) => Intent::Challenge,
		("pass", None) => Intent::Pass,
		("keep" | "k", Some(index)) => Intent::Keep(index.parse().ok()?),
		("lose" | "l", Some(index)) => Intent::Lose(index.parse().ok()?),
		("confirm" | "ok", None) => Intent::Confirm,
		("show" | "s", None) => Intent::Show,
		_ => return None,
	};
	Some(intent)
}

/** What a console line asks of the console itself, rather than of the game. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
	Play(Intent),
	Help,
	Quit,
	Unknown(String),
}

pub fn read_line(input: &str) -> Line {
	match input.trim().to_lowercase().as_str() {
		"help" | "?" => Line::Help,
		"quit" | "exit" => Line::Quit,
		_ => parse(input).map_or_else(|| Line::Unknown(input.trim().to_string()), Line::Play),
	}
}

/** Forwards intents typed on stdin until it closes or the player quits. Dropping the sender ends the session. */
pub fn spawn_console(intents: mpsc::UnboundedSender<Intent>) {
	tokio::spawn(async move {
		let mut lines = BufReader::new(io::stdin()).lines();

		while let Ok(Some(line)) = lines.next_line().await {
			if line.trim().is_empty() {
				continue;
			}

			match read_line(&line) {
				Line::Play(intent) => {
					if intents.send(intent).is_err() {
						warn!("Session closed, no longer reading commands");
						break;
					}
				}
				Line::Help => println!("{HELP}"),
				Line::Quit => break,
				Line::Unknown(line) => println!("Can't make sense of '{line}'. Type 'help' for the commands."),
			}
		}
	});
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::basics::action::{ActionKind, BlockKind};

	#[test]
	fn it_parses_intents() {
		assert_eq!(parse("act foreign aid"), Some(Intent::Act(ActionKind::ForeignAid)));
		assert_eq!(parse("target Opal Fruit"), Some(Intent::Target("Opal Fruit".to_string())));
		assert_eq!(parse("b captain"), Some(Intent::Block(BlockKind::BlockStealCaptain)));
		assert_eq!(parse("keep 2"), Some(Intent::Keep(2)));
		assert_eq!(parse("OK"), Some(Intent::Confirm));
	}

	#[test]
	fn it_rejects_malformed_intents() {
		assert_eq!(parse("act"), None);
		assert_eq!(parse("act bribe"), None);
		assert_eq!(parse("keep two"), None);
		assert_eq!(parse("pass now"), None);
		assert_eq!(parse(""), None);
	}

	#[test]
	fn it_handles_console_commands() {
		assert_eq!(read_line(" Help "), Line::Help);
		assert_eq!(read_line("quit"), Line::Quit);
		assert_eq!(read_line("allow"), Line::Play(Intent::Allow));
		assert_eq!(read_line("bribe Bob "), Line::Unknown("bribe Bob".to_string()));
	}
}
