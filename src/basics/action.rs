use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

use super::view::{GameView, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
	Income,
	ForeignAid,
	Tax,
	SuperTax,
	Exchange,
	SuperExchange,
	Assassinate,
	SuperAssassinate,
	Steal,
	SuperSteal,
	Coup,
	SuperCoup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preposition {
	From, On
}

impl fmt::Display for Preposition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Preposition::From => write!(f, "from"),
			Preposition::On => write!(f, "on"),
		}
	}
}

/** Who gets to decide whether an action is blocked. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockDecider {
	Opponents, Target
}

impl ActionKind {
	pub const ALL: [ActionKind; 12] = [
		ActionKind::Income,
		ActionKind::ForeignAid,
		ActionKind::Tax,
		ActionKind::SuperTax,
		ActionKind::Exchange,
		ActionKind::SuperExchange,
		ActionKind::Assassinate,
		ActionKind::SuperAssassinate,
		ActionKind::Steal,
		ActionKind::SuperSteal,
		ActionKind::Coup,
		ActionKind::SuperCoup,
	];

	pub fn wire_name(self) -> &'static str {
		match self {
			ActionKind::Income => "income",
			ActionKind::ForeignAid => "foreign_aid",
			ActionKind::Tax => "tax",
			ActionKind::SuperTax => "super_tax",
			ActionKind::Exchange => "exchange",
			ActionKind::SuperExchange => "super_exchange",
			ActionKind::Assassinate => "assassinate",
			ActionKind::SuperAssassinate => "super_assassinate",
			ActionKind::Steal => "steal",
			ActionKind::SuperSteal => "super_steal",
			ActionKind::Coup => "coup",
			ActionKind::SuperCoup => "super_coup",
		}
	}

	/** Human label used by every piece of narration. */
	pub fn label(self) -> &'static str {
		match self {
			ActionKind::Income => "Income",
			ActionKind::ForeignAid => "Foreign Aid",
			ActionKind::Tax => "Duke",
			ActionKind::SuperTax => "Super Duke",
			ActionKind::Exchange => "Ambassador",
			ActionKind::SuperExchange => "Super Ambassador",
			ActionKind::Assassinate => "Assassin",
			ActionKind::SuperAssassinate => "Super Assassin",
			ActionKind::Steal => "Captain steal",
			ActionKind::SuperSteal => "Super Captain steal",
			ActionKind::Coup => "Coup",
			ActionKind::SuperCoup => "Super Coup",
		}
	}

	pub fn cost(self) -> u32 {
		match self {
			ActionKind::Assassinate | ActionKind::SuperAssassinate => 3,
			ActionKind::Coup => 7,
			ActionKind::SuperCoup => 12,
			_ => 0,
		}
	}

	pub fn needs_target(self) -> bool {
		self.preposition().is_some()
	}

	pub fn is_super(self) -> bool {
		matches!(self, ActionKind::SuperTax | ActionKind::SuperExchange | ActionKind::SuperAssassinate | ActionKind::SuperSteal | ActionKind::SuperCoup)
	}

	/**
	 * Super abilities claim two copies of a role, so the actor must hold two cards.
	 * Super Coup claims no role and is exempt.
	 */
	pub fn needs_two_cards(self) -> bool {
		self.is_super() && self != ActionKind::SuperCoup
	}

	pub fn is_steal(self) -> bool {
		matches!(self, ActionKind::Steal | ActionKind::SuperSteal)
	}

	pub fn is_coup(self) -> bool {
		matches!(self, ActionKind::Coup | ActionKind::SuperCoup)
	}

	pub fn preposition(self) -> Option<Preposition> {
		match self {
			ActionKind::Steal | ActionKind::SuperSteal => Some(Preposition::From),
			ActionKind::Assassinate | ActionKind::SuperAssassinate | ActionKind::Coup | ActionKind::SuperCoup => Some(Preposition::On),
			_ => None,
		}
	}

	pub fn available_in(self, mode: Mode) -> bool {
		mode == Mode::Super || !self.is_super()
	}

	/** The blocks that can be claimed against this action, before any per-player gating. */
	pub fn block_options(self, mode: Mode) -> &'static [BlockKind] {
		match self {
			ActionKind::ForeignAid => &[BlockKind::BlockForeignAid],
			ActionKind::Steal | ActionKind::SuperSteal => &[BlockKind::BlockStealCaptain, BlockKind::BlockStealAmbassador],
			ActionKind::Assassinate | ActionKind::SuperAssassinate => &[BlockKind::BlockAssassinate],
			ActionKind::Coup | ActionKind::SuperCoup if mode == Mode::Super => &[BlockKind::BlockCoup],
			_ => &[],
		}
	}

	pub fn block_decider(self) -> BlockDecider {
		if self.needs_target() { BlockDecider::Target } else { BlockDecider::Opponents }
	}
}

impl fmt::Display for ActionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.wire_name())
	}
}

impl FromStr for ActionKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim().to_lowercase().replace(['-', ' '], "_");
		ActionKind::ALL.into_iter().find(|a| a.wire_name() == s).ok_or_else(|| format!("Unknown action '{s}'"))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
	BlockForeignAid,
	BlockStealCaptain,
	BlockStealAmbassador,
	BlockAssassinate,
	BlockCoup,
}

impl BlockKind {
	pub const ALL: [BlockKind; 5] = [
		BlockKind::BlockForeignAid,
		BlockKind::BlockStealCaptain,
		BlockKind::BlockStealAmbassador,
		BlockKind::BlockAssassinate,
		BlockKind::BlockCoup,
	];

	pub fn wire_name(self) -> &'static str {
		match self {
			BlockKind::BlockForeignAid => "block_foreign_aid",
			BlockKind::BlockStealCaptain => "block_steal_captain",
			BlockKind::BlockStealAmbassador => "block_steal_ambassador",
			BlockKind::BlockAssassinate => "block_assassinate",
			BlockKind::BlockCoup => "block_coup",
		}
	}

	/** The role the blocker claims to hold. */
	pub fn claim(self) -> &'static str {
		match self {
			BlockKind::BlockForeignAid => "Duke",
			BlockKind::BlockStealCaptain => "Captain",
			BlockKind::BlockStealAmbassador => "Ambassador",
			BlockKind::BlockAssassinate => "Contessa",
			BlockKind::BlockCoup => "Super Contessa",
		}
	}

	/** Only a Super Contessa block needs the blocker to hold two cards. */
	pub fn needs_two_cards(self) -> bool {
		self == BlockKind::BlockCoup
	}
}

impl fmt::Display for BlockKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.wire_name())
	}
}

impl FromStr for BlockKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim().to_lowercase();
		let block = match s.as_str() {
			"duke" => BlockKind::BlockForeignAid,
			"captain" => BlockKind::BlockStealCaptain,
			"ambassador" => BlockKind::BlockStealAmbassador,
			"contessa" => BlockKind::BlockAssassinate,
			"super_contessa" | "coup" => BlockKind::BlockCoup,
			_ => return BlockKind::ALL.into_iter().find(|b| b.wire_name() == s).ok_or_else(|| format!("Unknown block '{s}'")),
		};
		Ok(block)
	}
}

/** A command sent to the server on behalf of the viewer. */
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PerformAction {
	Start,
	Act { action: ActionKind, target: Option<String> },
	Block(BlockKind),
	NoBlock,
	Challenge,
	NoChallenge,
	FinishExchange { keep: Vec<usize> },
	ChooseLoss { index: usize },
}

impl PerformAction {
	pub fn endpoint(&self) -> &'static str {
		match self {
			PerformAction::Start => "start_game",
			PerformAction::Act { .. } => "action",
			PerformAction::Block(_) => "block",
			PerformAction::NoBlock => "no_block",
			PerformAction::Challenge => "challenge",
			PerformAction::NoChallenge => "no_challenge",
			PerformAction::FinishExchange { .. } => "finish_exchange",
			PerformAction::ChooseLoss { .. } => "choose_loss",
		}
	}

	/** Whether the server answers with a fresh view. */
	pub fn returns_view(&self) -> bool {
		!matches!(self, PerformAction::Start)
	}

	pub fn json(&self, token: &str) -> Value {
		match self {
			PerformAction::Act { action, target } =>			json!({ "player_token": token, "action": action, "target_id": target }),
			PerformAction::Block(block) =>						json!({ "player_token": token, "block_type": block }),
			PerformAction::FinishExchange { keep } =>			json!({ "player_token": token, "keep_indices": keep }),
			PerformAction::ChooseLoss { index } =>				json!({ "player_token": token, "card_index": index }),
			PerformAction::Start | PerformAction::NoBlock | PerformAction::Challenge | PerformAction::NoChallenge =>
																json!({ "player_token": token }),
		}
	}

	pub fn fmt(&self, view: &GameView) -> String {
		let name = |id: &str| view.player(id).map(|p| p.name.clone()).unwrap_or_else(|| id.to_string());

		match self {
			PerformAction::Start => "Start game".to_string(),
			PerformAction::Act { action, target: Some(target) } => format!("{} {}", action.label(), name(target)),
			PerformAction::Act { action, target: None } => action.label().to_string(),
			PerformAction::Block(block) => format!("Block as {}", block.claim()),
			PerformAction::NoBlock => "Let it through".to_string(),
			PerformAction::Challenge => "Challenge".to_string(),
			PerformAction::NoChallenge => "No challenge".to_string(),
			PerformAction::FinishExchange { keep } => format!("Keep cards {keep:?}"),
			PerformAction::ChooseLoss { index } => format!("Lose card {index}"),
		}
	}
}
