use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use ahash::AHasher;
use serde::Deserialize;

use super::action::{ActionKind, BlockKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Team {
	A, B
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Mode {
	#[serde(rename = "normal_team", alias = "normal")]
	Normal,
	#[serde(rename = "super_team", alias = "super")]
	Super,
}

impl Mode {
	/** The value the server expects when creating a game. */
	pub fn wire_name(self) -> &'static str {
		match self {
			Mode::Normal => "normal",
			Mode::Super => "super",
		}
	}

	/** Coin count at which the current player may only coup. */
	pub fn forced_coup_threshold(self) -> u32 {
		match self {
			Mode::Normal => 10,
			Mode::Super => 11,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
	Lobby,
	ActionSelection,
	BlockWindow,
	ChallengeWindow,
	SwapChoice,
	LossChoice,
	GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Role {
	Duke, Assassin, Captain, Ambassador, Contessa
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Player {
	#[serde(rename = "player_id", alias = "id")]
	pub id: String,
	pub name: String,
	pub team: Team,
	pub coins: u32,
	pub alive: bool,
	pub num_cards: usize,
	/** Only ever present on the viewer's own entry. */
	#[serde(default)]
	pub cards: Option<Vec<Role>>,
}

impl Player {
	#[inline]
	pub fn has_influence(&self) -> bool {
		self.alive && self.num_cards > 0
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct PendingAction {
	pub actor_id: String,
	pub action: ActionKind,
	#[serde(default)]
	pub target_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct PendingBlock {
	pub blocker_id: String,
	pub block_type: BlockKind,
}

/** How a seat relates to the viewer. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
	You, Teammate, Opponent
}

/**
 * A viewer-scoped snapshot of the game, replaced wholesale on every fetch.
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct GameView {
	pub game_id: String,
	pub mode: Mode,
	pub phase: Phase,
	pub you: String,
	#[serde(default)]
	pub current_player: Option<String>,
	#[serde(default)]
	pub turn_order: Vec<String>,
	#[serde(default)]
	pub players: BTreeMap<String, Player>,
	#[serde(default)]
	pub winner_team: Option<Team>,
	#[serde(default)]
	pub logs: Vec<String>,
	#[serde(default)]
	pub pending_action: Option<PendingAction>,
	#[serde(default)]
	pub pending_block: Option<PendingBlock>,
	#[serde(default)]
	pub exchange_pool_size: usize,
	#[serde(default)]
	pub exchange_cards: Option<Vec<Role>>,
	#[serde(default)]
	pub loss_choice_player_id: Option<String>,
	#[serde(default)]
	pub loss_choice_cards: Option<Vec<Role>>,
	#[serde(default)]
	pub deck_size: usize,
	#[serde(default)]
	pub revealed_cards: Vec<Role>,
}

impl GameView {
	pub fn player(&self, id: &str) -> Option<&Player> {
		self.players.get(id)
	}

	/** The viewer's own entry, absent for spectators. */
	pub fn me(&self) -> Option<&Player> {
		self.players.get(&self.you)
	}

	#[inline]
	pub fn is_my_turn(&self) -> bool {
		self.current_player.as_deref() == Some(self.you.as_str())
	}

	/** Returns None if either the viewer or the other player is unknown. */
	pub fn relation(&self, id: &str) -> Option<Relation> {
		let me = self.me()?;
		let other = self.player(id)?;

		if other.id == me.id {
			Some(Relation::You)
		}
		else if other.team == me.team {
			Some(Relation::Teammate)
		}
		else {
			Some(Relation::Opponent)
		}
	}

	pub fn find_player(&self, id_or_name: &str) -> Option<&Player> {
		self.player(id_or_name).or_else(|| self.players.values().find(|p| p.name.eq_ignore_ascii_case(id_or_name)))
	}

	pub fn team_size(&self, team: Team) -> usize {
		self.players.values().filter(|p| p.team == team).count()
	}

	/**
	 * Checks the snapshot invariants: hidden cards are withheld from everyone but the viewer,
	 * visible hands match their influence count, and a block always has an action to target.
	 */
	pub fn is_consistent(&self) -> bool {
		let hands_ok = self.players.values().all(|p| match &p.cards {
			Some(cards) => p.id == self.you && cards.len() == p.num_cards,
			None => true,
		});

		hands_ok && (self.pending_block.is_none() || self.pending_action.is_some())
	}

	pub fn digest(&self) -> u64 {
		let mut hasher = AHasher::default();
		self.hash(&mut hasher);
		hasher.finish()
	}
}
