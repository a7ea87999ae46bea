#![allow(dead_code)]

use std::collections::BTreeMap;

use coup_client::basics::action::{ActionKind, BlockKind};
use coup_client::basics::selection::Selection;
use coup_client::basics::view::{self, GameView, Mode, PendingAction, PendingBlock, Phase, Role, Team};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Player {
	Alice,Bob,Cathy,Donald,Emily,Frank
}

impl Player {
	pub fn id(self) -> String {
		format!("p{}", self as usize + 1)
	}

	/** Seats alternate teams, so Alice and Cathy play against Bob and Donald. */
	pub fn team(self) -> Team {
		if self as usize % 2 == 0 { Team::A } else { Team::B }
	}
}

static NAMES: [&str; 6] = ["Alice", "Bob", "Cathy", "Donald", "Emily", "Frank"];
static PLAYERS: [Player; 6] = [Player::Alice, Player::Bob, Player::Cathy, Player::Donald, Player::Emily, Player::Frank];

pub const SPECTATOR: &str = "spectator";

pub struct TestOptions {
	pub mode: Mode,
	pub phase: Phase,
	pub num_players: usize,
	/** None watches as a spectator. */
	pub viewer: Option<Player>,
	pub current: Option<Player>,
	pub coins: u32,
	pub init: Box<dyn Fn(&mut GameView)>,
}

impl Default for TestOptions {
	fn default() -> Self {
		Self {
			mode: Mode::Normal,
			phase: Phase::ActionSelection,
			num_players: 4,
			viewer: Some(Player::Alice),
			current: Some(Player::Alice),
			coins: 2,
			init: Box::new(|_| {}),
		}
	}
}

pub fn setup(test_options: TestOptions) -> GameView {
	let _ = coup_client::logger::init(LevelFilter::Warn);

	let seated = &PLAYERS[..test_options.num_players];
	let you = test_options.viewer.map_or(SPECTATOR.to_string(), Player::id);

	let players = seated.iter().map(|&player| {
		let id = player.id();
		let cards = (id == you).then(|| vec![Role::Duke, Role::Contessa]);

		(id.clone(), view::Player {
			id,
			name: NAMES[player as usize].to_string(),
			team: player.team(),
			coins: test_options.coins,
			alive: true,
			num_cards: 2,
			cards,
		})
	}).collect::<BTreeMap<_, _>>();

	let in_lobby = test_options.phase == Phase::Lobby;

	let mut view = GameView {
		game_id: "g1".to_string(),
		mode: test_options.mode,
		phase: test_options.phase,
		you,
		current_player: if in_lobby { None } else { test_options.current.map(Player::id) },
		turn_order: if in_lobby { Vec::new() } else { seated.iter().map(|p| p.id()).collect() },
		players,
		winner_team: None,
		logs: Vec::new(),
		pending_action: None,
		pending_block: None,
		exchange_pool_size: if test_options.mode == Mode::Super { 3 } else { 2 },
		exchange_cards: None,
		loss_choice_player_id: None,
		loss_choice_cards: None,
		deck_size: 15 - 2 * test_options.num_players,
		revealed_cards: Vec::new(),
	};

	// Apply init hook, overwrite base view
	(test_options.init)(&mut view);

	view
}

pub fn pending(view: &mut GameView, actor: Player, action: ActionKind, target: Option<Player>) {
	view.pending_action = Some(PendingAction { actor_id: actor.id(), action, target_id: target.map(Player::id) });
}

pub fn block(view: &mut GameView, blocker: Player, block_type: BlockKind) {
	view.pending_block = Some(PendingBlock { blocker_id: blocker.id(), block_type });
}

pub fn set_coins(view: &mut GameView, player: Player, coins: u32) {
	if let Some(p) = view.players.get_mut(&player.id()) {
		p.coins = coins;
	}
}

pub fn set_cards(view: &mut GameView, player: Player, num_cards: usize) {
	if let Some(p) = view.players.get_mut(&player.id()) {
		p.num_cards = num_cards;
		p.alive = num_cards > 0;

		if let Some(cards) = &mut p.cards {
			cards.truncate(num_cards);
		}
	}
}

pub fn kill(view: &mut GameView, player: Player) {
	set_cards(view, player, 0);
}

pub fn targeting(player: Player) -> Selection {
	Selection { target: Some(player.id()), ..Selection::default() }
}
