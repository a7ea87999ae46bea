use crate::basics::action::{ActionKind, BlockKind};
use crate::basics::selection::Selection;
use crate::basics::view::{GameView, Phase, Role, Team};

mod actions;
mod blocks;
mod challenges;
mod choices;

/** Why an action can't be taken right now. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disabled {
	MustCoup,
	NeedsTwoCards,
	NotEnoughCoins,
	NeedsTarget,
	TargetHasNoCoins,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOption {
	pub action: ActionKind,
	pub cost: u32,
	pub needs_target: bool,
	pub disabled: Option<Disabled>,
}

impl ActionOption {
	#[inline]
	pub fn enabled(&self) -> bool {
		self.disabled.is_none()
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMenu {
	pub options: Vec<ActionOption>,
	/** Living opponents, in seating order. */
	pub targets: Vec<String>,
	/** The selected target, if it is still valid. */
	pub target: Option<String>,
	pub forced_coup: bool,
}

impl ActionMenu {
	pub fn option(&self, action: ActionKind) -> Option<&ActionOption> {
		self.options.iter().find(|o| o.action == action)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LobbyControls {
	pub players: usize,
	pub balanced: bool,
	pub can_start: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockControls {
	pub prompt: String,
	/** May be empty, in which case only letting the action through is offered. */
	pub options: Vec<BlockKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Claim {
	Action(ActionKind),
	Block(BlockKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeControls {
	pub prompt: String,
	pub claimant: String,
	pub claim: Claim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapControls {
	pub pool: Vec<Role>,
	pub keep_count: usize,
	pub selected: Vec<usize>,
}

impl SwapControls {
	pub fn can_confirm(&self) -> bool {
		self.selected.len() == self.keep_count
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LossControls {
	pub cards: Vec<Role>,
	pub selected: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
	WaitingForTurn { actor: String },
	/** The viewer made the claim and waits on everyone else. */
	AwaitingResponses,
	/** A teammate made the claim; teams never undermine each other. */
	TeammateClaim { claimant: String },
	TargetDecides { target: String },
	WaitingForExchange { chooser: String },
	WaitingForLoss { chooser: String },
	Eliminated,
	Spectating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub kind: NoticeKind,
	pub prompt: Option<String>,
}

/** Everything the viewer can see and do in the current phase. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Affordances {
	Lobby(LobbyControls),
	Actions(ActionMenu),
	Block(BlockControls),
	Challenge(ChallengeControls),
	Swap(SwapControls),
	Loss(LossControls),
	/** Info only, no controls. */
	Notice(Notice),
	GameOver { winner: Option<Team> },
	/** The snapshot references players it doesn't contain; wait for the next one. */
	Unrenderable,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Control {
	StartGame,
	Target(String),
	Act(ActionKind),
	Block(BlockKind),
	Allow,
	Challenge,
	Pass,
	ToggleKeep(usize),
	ConfirmExchange,
	PickLoss(usize),
	ConfirmLoss,
}

impl Affordances {
	fn notice(kind: NoticeKind, prompt: Option<String>) -> Self {
		Affordances::Notice(Notice { kind, prompt })
	}

	/** The controls that are currently enabled. */
	pub fn controls(&self) -> Vec<Control> {
		match self {
			Affordances::Lobby(lobby) => {
				if lobby.can_start { vec![Control::StartGame] } else { Vec::new() }
			}
			Affordances::Actions(menu) => {
				let targets = menu.targets.iter().map(|id| Control::Target(id.clone()));
				let actions = menu.options.iter().filter(|o| o.enabled()).map(|o| Control::Act(o.action));
				targets.chain(actions).collect()
			}
			Affordances::Block(block) => {
				block.options.iter().map(|&b| Control::Block(b)).chain([Control::Allow]).collect()
			}
			Affordances::Challenge(_) => vec![Control::Challenge, Control::Pass],
			Affordances::Swap(swap) => {
				let full = swap.selected.len() >= swap.keep_count;
				let mut controls = (0..swap.pool.len())
					.filter(|i| !full || swap.selected.contains(i))
					.map(Control::ToggleKeep)
					.collect::<Vec<_>>();

				if swap.can_confirm() {
					controls.push(Control::ConfirmExchange);
				}
				controls
			}
			Affordances::Loss(loss) => {
				let mut controls = (0..loss.cards.len()).map(Control::PickLoss).collect::<Vec<_>>();
				if loss.selected.is_some() {
					controls.push(Control::ConfirmLoss);
				}
				controls
			}
			Affordances::Notice(_) | Affordances::GameOver { .. } | Affordances::Unrenderable => Vec::new(),
		}
	}

	pub fn allows(&self, control: &Control) -> bool {
		self.controls().contains(control)
	}
}

/** Lobby sizes that seat two equal teams. */
pub const VALID_PLAYER_COUNTS: [usize; 2] = [4, 6];

fn lobby(view: &GameView) -> Affordances {
	let players = view.players.len();

	Affordances::Lobby(LobbyControls {
		players,
		balanced: view.team_size(Team::A) == view.team_size(Team::B),
		can_start: VALID_PLAYER_COUNTS.contains(&players),
	})
}

/**
 * Derives the viewer's affordances from a snapshot and the local selection.
 * Pure: the same inputs always give the same output.
 */
pub fn affordances(view: &GameView, selection: &Selection) -> Affordances {
	match view.phase {
		Phase::Lobby => lobby(view),
		Phase::ActionSelection => actions::action_menu(view, selection),
		Phase::BlockWindow => blocks::block_controls(view),
		Phase::ChallengeWindow => challenges::challenge_controls(view),
		Phase::SwapChoice => choices::swap_controls(view, selection),
		Phase::LossChoice => choices::loss_controls(view, selection),
		Phase::GameOver => Affordances::GameOver { winner: view.winner_team },
	}
}
