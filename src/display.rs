use colored::Colorize;
use itertools::Itertools;

use crate::basics::narration::relation_label;
use crate::basics::seating::{players_between, Seat};
use crate::basics::view::{GameView, Player, Relation};
use crate::command::Frame;
use crate::eligibility::{Affordances, Claim, Disabled, Notice, NoticeKind};

const LOG_LINES: usize = 6;

fn seat_line(seat: &Seat) -> String {
	let player = seat.player;
	let cards = match &player.cards {
		Some(cards) => cards.iter().map(|c| format!("{c:?}")).join(", "),
		None => "?".repeat(player.num_cards),
	};
	let line = format!("{} {:<12} [{}] {:>2} coins  {}  ({})",
		if seat.acting { ">" } else { " " },
		player.name,
		format!("{:?}", player.team),
		player.coins,
		cards,
		relation_label(seat.relation));

	if !player.alive {
		line.dimmed().to_string()
	}
	else {
		match seat.relation {
			Some(Relation::You) => line.bold().to_string(),
			Some(Relation::Teammate) => line.green().to_string(),
			Some(Relation::Opponent) => line.red().to_string(),
			None => line,
		}
	}
}

fn disabled_reason(reason: Disabled) -> &'static str {
	match reason {
		Disabled::MustCoup => "must coup",
		Disabled::NeedsTwoCards => "needs two cards",
		Disabled::NotEnoughCoins => "not enough coins",
		Disabled::NeedsTarget => "pick a target",
		Disabled::TargetHasNoCoins => "target has no coins",
	}
}

fn notice_text(notice: &Notice) -> String {
	match &notice.kind {
		NoticeKind::WaitingForTurn { actor } => format!("Waiting for {actor} to act."),
		NoticeKind::AwaitingResponses => "Waiting for the other players to respond.".to_string(),
		NoticeKind::TeammateClaim { claimant } => format!("Teams don't undermine each other: {claimant}'s claim is up to the opponents."),
		NoticeKind::TargetDecides { target } => format!("Only {target} can decide whether to block."),
		NoticeKind::WaitingForExchange { chooser } => format!("Waiting for {chooser} to finish their exchange."),
		NoticeKind::WaitingForLoss { chooser } => format!("Waiting for {chooser} to choose a card to lose."),
		NoticeKind::Eliminated => "You have been eliminated.".to_string(),
		NoticeKind::Spectating => "Spectating.".to_string(),
	}
}

/** None when no turn is coming: spectators, eliminated viewers, or it is already the viewer's turn. */
fn turns_until_mine(view: &GameView) -> Option<usize> {
	let current = view.current_player.as_deref()?;
	if current == view.you || !view.me().is_some_and(Player::has_influence) || !view.turn_order.contains(&view.you) {
		return None;
	}

	let living = players_between(&view.turn_order, current, &view.you).into_iter()
		.filter(|id| view.player(id).is_some_and(|p| p.has_influence()))
		.count();
	Some(living + 1)
}

fn affordance_lines(frame: &Frame) -> Vec<String> {
	let view = frame.view;
	let name = |id: &str| view.player(id).map_or(id.to_string(), |p| p.name.clone());

	match &frame.affordances {
		Affordances::Lobby(lobby) => {
			let mut lines = vec![format!("Lobby: {} players joined (game {}).", lobby.players, view.game_id)];
			if !lobby.balanced {
				lines.push("Teams are uneven.".yellow().to_string());
			}
			if lobby.can_start {
				lines.push("[start]".to_string());
			}
			lines
		}
		Affordances::Actions(menu) => {
			let mut lines = vec!["Your turn.".bold().to_string()];
			if menu.forced_coup {
				lines.push("You have too many coins: you must coup.".yellow().to_string());
			}
			lines.push(format!("Targets: {}", menu.targets.iter().map(|id| {
				let text = name(id);
				if menu.target.as_deref() == Some(id.as_str()) { format!("*{text}*") } else { text }
			}).join(", ")));

			for option in &menu.options {
				let cost = if option.cost > 0 { format!(" ({} coins)", option.cost) } else { String::new() };
				lines.push(match option.disabled {
					None => format!("  [act {}]{cost}", option.action),
					Some(reason) => format!("  act {}{cost} - {}", option.action, disabled_reason(reason)).dimmed().to_string(),
				});
			}
			lines
		}
		Affordances::Block(block) => {
			let mut lines = vec![block.prompt.clone()];
			lines.extend(block.options.iter().map(|b| format!("  [block {}] as {}", b.claim().to_lowercase().replace(' ', "_"), b.claim())));
			lines.push("  [allow]".to_string());
			lines
		}
		Affordances::Challenge(challenge) => {
			let claim = match challenge.claim {
				Claim::Action(action) => action.label(),
				Claim::Block(block) => block.claim(),
			};
			vec![
				challenge.prompt.clone(),
				format!("Challenge {}'s {claim} claim?", challenge.claimant),
				"  [challenge] [pass]".to_string(),
			]
		}
		Affordances::Swap(swap) => {
			let mut lines = vec![format!("Keep {} of these cards:", swap.keep_count)];
			lines.extend(swap.pool.iter().enumerate().map(|(i, role)| {
				let mark = if swap.selected.contains(&i) { "x" } else { " " };
				format!("  [{mark}] keep {i}: {role:?}")
			}));
			if swap.can_confirm() {
				lines.push("  [confirm]".to_string());
			}
			lines
		}
		Affordances::Loss(loss) => {
			let mut lines = vec!["Choose a card to lose:".to_string()];
			lines.extend(loss.cards.iter().enumerate().map(|(i, role)| {
				let mark = if loss.selected == Some(i) { "x" } else { " " };
				format!("  [{mark}] lose {i}: {role:?}")
			}));
			if loss.selected.is_some() {
				lines.push("  [confirm]".to_string());
			}
			lines
		}
		Affordances::Notice(notice) => {
			let mut lines = notice.prompt.iter().cloned().collect::<Vec<_>>();
			lines.push(notice_text(notice).italic().to_string());
			if let Some(turns) = turns_until_mine(view).filter(|_| matches!(notice.kind, NoticeKind::WaitingForTurn { .. })) {
				lines.push(format!("Your turn in {turns}."));
			}
			lines
		}
		Affordances::GameOver { winner } => vec![match winner {
			Some(team) => format!("Game over. Team {team:?} wins!").bold().to_string(),
			None => "Game over.".bold().to_string(),
		}],
		Affordances::Unrenderable => vec!["Waiting for the server...".dimmed().to_string()],
	}
}

/** Draws a frame as plain terminal lines. */
pub fn render(frame: &Frame) -> String {
	let view = frame.view;
	let mut lines = Vec::new();

	lines.push(format!("== Game {} ({:?} mode) | deck {} | revealed: {}", view.game_id, view.mode, view.deck_size,
		view.revealed_cards.iter().map(|c| format!("{c:?}")).join(", ")));

	if let Some(seats) = &frame.seats {
		lines.extend(seats.iter().map(seat_line));
	}

	lines.extend(view.logs.iter().rev().take(LOG_LINES).rev().map(|log| format!("  {}", log.dimmed())));

	if let Some(summary) = &frame.summary {
		lines.push(summary.clone());
	}

	if view.exchange_pool_size > 0 {
		lines.push(format!("Exchange draws {} extra cards.", view.exchange_pool_size));
	}

	lines.extend(affordance_lines(frame));

	if let Some(banner) = frame.banner {
		lines.push(banner.red().bold().to_string());
	}

	lines.join("\n")
}
