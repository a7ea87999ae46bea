use super::view::{GameView, Player, Relation};

/** Rotates the canonical turn order so that it starts at the viewer, keeping the direction of play. */
pub fn rotate(turn_order: &[String], viewer: &str) -> Vec<String> {
	match turn_order.iter().position(|id| id == viewer) {
		Some(start) => turn_order[start..].iter().chain(&turn_order[..start]).cloned().collect(),
		None => turn_order.to_vec(),
	}
}

/** Returns all player ids between the start (exclusive) and end (exclusive) in play order. */
pub fn players_between<'a>(turn_order: &'a [String], start: &str, end: &str) -> Vec<&'a str> {
	let num_players = turn_order.len();
	let (Some(start), Some(end)) = (turn_order.iter().position(|id| id == start), turn_order.iter().position(|id| id == end)) else {
		return Vec::new();
	};
	let gap = (end + num_players - start) % num_players;

	(1..gap).map(|inc| turn_order[(start + inc) % num_players].as_str()).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Seat<'a> {
	pub player: &'a Player,
	/** None when the viewer is spectating. */
	pub relation: Option<Relation>,
	pub acting: bool,
}

/**
 * Resolves the viewer-relative seating. Before the game starts there is no turn order,
 * so players are listed in join order instead.
 *
 * Returns None if the turn order references a player the snapshot doesn't contain.
 */
pub fn seats(view: &GameView) -> Option<Vec<Seat<'_>>> {
	let order = if view.turn_order.is_empty() {
		view.players.keys().cloned().collect()
	}
	else {
		rotate(&view.turn_order, &view.you)
	};

	order.iter().map(|id| {
		let player = view.player(id)?;
		Some(Seat {
			player,
			relation: view.relation(id),
			acting: view.current_player.as_deref() == Some(id.as_str()),
		})
	}).collect()
}
