use coup_client::basics::seating::{players_between, rotate, seats};
use coup_client::basics::view::{Phase, Relation};

use crate::util::{setup, kill, Player, TestOptions};

pub mod util;

fn ids(players: &[Player]) -> Vec<String> {
	players.iter().map(|p| p.id()).collect()
}

#[test]
fn it_rotates_to_the_viewer() {
	let order = ids(&[Player::Alice, Player::Bob, Player::Cathy, Player::Donald]);

	assert_eq!(rotate(&order, "p3"), ids(&[Player::Cathy, Player::Donald, Player::Alice, Player::Bob]));
	assert_eq!(rotate(&order, "p1"), order);

	// Rotating an already rotated order changes nothing
	let rotated = rotate(&order, "p4");
	assert_eq!(rotate(&rotated, "p4"), rotated);
}

#[test]
fn it_keeps_the_canonical_order_for_spectators() {
	let order = ids(&[Player::Alice, Player::Bob, Player::Cathy, Player::Donald]);
	assert_eq!(rotate(&order, "spectator"), order);

	let view = setup(TestOptions { viewer: None, ..TestOptions::default() });
	let seats = seats(&view).unwrap();

	assert_eq!(seats.iter().map(|s| s.player.id.as_str()).collect::<Vec<_>>(), vec!["p1", "p2", "p3", "p4"]);
	assert!(seats.iter().all(|s| s.relation.is_none()));
}

#[test]
fn it_labels_relations() {
	let view = setup(TestOptions { num_players: 6, viewer: Some(Player::Bob), current: Some(Player::Emily), ..TestOptions::default() });
	let seats = seats(&view).unwrap();

	let names = seats.iter().map(|s| s.player.name.as_str()).collect::<Vec<_>>();
	assert_eq!(names, vec!["Bob", "Cathy", "Donald", "Emily", "Frank", "Alice"]);

	let relations = seats.iter().map(|s| s.relation).collect::<Vec<_>>();
	assert_eq!(relations, vec![
		Some(Relation::You),
		Some(Relation::Opponent),
		Some(Relation::Teammate),
		Some(Relation::Opponent),
		Some(Relation::Teammate),
		Some(Relation::Opponent),
	]);

	assert_eq!(seats.iter().filter(|s| s.acting).map(|s| s.player.name.as_str()).collect::<Vec<_>>(), vec!["Emily"]);
}

#[test]
fn it_keeps_eliminated_players_seated() {
	let view = setup(TestOptions { init: Box::new(|view| kill(view, Player::Bob)), ..TestOptions::default() });
	let seats = seats(&view).unwrap();

	assert_eq!(seats.len(), 4);
	assert!(!seats[1].player.alive);
}

#[test]
fn it_refuses_dangling_seats() {
	let view = setup(TestOptions { init: Box::new(|view| view.turn_order.push("p9".to_string())), ..TestOptions::default() });
	assert!(seats(&view).is_none());
}

#[test]
fn it_seats_the_lobby_in_join_order() {
	let view = setup(TestOptions { phase: Phase::Lobby, viewer: Some(Player::Cathy), ..TestOptions::default() });
	let seats = seats(&view).unwrap();

	assert_eq!(seats.len(), 4);
	assert!(seats.iter().all(|s| !s.acting));
}

#[test]
fn it_finds_players_in_between() {
	let order = ids(&[Player::Alice, Player::Bob, Player::Cathy, Player::Donald]);

	assert_eq!(players_between(&order, "p2", "p1"), vec!["p3", "p4"]);
	assert_eq!(players_between(&order, "p1", "p2"), Vec::<&str>::new());
	assert_eq!(players_between(&order, "p1", "p9"), Vec::<&str>::new());
}
