use coup_client::basics::selection::Selection;
use coup_client::basics::view::{GameView, Mode, Phase, Role};
use coup_client::eligibility::{affordances, Affordances, Control, NoticeKind, SwapControls};

use crate::util::{setup, Player, TestOptions};

pub mod util;

fn swap_choice(current: Player) -> GameView {
	setup(TestOptions {
		phase: Phase::SwapChoice,
		current: Some(current),
		init: Box::new(|view| view.exchange_cards = Some(vec![Role::Duke, Role::Captain, Role::Assassin])),
		..TestOptions::default()
	})
}

fn swap(view: &GameView, selection: &Selection) -> SwapControls {
	match affordances(view, selection) {
		Affordances::Swap(swap) => swap,
		other => panic!("Expected swap controls, got {other:?}"),
	}
}

#[test]
fn it_keeps_exactly_as_many_cards_as_held() {
	let view = swap_choice(Player::Alice);
	let mut selection = Selection::default();

	assert_eq!(swap(&view, &selection).keep_count, 2);
	assert!(!swap(&view, &selection).can_confirm());

	assert!(selection.toggle_keep(&view, 0));
	assert!(!affordances(&view, &selection).allows(&Control::ConfirmExchange));

	assert!(selection.toggle_keep(&view, 2));
	assert!(affordances(&view, &selection).allows(&Control::ConfirmExchange));

	// A third pick is a no-op
	assert!(!selection.toggle_keep(&view, 1));
	assert_eq!(selection.keep, vec![0, 2]);
	assert_eq!(swap(&view, &selection).selected, vec![0, 2]);

	// Once full, only deselecting is offered
	let controls = affordances(&view, &selection).controls();
	assert_eq!(controls, vec![Control::ToggleKeep(0), Control::ToggleKeep(2), Control::ConfirmExchange]);

	assert!(selection.toggle_keep(&view, 0));
	assert_eq!(selection.keep, vec![2]);
	assert!(!affordances(&view, &selection).allows(&Control::ConfirmExchange));
}

#[test]
fn it_rejects_out_of_range_picks() {
	let view = swap_choice(Player::Alice);
	let mut selection = Selection::default();

	assert!(!selection.toggle_keep(&view, 3));
	assert!(selection.is_empty());
}

#[test]
fn it_waits_for_someone_elses_exchange() {
	let view = swap_choice(Player::Bob);
	let mut selection = Selection::default();

	assert!(!selection.toggle_keep(&view, 0));
	assert!(matches!(affordances(&view, &selection),
		Affordances::Notice(notice) if notice.kind == NoticeKind::WaitingForExchange { chooser: "Opponent Bob".to_string() }));
}

#[test]
fn it_keeps_more_cards_in_super_mode() {
	let view = setup(TestOptions {
		mode: Mode::Super,
		phase: Phase::SwapChoice,
		init: Box::new(|view| {
			view.exchange_cards = Some(vec![Role::Duke, Role::Contessa, Role::Captain, Role::Assassin, Role::Ambassador]);
			if let Some(me) = view.players.get_mut("p1") {
				me.num_cards = 3;
				me.cards = Some(vec![Role::Duke, Role::Contessa, Role::Captain]);
			}
		}),
		..TestOptions::default()
	});
	let mut selection = Selection::default();

	for i in [4, 1, 0] {
		assert!(selection.toggle_keep(&view, i));
	}
	assert!(!selection.toggle_keep(&view, 2));
	assert!(swap(&view, &selection).can_confirm());
}

#[test]
fn it_waits_for_missing_pool() {
	let mut view = swap_choice(Player::Alice);
	view.exchange_cards = None;

	assert_eq!(affordances(&view, &Selection::default()), Affordances::Unrenderable);
}

fn loss_choice(chooser: Player) -> GameView {
	let mut view = setup(TestOptions { phase: Phase::LossChoice, current: Some(Player::Bob), ..TestOptions::default() });
	view.loss_choice_player_id = Some(chooser.id());
	if chooser == Player::Alice {
		view.loss_choice_cards = Some(vec![Role::Duke, Role::Contessa]);
	}
	view
}

#[test]
fn it_picks_one_card_to_lose() {
	let view = loss_choice(Player::Alice);
	let mut selection = Selection::default();

	assert!(!affordances(&view, &selection).allows(&Control::ConfirmLoss));

	assert!(selection.pick_loss(&view, 1));
	match affordances(&view, &selection) {
		Affordances::Loss(loss) => {
			assert_eq!(loss.cards, vec![Role::Duke, Role::Contessa]);
			assert_eq!(loss.selected, Some(1));
		}
		other => panic!("Expected loss controls, got {other:?}"),
	}
	assert!(affordances(&view, &selection).allows(&Control::ConfirmLoss));

	// Picking another card replaces the pick
	assert!(selection.pick_loss(&view, 0));
	assert_eq!(selection.loss, Some(0));

	assert!(!selection.pick_loss(&view, 2));
	assert_eq!(selection.loss, Some(0));
}

#[test]
fn it_waits_for_someone_elses_loss() {
	let view = loss_choice(Player::Donald);
	let mut selection = Selection::default();

	assert!(!selection.pick_loss(&view, 0));
	assert!(matches!(affordances(&view, &selection),
		Affordances::Notice(notice) if notice.kind == NoticeKind::WaitingForLoss { chooser: "Opponent Donald".to_string() }));
}
