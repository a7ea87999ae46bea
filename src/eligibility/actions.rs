use crate::basics::action::ActionKind;
use crate::basics::narration::{refer, Viewpoint};
use crate::basics::selection::{is_targetable, Selection};
use crate::basics::view::{GameView, Player};

use super::{ActionMenu, ActionOption, Affordances, Disabled, NoticeKind};

fn check(action: ActionKind, me: &Player, target: Option<&Player>, forced_coup: bool) -> Option<Disabled> {
	if forced_coup && !action.is_coup() {
		return Some(Disabled::MustCoup);
	}

	if action.needs_two_cards() && me.num_cards < 2 {
		return Some(Disabled::NeedsTwoCards);
	}

	if me.coins < action.cost() {
		return Some(Disabled::NotEnoughCoins);
	}

	if action.needs_target() {
		let Some(target) = target else {
			return Some(Disabled::NeedsTarget);
		};

		if action.is_steal() && target.coins == 0 {
			return Some(Disabled::TargetHasNoCoins);
		}
	}
	None
}

pub(super) fn action_menu(view: &GameView, selection: &Selection) -> Affordances {
	let Some(current) = view.current_player.as_deref() else {
		return Affordances::Unrenderable;
	};

	if !view.is_my_turn() {
		return match refer(view, Viewpoint::Viewer(&view.you), current) {
			Some(actor) => Affordances::notice(NoticeKind::WaitingForTurn { actor }, None),
			None => Affordances::Unrenderable,
		};
	}

	let Some(me) = view.me() else {
		return Affordances::Unrenderable;
	};

	if !me.has_influence() {
		return Affordances::notice(NoticeKind::Eliminated, None);
	}

	// A target that died or was never valid counts as no selection
	let target = selection.target.as_deref()
		.filter(|id| is_targetable(view, id))
		.and_then(|id| view.player(id));

	let forced_coup = me.coins >= view.mode.forced_coup_threshold();

	let options = ActionKind::ALL.into_iter()
		.filter(|action| action.available_in(view.mode))
		.map(|action| ActionOption {
			action,
			cost: action.cost(),
			needs_target: action.needs_target(),
			disabled: check(action, me, target, forced_coup),
		})
		.collect();

	let targets = view.turn_order.iter().filter(|id| is_targetable(view, id)).cloned().collect();

	Affordances::Actions(ActionMenu {
		options,
		targets,
		target: target.map(|t| t.id.clone()),
		forced_coup,
	})
}
