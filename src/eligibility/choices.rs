use crate::basics::narration::{refer, Viewpoint};
use crate::basics::selection::Selection;
use crate::basics::view::GameView;

use super::{Affordances, LossControls, NoticeKind, SwapControls};

pub(super) fn swap_controls(view: &GameView, selection: &Selection) -> Affordances {
	let Some(chooser) = view.current_player.as_deref() else {
		return Affordances::Unrenderable;
	};

	if chooser != view.you {
		return match refer(view, Viewpoint::Viewer(&view.you), chooser) {
			Some(chooser) => Affordances::notice(NoticeKind::WaitingForExchange { chooser }, None),
			None => Affordances::Unrenderable,
		};
	}

	let (Some(me), Some(pool)) = (view.me(), &view.exchange_cards) else {
		return Affordances::Unrenderable;
	};

	let selected = selection.keep.iter()
		.copied()
		.filter(|&i| i < pool.len())
		.take(me.num_cards)
		.collect();

	Affordances::Swap(SwapControls { pool: pool.clone(), keep_count: me.num_cards, selected })
}

pub(super) fn loss_controls(view: &GameView, selection: &Selection) -> Affordances {
	let Some(chooser) = view.loss_choice_player_id.as_deref() else {
		return Affordances::Unrenderable;
	};

	if chooser != view.you {
		return match refer(view, Viewpoint::Viewer(&view.you), chooser) {
			Some(chooser) => Affordances::notice(NoticeKind::WaitingForLoss { chooser }, None),
			None => Affordances::Unrenderable,
		};
	}

	let (Some(_), Some(cards)) = (view.me(), &view.loss_choice_cards) else {
		return Affordances::Unrenderable;
	};

	Affordances::Loss(LossControls {
		cards: cards.clone(),
		selected: selection.loss.filter(|&i| i < cards.len()),
	})
}
