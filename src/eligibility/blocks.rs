use crate::basics::action::BlockDecider;
use crate::basics::narration::{self, refer, Viewpoint};
use crate::basics::view::GameView;

use super::{Affordances, BlockControls, NoticeKind};

pub(super) fn block_controls(view: &GameView) -> Affordances {
	let Some(pending) = &view.pending_action else {
		return Affordances::Unrenderable;
	};

	// Also verifies that the actor and target exist
	let Some(prompt) = narration::prompt(view) else {
		return Affordances::Unrenderable;
	};

	let Some(actor) = view.player(&pending.actor_id) else {
		return Affordances::Unrenderable;
	};

	let Some(me) = view.me() else {
		return Affordances::notice(NoticeKind::Spectating, Some(prompt));
	};

	if me.id == actor.id {
		return Affordances::notice(NoticeKind::AwaitingResponses, Some(prompt));
	}

	if me.team == actor.team {
		let claimant = refer(view, Viewpoint::Viewer(&view.you), &actor.id).unwrap_or_default();
		return Affordances::notice(NoticeKind::TeammateClaim { claimant }, Some(prompt));
	}

	if !me.has_influence() {
		return Affordances::notice(NoticeKind::Eliminated, Some(prompt));
	}

	let action = pending.action;

	if action.block_decider() == BlockDecider::Target {
		let Some(target) = pending.target_id.as_deref().and_then(|id| view.player(id)) else {
			return Affordances::Unrenderable;
		};

		if target.id != me.id {
			let target = refer(view, Viewpoint::Viewer(&view.you), &target.id).unwrap_or_default();
			return Affordances::notice(NoticeKind::TargetDecides { target }, Some(prompt));
		}
	}

	let options = action.block_options(view.mode).iter()
		.copied()
		.filter(|block| !block.needs_two_cards() || me.num_cards >= 2)
		.collect();

	Affordances::Block(BlockControls { prompt, options })
}
