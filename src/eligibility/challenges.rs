use crate::basics::narration::{self, refer, Viewpoint};
use crate::basics::view::GameView;

use super::{Affordances, ChallengeControls, Claim, NoticeKind};

pub(super) fn challenge_controls(view: &GameView) -> Affordances {
	let Some(action) = &view.pending_action else {
		return Affordances::Unrenderable;
	};

	// A pending block is challenged before the action it blocks
	let (claimant_id, claim) = match &view.pending_block {
		Some(block) => (&block.blocker_id, Claim::Block(block.block_type)),
		None => (&action.actor_id, Claim::Action(action.action)),
	};

	let (Some(prompt), Some(claimant)) = (narration::prompt(view), view.player(claimant_id)) else {
		return Affordances::Unrenderable;
	};

	let Some(me) = view.me() else {
		return Affordances::notice(NoticeKind::Spectating, Some(prompt));
	};

	if me.id == claimant.id {
		return Affordances::notice(NoticeKind::AwaitingResponses, Some(prompt));
	}

	let claimant_ref = refer(view, Viewpoint::Viewer(&view.you), &claimant.id).unwrap_or_default();

	if me.team == claimant.team {
		return Affordances::notice(NoticeKind::TeammateClaim { claimant: claimant_ref }, Some(prompt));
	}

	if !me.has_influence() {
		return Affordances::notice(NoticeKind::Eliminated, Some(prompt));
	}

	Affordances::Challenge(ChallengeControls { prompt, claimant: claimant_ref, claim })
}
