use super::view::{GameView, PendingAction, Relation};

/** Whose eyes a sentence is written for. */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewpoint<'a> {
	/** Plain player names, as in the game log. */
	Neutral,
	/** Relative to the given player: "you", "your teammate X", "Opponent X". */
	Viewer(&'a str),
}

struct Mention {
	text: String,
	second_person: bool,
}

impl Mention {
	fn subject(&self) -> String {
		let mut chars = self.text.chars();
		match chars.next() {
			Some(first) => first.to_uppercase().chain(chars).collect(),
			None => String::new(),
		}
	}

	fn possessive(&self) -> String {
		if self.second_person { "your".to_string() } else { format!("{}'s", self.text) }
	}

	fn attempt(&self) -> &'static str {
		if self.second_person { "attempt" } else { "attempts" }
	}
}

fn mention(view: &GameView, viewpoint: Viewpoint, id: &str) -> Option<Mention> {
	let player = view.player(id)?;
	let plain = || Mention { text: player.name.clone(), second_person: false };

	let mention = match viewpoint {
		Viewpoint::Neutral => plain(),
		Viewpoint::Viewer(viewer) => {
			let Some(me) = view.player(viewer) else {
				return Some(plain());
			};

			if player.id == me.id {
				Mention { text: "you".to_string(), second_person: true }
			}
			else if player.team == me.team {
				Mention { text: format!("your teammate {}", player.name), second_person: false }
			}
			else {
				Mention { text: format!("Opponent {}", player.name), second_person: false }
			}
		}
	};
	Some(mention)
}

/** How a player is referred to from the given viewpoint, or None if the id is unknown. */
pub fn refer(view: &GameView, viewpoint: Viewpoint, id: &str) -> Option<String> {
	mention(view, viewpoint, id).map(|m| m.text)
}

/** The action label plus its target clause, e.g. "Captain steal from Bob". */
pub fn phrase(view: &GameView, viewpoint: Viewpoint, action: &PendingAction) -> Option<String> {
	let label = action.action.label();

	match (action.action.preposition(), &action.target_id) {
		(Some(preposition), Some(target_id)) => {
			let target = mention(view, viewpoint, target_id)?;
			Some(format!("{label} {preposition} {}", target.text))
		}
		_ => Some(label.to_string()),
	}
}

/**
 * Describes the pending contested action (and block, if any) in one sentence.
 * Returns None if nothing is pending or the snapshot references an unknown player.
 */
pub fn describe(view: &GameView, viewpoint: Viewpoint) -> Option<String> {
	let action = view.pending_action.as_ref()?;
	let actor = mention(view, viewpoint, &action.actor_id)?;
	let phrase = phrase(view, viewpoint, action)?;

	match &view.pending_block {
		Some(block) => {
			let blocker = mention(view, viewpoint, &block.blocker_id)?;
			Some(format!("{} {} to block {} {phrase}", blocker.subject(), blocker.attempt(), actor.possessive()))
		}
		None => Some(format!("{} {} {phrase}", actor.subject(), actor.attempt())),
	}
}

/** The neutral summary shown alongside the game log. */
pub fn summary(view: &GameView) -> Option<String> {
	describe(view, Viewpoint::Neutral)
}

/** The same sentence from the viewer's perspective, used as the prompt for the active phase. */
pub fn prompt(view: &GameView) -> Option<String> {
	describe(view, Viewpoint::Viewer(&view.you))
}

pub fn relation_label(relation: Option<Relation>) -> &'static str {
	match relation {
		Some(Relation::You) => "you",
		Some(Relation::Teammate) => "teammate",
		Some(Relation::Opponent) => "opponent",
		None => "",
	}
}
