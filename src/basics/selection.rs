use log::debug;

use super::view::{GameView, Phase, Relation};

/**
 * Ephemeral, client-owned selection state. Never persisted and never sent on its own;
 * it only shapes the commands built from it.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
	/** Only ever set during action selection. */
	pub target: Option<String>,
	/** Exchange pool indices to keep, in the order they were picked. */
	pub keep: Vec<usize>,
	pub loss: Option<usize>,
}

/** A living opponent of the viewer. */
pub fn is_targetable(view: &GameView, id: &str) -> bool {
	view.relation(id) == Some(Relation::Opponent) && view.player(id).is_some_and(|p| p.has_influence())
}

/** The parts of a snapshot that, once changed, invalidate every selection. */
fn context(view: &GameView) -> (&str, Phase, Option<&str>, Option<&str>) {
	(&view.game_id, view.phase, view.current_player.as_deref(), view.loss_choice_player_id.as_deref())
}

impl Selection {
	pub fn is_empty(&self) -> bool {
		self.target.is_none() && self.keep.is_empty() && self.loss.is_none()
	}

	pub fn reset(&mut self) {
		*self = Self::default();
	}

	pub fn clear_target(&mut self) {
		self.target = None;
	}

	/**
	 * Toggles the selected target. Selecting the held target clears it, selecting another replaces it.
	 * Returns false (leaving the state untouched) if the seat can't be targeted right now.
	 */
	pub fn select_target(&mut self, view: &GameView, id: &str) -> bool {
		if view.phase != Phase::ActionSelection || !is_targetable(view, id) {
			debug!("Rejected target selection of {id}");
			return false;
		}

		if self.target.as_deref() == Some(id) {
			self.target = None;
		}
		else {
			self.target = Some(id.to_string());
		}
		true
	}

	/** Toggles a card in the exchange pool. Picking more cards than the viewer may keep is a no-op. */
	pub fn toggle_keep(&mut self, view: &GameView, index: usize) -> bool {
		if view.phase != Phase::SwapChoice || !view.is_my_turn() {
			return false;
		}

		let (Some(pool), Some(me)) = (&view.exchange_cards, view.me()) else {
			return false;
		};

		if index >= pool.len() {
			return false;
		}

		if let Some(pos) = self.keep.iter().position(|&i| i == index) {
			self.keep.remove(pos);
			return true;
		}

		if self.keep.len() >= me.num_cards {
			debug!("Already keeping {} cards, ignoring {index}", me.num_cards);
			return false;
		}

		self.keep.push(index);
		true
	}

	/** Toggles the card to give up while the viewer is choosing a loss. */
	pub fn pick_loss(&mut self, view: &GameView, index: usize) -> bool {
		if view.phase != Phase::LossChoice || view.loss_choice_player_id.as_deref() != Some(view.you.as_str()) {
			return false;
		}

		match &view.loss_choice_cards {
			Some(cards) if index < cards.len() => {
				self.loss = if self.loss == Some(index) { None } else { Some(index) };
				true
			}
			_ => false,
		}
	}

	/**
	 * Brings the selection in line with a freshly received view. Any phase or turn change resets
	 * everything; otherwise choices that the new snapshot no longer allows are dropped.
	 */
	pub fn reconcile(&mut self, previous: Option<&GameView>, view: &GameView) {
		if previous.is_none_or(|prev| context(prev) != context(view)) {
			self.reset();
			return;
		}

		if self.target.as_deref().is_some_and(|id| view.phase != Phase::ActionSelection || !is_targetable(view, id)) {
			self.target = None;
		}

		let pool_len = view.exchange_cards.as_ref().map_or(0, Vec::len);
		let keep_count = view.me().map_or(0, |me| me.num_cards);
		self.keep.retain(|&i| i < pool_len);
		self.keep.truncate(keep_count);

		let loss_len = view.loss_choice_cards.as_ref().map_or(0, Vec::len);
		if self.loss.is_some_and(|i| i >= loss_len) {
			self.loss = None;
		}
	}
}
