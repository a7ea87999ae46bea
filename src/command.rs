use log::{debug, info, warn};
use std::sync::Arc;

use crate::basics::action::{ActionKind, BlockKind, PerformAction};
use crate::basics::narration;
use crate::basics::seating::{self, Seat};
use crate::basics::selection::Selection;
use crate::basics::view::GameView;
use crate::client::ClientError;
use crate::eligibility::{self, Affordances, Control};

/** Somewhere commands can be sent. */
pub trait Dispatcher {
	fn dispatch(&self, token: &str, action: &PerformAction) -> impl Future<Output = Result<Option<GameView>, ClientError>> + Send;
}

/** Something the player asked for. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
	Start,
	/** A player id or name. */
	Target(String),
	Act(ActionKind),
	Block(BlockKind),
	Allow,
	Challenge,
	Pass,
	Keep(usize),
	Lose(usize),
	Confirm,
	Show,
}

/** Everything needed to draw one screen. */
#[derive(Debug)]
pub struct Frame<'a> {
	pub view: &'a GameView,
	/** None while the snapshot is inconsistent. */
	pub seats: Option<Vec<Seat<'a>>>,
	pub summary: Option<String>,
	pub affordances: Affordances,
	pub banner: Option<&'a str>,
}

/**
 * Owns the latest view and the local selection for one session, and turns player
 * intents into commands. Never edits the view itself: only server responses replace it.
 */
pub struct CoupClient<D> {
	dispatcher: D,
	token: String,
	view: Option<Arc<GameView>>,
	pub selection: Selection,
	banner: Option<String>,
}

impl<D: Dispatcher> CoupClient<D> {
	pub fn new(dispatcher: D, token: String) -> Self {
		Self { dispatcher, token, view: None, selection: Selection::default(), banner: None }
	}

	pub fn view(&self) -> Option<&GameView> {
		self.view.as_deref()
	}

	pub fn banner(&self) -> Option<&str> {
		self.banner.as_deref()
	}

	pub fn apply_view(&mut self, view: Arc<GameView>) {
		let prev = self.view.as_deref();

		if prev.is_none_or(|prev| prev.phase != view.phase) {
			info!("Phase: {:?}", view.phase);
			self.banner = None;
		}

		if !view.is_consistent() {
			warn!("Received an inconsistent view of game {}", view.game_id);
		}

		self.selection.reconcile(prev, &view);
		self.view = Some(view);
	}

	pub fn affordances(&self) -> Affordances {
		match &self.view {
			Some(view) => eligibility::affordances(view, &self.selection),
			None => Affordances::Unrenderable,
		}
	}

	pub fn frame(&self) -> Option<Frame<'_>> {
		let view = self.view.as_deref()?;

		Some(Frame {
			view,
			seats: seating::seats(view),
			summary: narration::summary(view),
			affordances: eligibility::affordances(view, &self.selection),
			banner: self.banner.as_deref(),
		})
	}

	/** Handles one intent. Returns whether anything worth redrawing changed. */
	pub async fn handle_intent(&mut self, intent: Intent) -> bool {
		let Some(view) = self.view.clone() else {
			debug!("No view yet, ignoring {intent:?}");
			return false;
		};

		match intent {
			Intent::Show => true,
			Intent::Target(who) => match view.find_player(&who) {
				Some(player) => self.selection.select_target(&view, &player.id),
				None => {
					warn!("No player named {who}.");
					false
				}
			},
			Intent::Keep(index) => self.selection.toggle_keep(&view, index),
			Intent::Lose(index) => self.selection.pick_loss(&view, index),
			Intent::Start => self.perform(Control::StartGame, PerformAction::Start).await,
			Intent::Act(action) => {
				let target = if action.needs_target() { self.selection.target.clone() } else { None };
				self.perform(Control::Act(action), PerformAction::Act { action, target }).await
			}
			Intent::Block(block) => self.perform(Control::Block(block), PerformAction::Block(block)).await,
			Intent::Allow => self.perform(Control::Allow, PerformAction::NoBlock).await,
			Intent::Challenge => self.perform(Control::Challenge, PerformAction::Challenge).await,
			Intent::Pass => self.perform(Control::Pass, PerformAction::NoChallenge).await,
			Intent::Confirm => {
				let affordances = self.affordances();

				if affordances.allows(&Control::ConfirmExchange) {
					let keep = self.selection.keep.clone();
					self.perform(Control::ConfirmExchange, PerformAction::FinishExchange { keep }).await
				}
				else if let Some(index) = self.selection.loss.filter(|_| affordances.allows(&Control::ConfirmLoss)) {
					self.perform(Control::ConfirmLoss, PerformAction::ChooseLoss { index }).await
				}
				else {
					warn!("Nothing to confirm yet.");
					false
				}
			}
		}
	}

	/** Sends the command if the current affordances allow the control behind it. */
	async fn perform(&mut self, control: Control, action: PerformAction) -> bool {
		if !self.affordances().allows(&control) {
			warn!("That move isn't available right now.");
			return false;
		}

		if let Some(view) = &self.view {
			info!("Sending: {}", action.fmt(view));
		}

		match self.dispatcher.dispatch(&self.token, &action).await {
			Ok(view) => {
				self.banner = None;

				if let PerformAction::Act { target: Some(_), .. } = &action {
					self.selection.clear_target();
				}

				if let Some(view) = view {
					self.apply_view(Arc::new(view));
				}
				true
			}
			Err(e) => {
				warn!("{} failed: {e}", action.endpoint());
				self.banner = Some(e.to_string());
				true
			}
		}
	}
}
