use log::{debug, info};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::{spawn, sync::watch, time};

use crate::basics::view::GameView;
use crate::client::ClientError;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1200);

/** Somewhere a fresh view can be fetched from. */
pub trait StateSource: Send + Sync + 'static {
	fn fetch_state(&self, token: &str) -> impl Future<Output = Result<GameView, ClientError>> + Send;
}

pub type ViewReceiver = watch::Receiver<Option<Arc<GameView>>>;

struct PollSession {
	cancelled: Arc<AtomicBool>,
	in_flight: Arc<AtomicBool>,
}

/**
 * Keeps the latest view fresh by fetching it on a fixed interval.
 *
 * At most one session runs at a time, and each session has at most one request in flight:
 * the next fetch is only scheduled once the previous one settles.
 */
pub struct Poller<S> {
	source: Arc<S>,
	interval: Duration,
	views: Arc<watch::Sender<Option<Arc<GameView>>>>,
	session: Option<PollSession>,
	/** The token of the most recent session, kept after it stops. */
	token: Option<String>,
}

impl<S: StateSource> Poller<S> {
	pub fn new(source: Arc<S>, interval: Duration) -> Self {
		let (views, _) = watch::channel(None);
		Self { source, interval, views: Arc::new(views), session: None, token: None }
	}

	pub fn subscribe(&self) -> ViewReceiver {
		self.views.subscribe()
	}

	pub fn latest(&self) -> Option<Arc<GameView>> {
		self.views.borrow().clone()
	}

	pub fn is_active(&self) -> bool {
		self.session.is_some()
	}

	pub fn in_flight(&self) -> bool {
		self.session.as_ref().is_some_and(|s| s.in_flight.load(Ordering::SeqCst))
	}

	/** Starts polling with the given token, stopping any session already running. */
	pub fn start(&mut self, token: String) {
		self.stop();

		// Another player's view must not linger until the first fetch lands
		if self.token.as_ref().is_some_and(|old| *old != token) {
			self.views.send_replace(None);
		}
		self.token = Some(token.clone());

		let cancelled = Arc::new(AtomicBool::new(false));
		let in_flight = Arc::new(AtomicBool::new(false));

		spawn(poll_loop(
			Arc::clone(&self.source),
			token,
			self.interval,
			Arc::clone(&self.views),
			Arc::clone(&cancelled),
			Arc::clone(&in_flight),
		));

		info!("Polling every {}ms", self.interval.as_millis());
		self.session = Some(PollSession { cancelled, in_flight });
	}

	/** Stops the session. A response still in flight will be discarded rather than committed. */
	pub fn stop(&mut self) {
		if let Some(session) = self.session.take() {
			cancel(&self.views, &session);
			info!("Stopped polling");
		}
	}
}

impl<S> Drop for Poller<S> {
	fn drop(&mut self) {
		if let Some(session) = self.session.take() {
			cancel(&self.views, &session);
		}
	}
}

/** Raises the flag while holding the channel lock, so no commit can straddle it. */
fn cancel(views: &watch::Sender<Option<Arc<GameView>>>, session: &PollSession) {
	views.send_if_modified(|_| {
		session.cancelled.store(true, Ordering::SeqCst);
		false
	});
}

async fn poll_loop<S: StateSource>(
	source: Arc<S>,
	token: String,
	interval: Duration,
	views: Arc<watch::Sender<Option<Arc<GameView>>>>,
	cancelled: Arc<AtomicBool>,
	in_flight: Arc<AtomicBool>,
) {
	while !cancelled.load(Ordering::SeqCst) {
		in_flight.store(true, Ordering::SeqCst);
		let result = source.fetch_state(&token).await;
		in_flight.store(false, Ordering::SeqCst);

		let committed = match result {
			Ok(view) => views.send_if_modified(|slot| {
				if cancelled.load(Ordering::SeqCst) {
					return false;
				}
				*slot = Some(Arc::new(view));
				true
			}),
			// Try again next tick
			Err(e) => {
				debug!("Poll failed: {e}");
				false
			}
		};

		if cancelled.load(Ordering::SeqCst) {
			if !committed {
				debug!("Discarding response for a stopped poll session");
			}
			break;
		}

		time::sleep(interval).await;
	}
}
