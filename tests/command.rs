use std::sync::{Arc, Mutex};

use coup_client::basics::action::{ActionKind, PerformAction};
use coup_client::basics::view::{GameView, Phase, Role};
use coup_client::client::ClientError;
use coup_client::command::{CoupClient, Dispatcher, Intent};

use crate::util::{setup, Player, TestOptions};

pub mod util;

type Reply = Box<dyn Fn(&PerformAction) -> Result<Option<GameView>, ClientError> + Send + Sync>;

/** Records every command and answers with whatever the test scripted. */
struct FakeDispatcher {
	sent: Arc<Mutex<Vec<PerformAction>>>,
	reply: Reply,
}

impl Dispatcher for FakeDispatcher {
	async fn dispatch(&self, token: &str, action: &PerformAction) -> Result<Option<GameView>, ClientError> {
		assert_eq!(token, "tok");
		self.sent.lock().unwrap().push(action.clone());
		(self.reply)(action)
	}
}

fn client(view: GameView, reply: Reply) -> (CoupClient<FakeDispatcher>, Arc<Mutex<Vec<PerformAction>>>) {
	let sent = Arc::new(Mutex::new(Vec::new()));
	let mut client = CoupClient::new(FakeDispatcher { sent: Arc::clone(&sent), reply }, "tok".to_string());
	client.apply_view(Arc::new(view));
	(client, sent)
}

fn echo(view: &GameView) -> Reply {
	let view = view.clone();
	Box::new(move |_| Ok(Some(view.clone())))
}

#[tokio::test]
async fn it_sends_targeted_actions() {
	let view = setup(TestOptions { coins: 7, ..TestOptions::default() });
	let (mut client, sent) = client(view.clone(), echo(&view));

	assert!(client.handle_intent(Intent::Target("bob".to_string())).await);
	assert_eq!(client.selection.target.as_deref(), Some("p2"));

	assert!(client.handle_intent(Intent::Act(ActionKind::Coup)).await);
	assert_eq!(*sent.lock().unwrap(), vec![PerformAction::Act { action: ActionKind::Coup, target: Some(Player::Bob.id()) }]);

	// The selection is spent once the command goes through
	assert_eq!(client.selection.target, None);
}

#[tokio::test]
async fn it_does_not_send_unavailable_moves() {
	let view = setup(TestOptions { coins: 6, ..TestOptions::default() });
	let (mut client, sent) = client(view.clone(), echo(&view));

	client.handle_intent(Intent::Target(Player::Bob.id())).await;

	assert!(!client.handle_intent(Intent::Act(ActionKind::Coup)).await);
	assert!(!client.handle_intent(Intent::Challenge).await);
	assert!(!client.handle_intent(Intent::Start).await);
	assert!(!client.handle_intent(Intent::Confirm).await);
	assert!(sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn it_shows_rejections_verbatim() {
	let view = setup(TestOptions::default());
	let (mut client, sent) = client(view.clone(), Box::new(|_| Err(ClientError::Rejected {
		status: 400,
		message: "It's not your turn".to_string(),
	})));

	assert!(client.handle_intent(Intent::Act(ActionKind::Income)).await);
	assert_eq!(sent.lock().unwrap().len(), 1);
	assert_eq!(client.banner(), Some("It's not your turn"));

	// The view is untouched until the server says otherwise
	assert_eq!(client.view(), Some(&view));
	assert_eq!(client.frame().unwrap().banner, Some("It's not your turn"));

	// A new phase clears the message
	let mut next = view.clone();
	next.phase = Phase::BlockWindow;
	client.apply_view(Arc::new(next));
	assert_eq!(client.banner(), None);
}

#[tokio::test]
async fn it_confirms_an_exchange() {
	let view = setup(TestOptions {
		phase: Phase::SwapChoice,
		init: Box::new(|view| view.exchange_cards = Some(vec![Role::Duke, Role::Captain, Role::Assassin])),
		..TestOptions::default()
	});
	let mut after = view.clone();
	after.phase = Phase::ActionSelection;
	after.current_player = Some(Player::Bob.id());
	after.exchange_cards = None;

	let (mut client, sent) = client(view, echo(&after));

	assert!(client.handle_intent(Intent::Keep(2)).await);
	assert!(!client.handle_intent(Intent::Confirm).await);
	assert!(client.handle_intent(Intent::Keep(1)).await);
	assert!(client.handle_intent(Intent::Confirm).await);

	assert_eq!(*sent.lock().unwrap(), vec![PerformAction::FinishExchange { keep: vec![2, 1] }]);
	assert!(client.selection.is_empty());
	assert_eq!(client.view().map(|v| v.phase), Some(Phase::ActionSelection));
}

#[tokio::test]
async fn it_confirms_a_loss() {
	let view = setup(TestOptions {
		phase: Phase::LossChoice,
		current: Some(Player::Bob),
		init: Box::new(|view| {
			view.loss_choice_player_id = Some(Player::Alice.id());
			view.loss_choice_cards = Some(vec![Role::Duke, Role::Contessa]);
		}),
		..TestOptions::default()
	});
	let (mut client, sent) = client(view, Box::new(|_| Ok(None)));

	assert!(client.handle_intent(Intent::Lose(1)).await);
	assert!(client.handle_intent(Intent::Confirm).await);

	assert_eq!(*sent.lock().unwrap(), vec![PerformAction::ChooseLoss { index: 1 }]);
}

#[tokio::test]
async fn it_waits_for_a_view() {
	let sent = Arc::new(Mutex::new(Vec::new()));
	let mut client = CoupClient::new(FakeDispatcher { sent: Arc::clone(&sent), reply: Box::new(|_| Ok(None)) }, "tok".to_string());

	assert!(client.frame().is_none());
	assert!(!client.handle_intent(Intent::Start).await);
	assert!(sent.lock().unwrap().is_empty());
}
