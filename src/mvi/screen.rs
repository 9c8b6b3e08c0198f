//! Per-screen owner: the event loop that runs the MVI cycle.

use std::collections::VecDeque;

use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};

use super::effects::{Effect, IntentSender};
use super::reducer::Reducer;
use super::state::ScreenState;
use super::store::StateStore;
use super::Intent;
use super::Subscription;

/// Binds a reducer to its effect handler and collaborators.
///
/// One `Feature` value exists per live screen; the screen loop owns it
/// for the screen's whole lifetime.
pub trait Feature: Send + 'static {
    type State: ScreenState;
    type Intent: Intent;
    type Reducer: Reducer<State = Self::State, Intent = Self::Intent>;

    /// Schedule side effects for a transition that just happened.
    ///
    /// `before`/`after` are the states around the reducer application.
    /// `intents` may be moved into long-running tasks that post further
    /// intents (e.g. a feed forwarder).
    fn effects(
        &mut self,
        intent: &Self::Intent,
        before: &Self::State,
        after: &Self::State,
        intents: &IntentSender<Self::Intent>,
    ) -> Vec<Effect<Self::Intent>>;

    /// Intent folded in when an effect task panics.
    ///
    /// Effect tasks normally map collaborator failures to error intents
    /// themselves; this is the last-resort hook so a crashed task surfaces
    /// as an operation error instead of leaving the screen stuck.
    fn task_failed(&self) -> Option<Self::Intent> {
        None
    }
}

/// Handle to a running screen.
///
/// Dropping the handle tears the screen down: the loop stops and every
/// pending effect task is aborted with it. No work outlives the screen.
pub struct ScreenHandle<F: Feature> {
    store: StateStore<F::State>,
    intents: IntentSender<F::Intent>,
    loop_task: JoinHandle<()>,
}

impl<F: Feature> ScreenHandle<F> {
    /// Spawn the screen loop on the current tokio runtime.
    pub fn spawn(feature: F) -> Self {
        let store = StateStore::new(F::State::default());
        let (tx, rx) = mpsc::unbounded_channel();
        let intents = IntentSender::new(tx);
        let loop_task = tokio::spawn(run_loop(feature, store.clone(), intents.clone(), rx));
        Self {
            store,
            intents,
            loop_task,
        }
    }

    /// Latest state snapshot.
    pub fn snapshot(&self) -> F::State {
        self.store.snapshot()
    }

    /// Subscribe to state snapshots (current one first).
    pub fn subscribe(&self) -> Subscription<F::State> {
        self.store.subscribe()
    }

    /// Post an intent into the screen's loop.
    pub fn dispatch(&self, intent: F::Intent) {
        self.intents.send(intent);
    }

    /// Cloneable sender for external drivers (renderers, feeds).
    pub fn intents(&self) -> IntentSender<F::Intent> {
        self.intents.clone()
    }

    /// Tear the screen down explicitly. Equivalent to dropping the handle.
    pub fn shutdown(self) {}
}

impl<F: Feature> Drop for ScreenHandle<F> {
    fn drop(&mut self) {
        self.loop_task.abort();
    }
}

async fn run_loop<F: Feature>(
    mut feature: F,
    store: StateStore<F::State>,
    intents: IntentSender<F::Intent>,
    mut rx: mpsc::UnboundedReceiver<F::Intent>,
) {
    // Effect tasks live here; dropping the set (loop abort) cancels them.
    let mut tasks: JoinSet<Option<F::Intent>> = JoinSet::new();
    // Synchronous follow-ups are drained before anything async, so
    // transitions triggered by one originating intent are observed in
    // program order.
    let mut queue: VecDeque<F::Intent> = VecDeque::new();

    loop {
        while let Some(intent) = queue.pop_front() {
            step(&mut feature, &store, &intents, &mut tasks, &mut queue, intent);
        }

        tokio::select! {
            received = rx.recv() => match received {
                Some(intent) => queue.push_back(intent),
                None => break,
            },
            Some(finished) = tasks.join_next(), if !tasks.is_empty() => match finished {
                Ok(Some(intent)) => queue.push_back(intent),
                Ok(None) => {}
                Err(err) if err.is_cancelled() => {}
                Err(err) => {
                    tracing::error!(error = %err, "effect task failed");
                    if let Some(intent) = feature.task_failed() {
                        queue.push_back(intent);
                    }
                }
            },
        }
    }
}

fn step<F: Feature>(
    feature: &mut F,
    store: &StateStore<F::State>,
    intents: &IntentSender<F::Intent>,
    tasks: &mut JoinSet<Option<F::Intent>>,
    queue: &mut VecDeque<F::Intent>,
    intent: F::Intent,
) {
    let before = store.snapshot();
    let reducer_intent = intent.clone();
    let after = store.apply(move |state| F::Reducer::reduce(state, reducer_intent));

    for effect in feature.effects(&intent, &before, &after, intents) {
        match effect {
            Effect::Dispatch(follow_up) => queue.push_back(follow_up),
            Effect::Task(task) => {
                tasks.spawn(task);
            }
            Effect::Delay { after, intent } => {
                tasks.spawn(async move {
                    tokio::time::sleep(after).await;
                    Some(intent)
                });
            }
        }
    }
}
