mod common;

use common::wait_for;
use navi_core::mvi::{Effect, Feature, Intent, IntentSender, Reducer, ScreenHandle, ScreenState};

#[derive(Debug, Clone, PartialEq, Default)]
struct LogState {
    entries: Vec<&'static str>,
}

impl ScreenState for LogState {}

#[derive(Debug, Clone)]
enum LogIntent {
    Begin,
    StepA,
    StepB,
    AsyncDone,
    Crash,
    Crashed,
}

impl Intent for LogIntent {}

struct LogReducer;

impl Reducer for LogReducer {
    type State = LogState;
    type Intent = LogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let entry = match intent {
            LogIntent::Begin => "begin",
            LogIntent::StepA => "a",
            LogIntent::StepB => "b",
            LogIntent::AsyncDone => "async",
            LogIntent::Crash => "crash",
            LogIntent::Crashed => "crashed",
        };
        let mut entries = state.entries;
        entries.push(entry);
        LogState { entries }
    }
}

struct LogFeature;

impl Feature for LogFeature {
    type State = LogState;
    type Intent = LogIntent;
    type Reducer = LogReducer;

    fn effects(
        &mut self,
        intent: &LogIntent,
        _before: &LogState,
        _after: &LogState,
        _intents: &IntentSender<LogIntent>,
    ) -> Vec<Effect<LogIntent>> {
        match intent {
            LogIntent::Begin => vec![
                Effect::task(async { Some(LogIntent::AsyncDone) }),
                Effect::dispatch(LogIntent::StepA),
                Effect::dispatch(LogIntent::StepB),
            ],
            LogIntent::Crash => vec![Effect::task(async { panic!("boom") })],
            _ => Vec::new(),
        }
    }

    fn task_failed(&self) -> Option<LogIntent> {
        Some(LogIntent::Crashed)
    }
}

#[tokio::test]
async fn synchronous_follow_ups_land_before_async_results() {
    let screen = ScreenHandle::spawn(LogFeature);
    let mut sub = screen.subscribe();

    screen.dispatch(LogIntent::Begin);
    let state = wait_for(&mut sub, |s| s.entries.contains(&"async")).await;

    // Dispatched follow-ups are observed in program order; the task
    // result only lands after they are drained.
    assert_eq!(state.entries, vec!["begin", "a", "b", "async"]);
}

#[tokio::test]
async fn panicking_task_folds_into_the_failure_intent() {
    let screen = ScreenHandle::spawn(LogFeature);
    let mut sub = screen.subscribe();

    screen.dispatch(LogIntent::Crash);
    let state = wait_for(&mut sub, |s| s.entries.contains(&"crashed")).await;
    assert_eq!(state.entries, vec!["crash", "crashed"]);
}

#[tokio::test]
async fn each_subscriber_sees_every_change_in_order() {
    let screen = ScreenHandle::spawn(LogFeature);
    let mut early = screen.subscribe();

    screen.dispatch(LogIntent::Begin);
    wait_for(&mut early, |s| s.entries.contains(&"async")).await;

    // A late subscriber starts from the current snapshot.
    let mut late = screen.subscribe();
    let first = late.next().await.expect("snapshot");
    assert_eq!(first.entries, vec!["begin", "a", "b", "async"]);
}
