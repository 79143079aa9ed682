mod common;

use image_studio::app::{GenerateOutcome, Session, HISTORY_CAPACITY};
use image_studio::generation::{CandidatePool, GenerationController, GenerationError};

use common::{instant_backend, FailingBackend};
use std::sync::Arc;

#[tokio::test]
async fn empty_prompt_changes_nothing() {
    let controller = GenerationController::new(instant_backend(1));
    let mut session = Session::new();
    for blank in ["", "   ", "\n\t"] {
        session.set_prompt(blank);
        assert_eq!(controller.generate(&mut session).await, GenerateOutcome::Skipped);
        assert!(!session.is_generating());
        assert!(session.artifact().is_none());
        assert!(session.history().is_empty());
    }
}

#[tokio::test]
async fn sunset_scenario() {
    let controller = GenerationController::new(instant_backend(2));
    let mut session = Session::new();

    controller.generate(&mut session).await;
    assert!(session.history().is_empty());

    session.set_prompt("sunset");
    let outcome = controller.generate(&mut session).await;
    assert!(matches!(outcome, GenerateOutcome::Generated(_)));
    assert!(!session.is_generating());
    assert_eq!(session.history().to_vec(), vec!["sunset"]);
    let artifact = session.artifact().expect("artifact set");
    assert!(!artifact.as_str().is_empty());
    assert!(CandidatePool::default().contains(artifact));
}

#[tokio::test]
async fn history_grows_to_capacity_then_rolls() {
    let controller = GenerationController::new(instant_backend(3));
    let mut session = Session::new();
    for i in 0..(HISTORY_CAPACITY * 3) {
        let before = session.history().len();
        session.set_prompt(format!("  prompt #{}  ", i));
        controller.generate(&mut session).await;
        assert_eq!(session.history().len(), (before + 1).min(HISTORY_CAPACITY));
        assert_eq!(session.history().get(0), Some(format!("prompt #{}", i).as_str()));
        assert!(CandidatePool::default().contains(session.artifact().unwrap()));
    }
}

#[tokio::test]
async fn failure_surfaces_error_and_keeps_previous_result() {
    let ok = GenerationController::new(instant_backend(4));
    let failing = GenerationController::new(Arc::new(FailingBackend(GenerationError::Network("offline".into()))));
    let mut session = Session::new();

    session.set_prompt("castle");
    ok.generate(&mut session).await;
    let before = session.artifact().cloned();

    session.set_prompt("dragon");
    let outcome = failing.generate(&mut session).await;
    assert_eq!(outcome, GenerateOutcome::Failed(GenerationError::Network("offline".into())));
    assert!(!session.is_generating());
    assert_eq!(session.artifact().cloned(), before);
    assert_eq!(session.history().to_vec(), vec!["castle"]);
    assert!(session.last_error().is_some());

    // retrying recovers
    let outcome = ok.generate(&mut session).await;
    assert!(matches!(outcome, GenerateOutcome::Generated(_)));
    assert!(session.last_error().is_none());
    assert_eq!(session.history().to_vec(), vec!["dragon", "castle"]);
}

#[tokio::test]
async fn select_from_history_roundtrips_each_entry() {
    let controller = GenerationController::new(instant_backend(5));
    let mut session = Session::new();
    for p in ["a", "b", "c"] {
        session.set_prompt(p);
        controller.generate(&mut session).await;
    }
    for i in 0..session.history().len() {
        let expected = session.history().get(i).unwrap().to_string();
        assert!(session.select_from_history(i));
        assert_eq!(session.prompt(), expected);
    }
}
