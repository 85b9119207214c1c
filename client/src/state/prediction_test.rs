use super::*;
use crate::net::types::{Confidence, parse_predict_body};

fn prediction(label: u8, hundredths: u32) -> Prediction {
    Prediction { label, confidence: Confidence::from_hundredths(hundredths) }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_without_result() {
    let state = PredictionState::default();
    assert_eq!(state.result, None);
    assert_eq!(state.phase, RequestPhase::Idle);
    assert_eq!(state.generation, 0);
    assert!(!state.is_awaiting());
}

// =============================================================
// Request lifecycle
// =============================================================

#[test]
fn begin_request_moves_to_awaiting() {
    let mut state = PredictionState::default();
    let ticket = state.begin_request().unwrap();
    assert_eq!(ticket.generation(), 0);
    assert_eq!(state.phase, RequestPhase::AwaitingResponse { generation: 0 });
    assert!(state.is_awaiting());
}

#[test]
fn second_request_while_awaiting_is_rejected() {
    let mut state = PredictionState::default();
    state.begin_request().unwrap();
    assert_eq!(state.begin_request(), Err(PredictBusy));
}

#[test]
fn success_sets_result_and_returns_to_idle() {
    let mut state = PredictionState::default();
    let ticket = state.begin_request().unwrap();
    let outcome = parse_predict_body(r#"{"prediction": 7, "confidence": 0.9567}"#);
    let completion = state.finish(ticket, outcome);
    assert_eq!(completion, Completion::Applied(prediction(7, 9567)));
    assert_eq!(state.result, Some(prediction(7, 9567)));
    assert_eq!(state.phase, RequestPhase::Idle);
}

#[test]
fn service_error_leaves_previous_result() {
    let mut state = PredictionState { result: Some(prediction(4, 8810)), ..PredictionState::default() };
    let ticket = state.begin_request().unwrap();
    let outcome = parse_predict_body(r#"{"error": "bad image"}"#);
    let completion = state.finish(ticket, outcome);
    assert_eq!(completion, Completion::Failed(PredictError::Service("bad image".to_owned())));
    assert_eq!(state.result, Some(prediction(4, 8810)));
    assert_eq!(state.result.unwrap().confidence.to_string(), "88.10");
    assert!(!state.is_awaiting());
}

#[test]
fn connectivity_error_leaves_previous_result() {
    let mut state = PredictionState { result: Some(prediction(2, 5000)), ..PredictionState::default() };
    let ticket = state.begin_request().unwrap();
    let completion = state.finish(ticket, Err(PredictError::Connectivity("timeout".to_owned())));
    assert!(matches!(completion, Completion::Failed(PredictError::Connectivity(_))));
    assert_eq!(state.result, Some(prediction(2, 5000)));
}

#[test]
fn new_request_allowed_after_failure() {
    let mut state = PredictionState::default();
    let ticket = state.begin_request().unwrap();
    state.finish(ticket, Err(PredictError::Connectivity("offline".to_owned())));
    assert!(state.begin_request().is_ok());
}

#[test]
fn abandon_returns_to_idle_without_touching_result() {
    let mut state = PredictionState { result: Some(prediction(9, 100)), ..PredictionState::default() };
    let ticket = state.begin_request().unwrap();
    state.abandon(ticket);
    assert_eq!(state.phase, RequestPhase::Idle);
    assert_eq!(state.result, Some(prediction(9, 100)));
}

// =============================================================
// Clear / stale responses
// =============================================================

#[test]
fn clear_drops_result() {
    let mut state = PredictionState { result: Some(prediction(1, 9980)), ..PredictionState::default() };
    state.clear();
    assert_eq!(state.result, None);
}

#[test]
fn clear_twice_keeps_result_cleared() {
    let mut state = PredictionState { result: Some(prediction(1, 9980)), ..PredictionState::default() };
    state.clear();
    state.clear();
    assert_eq!(state.result, None);
    assert_eq!(state.phase, RequestPhase::Idle);
}

#[test]
fn response_after_clear_is_discarded() {
    let mut state = PredictionState::default();
    let ticket = state.begin_request().unwrap();
    state.clear();
    let completion = state.finish(ticket, Ok(prediction(5, 7000)));
    assert_eq!(completion, Completion::Stale);
    assert_eq!(state.result, None);
}

#[test]
fn clear_unblocks_a_new_request() {
    let mut state = PredictionState::default();
    state.begin_request().unwrap();
    state.clear();
    assert!(!state.is_awaiting());
    let ticket = state.begin_request().unwrap();
    assert_eq!(ticket.generation(), 1);
}

#[test]
fn stale_response_does_not_end_newer_request() {
    let mut state = PredictionState::default();
    let old = state.begin_request().unwrap();
    state.clear();
    let fresh = state.begin_request().unwrap();
    assert_eq!(state.finish(old, Ok(prediction(3, 100))), Completion::Stale);
    assert!(state.is_awaiting());
    assert_eq!(state.finish(fresh, Ok(prediction(8, 200))), Completion::Applied(prediction(8, 200)));
    assert_eq!(state.result, Some(prediction(8, 200)));
}

#[test]
fn stale_abandon_does_not_end_newer_request() {
    let mut state = PredictionState::default();
    let old = state.begin_request().unwrap();
    state.clear();
    state.begin_request().unwrap();
    state.abandon(old);
    assert!(state.is_awaiting());
}
