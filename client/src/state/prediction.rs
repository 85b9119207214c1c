//! Prediction result and in-flight request tracking.
//!
//! DESIGN
//! ======
//! One request at a time: `begin_request` refuses while a response is
//! outstanding. Every request carries the generation current when it started;
//! `clear` bumps the generation, so a response that lands after the user
//! cleared the pad is dropped instead of repopulating the result.

#[cfg(test)]
#[path = "prediction_test.rs"]
mod prediction_test;

use crate::net::types::{PredictError, Prediction};

/// Request lifecycle as seen by the view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestPhase {
    #[default]
    Idle,
    AwaitingResponse {
        generation: u64,
    },
}

/// Proof that a request was started; hand it back to [`PredictionState::finish`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Returned by [`PredictionState::begin_request`] while a request is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("a prediction request is already in flight")]
pub struct PredictBusy;

/// What happened when a response was delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The result was replaced.
    Applied(Prediction),
    /// The request failed; the previous result is untouched.
    Failed(PredictError),
    /// The pad was cleared after the request started; nothing changed.
    Stale,
}

/// Last known prediction plus request bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictionState {
    /// Most recent successful prediction, if any.
    pub result: Option<Prediction>,
    pub phase: RequestPhase,
    /// Incremented by every [`clear`](Self::clear).
    pub generation: u64,
}

impl PredictionState {
    #[must_use]
    pub fn is_awaiting(&self) -> bool {
        matches!(self.phase, RequestPhase::AwaitingResponse { .. })
    }

    /// Move to `AwaitingResponse`.
    ///
    /// # Errors
    ///
    /// Returns [`PredictBusy`] if a request is already outstanding.
    pub fn begin_request(&mut self) -> Result<RequestTicket, PredictBusy> {
        if self.is_awaiting() {
            return Err(PredictBusy);
        }
        self.phase = RequestPhase::AwaitingResponse { generation: self.generation };
        Ok(RequestTicket { generation: self.generation })
    }

    /// Deliver the outcome of the request identified by `ticket`.
    pub fn finish(&mut self, ticket: RequestTicket, outcome: Result<Prediction, PredictError>) -> Completion {
        if ticket.generation != self.generation {
            return Completion::Stale;
        }
        self.phase = RequestPhase::Idle;
        match outcome {
            Ok(prediction) => {
                self.result = Some(prediction);
                Completion::Applied(prediction)
            }
            Err(err) => Completion::Failed(err),
        }
    }

    /// Give up on a request that never reached the network.
    pub fn abandon(&mut self, ticket: RequestTicket) {
        if ticket.generation == self.generation {
            self.phase = RequestPhase::Idle;
        }
    }

    /// Drop the result and invalidate any outstanding request.
    pub fn clear(&mut self) {
        self.result = None;
        self.generation = self.generation.wrapping_add(1);
        self.phase = RequestPhase::Idle;
    }
}
