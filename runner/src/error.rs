use route_coverage::{InputError, RoundTripError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("could not read points: {0}")]
    Input(#[from] InputError),
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
    #[error("round trip: {0}")]
    RoundTrip(#[from] RoundTripError),
    #[error("budget must be a non-negative number, got {0}")]
    InvalidBudget(f64),
    #[error("need at least 2 points to generate an input, got {0}")]
    TooFewPoints(usize),
}
