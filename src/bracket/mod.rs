pub mod candidate;
pub mod error;
pub mod playthrough;
pub mod round;
pub mod session;

pub use candidate::Candidate;
pub use error::BracketError;
pub use playthrough::{CandidateSource, Playthrough, Presenter, SelectionRecord, SelectionRecorder};
pub use round::{round_size_for, RoundLabel};
pub use session::{BracketSession, BracketState, BracketStep, MatchOutcome};
