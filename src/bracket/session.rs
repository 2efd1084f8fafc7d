use super::{
    candidate::Candidate,
    error::BracketError,
    round::{round_size_for, shuffle_pool, RoundLabel},
};
use crate::types::{CandidateId, TournamentId};
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strum::Display;

#[derive(Debug, Clone, Display, PartialEq)]
pub enum BracketState {
    // Candidates have not been loaded yet.
    Uninitialized,
    // Transient: the session is deciding what to present next.
    RoundInProgress,
    // Two candidates are shown, waiting for the user to pick one.
    MatchPending {
        first: Candidate,
        second: Candidate,
    },
    // A single leftover candidate is shown, waiting for the user to confirm it.
    ByePending { candidate: Candidate },
    // A winner has been found. Nothing can happen anymore.
    Terminated { winner: Candidate },
}

/// What the presentation layer has to show after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum BracketStep {
    Match {
        first: Candidate,
        second: Candidate,
        label: RoundLabel,
        match_number: usize,
    },
    Bye {
        candidate: Candidate,
        label: RoundLabel,
    },
    Complete {
        tournament_id: TournamentId,
        winner: Candidate,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub winner: Candidate,
    pub loser: Candidate,
    pub round_size: usize,
}

// Note: the round pool is used as a stack. Pairs are taken from its tail,
// winners are collected in order and become the next round pool once the
// current one is empty. A leftover candidate gets a bye.

#[derive(Debug, Clone)]
pub struct BracketSession {
    tournament_id: TournamentId,
    all_candidates: Vec<Candidate>,
    round_pool: Vec<Candidate>,
    winners_pool: Vec<Candidate>,
    eliminated: Vec<CandidateId>,
    current_round_size: usize,
    match_counter: usize,
    round_number: usize,
    state: BracketState,
    rng: ChaCha8Rng,
}

impl BracketSession {
    pub fn new(tournament_id: TournamentId, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        Self {
            tournament_id,
            all_candidates: vec![],
            round_pool: vec![],
            winners_pool: vec![],
            eliminated: vec![],
            current_round_size: 0,
            match_counter: 0,
            round_number: 0,
            state: BracketState::Uninitialized,
            rng,
        }
    }

    pub fn tournament_id(&self) -> TournamentId {
        self.tournament_id
    }

    pub fn state(&self) -> &BracketState {
        &self.state
    }

    pub fn all_candidates(&self) -> &[Candidate] {
        &self.all_candidates
    }

    pub fn round_pool(&self) -> &[Candidate] {
        &self.round_pool
    }

    pub fn winners_pool(&self) -> &[Candidate] {
        &self.winners_pool
    }

    pub fn eliminated(&self) -> &[CandidateId] {
        &self.eliminated
    }

    pub fn current_round_size(&self) -> usize {
        self.current_round_size
    }

    pub fn round_label(&self) -> RoundLabel {
        RoundLabel::from_round_size(self.current_round_size)
    }

    pub fn match_counter(&self) -> usize {
        self.match_counter
    }

    pub fn round_number(&self) -> usize {
        self.round_number
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, BracketState::Terminated { .. })
    }

    pub fn winner(&self) -> Option<&Candidate> {
        match &self.state {
            BracketState::Terminated { winner } => Some(winner),
            _ => None,
        }
    }

    /// Candidates still in the bracket, including the ones on screen.
    pub fn remaining(&self) -> usize {
        let on_screen = match self.state {
            BracketState::MatchPending { .. } => 2,
            BracketState::ByePending { .. } | BracketState::Terminated { .. } => 1,
            BracketState::Uninitialized | BracketState::RoundInProgress => 0,
        };
        self.round_pool.len() + self.winners_pool.len() + on_screen
    }

    pub fn initialize(&mut self, candidates: Vec<Candidate>) -> Result<BracketStep, BracketError> {
        match self.state {
            BracketState::Uninitialized => {}
            BracketState::Terminated { .. } => return Err(BracketError::Terminated),
            _ => return Err(BracketError::AlreadyInitialized),
        }

        if candidates.len() < 2 {
            return Err(BracketError::InsufficientCandidates {
                found: candidates.len(),
            });
        }

        self.all_candidates = candidates;
        self.round_pool = self.all_candidates.clone();
        self.winners_pool.clear();
        self.eliminated.clear();
        shuffle_pool(&mut self.round_pool, &mut self.rng);
        self.match_counter = 0;
        self.round_number = 1;
        self.current_round_size = round_size_for(self.all_candidates.len());

        debug!(
            "Bracket {} initialized with {} candidates, starting at {}",
            self.tournament_id,
            self.all_candidates.len(),
            self.round_label()
        );

        self.advance()
    }

    pub fn record_selection(
        &mut self,
        selected_id: CandidateId,
    ) -> Result<(MatchOutcome, BracketStep), BracketError> {
        self.ensure_started()?;

        let (winner, loser) = match &self.state {
            BracketState::MatchPending { first, second } => {
                if first.id == selected_id {
                    (first.clone(), second.clone())
                } else if second.id == selected_id {
                    (second.clone(), first.clone())
                } else {
                    return Err(BracketError::InvalidSelection {
                        candidate_id: selected_id,
                    });
                }
            }
            _ => return Err(BracketError::NoPendingMatch),
        };

        let outcome = MatchOutcome {
            winner: winner.clone(),
            loser,
            round_size: self.current_round_size,
        };

        debug!(
            "{} match {}: {} beats {}",
            self.round_label(),
            self.match_counter,
            outcome.winner.name,
            outcome.loser.name
        );

        self.eliminated.push(outcome.loser.id);
        self.winners_pool.push(winner);
        let step = self.advance()?;

        Ok((outcome, step))
    }

    pub fn record_bye_advance(&mut self) -> Result<BracketStep, BracketError> {
        self.ensure_started()?;

        let candidate = match &self.state {
            BracketState::ByePending { candidate } => candidate.clone(),
            _ => return Err(BracketError::NoPendingBye),
        };

        debug!("{} bye: {} advances", self.round_label(), candidate.name);
        self.winners_pool.push(candidate);

        self.advance()
    }

    fn ensure_started(&self) -> Result<(), BracketError> {
        match self.state {
            BracketState::Uninitialized => Err(BracketError::NotInitialized),
            BracketState::Terminated { .. } => Err(BracketError::Terminated),
            _ => Ok(()),
        }
    }

    fn start_next_round(&mut self) {
        self.round_pool = std::mem::take(&mut self.winners_pool);
        shuffle_pool(&mut self.round_pool, &mut self.rng);
        self.current_round_size = round_size_for(self.round_pool.len());
        self.match_counter = 0;
        self.round_number += 1;

        debug!(
            "Bracket {} round {} starts with {} candidates ({})",
            self.tournament_id,
            self.round_number,
            self.round_pool.len(),
            self.round_label()
        );
    }

    fn advance(&mut self) -> Result<BracketStep, BracketError> {
        self.state = BracketState::RoundInProgress;

        if self.round_pool.is_empty() {
            // The termination check must come before the rollover.
            if self.winners_pool.len() == 1 {
                if let Some(winner) = self.winners_pool.pop() {
                    debug!("Bracket {} won by {}", self.tournament_id, winner.name);
                    self.state = BracketState::Terminated {
                        winner: winner.clone(),
                    };
                    return Ok(BracketStep::Complete {
                        tournament_id: self.tournament_id,
                        winner,
                    });
                }
            }

            self.start_next_round();
        }

        match (self.round_pool.pop(), self.round_pool.pop()) {
            (Some(first), Some(second)) => {
                self.match_counter += 1;
                self.state = BracketState::MatchPending {
                    first: first.clone(),
                    second: second.clone(),
                };
                Ok(BracketStep::Match {
                    first,
                    second,
                    label: self.round_label(),
                    match_number: self.match_counter,
                })
            }
            (Some(candidate), None) => {
                self.state = BracketState::ByePending {
                    candidate: candidate.clone(),
                };
                Ok(BracketStep::Bye {
                    candidate,
                    label: self.round_label(),
                })
            }
            _ => Err(BracketError::Exhausted),
        }
    }
}
