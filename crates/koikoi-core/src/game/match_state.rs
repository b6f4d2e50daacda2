use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::error::GameError;
use crate::game::player::Player;
use crate::game::round::{GamePhase, KoiKoiRound, RoundOutcome};
use crate::scoring::context::Weather;
use crate::scoring::manager::ScoringManager;
use crate::scoring::rules::RuleConfig;
use crate::scoring::yaku::YakuResult;

/// Frozen record of one finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub winner: Option<Player>,
    pub points: u32,
    /// Both players' cumulative totals after the round.
    pub totals: [u32; 2],
}

/// A multi-round match: cumulative scores, round history, and the current
/// round. The month advances with the round counter; the previous round's
/// winner leads the next deal.
#[derive(Debug, Clone)]
pub struct MatchState {
    rules: RuleConfig,
    rng: StdRng,
    seed: u64,
    weather: Option<Weather>,
    round_number: u32,
    round: KoiKoiRound,
    totals: [u32; 2],
    history: Vec<RoundResult>,
}

impl MatchState {
    pub fn new(rules: RuleConfig) -> Self {
        Self::with_seed(rules, rand::random())
    }

    pub fn with_seed(rules: RuleConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let round = KoiKoiRound::deal(&mut rng, ScoringManager::new(rules), 1, None, None);
        Self {
            rules,
            rng,
            seed,
            weather: None,
            round_number: 1,
            round,
            totals: [0, 0],
            history: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    pub fn round(&self) -> &KoiKoiRound {
        &self.round
    }

    pub fn round_mut(&mut self) -> &mut KoiKoiRound {
        &mut self.round
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn totals(&self) -> &[u32; 2] {
        &self.totals
    }

    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    pub fn weather(&self) -> Option<Weather> {
        self.weather
    }

    /// Applies to the current round and every round dealt after it.
    pub fn set_weather(&mut self, weather: Option<Weather>) {
        self.weather = weather;
        self.round.set_weather(weather);
    }

    /// The teyaku that ended the current round at deal time, if any.
    pub fn initial_yaku(&self) -> Option<&(Player, YakuResult)> {
        self.round.initial_yaku()
    }

    /// Replaces the current round with one restored from a snapshot.
    pub fn load_round(&mut self, round: KoiKoiRound) {
        self.round = round;
    }

    const fn month_for_round(round_number: u32) -> u8 {
        ((round_number - 1) % 12 + 1) as u8
    }

    /// Records the finished round into the match totals and deals the next
    /// one. The winner leads the next round; a drawn round falls back to
    /// hand comparison.
    pub fn finish_round_and_start_next(&mut self) -> Result<&RoundResult, GameError> {
        if self.round.phase() != GamePhase::RoundEnd {
            return Err(GameError::InvalidPhaseAction {
                action: "finish_round_and_start_next",
                phase: self.round.phase(),
            });
        }
        let outcome = self
            .round
            .outcome()
            .cloned()
            .unwrap_or(RoundOutcome {
                winner: None,
                points: 0,
            });

        if let Some(winner) = outcome.winner {
            self.totals[winner.index()] += outcome.points;
        }
        self.history.push(RoundResult {
            winner: outcome.winner,
            points: outcome.points,
            totals: self.totals,
        });

        self.round_number += 1;
        let month = Self::month_for_round(self.round_number);
        self.round = KoiKoiRound::deal(
            &mut self.rng,
            ScoringManager::new(self.rules),
            month,
            self.weather,
            outcome.winner,
        );

        Ok(self.history.last().expect("round result just pushed"))
    }
}
