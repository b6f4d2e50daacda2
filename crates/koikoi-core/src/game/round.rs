use core::fmt;

use crate::game::error::{GameError, SelectionError};
use crate::game::player::Player;
use crate::model::card::CardId;
use crate::model::card_set::CardSet;
use crate::model::draw_pile::DrawPile;
use crate::model::matching::{is_match, matches_in};
use crate::scoring::context::{ScoringContext, Weather};
use crate::scoring::manager::ScoringManager;
use crate::scoring::yaku::YakuResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    MatchingHand,
    WaitingForFieldCards,
    NoMatchesDiscard,
    WaitingForDeckMatch,
    ChoosingKoi,
    RoundEnd,
}

impl GamePhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            GamePhase::MatchingHand => "MATCHING_HAND",
            GamePhase::WaitingForFieldCards => "WAITING_FOR_FIELD_CARDS",
            GamePhase::NoMatchesDiscard => "NO_MATCHES_DISCARD",
            GamePhase::WaitingForDeckMatch => "WAITING_FOR_DECK_MATCH",
            GamePhase::ChoosingKoi => "CHOOSING_KOI",
            GamePhase::RoundEnd => "ROUND_END",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a round finished. `winner` is `None` for an exhaustive draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub winner: Option<Player>,
    pub points: u32,
}

/// Result of selecting a hand card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandSelection {
    /// No field card shares the month; the card must be discarded.
    NoMatches,
    /// Field cards share the month. `auto_capture` is true except for the
    /// two-match case, where the player must pick one.
    Matches {
        matching: Vec<CardId>,
        auto_capture: bool,
    },
}

/// Result of selecting a field card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    pub selected: Vec<CardId>,
    /// True when the selection was filled without a real choice (one or
    /// three matches).
    pub auto_selected: bool,
}

/// What happened after a capture or placement resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The drawn card matches field cards; a field selection is expected.
    DeckMatch {
        drawn: CardId,
        matching: Vec<CardId>,
    },
    /// Turn complete with no new yaku; play passed to the opponent.
    TurnEnd,
    /// New yaku completed; the active player must choose koi-koi or shobu.
    NewYaku { yaku: Vec<YakuResult> },
    /// The round is over.
    RoundEnd(RoundOutcome),
}

/// Per-round mutable state and the turn state machine that drives it.
///
/// The six card collections (pile, field, two hands, two capture piles)
/// always partition the 48-card domain; every mutation below moves cards
/// between them, never copies.
#[derive(Debug, Clone)]
pub struct KoiKoiRound {
    scoring: ScoringManager,
    draw_pile: DrawPile,
    field: CardSet,
    hands: [CardSet; 2],
    captured: [CardSet; 2],
    current_month: u8,
    weather: Option<Weather>,
    phase: GamePhase,
    active_player: Player,
    koi_koi_caller: Option<Player>,
    koi_koi_count: u32,
    completed_yaku: Vec<YakuResult>,
    drawn_card: Option<CardId>,
    selected_hand_card: Option<CardId>,
    selected_field_cards: Vec<CardId>,
    initial_yaku: Option<(Player, YakuResult)>,
    outcome: Option<RoundOutcome>,
}

impl KoiKoiRound {
    /// Deals a fresh round: eight cards to each hand, eight to the field,
    /// the rest forming the draw pile. Runs the initial-hand check, which
    /// may end the round before any card is played.
    ///
    /// `lead` short-circuits first-player determination (a carried-forward
    /// previous-round winner); otherwise the player whose hand holds the
    /// largest same-month group goes first, ties favoring player one.
    pub fn deal<R: rand::Rng + ?Sized>(
        rng: &mut R,
        scoring: ScoringManager,
        current_month: u8,
        weather: Option<Weather>,
        lead: Option<Player>,
    ) -> Self {
        let mut draw_pile = DrawPile::shuffled(rng);
        let hands = [
            CardSet::with_cards(draw_pile.draw_many(8)),
            CardSet::with_cards(draw_pile.draw_many(8)),
        ];
        let field = CardSet::with_cards(draw_pile.draw_many(8));

        let first = lead.unwrap_or_else(|| Self::leading_player(&hands));

        let mut round = Self {
            scoring,
            draw_pile,
            field,
            hands,
            captured: [CardSet::new(), CardSet::new()],
            current_month,
            weather,
            phase: GamePhase::MatchingHand,
            active_player: first,
            koi_koi_caller: None,
            koi_koi_count: 0,
            completed_yaku: Vec::new(),
            drawn_card: None,
            selected_hand_card: None,
            selected_field_cards: Vec::new(),
            initial_yaku: None,
            outcome: None,
        };

        tracing::debug!(
            first_player = %round.active_player,
            month = round.current_month,
            "round dealt"
        );

        round.check_initial_hands();
        round
    }

    /// Rebuilds a round from loaded collections. The caller is responsible
    /// for validating the partition invariant first; phase and selections
    /// reset to the start of a turn.
    pub(crate) fn from_parts(
        scoring: ScoringManager,
        draw_pile: DrawPile,
        field: CardSet,
        hands: [CardSet; 2],
        captured: [CardSet; 2],
        active_player: Player,
        current_month: u8,
        weather: Option<Weather>,
        completed_yaku: Vec<YakuResult>,
    ) -> Self {
        Self {
            scoring,
            draw_pile,
            field,
            hands,
            captured,
            current_month,
            weather,
            phase: GamePhase::MatchingHand,
            active_player,
            koi_koi_caller: None,
            koi_koi_count: 0,
            completed_yaku,
            drawn_card: None,
            selected_hand_card: None,
            selected_field_cards: Vec::new(),
            initial_yaku: None,
            outcome: None,
        }
    }

    fn leading_player(hands: &[CardSet; 2]) -> Player {
        let largest_group = |hand: &CardSet| -> u8 {
            hand.month_counts().into_iter().max().unwrap_or(0)
        };
        if largest_group(&hands[1]) > largest_group(&hands[0]) {
            Player::Two
        } else {
            Player::One
        }
    }

    /// Teyaku probe for both starting hands, active player first. A hit
    /// ends the round immediately; two misses leave the original first
    /// player active.
    fn check_initial_hands(&mut self) {
        for _ in 0..2 {
            let hand = &self.hands[self.active_player.index()];
            let results = self.scoring.score(hand, &ScoringContext::teyaku());
            if let Some(yaku) = results.first() {
                tracing::info!(
                    player = %self.active_player,
                    yaku = %yaku.name,
                    points = yaku.points,
                    "initial hand yaku ends the round"
                );
                self.initial_yaku = Some((self.active_player, yaku.clone()));
                let outcome = RoundOutcome {
                    winner: Some(self.active_player),
                    points: yaku.points,
                };
                self.end_round(outcome);
                return;
            }
            self.active_player = self.active_player.opponent();
        }
    }

    // --- accessors -------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn field(&self) -> &CardSet {
        &self.field
    }

    pub fn hand(&self, player: Player) -> &CardSet {
        &self.hands[player.index()]
    }

    pub fn captured(&self, player: Player) -> &CardSet {
        &self.captured[player.index()]
    }

    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    pub fn current_month(&self) -> u8 {
        self.current_month
    }

    pub fn weather(&self) -> Option<Weather> {
        self.weather
    }

    pub(crate) fn set_weather(&mut self, weather: Option<Weather>) {
        self.weather = weather;
    }

    pub fn drawn_card(&self) -> Option<CardId> {
        self.drawn_card
    }

    pub fn selected_hand_card(&self) -> Option<CardId> {
        self.selected_hand_card
    }

    pub fn selected_field_cards(&self) -> &[CardId] {
        &self.selected_field_cards
    }

    pub fn completed_yaku(&self) -> &[YakuResult] {
        &self.completed_yaku
    }

    pub fn koi_koi_caller(&self) -> Option<Player> {
        self.koi_koi_caller
    }

    pub fn koi_koi_count(&self) -> u32 {
        self.koi_koi_count
    }

    pub fn initial_yaku(&self) -> Option<&(Player, YakuResult)> {
        self.initial_yaku.as_ref()
    }

    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    // --- public operations -----------------------------------------------

    /// Selects (or re-selects) the hand card to play this turn.
    pub fn select_hand_card(&mut self, card: CardId) -> Result<HandSelection, GameError> {
        if !matches!(
            self.phase,
            GamePhase::MatchingHand | GamePhase::WaitingForFieldCards | GamePhase::NoMatchesDiscard
        ) {
            return Err(GameError::InvalidPhaseAction {
                action: "select_hand_card",
                phase: self.phase,
            });
        }

        if !self.hands[self.active_player.index()].contains(card) {
            return Err(SelectionError::CardNotInHand(card).into());
        }

        self.selected_hand_card = Some(card);
        self.selected_field_cards.clear();

        let matching = matches_in(&self.field, card);
        if matching.is_empty() {
            self.phase = GamePhase::NoMatchesDiscard;
            return Ok(HandSelection::NoMatches);
        }

        self.phase = GamePhase::WaitingForFieldCards;
        Ok(HandSelection::Matches {
            auto_capture: matching.len() != 2,
            matching,
        })
    }

    /// Selects a field card to capture with the current source card. One or
    /// three matches fill the selection automatically; two matches toggle a
    /// single choice.
    pub fn select_field_card(&mut self, card: CardId) -> Result<FieldSelection, GameError> {
        let source = self.source_card("select_field_card")?;

        if !self.field.contains(card) {
            return Err(SelectionError::CardNotOnField(card).into());
        }
        if !is_match(source, card) {
            return Err(SelectionError::MonthMismatch {
                source,
                field: card,
            }
            .into());
        }

        let matching = matches_in(&self.field, source);
        let auto_selected = match matching.len() {
            3 => {
                self.selected_field_cards = matching;
                true
            }
            2 => {
                if let Some(index) = self.selected_field_cards.iter().position(|&c| c == card) {
                    self.selected_field_cards.remove(index);
                } else {
                    self.selected_field_cards.clear();
                    self.selected_field_cards.push(card);
                }
                false
            }
            _ => {
                self.selected_field_cards = vec![card];
                true
            }
        };

        Ok(FieldSelection {
            selected: self.selected_field_cards.clone(),
            auto_selected,
        })
    }

    /// Discards the selected hand card onto the field, then runs the deck
    /// draw.
    pub fn place_selected_card(&mut self) -> Result<TurnOutcome, GameError> {
        if self.phase != GamePhase::NoMatchesDiscard {
            return Err(GameError::InvalidPhaseAction {
                action: "place_selected_card",
                phase: self.phase,
            });
        }
        let card = self
            .selected_hand_card
            .ok_or(SelectionError::NoSourceCard)?;

        let hand = &mut self.hands[self.active_player.index()];
        let removed = hand.remove(card);
        let added = self.field.add(card);
        debug_assert!(removed && added, "discard must transfer the card");
        self.selected_hand_card = None;

        tracing::debug!(player = %self.active_player, card = %card, "card placed on field");
        Ok(self.draw_from_pile())
    }

    /// Captures the source card together with the selected field cards,
    /// re-validating the selection against the match count first.
    pub fn capture_cards(&mut self) -> Result<TurnOutcome, GameError> {
        let from_hand = match self.phase {
            GamePhase::WaitingForFieldCards => true,
            GamePhase::WaitingForDeckMatch => false,
            _ => {
                return Err(GameError::InvalidPhaseAction {
                    action: "capture_cards",
                    phase: self.phase,
                });
            }
        };

        let source = self.source_card("capture_cards")?;
        let matching = matches_in(&self.field, source);
        let required = if matching.len() == 3 { 3 } else { 1 };
        if self.selected_field_cards.len() != required {
            return Err(SelectionError::WrongCount {
                required,
                selected: self.selected_field_cards.len(),
            }
            .into());
        }
        for &card in &self.selected_field_cards {
            if !self.field.contains(card) {
                return Err(SelectionError::CardNotOnField(card).into());
            }
            if !is_match(source, card) {
                return Err(SelectionError::MonthMismatch {
                    source,
                    field: card,
                }
                .into());
            }
        }

        // validation done; transfer source and field cards to the capture pile
        if from_hand {
            let removed = self.hands[self.active_player.index()].remove(source);
            debug_assert!(removed, "source card must come from the hand");
        } else {
            self.drawn_card = None;
        }
        let pile = &mut self.captured[self.active_player.index()];
        let added = pile.add(source);
        debug_assert!(added, "captured source must be new to the pile");
        for card in std::mem::take(&mut self.selected_field_cards) {
            let removed = self.field.remove(card);
            let added = pile.add(card);
            debug_assert!(removed && added, "field capture must transfer the card");
        }
        self.selected_hand_card = None;

        tracing::debug!(
            player = %self.active_player,
            source = %source,
            captured = self.captured[self.active_player.index()].len(),
            "cards captured"
        );

        if from_hand {
            Ok(self.draw_from_pile())
        } else {
            Ok(self.resolve_scoring())
        }
    }

    /// Koi-koi decision: continue for higher stakes or stop and collect.
    pub fn make_koi_koi_decision(&mut self, continue_play: bool) -> Result<TurnOutcome, GameError> {
        if self.phase != GamePhase::ChoosingKoi {
            return Err(GameError::InvalidPhaseAction {
                action: "make_koi_koi_decision",
                phase: self.phase,
            });
        }

        if continue_play {
            tracing::info!(player = %self.active_player, count = self.koi_koi_count + 1, "koi-koi called");
            self.koi_koi_caller = Some(self.active_player);
            self.koi_koi_count += 1;
            return Ok(self.finish_turn());
        }

        let winner = self.active_player;
        let multiplier = if self.koi_koi_caller == Some(winner) {
            self.koi_koi_count + 1
        } else {
            1
        };
        let points = self.scored_points(winner) * multiplier;
        tracing::info!(player = %winner, points, "shobu called");
        Ok(self.end_round(RoundOutcome {
            winner: Some(winner),
            points,
        }))
    }

    // --- internal steps ---------------------------------------------------

    fn source_card(&self, action: &'static str) -> Result<CardId, GameError> {
        let source = match self.phase {
            GamePhase::WaitingForFieldCards => self.selected_hand_card,
            GamePhase::WaitingForDeckMatch => self.drawn_card,
            _ => {
                return Err(GameError::InvalidPhaseAction {
                    action,
                    phase: self.phase,
                });
            }
        };
        source.ok_or_else(|| SelectionError::NoSourceCard.into())
    }

    /// Automatic deck draw after the hand sub-step. An empty pile ends the
    /// round as an exhaustive draw without scoring.
    fn draw_from_pile(&mut self) -> TurnOutcome {
        let Some(card) = self.draw_pile.draw() else {
            tracing::info!("draw pile exhausted");
            return self.end_round(RoundOutcome {
                winner: None,
                points: 0,
            });
        };

        let matching = matches_in(&self.field, card);
        tracing::debug!(card = %card, matches = matching.len(), "card drawn");

        if matching.is_empty() {
            let added = self.field.add(card);
            debug_assert!(added, "drawn card must be new to the field");
            self.drawn_card = None;
            return self.resolve_scoring();
        }

        self.drawn_card = Some(card);
        self.selected_hand_card = None;
        self.selected_field_cards.clear();
        self.phase = GamePhase::WaitingForDeckMatch;
        TurnOutcome::DeckMatch {
            drawn: card,
            matching,
        }
    }

    /// Single per-turn scoring pass over the active player's capture pile.
    /// Names announced earlier this round are filtered out; their points
    /// still count at round end.
    fn resolve_scoring(&mut self) -> TurnOutcome {
        let pile = &self.captured[self.active_player.index()];
        let ctx = ScoringContext {
            current_month: self.current_month,
            weather: self.weather,
            check_teyaku: false,
            completed_yaku: &self.completed_yaku,
        };
        let results = self.scoring.score(pile, &ctx);
        let new: Vec<YakuResult> = results
            .iter()
            .filter(|result| {
                !self
                    .completed_yaku
                    .iter()
                    .any(|seen| seen.name == result.name)
            })
            .cloned()
            .collect();

        if new.is_empty() {
            return self.finish_turn();
        }

        tracing::info!(player = %self.active_player, count = new.len(), "new yaku completed");

        if let Some(caller) = self.koi_koi_caller {
            if caller != self.active_player {
                // koi-koi penalty: the caller's opponent scored, doubling
                // their win
                let points = results.iter().map(|y| y.points).sum::<u32>() * 2;
                return self.end_round(RoundOutcome {
                    winner: Some(self.active_player),
                    points,
                });
            }
        }

        self.completed_yaku.extend(new.clone());
        self.phase = GamePhase::ChoosingKoi;
        TurnOutcome::NewYaku { yaku: new }
    }

    /// Passes play to the opponent, or ends the round when they have no
    /// cards left to play.
    fn finish_turn(&mut self) -> TurnOutcome {
        let next = self.active_player.opponent();
        if self.hands[next.index()].is_empty() {
            tracing::info!("hands exhausted");
            return self.end_round(RoundOutcome {
                winner: None,
                points: 0,
            });
        }
        self.active_player = next;
        self.selected_hand_card = None;
        self.selected_field_cards.clear();
        self.drawn_card = None;
        self.phase = GamePhase::MatchingHand;
        TurnOutcome::TurnEnd
    }

    /// Current yaku total for a player's capture pile.
    fn scored_points(&self, player: Player) -> u32 {
        let ctx = ScoringContext {
            current_month: self.current_month,
            weather: self.weather,
            check_teyaku: false,
            completed_yaku: &self.completed_yaku,
        };
        self.scoring
            .score(&self.captured[player.index()], &ctx)
            .iter()
            .map(|y| y.points)
            .sum()
    }

    fn end_round(&mut self, outcome: RoundOutcome) -> TurnOutcome {
        tracing::info!(
            winner = outcome.winner.map(|p| p.as_str()).unwrap_or("none"),
            points = outcome.points,
            "round over"
        );
        self.phase = GamePhase::RoundEnd;
        self.drawn_card = None;
        self.selected_hand_card = None;
        self.selected_field_cards.clear();
        self.outcome = Some(outcome.clone());
        TurnOutcome::RoundEnd(outcome)
    }
}
