use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::game::error::{GameError, StateDataError};
use crate::game::player::Player;
use crate::game::round::KoiKoiRound;
use crate::model::card::{CARD_COUNT, CardId};
use crate::model::card_set::CardSet;
use crate::model::draw_pile::DrawPile;
use crate::scoring::context::Weather;
use crate::scoring::manager::ScoringManager;
use crate::scoring::yaku::YakuResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub hand: Vec<CardId>,
    pub captured: Vec<CardId>,
}

/// Persisted round state. Card ids land as plain numbers; the deck is
/// bottom-to-top. Phase, selections, and koi-koi counters are per-turn state
/// and are not persisted: a restored round starts at the top of a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub deck: Vec<CardId>,
    pub field: Vec<CardId>,
    pub players: BTreeMap<String, PlayerSnapshot>,
    pub current_player: String,
    pub current_month: u8,
    pub weather: Option<Weather>,
    pub completed_yaku: Vec<YakuResult>,
}

impl RoundSnapshot {
    pub fn capture(round: &KoiKoiRound) -> Self {
        let mut players = BTreeMap::new();
        for player in Player::BOTH {
            players.insert(
                player.as_str().to_string(),
                PlayerSnapshot {
                    hand: round.hand(player).cards().to_vec(),
                    captured: round.captured(player).cards().to_vec(),
                },
            );
        }
        // a mid-turn drawn card is in no collection; it returns to the top
        // of the deck so the persisted shape stays a full partition
        let mut deck = round.draw_pile().cards().to_vec();
        if let Some(drawn) = round.drawn_card() {
            deck.push(drawn);
        }
        RoundSnapshot {
            deck,
            field: round.field().cards().to_vec(),
            players,
            current_player: round.active_player().as_str().to_string(),
            current_month: round.current_month(),
            weather: round.weather(),
            completed_yaku: round.completed_yaku().to_vec(),
        }
    }

    /// Validates the six-collection partition invariant and rebuilds the
    /// round. Rejected payloads leave no partial state behind.
    pub fn restore(&self, scoring: ScoringManager) -> Result<KoiKoiRound, GameError> {
        self.validate()?;

        let active = Player::from_str(&self.current_player)
            .map_err(|_| StateDataError::UnknownPlayer(self.current_player.clone()))?;

        let mut hands = [CardSet::new(), CardSet::new()];
        let mut captured = [CardSet::new(), CardSet::new()];
        for player in Player::BOTH {
            let snapshot = self
                .players
                .get(player.as_str())
                .ok_or_else(|| StateDataError::UnknownPlayer(player.as_str().to_string()))?;
            hands[player.index()] = CardSet::with_cards(snapshot.hand.iter().copied());
            captured[player.index()] = CardSet::with_cards(snapshot.captured.iter().copied());
        }

        Ok(KoiKoiRound::from_parts(
            scoring,
            DrawPile::from_cards(self.deck.clone()),
            CardSet::with_cards(self.field.iter().copied()),
            hands,
            captured,
            active,
            self.current_month,
            self.weather,
            self.completed_yaku.clone(),
        ))
    }

    fn validate(&self) -> Result<(), GameError> {
        if !(1..=12).contains(&self.current_month) {
            return Err(StateDataError::InvalidMonth(self.current_month).into());
        }

        for key in self.players.keys() {
            Player::from_str(key)
                .map_err(|_| StateDataError::UnknownPlayer(key.clone()))?;
        }
        for player in Player::BOTH {
            if !self.players.contains_key(player.as_str()) {
                return Err(StateDataError::UnknownPlayer(player.as_str().to_string()).into());
            }
        }

        let mut seen = [false; CARD_COUNT];
        let mut total = 0usize;
        let collections = [&self.deck, &self.field]
            .into_iter()
            .chain(
                self.players
                    .values()
                    .flat_map(|p| [&p.hand, &p.captured]),
            );
        for collection in collections {
            for &card in collection {
                if seen[card.index()] {
                    return Err(StateDataError::DuplicateCard(card).into());
                }
                seen[card.index()] = true;
                total += 1;
            }
        }
        if total != CARD_COUNT {
            return Err(StateDataError::WrongCardTotal(total).into());
        }

        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::RoundSnapshot;
    use crate::game::error::{GameError, StateDataError};
    use crate::game::player::Player;
    use crate::game::round::GamePhase;
    use crate::model::card::CardId;
    use crate::scoring::manager::ScoringManager;
    use crate::scoring::rules::RuleConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dealt_round() -> crate::game::round::KoiKoiRound {
        // seeds are cheap; find one whose deal reaches normal play
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let round = crate::game::round::KoiKoiRound::deal(
                &mut rng,
                ScoringManager::default(),
                3,
                None,
                None,
            );
            if round.phase() == GamePhase::MatchingHand {
                return round;
            }
        }
        unreachable!("every seed dealt a teyaku");
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let round = dealt_round();
        let snapshot = RoundSnapshot::capture(&round);
        let json = snapshot.to_json().unwrap();
        let parsed = RoundSnapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snapshot);

        let restored = parsed.restore(ScoringManager::default()).unwrap();
        assert_eq!(RoundSnapshot::capture(&restored), snapshot);
        assert_eq!(restored.phase(), GamePhase::MatchingHand);
        assert_eq!(restored.active_player(), round.active_player());
        assert_eq!(restored.current_month(), 3);
    }

    #[test]
    fn serialized_fields_use_the_wire_names() {
        let round = dealt_round();
        let json = RoundSnapshot::capture(&round).to_json().unwrap();
        assert!(json.contains("\"currentPlayer\""));
        assert!(json.contains("\"currentMonth\""));
        assert!(json.contains("\"completedYaku\""));
        assert!(json.contains("\"player1\""));
        assert!(json.contains("\"player2\""));
    }

    #[test]
    fn duplicated_card_is_rejected() {
        let round = dealt_round();
        let mut snapshot = RoundSnapshot::capture(&round);
        let stolen = snapshot.field[0];
        snapshot.deck.push(stolen);
        match snapshot.restore(ScoringManager::default()) {
            Err(GameError::InvalidStateData(StateDataError::DuplicateCard(card))) => {
                assert_eq!(card, stolen);
            }
            other => panic!("expected DuplicateCard, got {other:?}"),
        }
    }

    #[test]
    fn missing_card_is_rejected() {
        let round = dealt_round();
        let mut snapshot = RoundSnapshot::capture(&round);
        snapshot.deck.pop();
        match snapshot.restore(ScoringManager::default()) {
            Err(GameError::InvalidStateData(StateDataError::WrongCardTotal(total))) => {
                assert_eq!(total, 47);
            }
            other => panic!("expected WrongCardTotal, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_card_fails_json_parsing() {
        let round = dealt_round();
        let json = RoundSnapshot::capture(&round).to_json().unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["deck"][0] = serde_json::json!(99);
        let broken = value.to_string();
        assert!(RoundSnapshot::from_json(&broken).is_err());
    }

    #[test]
    fn unknown_player_key_is_rejected() {
        let round = dealt_round();
        let mut snapshot = RoundSnapshot::capture(&round);
        let entry = snapshot.players.remove("player2").unwrap();
        snapshot.players.insert("player3".to_string(), entry);
        match snapshot.restore(ScoringManager::default()) {
            Err(GameError::InvalidStateData(StateDataError::UnknownPlayer(id))) => {
                assert_eq!(id, "player3");
            }
            other => panic!("expected UnknownPlayer, got {other:?}"),
        }
    }

    #[test]
    fn invalid_month_is_rejected() {
        let round = dealt_round();
        let mut snapshot = RoundSnapshot::capture(&round);
        snapshot.current_month = 13;
        assert!(matches!(
            snapshot.restore(ScoringManager::new(RuleConfig::koikoi())),
            Err(GameError::InvalidStateData(StateDataError::InvalidMonth(13))),
        ));
    }

    #[test]
    fn snapshot_lists_cards_in_collection_order() {
        let round = dealt_round();
        let snapshot = RoundSnapshot::capture(&round);
        let field: Vec<CardId> = round.field().iter().collect();
        assert_eq!(snapshot.field, field);
        assert_eq!(
            snapshot.players[Player::One.as_str()].hand,
            round.hand(Player::One).cards().to_vec(),
        );
    }
}
