use crate::model::card_set::CardSet;
use crate::scoring::context::ScoringContext;
use crate::scoring::rules::RuleConfig;
use crate::scoring::yaku::YakuResult;
use crate::scoring::{animal, bright, chaff, hand, month, ribbon, viewing};

/// Runs the category checkers under one rule configuration.
///
/// Hand yaku and play yaku are mutually exclusive scoring modes: a teyaku
/// context consults the hand checker alone, everything else runs the six
/// capture categories in fixed order.
#[derive(Debug, Clone)]
pub struct ScoringManager {
    config: RuleConfig,
}

impl ScoringManager {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Scores a card set. Pure: identical inputs yield an identical result
    /// list, order included.
    ///
    /// Only the caller-supplied `ctx.completed_yaku` reaches the viewing
    /// checker; results found earlier in the same call never do.
    pub fn score(&self, cards: &CardSet, ctx: &ScoringContext<'_>) -> Vec<YakuResult> {
        if ctx.check_teyaku {
            return hand::check_hand(cards, ctx);
        }

        let mut completed = Vec::new();
        completed.extend(bright::check_bright(&self.config.bright, cards));
        completed.extend(animal::check_animal(&self.config.animal, cards));
        completed.extend(ribbon::check_ribbon(&self.config.ribbon, cards));
        completed.extend(viewing::check_viewing(&self.config.viewing, cards, ctx));
        completed.extend(chaff::check_chaff(&self.config.chaff, cards));
        completed.extend(month::check_month(&self.config.month, cards, ctx));
        completed
    }
}

impl Default for ScoringManager {
    fn default() -> Self {
        Self::new(RuleConfig::koikoi())
    }
}
