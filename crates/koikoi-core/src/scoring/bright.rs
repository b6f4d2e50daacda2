use crate::model::card::CardId;
use crate::model::card_set::CardSet;
use crate::scoring::rules::BrightRules;
use crate::scoring::yaku::{self, YakuDef, YakuResult};

/// Bright yaku in precedence order: gokou, shikou, ame-shikou, sankou.
///
/// Shikou and sankou are evaluated with the rain-man removed: a bright set
/// containing it belongs to ame-shikou (or gokou) and never scores the
/// plain four- or three-bright patterns.
pub fn check_bright(rules: &BrightRules, cards: &CardSet) -> Vec<YakuResult> {
    let mut completed = Vec::new();

    let mut without_rain_man = cards.clone();
    without_rain_man.remove(CardId::RAIN_MAN);

    let precedence: [(&YakuDef, &CardSet); 4] = [
        (&yaku::GOKOU, cards),
        (&yaku::SHIKOU, &without_rain_man),
        (&yaku::AME_SHIKOU, cards),
        (&yaku::SANKOU, &without_rain_man),
    ];

    for (def, set) in precedence {
        let points = def.check(set);
        if points > 0 {
            completed.push(YakuResult {
                name: def.name,
                points,
            });
            if !rules.allow_multiple {
                break;
            }
        }
    }

    completed
}
