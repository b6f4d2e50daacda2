use crate::model::card_set::CardSet;
use crate::scoring::context::{ScoringContext, Weather};
use crate::scoring::rules::{ViewingMode, ViewingRules};
use crate::scoring::yaku::{self, YakuName, YakuResult};

/// Home month of a viewing pattern: cherry-blossom season for hanami,
/// moon-viewing season for tsukimi.
const fn home_month(name: YakuName) -> u8 {
    match name {
        YakuName::TsukimiZake => 8,
        _ => 3,
    }
}

fn modified_points(
    name: YakuName,
    base: u32,
    ctx: &ScoringContext<'_>,
    rules: &ViewingRules,
) -> u32 {
    if rules.mode == ViewingMode::Limited {
        let has_other = ctx.completed_yaku.iter().any(|y| !y.name.is_viewing());
        if !has_other {
            return 0;
        }
    }

    if rules.seasonal_only && ctx.current_month != home_month(name) {
        return 0;
    }

    if rules.weather_dependent {
        match (name, ctx.weather) {
            (YakuName::HanamiZake, Some(Weather::Rainy)) => return 0,
            (YakuName::TsukimiZake, Some(Weather::Foggy)) => return 0,
            _ => {}
        }
    }

    let mut points = base;
    if rules.seasonal_bonus && ctx.current_month == home_month(name) {
        points *= 2;
    }
    points
}

/// Viewing yaku: hanami-zake and tsukimi-zake. Every knob composes; any one
/// of them can zero a pattern.
pub fn check_viewing(
    rules: &ViewingRules,
    cards: &CardSet,
    ctx: &ScoringContext<'_>,
) -> Vec<YakuResult> {
    let mut completed = Vec::new();

    if rules.mode == ViewingMode::Never {
        return completed;
    }

    for def in [&yaku::HANAMI_ZAKE, &yaku::TSUKIMI_ZAKE] {
        let base = def.check(cards);
        if base == 0 {
            continue;
        }
        let points = modified_points(def.name, base, ctx, rules);
        if points > 0 {
            completed.push(YakuResult {
                name: def.name,
                points,
            });
        }
    }

    completed
}

#[cfg(test)]
mod tests {
    use super::check_viewing;
    use crate::model::card::CardId;
    use crate::model::card_set::CardSet;
    use crate::scoring::context::{ScoringContext, Weather};
    use crate::scoring::rules::{ViewingMode, ViewingRules};
    use crate::scoring::yaku::{YakuName, YakuResult};

    fn hanami() -> CardSet {
        CardSet::with_cards([CardId::CURTAIN, CardId::SAKE_CUP])
    }

    fn both() -> CardSet {
        CardSet::with_cards([CardId::CURTAIN, CardId::MOON, CardId::SAKE_CUP])
    }

    #[test]
    fn scores_both_viewing_yaku_by_default() {
        let results = check_viewing(&ViewingRules::default(), &both(), &ScoringContext::new(1));
        let names: Vec<YakuName> = results.iter().map(|r| r.name).collect();
        assert_eq!(names, vec![YakuName::HanamiZake, YakuName::TsukimiZake]);
        assert!(results.iter().all(|r| r.points == 3));
    }

    #[test]
    fn never_mode_suppresses_everything() {
        let rules = ViewingRules {
            mode: ViewingMode::Never,
            ..ViewingRules::default()
        };
        assert!(check_viewing(&rules, &both(), &ScoringContext::new(3)).is_empty());
    }

    #[test]
    fn limited_mode_needs_a_non_viewing_yaku() {
        let rules = ViewingRules {
            mode: ViewingMode::Limited,
            ..ViewingRules::default()
        };
        assert!(check_viewing(&rules, &hanami(), &ScoringContext::new(1)).is_empty());

        let completed = [YakuResult {
            name: YakuName::TsukimiZake,
            points: 3,
        }];
        let ctx = ScoringContext {
            completed_yaku: &completed,
            ..ScoringContext::new(1)
        };
        assert!(
            check_viewing(&rules, &hanami(), &ctx).is_empty(),
            "another viewing yaku does not unlock limited mode"
        );

        let completed = [YakuResult {
            name: YakuName::Kasu,
            points: 1,
        }];
        let ctx = ScoringContext {
            completed_yaku: &completed,
            ..ScoringContext::new(1)
        };
        assert_eq!(check_viewing(&rules, &hanami(), &ctx).len(), 1);
    }

    #[test]
    fn rain_cancels_hanami_but_not_tsukimi() {
        let rules = ViewingRules {
            weather_dependent: true,
            ..ViewingRules::default()
        };
        let ctx = ScoringContext {
            weather: Some(Weather::Rainy),
            ..ScoringContext::new(1)
        };
        let results = check_viewing(&rules, &both(), &ctx);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, YakuName::TsukimiZake);
    }

    #[test]
    fn fog_cancels_tsukimi() {
        let rules = ViewingRules {
            weather_dependent: true,
            ..ViewingRules::default()
        };
        let ctx = ScoringContext {
            weather: Some(Weather::Foggy),
            ..ScoringContext::new(1)
        };
        let results = check_viewing(&rules, &both(), &ctx);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, YakuName::HanamiZake);
    }

    #[test]
    fn seasonal_only_restricts_to_home_month() {
        let rules = ViewingRules {
            seasonal_only: true,
            ..ViewingRules::default()
        };
        let results = check_viewing(&rules, &both(), &ScoringContext::new(3));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, YakuName::HanamiZake);

        let results = check_viewing(&rules, &both(), &ScoringContext::new(8));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, YakuName::TsukimiZake);

        assert!(check_viewing(&rules, &both(), &ScoringContext::new(5)).is_empty());
    }

    #[test]
    fn seasonal_bonus_doubles_in_home_month() {
        let rules = ViewingRules {
            seasonal_bonus: true,
            ..ViewingRules::default()
        };
        let results = check_viewing(&rules, &both(), &ScoringContext::new(8));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].points, 3, "hanami is out of season");
        assert_eq!(results[1].points, 6, "tsukimi doubles in month 8");
    }

    #[test]
    fn all_knobs_compose() {
        let rules = ViewingRules {
            mode: ViewingMode::Always,
            weather_dependent: true,
            seasonal_bonus: true,
            seasonal_only: true,
        };
        let ctx = ScoringContext {
            weather: Some(Weather::Rainy),
            ..ScoringContext::new(3)
        };
        // in season but rained out
        assert!(check_viewing(&rules, &hanami(), &ctx).is_empty());

        let ctx = ScoringContext::new(3);
        let results = check_viewing(&rules, &hanami(), &ctx);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].points, 6);
    }
}
