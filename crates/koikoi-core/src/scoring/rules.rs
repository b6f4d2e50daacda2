use serde::{Deserialize, Serialize};

/// How viewing yaku (hanami-zake, tsukimi-zake) are recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ViewingMode {
    Never,
    Limited,
    #[default]
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrightRules {
    pub allow_multiple: bool,
}

impl Default for BrightRules {
    fn default() -> Self {
        Self {
            allow_multiple: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimalRules {
    pub allow_multiple: bool,
    /// Points per animal beyond the pattern threshold.
    pub extra_points: u32,
    /// Whether the sake cup counts as an animal.
    pub count_wildcard: bool,
}

impl Default for AnimalRules {
    fn default() -> Self {
        Self {
            allow_multiple: true,
            extra_points: 1,
            count_wildcard: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RibbonRules {
    pub allow_multiple: bool,
    /// Points per ribbon beyond five.
    pub extra_points: u32,
}

impl Default for RibbonRules {
    fn default() -> Self {
        Self {
            allow_multiple: true,
            extra_points: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewingRules {
    pub mode: ViewingMode,
    /// Rainy weather cancels hanami, foggy weather cancels tsukimi.
    pub weather_dependent: bool,
    /// Double points in the pattern's home month.
    pub seasonal_bonus: bool,
    /// Cancel the pattern outside its home month.
    pub seasonal_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChaffRules {
    /// Points per chaff beyond ten.
    pub extra_points: u32,
    /// Whether the sake cup counts as a chaff card.
    pub count_wildcard: bool,
}

impl Default for ChaffRules {
    fn default() -> Self {
        Self {
            extra_points: 1,
            count_wildcard: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonthRules {
    /// Score month sets other than the context month too.
    pub allow_multiple_months: bool,
}

/// Immutable bundle of per-category rule knobs, chosen when a game is
/// created and never mutated mid-round. The hand (teyaku) category has no
/// knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuleConfig {
    pub bright: BrightRules,
    pub animal: AnimalRules,
    pub ribbon: RibbonRules,
    pub viewing: ViewingRules,
    pub chaff: ChaffRules,
    pub month: MonthRules,
}

impl RuleConfig {
    /// Standard koi-koi rules.
    pub fn koikoi() -> Self {
        Self {
            bright: BrightRules {
                allow_multiple: false,
            },
            animal: AnimalRules {
                allow_multiple: true,
                extra_points: 1,
                count_wildcard: true,
            },
            ribbon: RibbonRules {
                allow_multiple: true,
                extra_points: 1,
            },
            viewing: ViewingRules {
                mode: ViewingMode::Always,
                weather_dependent: true,
                seasonal_bonus: true,
                seasonal_only: true,
            },
            chaff: ChaffRules {
                extra_points: 1,
                count_wildcard: false,
            },
            month: MonthRules {
                allow_multiple_months: false,
            },
        }
    }

    /// Hachi-hachi variant: stricter single-yaku scoring, looser month sets.
    pub fn hachi() -> Self {
        Self {
            bright: BrightRules {
                allow_multiple: true,
            },
            animal: AnimalRules {
                allow_multiple: false,
                extra_points: 1,
                count_wildcard: false,
            },
            ribbon: RibbonRules {
                allow_multiple: false,
                extra_points: 1,
            },
            viewing: ViewingRules {
                mode: ViewingMode::Always,
                weather_dependent: false,
                seasonal_bonus: false,
                seasonal_only: false,
            },
            chaff: ChaffRules {
                extra_points: 0,
                count_wildcard: false,
            },
            month: MonthRules {
                allow_multiple_months: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RuleConfig, ViewingMode};

    #[test]
    fn presets_differ_where_expected() {
        let standard = RuleConfig::koikoi();
        let hachi = RuleConfig::hachi();
        assert!(!standard.bright.allow_multiple);
        assert!(hachi.bright.allow_multiple);
        assert!(standard.animal.count_wildcard);
        assert!(!hachi.animal.count_wildcard);
        assert!(standard.viewing.weather_dependent);
        assert!(!hachi.viewing.weather_dependent);
        assert!(hachi.month.allow_multiple_months);
    }

    #[test]
    fn default_matches_per_category_defaults() {
        let config = RuleConfig::default();
        assert_eq!(config.viewing.mode, ViewingMode::Always);
        assert!(!config.viewing.weather_dependent);
        assert_eq!(config.chaff.extra_points, 1);
        assert!(!config.chaff.count_wildcard);
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = RuleConfig::hachi();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RuleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: RuleConfig =
            serde_json::from_str(r#"{"bright": {"allowMultiple": true}}"#).unwrap();
        assert!(parsed.bright.allow_multiple);
        assert_eq!(parsed.animal, RuleConfig::default().animal);
    }
}
