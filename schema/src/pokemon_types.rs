use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Elemental tag carried by every creature. Purely descriptive: there is no
/// effectiveness chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Display)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Flying,
    Poison,
    Rock,
    Ground,
}

/// The four combat stats plus speed. Used as the key for `Stats::get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum StatType {
    #[strum(to_string = "Attack")]
    Attack,
    #[strum(to_string = "Defense")]
    Defense,
    #[strum(to_string = "Sp. Attack")]
    SpecialAttack,
    #[strum(to_string = "Sp. Defense")]
    SpecialDefense,
    #[strum(to_string = "Speed")]
    Speed,
}

impl StatType {
    /// Stats that grow on level-up. Speed is left alone.
    pub fn is_combat_stat(self) -> bool {
        !matches!(self, StatType::Speed)
    }
}

/// Persistent status marker. A creature holds at most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum StatusCondition {
    #[strum(to_string = "burned")]
    Burn,
    #[strum(to_string = "poisoned")]
    Poison,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_combat_stats_exclude_speed() {
        let combat: Vec<StatType> = StatType::iter().filter(|s| s.is_combat_stat()).collect();
        assert_eq!(
            combat,
            vec![
                StatType::Attack,
                StatType::Defense,
                StatType::SpecialAttack,
                StatType::SpecialDefense
            ]
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(StatType::SpecialDefense.to_string(), "Sp. Defense");
        assert_eq!(StatusCondition::Burn.to_string(), "burned");
        assert_eq!(PokemonType::Water.to_string(), "Water");
    }
}
