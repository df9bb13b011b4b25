use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = f64;

/// Per-metric scores for one athlete. Leaf scores are whole numbers in 1..=5;
/// the bilateral composites (`agility`, `short_pass`, `long_pass`, `shoot`) are the
/// unrounded mean of their two sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub run10m: Score,
    pub run30m: Score,
    pub agility: Score,
    pub agility_l: Score,
    pub agility_r: Score,
    pub vertical_jump: Score,
    pub triple_jump: Score,
    pub sit_ups: Score,
    pub coordination: Score,
    pub endurance: Score,
    pub dribble: Score,
    pub lifting: Score,
    pub short_pass: Score,
    pub short_pass_l: Score,
    pub short_pass_r: Score,
    pub long_pass: Score,
    pub long_pass_l: Score,
    pub long_pass_r: Score,
    pub shoot: Score,
    pub shoot_l: Score,
    pub shoot_r: Score,
}

impl ScoreRecord {
    /// Every leaf and composite entry, keyed by its metric identifier.
    pub fn entries(&self) -> [(&'static str, Score); 21] {
        [
            ("run10m", self.run10m),
            ("run30m", self.run30m),
            ("agility", self.agility),
            ("agilityL", self.agility_l),
            ("agilityR", self.agility_r),
            ("verticalJump", self.vertical_jump),
            ("tripleJump", self.triple_jump),
            ("sitUps", self.sit_ups),
            ("coordination", self.coordination),
            ("endurance", self.endurance),
            ("dribble", self.dribble),
            ("lifting", self.lifting),
            ("shortPass", self.short_pass),
            ("shortPassL", self.short_pass_l),
            ("shortPassR", self.short_pass_r),
            ("longPass", self.long_pass),
            ("longPassL", self.long_pass_l),
            ("longPassR", self.long_pass_r),
            ("shoot", self.shoot),
            ("shootL", self.shoot_l),
            ("shootR", self.shoot_r),
        ]
    }

    pub fn get(&self, key: &str) -> Option<Score> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map(|(_, score)| score)
    }

    pub fn physical_average(&self) -> Score {
        (self.run10m + self.run30m + self.agility + self.vertical_jump + self.triple_jump) / 5.0
    }

    pub fn technical_average(&self) -> Score {
        (self.dribble + self.lifting + self.short_pass + self.long_pass + self.shoot) / 5.0
    }

    /// A record with every entry set to `score`.
    #[cfg(test)]
    pub fn uniform(score: Score) -> Self {
        Self {
            run10m: score,
            run30m: score,
            agility: score,
            agility_l: score,
            agility_r: score,
            vertical_jump: score,
            triple_jump: score,
            sit_ups: score,
            coordination: score,
            endurance: score,
            dribble: score,
            lifting: score,
            short_pass: score,
            short_pass_l: score,
            short_pass_r: score,
            long_pass: score,
            long_pass_l: score,
            long_pass_r: score,
            shoot: score,
            shoot_l: score,
            shoot_r: score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AthleteType {
    SuperAce,
    PhysicalMonster,
    Technician,
    Potential,
    Bottleneck,
}

impl AthleteType {
    pub const ALL: [AthleteType; 5] = [
        AthleteType::SuperAce,
        AthleteType::PhysicalMonster,
        AthleteType::Technician,
        AthleteType::Potential,
        AthleteType::Bottleneck,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AthleteType::SuperAce => "SUPER_ACE",
            AthleteType::PhysicalMonster => "PHYSICAL_MONSTER",
            AthleteType::Technician => "TECHNICIAN",
            AthleteType::Potential => "POTENTIAL",
            AthleteType::Bottleneck => "BOTTLENECK",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AthleteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
