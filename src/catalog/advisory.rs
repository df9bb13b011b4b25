use crate::error::CoachError;
use crate::types::report::AdviceItem;
use crate::types::scoring::AthleteType;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryPhase {
    pub title: &'static str,
    pub analysis: &'static str,
    pub action: &'static str,
    pub goal: &'static str,
}

impl AdvisoryPhase {
    pub fn to_advice_item(&self) -> AdviceItem {
        AdviceItem {
            title: self.title.to_string(),
            improvement: self.analysis.to_string(),
            key_point: self.action.to_string(),
            goal: self.goal.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryPattern {
    pub athlete_type: AthleteType,
    pub description: &'static str,
    pub play_style: &'static str,
    pub phases: [AdvisoryPhase; 2],
}

pub const ADVISORY_MASTER: [AdvisoryPattern; 5] = [
    AdvisoryPattern {
        athlete_type: AthleteType::SuperAce,
        description: "Super Ace: top level in both physical and technical tests. Expected to carry the team and keep raising the bar.",
        play_style: "Complete attacker who decides matches",
        phases: [
            AdvisoryPhase {
                title: "Faster decisions at high tempo",
                analysis: "The ability is already there. Speed of perception is the next limit.",
                action: "Scan twice before every reception and play with one or two touches in small-sided games.",
                goal: "Choose the next action before the ball arrives in every training game.",
            },
            AdvisoryPhase {
                title: "Explosive actions from a standstill as a tactical switch",
                analysis: "Use your physical gifts as the trigger that breaks a defensive line.",
                action: "Deliberately slow the play down, then accelerate past the marker in one movement.",
                goal: "Create two clear chances per match from a change of pace.",
            },
        ],
    },
    AdvisoryPattern {
        athlete_type: AthleteType::PhysicalMonster,
        description: "Physical Monster: overwhelming athletic ability. Once technique catches up, this player is unstoppable.",
        play_style: "Powerful runner who wins every duel",
        phases: [
            AdvisoryPhase {
                title: "Braking from top speed",
                analysis: "Over-running the ball costs possession at the end of sprints.",
                action: "Stop within one step from a full sprint, then add a first touch into the stop.",
                goal: "Keep the ball after every sprint in the weekly drill.",
            },
            AdvisoryPhase {
                title: "Shielding with body advantage",
                analysis: "Use your frame to protect the ball when contact comes.",
                action: "Screen drills with the body between opponent and ball, holding for five seconds.",
                goal: "Win and keep possession in seven of ten shielding reps.",
            },
        ],
    },
    AdvisoryPattern {
        athlete_type: AthleteType::Technician,
        description: "Technician: outstanding feel for the ball. Raising physical intensity will let that talent shine brighter.",
        play_style: "Creative playmaker who controls the rhythm",
        phases: [
            AdvisoryPhase {
                title: "Technique under contact",
                analysis: "Balance breaks down when an opponent closes in.",
                action: "Receive and pass while a partner leans into you with light contact.",
                goal: "Complete passes under contact at the same rate as without it.",
            },
            AdvisoryPhase {
                title: "An engine for sustained intensity",
                analysis: "Late-match accuracy drops as fatigue sets in.",
                action: "Interval runs followed immediately by accurate passing sets while the heart rate is high.",
                goal: "Keep passing accuracy steady from the first to the last set.",
            },
        ],
    },
    AdvisoryPattern {
        athlete_type: AthleteType::Potential,
        description: "Potential: a rough diamond with plenty of room to grow. First build one weapon you can always rely on.",
        play_style: "Developing all-rounder with room to grow",
        phases: [
            AdvisoryPhase {
                title: "Build one decisive weapon",
                analysis: "Opponents do not yet feel threatened by any single skill.",
                action: "Take your highest scoring test from this assessment and train it every day.",
                goal: "Raise that metric by one level at the next assessment.",
            },
            AdvisoryPhase {
                title: "An athletic foundation",
                analysis: "A weapon needs a body that can repeat it for the whole match.",
                action: "Core training three times a week and regular meals around sessions.",
                goal: "Finish every session without a drop in effort.",
            },
        ],
    },
    AdvisoryPattern {
        athlete_type: AthleteType::Bottleneck,
        description: "Bottleneck: real talent held back by a few weak points that narrow the options in play.",
        play_style: "Talented player held back by specific gaps",
        phases: [
            AdvisoryPhase {
                title: "Fill the gaps that limit performance",
                analysis: "Tests scored at the lowest level are holding the rest back.",
                action: "Fifteen minutes of targeted work on the lowest tests every day.",
                goal: "Lift every lowest-level test by one step.",
            },
            AdvisoryPhase {
                title: "Merge the fixed weaknesses with your strengths",
                analysis: "With the gaps closed, your real strengths become more effective.",
                action: "Use the former weak skills on purpose in practice matches.",
                goal: "Use every improved skill at least once per match.",
            },
        ],
    },
];

/// Advisory patterns indexed by athlete type. Construction fails unless every type is covered.
#[derive(Debug, Clone)]
pub struct AdvisoryBook {
    patterns: Vec<AdvisoryPattern>,
}

impl AdvisoryBook {
    pub fn from_patterns(patterns: &[AdvisoryPattern]) -> Result<Self, CoachError> {
        let mut ordered = Vec::with_capacity(AthleteType::ALL.len());
        for athlete_type in AthleteType::ALL {
            let mut matches = patterns
                .iter()
                .filter(|pattern| pattern.athlete_type == athlete_type);
            let pattern = matches.next().ok_or_else(|| {
                CoachError::Catalog(format!("no advisory pattern for {athlete_type}"))
            })?;
            if matches.next().is_some() {
                return Err(CoachError::Catalog(format!(
                    "duplicate advisory pattern for {athlete_type}"
                )));
            }
            ordered.push(pattern.clone());
        }
        Ok(Self { patterns: ordered })
    }

    pub fn lookup(&self, athlete_type: AthleteType) -> &AdvisoryPattern {
        &self.patterns[athlete_type.index()]
    }
}
