use crate::types::athlete::{AgeGroup, Category, Gender};

/// Applied when a category has no coefficient; leaves raw values unchanged.
pub const NEUTRAL_COEFFICIENT: f64 = 1.0;

/// Younger and less physically mature categories get larger multipliers.
pub const CATEGORY_COEFFICIENTS: [(AgeGroup, Gender, f64); 8] = [
    (AgeGroup::U18, Gender::Male, 1.0),
    (AgeGroup::U18, Gender::Female, 1.15),
    (AgeGroup::U15, Gender::Male, 1.2),
    (AgeGroup::U15, Gender::Female, 1.35),
    (AgeGroup::U12, Gender::Male, 1.45),
    (AgeGroup::U12, Gender::Female, 1.6),
    (AgeGroup::U10, Gender::Male, 1.75),
    (AgeGroup::U10, Gender::Female, 1.9),
];

pub fn builtin() -> impl Iterator<Item = (Category, f64)> {
    CATEGORY_COEFFICIENTS
        .into_iter()
        .map(|(age_group, gender, coefficient)| (Category::new(age_group, gender), coefficient))
}
