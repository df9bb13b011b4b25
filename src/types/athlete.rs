use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ID_LENGTH: usize = 10;
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeGroup {
    U10,
    U12,
    U15,
    U18,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [AgeGroup::U10, AgeGroup::U12, AgeGroup::U15, AgeGroup::U18];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::U10 => "U10",
            AgeGroup::U12 => "U12",
            AgeGroup::U15 => "U15",
            AgeGroup::U18 => "U18",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

/// Age group and gender pair used to select a normalization coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category {
    pub age_group: AgeGroup,
    pub gender: Gender,
}

impl Category {
    pub fn new(age_group: AgeGroup, gender: Gender) -> Self {
        Self { age_group, gender }
    }

    pub fn all() -> impl Iterator<Item = Category> {
        AgeGroup::ALL
            .into_iter()
            .flat_map(|age_group| Gender::ALL.into_iter().map(move |gender| Self::new(age_group, gender)))
    }

    /// Table key such as `U12_M`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.age_group.as_str(), self.gender.code())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (age, gender) = s
            .split_once('_')
            .ok_or_else(|| format!("category key must look like U12_M: {s}"))?;
        let age_group = AgeGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == age)
            .ok_or_else(|| format!("unknown age group: {age}"))?;
        let gender = Gender::ALL
            .into_iter()
            .find(|g| g.code() == gender)
            .ok_or_else(|| format!("unknown gender code: {gender}"))?;
        Ok(Self::new(age_group, gender))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteInfo {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub club_name: String,
    #[serde(default)]
    pub club_id: String,
    pub age_group: AgeGroup,
    pub gender: Gender,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub email: String,
}

impl AthleteInfo {
    pub fn category(&self) -> Category {
        Category::new(self.age_group, self.gender)
    }

    /// Fills in a generated id when the profile arrived without one.
    pub fn ensure_id<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        self.id.get_or_insert_with(|| generate_id(ID_LENGTH, rng))
    }
}

pub fn generate_id<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
