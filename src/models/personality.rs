use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

/// One side of a personality axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Letter {
    pub fn axis(self) -> Axis {
        match self {
            Letter::E | Letter::I => Axis::EI,
            Letter::S | Letter::N => Axis::SN,
            Letter::T | Letter::F => Axis::TF,
            Letter::J | Letter::P => Axis::JP,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::E => 'E',
            Letter::I => 'I',
            Letter::S => 'S',
            Letter::N => 'N',
            Letter::T => 'T',
            Letter::F => 'F',
            Letter::J => 'J',
            Letter::P => 'P',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'E' => Some(Letter::E),
            'I' => Some(Letter::I),
            'S' => Some(Letter::S),
            'N' => Some(Letter::N),
            'T' => Some(Letter::T),
            'F' => Some(Letter::F),
            'J' => Some(Letter::J),
            'P' => Some(Letter::P),
            _ => None,
        }
    }
}

/// The four personality dimensions, in label order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    EI,
    SN,
    TF,
    JP,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::EI, Axis::SN, Axis::TF, Axis::JP];

    /// The axis' two letters; the first one wins ties
    pub fn letters(self) -> (Letter, Letter) {
        match self {
            Axis::EI => (Letter::E, Letter::I),
            Axis::SN => (Letter::S, Letter::N),
            Axis::TF => (Letter::T, Letter::F),
            Axis::JP => (Letter::J, Letter::P),
        }
    }
}

/// Answer counts per letter
///
/// All eight letters are present from construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisScores(BTreeMap<Letter, u32>);

impl Default for AxisScores {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisScores {
    pub fn new() -> Self {
        let letters = Axis::ALL.iter().flat_map(|axis| {
            let (first, second) = axis.letters();
            [first, second]
        });
        Self(letters.map(|letter| (letter, 0)).collect())
    }

    /// Builds scores from explicit counts; letters not listed stay at zero
    pub fn from_counts(counts: &[(Letter, u32)]) -> Self {
        let mut scores = Self::new();
        for (letter, count) in counts {
            scores.0.insert(*letter, *count);
        }
        scores
    }

    pub fn increment(&mut self, letter: Letter) {
        *self.0.entry(letter).or_insert(0) += 1;
    }

    pub fn get(&self, letter: Letter) -> u32 {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    /// Absolute difference between the two letters of an axis
    pub fn gap(&self, axis: Axis) -> u32 {
        let (first, second) = axis.letters();
        self.get(first).abs_diff(self.get(second))
    }

    /// Total answers counted on an axis
    pub fn axis_total(&self, axis: Axis) -> u32 {
        let (first, second) = axis.letters();
        self.get(first) + self.get(second)
    }

    /// Resolves each axis to its dominant letter
    ///
    /// On an exact tie the axis' first letter (E, S, T, J) is chosen.
    pub fn classify(&self) -> PersonalityCode {
        PersonalityCode(Axis::ALL.map(|axis| {
            let (first, second) = axis.letters();
            if self.get(second) > self.get(first) {
                second
            } else {
                first
            }
        }))
    }
}

/// Four-letter classification label, one letter per axis in EI, SN, TF, JP order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonalityCode([Letter; 4]);

impl PersonalityCode {
    /// The chosen letter on `axis`
    pub fn letter(&self, axis: Axis) -> Letter {
        match axis {
            Axis::EI => self.0[0],
            Axis::SN => self.0[1],
            Axis::TF => self.0[2],
            Axis::JP => self.0[3],
        }
    }

    pub fn letters(&self) -> [Letter; 4] {
        self.0
    }

    /// All sixteen codes, in the order they are offered on the introduction form
    pub fn all() -> Vec<PersonalityCode> {
        [
            "ISTJ", "ISFJ", "INFJ", "INTJ", "ISTP", "ISFP", "INFP", "INTP", "ESTP", "ESFP",
            "ENFP", "ENTP", "ESTJ", "ESFJ", "ENFJ", "ENTJ",
        ]
        .iter()
        .filter_map(|code| code.parse().ok())
        .collect()
    }
}

impl Display for PersonalityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in self.0 {
            write!(f, "{}", letter.as_char())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid personality code: {0}")]
pub struct ParsePersonalityCodeError(String);

impl FromStr for PersonalityCode {
    type Err = ParsePersonalityCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsePersonalityCodeError(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 4 {
            return Err(invalid());
        }

        let mut letters = [Letter::E; 4];
        for (slot, (axis, c)) in Axis::ALL.iter().zip(chars).enumerate() {
            let letter = Letter::from_char(c).ok_or_else(invalid)?;
            if letter.axis() != *axis {
                return Err(invalid());
            }
            letters[slot] = letter;
        }

        Ok(PersonalityCode(letters))
    }
}

impl Serialize for PersonalityCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PersonalityCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
