//! Registry of computer player tiers
//!
//! Each tier is a fixed, ordered rule chain. The first rule in the chain
//! that finds a cell decides the move.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownPlayer;
use crate::rules::Rule;

const SIMPLE: &[Rule] = &[Rule::FirstFree];

const RANDOM: &[Rule] = &[Rule::WinIfPossible, Rule::Random];

const EASY: &[Rule] = &[
    Rule::WinIfPossible,
    Rule::ExtendThreeToFour,
    Rule::BlockOpenThree,
    Rule::BlockDoublyOpenTwo,
    Rule::ExtendTwoToThree,
    Rule::Center,
    Rule::ExtendOne,
    Rule::Random,
];

const MEDIUM: &[Rule] = &[
    Rule::WinIfPossible,
    Rule::ExtendThreeToFour,
    Rule::BlockOpenThree,
    Rule::ExtendTwiceTwoToThree,
    Rule::BlockDoublyOpenTwo,
    Rule::ExtendTwoToThree,
    Rule::Center,
    Rule::Random,
];

const HARD: &[Rule] = &[
    Rule::WinIfPossible,
    Rule::BlockOpenFour,
    Rule::ExtendThreeToDoublyOpenFour,
    Rule::BlockToDoublyOpenFour,
    Rule::BlockDoublyOpenThree,
    Rule::BlockTwiceToThreeOrMore,
    Rule::ExtendThreeToFour,
    Rule::BlockOpenThree,
    Rule::ExtendTwiceTwoToThree,
    Rule::BlockDoublyOpenTwo,
    Rule::BlockOpenTwo,
    Rule::ExtendTwoToThree,
    Rule::Center,
    Rule::BelowCenter,
    Rule::ExtendOne,
    Rule::Random,
];

/// Computer player tiers, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Simple,
    Random,
    Easy,
    Medium,
    Hard,
    /// Hard chain preceded by replaying past losses
    Adaptive,
}

impl Difficulty {
    pub const ALL: [Difficulty; 6] = [
        Difficulty::Simple,
        Difficulty::Random,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Adaptive,
    ];

    /// Display name, also the lookup key of [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Simple => "Simple",
            Difficulty::Random => "Random",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Adaptive => "Adaptive",
        }
    }

    /// Rule chain of the tier.
    ///
    /// The adaptive tier falls back to the hard chain once its own history
    /// lookup finds nothing.
    pub fn chain(self) -> &'static [Rule] {
        match self {
            Difficulty::Simple => SIMPLE,
            Difficulty::Random => RANDOM,
            Difficulty::Easy => EASY,
            Difficulty::Medium => MEDIUM,
            Difficulty::Hard | Difficulty::Adaptive => HARD,
        }
    }

    #[inline]
    pub fn is_adaptive(self) -> bool {
        self == Difficulty::Adaptive
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = UnknownPlayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| UnknownPlayer(s.to_string()))
    }
}
