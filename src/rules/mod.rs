//! Game rules and the heuristic rule catalog
//!
//! This module implements:
//! - Win detection (first five-in-a-row in scan order)
//! - The pattern rules the computer players chain together
//! - Fork (double-threat) detection
//!
//! [`Rule`] is the static registry the player tiers are built from: every
//! catalog entry and every fallback is one variant.

pub mod fork;
pub mod patterns;
pub mod win;

use rand::Rng;

use crate::board::{Board, Pos, Stone};

// Re-exports for convenient access
pub use fork::{block_twice_to_three_or_more, extend_twice_two_to_three, find_fork};
pub use patterns::{
    below_center, block_doubly_open_three, block_doubly_open_two, block_open_four,
    block_open_three, block_open_two, block_to_doubly_open_four, center, extend_one,
    extend_three_to_doubly_open_four, extend_three_to_four, extend_two_to_three, first_free,
    random_move, win_if_possible,
};
pub use win::{find_winner, Five};

/// One step of a player's priority chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    WinIfPossible,
    BlockOpenFour,
    ExtendThreeToDoublyOpenFour,
    BlockToDoublyOpenFour,
    BlockDoublyOpenThree,
    BlockTwiceToThreeOrMore,
    ExtendThreeToFour,
    BlockOpenThree,
    ExtendTwiceTwoToThree,
    BlockDoublyOpenTwo,
    BlockOpenTwo,
    ExtendTwoToThree,
    ExtendOne,
    Center,
    BelowCenter,
    Random,
    FirstFree,
}

impl Rule {
    pub fn name(self) -> &'static str {
        match self {
            Rule::WinIfPossible => "win_if_possible",
            Rule::BlockOpenFour => "block_open_four",
            Rule::ExtendThreeToDoublyOpenFour => "extend_three_to_doubly_open_four",
            Rule::BlockToDoublyOpenFour => "block_to_doubly_open_four",
            Rule::BlockDoublyOpenThree => "block_doubly_open_three",
            Rule::BlockTwiceToThreeOrMore => "block_twice_to_three_or_more",
            Rule::ExtendThreeToFour => "extend_three_to_four",
            Rule::BlockOpenThree => "block_open_three",
            Rule::ExtendTwiceTwoToThree => "extend_twice_two_to_three",
            Rule::BlockDoublyOpenTwo => "block_doubly_open_two",
            Rule::BlockOpenTwo => "block_open_two",
            Rule::ExtendTwoToThree => "extend_two_to_three",
            Rule::ExtendOne => "extend_one",
            Rule::Center => "center",
            Rule::BelowCenter => "below_center",
            Rule::Random => "random",
            Rule::FirstFree => "first_free",
        }
    }

    /// The cell this rule would play for `color`, if its pattern applies
    pub fn find<R: Rng + ?Sized>(self, board: &Board, color: Stone, rng: &mut R) -> Option<Pos> {
        match self {
            Rule::WinIfPossible => win_if_possible(board, color),
            Rule::BlockOpenFour => block_open_four(board, color),
            Rule::ExtendThreeToDoublyOpenFour => extend_three_to_doubly_open_four(board, color),
            Rule::BlockToDoublyOpenFour => block_to_doubly_open_four(board, color),
            Rule::BlockDoublyOpenThree => block_doubly_open_three(board, color),
            Rule::BlockTwiceToThreeOrMore => block_twice_to_three_or_more(board, color),
            Rule::ExtendThreeToFour => extend_three_to_four(board, color),
            Rule::BlockOpenThree => block_open_three(board, color),
            Rule::ExtendTwiceTwoToThree => extend_twice_two_to_three(board, color),
            Rule::BlockDoublyOpenTwo => block_doubly_open_two(board, color),
            Rule::BlockOpenTwo => block_open_two(board, color),
            Rule::ExtendTwoToThree => extend_two_to_three(board, color, rng),
            Rule::ExtendOne => extend_one(board, color),
            Rule::Center => center(board),
            Rule::BelowCenter => below_center(board),
            Rule::Random => random_move(board, rng),
            Rule::FirstFree => first_free(board),
        }
    }
}
