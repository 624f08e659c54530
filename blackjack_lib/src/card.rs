use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// The best possible score, any hand scoring above this value is bust.
pub const BLACKJACK: u32 = 21;

/// The thirteen ranks of a standard deck in the order a fresh deck is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Returns the base point value of the rank. Aces are worth 11 here, the demotion to 1 happens when a hand is scored.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    /// Full display name of the rank, e.g. `"10"` or `"Queen"`.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// Abbreviated name of the rank, used for the corners of a drawn card.
    pub fn short_name(&self) -> &'static str {
        match self {
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            _ => self.name(),
        }
    }
}

lazy_static! {
    // Lowercased long and short names of every rank
    static ref RANK_NAMES: HashMap<String, Rank> = {
        let mut names = HashMap::new();
        for rank in Rank::ALL {
            names.insert(rank.name().to_lowercase(), rank);
            names.insert(rank.short_name().to_lowercase(), rank);
        }
        names
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rank `{0}`, expected one of 2-10, Jack, Queen, King, Ace")]
pub struct ParseRankError(pub String);

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANK_NAMES
            .get(&s.trim().to_lowercase())
            .copied()
            .ok_or_else(|| ParseRankError(s.to_string()))
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single playing card. The value is derived from the rank when the card is created and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    rank: Rank,
    value: u8,
}

impl Card {
    /// Associated function to create a new `Card` of the given rank.
    pub fn new(rank: Rank) -> Card {
        Card {
            rank,
            value: rank.value(),
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn name(&self) -> &'static str {
        self.rank.name()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl From<Rank> for Card {
    fn from(rank: Rank) -> Self {
        Card::new(rank)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rank)
    }
}
