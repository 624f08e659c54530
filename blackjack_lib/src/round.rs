//! Module that focuses on a single round of blackjack. A round owns one deck and a seat for every player,
//!  deals the opening hands, lets each player hit or stand until their turn is over and then decides the winner.
//!  Player input and presentation are supplied by the caller, which keeps the round logic testable without a terminal.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::BlackjackGameError;
use crate::hand::Hand;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Number of cards each player receives before their turn starts.
pub const INITIAL_HAND_SIZE: usize = 2;

/// Where a player is in their turn. `Bust` is derived from the hand, `Stood` from the player's own choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerState {
    Playing,
    Stood,
    Bust,
}

/// A player's answer when asked to hit or stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
    /// The answer could not be understood, the player is asked again.
    Invalid,
}

/// Trait for anything that can decide how a player plays their hand, e.g. a console prompt or a scripted test.
pub trait DecisionProvider {
    /// Required method, returns the decision of `player` (zero based seat index) holding `hand`.
    fn decide(&mut self, player: usize, hand: &Hand) -> Decision;
}

impl<F> DecisionProvider for F
where
    F: FnMut(usize, &Hand) -> Decision,
{
    fn decide(&mut self, player: usize, hand: &Hand) -> Decision {
        self(player, hand)
    }
}

/// Trait for presenting a round as it is played. Every method has an empty default implementation.
pub trait TableView {
    /// Called once at the start of a player's turn with their opening hand.
    fn turn_started(&mut self, _player: usize, _hand: &Hand) {}
    /// Called after a hit, `hand` already holds the new card.
    fn card_drawn(&mut self, _player: usize, _hand: &Hand) {}
    fn invalid_decision(&mut self, _player: usize) {}
    fn player_stood(&mut self, _player: usize, _hand: &Hand) {}
    fn player_bust(&mut self, _player: usize, _hand: &Hand) {}
}

/// A `TableView` that ignores every event.
pub struct SilentView;

impl TableView for SilentView {}

/// One player's place at the table.
#[derive(Debug, Clone, Default)]
pub struct Seat {
    hand: Hand,
    stood: bool,
}

impl Seat {
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn state(&self) -> PlayerState {
        if self.hand.is_bust() {
            PlayerState::Bust
        } else if self.stood {
            PlayerState::Stood
        } else {
            PlayerState::Playing
        }
    }
}

/// The player who won a round and the score they won with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Winner {
    /// Zero based seat index.
    pub player: usize,
    pub score: u32,
}

/// Snapshot of a seat once the round is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatOutcome {
    pub player: usize,
    pub cards: Vec<Card>,
    pub score: u32,
    pub state: PlayerState,
}

/// Everything worth reporting about a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub seats: Vec<SeatOutcome>,
    pub winner: Option<Winner>,
}

/// A single round of blackjack between a fixed number of players.
/// Seats are only created as their opening hands are dealt, so `seats` is empty until `deal_initial_hands` runs.
pub struct Round {
    deck: Deck,
    num_players: usize,
    seats: Vec<Seat>,
}

impl Round {
    /// Associated method for building a round from `config`, the deck is seeded from the configured seed or the wall clock.
    pub fn new(config: &RoundConfig) -> Round {
        let deck = match config.seed {
            Some(seed) => Deck::with_seed(seed),
            None => Deck::new(),
        };
        Round::with_deck(deck, config.num_players)
    }

    /// Builds a round for `num_players` players that deals from `deck`.
    pub fn with_deck(deck: Deck, num_players: usize) -> Round {
        Round {
            deck,
            num_players,
            seats: Vec::new(),
        }
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Deals two cards to every player in seat order, the first player receives both cards before the next player gets any.
    /// A seat is added once its hand is complete, players who already hold an opening hand are not dealt to again.
    pub fn deal_initial_hands(&mut self) -> Result<(), BlackjackGameError> {
        for player in self.seats.len()..self.num_players {
            let mut seat = Seat::default();
            for _ in 0..INITIAL_HAND_SIZE {
                seat.hand.add_card(self.deck.deal()?);
            }
            debug!(player, hand = %seat.hand, "dealt initial hand");
            self.seats.push(seat);
        }
        Ok(())
    }

    /// Plays every player's turn in seat order.
    pub fn play_turns<D, V>(
        &mut self,
        decider: &mut D,
        view: &mut V,
    ) -> Result<(), BlackjackGameError>
    where
        D: DecisionProvider + ?Sized,
        V: TableView + ?Sized,
    {
        for player in 0..self.seats.len() {
            self.play_turn(player, decider, view)?;
        }
        Ok(())
    }

    /// Lets `player` hit until they stand or bust. Invalid decisions are reported to `view` and asked again,
    /// they never consume a card. A player whose turn is already over is neither shown nor asked.
    fn play_turn<D, V>(
        &mut self,
        player: usize,
        decider: &mut D,
        view: &mut V,
    ) -> Result<PlayerState, BlackjackGameError>
    where
        D: DecisionProvider + ?Sized,
        V: TableView + ?Sized,
    {
        let seat = &mut self.seats[player];
        if seat.state() != PlayerState::Playing {
            return Ok(seat.state());
        }
        view.turn_started(player, &seat.hand);

        loop {
            let state = seat.state();
            if state != PlayerState::Playing {
                return Ok(state);
            }

            match decider.decide(player, &seat.hand) {
                Decision::Hit => {
                    seat.hand.add_card(self.deck.deal()?);
                    debug!(player, hand = %seat.hand, "player hit");
                    view.card_drawn(player, &seat.hand);
                    if seat.hand.is_bust() {
                        debug!(player, score = seat.hand.calculate_score(), "player bust");
                        view.player_bust(player, &seat.hand);
                    }
                }
                Decision::Stand => {
                    seat.stood = true;
                    debug!(player, score = seat.hand.calculate_score(), "player stood");
                    view.player_stood(player, &seat.hand);
                }
                Decision::Invalid => view.invalid_decision(player),
            }
        }
    }

    /// Returns the non bust player with the highest score. When several players share the highest score,
    /// the one seated first keeps the win. Returns `None` if every player is bust.
    pub fn winner(&self) -> Option<Winner> {
        let mut best: Option<Winner> = None;
        for (player, seat) in self.seats.iter().enumerate() {
            if seat.hand.is_bust() {
                continue;
            }
            let score = seat.hand.calculate_score();
            match best {
                Some(current) if score <= current.score => {}
                _ => best = Some(Winner { player, score }),
            }
        }
        best
    }

    /// Snapshot of every seat and the winner.
    pub fn outcome(&self) -> RoundOutcome {
        let seats = self
            .seats
            .iter()
            .enumerate()
            .map(|(player, seat)| SeatOutcome {
                player,
                cards: seat.hand.cards().to_vec(),
                score: seat.hand.calculate_score(),
                state: seat.state(),
            })
            .collect();
        RoundOutcome {
            seats,
            winner: self.winner(),
        }
    }

    /// Plays the whole round: deals the opening hands, plays every turn and returns the outcome.
    /// Calling it again on a finished round deals nothing and returns the same outcome.
    pub fn play<D, V>(
        &mut self,
        decider: &mut D,
        view: &mut V,
    ) -> Result<RoundOutcome, BlackjackGameError>
    where
        D: DecisionProvider + ?Sized,
        V: TableView + ?Sized,
    {
        self.deal_initial_hands()?;
        self.play_turns(decider, view)?;
        let outcome = self.outcome();
        match outcome.winner {
            Some(Winner { player, score }) => info!(player, score, "round won"),
            None => info!("every player bust, no winner"),
        }
        Ok(outcome)
    }
}

/// Struct for configuring a single `Round`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub num_players: usize,
    pub seed: Option<u64>,
}

impl RoundConfig {
    /// Associated method for returning a new `RoundConfigBuilder` object.
    pub fn new() -> RoundConfigBuilder {
        RoundConfigBuilder::default()
    }
}

impl Default for RoundConfig {
    /// Returns a three player round seeded from the wall clock.
    fn default() -> Self {
        RoundConfig::new().build()
    }
}

/// Struct to implement builder pattern for `RoundConfig`. Also the shape of a JSON config file, every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoundConfigBuilder {
    num_players: Option<usize>,
    seed: Option<u64>,
}

impl RoundConfigBuilder {
    /// Method for setting the number of players seated at the table.
    pub fn num_players(&mut self, num_players: usize) -> &mut Self {
        self.num_players = Some(num_players);
        self
    }

    /// Method for fixing the seed used to shuffle the deck.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Method for building a `RoundConfig` object from the given `RoundConfigBuilder` object.
    pub fn build(&mut self) -> RoundConfig {
        RoundConfig {
            num_players: self.num_players.unwrap_or(3),
            seed: self.seed,
        }
    }
}
