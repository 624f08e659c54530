//! The scripted walkthrough: one hand is dealt, hit, stood and then hit until it busts,
//!  followed by three fixed hands that show how aces are scored.

use crate::render::{render_hand, CardStyle};
use blackjack_lib::{Card, Deck, Hand, Rank};
use std::io::Write;
use tracing::debug;

/// Fixed hands shown at the end of the demo, labelled the way they are printed.
const FIXED_HANDS: [(&str, &[Rank]); 3] = [
    ("King and Ace", &[Rank::King, Rank::Ace]),
    ("King, Queen, and Ace", &[Rank::King, Rank::Queen, Rank::Ace]),
    ("Two Aces and a Nine", &[Rank::Ace, Rank::Ace, Rank::Nine]),
];

/// Runs the demo against `deck`, writing every step to `writer`.
/// Fails if the deck runs out while hitting or if `writer` fails.
pub fn run_demo(deck: &mut Deck, style: CardStyle, mut writer: impl Write) -> anyhow::Result<()> {
    let mut hand = Hand::new();
    hand.add_card(deck.deal()?);
    hand.add_card(deck.deal()?);
    writeln!(writer, "Initial hand: {}", render_hand(&hand, style))?;

    hand.add_card(deck.deal()?);
    writeln!(writer, "After hit: {}", render_hand(&hand, style))?;

    writeln!(writer, "After stand: {}", render_hand(&hand, style))?;

    if !hand.is_bust() {
        writeln!(writer, "Hand is valid")?;
    }

    while !hand.is_bust() {
        hand.add_card(deck.deal()?);
    }
    debug!(cards = hand.len(), "hit until bust");
    writeln!(writer, "After bust: {}", render_hand(&hand, style))?;
    writeln!(writer, "Hand is bust")?;

    for (label, ranks) in FIXED_HANDS {
        let fixed: Hand = ranks.iter().map(|&rank| Card::new(rank)).collect();
        writeln!(writer, "{}: {}", label, render_hand(&fixed, style))?;
    }
    Ok(())
}
