use blackjack_lib::{Card, Hand};
use clap::ValueEnum;

const CARD_TOP: &str = "+-------+";
const CARD_BLANK: &str = "|       |";

/// How hands are drawn on the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CardStyle {
    /// Card names on one line, e.g. `King Ace (Score: 21)`
    #[default]
    Plain,
    /// Ascii art cards side by side followed by the score
    Ascii,
}

/// Renders `hand` and its score in the chosen style. The returned string has no trailing newline.
pub fn render_hand(hand: &Hand, style: CardStyle) -> String {
    match style {
        CardStyle::Plain => hand.to_string(),
        CardStyle::Ascii => render_ascii(hand),
    }
}

fn render_ascii(hand: &Hand) -> String {
    let score = format!("(Score: {})", hand.calculate_score());
    if hand.is_empty() {
        return score;
    }

    let drawn: Vec<[String; 5]> = hand.cards().iter().map(ascii_card).collect();
    let mut lines: Vec<String> = (0..5)
        .map(|row| {
            drawn
                .iter()
                .map(|card| card[row].as_str())
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .collect();
    lines.push(score);
    lines.join("\n")
}

fn ascii_card(card: &Card) -> [String; 5] {
    let rank = card.rank().short_name();
    [
        CARD_TOP.to_string(),
        format!("|{:<2}     |", rank),
        CARD_BLANK.to_string(),
        format!("|     {:>2}|", rank),
        CARD_TOP.to_string(),
    ]
}
