use crate::render::{render_hand, CardStyle};
use blackjack_lib::{Hand, TableView};
use std::fmt::Arguments;
use std::io::Write;
use tracing::warn;

/// Presents a round on a console. Players are numbered from 1.
pub struct ConsoleView<W> {
    writer: W,
    style: CardStyle,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(writer: W, style: CardStyle) -> Self {
        ConsoleView { writer, style }
    }

    fn print(&mut self, args: Arguments<'_>) {
        if let Err(e) = self.writer.write_fmt(args) {
            warn!(error = %e, "failed to write to the console");
        }
    }
}

impl<W: Write> TableView for ConsoleView<W> {
    fn turn_started(&mut self, player: usize, hand: &Hand) {
        let rendered = render_hand(hand, self.style);
        self.print(format_args!("\nPlayer {}'s turn:\n{}\n", player + 1, rendered));
    }

    fn card_drawn(&mut self, player: usize, hand: &Hand) {
        let rendered = render_hand(hand, self.style);
        self.print(format_args!("Player {} hits:\n{}\n", player + 1, rendered));
    }

    fn invalid_decision(&mut self, _player: usize) {
        self.print(format_args!("Please enter 'h' to hit or 's' to stand.\n"));
    }

    fn player_stood(&mut self, player: usize, hand: &Hand) {
        self.print(format_args!(
            "Player {} stands with {}.\n",
            player + 1,
            hand.calculate_score()
        ));
    }

    fn player_bust(&mut self, player: usize, hand: &Hand) {
        self.print(format_args!(
            "Player {} busts with {}!\n",
            player + 1,
            hand.calculate_score()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_lib::{Card, Rank};

    #[test]
    fn narrates_a_turn() {
        let mut output = Vec::new();
        {
            let mut view = ConsoleView::new(&mut output, CardStyle::Plain);
            let mut hand: Hand = [Rank::Ten, Rank::Six].map(Card::new).into_iter().collect();
            view.turn_started(1, &hand);
            view.invalid_decision(1);
            hand.add_card(Card::new(Rank::Nine));
            view.card_drawn(1, &hand);
            view.player_bust(1, &hand);
        }
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\nPlayer 2's turn:\n10 6 (Score: 16)\n\
             Please enter 'h' to hit or 's' to stand.\n\
             Player 2 hits:\n10 6 9 (Score: 25)\n\
             Player 2 busts with 25!\n"
        );
    }
}
