use blackjack_lib::{Decision, DecisionProvider, Hand};
use std::io::{BufRead, Write};
use tracing::warn;

/// Interprets one line of player input. Anything that is not a hit or a stand is `Decision::Invalid`.
pub fn parse_decision(line: &str) -> Decision {
    match line.trim().to_lowercase().as_str() {
        "h" | "hit" => Decision::Hit,
        "s" | "stand" => Decision::Stand,
        _ => Decision::Invalid,
    }
}

/// Asks players for their decision on a line based reader, prompting on `writer`.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        ConsoleInput { reader, writer }
    }
}

impl<R: BufRead, W: Write> DecisionProvider for ConsoleInput<R, W> {
    /// Reads one line. Once the input is closed or unreadable the player stands, so the round can still finish.
    fn decide(&mut self, player: usize, _hand: &Hand) -> Decision {
        let prompt = write!(self.writer, "Player {}, hit or stand? [h/s]: ", player + 1)
            .and_then(|_| self.writer.flush());
        if let Err(e) = prompt {
            warn!(error = %e, "failed to write prompt");
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                warn!(player, "input closed, player stands");
                Decision::Stand
            }
            Ok(_) => parse_decision(&line),
            Err(e) => {
                warn!(player, error = %e, "failed to read decision, player stands");
                Decision::Stand
            }
        }
    }
}
