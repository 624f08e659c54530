use blackjack_lib::{PlayerState, RoundOutcome};
use std::io::{self, Write};

const WIDTH: usize = 80;
const TEXT_WIDTH: usize = "player 00".len() + 20;
const SCORE_WIDTH: usize = 10;
const STATE_WIDTH: usize = WIDTH - TEXT_WIDTH - SCORE_WIDTH;

fn state_label(state: PlayerState) -> &'static str {
    match state {
        PlayerState::Playing => "playing",
        PlayerState::Stood => "stood",
        PlayerState::Bust => "bust",
    }
}

/// Writes a fixed width table of every player's final score and the winner to `writer`.
pub fn write_summary(outcome: &RoundOutcome, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{}", "-".repeat(WIDTH))?;
    writeln!(writer, "{:-^WIDTH$}", "round results")?;
    for seat in &outcome.seats {
        writeln!(
            writer,
            "{:<TEXT_WIDTH$}{:>SCORE_WIDTH$}{:>STATE_WIDTH$}",
            format!("player {}", seat.player + 1),
            seat.score,
            state_label(seat.state)
        )?;
    }
    writeln!(writer, "{}", "-".repeat(WIDTH))?;
    match outcome.winner {
        Some(winner) => writeln!(
            writer,
            "Player {} wins with a score of {}!",
            winner.player + 1,
            winner.score
        )?,
        None => writeln!(writer, "Every player busted, there is no winner.")?,
    }
    Ok(())
}

/// Writes the outcome as pretty printed JSON followed by a newline.
pub fn write_json(outcome: &RoundOutcome, mut writer: impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, outcome)?;
    writeln!(writer)
}

/// Reports an error that ended the run, as the one line `error: <message>` including its causes.
pub fn write_error(error: &anyhow::Error, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "error: {error:#}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_lib::{BlackjackGameError, Card, Rank, SeatOutcome, Winner};

    fn outcome(winner: Option<Winner>) -> RoundOutcome {
        RoundOutcome {
            seats: vec![
                SeatOutcome {
                    player: 0,
                    cards: vec![Card::new(Rank::Ten), Card::new(Rank::Eight)],
                    score: 18,
                    state: PlayerState::Stood,
                },
                SeatOutcome {
                    player: 1,
                    cards: vec![
                        Card::new(Rank::Ten),
                        Card::new(Rank::Six),
                        Card::new(Rank::King),
                    ],
                    score: 26,
                    state: PlayerState::Bust,
                },
            ],
            winner,
        }
    }

    #[test]
    fn summary_lists_players_and_winner() {
        let mut output = Vec::new();
        write_summary(&outcome(Some(Winner { player: 0, score: 18 })), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1].len(), WIDTH);
        assert!(lines[1].contains("round results"));
        assert!(lines[2].starts_with("player 1"));
        assert!(lines[2].ends_with("stood"));
        assert!(lines[2].contains("18"));
        assert_eq!(lines[2].len(), WIDTH);
        assert!(lines[3].ends_with("bust"));
        assert_eq!(lines[5], "Player 1 wins with a score of 18!");
    }

    #[test]
    fn summary_without_winner() {
        let mut output = Vec::new();
        write_summary(&outcome(None), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.ends_with("Every player busted, there is no winner.\n"));
    }

    #[test]
    fn empty_deck_is_reported_once() {
        let mut output = Vec::new();
        let error = anyhow::Error::new(BlackjackGameError::EmptyDeck);
        write_error(&error, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "error: the deck is empty\n");
    }

    #[test]
    fn error_report_keeps_the_cause() {
        let mut output = Vec::new();
        let error = anyhow::Error::new(BlackjackGameError::EmptyDeck).context("round aborted");
        write_error(&error, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "error: round aborted: the deck is empty\n");
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn json_round_trips_through_value() {
        let mut output = Vec::new();
        write_json(&outcome(None), &mut output).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert!(value["winner"].is_null());
        assert_eq!(value["seats"][1]["state"], "bust");
        assert_eq!(value["seats"][1]["cards"].as_array().map(Vec::len), Some(3));
    }
}
