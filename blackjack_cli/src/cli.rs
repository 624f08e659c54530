use crate::render::CardStyle;
use blackjack_lib::Rank;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blackjack")]
#[command(about = "A single round of multi-player blackjack in the terminal.")]
pub struct CommandLine {
    /// Increase log output, repeat for more detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play one round, every player is asked to hit or stand in turn
    #[command(alias = "p")]
    Play(PlayArgs),
    /// Walk through the scripted hand scenarios
    #[command(alias = "d")]
    Demo {
        /// Seed for the deck shuffle, defaults to the wall clock
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = CardStyle::Plain)]
        style: CardStyle,
    },
    /// Score a hand given as rank names, e.g. `score King Queen Ace`
    #[command(alias = "s")]
    Score {
        #[arg(required = true)]
        ranks: Vec<Rank>,
        #[arg(long, value_enum, default_value_t = CardStyle::Plain)]
        style: CardStyle,
    },
}

#[derive(Args)]
pub struct PlayArgs {
    /// Number of players seated at the table
    #[arg(short = 'n', long)]
    pub players: Option<usize>,
    /// Seed for the deck shuffle, defaults to the wall clock
    #[arg(long)]
    pub seed: Option<u64>,
    /// JSON file with `num_players` and/or `seed`, command line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// How hands are drawn
    #[arg(long, value_enum, default_value_t = CardStyle::Plain)]
    pub style: CardStyle,
    /// Print the final results as JSON
    #[arg(long)]
    pub json: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
