use blackjack_cli::cli::{CommandLine, Commands, PlayArgs};
use blackjack_cli::config::round_config;
use blackjack_cli::demo::run_demo;
use blackjack_cli::input::ConsoleInput;
use blackjack_cli::logging::init_logging;
use blackjack_cli::render::{render_hand, CardStyle};
use blackjack_cli::summary::{write_error, write_json, write_summary};
use blackjack_cli::view::ConsoleView;
use blackjack_lib::{Card, Deck, Hand, Rank, Round};
use std::io::{self, Write};

fn main() {
    let commands = CommandLine::parse_args();
    init_logging(commands.verbose);

    if let Err(e) = run(commands.command) {
        let _ = write_error(&e, io::stderr().lock());
        std::process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Play(args) => play(&args),
        Commands::Demo { seed, style } => {
            let mut deck = match seed {
                Some(seed) => Deck::with_seed(seed),
                None => Deck::new(),
            };
            run_demo(&mut deck, style, io::stdout().lock())
        }
        Commands::Score { ranks, style } => score(&ranks, style),
    }
}

fn play(args: &PlayArgs) -> anyhow::Result<()> {
    let config = round_config(args)?;
    let mut round = Round::new(&config);
    let mut input = ConsoleInput::new(io::stdin().lock(), io::stdout());
    let mut view = ConsoleView::new(io::stdout(), args.style);

    let outcome = round.play(&mut input, &mut view)?;

    let mut stdout = io::stdout().lock();
    if args.json {
        write_json(&outcome, &mut stdout)?;
    } else {
        writeln!(stdout)?;
        write_summary(&outcome, &mut stdout)?;
    }
    Ok(())
}

fn score(ranks: &[Rank], style: CardStyle) -> anyhow::Result<()> {
    let hand: Hand = ranks.iter().map(|&rank| Card::new(rank)).collect();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render_hand(&hand, style))?;
    if hand.is_bust() {
        writeln!(stdout, "Hand is bust")?;
    }
    Ok(())
}
