use crate::cli::PlayArgs;
use anyhow::Context;
use blackjack_lib::{RoundConfig, RoundConfigBuilder};
use std::fs;
use std::path::Path;

/// Reads a JSON round configuration, e.g. `{"num_players": 4, "seed": 7}`. Both fields are optional.
pub fn read_config_file(path: &Path) -> anyhow::Result<RoundConfigBuilder> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid config file {}", path.display()))
}

/// Builds the round configuration for `play`, values given on the command line override the config file.
pub fn round_config(args: &PlayArgs) -> anyhow::Result<RoundConfig> {
    let mut builder = match &args.config {
        Some(path) => read_config_file(path)?,
        None => RoundConfig::new(),
    };
    if let Some(players) = args.players {
        builder.num_players(players);
    }
    if let Some(seed) = args.seed {
        builder.seed(seed);
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CardStyle;
    use std::path::PathBuf;

    fn args(config: Option<PathBuf>, players: Option<usize>, seed: Option<u64>) -> PlayArgs {
        PlayArgs {
            players,
            seed,
            config,
            style: CardStyle::Plain,
            json: false,
        }
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "blackjack_cli_{}_{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_without_file_or_flags() {
        let config = round_config(&args(None, None, None)).unwrap();
        assert_eq!(config, RoundConfig::default());
    }

    #[test]
    fn flags_override_file() {
        let path = write_temp("override", r#"{"num_players": 5, "seed": 1}"#);
        let from_file = round_config(&args(Some(path.clone()), None, None)).unwrap();
        assert_eq!(from_file.num_players, 5);
        assert_eq!(from_file.seed, Some(1));

        let overridden = round_config(&args(Some(path.clone()), Some(2), None)).unwrap();
        assert_eq!(overridden.num_players, 2);
        assert_eq!(overridden.seed, Some(1));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn bad_files_are_errors() {
        let missing = std::env::temp_dir().join("blackjack_cli_does_not_exist.json");
        let err = round_config(&args(Some(missing), None, None)).unwrap_err();
        assert!(err.to_string().starts_with("failed to read config file"));

        let path = write_temp("unknown_field", r#"{"decks": 6}"#);
        let err = round_config(&args(Some(path.clone()), None, None)).unwrap_err();
        assert!(err.to_string().starts_with("invalid config file"));
        fs::remove_file(path).unwrap();
    }
}
