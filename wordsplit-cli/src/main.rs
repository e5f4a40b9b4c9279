//! Command-line interface for compound word decomposition

use anyhow::Result;
use clap::Parser;
use wordsplit_cli::commands::Commands;

/// Split compound words into their dictionary parts
#[derive(Debug, Parser)]
#[command(name = "wordsplit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_split() {
        let cli = Cli::try_parse_from([
            "wordsplit",
            "split",
            "Autobahn",
            "-f",
            "json",
            "--interfix-mode",
            "separate",
            "-t",
            "2",
        ])
        .unwrap();

        match cli.command {
            Commands::Split(args) => {
                assert_eq!(args.words, vec!["Autobahn"]);
                assert_eq!(args.threads, Some(2));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_convert_needs_two_paths() {
        assert!(Cli::try_parse_from(["wordsplit", "convert", "words.txt"]).is_err());
        assert!(Cli::try_parse_from(["wordsplit", "convert", "a", "b", "c"]).is_err());
        assert!(Cli::try_parse_from(["wordsplit", "convert", "a", "b"]).is_ok());
    }

    #[test]
    fn test_language_alias() {
        let cli = Cli::try_parse_from(["wordsplit", "split", "-l", "de", "Haus"]).unwrap();
        assert!(matches!(cli.command, Commands::Split(args) if args.language.is_some()));
    }

    #[test]
    fn test_exceptions_conflict() {
        let result = Cli::try_parse_from([
            "wordsplit",
            "split",
            "Haus",
            "--exceptions",
            "x.txt",
            "--no-exceptions",
        ]);
        assert!(result.is_err());
    }
}
