//! Kotoba terminal game.
//!
//! Reads one key or wire command per line from stdin and prints the board
//! to stdout. Logs go to stderr; set `RUST_LOG=debug` to see every
//! transition.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kotoba::core::{Checkpoint, GameConfig, PassPolicy, RegistrationLog, DEFAULT_HAND_SIZE};
use kotoba::dictionary::LearningStore;
use kotoba::session::{Session, SessionEnd};
use kotoba::view::{Renderer, Style};

#[derive(Debug, Parser)]
#[command(author, version, about = "Two-player kana word game", long_about = None)]
struct Args {
    /// Learning data file (dictionary, yaku table, word-yaku log).
    #[arg(long, default_value = "kotoba_data.json")]
    data: PathBuf,

    /// Seed for the deal. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Tiles dealt to each player.
    #[arg(long, default_value_t = DEFAULT_HAND_SIZE)]
    hand_size: usize,

    /// Where a passed tile goes.
    #[arg(long, value_enum, default_value_t = PassPolicy::default())]
    pass_policy: PassPolicy,

    /// When confirming a word appends to the word-yaku log.
    #[arg(long, value_enum, default_value_t = RegistrationLog::default())]
    registration_log: RegistrationLog,

    /// Save learning data after every end-turn, not only on exit.
    #[arg(long)]
    checkpoint_every_turn: bool,

    /// Disable colors.
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn config(&self) -> GameConfig {
        let checkpoint = if self.checkpoint_every_turn {
            Checkpoint::EveryTurn
        } else {
            Checkpoint::OnQuit
        };

        let config = GameConfig::new()
            .with_hand_size(self.hand_size)
            .with_pass_policy(self.pass_policy)
            .with_registration_log(self.registration_log)
            .with_checkpoint(checkpoint);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let style = if args.no_color {
        Style::plain()
    } else {
        Style::default()
    };
    let store = LearningStore::new(&args.data);
    let mut session = Session::start(args.config(), store, Renderer::new(style))
        .with_context(|| format!("starting game with {}", args.data.display()))?;

    let stdin = io::stdin();
    let end = session.run(stdin.lock(), io::stdout())?;
    if end == SessionEnd::PoolExhausted {
        anyhow::bail!("the tile pool ran out");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(argv: &[&str]) -> GameConfig {
        let args = Args::try_parse_from(std::iter::once("kotoba").chain(argv.iter().copied()))
            .unwrap();
        args.config()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), GameConfig::new());
    }

    #[test]
    fn test_policy_flags() {
        let config = config(&[
            "--pass-policy",
            "return-to-pool",
            "--registration-log",
            "on-insert",
            "--checkpoint-every-turn",
            "--seed",
            "4",
            "--hand-size",
            "9",
        ]);

        assert_eq!(config.pass_policy, PassPolicy::ReturnToPool);
        assert_eq!(config.registration_log, RegistrationLog::OnInsert);
        assert_eq!(config.checkpoint, Checkpoint::EveryTurn);
        assert_eq!(config.seed, Some(4));
        assert_eq!(config.hand_size, 9);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        assert!(Args::try_parse_from(["kotoba", "--pass-policy", "river"]).is_err());
    }
}
