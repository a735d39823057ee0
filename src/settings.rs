use std::path::{Path, PathBuf};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tic_tac_toe_ai::Difficulty;

use crate::history::{JsonFileLog, MemoryLog, MoveLog};

/// Play tic-tac-toe against the computer in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "tic-tac-toe", version)]
pub struct Settings {
    /// Computer difficulty: easy, medium or hard
    #[arg(short, long, env = "TTT_DIFFICULTY", default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Seed for the computer's random choices, for replayable games
    #[arg(long, env = "TTT_SEED")]
    seed: Option<u64>,

    /// JSON file that keeps the move history between runs
    #[arg(long, env = "TTT_HISTORY_FILE", default_value = "ttt_history.json")]
    history_file: PathBuf,

    /// Keep the move history in memory only
    #[arg(long, env = "TTT_NO_HISTORY")]
    no_history: bool,
}

impl Settings {
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn history_file(&self) -> Option<&Path> {
        (!self.no_history).then_some(self.history_file.as_path())
    }

    /// Seeded RNG when a seed is configured, otherwise seeded from the OS.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn history(&self) -> Box<dyn MoveLog> {
        match self.history_file() {
            Some(path) => Box::new(JsonFileLog::open(path)),
            None => Box::new(MemoryLog::new()),
        }
    }
}
