//! コマンドライン引数から組み立てる対局設定。

use std::time::Duration;

use rand::SeedableRng as _;
use rand::rngs::StdRng;
use reversi_core::Difficulty;

use crate::Args;

/// 各手番を誰が打つか。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Controller {
    Cpu(Difficulty),
    Human,
}

impl Controller {
    pub const fn is_human(self) -> bool {
        matches!(self, Self::Human)
    }
}

/// 1局分の設定。
#[derive(Clone, Debug)]
pub struct MatchConfig {
    pub autoplay: bool,
    pub cpu_starts: bool,
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    pub think: Duration,
}

impl MatchConfig {
    /// (黒, 白) の担当を返す。黒が先手。
    pub const fn controllers(&self) -> (Controller, Controller) {
        let cpu = Controller::Cpu(self.difficulty);
        if self.autoplay {
            (cpu, cpu)
        } else if self.cpu_starts {
            (cpu, Controller::Human)
        } else {
            (Controller::Human, cpu)
        }
    }

    /// 乱数生成器を返す（seed 未指定ならエントロピーから）。
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl From<&Args> for MatchConfig {
    fn from(args: &Args) -> Self {
        Self {
            autoplay: args.autoplay,
            cpu_starts: args.cpu_starts,
            difficulty: args.level,
            seed: args.seed,
            think: Duration::from_millis(args.think_ms),
        }
    }
}
