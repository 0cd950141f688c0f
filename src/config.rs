use std::time::Duration;

use clap::Parser;

use crate::min_max::Pruning;

/// Plays Sim: an alpha-beta searching Red against a uniformly random Blue.
#[derive(Parser, Debug)]
#[command(name = "sim-solver", version, about, long_about = None)]
pub struct Cli {
    /// Search depth in plies (15 searches every game to the end)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=15))]
    pub depth: u8,

    /// Log every position as it is played
    #[arg(long)]
    pub render: bool,

    /// Number of games to play
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub trials: u32,

    /// Seed for the starting player and Blue's moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Search without alpha-beta cutoffs
    #[arg(long)]
    pub no_prune: bool,

    /// Pause after each rendered move, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SimConfig {
    pub depth: u8,
    pub pruning: Pruning,
    pub trials: u32,
    pub render: bool,
    pub render_delay: Duration,
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            depth: 15,
            pruning: Pruning::Enabled,
            trials: 1,
            render: false,
            render_delay: Duration::from_millis(500),
            seed: None,
        }
    }
}

impl From<&Cli> for SimConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            depth: cli.depth,
            pruning: if cli.no_prune { Pruning::Disabled } else { Pruning::Enabled },
            trials: cli.trials,
            render: cli.render,
            render_delay: Duration::from_millis(cli.delay_ms),
            seed: cli.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;

    use crate::config::{Cli, SimConfig};
    use crate::min_max::Pruning;

    #[test]
    fn depth_only() {
        let cli = Cli::try_parse_from(["sim-solver", "15"]).unwrap();
        assert_eq!(SimConfig::from(&cli), SimConfig::default());
    }

    #[test]
    fn all_options() {
        let cli = Cli::try_parse_from([
            "sim-solver", "4", "--render", "--trials", "20", "--seed", "9", "--no-prune", "--delay-ms", "0",
        ]).unwrap();
        let config = SimConfig::from(&cli);
        assert_eq!(config, SimConfig {
            depth: 4,
            pruning: Pruning::Disabled,
            trials: 20,
            render: true,
            render_delay: Duration::ZERO,
            seed: Some(9),
        });
    }

    #[test]
    fn rejects_bad_depth() {
        assert!(Cli::try_parse_from(["sim-solver"]).is_err());
        assert!(Cli::try_parse_from(["sim-solver", "0"]).is_err());
        assert!(Cli::try_parse_from(["sim-solver", "16"]).is_err());
        assert!(Cli::try_parse_from(["sim-solver", "deep"]).is_err());
        assert!(Cli::try_parse_from(["sim-solver", "3", "--trials", "0"]).is_err());
    }
}
