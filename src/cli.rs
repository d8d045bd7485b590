//! Command-line argument parsing for the `seeded-dungeon` binary.
//!
//! Args are parsed by hand. Settings are layered: defaults, then the
//! `--config` file, then `DUNGEON_*` environment variables, then flags.

use std::path::PathBuf;

use rand::distributions::Alphanumeric;
use rand::Rng;
use thiserror::Error;

use crate::config::GenerationOptions;
use crate::error::DungeonError;
use crate::logging::LOG_ENV;
use crate::renderer::RenderOptions;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const RANDOM_SEED_LEN: usize = 12;

pub const HELP_TEXT: &str = "\
seeded-dungeon: reproducible BSP dungeon layouts

USAGE:
    seeded-dungeon [OPTIONS]

OPTIONS:
    --config=PATH          Read generation options from a JSON file
    --seed=TEXT            Seed text (default: 1234)
    --random-seed          Pick a random seed and print it to stderr
    --width=N              Map width in cells (default: 80)
    --height=N             Map height in cells (default: 40)
    --partition-mu=F       Split position as a fraction of the side (default: 0.5)
    --partition-sigma=F    Standard deviation of the split position (default: 0.5)
    --padding-mu=F         Room margin as a fraction of the side (default: 0.5)
    --padding-sigma=F      Standard deviation of the room margin (default: 0.5)
    --wall=GLYPH           Glyph for wall cells (default: #)
    --space=GLYPH          Glyph for floor cells (default: .)
    --log=FILTER           Log filter directives (default: warn)
    --profile              Serve puffin profiling data while generating
    --help, -h             Show this help message
    --version, -V          Show version

ENVIRONMENT VARIABLES:
    DUNGEON_SEED           Override the seed
    DUNGEON_WIDTH          Override --width
    DUNGEON_HEIGHT         Override --height
    DUNGEON_LOG            Log filter when --log is absent";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown argument: {0}\nRun with --help for usage information.")]
    UnknownArgument(String),
    #[error("Invalid {flag} value: {value}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("--seed and --random-seed cannot be combined")]
    ConflictingSeeds,
    #[error(transparent)]
    Config(#[from] DungeonError),
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Version,
    Generate(Opts),
}

/// Overrides read from `DUNGEON_*` variables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvOverrides {
    pub seed: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Opts {
    pub config: Option<PathBuf>,
    pub seed: Option<String>,
    pub random_seed: bool,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub partition_mu: Option<f64>,
    pub partition_sigma: Option<f64>,
    pub padding_mu: Option<f64>,
    pub padding_sigma: Option<f64>,
    pub render: RenderOptions,
    /// Explicit log filter; falls back to `DUNGEON_LOG`
    pub log: Option<String>,
    pub profile: bool,
    pub env: EnvOverrides,
}

impl Opts {
    /// Parse the process arguments and environment.
    pub fn parse() -> Result<Command, CliError> {
        Self::parse_from(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Parse `args` (without the program name), looking variables up with `env`.
    pub fn parse_from<I, E>(args: I, env: E) -> Result<Command, CliError>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Unparsable variables are ignored rather than fatal
        opts.env.seed = env("DUNGEON_SEED");
        opts.env.width = env("DUNGEON_WIDTH").and_then(|v| v.parse().ok());
        opts.env.height = env("DUNGEON_HEIGHT").and_then(|v| v.parse().ok());
        opts.log = env(LOG_ENV);

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--random-seed" => opts.random_seed = true,
                "--profile" => opts.profile = true,
                other => opts.apply_flag(other)?,
            }
        }

        if opts.random_seed && opts.seed.is_some() {
            return Err(CliError::ConflictingSeeds);
        }
        Ok(Command::Generate(opts))
    }

    fn apply_flag(&mut self, arg: &str) -> Result<(), CliError> {
        let Some((flag, value)) = arg.split_once('=') else {
            return Err(CliError::UnknownArgument(arg.to_string()));
        };
        match flag {
            "--config" => self.config = Some(PathBuf::from(value)),
            "--seed" => self.seed = Some(value.to_string()),
            "--width" => self.width = Some(parse_value("--width", value)?),
            "--height" => self.height = Some(parse_value("--height", value)?),
            "--partition-mu" => self.partition_mu = Some(parse_value("--partition-mu", value)?),
            "--partition-sigma" => self.partition_sigma = Some(parse_value("--partition-sigma", value)?),
            "--padding-mu" => self.padding_mu = Some(parse_value("--padding-mu", value)?),
            "--padding-sigma" => self.padding_sigma = Some(parse_value("--padding-sigma", value)?),
            "--wall" => self.render.wall = value.to_string(),
            "--space" => self.render.space = value.to_string(),
            "--log" => self.log = Some(value.to_string()),
            _ => return Err(CliError::UnknownArgument(arg.to_string())),
        }
        Ok(())
    }

    /// Resolve the final generation options from every layer.
    pub fn generation_options(&self) -> Result<GenerationOptions, CliError> {
        let mut options = match &self.config {
            Some(path) => GenerationOptions::load(path)?,
            None => GenerationOptions::default(),
        };

        if let Some(seed) = &self.env.seed {
            options.seed = seed.clone();
        }
        if let Some(width) = self.env.width {
            options.width = width;
        }
        if let Some(height) = self.env.height {
            options.height = height;
        }

        if let Some(seed) = &self.seed {
            options.seed = seed.clone();
        }
        if self.random_seed {
            options.seed = random_seed();
        }
        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(height) = self.height {
            options.height = height;
        }
        if let Some(mu) = self.partition_mu {
            options.partition.mu = mu;
        }
        if let Some(sigma) = self.partition_sigma {
            options.partition.sigma = sigma;
        }
        if let Some(mu) = self.padding_mu {
            options.padding.mu = mu;
        }
        if let Some(sigma) = self.padding_sigma {
            options.padding.sigma = sigma;
        }

        Ok(options)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        flag,
        value: value.to_string(),
    })
}

fn random_seed() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SEED_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn parse(list: &[&str]) -> Opts {
        match Opts::parse_from(args(list), no_env).unwrap() {
            Command::Generate(opts) => opts,
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn test_no_args_gives_defaults() {
        let opts = parse(&[]);
        assert_eq!(opts.generation_options().unwrap(), GenerationOptions::default());
        assert_eq!(opts.render, RenderOptions::default());
        assert!(!opts.profile);
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(Opts::parse_from(args(&["--help"]), no_env).unwrap(), Command::Help);
        assert_eq!(Opts::parse_from(args(&["-V"]), no_env).unwrap(), Command::Version);
    }

    #[test]
    fn test_flags_set_options() {
        let opts = parse(&[
            "--seed=abc",
            "--width=30",
            "--height=20",
            "--partition-mu=0.4",
            "--partition-sigma=0.1",
            "--padding-mu=0.2",
            "--padding-sigma=1",
            "--wall=X",
            "--space= ",
        ]);
        let expected = GenerationOptions::new("abc", 30, 20)
            .with_partition(0.4, 0.1)
            .with_padding(0.2, 1.0);
        assert_eq!(opts.generation_options().unwrap(), expected);
        assert_eq!(opts.render.wall, "X");
        assert_eq!(opts.render.space, " ");
    }

    #[test]
    fn test_empty_seed_flag() {
        let opts = parse(&["--seed="]);
        assert_eq!(opts.generation_options().unwrap().seed, "");
    }

    #[test]
    fn test_env_is_overridden_by_flags() {
        let env = |key: &str| match key {
            "DUNGEON_SEED" => Some("from-env".to_string()),
            "DUNGEON_WIDTH" => Some("33".to_string()),
            "DUNGEON_HEIGHT" => Some("not a number".to_string()),
            _ => None,
        };
        let Command::Generate(opts) = Opts::parse_from(args(&["--width=50"]), env).unwrap() else {
            panic!("expected generate");
        };
        let options = opts.generation_options().unwrap();
        assert_eq!(options.seed, "from-env");
        assert_eq!(options.width, 50);
        assert_eq!(options.height, 40);
    }

    #[test]
    fn test_log_filter_from_env() {
        let env = |key: &str| (key == "DUNGEON_LOG").then(|| "debug".to_string());
        let Command::Generate(opts) = Opts::parse_from(args(&[]), env).unwrap() else {
            panic!("expected generate");
        };
        assert_eq!(opts.log.as_deref(), Some("debug"));
    }

    #[test]
    fn test_random_seed() {
        let opts = parse(&["--random-seed"]);
        let seed = opts.generation_options().unwrap().seed;
        assert_eq!(seed.len(), 12);
        assert!(seed.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_conflicting_seeds() {
        let err = Opts::parse_from(args(&["--seed=a", "--random-seed"]), no_env).unwrap_err();
        assert!(matches!(err, CliError::ConflictingSeeds));
    }

    #[test]
    fn test_unknown_argument() {
        let err = Opts::parse_from(args(&["--bogus"]), no_env).unwrap_err();
        assert!(matches!(err, CliError::UnknownArgument(ref a) if a == "--bogus"));
        let err = Opts::parse_from(args(&["--frobnicate=1"]), no_env).unwrap_err();
        assert!(matches!(err, CliError::UnknownArgument(_)));
    }

    #[test]
    fn test_invalid_number() {
        let err = Opts::parse_from(args(&["--width=wide"]), no_env).unwrap_err();
        assert!(matches!(err, CliError::InvalidValue { flag: "--width", .. }));
    }

    #[test]
    fn test_missing_config_file() {
        let opts = parse(&["--config=/nonexistent/dungeon.json"]);
        let err = opts.generation_options().unwrap_err();
        assert!(matches!(err, CliError::Config(DungeonError::ReadConfig { .. })));
    }

    #[test]
    fn test_help_text_lists_flags() {
        assert!(HELP_TEXT.contains("--seed"));
        assert!(HELP_TEXT.contains("--padding-sigma"));
        assert!(HELP_TEXT.contains("DUNGEON_LOG"));
        assert!(!VERSION.is_empty());
    }
}
