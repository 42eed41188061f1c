use anyhow::{Context, Result};
use clap::ArgMatches;
use countdown::config::{
    DEFAULT_MAX_SMALL_NUMBER, DEFAULT_MAX_TARGET, DEFAULT_MIN_TARGET, DEFAULT_NUM_SMALL_NUMBERS,
};
use countdown::GameConfig;

#[derive(Clone, Debug)]
pub(crate) struct Options {
    config: GameConfig,
    seed: Option<u64>,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let config = GameConfig {
            min_target: parse_value(matches, "min_target")?.unwrap_or(DEFAULT_MIN_TARGET),
            max_target: parse_value(matches, "max_target")?.unwrap_or(DEFAULT_MAX_TARGET),
            max_small_number: parse_value(matches, "max_small")?
                .unwrap_or(DEFAULT_MAX_SMALL_NUMBER),
            num_small_numbers: parse_value(matches, "count")?
                .unwrap_or(DEFAULT_NUM_SMALL_NUMBERS),
        };
        config.validate()?;
        Ok(Self {
            config,
            seed: parse_value(matches, "seed")?,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

fn parse_value<T>(matches: &ArgMatches<'_>, name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    matches
        .value_of(name)
        .map(|s| {
            s.parse::<T>()
                .with_context(|| format!("invalid value for {}: \"{}\"", name, s))
        })
        .transpose()
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("Countdown")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .about("Play the Countdown numbers game")
        .after_help(
            "Combine two numbers at a time with +, -, *, / to reach the target. \
             Each number can only be used once.",
        )
        .arg(
            Arg::with_name("min_target")
                .long("min-target")
                .takes_value(true)
                .value_name("N")
                .help("the smallest possible target (default 100)"),
        )
        .arg(
            Arg::with_name("max_target")
                .long("max-target")
                .takes_value(true)
                .value_name("N")
                .help("the largest possible target (default 999)"),
        )
        .arg(
            Arg::with_name("max_small")
                .short("m")
                .long("max-small")
                .takes_value(true)
                .value_name("N")
                .help("the largest possible small number (default 10)"),
        )
        .arg(
            Arg::with_name("count")
                .short("c")
                .long("count")
                .takes_value(true)
                .value_name("COUNT")
                .help("how many small numbers to deal, at most 10 (default 6)"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .value_name("SEED")
                .help("seed the random number generator to replay the same deals"),
        )
}
