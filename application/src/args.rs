//! [`Args`] definitions.

use clap::Parser;

/// Shows the promotions of the real estate agency for a listings category.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Category of listings to show promotions for (`buy`, `rent`, etc.).
    #[arg(default_value = "all")]
    pub category: String,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}
