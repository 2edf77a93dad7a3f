//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Default config file name.
pub const DEFAULT_CONFIG: &str = "iconpress.toml";

/// Icon collection loader and utility CSS builder
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (searched upward from the current directory)
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List configured icon collections
    #[command(visible_alias = "ls")]
    List,

    /// Load one collection and print it as JSON
    #[command(visible_alias = "l")]
    Load {
        /// Collection name
        collection: String,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Generate utility CSS for rules and icons
    #[command(visible_alias = "c")]
    Css {
        #[command(flatten)]
        args: CssArgs,
    },

    /// Print output paths for asset files
    #[command(visible_alias = "a")]
    AssetName {
        /// Asset files
        #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
        files: Vec<PathBuf>,
    },

    /// Print the assembled bundler plan as JSON
    #[command(visible_alias = "p")]
    Plan {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

/// Css command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CssArgs {
    /// Minify the generated CSS
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Output file (overrides `css.out_file`)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Emit every utility, ignoring `css.patterns`
    #[arg(long)]
    pub all: bool,
}

impl Cli {
    /// Whether `--config` was left at its default.
    pub fn is_default_config(&self) -> bool {
        self.config.as_os_str() == DEFAULT_CONFIG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_css_args() {
        let cli = Cli::try_parse_from(["iconpress", "css", "--minify", "-o", "out.css"]).unwrap();
        let Commands::Css { args } = &cli.command else {
            panic!("expected css command");
        };
        assert_eq!(args.minify, Some(true));
        assert_eq!(args.output, Some(PathBuf::from("out.css")));
        assert!(!args.all);
        assert!(cli.is_default_config());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["iconpress", "load", "test", "-C", "other.toml", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.is_default_config());
        assert!(matches!(cli.command, Commands::Load { ref collection, .. } if collection == "test"));
    }

    #[test]
    fn test_asset_name_requires_files() {
        assert!(Cli::try_parse_from(["iconpress", "asset-name"]).is_err());
    }
}
