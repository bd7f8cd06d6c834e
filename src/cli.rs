//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::config::BuildMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio blog route planner CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Root directory path
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by Build and Check
#[derive(clap::Args, Debug, Clone)]
pub struct ModeArgs {
    /// Build mode: `production` drops draft posts
    #[arg(short, long, env = "FOLIO_ENV", value_enum)]
    pub mode: Option<BuildMode>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Init a template site
    Init {
        /// the name(path) of site directory, related to `root`
        name: Option<PathBuf>,
    },

    /// Plan every route and write the route manifest (plus sitemap / rss)
    Build {
        #[command(flatten)]
        mode_args: ModeArgs,

        /// Remove the output directory before writing
        #[arg(long)]
        clean: bool,

        /// Posts per listing page
        #[arg(short, long)]
        page_size: Option<usize>,

        /// enable sitemap generation
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        sitemap: Option<bool>,

        /// enable rss feed generation
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        rss: Option<bool>,
    },

    /// Load and validate content, then print the ranked registries
    Check {
        #[command(flatten)]
        mode_args: ModeArgs,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::try_parse_from([
            "folio", "build", "--mode", "production", "--page-size", "20", "--rss",
        ])
        .unwrap();

        match cli.command {
            Commands::Build {
                mode_args,
                page_size,
                rss,
                sitemap,
                clean,
            } => {
                assert_eq!(mode_args.mode, Some(BuildMode::Production));
                assert_eq!(page_size, Some(20));
                assert_eq!(rss, Some(true));
                assert_eq!(sitemap, None);
                assert!(!clean);
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_parse_global_paths() {
        let cli = Cli::try_parse_from(["folio", "-r", "site", "-C", "blog.toml", "check"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.config, PathBuf::from("blog.toml"));
        assert!(cli.is_check());
    }

    #[test]
    fn test_parse_init_name() {
        let cli = Cli::try_parse_from(["folio", "init", "my-blog"]).unwrap();
        assert!(cli.is_init());
    }
}
