//! CLI definitions and command dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;

use fontpair_core::{
    FontStatus, HttpTransport, PipelineContext, Theme, clean,
    config::{DEFAULT_FONTS_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_PAIRS_FILE},
    fetch_fonts, io::find_logo, run, verify_fonts,
};

#[derive(Parser)]
#[command(name = "fontpair")]
#[command(about = "Download Google Fonts and render headline/body pairing previews")]
pub struct Cli {
    #[command(flatten)]
    pub args: GlobalArgs,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct GlobalArgs {
    /// Pair list: `Headline + Body` pairings and `Name|CSS URL` declarations
    #[arg(long, global = true, default_value = DEFAULT_PAIRS_FILE)]
    pub pairs: PathBuf,
    #[arg(long, global = true, default_value = DEFAULT_FONTS_DIR)]
    pub fonts_dir: PathBuf,
    #[arg(long, global = true, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
    #[arg(long, global = true, value_enum, default_value_t = ThemeChoice::Both)]
    pub theme: ThemeChoice,
    /// Header logo; defaults to logo.jpg or logo.png in the current directory
    #[arg(long, global = true, conflicts_with = "no_logo")]
    pub logo: Option<PathBuf>,
    /// Render previews without a header logo
    #[arg(long, global = true)]
    pub no_logo: bool,
    /// Leave the "Generated on" line off the comparison sheet
    #[arg(long, global = true)]
    pub no_timestamp: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    #[default]
    Both,
}

impl ThemeChoice {
    pub fn themes(self) -> Vec<Theme> {
        match self {
            ThemeChoice::Light => vec![Theme::Light],
            ThemeChoice::Dark => vec![Theme::Dark],
            ThemeChoice::Both => Theme::ALL.to_vec(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch fonts, render every pair and write the comparison sheet (default)
    Run,
    /// Download missing fonts only
    Fetch,
    /// Check that every declared font in the cache can be rendered
    Verify,
    /// Remove generated images from the output directory
    Clean,
}

impl Cli {
    fn context(&self) -> PipelineContext {
        PipelineContext {
            pairs_file: self.args.pairs.clone(),
            fonts_dir: self.args.fonts_dir.clone(),
            output_dir: self.args.output_dir.clone(),
            themes: self.args.theme.themes(),
            logo: self.logo(),
            timestamp: !self.args.no_timestamp,
            ..PipelineContext::default()
        }
    }

    fn logo(&self) -> Option<PathBuf> {
        if self.args.no_logo {
            return None;
        }
        self.args.logo.clone().or_else(|| find_logo(Path::new(".")))
    }

    pub fn run(self) -> Result<()> {
        let ctx = self.context();
        debug!("{ctx:?}");

        match self.command {
            None | Some(Commands::Run) => {
                run(&ctx, HttpTransport::new()?)?;
            }
            Some(Commands::Fetch) => {
                fetch_fonts(&ctx, HttpTransport::new()?)?;
            }
            Some(Commands::Verify) => {
                let results = verify_fonts(&ctx)?;
                let bad = results
                    .iter()
                    .filter(|(_, status)| !matches!(status, FontStatus::Valid { .. }))
                    .count();
                if bad > 0 {
                    bail!("{bad} of {} fonts are missing or invalid", results.len());
                }
            }
            Some(Commands::Clean) => {
                clean(&ctx.output_dir)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_runs_with_defaults() {
        let cli = Cli::try_parse_from(["fontpair"]).unwrap();
        assert!(cli.command.is_none());
        let ctx = cli.context();
        assert_eq!(ctx.pairs_file, PathBuf::from(DEFAULT_PAIRS_FILE));
        assert_eq!(ctx.themes, Theme::ALL.to_vec());
        assert!(ctx.timestamp);
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from([
            "fontpair",
            "run",
            "--theme",
            "dark",
            "--no-timestamp",
            "--output-dir",
            "out",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Run)));
        let ctx = cli.context();
        assert_eq!(ctx.themes, [Theme::Dark]);
        assert!(!ctx.timestamp);
        assert_eq!(ctx.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_flags_without_subcommand() {
        let cli = Cli::try_parse_from(["fontpair", "--theme", "light"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.context().themes, [Theme::Light]);
    }

    #[test]
    fn test_fetch_with_fonts_dir() {
        let cli = Cli::try_parse_from(["fontpair", "fetch", "--fonts-dir", "cache"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Fetch)));
        assert_eq!(cli.args.fonts_dir, PathBuf::from("cache"));
    }

    #[test]
    fn test_logo_flags() {
        let cli = Cli::try_parse_from(["fontpair", "--logo", "brand.png"]).unwrap();
        assert_eq!(cli.context().logo, Some(PathBuf::from("brand.png")));

        let cli = Cli::try_parse_from(["fontpair", "run", "--no-logo"]).unwrap();
        assert_eq!(cli.context().logo, None);

        assert!(Cli::try_parse_from(["fontpair", "--logo", "a.png", "--no-logo"]).is_err());
    }
}
