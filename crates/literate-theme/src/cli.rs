//! Command-line arguments and run configuration.
//!
//! ```text
//! literate-theme [-o <path>] [-fg <hex>] [-color <hex>] <input-theme-file>
//! ```
//!
//! The single-dash long flags (`-fg`, `-color`) are kept for compatibility
//! with existing invocations; [`normalize_args`] rewrites them to `--fg` /
//! `--color` before clap parses the command line. Both colors can also come
//! from the environment (`LITERATE_FG`, `LITERATE_COMMENT_COLOR`); an explicit
//! flag wins over the environment, which wins over the built-in default.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{Result, ThemeError};
use crate::rewrite::{RewriteOptions, DEFAULT_COMMENT_COLOR, DEFAULT_FOREGROUND};

/// Prefix given to the input file name when no output path is set.
pub const OUTPUT_PREFIX: &str = "Literate-";

/// Long options that may also be spelled with a single dash.
const SINGLE_DASH_LONGS: &[&str] = &["fg", "color"];

/// Emphasize comments and mute everything else in an editor color theme.
#[derive(Debug, Clone, Parser)]
#[command(name = "literate-theme", version)]
pub struct Cli {
    /// Theme file to rewrite (.tmTheme property list)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file [default: Literate-<INPUT> next to the input]
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Foreground for the theme's default (unscoped) rule
    #[arg(
        long = "fg",
        value_name = "HEX",
        env = "LITERATE_FG",
        default_value = DEFAULT_FOREGROUND
    )]
    pub fg: String,

    /// Foreground for comment-scoped rules
    #[arg(
        long = "color",
        value_name = "HEX",
        env = "LITERATE_COMMENT_COLOR",
        default_value = DEFAULT_COMMENT_COLOR
    )]
    pub color: String,
}

/// Rewrites `-fg`/`-color` (and their `=value` forms) to double-dash longs.
///
/// The first argument is the program name and is never touched. Arguments
/// after a bare `--` are positional and pass through unchanged.
///
/// ```rust
/// use literate_theme::cli::normalize_args;
///
/// let args = normalize_args(["literate-theme", "-fg", "#000000", "-color=#ffffff", "-o", "x"]);
/// assert_eq!(args, ["literate-theme", "--fg", "#000000", "--color=#ffffff", "-o", "x"]);
/// ```
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut positional_only = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || positional_only {
                return arg;
            }
            if arg == "--" {
                positional_only = true;
                return arg;
            }
            single_dash_long(&arg).unwrap_or(arg)
        })
        .collect()
}

fn single_dash_long(arg: &OsStr) -> Option<OsString> {
    let text = arg.to_str()?;
    let body = text.strip_prefix('-').filter(|body| !body.starts_with('-'))?;
    let name = body.split('=').next().unwrap_or(body);
    SINGLE_DASH_LONGS
        .contains(&name)
        .then(|| OsString::from(format!("-{}", text)))
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: RewriteOptions,
}

impl Config {
    /// Resolves parsed arguments, filling in the default output path.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let output = match cli.output {
            Some(output) => output,
            None => default_output_path(&cli.input)?,
        };
        Ok(Self {
            options: RewriteOptions::new(cli.fg, cli.color),
            input: cli.input,
            output,
        })
    }

    /// Parses a full argument list (program name first) into a config.
    ///
    /// Clap failures, including a missing input path, become
    /// [`ThemeError::Usage`].
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let cli = Cli::try_parse_from(normalize_args(args))
            .map_err(|err| ThemeError::usage(err.to_string()))?;
        Self::from_cli(cli)
    }
}

/// `<dirname(input)>/Literate-<basename(input)>`.
pub fn default_output_path(input: &Path) -> Result<PathBuf> {
    let file_name = input.file_name().ok_or_else(|| {
        ThemeError::usage(format!("input path {} has no file name", input.display()))
    })?;

    let mut name = OsString::from(OUTPUT_PREFIX);
    name.push(file_name);

    Ok(match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    })
}
