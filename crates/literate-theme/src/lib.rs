//! Rewrite editor color themes so comments stand out.
//!
//! `literate-theme` takes a TextMate-style `.tmTheme` file and produces a
//! "literate" variant of it: every comment-scoped rule gets one bright color,
//! the theme's default foreground gets a calm neutral, and every other rule's
//! foreground is desaturated toward that neutral.
//!
//! # Pipeline
//!
//! ```text
//! cli::Config ─▶ files::load ─▶ rewrite::rewrite ─▶ files::write
//!                  (parse)        (header + rules)    (pretty-print)
//! ```
//!
//! # Example
//!
//! ```rust
//! use literate_plist::Document;
//! use literate_theme::rewrite::{rewrite, RewriteOptions};
//!
//! let xml = "<plist><dict>\
//!     <key>name</key><string>Ocean</string>\
//!     <key>settings</key><array>\
//!       <dict><key>scope</key><string>comment</string>\
//!         <key>settings</key><dict><key>foreground</key><string>#445566</string></dict>\
//!       </dict>\
//!     </array></dict></plist>";
//!
//! let mut doc = Document::parse(xml).unwrap();
//! let report = rewrite(&mut doc, &RewriteOptions::default()).unwrap();
//! assert_eq!(report.comment, 1);
//!
//! let out = doc.to_pretty_string().unwrap();
//! assert!(out.contains("<string>Literate Ocean</string>"));
//! assert!(out.contains("<string>#bbff99</string>"));
//! ```

use std::path::PathBuf;

pub mod cli;
pub mod color;
pub mod colorspace;
mod error;
pub mod files;
pub mod rewrite;
pub mod theme;

pub use cli::{Cli, Config};
pub use error::{Result, ThemeError};
pub use rewrite::{rewrite, RewriteOptions, RewriteReport, RuleAction};
pub use theme::{HeaderFields, StyleRule};

/// Loads, rewrites and saves one theme. Returns the path written.
///
/// Nothing is written unless loading and rewriting both succeed.
pub fn run(config: &Config) -> Result<PathBuf> {
    tracing::info!(
        input = %config.input.display(),
        output = %config.output.display(),
        "rewriting theme"
    );

    let mut document = files::load(&config.input)?;
    rewrite::rewrite(&mut document, &config.options)?;
    files::write(&document, &config.output)?;

    Ok(config.output.clone())
}
