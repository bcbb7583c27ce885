//! The color rewrite pass.
//!
//! Each style rule gets exactly one of these treatments:
//!
//! | Rule                                   | New `foreground`                  |
//! |----------------------------------------|-----------------------------------|
//! | no `settings` block or no `foreground` | unchanged                         |
//! | no `scope` (the theme default)         | the configured default color      |
//! | `scope` contains `comment`             | the configured comment color      |
//! | anything else                          | muted `#RRGGBB` + original suffix |
//!
//! The `comment` match is a case-sensitive substring test, so
//! `punctuation.definition.comment` counts, and so would a scope such as
//! `commentary.block`.

use literate_plist::Document;

use crate::color::{split_color, Rgb};
use crate::colorspace::Muter;
use crate::error::Result;
use crate::theme::{HeaderFields, StyleRule};

/// Default foreground for the theme's unscoped rule.
pub const DEFAULT_FOREGROUND: &str = "#a8b8b8";

/// Default color for comment-scoped rules.
pub const DEFAULT_COMMENT_COLOR: &str = "#bbff99";

/// Attribution written into the theme's `author` field.
pub const DEFAULT_AUTHOR: &str = "rileyjshaw (http://rileyjshaw.com)";

pub const NAME_PREFIX: &str = "Literate ";
pub const SEMANTIC_CLASS_PREFIX: &str = "literate.";

/// Scope substring that marks a rule as a comment rule.
const COMMENT_MARKER: &str = "comment";

/// Colors and muting parameters for one rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteOptions {
    /// Written verbatim into the unscoped rule.
    pub foreground: String,
    /// Written verbatim into comment-scoped rules.
    pub comment_color: String,
    pub author: String,
    pub muter: Muter,
}

impl RewriteOptions {
    /// Builds options with a muter anchored on `foreground`.
    ///
    /// Colors are used as given. If `foreground` is not a `#RRGGBB` color, the
    /// muter falls back to anchoring on [`DEFAULT_FOREGROUND`].
    pub fn new(foreground: impl Into<String>, comment_color: impl Into<String>) -> Self {
        let foreground = foreground.into();
        let base = Rgb::from_hex(&foreground).unwrap_or_else(|| {
            tracing::warn!(
                foreground = %foreground,
                fallback = DEFAULT_FOREGROUND,
                "foreground is not a #RRGGBB color; muting against the default"
            );
            Rgb(0xa8, 0xb8, 0xb8)
        });

        Self {
            foreground,
            comment_color: comment_color.into(),
            author: DEFAULT_AUTHOR.to_string(),
            muter: Muter::new(base),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_muter(mut self, muter: Muter) -> Self {
        self.muter = muter;
        self
    }
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self::new(DEFAULT_FOREGROUND, DEFAULT_COMMENT_COLOR)
    }
}

/// What the rewriter did with a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// No `settings` block or no `foreground`; left alone.
    Skipped,
    /// Unscoped rule set to the default foreground.
    Default,
    /// Comment rule set to the comment color.
    Comment,
    /// Foreground muted.
    Muted,
    /// Foreground did not start with `#RRGGBB`; left alone.
    Unparseable,
}

/// Per-action rule counts for one rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteReport {
    pub skipped: usize,
    pub default: usize,
    pub comment: usize,
    pub muted: usize,
    pub unparseable: usize,
}

impl RewriteReport {
    fn record(&mut self, action: RuleAction) {
        match action {
            RuleAction::Skipped => self.skipped += 1,
            RuleAction::Default => self.default += 1,
            RuleAction::Comment => self.comment += 1,
            RuleAction::Muted => self.muted += 1,
            RuleAction::Unparseable => self.unparseable += 1,
        }
    }

    /// Number of rules visited.
    pub fn total(&self) -> usize {
        self.skipped + self.default + self.comment + self.muted + self.unparseable
    }
}

/// Rewrites the header and every style rule of `document` in place.
pub fn rewrite(document: &mut Document, options: &RewriteOptions) -> Result<RewriteReport> {
    let header = HeaderFields::read(document)?;
    rewrite_header(document, &header, &options.author)?;

    let mut report = RewriteReport::default();
    for rule in header.rules(document) {
        let action = rewrite_rule(document, &rule, options)?;
        tracing::debug!(
            rule = %rule.path,
            name = rule.name(document).unwrap_or_default(),
            ?action,
            "rewrote rule"
        );
        report.record(action);
    }

    tracing::info!(
        rules = report.total(),
        muted = report.muted,
        comment = report.comment,
        default = report.default,
        skipped = report.skipped,
        unparseable = report.unparseable,
        "rewrite complete"
    );
    Ok(report)
}

/// Tags the theme as literate: replaces `author`, prefixes `name` and
/// `semanticClass`. Absent fields are left absent.
///
/// Not idempotent: a second pass yields `Literate Literate ...`.
pub fn rewrite_header(document: &mut Document, header: &HeaderFields, author: &str) -> Result<()> {
    if let Some(path) = &header.author {
        document.set_text(path, author)?;
    }
    if let Some(path) = &header.name {
        let name = format!("{}{}", NAME_PREFIX, document.text(path).unwrap_or_default());
        document.set_text(path, name)?;
    }
    if let Some(path) = &header.semantic_class {
        let class = format!(
            "{}{}",
            SEMANTIC_CLASS_PREFIX,
            document.text(path).unwrap_or_default()
        );
        document.set_text(path, class)?;
    }
    Ok(())
}

/// Decides what to do with a rule without changing anything.
pub fn classify(document: &Document, rule: &StyleRule) -> RuleAction {
    if rule.foreground.is_none() {
        return RuleAction::Skipped;
    }
    match rule.scope(document) {
        None => RuleAction::Default,
        Some(scope) if scope.contains(COMMENT_MARKER) => RuleAction::Comment,
        Some(_) => match rule.foreground(document).and_then(split_color) {
            Some((prefix, _)) if Rgb::from_hex(prefix).is_some() => RuleAction::Muted,
            _ => RuleAction::Unparseable,
        },
    }
}

/// Applies the rule's treatment and reports which one it was.
pub fn rewrite_rule(
    document: &mut Document,
    rule: &StyleRule,
    options: &RewriteOptions,
) -> Result<RuleAction> {
    let action = classify(document, rule);
    match action {
        RuleAction::Skipped => {}
        RuleAction::Default => {
            rule.set_foreground(document, options.foreground.as_str())?;
        }
        RuleAction::Comment => {
            rule.set_foreground(document, options.comment_color.as_str())?;
        }
        RuleAction::Muted => {
            if let Some(muted) = rule
                .foreground(document)
                .and_then(|value| mute_value(&options.muter, value))
            {
                rule.set_foreground(document, muted)?;
            }
        }
        RuleAction::Unparseable => {
            tracing::warn!(
                rule = %rule.path,
                scope = rule.scope(document).unwrap_or_default(),
                foreground = rule.foreground(document).unwrap_or_default(),
                "foreground does not start with #RRGGBB; leaving it unchanged"
            );
        }
    }
    Ok(action)
}

/// Mutes the `#RRGGBB` prefix of a theme color and re-appends the rest.
///
/// ```rust
/// use literate_theme::color::Rgb;
/// use literate_theme::colorspace::Muter;
/// use literate_theme::rewrite::mute_value;
///
/// let muter = Muter::new(Rgb(0xa8, 0xb8, 0xb8));
/// let muted = mute_value(&muter, "#778899cc").unwrap();
/// assert!(muted.ends_with("cc"));
/// assert_eq!(muted.len(), 9);
/// ```
pub fn mute_value(muter: &Muter, value: &str) -> Option<String> {
    let (prefix, suffix) = split_color(value)?;
    let muted = muter.mute_hex(prefix)?;
    Some(muted + suffix)
}
