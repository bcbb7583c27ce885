//! Property-based tests for the rewrite rules using proptest.

use literate_plist::Document;
use literate_theme::colorspace::Muter;
use literate_theme::rewrite::{mute_value, rewrite, RewriteOptions};
use literate_theme::HeaderFields;
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn hex_color() -> impl Strategy<Value = String> {
    "#[0-9a-fA-F]{6}"
}

fn suffix() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[0-9a-fA-F]{2}", "[a-z0-9 ]{1,6}[a-z0-9]"]
}

fn scope() -> impl Strategy<Value = String> {
    "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}"
}

fn single_rule_theme(scope: Option<&str>, foreground: &str) -> Document {
    let scope = scope
        .map(|s| format!("<key>scope</key><string>{}</string>", s))
        .unwrap_or_default();
    Document::parse(&format!(
        "<plist><dict><key>settings</key><array><dict>{}<key>settings</key>\
         <dict><key>foreground</key><string>{}</string></dict></dict></array></dict></plist>",
        scope, foreground
    ))
    .unwrap()
}

fn only_foreground(doc: &Document) -> String {
    let rules = HeaderFields::read(doc).unwrap().rules(doc);
    rules[0].foreground(doc).unwrap().to_string()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Muting keeps whatever followed the #RRGGBB prefix byte-for-byte.
    #[test]
    fn mute_preserves_suffix(color in hex_color(), tail in suffix()) {
        let muter = Muter::new(literate_theme::color::Rgb(0xa8, 0xb8, 0xb8));
        let muted = mute_value(&muter, &format!("{}{}", color, tail)).unwrap();
        prop_assert_eq!(&muted[..7], muter.mute_hex(&color).unwrap());
        prop_assert_eq!(&muted[7..], tail.as_str());
    }

    /// Muted prefixes are always well-formed lowercase hex.
    #[test]
    fn muted_prefix_is_lowercase_hex(color in hex_color()) {
        let muted = RewriteOptions::default().muter.mute_hex(&color).unwrap();
        prop_assert_eq!(muted.len(), 7);
        prop_assert!(muted.starts_with('#'));
        prop_assert!(muted[1..].bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    /// The unscoped rule always ends up with the configured default color.
    #[test]
    fn default_rule_gets_configured_color(color in hex_color(), tail in suffix(), fg in hex_color()) {
        let mut doc = single_rule_theme(None, &format!("{}{}", color, tail));
        rewrite(&mut doc, &RewriteOptions::new(fg.clone(), "#bbff99")).unwrap();
        prop_assert_eq!(only_foreground(&doc), fg);
    }

    /// Any scope mentioning "comment" gets the comment color exactly.
    #[test]
    fn comment_rule_gets_comment_color(
        before in scope(),
        after in "[a-z.]{0,10}",
        color in hex_color(),
        comment in hex_color(),
    ) {
        let scope = format!("{}.comment{}", before, after);
        let mut doc = single_rule_theme(Some(&scope), &color);
        rewrite(&mut doc, &RewriteOptions::new("#a8b8b8", comment.clone())).unwrap();
        prop_assert_eq!(only_foreground(&doc), comment);
    }

    /// Other scoped rules get mute(prefix) + suffix.
    #[test]
    fn scoped_rule_is_muted(scope in scope(), color in hex_color(), tail in suffix()) {
        prop_assume!(!scope.contains("comment"));
        let options = RewriteOptions::default();
        let mut doc = single_rule_theme(Some(&scope), &format!("{}{}", color, tail));
        rewrite(&mut doc, &options).unwrap();
        prop_assert_eq!(
            only_foreground(&doc),
            format!("{}{}", options.muter.mute_hex(&color).unwrap(), tail)
        );
    }
}
