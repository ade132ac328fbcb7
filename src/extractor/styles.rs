use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::anchors::{PERFIL_RULE, STYLE_CLOSE, STYLE_OPEN};
use super::FragmentOutcome;

/// Anchor strategy for locating the styles block.
///
/// The two strategies disagree when a `.perfil {` occurrence precedes the
/// first style tag; both are kept selectable rather than silently picking
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePolicy {
    /// Anchor on the first `<style media="screen">` tag, then require a
    /// `.perfil {` rule somewhere after it.
    #[default]
    TagFirst,
    /// Anchor on the first `.perfil {` rule, then scan forward from it for
    /// a `<style media="screen">` tag.
    RuleFirst,
}

pub fn extract_styles(document: &str, policy: StylePolicy) -> FragmentOutcome {
    match policy {
        StylePolicy::TagFirst => tag_first(document),
        StylePolicy::RuleFirst => rule_first(document),
    }
}

fn tag_first(document: &str) -> FragmentOutcome {
    let Some(tag_pos) = document.find(STYLE_OPEN) else {
        return FragmentOutcome::missing("styles not found: no <style media=\"screen\"> tag");
    };
    let tail = &document[tag_pos..];
    let Some(rule_pos) = tail.find(PERFIL_RULE) else {
        return FragmentOutcome::missing("styles not found: no .perfil rule after the style tag");
    };
    let Some(close_rel) = tail[rule_pos..].find(STYLE_CLOSE) else {
        return FragmentOutcome::missing("styles not found: unclosed style block");
    };
    let end = rule_pos + close_rel + STYLE_CLOSE.len();
    FragmentOutcome::found(tail[..end].to_string())
}

// Scans for the style tag starting at the rule position, so it only ever
// accepts a tag that follows the rule textually. Deliberately kept: changing
// it would change which block gets extracted under this policy.
fn rule_first(document: &str) -> FragmentOutcome {
    let Some(rule_pos) = document.find(PERFIL_RULE) else {
        return FragmentOutcome::missing("styles not found: no .perfil rule");
    };
    let Some(tag_rel) = document[rule_pos..].find(STYLE_OPEN) else {
        return FragmentOutcome::missing("styles not found: no <style media=\"screen\"> tag");
    };
    let tag_pos = rule_pos + tag_rel;
    let Some(close_rel) = document[tag_pos..].find(STYLE_CLOSE) else {
        return FragmentOutcome::missing("styles not found: unclosed style block");
    };
    let end = tag_pos + close_rel + STYLE_CLOSE.len();
    FragmentOutcome::found(document[tag_pos..end].to_string())
}
