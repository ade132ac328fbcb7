use super::anchors::{IIFE_CLOSE, IIFE_OPEN, SCRIPT_CLOSE, SCRIPT_OPEN};
use super::FragmentOutcome;

/// Locate the inline chart script: the first `<script>` tag, the IIFE
/// opener `(() => {` after it, the literal close `})();`, then the
/// `</script>` that follows. The returned fragment spans tag to tag.
pub fn extract_script(document: &str) -> FragmentOutcome {
    let Some(script_pos) = document.find(SCRIPT_OPEN) else {
        return FragmentOutcome::missing("script not found: no <script> tag");
    };
    let tail = &document[script_pos..];
    let Some(iife_pos) = tail.find(IIFE_OPEN) else {
        return FragmentOutcome::missing("script not found: no (() => { opener");
    };
    let Some(close_rel) = tail[iife_pos..].find(IIFE_CLOSE) else {
        return FragmentOutcome::missing("script not found: no })(); closer");
    };
    let iife_end = iife_pos + close_rel;
    let Some(script_close_rel) = tail[iife_end..].find(SCRIPT_CLOSE) else {
        return FragmentOutcome::missing("script not found: unclosed <script> block");
    };
    let end = iife_end + script_close_rel + SCRIPT_CLOSE.len();
    FragmentOutcome::found(tail[..end].to_string())
}
