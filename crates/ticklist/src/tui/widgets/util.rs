use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

const ELLIPSIS: &str = "...";

/// Shorten text to at most `max` graphemes, ending in an ellipsis when
/// anything was cut. Grapheme clusters are never split.
pub(in crate::tui) fn truncate_with_ellipsis(text: &str, max: usize) -> Cow<'_, str> {
    if text.graphemes(true).count() <= max {
        return Cow::Borrowed(text);
    }

    let keep = max.saturating_sub(ELLIPSIS.len());
    let truncated: String = text.graphemes(true).take(keep).collect();
    Cow::Owned(format!("{truncated}{ELLIPSIS}"))
}
