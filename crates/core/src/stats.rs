//! Per-author activity statistics for a comment stream.

use std::collections::HashMap;

use comet_protocol::{Comment, SharedStr};

/// Number of comments per author.
///
/// Empty-text comments count too: the author did comment, even if the
/// scheduler emits nothing for it.
pub fn comment_counts(comments: &[Comment]) -> HashMap<SharedStr, usize> {
    let mut counts = HashMap::new();
    for comment in comments {
        *counts.entry(comment.author.clone()).or_insert(0) += 1;
    }
    counts
}

/// The `n` most active authors, most talkative first.
///
/// Ties break by author id so the table is deterministic.
pub fn top_authors(comments: &[Comment], n: usize) -> Vec<(SharedStr, usize)> {
    let mut ranked: Vec<(SharedStr, usize)> = comment_counts(comments).into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}
