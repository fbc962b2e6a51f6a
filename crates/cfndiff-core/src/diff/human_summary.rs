//! Human-readable summary renderer for comparison results.

use crate::diff::model::DiffResult;
use similar::{Algorithm, TextDiff};

/// Lines of unchanged context around each hunk.
const CONTEXT_LINES: usize = 3;

/// Render a text summary of a [`DiffResult`]: a status header and, when
/// something changed, a unified diff of the canonical renderings.
pub fn render_human_summary(result: &DiffResult) -> String {
    let mut out = String::new();

    let status = if result.changed {
        "Changes detected"
    } else {
        "No changes"
    };
    out.push_str(&format!("{status} (format: {})\n", result.format));
    out.push_str(&format!(
        "before: {}  after: {}\n",
        short(&result.identity.before_digest),
        short(&result.identity.after_digest),
    ));

    if !result.changed {
        return out;
    }

    let before = result.diff.before.text();
    let after = result.diff.after.text();
    let unified = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(&before, &after)
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .header("before", "after")
        .to_string();

    out.push('\n');
    out.push_str(&unified);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// First 12 hex characters of a digest.
fn short(digest: &str) -> &str {
    digest.get(..12).unwrap_or(digest)
}
