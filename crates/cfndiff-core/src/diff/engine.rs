//! Comparison engine.
//!
//! The core entry point is [`compare`], which canonicalizes two documents and
//! produces a [`DiffResult`].

use crate::canonical::canonicalize;
use crate::diff::model::{DiffIdentity, DiffPayload, DiffResult, Rendered};
use crate::document::{render, render_template, to_json_value, Document, Format};
use crate::errors::{ExError, ExErrorKind};
use sha2::{Digest as _, Sha256};

/// Key removed by [`strip_description`].
pub const DESCRIPTION_KEY: &str = "Description";

/// Compare `before` (remote) against `after` (local).
///
/// Both sides are canonicalized and rendered in `format`; `changed` is the
/// inequality of the two renderings. Because canonical key order is fixed,
/// syntactic equality of the renderings is semantic equality.
///
/// # Errors
///
/// `Serialization` if a canonical document cannot be rendered as YAML.
pub fn compare(before: &Document, after: &Document, format: Format) -> Result<DiffResult, ExError> {
    compare_documents(before, after, format, false)
}

/// [`compare`] for template bodies: YAML payloads use short-form intrinsic
/// tags.
///
/// # Errors
///
/// `Serialization` if a canonical document cannot be rendered as YAML.
pub fn compare_templates(
    before: &Document,
    after: &Document,
    format: Format,
) -> Result<DiffResult, ExError> {
    compare_documents(before, after, format, true)
}

fn compare_documents(
    before: &Document,
    after: &Document,
    format: Format,
    fold_intrinsics: bool,
) -> Result<DiffResult, ExError> {
    let before = canonicalize(before);
    let after = canonicalize(after);

    let identity = DiffIdentity {
        before_digest: digest(&before),
        after_digest: digest(&after),
    };

    let diff = DiffPayload {
        before: render_side("before", &before, format, fold_intrinsics)?,
        after: render_side("after", &after, format, fold_intrinsics)?,
    };
    let changed = diff.before != diff.after;

    tracing::debug!(
        changed,
        before_digest = %identity.before_digest,
        after_digest = %identity.after_digest,
        "compared"
    );

    Ok(DiffResult {
        diff,
        changed,
        format,
        identity,
    })
}

/// Remove the top-level `Description` of a template.
///
/// The remote platform does not always refresh the description, so a stale
/// one must not count as a change. Returns whether a key was removed.
pub fn strip_description(doc: &mut Document) -> bool {
    doc.remove(DESCRIPTION_KEY).is_some()
}

fn render_side(
    side: &str,
    canonical: &Document,
    format: Format,
    fold_intrinsics: bool,
) -> Result<Rendered, ExError> {
    if format == Format::Json {
        return Ok(Rendered::Json(to_json_value(canonical)));
    }
    let text = if fold_intrinsics {
        render_template(canonical, Format::Yaml)
    } else {
        render(canonical, Format::Yaml)
    };
    text.map(Rendered::Yaml).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("compare")
            .with_input(side)
            .with_message(e.to_string())
    })
}

fn digest(canonical: &Document) -> String {
    let mut hasher = Sha256::new();
    hasher.update(to_json_value(canonical).to_string().as_bytes());
    hex::encode(hasher.finalize())
}
