//! HTML patching utilities for the site entry document.

use std::fs;

use tracing::{debug, info};

use crate::error::{InjectError, InjectResult};
use crate::models::PatchOutcome;
use crate::project::InjectionContext;

const HEAD_CLOSE: &str = "</head>";

/// Insert the registration tag into the entry document unless it is already present.
///
/// The document is read once and, when changed, written back in full.
pub fn patch_site_index(context: &InjectionContext) -> InjectResult<PatchOutcome> {
  let index_path = context.layout.index_path(&context.root);
  let text = fs::read_to_string(&index_path).map_err(|source| InjectError::ReadIndex {
    path: index_path.clone(),
    source,
  })?;

  let tag = context.registration_tag();
  if text.contains(&tag) {
    debug!(path = %index_path.display(), "registration tag already present");
    return Ok(PatchOutcome::AlreadyPresent);
  }

  let patched = insert_before_head_close(&text, &tag).ok_or_else(|| {
    InjectError::MalformedDocument {
      path: index_path.clone(),
    }
  })?;

  fs::write(&index_path, patched).map_err(|err| InjectError::write(&index_path, err))?;
  info!(path = %index_path.display(), "injected registration tag");

  Ok(PatchOutcome::Injected)
}

/// Insert `tag` directly before the first `</head>`.
///
/// Returns `None` when the document has no closing head tag. When the closing
/// tag sits on its own line the tag gets its own line too, indented one level
/// deeper for a tab or two-space indented `</head>`. Any other layout receives
/// the tag with no added whitespace.
pub fn insert_before_head_close(document: &str, tag: &str) -> Option<String> {
  let head = document.find(HEAD_CLOSE)?;
  let (before, rest) = document.split_at(head);
  let (indent, separator) = indentation_for(before);

  let mut patched = String::with_capacity(document.len() + tag.len() + indent.len() + separator.len());
  patched.push_str(before);
  patched.push_str(indent);
  patched.push_str(tag);
  patched.push_str(separator);
  patched.push_str(rest);
  Some(patched)
}

/// Whitespace to emit before and after the tag, judged from at most three
/// characters preceding `</head>`.
fn indentation_for(before: &str) -> (&'static str, &'static str) {
  if before.ends_with("\n\t") {
    ("\t", "\n\t")
  } else if before.ends_with("\n  ") {
    ("  ", "\n  ")
  } else if before.ends_with('\n') {
    ("", "\n")
  } else {
    ("", "")
  }
}
