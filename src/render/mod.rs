// src/render/mod.rs
//! Page markup.
//!
//! Each page renders as its root element holding the status panels
//! (`{prefix}-loading`, `{prefix}-error`, `{prefix}-empty`) followed by the
//! content container. Panel visibility is carried by the `hidden` attribute.
//! Output is deterministic: same state, same bytes.
pub mod advisors;
pub mod calendar;
pub mod project;
pub mod repository;

use crate::{
    config::options::PageKind,
    core::html::El,
    pages::{messages, Panels},
};

/// Root element with status panels and `content` appended.
/// `empty_text` is `None` for pages without an empty panel.
pub(crate) fn shell(
    kind: PageKind,
    prefix: &str,
    panels: Panels<'_>,
    empty_text: Option<&str>,
    content: El,
) -> El {
    let loading = El::new("p")
        .id(&join!(prefix, "-loading"))
        .class("status-message")
        .flag("hidden", !panels.loading)
        .text(messages::LOADING);

    let error = El::new("p")
        .id(&join!(prefix, "-error"))
        .class("status-message status-error")
        .flag("hidden", panels.error.is_none())
        .text(panels.error.unwrap_or_default());

    let empty = empty_text.map(|text| {
        El::new("p")
            .id(&join!(prefix, "-empty"))
            .class("status-message")
            .flag("hidden", !panels.empty)
            .text(text)
    });

    El::new("section")
        .id(kind.root_id())
        .child(loading)
        .child(error)
        .maybe(empty)
        .child(content)
}

/// `"Label: value"` pieces for the non-empty values, joined by ` | `.
pub(crate) fn meta_line(parts: &[(&str, &str)]) -> String {
    parts
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(label, v)| join!(*label, *v))
        .collect::<Vec<_>>()
        .join(" | ")
}
