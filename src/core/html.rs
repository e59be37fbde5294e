// src/core/html.rs
//! Tiny markup builder. Text and attribute values are always escaped;
//! there is no way to inject raw markup.

const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[derive(Clone, Debug)]
pub enum Node {
    El(El),
    Text(String),
}

#[derive(Clone, Debug)]
pub struct El {
    tag: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
}

impl El {
    pub fn new(tag: &'static str) -> Self {
        Self { tag, attrs: Vec::new(), children: Vec::new() }
    }

    pub fn attr(mut self, name: &'static str, val: impl Into<String>) -> Self {
        self.attrs.push((name, Some(val.into())));
        self
    }

    /// Boolean attribute, emitted bare (`hidden`) when `on`.
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.push((name, None));
        }
        self
    }

    pub fn id(self, id: &str) -> Self { self.attr("id", id) }

    pub fn class(self, class: &str) -> Self { self.attr("class", class) }

    pub fn text(mut self, s: impl Into<String>) -> Self {
        self.children.push(Node::Text(s.into()));
        self
    }

    pub fn child(mut self, el: El) -> Self {
        self.children.push(Node::El(el));
        self
    }

    pub fn maybe(self, el: Option<El>) -> Self {
        match el {
            Some(el) => self.child(el),
            None => self,
        }
    }

    pub fn children<I: IntoIterator<Item = El>>(mut self, els: I) -> Self {
        self.children.extend(els.into_iter().map(Node::El));
        self
    }

    /// Number of element children (text nodes not counted).
    pub fn element_count(&self) -> usize {
        self.children.iter().filter(|n| matches!(n, Node::El(_))).count()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, val) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(v) = val {
                out.push_str("=\"");
                out.push_str(&escape(v));
                out.push('"');
            }
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            match child {
                Node::El(el) => el.write_into(out),
                Node::Text(t) => out.push_str(&escape(t)),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// `<a href=… target="_blank" rel="noopener noreferrer">`
pub fn external_link(href: &str, class: Option<&str>, label: &str) -> El {
    let a = El::new("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer");
    let a = match class {
        Some(c) => a.class(c),
        None => a,
    };
    a.text(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_text_and_attributes() {
        let el = El::new("a").attr("href", "x?a=1&b=\"2\"").text("<b>Tom & Jerry</b>");
        assert_eq!(
            el.to_html(),
            "<a href=\"x?a=1&amp;b=&quot;2&quot;\">&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</a>"
        );
    }

    #[test]
    fn flags_and_void_tags() {
        let div = El::new("div").id("x").flag("hidden", true).flag("open", false)
            .child(El::new("img").attr("src", "a.png"));
        assert_eq!(div.to_html(), "<div id=\"x\" hidden><img src=\"a.png\"></div>");
        assert_eq!(div.element_count(), 1);
    }
}
