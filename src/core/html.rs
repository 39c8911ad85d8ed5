//! HTML serialization of a [`VisualTree`].
//!
//! The document shell is a Maud template; tree nodes implement
//! [`maud::Render`] so every text node and attribute value goes through
//! Maud's escaping.

use crate::core::tree::{Element, Node, Section, VisualTree};
use maud::{html, PreEscaped, Render, DOCTYPE};

const STYLESHEET: &str = include_str!("site.css");

/// Marks the document as scripted so in-view elements start hidden; without
/// scripting they simply stay visible.
const SCRIPT_FLAG: &str = "document.documentElement.classList.add('js');";

const REVEAL_SCRIPT: &str = r#"(function () {
  var targets = document.querySelectorAll('[data-motion~="inview"]');
  if (!('IntersectionObserver' in window)) {
    targets.forEach(function (el) { el.classList.add('is-visible'); });
    return;
  }
  var observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (entry.isIntersecting) {
        entry.target.classList.add('is-visible');
        observer.unobserve(entry.target);
      }
    });
  }, { threshold: 0.1 });
  targets.forEach(function (el) { observer.observe(el); });
})();"#;

pub fn to_document(tree: &VisualTree) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (tree.title) }
                script { (PreEscaped(SCRIPT_FLAG)) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                div.page {
                    @for section in &tree.sections {
                        (section)
                    }
                }
                script { (PreEscaped(REVEAL_SCRIPT)) }
            }
        }
    }
    .into_string()
}

impl Render for Section {
    fn render_to(&self, buffer: &mut String) {
        self.root.render_to(buffer);
    }
}

impl Render for Node {
    fn render_to(&self, buffer: &mut String) {
        match self {
            Node::Text(text) => text.as_str().render_to(buffer),
            Node::Element(element) => element.render_to(buffer),
        }
    }
}

impl Render for Element {
    fn render_to(&self, buffer: &mut String) {
        buffer.push('<');
        buffer.push_str(self.tag.as_str());

        if !self.class.is_empty() {
            write_attr(buffer, "class", &self.class);
        }
        if let Some(key) = &self.key {
            write_attr(buffer, "data-key", key);
        }
        for (name, value) in &self.attrs {
            write_attr(buffer, name, value);
        }
        if let Some(motion) = self.motion.filter(|m| !m.is_empty()) {
            write_attr(buffer, "data-motion", &motion.tokens());
            write_attr(buffer, "style", &motion.css_vars());
        }
        buffer.push('>');

        if self.tag.is_void() {
            return;
        }

        for child in &self.children {
            child.render_to(buffer);
        }

        buffer.push_str("</");
        buffer.push_str(self.tag.as_str());
        buffer.push('>');
    }
}

fn write_attr(buffer: &mut String, name: &str, value: &str) {
    buffer.push(' ');
    buffer.push_str(name);
    buffer.push_str("=\"");
    value.render_to(buffer);
    buffer.push('"');
}
