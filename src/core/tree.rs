//! Visual Tree: the structure the renderer produces and the HTML writer
//! serializes. It carries no behavior beyond lookup helpers used by callers
//! and tests.

use crate::core::motion::Motion;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Div,
    Header,
    Section,
    Footer,
    H1,
    H2,
    H3,
    P,
    Span,
    A,
    Img,
    Ul,
    Li,
    Svg,
    Path,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Header => "header",
            Tag::Section => "section",
            Tag::Footer => "footer",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::P => "p",
            Tag::Span => "span",
            Tag::A => "a",
            Tag::Img => "img",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::Svg => "svg",
            Tag::Path => "path",
        }
    }

    /// Elements written without a closing tag.
    pub fn is_void(&self) -> bool {
        matches!(self, Tag::Img)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectionKind {
    Header,
    About,
    Skills,
    Projects,
    Experience,
    Footer,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 6] = [
        SectionKind::Header,
        SectionKind::About,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Experience,
        SectionKind::Footer,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub class: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<Motion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            key: None,
            class: String::new(),
            attrs: Vec::new(),
            motion: None,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.class = class.to_string();
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    pub fn motion(mut self, motion: Option<Motion>) -> Self {
        self.motion = motion;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }

    /// All text below this element, concatenated in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Descendant elements (not including `self`) carrying `class`, in
    /// document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        walk(&self.children, &mut |el| {
            if el.has_class(class) {
                found.push(el);
            }
        });
        found
    }

    pub fn find_by_tag(&self, tag: Tag) -> Vec<&Element> {
        let mut found = Vec::new();
        walk(&self.children, &mut |el| {
            if el.tag == tag {
                found.push(el);
            }
        });
        found
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

fn walk<'a>(nodes: &'a [Node], visit: &mut dyn FnMut(&'a Element)) {
    for node in nodes {
        if let Node::Element(el) = node {
            visit(el);
            walk(&el.children, visit);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub root: Element,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualTree {
    pub title: String,
    pub sections: Vec<Section>,
}

impl VisualTree {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new(Tag::Div).class("card").child(
            Element::new(Tag::Ul).children(vec![
                Element::new(Tag::Li).class("tag first").text("one"),
                Element::new(Tag::Li).class("tag").text("two"),
            ]),
        )
    }

    #[test]
    fn test_text_content_in_document_order() {
        assert_eq!(sample().text_content(), "onetwo");
    }

    #[test]
    fn test_find_by_class_matches_whole_tokens() {
        let root = sample();
        let tags = root.find_by_class("tag");

        assert_eq!(tags.len(), 2);
        assert!(tags[0].has_class("first"));
        assert!(root.find_by_class("fir").is_empty());
    }

    #[test]
    fn test_find_by_tag_excludes_self() {
        let root = sample();
        assert!(root.find_by_tag(Tag::Div).is_empty());
        assert_eq!(root.find_by_tag(Tag::Li).len(), 2);
    }

    #[test]
    fn test_get_attr() {
        let link = Element::new(Tag::A).attr("href", "https://example.com");
        assert_eq!(link.get_attr("href"), Some("https://example.com"));
        assert_eq!(link.get_attr("target"), None);
    }
}
