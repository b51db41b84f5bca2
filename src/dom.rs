//! Minimal element tree standing in for the page DOM.
//!
//! Rendering is "clear and rebuild": containers get their children replaced
//! wholesale, so the tree only needs construction, lookup, text replacement
//! and serialization.

use quick_xml::escape;
use std::borrow::Cow;
use std::fmt::Write;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    // ==================== Builders ====================

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_class(self, class: &str) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            self
        } else {
            self.with_child(Node::Text(text))
        }
    }

    // ==================== Accessors ====================

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    // ==================== Mutation ====================

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter().position(|(n, _)| n == name) {
            Some(index) => self.attrs[index].1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(n, _)| n != name);
    }

    /// Replace all children with a single text node (none for empty text).
    pub fn set_text(&mut self, text: &str) {
        self.children.clear();
        if !text.is_empty() {
            self.children.push(Node::Text(text.to_string()));
        }
    }

    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    // ==================== Queries ====================

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Node::Element(element) = child {
                if let Some(found) = element.find_by_id_mut(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// All elements carrying attribute `name`, in document order.
    pub fn find_all_with_attr(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_with_attr(name, &mut found);
        found
    }

    fn collect_with_attr<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        if self.attr(name).is_some() {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_with_attr(name, found);
        }
    }

    /// Visit every element carrying attribute `name`, in document order.
    pub fn for_each_with_attr_mut<F>(&mut self, name: &str, f: &mut F)
    where
        F: FnMut(&mut Element),
    {
        if self.attr(name).is_some() {
            f(self);
        }
        for child in &mut self.children {
            if let Node::Element(element) = child {
                element.for_each_with_attr_mut(name, f);
            }
        }
    }

    /// All descendant elements (and self) with the given class, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_by_class(class, found);
        }
    }

    // ==================== Serialization ====================

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&escape_text(text)),
                Node::Element(element) => element.write_html(out),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escape text content for HTML.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape::partial_escape(text)
}

/// Escape an attribute value; both quote characters are escaped.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    escape::escape(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Element {
        Element::new("body")
            .with_child(
                Element::new("header")
                    .with_child(Element::new("h1").with_id("title").with_text("Hello"))
                    .with_child(
                        Element::new("a")
                            .with_attr("data-i18n", "nav_home")
                            .with_text("Home"),
                    ),
            )
            .with_child(Element::new("div").with_id("container").with_class("grid wide"))
            .with_child(
                Element::new("span")
                    .with_attr("data-i18n", "footer")
                    .with_text("Footer"),
            )
    }

    // ==================== Query Tests ====================

    #[test]
    fn test_find_by_id_nested() {
        let tree = sample_tree();
        assert_eq!(tree.find_by_id("title").unwrap().text_content(), "Hello");
        assert!(tree.find_by_id("missing").is_none());
    }

    #[test]
    fn test_find_by_id_mut_allows_replacement() {
        let mut tree = sample_tree();
        tree.find_by_id_mut("title").unwrap().set_text("Bye");
        assert_eq!(tree.find_by_id("title").unwrap().text_content(), "Bye");
    }

    #[test]
    fn test_find_all_with_attr_document_order() {
        let tree = sample_tree();
        let keys: Vec<_> = tree
            .find_all_with_attr("data-i18n")
            .iter()
            .map(|e| e.attr("data-i18n").unwrap())
            .collect();
        assert_eq!(keys, vec!["nav_home", "footer"]);
    }

    #[test]
    fn test_for_each_with_attr_mut_visits_in_order() {
        let mut tree = sample_tree();
        let mut seen = Vec::new();
        tree.for_each_with_attr_mut("data-i18n", &mut |element| {
            seen.push(element.text_content());
            element.set_text("x");
        });

        assert_eq!(seen, vec!["Home", "Footer"]);
        assert_eq!(tree.find_all_with_attr("data-i18n")[1].text_content(), "x");
    }

    #[test]
    fn test_has_class_matches_whole_words() {
        let tree = sample_tree();
        let container = tree.find_by_id("container").unwrap();
        assert!(container.has_class("grid"));
        assert!(container.has_class("wide"));
        assert!(!container.has_class("gri"));
        assert_eq!(tree.find_by_class("wide").len(), 1);
    }

    // ==================== Mutation Tests ====================

    #[test]
    fn test_set_attr_overwrites() {
        let mut element = Element::new("html").with_attr("dir", "rtl");
        element.set_attr("dir", "ltr");
        assert_eq!(element.attr("dir"), Some("ltr"));
        assert_eq!(element.to_html(), r#"<html dir="ltr"></html>"#);
    }

    #[test]
    fn test_remove_attr() {
        let mut element = Element::new("h1").with_class("arabic-name");
        element.remove_attr("class");
        assert_eq!(element.attr("class"), None);
    }

    #[test]
    fn test_set_text_empty_leaves_no_children() {
        let mut element = Element::new("p").with_text("old");
        element.set_text("");
        assert!(element.children().is_empty());
    }

    #[test]
    fn test_replace_children_discards_previous() {
        let mut element = Element::new("div")
            .with_child(Element::new("p"))
            .with_child(Element::new("p"));
        element.replace_children(vec![Element::new("span").into()]);
        assert_eq!(element.child_elements().count(), 1);
        assert_eq!(element.child_elements().next().unwrap().tag(), "span");
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_to_html_escapes_text_and_attrs() {
        let element = Element::new("a")
            .with_attr("href", "https://x.dev/?a=1&b=\"2\"")
            .with_text("<script>alert(1)</script> & more");

        assert_eq!(
            element.to_html(),
            "<a href=\"https://x.dev/?a=1&amp;b=&quot;2&quot;\">&lt;script&gt;alert(1)&lt;/script&gt; &amp; more</a>"
        );
    }

    #[test]
    fn test_attr_escapes_single_quote() {
        let element = Element::new("img").with_attr("alt", "Aseel's <chart>");
        assert_eq!(element.to_html(), "<img alt=\"Aseel&apos;s &lt;chart&gt;\">");
    }

    #[test]
    fn test_text_keeps_quotes_readable() {
        assert_eq!(escape_text(r#"it's "fine" & <ok>"#), r#"it's "fine" &amp; &lt;ok&gt;"#);
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let element = Element::new("meta").with_attr("charset", "utf-8");
        assert_eq!(element.to_html(), r#"<meta charset="utf-8">"#);
    }

    #[test]
    fn test_unicode_text_is_preserved() {
        let element = Element::new("h1").with_text("أسيل الزواهرة");
        assert_eq!(element.to_html(), "<h1>أسيل الزواهرة</h1>");
    }
}
