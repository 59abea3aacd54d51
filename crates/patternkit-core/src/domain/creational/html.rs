//! Builder: assembling an HTML element tree one child at a time.

use std::fmt;

const INDENT_SIZE: usize = 2;

/// An element with optional text and owned child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlElement {
    pub name: String,
    pub text: String,
    pub children: Vec<HtmlElement>,
}

impl HtmlElement {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = " ".repeat(INDENT_SIZE * indent);
        writeln!(f, "{pad}<{}>", self.name)?;
        if !self.text.trim().is_empty() {
            let text_pad = " ".repeat(INDENT_SIZE * (indent + 1));
            writeln!(f, "{text_pad}{}", self.text)?;
        }
        for child in &self.children {
            child.write_indented(f, indent + 1)?;
        }
        writeln!(f, "{pad}</{}>", self.name)
    }
}

impl fmt::Display for HtmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// Mutable, reusable builder rooted at a single element.
#[derive(Debug, Clone)]
pub struct HtmlBuilder {
    root_name: String,
    root: HtmlElement,
}

impl HtmlBuilder {
    pub fn new(root_name: impl Into<String>) -> Self {
        let root_name = root_name.into();
        Self {
            root: HtmlElement::new(root_name.clone(), ""),
            root_name,
        }
    }

    /// Append a child to the root.
    pub fn add_child(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.root.children.push(HtmlElement::new(name, text));
        self
    }

    /// Reset to an empty root with the original name.
    pub fn clear(&mut self) -> &mut Self {
        self.root = HtmlElement::new(self.root_name.clone(), "");
        self
    }

    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    pub fn build(&self) -> HtmlElement {
        self.root.clone()
    }
}

impl fmt::Display for HtmlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}
