//! Composite: drawings made of shapes and groups of shapes.
//!
//! Leaves and groups are the same type, so printing walks the whole tree
//! without caring which is which.

use std::fmt;

use crate::domain::value_objects::Color;

/// Marker repeated once per level of depth.
const DEPTH_MARKER: char = '*';

/// A shape or a group of shapes. Children are owned by their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicObject {
    name: String,
    color: Option<Color>,
    children: Vec<GraphicObject>,
}

impl GraphicObject {
    /// An empty group called "Group".
    pub fn new() -> Self {
        Self::group("Group")
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            children: Vec::new(),
        }
    }

    pub fn circle(color: Color) -> Self {
        Self::shape("Circle", color)
    }

    pub fn square(color: Color) -> Self {
        Self::shape("Square", color)
    }

    fn shape(name: &str, color: Color) -> Self {
        Self {
            name: name.into(),
            color: Some(color),
            children: Vec::new(),
        }
    }

    /// Append a child and return `self` for chaining.
    pub fn add(&mut self, child: GraphicObject) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Builder-style variant of [`Self::add`].
    pub fn with(mut self, child: GraphicObject) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn children(&self) -> &[GraphicObject] {
        &self.children
    }

    /// Number of levels in the tree; a lone node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }

    /// Pre-order lines, one per node.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_lines(0, &mut out);
        out
    }

    fn collect_lines(&self, depth: usize, out: &mut Vec<String>) {
        let mut line: String = std::iter::repeat_n(DEPTH_MARKER, depth).collect();
        if let Some(color) = self.color {
            line.push_str(color.label());
            line.push(' ');
        }
        line.push_str(&self.name);
        out.push(line);

        for child in &self.children {
            child.collect_lines(depth + 1, out);
        }
    }
}

impl Default for GraphicObject {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GraphicObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawing() -> GraphicObject {
        let mut group = GraphicObject::new();
        group
            .add(GraphicObject::circle(Color::Blue))
            .add(GraphicObject::square(Color::Blue));

        GraphicObject::group("My Drawing")
            .with(GraphicObject::square(Color::Red))
            .with(GraphicObject::circle(Color::Yellow))
            .with(group)
    }

    #[test]
    fn prints_pre_order_with_depth_markers() {
        assert_eq!(
            drawing().to_string(),
            "My Drawing\n*Red Square\n*Yellow Circle\n*Group\n**Blue Circle\n**Blue Square\n"
        );
    }

    #[test]
    fn depth_d_gives_d_indentation_levels() {
        let mut tree = GraphicObject::group("root");
        for level in 0..4 {
            let mut nested = GraphicObject::group(format!("level-{level}"));
            nested.add(tree);
            tree = nested;
        }
        let levels: std::collections::BTreeSet<usize> = tree
            .lines()
            .iter()
            .map(|l| l.chars().take_while(|c| *c == DEPTH_MARKER).count())
            .collect();
        assert_eq!(tree.depth(), 5);
        assert_eq!(levels.len(), tree.depth());
    }

    #[test]
    fn parent_line_precedes_descendants() {
        let lines = drawing().lines();
        let group = lines.iter().position(|l| l == "*Group").unwrap();
        let child = lines.iter().position(|l| l == "**Blue Circle").unwrap();
        assert!(group < child);
        assert_eq!(lines[0], "My Drawing");
    }

    #[test]
    fn new_group_has_no_children() {
        let g = GraphicObject::default();
        assert_eq!(g.name(), "Group");
        assert!(g.children().is_empty());
        assert_eq!(g.depth(), 1);
    }
}
