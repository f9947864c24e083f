use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive,
};

/// One drawable element of a chart tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Group(Group),
    Line(LinePrimitive),
    Text(TextPrimitive),
    Rect(RectPrimitive),
    Circle(CirclePrimitive),
    Polygon(PolygonPrimitive),
}

impl Node {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Group(group) => group.validate(),
            Self::Line(line) => line.validate(),
            Self::Text(text) => text.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Polygon(polygon) => polygon.validate(),
        }
    }
}

/// Backend-agnostic grouping node, optionally addressable by id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Group {
    pub id: Option<String>,
    pub children: Vec<Node>,
}

/// Element totals of a subtree, groups excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeCounts {
    pub lines: usize,
    pub texts: usize,
    pub rects: usize,
    pub circles: usize,
    pub polygons: usize,
}

impl Group {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.children.push(Node::Line(line));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.children.push(Node::Text(text));
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: Group) -> Self {
        self.children.push(Node::Group(group));
        self
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.children.iter().try_for_each(Node::validate)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first search for a descendant group (or `self`) with `id`.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Group> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Group(group) => group.find(id),
            _ => None,
        })
    }

    /// Direct child groups in order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.children.iter().filter_map(|child| match child {
            Node::Group(group) => Some(group),
            _ => None,
        })
    }

    #[must_use]
    pub fn counts(&self) -> NodeCounts {
        let mut counts = NodeCounts::default();
        self.accumulate_counts(&mut counts);
        counts
    }

    fn accumulate_counts(&self, counts: &mut NodeCounts) {
        for child in &self.children {
            match child {
                Node::Group(group) => group.accumulate_counts(counts),
                Node::Line(_) => counts.lines += 1,
                Node::Text(_) => counts.texts += 1,
                Node::Rect(_) => counts.rects += 1,
                Node::Circle(_) => counts.circles += 1,
                Node::Polygon(_) => counts.polygons += 1,
            }
        }
    }
}
