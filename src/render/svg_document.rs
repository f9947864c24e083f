use std::fmt::{self, Write};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, Group, Node, RectPrimitive};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Root `<svg>` element of one chart.
///
/// Keyed groups keep insertion order; replacing a key moves the new group to
/// the end, the same way remove-then-append does in a DOM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgRoot {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub background: Option<RectPrimitive>,
    pub groups: IndexMap<String, Group>,
}

impl SvgRoot {
    #[must_use]
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            background: None,
            groups: IndexMap::new(),
        }
    }

    /// Adds a full-size background rectangle painted with `fill`.
    #[must_use]
    pub fn with_background(mut self, fill: impl Into<String>) -> Self {
        self.background = Some(RectPrimitive::new(0.0, 0.0, self.width, self.height, fill));
        self
    }

    #[must_use]
    pub fn group(&self, key: &str) -> Option<&Group> {
        self.groups.get(key)
    }

    pub fn write_svg<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(
            out,
            r#"<svg xmlns="{SVG_NAMESPACE}" width="{w}" height="{h}" viewBox="0 0 {w} {h}" id="{id}">"#,
            w = self.width,
            h = self.height,
            id = escape_xml(&self.id),
        )?;
        if let Some(rect) = &self.background {
            write_rect(out, rect, 1)?;
        }
        for group in self.groups.values() {
            write_group(out, group, 1)?;
        }
        writeln!(out, "</svg>")
    }

    pub fn to_svg_string(&self) -> ChartResult<String> {
        let mut svg = String::new();
        self.write_svg(&mut svg).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize svg root `{}`: {e}", self.id))
        })?;
        Ok(svg)
    }
}

/// In-memory document holding any number of mounted chart roots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SvgDocument {
    roots: IndexMap<String, SvgRoot>,
}

impl SvgDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn root(&self, root_id: &str) -> Option<&SvgRoot> {
        self.roots.get(root_id)
    }

    #[must_use]
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    pub fn to_svg_string(&self, root_id: &str) -> ChartResult<String> {
        self.roots
            .get(root_id)
            .ok_or_else(|| ChartError::RootNotMounted {
                id: root_id.to_owned(),
            })?
            .to_svg_string()
    }
}

impl DrawingSurface for SvgDocument {
    fn mount_root(&mut self, root: SvgRoot) -> ChartResult<()> {
        if let Some(rect) = &root.background {
            rect.validate()?;
        }
        self.roots.shift_remove(&root.id);
        self.roots.insert(root.id.clone(), root);
        Ok(())
    }

    fn has_root(&self, root_id: &str) -> bool {
        self.roots.contains_key(root_id)
    }

    fn upsert(&mut self, root_id: &str, key: &str, group: Group) -> ChartResult<()> {
        group.validate()?;
        let root = self
            .roots
            .get_mut(root_id)
            .ok_or_else(|| ChartError::RootNotMounted {
                id: root_id.to_owned(),
            })?;
        root.groups.shift_remove(key);
        root.groups.insert(key.to_owned(), group);
        Ok(())
    }
}

fn indent<W: Write>(out: &mut W, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str("  ")?;
    }
    Ok(())
}

fn write_group<W: Write>(out: &mut W, group: &Group, depth: usize) -> fmt::Result {
    indent(out, depth)?;
    match &group.id {
        Some(id) => writeln!(out, r#"<g id="{}">"#, escape_xml(id))?,
        None => writeln!(out, "<g>")?,
    }
    for child in &group.children {
        write_node(out, child, depth + 1)?;
    }
    indent(out, depth)?;
    writeln!(out, "</g>")
}

fn write_rect<W: Write>(out: &mut W, rect: &RectPrimitive, depth: usize) -> fmt::Result {
    indent(out, depth)?;
    writeln!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        escape_xml(&rect.fill)
    )
}

fn write_node<W: Write>(out: &mut W, node: &Node, depth: usize) -> fmt::Result {
    match node {
        Node::Group(group) => write_group(out, group, depth),
        Node::Rect(rect) => write_rect(out, rect, depth),
        Node::Line(line) => {
            indent(out, depth)?;
            writeln!(
                out,
                r#"<line x1="{}" x2="{}" y1="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                line.x1,
                line.x2,
                line.y1,
                line.y2,
                escape_xml(&line.stroke),
                line.stroke_width
            )
        }
        Node::Text(text) => {
            indent(out, depth)?;
            writeln!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" text-anchor="{}" fill="{}">{}</text>"#,
                text.x,
                text.y,
                text.font_size,
                text.anchor.as_str(),
                escape_xml(&text.fill),
                escape_xml(&text.text)
            )
        }
        Node::Circle(circle) => {
            indent(out, depth)?;
            writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                circle.cx,
                circle.cy,
                circle.radius,
                escape_xml(&circle.fill),
                escape_xml(&circle.stroke),
                circle.stroke_width
            )
        }
        Node::Polygon(polygon) => {
            indent(out, depth)?;
            out.write_str(r#"<polygon points=""#)?;
            for (i, (x, y)) in polygon.points.iter().enumerate() {
                if i > 0 {
                    out.write_char(' ')?;
                }
                write!(out, "{x},{y}")?;
            }
            writeln!(out, r#"" fill="{}"/>"#, escape_xml(&polygon.fill))
        }
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
