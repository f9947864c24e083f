mod frame;
mod null_surface;
mod primitives;
mod svg_document;
mod target;

pub use frame::{Group, Node, NodeCounts};
pub use null_surface::NullSurface;
pub use primitives::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive, TextAnchor, TextPrimitive,
};
pub use svg_document::{SVG_NAMESPACE, SvgDocument, SvgRoot};
pub use target::RenderTarget;

use crate::error::ChartResult;

/// Drawing surface a chart mounts its root on and renders groups into.
///
/// Surfaces own the node tree. Charts only hand over fully built groups, so
/// layout code never touches a mutable tree.
pub trait DrawingSurface {
    /// Mounts `root`, replacing any root already mounted under the same id.
    fn mount_root(&mut self, root: SvgRoot) -> ChartResult<()>;

    #[must_use]
    fn has_root(&self, root_id: &str) -> bool;

    /// Removes the group stored under `key` below `root_id`, if any, then
    /// appends `group` under that key.
    ///
    /// Fails with `RootNotMounted` when `root_id` was never mounted.
    fn upsert(&mut self, root_id: &str, key: &str, group: Group) -> ChartResult<()>;
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn mount_root(&mut self, root: SvgRoot) -> ChartResult<()> {
        (**self).mount_root(root)
    }

    fn has_root(&self, root_id: &str) -> bool {
        (**self).has_root(root_id)
    }

    fn upsert(&mut self, root_id: &str, key: &str, group: Group) -> ChartResult<()> {
        (**self).upsert(root_id, key, group)
    }
}
