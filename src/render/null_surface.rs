use std::collections::HashSet;

use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, Group, NodeCounts, SvgRoot};

/// Headless surface for tests and benchmarks.
///
/// Nothing is kept except bookkeeping, but every group is still validated so
/// invalid geometry surfaces before a real document is involved.
#[derive(Debug, Default)]
pub struct NullSurface {
    roots: HashSet<String>,
    pub mount_count: usize,
    pub upsert_count: usize,
    pub last_key: Option<String>,
    pub last_counts: NodeCounts,
}

impl DrawingSurface for NullSurface {
    fn mount_root(&mut self, root: SvgRoot) -> ChartResult<()> {
        self.roots.insert(root.id);
        self.mount_count += 1;
        Ok(())
    }

    fn has_root(&self, root_id: &str) -> bool {
        self.roots.contains(root_id)
    }

    fn upsert(&mut self, root_id: &str, key: &str, group: Group) -> ChartResult<()> {
        if !self.roots.contains(root_id) {
            return Err(ChartError::RootNotMounted {
                id: root_id.to_owned(),
            });
        }
        group.validate()?;
        self.upsert_count += 1;
        self.last_key = Some(key.to_owned());
        self.last_counts = group.counts();
        Ok(())
    }
}
