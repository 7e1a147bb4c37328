//! Merging of areas that reach each other through one-way links

use indexmap::IndexSet;
use tracing::debug;

use crate::graph::{EdgeId, GraphEdge, SearchOptions, first_path};
use crate::paths::area::AreaId;
use crate::paths::areas_graph::AreasGraph;
use crate::topology::Topology;

impl<T: Topology> AreasGraph<T> {
    /// Merge every directed cycle of areas into a single area
    ///
    /// Depth-first walk over area links. Each link is followed once; when a
    /// link returns to an area on the current walk, the walk suffix from that
    /// area is merged and the walk resumes from the merged area. Afterwards
    /// the areas graph has no directed cycle. Returns the number of merges.
    pub fn group_cycles(&mut self) -> usize {
        let mut handled: IndexSet<EdgeId> = IndexSet::new();
        let mut finished: IndexSet<AreaId> = IndexSet::new();
        let mut merges = 0;

        while let Some(start) = self.ids().into_iter().find(|id| !finished.contains(id)) {
            let mut walk = vec![start];
            while let Some(&top) = walk.last() {
                let next = self
                    .graph()
                    .outgoing(top)
                    .map(|(_, link)| (link.paths_edge, link.destination()))
                    .find(|(paths_edge, _)| !handled.contains(paths_edge));

                let Some((paths_edge, destination)) = next else {
                    finished.insert(top);
                    walk.pop();
                    continue;
                };
                handled.insert(paths_edge);
                if destination == top || finished.contains(&destination) {
                    continue;
                }
                match walk.iter().position(|&area| area == destination) {
                    Some(position) => {
                        let members = walk.split_off(position);
                        if let Some(merged) = self.merge_areas(&members) {
                            walk.push(merged);
                            merges += 1;
                        }
                    }
                    None => walk.push(destination),
                }
            }
        }
        if merges > 0 {
            debug!(merges, areas = self.len(), "grouped area cycles");
        }
        merges
    }

    /// Merge every area lying on a cycle through the link of a paths edge
    ///
    /// Repeats until no cycle passes through the merged area. Returns the
    /// merged area, or `None` when the paths edge closes no cycle.
    pub fn group_mutually_reachable(&mut self, paths_edge: EdgeId) -> Option<AreaId> {
        let link = self.link_of(paths_edge)?;
        let (source, destination) = (link.source, link.destination);

        let back = first_path(
            self.graph(),
            [destination],
            &SearchOptions::directed(),
            |path| path.last_vertex() == Some(source),
            |_| false,
        )?;
        let mut members = vec![source];
        members.extend(back.vertices);
        let mut merged = self.merge_areas(&members)?;

        // The merged area may now close further cycles
        while let Some(cycle) = first_path(
            self.graph(),
            [merged],
            &SearchOptions::directed(),
            |path| !path.is_empty() && path.last_vertex() == Some(merged),
            |_| false,
        ) {
            merged = self.merge_areas(&cycle.vertices)?;
        }
        debug!(area = %merged, "grouped mutually reachable areas");
        Some(merged)
    }

    /// Re-group cycles passing through freshly rebuilt areas
    ///
    /// Every cycle created by a patch passes through a rebuilt area, so only
    /// the links of those areas need checking. Returns the number of merges.
    pub fn regroup_around(&mut self, rebuilt: &[AreaId]) -> usize {
        let mut merges = 0;
        for &id in rebuilt {
            let links: Vec<EdgeId> = self
                .graph()
                .outgoing(id)
                .chain(self.graph().incoming(id))
                .map(|(_, link)| link.paths_edge)
                .collect();
            for paths_edge in links {
                if self.group_mutually_reachable(paths_edge).is_some() {
                    merges += 1;
                }
            }
        }
        merges
    }
}
