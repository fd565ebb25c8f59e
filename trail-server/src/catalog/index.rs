//! R-tree nearest-neighbour index over catalog points.
//!
//! Points are stored as unit vectors on the sphere rather than raw lat/lon.
//! Squared chord length is monotonic in great-circle distance, so the
//! R-tree's Euclidean ordering matches haversine ordering exactly and
//! nothing breaks at the antimeridian or near the poles.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::domain::GeoPoint;

/// Two candidates closer than this (squared chord, unit sphere) are a tie.
/// Roughly a millimetre on the Earth's surface.
const TIE_EPSILON_2: f64 = 1e-20;

/// An indexed point carrying the position of its entity in the owning `Vec`.
#[derive(Debug, Clone)]
struct IndexedPoint {
    slot: usize,
    point: [f64; 3],
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 3]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for IndexedPoint {
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

/// Nearest-neighbour index mapping points to slots in an entity list.
#[derive(Default)]
pub(crate) struct PointIndex {
    tree: RTree<IndexedPoint>,
}

impl std::fmt::Debug for PointIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointIndex")
            .field("len", &self.tree.size())
            .finish()
    }
}

impl PointIndex {
    /// Bulk-load an index; slot `i` corresponds to `points[i]`.
    pub(crate) fn build(points: impl IntoIterator<Item = GeoPoint>) -> Self {
        let nodes = points
            .into_iter()
            .enumerate()
            .map(|(slot, p)| IndexedPoint {
                slot,
                point: p.to_unit_vector(),
            })
            .collect();
        Self {
            tree: RTree::bulk_load(nodes),
        }
    }

    /// Slots of all entries equidistant (within tolerance) and nearest to `query`.
    ///
    /// Empty only if the index is empty. Callers break ties themselves.
    pub(crate) fn nearest_slots(&self, query: &GeoPoint) -> Vec<usize> {
        let q = query.to_unit_vector();
        let Some(nearest) = self.tree.nearest_neighbor(&q) else {
            return Vec::new();
        };
        let best = nearest.distance_2(&q);

        self.tree
            .locate_within_distance(q, best + TIE_EPSILON_2)
            .map(|node| node.slot)
            .collect()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.tree.size()
    }
}
