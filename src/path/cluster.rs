use crate::foundation::core::{Point, Rect, rect_area, rect_contains_rect};
use crate::path::interp::SubPath;

/// A compound shape: an outer contour followed by the contours nested inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster<'a> {
    /// Members in the order they joined; the defining member is first.
    pub members: Vec<SubPath<'a>>,
    /// Bounds of the defining member. Never widened by later members.
    pub bbox: Rect,
    /// Polygon of the defining member, used as the containment reference.
    pub polygon: Vec<Point>,
}

impl Cluster<'_> {
    /// Members' path data joined in member order.
    pub fn to_path_data(&self) -> String {
        self.members
            .iter()
            .map(SubPath::to_path_data)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn accepts(&self, sp: &SubPath<'_>) -> bool {
        rect_contains_rect(self.bbox, sp.bbox) && point_in_polygon(sp.start, &self.polygon)
    }
}

/// Group subpaths into compound shapes.
///
/// Subpaths are ranked by bounding-box area, largest first, keeping input order on ties.
/// Each one joins the first existing cluster whose reference box contains its box and whose
/// reference polygon contains its start point; otherwise it founds a new cluster.
pub fn cluster_subpaths(mut subpaths: Vec<SubPath<'_>>) -> Vec<Cluster<'_>> {
    // `sort_by` is stable, which keeps equal-area contours in appearance order.
    subpaths.sort_by(|a, b| rect_area(b.bbox).total_cmp(&rect_area(a.bbox)));

    let mut clusters: Vec<Cluster<'_>> = Vec::new();
    for sp in subpaths {
        match clusters.iter().position(|c| c.accepts(&sp)) {
            Some(i) => clusters[i].members.push(sp),
            None => clusters.push(Cluster {
                bbox: sp.bbox,
                polygon: sp.polygon.clone(),
                members: vec![sp],
            }),
        }
    }
    clusters
}

/// Even-odd ray casting: count crossings of a horizontal ray from `p` towards +x.
///
/// Points exactly on an edge may land on either side. Fewer than three vertices never contain
/// anything.
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    let mut inside = false;
    let Some(mut prev) = polygon.last().copied() else {
        return false;
    };
    for &cur in polygon {
        if (cur.y > p.y) != (prev.y > p.y) {
            let x_cross = (prev.x - cur.x) * (p.y - cur.y) / (prev.y - cur.y) + cur.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        prev = cur;
    }
    inside
}

#[cfg(test)]
#[path = "../../tests/unit/path/cluster.rs"]
mod tests;
