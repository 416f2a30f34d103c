use crate::foundation::core::{Point, Rect};
use crate::path::cluster::{Cluster, cluster_subpaths};
use crate::path::interp::collect_subpaths;
use crate::path::lexer::{PathError, lex};

/// Split compound path data into one path-data string per visual shape.
///
/// Each result is self-contained path syntax: the outer contour first, followed by the
/// contours nested inside it. Input without any recognizable token comes back unchanged as the
/// only element, which callers treat as "nothing to split".
#[tracing::instrument(skip(d), fields(len = d.len()))]
pub fn decompose(d: &str) -> Vec<String> {
    let clusters = match analyze(d) {
        Ok(clusters) if !clusters.is_empty() => clusters,
        Ok(_) => return vec![d.to_owned()],
        Err(err) => {
            tracing::debug!(%err, "path data not decomposable");
            return vec![d.to_owned()];
        }
    };
    clusters.iter().map(Cluster::to_path_data).collect()
}

/// Tokenize, interpret and cluster `d`, exposing the intermediate geometry.
pub fn analyze(d: &str) -> Result<Vec<Cluster<'_>>, PathError> {
    let tokens = lex(d)?;
    let subpaths = collect_subpaths(&tokens);
    let n_subpaths = subpaths.len();
    let clusters = cluster_subpaths(subpaths);
    tracing::debug!(
        tokens = tokens.len(),
        subpaths = n_subpaths,
        clusters = clusters.len(),
        "path clustered"
    );
    Ok(clusters)
}

/// Serializable view of one cluster, for diagnostics.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ClusterSummary {
    /// Number of contours in the cluster.
    pub members: usize,
    /// Reference bounds (the defining contour's).
    pub bbox: Rect,
    /// Start point of every member, in member order.
    pub starts: Vec<Point>,
    /// Serialized path data.
    pub d: String,
}

impl From<&Cluster<'_>> for ClusterSummary {
    fn from(c: &Cluster<'_>) -> Self {
        Self {
            members: c.members.len(),
            bbox: c.bbox,
            starts: c.members.iter().map(|m| m.start).collect(),
            d: c.to_path_data(),
        }
    }
}

/// [`analyze`] flattened into summaries; empty when `d` has no tokens.
pub fn summarize(d: &str) -> Vec<ClusterSummary> {
    analyze(d)
        .map(|cs| cs.iter().map(ClusterSummary::from).collect())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/unit/path/decompose.rs"]
mod tests;
