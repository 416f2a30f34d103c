pub use kurbo::{Point, Rect};

/// Running axis-aligned bounds over recorded coordinates.
///
/// Starts empty; [`Bounds::finish`] collapses an empty accumulator to a single point so the
/// resulting [`Rect`] is always finite.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    rect: Option<Rect>,
}

impl Bounds {
    /// Fold `p` into the bounds.
    pub fn add(&mut self, p: Point) {
        self.rect = Some(match self.rect {
            Some(r) => r.union_pt(p),
            None => Rect::from_points(p, p),
        });
    }

    /// Return `true` when no coordinate has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.rect.is_none()
    }

    /// Finished rectangle, or a zero-size box at `fallback` when nothing was recorded.
    pub fn finish(self, fallback: Point) -> Rect {
        self.rect.unwrap_or_else(|| Rect::from_points(fallback, fallback))
    }
}

/// Closed containment: every bound of `inner` lies within (or on) the bounds of `outer`.
pub fn rect_contains_rect(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && outer.x1 >= inner.x1 && outer.y0 <= inner.y0 && outer.y1 >= inner.y1
}

/// Area used for ranking; zero-width or zero-height boxes rank as 0.
pub fn rect_area(r: Rect) -> f64 {
    (r.x1 - r.x0) * (r.y1 - r.y0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
