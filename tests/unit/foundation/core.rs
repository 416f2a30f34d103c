use super::*;

#[test]
fn empty_bounds_collapse_to_fallback_point() {
    let b = Bounds::default();
    assert!(b.is_empty());
    let r = b.finish(Point::new(3.0, -4.0));
    assert_eq!(r, Rect::new(3.0, -4.0, 3.0, -4.0));
    assert_eq!(rect_area(r), 0.0);
}

#[test]
fn bounds_grow_in_every_direction() {
    let mut b = Bounds::default();
    b.add(Point::new(5.0, 5.0));
    b.add(Point::new(-1.0, 8.0));
    b.add(Point::new(2.0, -3.0));
    let r = b.finish(Point::ZERO);
    assert_eq!(r, Rect::new(-1.0, -3.0, 5.0, 8.0));
    assert_eq!(rect_area(r), 66.0);
}

#[test]
fn containment_is_closed_on_every_edge() {
    let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(rect_contains_rect(outer, outer));
    assert!(rect_contains_rect(outer, Rect::new(0.0, 2.0, 10.0, 3.0)));
    assert!(!rect_contains_rect(outer, Rect::new(-0.5, 2.0, 4.0, 3.0)));
    assert!(!rect_contains_rect(outer, Rect::new(1.0, 2.0, 4.0, 10.5)));
}
