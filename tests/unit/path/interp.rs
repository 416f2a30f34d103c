use super::*;
use crate::path::lexer::lex;

fn subpaths(d: &str) -> Vec<SubPath<'_>> {
    collect_subpaths(&lex(d).unwrap())
}

#[test]
fn movetos_delimit_subpaths() {
    let sps = subpaths("M0 0 L10 0 L10 10 Z M20 0 L30 0 L30 10 Z");
    assert_eq!(sps.len(), 2);
    assert_eq!(sps[0].to_path_data(), "M 0 0 L 10 0 L 10 10 Z");
    assert_eq!(sps[1].to_path_data(), "M 20 0 L 30 0 L 30 10 Z");
    assert_eq!(sps[1].start, Point::new(20.0, 0.0));
    assert_eq!(sps[1].bbox, Rect::new(20.0, 0.0, 30.0, 10.0));
    assert_eq!(
        sps[0].polygon,
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0)
        ]
    );
}

#[test]
fn relative_moveto_is_promoted_with_explicit_lineto() {
    let sps = subpaths("m5 5 10 0 0 10z");
    assert_eq!(sps.len(), 1);
    assert_eq!(sps[0].to_path_data(), "M 5 5 l 10 0 0 10 z");
    assert_eq!(sps[0].start, Point::new(5.0, 5.0));
    assert_eq!(sps[0].bbox, Rect::new(5.0, 5.0, 15.0, 15.0));
}

#[test]
fn later_relative_moveto_resolves_against_pen() {
    // After `z` the pen is back at (10, 10); `m 5 5` lands on (15, 15).
    let sps = subpaths("M10 10 l20 0 0 20 z m5 5 l2 0 0 2 z");
    assert_eq!(sps.len(), 2);
    assert_eq!(sps[1].to_path_data(), "M 15 15 l 2 0 0 2 z");
    assert_eq!(sps[1].start, Point::new(15.0, 15.0));
    assert_eq!(sps[1].bbox, Rect::new(15.0, 15.0, 17.0, 17.0));
}

#[test]
fn promoted_coordinates_never_print_negative_zero() {
    let sps = subpaths("M3 -2 z m-3 2 h1");
    assert_eq!(sps[1].to_path_data(), "M 0 0 h 1");
}

#[test]
fn implicit_pairs_after_absolute_moveto_are_linetos() {
    let sps = subpaths("M0 0 40 0 40 30");
    assert_eq!(sps.len(), 1);
    assert_eq!(sps[0].start, Point::ZERO);
    assert_eq!(sps[0].polygon.len(), 3);
    assert_eq!(sps[0].bbox, Rect::new(0.0, 0.0, 40.0, 30.0));
}

#[test]
fn horizontal_and_vertical_keep_the_other_axis() {
    let sps = subpaths("M1 2 H9 V7 h-4 v-1");
    assert_eq!(
        sps[0].polygon,
        vec![
            Point::new(1.0, 2.0),
            Point::new(9.0, 2.0),
            Point::new(9.0, 7.0),
            Point::new(5.0, 7.0),
            Point::new(5.0, 6.0),
        ]
    );
}

#[test]
fn curve_controls_widen_bbox_but_not_polygon() {
    let sps = subpaths("M0 0 C0 -10 20 -10 20 0 Q30 30 40 0");
    let sp = &sps[0];
    assert_eq!(sp.bbox, Rect::new(0.0, -10.0, 40.0, 30.0));
    assert_eq!(
        sp.polygon,
        vec![
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(40.0, 0.0)
        ]
    );
}

#[test]
fn smooth_cubic_folds_its_control_point() {
    let sps = subpaths("M0 0 s5 -8 10 0 t10 0");
    assert_eq!(sps[0].bbox, Rect::new(0.0, -8.0, 20.0, 0.0));
    assert_eq!(sps[0].polygon.last(), Some(&Point::new(20.0, 0.0)));
}

#[test]
fn arc_records_only_its_endpoint() {
    // A half circle bulging far below the chord; only (20, 0) is recorded.
    let sps = subpaths("M0 0 A10 10 0 0 0 20 0 a5 5 0 0 1 0 10");
    assert_eq!(sps[0].bbox, Rect::new(0.0, 0.0, 20.0, 10.0));
    assert_eq!(sps[0].polygon.len(), 3);
}

#[test]
fn closepath_returns_pen_to_subpath_start() {
    let sps = subpaths("M10 10 L20 10 L20 20 Z l5 0");
    assert_eq!(sps[0].polygon.last(), Some(&Point::new(15.0, 10.0)));
}

#[test]
fn truncated_groups_are_zero_filled() {
    let sps = subpaths("M0 0 L10 10 C1 2 3");
    assert_eq!(sps[0].to_path_data(), "M 0 0 L 10 10 C 1 2 3 0 0 0");
    assert_eq!(sps[0].polygon.last(), Some(&Point::ZERO));
}

#[test]
fn command_without_arguments_reads_zeros() {
    let sps = subpaths("M5 5 L Z");
    assert_eq!(sps[0].to_path_data(), "M 5 5 L 0 0 Z");
}

#[test]
fn numbers_after_closepath_survive_without_geometry() {
    let sps = subpaths("M0 0 L4 0 L4 4 Z 99 99");
    assert_eq!(sps[0].to_path_data(), "M 0 0 L 4 0 L 4 4 Z 99 99");
    assert_eq!(sps[0].bbox, Rect::new(0.0, 0.0, 4.0, 4.0));
}

#[test]
fn unknown_letters_are_inert() {
    let sps = subpaths("M0 0 L4 4 X 7 7");
    assert_eq!(sps[0].to_path_data(), "M 0 0 L 4 4 X 7 7");
    assert_eq!(sps[0].polygon.len(), 2);
}

#[test]
fn leading_numbers_get_a_moveto_at_the_origin() {
    let sps = subpaths("12 34");
    assert_eq!(sps.len(), 1);
    assert_eq!(sps[0].to_path_data(), "M 0 0 12 34");
    assert_eq!(sps[0].start, Point::ZERO);
    assert_eq!(sps[0].bbox, Rect::new(0.0, 0.0, 0.0, 0.0));
    assert_eq!(sps[0].polygon, vec![Point::ZERO]);

    let sps = subpaths("5 M0 0 L10 0 L10 10 Z");
    assert_eq!(sps.len(), 2);
    assert_eq!(sps[0].to_path_data(), "M 0 0 5");
    assert_eq!(sps[1].to_path_data(), "M 0 0 L 10 0 L 10 10 Z");
}

#[test]
fn leading_lineto_gets_a_moveto_at_the_origin() {
    let sps = subpaths("L5 5 M20 20 L30 20 L30 30 Z");
    assert_eq!(sps.len(), 2);
    assert_eq!(sps[0].to_path_data(), "M 0 0 L 5 5");
    assert_eq!(sps[0].start, Point::ZERO);
    assert_eq!(sps[0].bbox, Rect::new(0.0, 0.0, 5.0, 5.0));
    assert_eq!(sps[0].polygon, vec![Point::ZERO, Point::new(5.0, 5.0)]);
}

#[test]
fn every_subpath_opens_with_absolute_moveto() {
    for d in ["L5 5 M20 20 L30 20 Z", "7 8 l1 1", "X 1 2 M3 3 h1", "z m1 1 h1", "c1 2 3 4 5 6"] {
        for sp in subpaths(d) {
            assert_eq!(sp.tokens.first().map(|t| t.as_ref()), Some("M"), "{d}");
        }
    }
}

#[test]
fn original_numeric_text_is_preserved() {
    let sps = subpaths("M1e1,.5L-0.50 +2");
    assert_eq!(sps[0].to_path_data(), "M 1e1 .5 L -0.50 +2");
    assert_eq!(sps[0].start, Point::new(10.0, 0.5));
}

#[test]
fn format_coord_prints_shortest_form() {
    assert_eq!(format_coord(10.0), "10");
    assert_eq!(format_coord(-0.0), "0");
    assert_eq!(format_coord(2.5), "2.5");
    assert_eq!(format_coord(0.1 + 0.2), "0.30000000000000004");
}
