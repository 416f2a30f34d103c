use super::*;
use crate::document::xml::parse;

const TWO_SQUARES: &str = "M0 0 L10 0 L10 10 Z M20 0 L30 0 L30 10 Z";

#[test]
fn compound_path_is_replaced_in_place() {
    let src = format!(
        r#"<svg><rect id="bg"/><path id="shape" fill="red" d="{TWO_SQUARES}" stroke="none"/><circle/></svg>"#
    );
    let mut doc = parse(&src).unwrap();
    let path = doc.element_by_id("shape").unwrap();
    let mut ids = IdAllocator::from_document(&doc);

    let created = doc.separate_compound_path(path, &mut ids).unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(doc.element_by_id("shape"), None);

    let tags: Vec<&str> = doc
        .children(doc.root())
        .iter()
        .filter_map(|&n| doc.tag(n))
        .collect();
    assert_eq!(tags, ["rect", "path", "path", "circle"]);

    let first = doc.element(created[0]).unwrap();
    assert_eq!(
        first.attrs,
        vec![
            ("fill".to_string(), "red".to_string()),
            ("stroke".to_string(), "none".to_string()),
            ("d".to_string(), "M 0 0 L 10 0 L 10 10 Z".to_string()),
            ("id".to_string(), "path-1".to_string()),
        ]
    );
    assert_eq!(doc.attr(created[1], "id"), Some("path-2"));
    assert_eq!(doc.attr(created[1], "d"), Some("M 20 0 L 30 0 L 30 10 Z"));
}

#[test]
fn atomic_path_is_left_alone() {
    let mut doc = parse(r#"<svg><path id="p" d="M0 0 L5 5 Z"/><path id="q"/></svg>"#).unwrap();
    let before = doc.to_svg_string();
    let mut ids = IdAllocator::from_document(&doc);
    for id in ["p", "q"] {
        let node = doc.element_by_id(id).unwrap();
        assert!(doc.separate_compound_path(node, &mut ids).unwrap().is_empty());
    }
    assert_eq!(doc.to_svg_string(), before);
}

#[test]
fn separating_a_non_path_fails() {
    let mut doc = parse(r#"<svg><rect id="r"/></svg>"#).unwrap();
    let node = doc.element_by_id("r").unwrap();
    let mut ids = IdAllocator::default();
    let err = doc.separate_compound_path(node, &mut ids).unwrap_err();
    assert!(err.to_string().contains("not <path>"));
}

#[test]
fn smart_analyze_splits_and_labels() {
    let src = format!(
        r#"<svg><g><path id="path-1" d="{TWO_SQUARES}"/><rect/></g><path d="M0 0 L1 1"/><defs/></svg>"#
    );
    let mut doc = parse(&src).unwrap();
    let changes = doc.smart_analyze(&AnalyzeOpts::default()).unwrap();
    // One split, then ids for the <g>, the <rect> and the atomic <path>.
    assert_eq!(changes, 4);

    let out = doc.to_svg_string();
    assert_eq!(
        out,
        concat!(
            r#"<svg><g id="g-1">"#,
            r#"<path d="M 0 0 L 10 0 L 10 10 Z" id="path-2"/>"#,
            r#"<path d="M 20 0 L 30 0 L 30 10 Z" id="path-3"/>"#,
            r#"<rect id="rect-1"/></g>"#,
            r#"<path d="M0 0 L1 1" id="path-4"/><defs/></svg>"#
        )
    );
}

#[test]
fn smart_analyze_respects_opts() {
    let src = format!(r#"<svg><path d="{TWO_SQUARES}"/><rect/></svg>"#);

    let mut doc = parse(&src).unwrap();
    let opts = AnalyzeOpts {
        split_paths: false,
        ..AnalyzeOpts::default()
    };
    assert_eq!(doc.smart_analyze(&opts).unwrap(), 2);
    assert_eq!(doc.elements_by_tag("path").len(), 1);

    let mut doc = parse(&src).unwrap();
    let opts = AnalyzeOpts {
        assign_ids: false,
        ..AnalyzeOpts::default()
    };
    assert_eq!(doc.smart_analyze(&opts).unwrap(), 1);
    let rect = doc.elements_by_tag("rect")[0];
    assert_eq!(doc.attr(rect, "id"), None);
}

#[test]
fn add_ids_counts_only_new_labels() {
    let mut doc =
        parse(r#"<svg><rect id="rect-1"/><rect/><rect id=""/><circle/><stop/></svg>"#).unwrap();
    let n = doc.add_ids_to_elements(&AnalyzeOpts::default()).unwrap();
    assert_eq!(n, 3);
    let rects = doc.elements_by_tag("rect");
    assert_eq!(doc.attr(rects[1], "id"), Some("rect-2"));
    assert_eq!(doc.attr(rects[2], "id"), Some("rect-3"));
    assert_eq!(doc.attr(doc.elements_by_tag("circle")[0], "id"), Some("circle-1"));
    assert_eq!(doc.attr(doc.elements_by_tag("stop")[0], "id"), None);
}

#[test]
fn inject_id_reuses_or_assigns() {
    let mut doc = parse(r#"<svg><circle id="sun"/><circle/></svg>"#).unwrap();
    assert_eq!(doc.inject_id("circle", 0).as_deref(), Some("sun"));
    assert_eq!(doc.inject_id("circle", 1).as_deref(), Some("circle-1"));
    assert_eq!(doc.inject_id("circle", 1).as_deref(), Some("circle-1"));
    assert_eq!(doc.inject_id("circle", 2), None);
}

#[test]
fn update_element_strips_shadowing_style_rules() {
    let mut doc =
        parse(r#"<svg><rect id="r" style="fill: blue; stroke-width: 3; opacity: .5"/></svg>"#)
            .unwrap();
    assert!(doc.update_element("r", [("fill", "red"), ("strokeWidth", "2")]));
    let r = doc.element_by_id("r").unwrap();
    assert_eq!(doc.attr(r, "fill"), Some("red"));
    assert_eq!(doc.attr(r, "strokeWidth"), Some("2"));
    assert_eq!(doc.attr(r, "style"), Some("opacity: .5"));

    assert!(doc.update_element("r", [("opacity", "1")]));
    assert_eq!(doc.attr(r, "style"), None);

    assert!(!doc.update_element("missing", [("fill", "red")]));
}

#[test]
fn css_names_are_kebab_case() {
    assert_eq!(css_property_name("strokeWidth"), "stroke-width");
    assert_eq!(css_property_name("fill"), "fill");
}
