//! End-to-end gesture drawing scenarios.

use gestru::{Options, PathBuilder, json};
use glam::dvec2;

/// A sample gesture: a "P" drawn as a tall stroke, a short top stroke, and
/// a half-circle bowl.
fn p_gesture(options: Options) -> PathBuilder {
    PathBuilder::with_options(options)
        .draw_line(4.0, 90.0)
        .draw_line(1.0, 0.0)
        .draw_arc_relative(1.0, 90.0, -180.0)
        .forward(1.0)
}

#[test]
fn vertical_line_under_default_options() {
    let path = PathBuilder::new().draw_line(4.0, 90.0).drawing_path();
    // Construction start, pair-appended start, endpoint. Default options
    // are y-up, so the internal +y endpoint projects to -4.
    assert_eq!(
        path,
        vec![dvec2(0.0, 0.0), dvec2(0.0, 0.0), dvec2(0.0, -4.0)]
    );
}

#[test]
fn vertical_line_under_windows_options() {
    let path = PathBuilder::with_options(Options::WINDOWS)
        .draw_line(4.0, 90.0)
        .drawing_path();
    assert_eq!(path.last().copied(), Some(dvec2(0.0, 4.0)));
}

#[test]
fn line_arc_line_gesture_structure() {
    let drawer = PathBuilder::new()
        .draw_line(1.0, 0.0)
        .draw_arc_relative(1.0, 90.0, -180.0)
        .forward(1.0);
    let path = drawer.drawing_path();

    // 1 start + 2 line points + 181 arc samples + 2 forward points.
    assert_eq!(path.len(), 186);

    // The arc samples sit between the line segment and the final forward
    // segment, starting where the line ended.
    let arc = &path[3..184];
    assert_eq!(arc.len(), 181);
    assert_eq!(arc[0], path[2]);

    // The final point lands at distance 1 from the arc exit point.
    let exit = path[183];
    let last = path[185];
    assert!((exit.distance(last) - 1.0).abs() < 1e-3);
}

#[test]
fn full_p_gesture_endpoint_and_heading() {
    let drawer = p_gesture(Options::DEFAULT);
    assert_eq!(drawer.len(), 188);
    // Internal endpoint (0, 2): the bowl closes two units below the top
    // stroke and the final stroke heads back left. The y-up projection
    // emits (0, -2).
    assert_eq!(drawer.location().x(), 0.0);
    assert_eq!(drawer.location().y(), 2.0);
    assert_eq!(drawer.heading().degrees(), 180.0);

    let last = drawer.drawing_path()[187];
    assert_eq!(last, dvec2(0.0, -2.0));
}

#[test]
fn arc_samples_stay_on_the_circle() {
    let drawer = PathBuilder::new().draw_line(1.0, 0.0).draw_arc_relative(1.0, 90.0, -180.0);
    let path = drawer.drawing_path();
    // Center of the bowl in output coordinates (default projection flips y).
    let center = dvec2(1.0, 1.0);
    for (i, sample) in path[3..].iter().enumerate() {
        assert!(
            (sample.distance(center) - 1.0).abs() < 1e-3,
            "sample {i} at {sample:?} is off the circle"
        );
    }
}

#[test]
fn polyline_matches_drawing_path() {
    let drawer = p_gesture(Options::WINDOWS);
    let polyline = drawer.polyline();
    assert_eq!(polyline.points(), drawer.drawing_path().as_slice());
    assert_eq!(polyline.start(), Some(dvec2(0.0, 0.0)));
    assert_eq!(polyline.segments().count(), 187);
}

#[test]
fn empty_polyline_from_no_points() {
    let polyline = gestru::Polyline::new(Vec::new());
    assert!(polyline.is_empty());
    assert_eq!(polyline.start(), None);
}

#[test]
fn json_round_trip_preserves_every_coordinate() {
    let path = p_gesture(Options::DEFAULT).drawing_path();
    let text = json::to_json(&path);
    let parsed = json::from_json(&text).expect("own output must parse");
    assert_eq!(parsed, path);
}

#[test]
fn json_output_snapshot_default() {
    // The y-up projection negates every internal y, exact zeros included,
    // so the origin serializes as "0,-0".
    let path = PathBuilder::new().draw_line(4.0, 90.0).drawing_path();
    insta::assert_snapshot!(json::to_json(&path), @r#"["0,-0","0,-0","0,-4"]"#);
}

#[test]
fn json_output_snapshot_windows_square_corner() {
    let path = PathBuilder::with_options(Options::WINDOWS)
        .forward(2.0)
        .rotate(90.0)
        .forward(2.0)
        .drawing_path();
    insta::assert_snapshot!(
        json::to_json(&path),
        @r#"["0,0","0,0","2,0","2,0","2,2"]"#
    );
}

#[test]
fn json_output_keeps_projected_negative_zero() {
    // y-up projection negates an exact internal zero; the serialized form
    // carries the sign.
    let path = PathBuilder::new().forward(1.0).drawing_path();
    insta::assert_snapshot!(json::to_json(&path), @r#"["0,-0","0,-0","1,-0"]"#);
}
