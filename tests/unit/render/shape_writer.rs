use super::*;
use crate::foundation::core::{Bound, Point2D, Rgba8};
use crate::geometry::curve::CurveMode;
use crate::geometry::path::Path;
use crate::geometry::segment::Segment;

fn p(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Path {
    Path::from_points(vec![p(x0, y0), p(x1, y0), p(x1, y1), p(x0, y1)])
}

fn writer() -> ShapeWriter {
    ShapeWriter::new(Rasterizer::default())
}

#[test]
fn quad_region_is_emitted_as_contour() {
    let mut w = writer();
    let color = Rgba8::opaque(1, 2, 3);
    let strategy = w
        .add_region(&Region::solid(rect(0.0, 0.0, 2.0, 2.0), vec![], color))
        .unwrap();
    assert_eq!(strategy, RegionStrategy::Contour);
    let graphic = w.finish();
    assert_eq!(
        graphic.items,
        vec![GraphicItem::Contour {
            points: vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)],
            color,
        }]
    );
}

#[test]
fn hexagon_is_triangulated() {
    let hexagon = Path::from_points(vec![
        p(0.0, 5.0),
        p(5.0, 0.0),
        p(15.0, 0.0),
        p(20.0, 5.0),
        p(15.0, 10.0),
        p(5.0, 10.0),
    ]);
    let mut w = writer();
    w.add_region(&Region::solid(hexagon, vec![], Rgba8::opaque(9, 9, 9)))
        .unwrap();
    let graphic = w.finish();
    assert_eq!(graphic.items.len(), 1);
    assert_eq!(graphic.items[0].kind(), "triangles");
}

#[test]
fn curved_region_is_rasterized() {
    let segments = [
        Segment::Quad {
            anchor1: p(0.0, 0.0),
            control: p(10.0, -10.0),
            anchor2: p(20.0, 0.0),
        },
        Segment::Line {
            begin: p(20.0, 0.0),
            end: p(20.0, 20.0),
        },
        Segment::Line {
            begin: p(20.0, 20.0),
            end: p(0.0, 20.0),
        },
        Segment::Line {
            begin: p(0.0, 20.0),
            end: p(0.0, 0.0),
        },
    ];
    let contour = Path::from_segments(&segments, CurveMode::Full);
    let mut w = writer();
    let strategy = w
        .add_region(&Region::solid(contour, vec![], Rgba8::opaque(200, 0, 0)))
        .unwrap();
    assert_eq!(strategy, RegionStrategy::Rasterize);
    let graphic = w.finish();
    assert!(matches!(graphic.items.as_slice(), [GraphicItem::Bitmap(_)]));
}

fn curved_strip(width: f64) -> Path {
    let segments = [
        Segment::Quad {
            anchor1: p(0.0, 0.0),
            control: p(width / 2.0, -50.0),
            anchor2: p(width, 0.0),
        },
        Segment::Line {
            begin: p(width, 0.0),
            end: p(width, 100.0),
        },
        Segment::Line {
            begin: p(width, 100.0),
            end: p(0.0, 100.0),
        },
        Segment::Line {
            begin: p(0.0, 100.0),
            end: p(0.0, 0.0),
        },
    ];
    Path::from_segments(&segments, CurveMode::Full)
}

#[test]
fn oversized_curved_region_is_dropped_and_the_rest_kept() {
    let shape = FilledShape {
        fill: vec![
            Region::solid(curved_strip(5000.0), vec![], Rgba8::opaque(9, 9, 9)),
            Region::solid(rect(0.0, 0.0, 4.0, 4.0), vec![], Rgba8::opaque(1, 2, 3)),
        ],
        stroke: vec![],
    };
    let mut w = writer();
    w.add_filled_shape(&shape).unwrap();
    let graphic = w.finish();
    assert_eq!(graphic.items.len(), 1);
    assert_eq!(graphic.items[0].kind(), "contour");
}

#[test]
fn oversized_sliced_canvas_is_dropped() {
    let shape = FilledShape {
        fill: vec![Region::solid(
            rect(0.0, 0.0, 5000.0, 10.0),
            vec![],
            Rgba8::opaque(1, 2, 3),
        )],
        stroke: vec![],
    };
    let mut w = writer();
    w.add_sliced(&[shape], SliceGuides::default()).unwrap();
    assert!(w.finish().is_empty());
}

#[test]
fn invisible_and_unhandled_regions_emit_nothing() {
    let mut w = writer();
    let invisible = Region::solid(rect(0.0, 0.0, 1.0, 1.0), vec![], Rgba8::new(5, 5, 5, 0));
    let holed = Region::solid(
        rect(0.0, 0.0, 10.0, 10.0),
        vec![rect(2.0, 2.0, 4.0, 4.0)],
        Rgba8::opaque(5, 5, 5),
    );
    assert_eq!(w.add_region(&invisible).unwrap(), RegionStrategy::Invalid);
    assert_eq!(w.add_region(&holed).unwrap(), RegionStrategy::Unhandled);
    assert!(w.finish().is_empty());
}

#[test]
fn fill_regions_precede_stroke_regions() {
    let fill_color = Rgba8::opaque(1, 1, 1);
    let stroke_color = Rgba8::opaque(2, 2, 2);
    let shape = FilledShape {
        fill: vec![Region::solid(rect(0.0, 0.0, 1.0, 1.0), vec![], fill_color)],
        stroke: vec![Region::solid(rect(0.0, 0.0, 1.0, 1.0), vec![], stroke_color)],
    };
    let mut w = writer();
    w.add_filled_shape(&shape).unwrap();
    let colors: Vec<Rgba8> = w
        .finish()
        .items
        .into_iter()
        .map(|item| match item {
            GraphicItem::Contour { color, .. } => color,
            other => panic!("unexpected item {}", other.kind()),
        })
        .collect();
    assert_eq!(colors, vec![fill_color, stroke_color]);
}

#[test]
fn sliced_shapes_share_one_canvas() {
    let a = FilledShape {
        fill: vec![Region::solid(
            rect(0.0, 0.0, 10.0, 10.0),
            vec![],
            Rgba8::opaque(255, 0, 0),
        )],
        stroke: vec![],
    };
    let b = FilledShape {
        fill: vec![Region::solid(
            rect(10.0, 0.0, 20.0, 10.0),
            vec![],
            Rgba8::opaque(0, 255, 0),
        )],
        stroke: vec![],
    };
    let guides = Bound::new(p(3.0, 3.0), p(17.0, 7.0));
    let mut w = writer();
    w.add_sliced(&[a, b], SliceGuides::from_guides(&guides))
        .unwrap();
    let graphic = w.finish();
    let [GraphicItem::Sliced { bitmap, guides }] = graphic.items.as_slice() else {
        panic!("expected one sliced item");
    };
    assert_eq!(bitmap.image.dimensions(), (20, 10));
    assert_eq!(bitmap.image.get_pixel(5, 5).0, [255, 0, 0, 255]);
    assert_eq!(bitmap.image.get_pixel(15, 5).0, [0, 255, 0, 255]);
    assert_eq!(
        *guides,
        SliceGuides {
            top: 3,
            left: 3,
            bottom: 17,
            right: 7,
        }
    );
}

#[test]
fn sliced_without_geometry_is_skipped() {
    let mut w = writer();
    w.add_sliced(&[], SliceGuides::default()).unwrap();
    assert!(w.finish().is_empty());
}
