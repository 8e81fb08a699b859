use super::*;
use crate::foundation::core::Point2D;
use serde_json::json;

fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> HostEdge {
    Segment::Line {
        begin: Point2D::new(x0, y0),
        end: Point2D::new(x1, y1),
    }
    .into()
}

fn triangle_path() -> HostPath {
    HostPath {
        edges: vec![
            line(0.0, 0.0, 4.0, 0.0),
            line(4.0, 0.0, 0.0, 3.0),
            line(0.0, 3.0, 0.0, 0.0),
        ],
    }
}

#[test]
fn edges_are_stitched_into_a_closed_loop() {
    let path = triangle_path().to_path(CurveMode::Full).unwrap();
    assert_eq!(
        path.points(),
        &[
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(0.0, 3.0),
        ]
    );
}

#[test]
fn edge_without_segment_is_fatal() {
    let mut path = triangle_path();
    path.edges.push(HostEdge { segment: None });
    let err = path.to_path(CurveMode::Full).unwrap_err();
    assert!(matches!(err, ShapecastError::Geometry(_)));
    assert!(err.is_shape_fatal());
}

#[test]
fn non_solid_fill_is_fatal() {
    let region = HostRegion {
        contour: triangle_path(),
        holes: vec![],
        fill: HostFillStyle::LinearGradient,
    };
    let err = region.to_region(CurveMode::Full).unwrap_err();
    assert!(matches!(err, ShapecastError::UnsupportedFill(_)));

    let shape = HostShape {
        fill: vec![],
        stroke: vec![region],
    };
    assert!(shape.to_filled_shape(CurveMode::Full).is_err());
}

#[test]
fn solid_region_converts() {
    let region = HostRegion {
        contour: triangle_path(),
        holes: vec![],
        fill: HostFillStyle::Solid {
            color: Rgba8::opaque(1, 2, 3),
        },
    };
    let r = region.to_region(CurveMode::Optimized).unwrap();
    assert_eq!(r.contour.len(), 3);
    assert_eq!(r.fill.solid_color(), Rgba8::opaque(1, 2, 3));
}

#[test]
fn elements_deserialize_from_tagged_json() {
    let elements: Vec<HostElement> = serde_json::from_value(json!([
        {"type": "symbol", "library_item": "hero", "movie_clip": {"name": "h", "blend_mode": "multiply"}},
        {"type": "shape", "fill": [{
            "contour": {"edges": [
                {"segment": {"type": "line", "begin": {"x": 0.0, "y": 0.0}, "end": {"x": 1.0, "y": 0.0}}},
                {"segment": null}
            ]},
            "fill": {"type": "solid", "color": "#ff000080"}
        }]},
        {"type": "group", "members": [{"type": "bitmap_instance"}]},
        {"type": "video"}
    ]))
    .unwrap();

    assert_eq!(
        elements.iter().map(HostElement::kind).collect::<Vec<_>>(),
        ["symbol", "shape", "group", "unsupported"]
    );
    let HostElement::Symbol(sym) = &elements[0] else {
        panic!("expected symbol");
    };
    assert_eq!(
        sym.movie_clip.as_ref().map(|m| m.blend_mode),
        Some(BlendMode::Multiply)
    );
    assert_eq!(sym.matrix, Matrix2D::IDENTITY);

    let HostElement::Shape(shape) = &elements[1] else {
        panic!("expected shape");
    };
    assert_eq!(shape.shape.fill[0].contour.edges[1].segment, None);

    let HostElement::Group(group) = &elements[2] else {
        panic!("expected group");
    };
    assert_eq!(group.members, vec![HostElement::Unsupported]);
}

fn run(font: &str) -> HostTextRun {
    HostTextRun {
        font_name: font.to_owned(),
        font_style: "bold".to_owned(),
        font_size: 18.0,
        font_color: Rgba8::opaque(255, 255, 255),
        auto_kern: true,
    }
}

fn text_field(paragraphs: Vec<HostParagraph>, filters: Vec<HostFilter>) -> HostTextField {
    HostTextField {
        matrix: Matrix2D::IDENTITY,
        bound: Bound::new(Point2D::new(0.0, 0.0), Point2D::new(100.0, 20.0)),
        text: "Score".to_owned(),
        instance_name: "score".to_owned(),
        line_mode: LineMode::Single,
        anti_alias: String::new(),
        paragraphs,
        filters,
    }
}

#[test]
fn text_style_uses_first_paragraph_and_run() {
    let tf = text_field(
        vec![
            HostParagraph {
                alignment: ParagraphAlignment::Center,
                runs: vec![run("Arial"), run("Verdana")],
            },
            HostParagraph::default(),
        ],
        vec![],
    );
    let style = tf.style();
    assert_eq!(style.font_name, "Arial");
    assert_eq!(style.alignment, ParagraphAlignment::Center);
    assert_eq!(style.font_size, 18.0);
    assert!(style.auto_kern);
    assert_eq!(style.outline, None);
}

#[test]
fn glow_filter_marks_text_as_outlined() {
    let tf = text_field(
        vec![HostParagraph {
            alignment: ParagraphAlignment::Left,
            runs: vec![run("Arial")],
        }],
        vec![
            HostFilter::Other,
            HostFilter::Glow {
                color: Rgba8::opaque(0, 0, 0),
            },
        ],
    );
    assert_eq!(tf.style().outline, Some(Rgba8::opaque(0, 0, 0)));
}

#[test]
fn text_without_paragraphs_falls_back_to_defaults() {
    let style = text_field(vec![], vec![]).style();
    assert_eq!(style.text, "Score");
    assert_eq!(style.font_size, 12.0);
}
