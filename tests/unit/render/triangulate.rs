use super::*;
use crate::foundation::core::Rgba8;
use crate::geometry::path::{Path, polygon_area};

fn path(points: &[(f64, f64)]) -> Path {
    Path::from_points(points.iter().map(|&(x, y)| Point2D::new(x, y)).collect())
}

fn total_area(triangles: &[TriangleFan]) -> f64 {
    triangles
        .iter()
        .map(|t| polygon_area(&t[..3]).abs())
        .sum()
}

const COLOR: Rgba8 = Rgba8::opaque(10, 20, 30);

#[test]
fn quad_splits_into_two_triangles_covering_its_area() {
    let quad = path(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
    let region = Region::solid(quad, vec![], COLOR);
    let tris = triangulate_region(&region).unwrap();
    assert_eq!(tris.len(), 2);
    assert!((total_area(&tris) - 12.0).abs() < 1e-6);
}

#[test]
fn fans_repeat_their_last_point() {
    let quad = path(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let tris = triangulate_region(&Region::solid(quad, vec![], COLOR)).unwrap();
    for t in &tris {
        assert_eq!(t[2], t[3]);
    }
}

#[test]
fn output_vertices_are_exact_input_points() {
    let quad = path(&[(0.1, 0.2), (5.3, 0.2), (5.3, 7.7), (0.1, 7.7)]);
    let inputs = quad.points().to_vec();
    let tris = triangulate_region(&Region::solid(quad, vec![], COLOR)).unwrap();
    for t in &tris {
        for p in t {
            assert!(inputs.contains(p), "unexpected vertex {p:?}");
        }
    }
}

#[test]
fn hexagon_with_hole_excludes_hole_area() {
    let hexagon = path(&[
        (0.0, 5.0),
        (5.0, 0.0),
        (15.0, 0.0),
        (20.0, 5.0),
        (15.0, 10.0),
        (5.0, 10.0),
    ]);
    let hole = path(&[(8.0, 3.0), (12.0, 3.0), (12.0, 7.0), (8.0, 7.0)]);
    let expected = hexagon.area().abs() - hole.area().abs();
    let region = Region::solid(hexagon, vec![hole], COLOR);
    let tris = triangulate_region(&region).unwrap();
    assert!(!tris.is_empty());
    assert!((total_area(&tris) - expected).abs() < 1e-3);
}

#[test]
fn repeated_closing_point_is_deduplicated() {
    let quad = path(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]);
    let tris = triangulate_region(&Region::solid(quad, vec![], COLOR)).unwrap();
    assert_eq!(tris.len(), 2);
    assert!((total_area(&tris) - 4.0).abs() < 1e-6);
}

#[test]
fn collapsed_geometry_yields_no_triangles() {
    let dot = path(&[(1.0, 1.0), (1.0, 1.0), (2.0, 2.0), (1.0, 1.0), (2.0, 2.0)]);
    let tris = triangulate_region(&Region::solid(dot, vec![], COLOR)).unwrap();
    assert!(tris.is_empty());
}
