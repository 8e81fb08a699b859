use super::*;
use crate::foundation::core::{Point2D, Rgba8};
use crate::geometry::path::Path;
use crate::shape::model::Region;

fn unit_triangle() -> FilledShape {
    FilledShape {
        fill: vec![Region::solid(
            Path::from_points(vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(1.0, 0.0),
                Point2D::new(0.0, 1.0),
            ]),
            vec![],
            Rgba8::opaque(1, 2, 3),
        )],
        stroke: vec![],
    }
}

#[test]
fn run_drops_element_transforms_by_default() {
    let mut run = FilledRun::default();
    run.push(unit_triangle(), Matrix2D::translate(10.0, 0.0));
    run.push(unit_triangle(), Matrix2D::IDENTITY);
    let shapes = run.take(false);
    assert!(run.is_empty());
    assert_eq!(shapes, vec![unit_triangle(), unit_triangle()]);
}

#[test]
fn run_can_compose_element_transforms() {
    let mut run = FilledRun::default();
    run.push(unit_triangle(), Matrix2D::translate(10.0, 0.0));
    let shapes = run.take(true);
    assert_eq!(
        shapes[0].fill[0].contour.points()[1],
        Point2D::new(11.0, 0.0)
    );
}
