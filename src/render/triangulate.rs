//! Constrained fill triangulation of a contour with holes.

use std::collections::HashMap;

use lyon_tessellation::math::{Point as LyonPoint, point};
use lyon_tessellation::path::Path as LyonPath;
use lyon_tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, VertexBuffers,
};

use crate::foundation::core::Point2D;
use crate::foundation::error::{ShapecastError, ShapecastResult};
use crate::foundation::math::canonical_bits;
use crate::shape::model::Region;

/// One triangle in triangle-fan form: `(p0, p1, p2, p2)`.
pub type TriangleFan = [Point2D; 4];

/// Deduplicated vertices plus closed boundary edge rings (contour first, then each hole).
#[derive(Debug, Default)]
struct EdgeMesh {
    vertices: Vec<Point2D>,
    edges: Vec<(u32, u32)>,
    index: HashMap<(u64, u64), u32>,
}

impl EdgeMesh {
    fn from_region(region: &Region) -> Self {
        let mut mesh = Self::default();
        for ring in std::iter::once(&region.contour).chain(region.holes.iter()) {
            let ids: Vec<u32> = ring.points().iter().map(|p| mesh.intern(*p)).collect();
            for (i, &a) in ids.iter().enumerate() {
                let b = ids[(i + 1) % ids.len()];
                if a != b {
                    mesh.edges.push((a, b));
                }
            }
        }
        mesh
    }

    fn intern(&mut self, p: Point2D) -> u32 {
        let key = (canonical_bits(p.x), canonical_bits(p.y));
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = self.vertices.len() as u32;
        self.vertices.push(p);
        self.index.insert(key, id);
        id
    }

    fn lyon_point(&self, id: u32) -> LyonPoint {
        let p = self.vertices[id as usize];
        point(p.x as f32, p.y as f32)
    }

    /// Walk the edge list, starting a new sub-path whenever an edge does not continue the
    /// current one.
    fn to_lyon_path(&self) -> LyonPath {
        let mut builder = LyonPath::builder();
        let mut open: Option<(u32, u32)> = None;
        for &(a, b) in &self.edges {
            match open {
                Some((start, cur)) if cur == a => {
                    if b == start {
                        builder.end(true);
                        open = None;
                    } else {
                        builder.line_to(self.lyon_point(b));
                        open = Some((start, b));
                    }
                }
                _ => {
                    if open.is_some() {
                        builder.end(true);
                    }
                    builder.begin(self.lyon_point(a));
                    builder.line_to(self.lyon_point(b));
                    open = Some((a, b));
                }
            }
        }
        if open.is_some() {
            builder.end(true);
        }
        builder.build()
    }

    /// Map a tessellator output vertex back to the exact input point when it is one.
    fn resolve(&self, lookup: &HashMap<(u32, u32), Point2D>, p: LyonPoint) -> Point2D {
        lookup
            .get(&(p.x.to_bits(), p.y.to_bits()))
            .copied()
            .unwrap_or_else(|| Point2D::new(f64::from(p.x), f64::from(p.y)))
    }
}

/// Triangulate the even-odd interior of `region` (outer contour minus holes).
///
/// Fewer than three distinct vertices yields no triangles.
pub fn triangulate_region(region: &Region) -> ShapecastResult<Vec<TriangleFan>> {
    let mesh = EdgeMesh::from_region(region);
    if mesh.vertices.len() < 3 || mesh.edges.is_empty() {
        return Ok(Vec::new());
    }

    let path = mesh.to_lyon_path();
    let mut buffers: VertexBuffers<LyonPoint, u32> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();
    tessellator
        .tessellate_path(
            &path,
            &FillOptions::default().with_fill_rule(FillRule::EvenOdd),
            &mut BuffersBuilder::new(&mut buffers, |v: FillVertex| v.position()),
        )
        .map_err(|e| ShapecastError::geometry(format!("triangulation failed: {e:?}")))?;

    let lookup: HashMap<(u32, u32), Point2D> = mesh
        .vertices
        .iter()
        .map(|p| (((p.x as f32).to_bits(), (p.y as f32).to_bits()), *p))
        .collect();

    let triangles: Vec<TriangleFan> = buffers
        .indices
        .chunks_exact(3)
        .map(|tri| {
            let p0 = mesh.resolve(&lookup, buffers.vertices[tri[0] as usize]);
            let p1 = mesh.resolve(&lookup, buffers.vertices[tri[1] as usize]);
            let p2 = mesh.resolve(&lookup, buffers.vertices[tri[2] as usize]);
            [p0, p1, p2, p2]
        })
        .collect();

    tracing::trace!(
        vertices = mesh.vertices.len(),
        edges = mesh.edges.len(),
        triangles = triangles.len(),
        "triangulated region"
    );
    Ok(triangles)
}

#[cfg(test)]
#[path = "../../tests/unit/render/triangulate.rs"]
mod tests;
