use xxhash_rust::xxh3::Xxh3;

use crate::foundation::core::{Bound, Point2D, Rgba8};
use crate::foundation::math::canonical_bits;
use crate::geometry::path::Path;
use crate::host::model::TextFieldStyle;
use crate::resources::cache::ResourceKey;
use crate::shape::model::{FillStyle, FilledShape, Region};

const XXH3_SEED: u64 = 0x5a17_c0de_9e37_79b9;

/// Content hash of a resource key, consistent with its `PartialEq`.
///
/// Floats are hashed by value (`-0.0` and `0.0` collide) and the path curve flag is ignored,
/// since neither affects equality.
pub(crate) fn fingerprint_key(key: &ResourceKey) -> u64 {
    let mut h = StableHasher::new();
    match key {
        ResourceKey::Shapes(shapes) => {
            h.write_u8(0);
            h.write_len(shapes.len());
            for s in shapes {
                write_shape(&mut h, s);
            }
        }
        ResourceKey::TextField(style) => {
            h.write_u8(1);
            write_text_style(&mut h, style);
        }
        ResourceKey::LibraryItem(name) => {
            h.write_u8(2);
            h.write_str(name);
        }
        ResourceKey::Sliced { shapes, guides } => {
            h.write_u8(3);
            for g in [guides.top, guides.left, guides.bottom, guides.right] {
                h.write_bytes(&g.to_le_bytes());
            }
            h.write_len(shapes.len());
            for s in shapes {
                write_shape(&mut h, s);
            }
        }
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_len(&mut self, v: usize) {
        self.write_u64(v as u64);
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(canonical_bits(v));
    }

    fn write_str(&mut self, s: &str) {
        self.write_len(s.len());
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> u64 {
        self.inner.digest()
    }
}

fn write_point(h: &mut StableHasher, p: &Point2D) {
    h.write_f64(p.x);
    h.write_f64(p.y);
}

fn write_color(h: &mut StableHasher, c: Rgba8) {
    h.write_bytes(&c.to_array());
}

fn write_path(h: &mut StableHasher, path: &Path) {
    h.write_len(path.len());
    for p in path.points() {
        write_point(h, p);
    }
}

fn write_region(h: &mut StableHasher, region: &Region) {
    match region.fill {
        FillStyle::Solid { color } => {
            h.write_u8(0);
            write_color(h, color);
        }
    }
    write_path(h, &region.contour);
    h.write_len(region.holes.len());
    for hole in &region.holes {
        write_path(h, hole);
    }
}

fn write_shape(h: &mut StableHasher, shape: &FilledShape) {
    h.write_len(shape.fill.len());
    for r in &shape.fill {
        write_region(h, r);
    }
    h.write_len(shape.stroke.len());
    for r in &shape.stroke {
        write_region(h, r);
    }
}

fn write_bound(h: &mut StableHasher, b: &Bound) {
    write_point(h, &b.top_left);
    write_point(h, &b.bottom_right);
}

fn write_text_style(h: &mut StableHasher, s: &TextFieldStyle) {
    h.write_str(&s.text);
    h.write_str(&s.font_name);
    h.write_str(&s.font_style);
    h.write_f64(s.font_size);
    write_color(h, s.font_color);
    h.write_bool(s.auto_kern);
    h.write_u8(s.line_mode as u8);
    h.write_u8(s.alignment as u8);
    h.write_str(&s.anti_alias);
    write_bound(h, &s.bound);
    match s.outline {
        Some(c) => {
            h.write_u8(1);
            write_color(h, c);
        }
        None => h.write_u8(0),
    }
}
