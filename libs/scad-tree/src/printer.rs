//! # OpenSCAD Printer
//!
//! Serializes a [`Shape`] tree to OpenSCAD source. Output is a pure function
//! of the tree: equal trees always print byte-identical text.
//!
//! ## Layout
//!
//! ```text
//! $fn=64;
//!
//! difference() {
//! 	rotate_extrude(angle = 360) {
//! 		circle(r = 2);
//! 	}
//! }
//! ```

use config::constants::approx_equal;

use crate::shape::Shape;

/// Prints `shape` preceded by a `$fn=<facets>;` header and a blank line.
pub fn render(shape: &Shape, facets: u32) -> String {
    let mut out = format!("$fn={facets};\n\n");
    out.push_str(&render_body(shape));
    out
}

/// Prints `shape` without a header.
pub fn render_body(shape: &Shape) -> String {
    let mut printer = Printer::default();
    printer.node(shape);
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
    depth: usize,
}

impl Printer {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push('\t');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn block(&mut self, head: &str, children: &[Shape]) {
        if children.iter().all(Shape::is_empty) {
            self.line(&format!("{head};"));
            return;
        }
        self.line(&format!("{head} {{"));
        self.depth += 1;
        for child in children {
            self.node(child);
        }
        self.depth -= 1;
        self.line("}");
    }

    fn node(&mut self, shape: &Shape) {
        let children = shape.children();
        match shape {
            Shape::Empty => {}
            Shape::Circle { radius, segments } => match segments {
                Some(n) => self.line(&format!("circle(r = {}, $fn = {n});", num(*radius))),
                None => self.line(&format!("circle(r = {});", num(*radius))),
            },
            Shape::Square { size, center } => {
                self.line(&format!("square(size = {}, center = {center});", vector(size)))
            }
            Shape::Cylinder {
                height,
                radius1,
                radius2,
                center,
            } => {
                let radii = if approx_equal(*radius1, *radius2) {
                    format!("r = {}", num(*radius1))
                } else {
                    format!("r1 = {}, r2 = {}", num(*radius1), num(*radius2))
                };
                self.line(&format!(
                    "cylinder(h = {}, {radii}, center = {center});",
                    num(*height)
                ))
            }
            Shape::Translate { offset, .. } => {
                self.block(&format!("translate(v = {})", vector(offset)), children)
            }
            Shape::Rotate { angles, .. } => {
                self.block(&format!("rotate(a = {})", vector(angles)), children)
            }
            Shape::Scale { factors, .. } => {
                self.block(&format!("scale(v = {})", vector(factors)), children)
            }
            Shape::Mirror { normal, .. } => {
                self.block(&format!("mirror(v = {})", vector(normal)), children)
            }
            Shape::LinearExtrude {
                height,
                twist,
                slices,
                scale,
                center,
                ..
            } => self.block(
                &format!(
                    "linear_extrude(height = {}, center = {center}, twist = {}, slices = {slices}, scale = {})",
                    num(*height),
                    num(*twist),
                    vector(scale)
                ),
                children,
            ),
            Shape::RotateExtrude { angle, .. } => {
                self.block(&format!("rotate_extrude(angle = {})", num(*angle)), children)
            }
            Shape::Union { .. } => self.block("union()", children),
            Shape::Difference { .. } => self.block("difference()", children),
            Shape::Intersection { .. } => self.block("intersection()", children),
            Shape::Hull { .. } => self.block("hull()", children),
            Shape::Minkowski { .. } => self.block("minkowski()", children),
        }
    }
}

/// Shortest round-trip decimal, with `-0` folded into `0`.
fn num(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

fn vector(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| num(*v)).collect();
    format!("[{}]", parts.join(", "))
}

// =============================================================================
// TESTS
// =============================================================================
