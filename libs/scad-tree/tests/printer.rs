use scad_tree::{difference, hull, intersection, minkowski, render, union, LinearExtrusion, Shape};

fn sample() -> Shape {
    let outline = hull([
        Shape::circle(2.0).translate_2d([71.5, 0.0]),
        Shape::centered_square(2.0),
    ]);
    let body = intersection([outline, Shape::centered_square(20.0)]).rotate_extrude();
    let hole = Shape::cylinder(34.5, 100.0).translate([52.25, 0.0, 0.0]);
    difference(body, [union([hole.clone().rotate_z(0.0), hole.rotate_z(40.0)])])
}

#[test]
fn render_is_deterministic() {
    assert_eq!(render(&sample(), 64), render(&sample(), 64));
}

#[test]
fn render_mirrors_tree_shape() {
    let text = render(&sample(), 64);
    let expected = "\
$fn=64;

difference() {
\trotate_extrude(angle = 360) {
\t\tintersection() {
\t\t\thull() {
\t\t\t\ttranslate(v = [71.5, 0, 0]) {
\t\t\t\t\tcircle(r = 2);
\t\t\t\t}
\t\t\t\tsquare(size = [2, 2], center = true);
\t\t\t}
\t\t\tsquare(size = [20, 20], center = true);
\t\t}
\t}
\tunion() {
\t\trotate(a = [0, 0, 0]) {
\t\t\ttranslate(v = [52.25, 0, 0]) {
\t\t\t\tcylinder(h = 100, r = 17.25, center = false);
\t\t\t}
\t\t}
\t\trotate(a = [0, 0, 40]) {
\t\t\ttranslate(v = [52.25, 0, 0]) {
\t\t\t\tcylinder(h = 100, r = 17.25, center = false);
\t\t\t}
\t\t}
\t}
}
";
    assert_eq!(text, expected);
}

#[test]
fn linear_extrude_prints_all_parameters() {
    let ring = minkowski([Shape::square(4.0), Shape::circle_with_segments(1.0, 6)]).linear_extrude(
        LinearExtrusion {
            height: 10.0,
            twist: 45.0,
            slices: 20,
            scale: [0.5, 0.5],
            center: false,
        },
    );
    let text = render(&ring, 32);
    assert!(text.contains(
        "linear_extrude(height = 10, center = false, twist = 45, slices = 20, scale = [0.5, 0.5]) {"
    ));
    assert!(text.contains("\t\tcircle(r = 1, $fn = 6);"));
}

#[test]
fn mirror_and_scale_print_vectors() {
    let shape = Shape::square(1.0).mirror([1.0, 0.0, 0.0]).scale([2.0, 2.0, 1.0]);
    let text = render(&shape, 8);
    assert!(text.contains("scale(v = [2, 2, 1]) {"));
    assert!(text.contains("\tmirror(v = [1, 0, 0]) {"));
}

#[test]
fn tree_survives_json() {
    let shape = sample();
    let json = serde_json::to_string(&shape).unwrap();
    let back: Shape = serde_json::from_str(&json).unwrap();
    assert_eq!(back, shape);
}
