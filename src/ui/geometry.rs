/// Slot clip geometry
///
/// The build planner draws its slots with CSS clip-path polygons; this
/// module reproduces them as point sequences in widget coordinates. All
/// offsets are proportional to the slot's current width/height, so shapes
/// scale losslessly. The same polygon is produced twice per paint: once at
/// inset 0 for the 1px border, once at a small positive inset for the fill
/// drawn strictly inside the border.
///
/// Weapon fills are radial gradients, which the canvas backend cannot paint
/// directly (its gradients are linear). They are rasterized as concentric
/// circle slices clipped to the slot polygon, interpolating the rarity
/// stops from the focus outward.

use iced::{Color, Point, Size};

use crate::state::equipment::{SupportKind, WeaponPosition};

/// Radial gradient radius as a factor of slot width.
pub const RADIAL_RADIUS_FACTOR: f32 = 1.15;

/// Radial mid stop position (end stop sits at 0.0, start stop at 1.0).
pub const RADIAL_MID_STOP: f32 = 0.4;

/// Linear mid stop position for support/auxiliary fills
/// (start stop at 0.0, end stop at 1.0).
pub const LINEAR_MID_STOP: f32 = 0.6;

/// Support slot aspect constant: cut height = cut width * 159 / 82.
pub const SUPPORT_ASPECT: f32 = 159.0 / 82.0;

/// Clip polygon for one of the four weapon slots.
///
/// Each position is a mirrored variant of the same notched hexagon; the
/// explicit corner sequences below match the source CSS variable math:
/// cut_offset = 0.32w, cut_small = 0.18w, center_offset = 0.12h,
/// side_width = 0.24w, cut_large = 0.5w - cut_offset.
pub fn weapon_clip(position: WeaponPosition, size: Size, inset: f32) -> Vec<Point> {
    let w = size.width;
    let h = size.height;
    let o = inset;

    let cut_offset = w * 0.32;
    let cut_small = w * 0.18;
    let center_offset = h * 0.12;
    let side_width = w * 0.24;
    let cut_large = (w * 0.5) - cut_offset;
    let cut_large_neg = w - cut_large;
    let cut_small_neg = w - cut_small;

    match position {
        // Left side, middle
        WeaponPosition::One => vec![
            Point::new(cut_large + o, o),
            Point::new(cut_large + side_width + o, o),
            Point::new(w - o, (h * 0.5) - center_offset + o),
            Point::new(w - o, (h * 0.5) + center_offset - o),
            Point::new(cut_large + side_width + o, h - o),
            Point::new(cut_large + o, h - o),
            Point::new(o, cut_small_neg - o),
            Point::new(o, cut_small + o),
        ],
        // Top center
        WeaponPosition::Two => vec![
            Point::new(cut_small + o, o),
            Point::new(cut_small_neg - o, o),
            Point::new(w - o, cut_large + o),
            Point::new(w - o, cut_large + side_width + o),
            Point::new((w * 0.5) + center_offset - o, h - o),
            Point::new((w * 0.5) - center_offset + o, h - o),
            Point::new(o, cut_large + side_width + o),
            Point::new(o, cut_large + o),
        ],
        // Right side, middle
        WeaponPosition::Three => vec![
            Point::new(cut_large_neg - side_width - o, o),
            Point::new(cut_large_neg - o, o),
            Point::new(w - o, cut_small + o),
            Point::new(w - o, cut_small_neg - o),
            Point::new(cut_large_neg - o, h - o),
            Point::new(cut_large_neg - side_width - o, h - o),
            Point::new(o, (h * 0.5) + center_offset - o),
            Point::new(o, (h * 0.5) - center_offset + o),
        ],
        // Bottom center
        WeaponPosition::Four => vec![
            Point::new((w * 0.5) - center_offset + o, o),
            Point::new((w * 0.5) + center_offset - o, o),
            Point::new(w - o, cut_large_neg - side_width - o),
            Point::new(w - o, cut_large_neg - o),
            Point::new(cut_small_neg - o, h - o),
            Point::new(cut_small + o, h - o),
            Point::new(o, cut_large_neg - o),
            Point::new(o, cut_large_neg - side_width - o),
        ],
    }
}

/// Clip polygon for a support slot. Repkit and ordnance are left-right
/// mirrors of the same 7-point shape.
pub fn support_clip(kind: SupportKind, size: Size, inset: f32) -> Vec<Point> {
    let w = size.width;
    let h = size.height;
    let o = inset;

    let cut_width = w * 0.10;
    let cut_width_neg = w - cut_width;
    let cut_height = cut_width * SUPPORT_ASPECT;
    let cut_height_neg = h - cut_height;

    match kind {
        SupportKind::Repkit => vec![
            Point::new(o, o),
            Point::new(cut_width_neg - o, o),
            Point::new(w - o, cut_height + o),
            Point::new(w - o, cut_height_neg - o),
            Point::new(cut_width_neg - o, h - o),
            Point::new(cut_width + o, h - o),
            Point::new(o, cut_height_neg - o),
        ],
        SupportKind::Ordnance => vec![
            Point::new(cut_width + o, o),
            Point::new(w - o, o),
            Point::new(w - o, cut_height_neg - o),
            Point::new(cut_width_neg - o, h - o),
            Point::new(cut_width + o, h - o),
            Point::new(o, cut_height_neg - o),
            Point::new(o, cut_height + o),
        ],
    }
}

/// Auxiliary border rectangle: the widget rect shrunk by 1px on the right
/// and bottom so the 1px stroke stays inside.
pub fn aux_border_rect(size: Size) -> (Point, Size) {
    (
        Point::ORIGIN,
        Size::new((size.width - 1.0).max(0.0), (size.height - 1.0).max(0.0)),
    )
}

/// Auxiliary background rectangle: a fixed 2px margin inside the border.
pub fn aux_background_rect(size: Size) -> (Point, Size) {
    (
        Point::new(2.0, 2.0),
        Size::new((size.width - 4.0).max(0.0), (size.height - 4.0).max(0.0)),
    )
}

/// Radial gradient focus for a weapon slot: the midpoint of whichever edge
/// faces outward in the cross layout.
pub fn weapon_gradient_center(position: WeaponPosition, size: Size) -> Point {
    let w = size.width;
    let h = size.height;
    match position {
        WeaponPosition::One => Point::new(w, h * 0.495),
        WeaponPosition::Two => Point::new(w * 0.495, h),
        WeaponPosition::Three => Point::new(0.0, h * 0.495),
        WeaponPosition::Four => Point::new(w * 0.495, 0.0),
    }
}

/// Color of the weapon radial gradient at normalized distance `t` from the
/// focus. The brightest stop (gradient end) sits at the center and fades
/// outward: end@0.0, mid@0.4, start@1.0.
pub fn radial_color_at(t: f32, gradient: &[Color; 3]) -> Color {
    let [start, mid, end] = *gradient;
    let t = t.clamp(0.0, 1.0);
    if t <= RADIAL_MID_STOP {
        lerp_color(end, mid, t / RADIAL_MID_STOP)
    } else {
        lerp_color(mid, start, (t - RADIAL_MID_STOP) / (1.0 - RADIAL_MID_STOP))
    }
}

fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}

/// Regular polygon approximation of a circle.
pub fn circle_polygon(center: Point, radius: f32, segments: usize) -> Vec<Point> {
    (0..segments)
        .map(|i| {
            let angle = (i as f32) * std::f32::consts::TAU / (segments as f32);
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Signed area of a polygon (shoelace). Positive for counter-clockwise
/// winding in y-up coordinates; the sign is only used to orient clipping.
pub fn signed_area(polygon: &[Point]) -> f32 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..polygon.len() {
        let p = polygon[i];
        let q = polygon[(i + 1) % polygon.len()];
        sum += p.x * q.y - q.x * p.y;
    }
    sum / 2.0
}

/// Sutherland-Hodgman: clip `subject` against the convex polygon `clip`.
/// Works for either winding of the clip polygon. Returns an empty vec when
/// the polygons do not overlap.
pub fn clip_convex(subject: &[Point], clip: &[Point]) -> Vec<Point> {
    if subject.len() < 3 || clip.len() < 3 {
        return Vec::new();
    }

    let orientation = if signed_area(clip) >= 0.0 { 1.0 } else { -1.0 };
    let mut output: Vec<Point> = subject.to_vec();

    for i in 0..clip.len() {
        if output.is_empty() {
            break;
        }
        let a = clip[i];
        let b = clip[(i + 1) % clip.len()];
        let input = std::mem::take(&mut output);

        for j in 0..input.len() {
            let current = input[j];
            let previous = input[(j + input.len() - 1) % input.len()];
            let current_inside = edge_side(a, b, current) * orientation >= 0.0;
            let previous_inside = edge_side(a, b, previous) * orientation >= 0.0;

            if current_inside {
                if !previous_inside {
                    if let Some(p) = line_intersection(previous, current, a, b) {
                        output.push(p);
                    }
                }
                output.push(current);
            } else if previous_inside {
                if let Some(p) = line_intersection(previous, current, a, b) {
                    output.push(p);
                }
            }
        }
    }

    output
}

/// Which side of edge a->b the point lies on (cross product sign).
fn edge_side(a: Point, b: Point, point: Point) -> f32 {
    (b.x - a.x) * (point.y - a.y) - (b.y - a.y) * (point.x - a.x)
}

/// Intersection of segment p1->p2 with the infinite line through a->b.
fn line_intersection(p1: Point, p2: Point, a: Point, b: Point) -> Option<Point> {
    let denom = (p2.x - p1.x) * (b.y - a.y) - (p2.y - p1.y) * (b.x - a.x);
    if denom.abs() < f32::EPSILON {
        return None;
    }
    let t = ((a.x - p1.x) * (b.y - a.y) - (a.y - p1.y) * (b.x - a.x)) / denom;
    Some(Point::new(
        p1.x + t * (p2.x - p1.x),
        p1.y + t * (p2.y - p1.y),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_same_point_set(actual: &[Point], expected: &[Point]) {
        assert_eq!(actual.len(), expected.len());
        for p in expected {
            assert!(
                actual
                    .iter()
                    .any(|q| (p.x - q.x).abs() < 1e-3 && (p.y - q.y).abs() < 1e-3),
                "point {:?} not found in {:?}",
                p,
                actual
            );
        }
    }

    #[test]
    fn test_weapon_polygons_have_eight_points() {
        let size = Size::new(212.0, 246.0);
        for position in WeaponPosition::ALL {
            assert_eq!(weapon_clip(position, size, 0.0).len(), 8);
            assert_eq!(weapon_clip(position, size, 1.0).len(), 8);
        }
    }

    #[test]
    fn test_weapon_positions_one_and_three_mirror_vertically() {
        for (size, inset) in [
            (Size::new(212.0, 246.0), 0.0),
            (Size::new(212.0, 246.0), 1.0),
            (Size::new(300.0, 150.0), 3.0),
        ] {
            let one = weapon_clip(WeaponPosition::One, size, inset);
            let three = weapon_clip(WeaponPosition::Three, size, inset);
            let mirrored: Vec<Point> = one
                .iter()
                .map(|p| Point::new(size.width - p.x, p.y))
                .collect();
            assert_same_point_set(&three, &mirrored);
        }
    }

    #[test]
    fn test_weapon_positions_two_and_four_mirror_horizontally() {
        for (size, inset) in [
            (Size::new(224.0, 233.0), 0.0),
            (Size::new(224.0, 233.0), 1.0),
            (Size::new(180.0, 300.0), 2.0),
        ] {
            let two = weapon_clip(WeaponPosition::Two, size, inset);
            let four = weapon_clip(WeaponPosition::Four, size, inset);
            let mirrored: Vec<Point> = two
                .iter()
                .map(|p| Point::new(p.x, size.height - p.y))
                .collect();
            assert_same_point_set(&four, &mirrored);
        }
    }

    #[test]
    fn test_support_kinds_mirror() {
        let size = Size::new(159.0, 82.0);
        let repkit = support_clip(SupportKind::Repkit, size, 0.0);
        let ordnance = support_clip(SupportKind::Ordnance, size, 0.0);
        assert_eq!(repkit.len(), 7);
        assert_eq!(ordnance.len(), 7);

        let mirrored: Vec<Point> = repkit
            .iter()
            .map(|p| Point::new(size.width - p.x, p.y))
            .collect();
        assert_same_point_set(&ordnance, &mirrored);
    }

    #[test]
    fn test_gradient_centers_sit_on_the_outward_edge() {
        let size = Size::new(200.0, 140.0);
        assert_eq!(
            weapon_gradient_center(WeaponPosition::One, size),
            Point::new(200.0, 140.0 * 0.495)
        );
        assert_eq!(
            weapon_gradient_center(WeaponPosition::Three, size),
            Point::new(0.0, 140.0 * 0.495)
        );
        assert_eq!(
            weapon_gradient_center(WeaponPosition::Two, size),
            Point::new(200.0 * 0.495, 140.0)
        );
        assert_eq!(
            weapon_gradient_center(WeaponPosition::Four, size),
            Point::new(200.0 * 0.495, 0.0)
        );
    }

    #[test]
    fn test_radial_stop_order() {
        let gradient = [
            Color::from_rgba8(10, 10, 10, 0.0),
            Color::from_rgba8(10, 10, 10, 0.2),
            Color::from_rgba8(10, 10, 10, 0.5),
        ];
        // Brightest (end) at the focus, transparent (start) at the rim
        assert!((radial_color_at(0.0, &gradient).a - 0.5).abs() < 1e-6);
        assert!((radial_color_at(RADIAL_MID_STOP, &gradient).a - 0.2).abs() < 1e-6);
        assert!((radial_color_at(1.0, &gradient).a - 0.0).abs() < 1e-6);
        // Alpha decreases monotonically outward
        let mut last = f32::MAX;
        for i in 0..=10 {
            let a = radial_color_at(i as f32 / 10.0, &gradient).a;
            assert!(a <= last + 1e-6);
            last = a;
        }
    }

    #[test]
    fn test_clip_convex_square_overlap() {
        let subject = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let clip = vec![
            Point::new(5.0, 5.0),
            Point::new(15.0, 5.0),
            Point::new(15.0, 15.0),
            Point::new(5.0, 15.0),
        ];
        let result = clip_convex(&subject, &clip);
        assert!((signed_area(&result).abs() - 25.0).abs() < 1e-3);
    }

    #[test]
    fn test_clip_convex_identity_and_disjoint() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let same = clip_convex(&square, &square);
        assert!((signed_area(&same).abs() - 100.0).abs() < 1e-3);

        let far = vec![
            Point::new(100.0, 100.0),
            Point::new(110.0, 100.0),
            Point::new(110.0, 110.0),
            Point::new(100.0, 110.0),
        ];
        assert!(clip_convex(&square, &far).is_empty());
    }

    #[test]
    fn test_clip_circle_against_weapon_polygon_stays_inside() {
        let size = Size::new(212.0, 246.0);
        let polygon = weapon_clip(WeaponPosition::One, size, 1.0);
        let center = weapon_gradient_center(WeaponPosition::One, size);
        let circle = circle_polygon(center, size.width * 0.4, 32);

        let clipped = clip_convex(&circle, &polygon);
        assert!(!clipped.is_empty());
        for p in &clipped {
            assert!(p.x >= 0.0 && p.x <= size.width + 1e-3);
            assert!(p.y >= 0.0 && p.y <= size.height + 1e-3);
        }
    }

    #[test]
    fn test_circle_polygon_radius() {
        let circle = circle_polygon(Point::new(5.0, 5.0), 3.0, 16);
        assert_eq!(circle.len(), 16);
        for p in circle {
            let d = ((p.x - 5.0).powi(2) + (p.y - 5.0).powi(2)).sqrt();
            assert!((d - 3.0).abs() < 1e-4);
        }
    }
}
