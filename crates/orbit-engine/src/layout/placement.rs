//! Initial marker placement from layout reads.

use glam::Vec2;

use super::length::parse_inset_shorthand;
use crate::api::env::{ContainerSize, Insets, MarkerGeometry};

/// Side of the marker's bounding square. Unreadable or non-positive
/// dimensions are replaced with `default_size` before taking the larger one.
pub fn marker_size(geometry: &MarkerGeometry, default_size: f32) -> f32 {
    let usable = |v: Option<f32>| v.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(default_size);
    usable(geometry.width).max(usable(geometry.height))
}

/// Where the marker starts, before clamping.
///
/// Tried in order: declared top+left, declared bottom+right, the `inset`
/// shorthand, then the marker's current on-screen offset.
pub fn initial_position(geometry: &MarkerGeometry, size: f32, container: ContainerSize) -> Vec2 {
    if let Some(pos) = from_insets(&geometry.insets, size, container) {
        return pos;
    }

    let shorthand = geometry
        .inset_shorthand
        .as_deref()
        .and_then(parse_inset_shorthand)
        .and_then(|insets| from_shorthand(&insets, size, container));
    if let Some(pos) = shorthand {
        return pos;
    }

    geometry.screen_offset
}

/// Clamp a top-left position so a marker of `size` stays inside the container.
/// When the marker is larger than the container the lower bound wins.
pub fn clamp_to_container(pos: Vec2, size: f32, container: ContainerSize) -> Vec2 {
    Vec2::new(
        clamp_axis(pos.x, container.width - size),
        clamp_axis(pos.y, container.height - size),
    )
}

pub(crate) fn clamp_axis(value: f32, max: f32) -> f32 {
    value.min(max).max(0.0)
}

fn from_insets(insets: &Insets, size: f32, container: ContainerSize) -> Option<Vec2> {
    match *insets {
        Insets { top: Some(top), left: Some(left), .. } => Some(Vec2::new(left, top)),
        Insets { right: Some(right), bottom: Some(bottom), .. } => Some(Vec2::new(
            container.width - right - size,
            container.height - bottom - size,
        )),
        _ => None,
    }
}

// A zero edge in the shorthand usually means "not set", so only non-zero pairs count.
fn from_shorthand(insets: &Insets, size: f32, container: ContainerSize) -> Option<Vec2> {
    let non_zero = |v: Option<f32>| v.filter(|v| *v != 0.0);
    let trimmed = Insets {
        top: non_zero(insets.top),
        right: non_zero(insets.right),
        bottom: non_zero(insets.bottom),
        left: non_zero(insets.left),
    };
    from_insets(&trimmed, size, container)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: ContainerSize = ContainerSize { width: 400.0, height: 300.0 };

    fn geometry(insets: Insets) -> MarkerGeometry {
        MarkerGeometry {
            width: Some(100.0),
            height: Some(100.0),
            insets,
            ..MarkerGeometry::default()
        }
    }

    #[test]
    fn size_takes_larger_side() {
        let g = MarkerGeometry { width: Some(80.0), height: Some(120.0), ..Default::default() };
        assert_eq!(marker_size(&g, 160.0), 120.0);
    }

    #[test]
    fn size_falls_back_to_default() {
        let g = MarkerGeometry::default();
        assert_eq!(marker_size(&g, 160.0), 160.0);

        let zero = MarkerGeometry { width: Some(0.0), height: Some(-5.0), ..Default::default() };
        assert_eq!(marker_size(&zero, 160.0), 160.0);

        let one_side = MarkerGeometry { width: Some(40.0), height: None, ..Default::default() };
        assert_eq!(marker_size(&one_side, 160.0), 160.0);
    }

    #[test]
    fn top_left_insets_win() {
        let g = geometry(Insets {
            top: Some(20.0),
            left: Some(30.0),
            right: Some(5.0),
            bottom: Some(5.0),
        });
        assert_eq!(initial_position(&g, 100.0, BOX), Vec2::new(30.0, 20.0));
    }

    #[test]
    fn bottom_right_insets_measure_from_far_edges() {
        let g = geometry(Insets::bottom_right(10.0, 40.0));
        assert_eq!(initial_position(&g, 100.0, BOX), Vec2::new(260.0, 190.0));
    }

    #[test]
    fn shorthand_used_when_edges_are_auto() {
        let mut g = geometry(Insets::default());
        g.inset_shorthand = Some("15px 0px 0px 25px".to_string());
        assert_eq!(initial_position(&g, 100.0, BOX), Vec2::new(25.0, 15.0));

        g.inset_shorthand = Some("0px 40px 10px 0px".to_string());
        assert_eq!(initial_position(&g, 100.0, BOX), Vec2::new(260.0, 190.0));
    }

    #[test]
    fn all_zero_shorthand_falls_through_to_screen_offset() {
        let mut g = geometry(Insets::default());
        g.inset_shorthand = Some("0px".to_string());
        g.screen_offset = Vec2::new(12.0, 34.0);
        assert_eq!(initial_position(&g, 100.0, BOX), Vec2::new(12.0, 34.0));
    }

    #[test]
    fn clamp_keeps_marker_inside() {
        let pos = clamp_to_container(Vec2::new(-10.0, 250.0), 100.0, BOX);
        assert_eq!(pos, Vec2::new(0.0, 200.0));
    }

    #[test]
    fn clamp_oversized_marker_pins_to_origin() {
        let pos = clamp_to_container(Vec2::new(50.0, 50.0), 500.0, BOX);
        assert_eq!(pos, Vec2::ZERO);
    }
}
