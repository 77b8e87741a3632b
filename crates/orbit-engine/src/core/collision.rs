//! Equal-mass elastic collision between two circular particles.

use glam::Vec2;

use super::particle::Particle;

/// Resolve a collision between `a` and `b` if their circles overlap.
///
/// Velocities are rotated into the frame of the contact normal, the normal
/// components are swapped, and the result is rotated back. Both particles
/// are then pushed apart along the line of centres by half the overlap each.
/// Coincident centres are left alone. Returns whether a collision happened.
pub fn resolve(a: &mut Particle, b: &mut Particle) -> bool {
    let delta = a.center() - b.center();
    let distance = delta.length();
    let min_distance = a.radius() + b.radius();

    if !(distance > 0.0 && distance < min_distance) {
        return false;
    }

    let angle = delta.y.atan2(delta.x);
    let (sin, cos) = angle.sin_cos();

    let a_local = to_normal_frame(a.vel, cos, sin);
    let b_local = to_normal_frame(b.vel, cos, sin);

    a.vel = from_normal_frame(Vec2::new(b_local.x, a_local.y), cos, sin);
    b.vel = from_normal_frame(Vec2::new(a_local.x, b_local.y), cos, sin);

    let overlap = min_distance - distance;
    let separation = delta / distance * (overlap * 0.5);
    a.pos += separation;
    b.pos -= separation;

    true
}

/// Mutable references to two distinct elements of a slice.
pub fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert_ne!(i, j, "pair_mut needs two distinct indices");
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

// x = along the normal, y = tangential
fn to_normal_frame(v: Vec2, cos: f32, sin: f32) -> Vec2 {
    Vec2::new(v.x * cos + v.y * sin, v.y * cos - v.x * sin)
}

fn from_normal_frame(v: Vec2, cos: f32, sin: f32) -> Vec2 {
    Vec2::new(v.x * cos - v.y * sin, v.y * cos + v.x * sin)
}
