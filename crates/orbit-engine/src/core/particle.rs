use glam::Vec2;

use crate::api::env::ContainerSize;
use crate::api::types::MarkerId;
use crate::layout::placement::{clamp_axis, clamp_to_container};

/// One moving marker, approximated as a circle inscribed in its bounding square.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Marker this particle drives.
    pub marker: MarkerId,
    /// Top-left offset within the container.
    pub pos: Vec2,
    /// Displacement per frame.
    pub vel: Vec2,
    size: f32,
    radius: f32,
}

impl Particle {
    pub fn new(marker: MarkerId, pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            marker,
            pos,
            vel,
            size,
            radius: size / 2.0,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }

    /// Advance by one frame of velocity.
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Reflect off the container edges. Each axis flips at most once per call.
    /// Returns the number of axes that bounced.
    pub fn bounce(&mut self, container: ContainerSize) -> u32 {
        let mut hits = 0;

        if self.pos.x <= 0.0 || self.pos.x + self.size >= container.width {
            self.vel.x = -self.vel.x;
            self.pos.x = clamp_axis(self.pos.x, container.width - self.size);
            hits += 1;
        }

        if self.pos.y <= 0.0 || self.pos.y + self.size >= container.height {
            self.vel.y = -self.vel.y;
            self.pos.y = clamp_axis(self.pos.y, container.height - self.size);
            hits += 1;
        }

        hits
    }

    /// Pull the particle back inside the container without touching velocity.
    pub fn clamp_into(&mut self, container: ContainerSize) {
        self.pos = clamp_to_container(self.pos, self.size, container);
    }

    /// Half the squared speed (unit mass).
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.vel.length_squared()
    }
}
