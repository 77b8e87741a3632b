use bytemuck::{Pod, Zeroable};

/// Index of a marker in the order the geometry provider reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u32);

impl MarkerId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A marker offset from the container's top-left corner.
/// Wire format: 2 floats = 8 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MarkerOffset {
    pub x: f32,
    pub y: f32,
}

/// Summary of what happened during one simulation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Velocity components reflected off a container edge.
    pub wall_hits: u32,
    /// Pairwise collisions resolved.
    pub collisions: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_offset_is_2_floats() {
        assert_eq!(std::mem::size_of::<MarkerOffset>(), 8);
    }
}
