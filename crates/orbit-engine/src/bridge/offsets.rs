use crate::api::env::MarkerSink;
use crate::api::types::{MarkerId, MarkerOffset};

/// In-memory marker sink holding the latest offset of every marker.
///
/// Headless hosts read it as a flat `[x0, y0, x1, y1, ...]` float slice;
/// tests use it to assert on what the engine wrote.
pub struct OffsetBuffer {
    offsets: Vec<MarkerOffset>,
    prepared: Vec<bool>,
    /// Total `set_offset` calls since creation.
    writes: u64,
}

impl OffsetBuffer {
    pub fn new() -> Self {
        Self {
            offsets: Vec::with_capacity(16),
            prepared: Vec::with_capacity(16),
            writes: 0,
        }
    }

    fn ensure_slot(&mut self, index: usize) {
        if index >= self.offsets.len() {
            self.offsets.resize(index + 1, MarkerOffset::default());
            self.prepared.resize(index + 1, false);
        }
    }

    /// Latest offset per marker, indexed by `MarkerId`.
    pub fn offsets(&self) -> &[MarkerOffset] {
        &self.offsets
    }

    pub fn get(&self, marker: MarkerId) -> Option<MarkerOffset> {
        self.offsets.get(marker.index()).copied()
    }

    /// Whether `prepare` has been called for the marker.
    pub fn is_prepared(&self, marker: MarkerId) -> bool {
        self.prepared.get(marker.index()).copied().unwrap_or(false)
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.offsets)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Default for OffsetBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerSink for OffsetBuffer {
    fn prepare(&mut self, marker: MarkerId) {
        self.ensure_slot(marker.index());
        self.prepared[marker.index()] = true;
    }

    fn set_offset(&mut self, marker: MarkerId, x: f32, y: f32) {
        self.ensure_slot(marker.index());
        self.offsets[marker.index()] = MarkerOffset { x, y };
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_land_in_marker_slots() {
        let mut buf = OffsetBuffer::new();
        buf.set_offset(MarkerId(1), 3.0, 4.0);
        buf.set_offset(MarkerId(0), 1.0, 2.0);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.as_floats(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(buf.writes(), 2);
    }

    #[test]
    fn later_write_replaces_earlier() {
        let mut buf = OffsetBuffer::new();
        buf.set_offset(MarkerId(0), 1.0, 1.0);
        buf.set_offset(MarkerId(0), 5.0, 6.0);
        assert_eq!(buf.get(MarkerId(0)), Some(MarkerOffset { x: 5.0, y: 6.0 }));
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn prepare_is_tracked_per_marker() {
        let mut buf = OffsetBuffer::new();
        buf.prepare(MarkerId(2));
        assert!(buf.is_prepared(MarkerId(2)));
        assert!(!buf.is_prepared(MarkerId(0)));
        assert!(!buf.is_prepared(MarkerId(9)));
        assert_eq!(buf.writes(), 0);
    }
}
