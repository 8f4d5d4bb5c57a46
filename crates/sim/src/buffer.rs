//! Fixed-capacity arena of platforms.
//!
//! Platforms are appended in generation order and addressed by stable index;
//! scrolling shifts every stored `y` uniformly but never reorders or removes
//! entries. The buffer is preallocated at construction and never grows past
//! its capacity.

use crate::error::ClimbError;
use crate::types::Platform;

#[derive(Debug, Clone)]
pub struct PlatformBuffer {
    platforms: Vec<Platform>,
    capacity: usize,
}

impl PlatformBuffer {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            platforms: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a platform, returning its stable index.
    pub fn append(&mut self, platform: Platform) -> Result<usize, ClimbError> {
        if self.platforms.len() == self.capacity {
            return Err(ClimbError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.platforms.push(platform);
        Ok(self.platforms.len() - 1)
    }

    pub fn get(&self, index: usize) -> Result<Platform, ClimbError> {
        self.platforms
            .get(index)
            .copied()
            .ok_or(ClimbError::IndexOutOfRange {
                index,
                count: self.platforms.len(),
            })
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.platforms.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Height of the highest stored platform, `None` while empty.
    #[must_use]
    pub fn highest_y(&self) -> Option<f32> {
        self.platforms.iter().map(|p| p.y).reduce(f32::max)
    }

    /// Uniformly lower every stored platform by `dy`. Scroll events are the
    /// only caller; platforms are immutable otherwise.
    pub fn shift_down(&mut self, dy: f32) {
        for platform in &mut self.platforms {
            platform.y -= dy;
        }
    }

    /// Up to `max_items` platforms at or above `reference_y`, ascending by
    /// height, padded with [`Platform::ZERO`] so the result always has
    /// exactly `max_items` entries.
    #[must_use]
    pub fn windowed_view(&self, reference_y: f32, max_items: usize) -> Vec<Platform> {
        let mut window: Vec<Platform> = self
            .platforms
            .iter()
            .copied()
            .filter(|p| p.y >= reference_y)
            .collect();
        window.sort_unstable_by(|a, b| {
            a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal)
        });
        window.resize(max_items, Platform::ZERO);
        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_returns_stable_indices_until_capacity() {
        let mut buffer = PlatformBuffer::with_capacity(2);
        assert_eq!(buffer.append(Platform::new(0.0, 10.0, 0.0)), Ok(0));
        assert_eq!(buffer.append(Platform::new(0.0, 10.0, 5.0)), Ok(1));
        assert_eq!(
            buffer.append(Platform::new(0.0, 10.0, 10.0)),
            Err(ClimbError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(buffer.count(), 2);
    }

    #[test]
    fn get_rejects_out_of_range_indices() {
        let mut buffer = PlatformBuffer::with_capacity(4);
        buffer.append(Platform::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(buffer.get(0), Ok(Platform::new(1.0, 2.0, 3.0)));
        assert_eq!(
            buffer.get(1),
            Err(ClimbError::IndexOutOfRange { index: 1, count: 1 })
        );
    }

    #[test]
    fn windowed_view_sorts_ascending_and_pads() {
        let mut buffer = PlatformBuffer::with_capacity(8);
        buffer.append(Platform::new(0.0, 10.0, 300.0)).unwrap();
        buffer.append(Platform::new(0.0, 10.0, 100.0)).unwrap();
        buffer.append(Platform::new(0.0, 10.0, 200.0)).unwrap();

        let window = buffer.windowed_view(150.0, 3);
        assert_eq!(window.len(), 3);
        assert_eq!(window[0].y, 200.0);
        assert_eq!(window[1].y, 300.0);
        assert_eq!(window[2], Platform::ZERO);
    }

    #[test]
    fn windowed_view_truncates_to_max_items() {
        let mut buffer = PlatformBuffer::with_capacity(8);
        for i in 0u8..5 {
            buffer
                .append(Platform::new(0.0, 10.0, f32::from(i) * 10.0))
                .unwrap();
        }
        let window = buffer.windowed_view(0.0, 2);
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].y, 0.0);
        assert_eq!(window[1].y, 10.0);
    }

    #[test]
    fn shift_down_moves_every_platform_uniformly() {
        let mut buffer = PlatformBuffer::with_capacity(4);
        buffer.append(Platform::new(0.0, 10.0, 0.0)).unwrap();
        buffer.append(Platform::new(5.0, 15.0, 150.0)).unwrap();
        buffer.shift_down(100.0);
        assert_eq!(buffer.get(0).unwrap().y, -100.0);
        assert_eq!(buffer.get(1).unwrap().y, 50.0);
        // x extents untouched
        assert_eq!(buffer.get(1).unwrap().x_start, 5.0);
    }
}
