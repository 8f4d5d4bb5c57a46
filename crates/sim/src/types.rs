use std::ops::Sub;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A flat horizontal segment the agent can stand on.
///
/// Immutable once placed except for the uniform `y` shift applied to every
/// stored platform during a scroll event.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Platform {
    pub x_start: f32,
    pub x_end: f32,
    pub y: f32,
}

impl Platform {
    /// All-zero placeholder used to pad fixed-size platform windows.
    pub const ZERO: Self = Self {
        x_start: 0.0,
        x_end: 0.0,
        y: 0.0,
    };

    #[must_use]
    pub const fn new(x_start: f32, x_end: f32, y: f32) -> Self {
        Self { x_start, x_end, y }
    }

    #[must_use]
    pub fn width(self) -> f32 {
        self.x_end - self.x_start
    }

    #[must_use]
    pub fn center(self) -> Vec2 {
        Vec2::new((self.x_start + self.x_end) / 2.0, self.y)
    }

    #[must_use]
    pub fn contains_x(self, x: f32) -> bool {
        self.x_start <= x && x <= self.x_end
    }

    #[must_use]
    pub fn span(self) -> PlatformSpan {
        PlatformSpan {
            x_start: self.x_start,
            x_end: self.x_end,
            y_start: self.y,
            y_end: self.y,
        }
    }
}

/// Four-float interval mirror of a [`Platform`] used by the observation
/// encoding. `y_start == y_end` always; the height is duplicated so current
/// and next platform occupy identical fixed-shape slots.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlatformSpan {
    pub x_start: f32,
    pub x_end: f32,
    pub y_start: f32,
    pub y_end: f32,
}

/// Mutable per-step agent state.
///
/// Horizontal velocity is not persisted; it is derived from the current
/// action each step. `current_platform` retains the last known platform
/// while airborne and is `None` only before the first landing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentState {
    pub position: Vec2,
    pub velocity_y: f32,
    pub current_platform: Option<usize>,
    pub on_platform: bool,
}

/// Ordering rank for a platform index; the unset sentinel sorts below
/// index 0 so the first landing counts as an advance.
pub(crate) fn platform_rank(index: Option<usize>) -> i64 {
    index.map_or(-1, |i| i64::try_from(i).unwrap_or(i64::MAX))
}
