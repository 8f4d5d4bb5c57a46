use crate::error::ClimbError;

/// Discrete action set of the climbing agent.
///
/// `Jump` only takes effect while the agent rests on a platform; while
/// airborne it is a no-op and doubles as the neutral action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Action {
    Left = 0,
    Right = 1,
    Jump = 2,
}

impl Action {
    pub const COUNT: usize = 3;

    /// Decode an action from its discrete index, rejecting anything outside
    /// the set.
    pub fn from_index(index: usize) -> Result<Self, ClimbError> {
        match index {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            2 => Ok(Self::Jump),
            _ => Err(ClimbError::InvalidAction(index)),
        }
    }
}
