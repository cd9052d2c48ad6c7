//! Keyboard to ship actions

use arcade_engine::input::InputState;

use crate::config::ControlsConfig;

/// Ship actions requested for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipControls {
    /// Turn counter-clockwise
    pub rotate_left: bool,
    /// Turn clockwise
    pub rotate_right: bool,
    /// Thrust forward
    pub forward: bool,
    /// Thrust backward
    pub backward: bool,
    /// Shoot
    pub fire: bool,
}

impl ShipControls {
    /// Resolve bindings against the keys held this frame
    pub fn from_input(bindings: &ControlsConfig, input: &InputState) -> Self {
        Self {
            rotate_left: input.any_down(&bindings.rotate_left),
            rotate_right: input.any_down(&bindings.rotate_right),
            forward: input.any_down(&bindings.forward),
            backward: input.any_down(&bindings.backward),
            fire: input.any_down(&bindings.fire),
        }
    }
}
