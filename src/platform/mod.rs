//! Platform abstraction layer
//!
//! Translates host input events into `TickInput`:
//! - Keyboard codes (`KeyboardEvent.code` on web)
//! - Mouse buttons
//! - Camera look direction
//!
//! Held keys stay set until released; triggers stay set until a tick consumes them.

#[cfg(target_arch = "wasm32")]
pub mod web;

use glam::Vec3;

use crate::sim::TickInput;

/// Primary mouse button (`MouseEvent.button`)
pub const MOUSE_PRIMARY: i16 = 0;

/// Gameplay meaning of a physical key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Forward,
    Back,
    Left,
    Right,
    Run,
    Jump,
    Reload,
    Interact,
    /// Zero-based inventory slot
    SelectWeapon(usize),
    Pause,
}

/// Map a keyboard code to an action
pub fn action_for_code(code: &str) -> Option<Action> {
    let action = match code {
        "KeyW" | "ArrowUp" => Action::Forward,
        "KeyS" | "ArrowDown" => Action::Back,
        "KeyA" | "ArrowLeft" => Action::Left,
        "KeyD" | "ArrowRight" => Action::Right,
        "ShiftLeft" => Action::Run,
        "Space" => Action::Jump,
        "KeyR" => Action::Reload,
        "KeyF" => Action::Interact,
        "Escape" => Action::Pause,
        _ => {
            let digit = code.strip_prefix("Digit")?.parse::<usize>().ok()?;
            if digit == 0 {
                return None;
            }
            Action::SelectWeapon(digit - 1)
        }
    };
    Some(action)
}

/// Apply a key press. Returns false for keys the game does not use.
pub fn key_down(input: &mut TickInput, code: &str) -> bool {
    let Some(action) = action_for_code(code) else {
        return false;
    };
    match action {
        Action::Forward => input.movement.forward = true,
        Action::Back => input.movement.back = true,
        Action::Left => input.movement.left = true,
        Action::Right => input.movement.right = true,
        Action::Run => input.movement.run = true,
        Action::Jump => input.jump = true,
        Action::Reload => input.reload = true,
        Action::Interact => input.interact = true,
        Action::SelectWeapon(index) => input.select_weapon = Some(index),
        Action::Pause => input.pause = true,
    }
    true
}

/// Apply a key release. Triggers are not cancelled by releasing early.
pub fn key_up(input: &mut TickInput, code: &str) -> bool {
    let Some(action) = action_for_code(code) else {
        return false;
    };
    match action {
        Action::Forward => input.movement.forward = false,
        Action::Back => input.movement.back = false,
        Action::Left => input.movement.left = false,
        Action::Right => input.movement.right = false,
        Action::Run => input.movement.run = false,
        _ => {}
    }
    true
}

/// Primary button holds the trigger
pub fn mouse_button(input: &mut TickInput, button: i16, pressed: bool) {
    if button == MOUSE_PRIMARY {
        input.shoot = pressed;
    }
}

/// Update the look direction; degenerate vectors keep the previous aim
pub fn set_aim(input: &mut TickInput, dir: Vec3) -> bool {
    let Some(aim) = dir.try_normalize() else {
        return false;
    };
    input.aim = aim;
    true
}

/// Drop every held key, e.g. when the window loses focus
pub fn release_all(input: &mut TickInput) {
    input.movement = Default::default();
    input.shoot = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(action_for_code("KeyW"), Some(Action::Forward));
        assert_eq!(action_for_code("ArrowLeft"), Some(Action::Left));
        assert_eq!(action_for_code("Digit1"), Some(Action::SelectWeapon(0)));
        assert_eq!(action_for_code("Digit9"), Some(Action::SelectWeapon(8)));
        assert_eq!(action_for_code("Digit0"), None);
        assert_eq!(action_for_code("KeyQ"), None);
        assert_eq!(action_for_code("ShiftRight"), None);
    }

    #[test]
    fn test_held_keys_press_and_release() {
        let mut input = TickInput::default();
        assert!(key_down(&mut input, "KeyW"));
        assert!(key_down(&mut input, "ShiftLeft"));
        assert!(input.movement.forward && input.movement.run);

        assert!(key_up(&mut input, "KeyW"));
        assert!(!input.movement.forward);
        assert!(input.movement.run);

        assert!(!key_down(&mut input, "KeyZ"));
    }

    #[test]
    fn test_triggers_survive_release() {
        let mut input = TickInput::default();
        key_down(&mut input, "Space");
        key_up(&mut input, "Space");
        assert!(input.jump);

        key_down(&mut input, "Digit2");
        assert_eq!(input.select_weapon, Some(1));
        input.clear_triggers();
        assert!(!input.jump);
        assert_eq!(input.select_weapon, None);
    }

    #[test]
    fn test_mouse_and_aim() {
        let mut input = TickInput::default();
        mouse_button(&mut input, MOUSE_PRIMARY, true);
        assert!(input.shoot);
        mouse_button(&mut input, 2, false);
        assert!(input.shoot);
        mouse_button(&mut input, MOUSE_PRIMARY, false);
        assert!(!input.shoot);

        assert!(set_aim(&mut input, Vec3::new(0.0, 0.0, -4.0)));
        assert_eq!(input.aim, Vec3::NEG_Z);
        assert!(!set_aim(&mut input, Vec3::ZERO));
        assert_eq!(input.aim, Vec3::NEG_Z);
    }

    #[test]
    fn test_release_all() {
        let mut input = TickInput::default();
        key_down(&mut input, "KeyD");
        mouse_button(&mut input, MOUSE_PRIMARY, true);
        release_all(&mut input);
        assert_eq!(input.movement, Default::default());
        assert!(!input.shoot);
    }
}
