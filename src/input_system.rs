#[cfg(feature = "sdl")]
use sdl2::event::Event;
#[cfg(feature = "sdl")]
use sdl2::keyboard::{Keycode, KeyboardState, Scancode};
#[cfg(feature = "sdl")]
use sdl2::mouse::MouseButton;
#[cfg(feature = "sdl")]
use sdl2::EventPump;

/// Discrete actions the player can trigger
///
/// This enum decouples raw input from game logic. Each variant is produced by
/// exactly one key press or mouse event; continuous movement comes from
/// [`HeldKeys`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    // === Movement ===
    Jump,
    Peck,

    // === Navigation ===
    Confirm,
    Escape,

    // === Flight practice ===
    Flap,
    Retry,

    // === Pointer ===
    PointerDown(i32, i32),
    PointerUp(i32, i32),
    PointerMove(i32, i32),

    // === System ===
    Quit,
}

/// Keys that act for as long as they are held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub fly: bool,
}

/// Which game the input is being read for
///
/// The adventure and the flight practice mini-game share a key layout but
/// give Space and Escape different meanings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Adventure,
    FlightPractice,
}

/// InputSystem processes SDL2 events and produces GameActions
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new(context: InputContext) -> Self {
        InputSystem { context }
    }

    /// Process SDL2 events and return the actions to handle this frame
    ///
    /// # Arguments
    ///
    /// * `event_pump` - SDL2 event pump for polling events
    #[cfg(feature = "sdl")]
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => actions.push(GameAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(action) = self.action_for_key(key) {
                        actions.push(action);
                    }
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => actions.push(GameAction::PointerDown(x, y)),
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => actions.push(GameAction::PointerUp(x, y)),
                Event::MouseMotion { x, y, .. } => actions.push(GameAction::PointerMove(x, y)),
                _ => {}
            }
        }

        actions
    }

    /// Maps a key press to its action in the current context
    #[cfg(feature = "sdl")]
    fn action_for_key(&self, key: Keycode) -> Option<GameAction> {
        match (self.context, key) {
            (InputContext::Adventure, Keycode::Space) => Some(GameAction::Jump),
            (InputContext::Adventure, Keycode::P) => Some(GameAction::Peck),
            (InputContext::Adventure, Keycode::Return) => Some(GameAction::Confirm),
            (InputContext::Adventure, Keycode::Escape) => Some(GameAction::Escape),

            (InputContext::FlightPractice, Keycode::Space) => Some(GameAction::Flap),
            (InputContext::FlightPractice, Keycode::R) => Some(GameAction::Retry),
            (InputContext::FlightPractice, Keycode::Escape) => Some(GameAction::Quit),

            _ => None,
        }
    }

    /// Samples the keys that matter while held
    #[cfg(feature = "sdl")]
    pub fn held_keys(&self, keyboard: &KeyboardState) -> HeldKeys {
        HeldKeys {
            left: keyboard.is_scancode_pressed(Scancode::Left),
            right: keyboard.is_scancode_pressed(Scancode::Right),
            fly: keyboard.is_scancode_pressed(Scancode::Up)
                || keyboard.is_scancode_pressed(Scancode::W),
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new(InputContext::Adventure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_system_creation() {
        let input = InputSystem::default();
        assert_eq!(input.context, InputContext::Adventure);

        let input = InputSystem::new(InputContext::FlightPractice);
        assert_eq!(input.context, InputContext::FlightPractice);
    }

    #[test]
    fn test_game_action_equality() {
        assert_eq!(GameAction::Jump, GameAction::Jump);
        assert_ne!(GameAction::Jump, GameAction::Flap);
        assert_eq!(GameAction::PointerDown(3, 4), GameAction::PointerDown(3, 4));
        assert_ne!(GameAction::PointerDown(3, 4), GameAction::PointerUp(3, 4));
    }

    #[test]
    fn test_held_keys_default_to_released() {
        let held = HeldKeys::default();
        assert!(!held.left && !held.right && !held.fly);
    }

    #[cfg(feature = "sdl")]
    #[test]
    fn test_key_mapping_depends_on_context() {
        let adventure = InputSystem::new(InputContext::Adventure);
        let flight = InputSystem::new(InputContext::FlightPractice);

        assert_eq!(adventure.action_for_key(Keycode::Space), Some(GameAction::Jump));
        assert_eq!(flight.action_for_key(Keycode::Space), Some(GameAction::Flap));
        assert_eq!(adventure.action_for_key(Keycode::Escape), Some(GameAction::Escape));
        assert_eq!(flight.action_for_key(Keycode::Escape), Some(GameAction::Quit));
        assert_eq!(adventure.action_for_key(Keycode::R), None);
        assert_eq!(flight.action_for_key(Keycode::P), None);
    }
}
