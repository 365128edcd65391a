//! Keyboard input for the human fighter.
//!
//! This module provides key state tracking with edge detection, rebindable
//! action mapping, and the double-tap dash gesture.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::clock::Millis;

/// Maximum gap between two presses of the same direction that triggers a dash.
pub const DASH_WINDOW: Millis = 250;

/// Key codes for keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// J key
    J,
    /// S key
    S,
    /// W key
    W,
    /// Space bar
    Space,
    /// Enter/Return
    Enter,
    /// Up arrow
    Up,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// State of a button (pressed, just pressed, released).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Whether the button is currently held down
    pub pressed: bool,
    /// Whether the button was just pressed this frame
    pub just_pressed: bool,
    /// Whether the button was just released this frame
    pub just_released: bool,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pressed: false,
            just_pressed: false,
            just_released: false,
        }
    }

    /// Update the button state based on whether it's currently pressed.
    pub fn update(&mut self, is_pressed: bool) {
        self.just_pressed = is_pressed && !self.pressed;
        self.just_released = !is_pressed && self.pressed;
        self.pressed = is_pressed;
    }

    /// Clear the frame-specific state (just_pressed, just_released).
    pub fn clear_frame(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Fighter actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Walk left (A by default)
    MoveLeft,
    /// Walk right (D by default)
    MoveRight,
    /// Jump (W by default)
    Jump,
    /// Punch (Space by default)
    Punch,
    /// Kick (S by default)
    Kick,
    /// Super move (Enter by default)
    Super,
}

/// Key binding for one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Primary key for this action
    pub primary: KeyCode,
    /// Optional secondary key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<KeyCode>,
}

impl KeyBinding {
    /// Create a new key binding with only a primary key.
    #[must_use]
    pub const fn new(primary: KeyCode) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Create a new key binding with primary and secondary keys.
    #[must_use]
    pub const fn with_secondary(primary: KeyCode, secondary: KeyCode) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Check if a key matches this binding.
    #[must_use]
    pub fn matches(&self, key: KeyCode) -> bool {
        self.primary == key || self.secondary == Some(key)
    }
}

/// Full binding table, one entry per [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Walk left
    pub move_left: KeyBinding,
    /// Walk right
    pub move_right: KeyBinding,
    /// Jump
    pub jump: KeyBinding,
    /// Punch
    pub punch: KeyBinding,
    /// Kick
    pub kick: KeyBinding,
    /// Super move
    pub super_move: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: KeyBinding::with_secondary(KeyCode::A, KeyCode::Left),
            move_right: KeyBinding::with_secondary(KeyCode::D, KeyCode::Right),
            jump: KeyBinding::with_secondary(KeyCode::W, KeyCode::Up),
            punch: KeyBinding::new(KeyCode::Space),
            kick: KeyBinding::new(KeyCode::S),
            super_move: KeyBinding::new(KeyCode::Enter),
        }
    }
}

impl KeyBindings {
    /// Binding for an action.
    #[must_use]
    pub fn get(&self, action: Action) -> &KeyBinding {
        match action {
            Action::MoveLeft => &self.move_left,
            Action::MoveRight => &self.move_right,
            Action::Jump => &self.jump,
            Action::Punch => &self.punch,
            Action::Kick => &self.kick,
            Action::Super => &self.super_move,
        }
    }

    /// Rebind an action.
    pub fn set(&mut self, action: Action, binding: KeyBinding) {
        match action {
            Action::MoveLeft => self.move_left = binding,
            Action::MoveRight => self.move_right = binding,
            Action::Jump => self.jump = binding,
            Action::Punch => self.punch = binding,
            Action::Kick => self.kick = binding,
            Action::Super => self.super_move = binding,
        }
    }

    /// Every key referenced by the table.
    #[must_use]
    pub fn keys(&self) -> Vec<KeyCode> {
        let mut keys = Vec::new();
        for binding in [
            self.move_left,
            self.move_right,
            self.jump,
            self.punch,
            self.kick,
            self.super_move,
        ] {
            for key in std::iter::once(binding.primary).chain(binding.secondary) {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }
        keys
    }
}

/// Per-frame snapshot of the human fighter's controls.
///
/// Movement is level-triggered; every other action is edge-triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Left is held
    pub left_held: bool,
    /// Right is held
    pub right_held: bool,
    /// Left went down this frame
    pub left_pressed: bool,
    /// Right went down this frame
    pub right_pressed: bool,
    /// Jump went down this frame
    pub jump: bool,
    /// Punch went down this frame
    pub punch: bool,
    /// Kick went down this frame
    pub kick: bool,
    /// Super went down this frame
    pub super_move: bool,
}

/// Keyboard state manager that converts raw keys to fighter actions.
#[derive(Debug, Default)]
pub struct InputManager {
    key_states: AHashMap<KeyCode, ButtonState>,
    bindings: KeyBindings,
}

impl InputManager {
    /// Create an input manager with default bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input manager with custom bindings.
    #[must_use]
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            key_states: AHashMap::new(),
            bindings,
        }
    }

    /// Current bindings.
    #[must_use]
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Rebind an action to a new key.
    pub fn rebind(&mut self, action: Action, binding: KeyBinding) {
        self.bindings.set(action, binding);
    }

    /// Update a key state.
    pub fn update_key(&mut self, key: KeyCode, is_pressed: bool) {
        self.key_states.entry(key).or_default().update(is_pressed);
    }

    /// Clear frame-specific state. Call at the end of each frame.
    pub fn end_frame(&mut self) {
        for state in self.key_states.values_mut() {
            state.clear_frame();
        }
    }

    /// Check if a key is currently pressed.
    #[must_use]
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.key_states.get(&key).is_some_and(|state| state.pressed)
    }

    /// Check if a key was just pressed this frame.
    #[must_use]
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.key_states
            .get(&key)
            .is_some_and(|state| state.just_pressed)
    }

    /// Check if an action is currently held.
    #[must_use]
    pub fn is_action_pressed(&self, action: Action) -> bool {
        let binding = self.bindings.get(action);
        self.is_key_pressed(binding.primary)
            || binding
                .secondary
                .is_some_and(|key| self.is_key_pressed(key))
    }

    /// Check if an action was just pressed this frame.
    #[must_use]
    pub fn is_action_just_pressed(&self, action: Action) -> bool {
        let binding = self.bindings.get(action);
        self.is_key_just_pressed(binding.primary)
            || binding
                .secondary
                .is_some_and(|key| self.is_key_just_pressed(key))
    }

    /// Snapshot the controls for one update.
    #[must_use]
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            left_held: self.is_action_pressed(Action::MoveLeft),
            right_held: self.is_action_pressed(Action::MoveRight),
            left_pressed: self.is_action_just_pressed(Action::MoveLeft),
            right_pressed: self.is_action_just_pressed(Action::MoveRight),
            jump: self.is_action_just_pressed(Action::Jump),
            punch: self.is_action_just_pressed(Action::Punch),
            kick: self.is_action_just_pressed(Action::Kick),
            super_move: self.is_action_just_pressed(Action::Super),
        }
    }
}

/// Double-tap dash gesture detector.
///
/// A press of a direction dashes when the previous press of the same
/// direction happened strictly less than [`DASH_WINDOW`] earlier.
#[derive(Debug, Clone, Default)]
pub struct DashDetector {
    last_left: Option<Millis>,
    last_right: Option<Millis>,
}

impl DashDetector {
    /// Creates a detector with no recorded presses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a direction press (`dir` < 0 is left) and returns whether it
    /// completes a dash gesture.
    pub fn register(&mut self, dir: i8, now: Millis) -> bool {
        let last = if dir < 0 {
            &mut self.last_left
        } else {
            &mut self.last_right
        };
        let dash = last.is_some_and(|t| now.saturating_sub(t) < DASH_WINDOW);
        *last = Some(now);
        dash
    }
}
