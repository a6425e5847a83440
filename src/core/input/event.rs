//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level input events.
//
// This module abstracts away platform-specific input (Winit) into a
// unified, engine-friendly format consumed by the scene controller.
//
// Responsibilities:
// - Represent keyboard, mouse and window input in a stable, portable way
// - Provide equality and hashing semantics for deduplication
// - Carry modifier state (Shift, Ctrl, Alt) and click positions
// - Enable event coalescing (multiple MouseMoved → last position)
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    TimedEvent (InputEvent + arrival instant, this module)
//         ↓
//    SceneController::handle_event_at
//         ↓
//    Active scene → engine calls
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};
use std::time::Instant;

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Only the keys the benchmarks react to are listed; everything else maps
/// to `Unidentified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Numeric keypad: 0-9
    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Return/Enter key (main and keypad)
    Enter,

    /// Escape key
    Escape,

    /// Tab key
    Tab,

    /// Backspace key
    Backspace,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

impl KeyCode {
    /// Character this key types into a text box, if any.
    ///
    /// Letters map to lowercase; the benchmarks never need case.
    pub fn to_char(self) -> Option<char> {
        use KeyCode::*;
        let c = match self {
            Digit0 | Numpad0 => '0',
            Digit1 | Numpad1 => '1',
            Digit2 | Numpad2 => '2',
            Digit3 | Numpad3 => '3',
            Digit4 | Numpad4 => '4',
            Digit5 | Numpad5 => '5',
            Digit6 | Numpad6 => '6',
            Digit7 | Numpad7 => '7',
            Digit8 | Numpad8 => '8',
            Digit9 | Numpad9 => '9',
            KeyA => 'a', KeyB => 'b', KeyC => 'c', KeyD => 'd', KeyE => 'e',
            KeyF => 'f', KeyG => 'g', KeyH => 'h', KeyI => 'i', KeyJ => 'j',
            KeyK => 'k', KeyL => 'l', KeyM => 'm', KeyN => 'n', KeyO => 'o',
            KeyP => 'p', KeyQ => 'q', KeyR => 'r', KeyS => 's', KeyT => 't',
            KeyU => 'u', KeyV => 'v', KeyW => 'w', KeyX => 'x', KeyY => 'y',
            KeyZ => 'z',
            Space => ' ',
            Enter | Escape | Tab | Backspace | Unidentified => return None,
        };
        Some(c)
    }
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// # Equality & Hashing Semantics
///
/// Events are compared by type + payload (key/button + modifiers).
/// Positions are NOT part of equality: `MouseMoved` events are always
/// equal (coalescing keeps the last one), and two `MouseButtonDown`
/// events with the same button and modifiers are equal wherever they
/// happened.
///
/// ```text
/// Equality Rules:
/// KeyDown{A, CTRL}          == KeyDown{A, CTRL}          ✓
/// KeyDown{A, CTRL}          == KeyDown{A, SHIFT}         ✗ (different mods)
/// KeyDown{A}                == KeyUp{A}                  ✗ (different type)
/// MouseMoved{...}           == MouseMoved{...}           ✓ (always equal)
/// MouseButtonDown{L, 1, 2}  == MouseButtonDown{L, 9, 9}  ✓ (position ignored)
/// ```
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Key released.
    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Mouse button pressed at a logical window position.
    MouseButtonDown {
        button: MouseButton,
        x: f32,
        y: f32,
        modifiers: Modifiers,
    },

    /// Mouse button released.
    MouseButtonUp {
        button: MouseButton,
        modifiers: Modifiers,
    },

    /// Mouse cursor moved to a new logical position (top-left origin).
    MouseMoved { x: f32, y: f32 },

    /// Mouse wheel scrolled (direction is irrelevant to the benchmarks).
    MouseWheel,

    /// The user or OS asked to close the window.
    CloseRequested,

    /// Unrecognized or unsupported event; ignored.
    Unidentified,
}

//--- Implementation ------------------------------------------------------

impl InputEvent {
    /// Convenience constructor for an unmodified key press.
    pub fn key_down(key: KeyCode) -> Self {
        Self::KeyDown {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Convenience constructor for an unmodified left click.
    pub fn click(x: f32, y: f32) -> Self {
        Self::MouseButtonDown {
            button: MouseButton::Left,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Position of a mouse press (any button), if this is one.
    pub fn click_position(&self) -> Option<(f32, f32)> {
        match self {
            Self::MouseButtonDown { x, y, .. } => Some((*x, *y)),
            _ => None,
        }
    }

    pub fn is_motion(&self) -> bool {
        matches!(self, Self::MouseMoved { .. })
    }

    /// Returns `true` for the events that end the application from any
    /// scene: the Escape key and a window close request.
    pub fn is_quit(&self) -> bool {
        matches!(
            self,
            Self::CloseRequested
                | Self::KeyDown {
                    key: KeyCode::Escape,
                    ..
                }
        )
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                MouseButtonDown { button: a, modifiers: ma, .. },
                MouseButtonDown { button: b, modifiers: mb, .. },
            ) => a == b && ma == mb,
            (
                MouseButtonUp { button: a, modifiers: ma },
                MouseButtonUp { button: b, modifiers: mb },
            ) => a == b && ma == mb,
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (MouseWheel, MouseWheel) => true,
            (CloseRequested, CloseRequested) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes discriminant + key/button + modifiers, never positions
/// (consistent with equality).
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::MouseButtonDown { button, modifiers, .. }
            | Self::MouseButtonUp { button, modifiers } => {
                button.hash(state);
                modifiers.hash(state);
            }
            _ => {}
        }
    }
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// The system does not distinguish between left/right variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key held (either left or right).
    pub shift: bool,

    /// Ctrl key held (either left or right, Command on macOS).
    pub ctrl: bool,

    /// Alt key held (either left or right, Option on macOS).
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    /// Ctrl only.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };

    /// Alt only.
    pub const ALT: Self = Self {
        shift: false,
        ctrl: false,
        alt: true,
    };

    /// Returns `true` if Ctrl or Alt is held (shortcut chords, not typing).
    pub fn is_chord(&self) -> bool {
        self.ctrl || self.alt
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

//=== TimedEvent ==========================================================

/// An input event stamped with the instant the platform received it.
///
/// Scenes see the stamp as "now", so a reaction click is timed when it
/// happened rather than when the core thread got to it.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedEvent {
    pub event: InputEvent,
    pub at: Instant,
}

impl TimedEvent {
    pub fn new(event: InputEvent, at: Instant) -> Self {
        Self { event, at }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    //--- Test Helpers -----------------------------------------------------

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn key_down_with(key: KeyCode, modifiers: Modifiers) -> InputEvent {
        InputEvent::KeyDown { key, modifiers }
    }

    //=====================================================================
    // Equality Tests
    //=====================================================================

    #[test]
    fn equality_same_key_same_modifiers() {
        assert_eq!(InputEvent::key_down(KeyCode::KeyA), InputEvent::key_down(KeyCode::KeyA));
    }

    #[test]
    fn equality_different_modifiers() {
        assert_ne!(
            key_down_with(KeyCode::KeyA, Modifiers::CTRL),
            key_down_with(KeyCode::KeyA, Modifiers::SHIFT)
        );
    }

    #[test]
    fn equality_key_down_vs_up() {
        let up = InputEvent::KeyUp {
            key: KeyCode::KeyA,
            modifiers: Modifiers::NONE,
        };
        assert_ne!(InputEvent::key_down(KeyCode::KeyA), up);
    }

    #[test]
    fn equality_clicks_ignore_position() {
        assert_eq!(InputEvent::click(1.0, 2.0), InputEvent::click(900.0, 700.0));
    }

    #[test]
    fn equality_mouse_moved_ignores_coordinates() {
        let a = InputEvent::MouseMoved { x: 10.0, y: 10.0 };
        let b = InputEvent::MouseMoved { x: 200.0, y: 300.0 };
        assert_eq!(a, b);
    }

    //=====================================================================
    // Hashing Tests
    //=====================================================================

    #[test]
    fn hash_different_keys_differ() {
        assert_ne!(
            hash_of(&InputEvent::key_down(KeyCode::KeyA)),
            hash_of(&InputEvent::key_down(KeyCode::KeyB))
        );
    }

    #[test]
    fn hashset_coalesces_mouse_moves() {
        let mut set = HashSet::new();
        let latest = InputEvent::MouseMoved { x: 20.0, y: 30.0 };
        set.insert(InputEvent::MouseMoved { x: 10.0, y: 10.0 });
        set.replace(latest.clone());

        assert_eq!(set.len(), 1);
        match set.iter().next() {
            Some(InputEvent::MouseMoved { x, y }) => assert_eq!((*x, *y), (20.0, 30.0)),
            other => panic!("unexpected {:?}", other),
        }
    }

    //=====================================================================
    // Key Helpers
    //=====================================================================

    #[test]
    fn digits_and_letters_type_characters() {
        assert_eq!(KeyCode::Digit7.to_char(), Some('7'));
        assert_eq!(KeyCode::Numpad3.to_char(), Some('3'));
        assert_eq!(KeyCode::KeyS.to_char(), Some('s'));
        assert_eq!(KeyCode::Enter.to_char(), None);
        assert_eq!(KeyCode::Backspace.to_char(), None);
    }

    #[test]
    fn quit_events() {
        assert!(InputEvent::CloseRequested.is_quit());
        assert!(InputEvent::key_down(KeyCode::Escape).is_quit());
        assert!(key_down_with(KeyCode::Escape, Modifiers::SHIFT).is_quit());
        assert!(!InputEvent::key_down(KeyCode::Enter).is_quit());
        assert!(!InputEvent::click(0.0, 0.0).is_quit());
    }

    #[test]
    fn click_position_for_any_button() {
        assert_eq!(InputEvent::click(3.0, 4.0).click_position(), Some((3.0, 4.0)));

        let right = InputEvent::MouseButtonDown {
            button: MouseButton::Right,
            x: 8.0,
            y: 9.0,
            modifiers: Modifiers::NONE,
        };
        assert_eq!(right.click_position(), Some((8.0, 9.0)));
        assert_eq!(InputEvent::MouseMoved { x: 1.0, y: 1.0 }.click_position(), None);
    }

    #[test]
    fn chords_are_ctrl_or_alt() {
        assert!(!Modifiers::NONE.is_chord());
        assert!(!Modifiers::SHIFT.is_chord());
        assert!(Modifiers::CTRL.is_chord());
        assert!(Modifiers::ALT.is_chord());
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }

    #[test]
    fn only_cursor_moves_are_motion() {
        assert!(InputEvent::MouseMoved { x: 0.0, y: 0.0 }.is_motion());
        assert!(!InputEvent::click(0.0, 0.0).is_motion());
        assert!(!InputEvent::MouseWheel.is_motion());
    }
}
