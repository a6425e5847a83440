//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent → InputBuffer
//
// Stateful tracking:
// - modifiers from ModifiersChanged, applied to key and button events
// - cursor position (logical pixels), stamped onto button presses
//
// Key repeats and unmapped keys are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputProcessor ======================================================

/// Converts Winit events to InputEvents with modifier and cursor tracking.
pub(crate) struct InputProcessor {
    current_modifiers: Modifiers,
    cursor: (f32, f32),
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
            cursor: (0.0, 0.0),
        }
    }

    //--- State Management -------------------------------------------------

    /// Updates cached modifier state (applied to subsequent events).
    pub(crate) fn update_modifiers(&mut self, modifiers_state: ModifiersState) {
        self.current_modifiers = Modifiers::from(modifiers_state);
    }

    pub(crate) fn current_modifiers(&self) -> Modifiers {
        self.current_modifiers
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit KeyEvent (filters repeats and unmapped keys).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        if key_event.repeat {
            return None;
        }

        let key_code = match key_event.physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        self.key_input_event(key_code, key_event.state)
    }

    /// Converts a mouse button event, stamping the last cursor position.
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = MouseButton::from(button);
        let modifiers = self.current_modifiers;

        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown {
                button,
                x: self.cursor.0,
                y: self.cursor.1,
                modifiers,
            },
            ElementState::Released => InputEvent::MouseButtonUp { button, modifiers },
        }
    }

    /// Records the cursor in logical pixels and returns a move event.
    pub(crate) fn process_mouse_move(
        &mut self,
        position: PhysicalPosition<f64>,
        scale_factor: f64,
    ) -> InputEvent {
        let logical = position.to_logical::<f64>(scale_factor);
        self.cursor = (logical.x as f32, logical.y as f32);
        InputEvent::MouseMoved {
            x: self.cursor.0,
            y: self.cursor.1,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn key_input_event(&self, key: KeyCode, state: ElementState) -> Option<InputEvent> {
        if key == KeyCode::Unidentified {
            return None;
        }

        let modifiers = self.current_modifiers;
        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        })
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Winit normalizes platform keys (macOS Cmd → Ctrl, Option → Alt).
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Maps digits (row and keypad), letters and the text-editing keys.
/// Everything else becomes `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------

            Digit0 => KeyCode::Digit0,
            Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2,
            Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4,
            Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6,
            Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8,
            Digit9 => KeyCode::Digit9,

            Numpad0 => KeyCode::Numpad0,
            Numpad1 => KeyCode::Numpad1,
            Numpad2 => KeyCode::Numpad2,
            Numpad3 => KeyCode::Numpad3,
            Numpad4 => KeyCode::Numpad4,
            Numpad5 => KeyCode::Numpad5,
            Numpad6 => KeyCode::Numpad6,
            Numpad7 => KeyCode::Numpad7,
            Numpad8 => KeyCode::Numpad8,
            Numpad9 => KeyCode::Numpad9,

            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter | NumpadEnter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
