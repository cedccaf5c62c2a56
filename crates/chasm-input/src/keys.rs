//! Keyboard mirror of the section list: digit keys jump to sections, `T`
//! toggles the annotation overlay.
//!
//! Physical key codes are used so the digit row works identically on any
//! layout.

use chasm_sections::SectionId;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Tracks which keys transitioned to pressed this frame.
///
/// # Usage
///
/// 1. Forward every [`KeyEvent`] to [`process_event`](Self::process_event).
/// 2. Query with [`just_pressed`](Self::just_pressed).
/// 3. Call [`clear_transients`](Self::clear_transients) at end of frame.
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    just_pressed: Vec<PhysicalKey>,
}

impl KeyTracker {
    /// Creates a tracker with no pending presses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a winit [`KeyEvent`]. Repeats and releases are ignored;
    /// only the initial press edge matters for jump commands.
    pub fn process_event(&mut self, event: &KeyEvent) {
        if event.repeat || event.state != ElementState::Pressed {
            return;
        }
        self.just_pressed.push(event.physical_key);
    }

    /// Returns `true` only during the frame the key transitioned to pressed.
    #[must_use]
    pub fn just_pressed(&self, key: PhysicalKey) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Clears the pressed edges. Call at end of frame.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
    }
}

/// Digit keys in descent order; index matches the section registry.
const DIGIT_KEYS: [KeyCode; 7] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
];

/// Section jump requested this frame, if any. When several digits land in
/// one frame the lowest wins, consistent with last-write-wins retargeting
/// being cheap anyway.
#[must_use]
pub fn jump_request(keys: &KeyTracker) -> Option<SectionId> {
    for (index, key) in DIGIT_KEYS.iter().enumerate() {
        if keys.just_pressed(PhysicalKey::Code(*key)) {
            return SectionId::from_index(index);
        }
    }
    None
}

/// Whether the annotation-overlay toggle was pressed this frame.
#[must_use]
pub fn annotations_toggled(keys: &KeyTracker) -> bool {
    keys.just_pressed(PhysicalKey::Code(KeyCode::KeyT))
}
