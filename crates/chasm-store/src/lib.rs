//! Shared navigation state and its synchronous observer list.
//!
//! [`NavStore`] is the single source of truth the scene and HUD layers read
//! from. It is constructed once per session and passed by reference — there
//! is no global instance. Write discipline is by convention, not by locks:
//! only the depth controller writes `depth`/`velocity`/anchoring, only the
//! UI layer writes the jump request and the annotation toggle, and all
//! mutation happens on the one event-loop thread.

use chasm_sections::SectionId;

/// Snapshot of the navigation state at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavState {
    /// Current position along the navigation axis. Mirror of the
    /// controller's authoritative coordinate.
    pub depth: f32,
    /// Current rate of depth change per tick, before the next friction
    /// application.
    pub velocity: f32,
    /// True while the viewpoint is locked to a section (physics suspended).
    pub is_anchored: bool,
    /// The section the anchoring logic currently considers current.
    pub active_section: SectionId,
    /// Non-`None` only while a commanded jump is in flight.
    pub target_section: Option<SectionId>,
    /// Whether the annotation overlay is visible. No effect on physics.
    pub show_annotations: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            depth: 0.0,
            velocity: 0.0,
            is_anchored: false,
            active_section: SectionId::Hero,
            target_section: None,
            show_annotations: true,
        }
    }
}

/// Observer callback invoked synchronously after every store write.
pub type Observer = Box<dyn FnMut(&NavState)>;

/// Owns the [`NavState`] and notifies observers on each mutation.
///
/// Notification is synchronous and unbatched; observers see every write in
/// order. Presentation layers that want coalescing add it on their side.
pub struct NavStore {
    state: NavState,
    observers: Vec<Observer>,
}

impl Default for NavStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NavStore {
    /// Creates a store with the session-start state: at the surface,
    /// motionless, first section active.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: NavState::default(),
            observers: Vec::new(),
        }
    }

    /// Creates a store with annotations initially hidden, the default on
    /// touch-primary devices.
    #[must_use]
    pub fn with_annotations(show_annotations: bool) -> Self {
        Self {
            state: NavState {
                show_annotations,
                ..NavState::default()
            },
            observers: Vec::new(),
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Registers an observer, called after every subsequent write.
    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    // ── Setters (each notifies observers) ───────────────────────────

    /// Mirrors the controller's depth coordinate into the store.
    pub fn set_depth(&mut self, depth: f32) {
        self.state.depth = depth;
        self.notify();
    }

    /// Mirrors the controller's velocity into the store.
    pub fn set_velocity(&mut self, velocity: f32) {
        self.state.velocity = velocity;
        self.notify();
    }

    /// Sets the anchored flag.
    pub fn set_anchored(&mut self, anchored: bool) {
        self.state.is_anchored = anchored;
        self.notify();
    }

    /// Sets the section the anchoring logic considers current.
    pub fn set_active_section(&mut self, section: SectionId) {
        self.state.active_section = section;
        self.notify();
    }

    /// Requests a jump to the given section, or clears a pending request
    /// with `None`. A commanded jump always releases the anchor.
    pub fn request_jump(&mut self, target: Option<SectionId>) {
        if target.is_some() {
            log::debug!("jump requested: {target:?}");
            self.state.is_anchored = false;
        }
        self.state.target_section = target;
        self.notify();
    }

    /// Flips annotation-overlay visibility.
    pub fn toggle_annotations(&mut self) {
        self.state.show_annotations = !self.state.show_annotations;
        self.notify();
    }

    fn notify(&mut self) {
        let snapshot = self.state;
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }
}
