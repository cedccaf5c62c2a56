//! Window creation and event handling via winit.
//!
//! [`ViewerApp`] implements winit's [`ApplicationHandler`]: input events
//! are forwarded to the frame-coherent trackers as they arrive, and one
//! controller tick runs per `RedrawRequested`. All navigation mutation
//! happens here, on the event-loop thread.

use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use chasm_config::Config;
use chasm_input::{KeyTracker, TouchTracker, WheelState, annotations_toggled, jump_request};
use chasm_nav::DepthController;
use chasm_store::NavStore;

use crate::camera::CameraRig;
use crate::frame_clock::FrameClock;
use crate::hud::{HudState, format_hud, update_hud};

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    let mut attrs = WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ));
    if config.window.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }
    attrs
}

/// Application state: the window, the navigation machinery, and the
/// per-frame trackers.
pub struct ViewerApp {
    window: Option<Window>,
    config: Config,
    store: NavStore,
    controller: DepthController,
    wheel: WheelState,
    touch: TouchTracker,
    keys: KeyTracker,
    clock: FrameClock,
    hud: HudState,
    rig: CameraRig,
}

impl ViewerApp {
    /// Builds the app from a loaded configuration. Annotations start
    /// hidden on touch-primary devices.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut store = NavStore::with_annotations(!config.input.touch_primary);

        // Log section transitions for anyone tailing the session.
        let mut last = store.state().active_section;
        store.subscribe(Box::new(move |state| {
            if state.active_section != last {
                info!("entered section {:?}", state.active_section);
                last = state.active_section;
            }
        }));

        Self {
            window: None,
            config,
            store,
            controller: DepthController::new(),
            wheel: WheelState::new(),
            touch: TouchTracker::new(),
            keys: KeyTracker::new(),
            clock: FrameClock::new(),
            hud: HudState::default(),
            rig: CameraRig::default(),
        }
    }

    /// Read-only navigation state for an attached scene layer.
    #[must_use]
    pub fn store(&self) -> &NavStore {
        &self.store
    }

    /// View matrix for the current viewpoint; the scene layer reads this
    /// each frame instead of touching depth directly.
    #[must_use]
    pub fn scene_view(&self) -> glam::Mat4 {
        self.rig.view_matrix(self.controller.depth())
    }

    /// Projection matrix for the current window aspect ratio.
    #[must_use]
    pub fn scene_projection(&self) -> glam::Mat4 {
        let aspect = self
            .window
            .as_ref()
            .map(|w| {
                let size = w.inner_size();
                size.width as f32 / size.height.max(1) as f32
            })
            .unwrap_or(16.0 / 9.0);
        self.rig.projection_matrix(aspect)
    }

    /// One frame: drain the trackers into the controller, tick, refresh
    /// the HUD.
    fn frame(&mut self) {
        let dt = self.clock.tick();
        self.advance(dt);
    }

    /// Frame body with the frame time supplied by the caller, so tests can
    /// step the app with a [`ManualClock`](crate::frame_clock::ManualClock).
    fn advance(&mut self, dt: f32) {
        // UI-layer writes first: jump commands and the annotation toggle.
        if annotations_toggled(&self.keys) {
            self.store.toggle_annotations();
        }
        if let Some(id) = jump_request(&self.keys) {
            self.controller.command_jump(&mut self.store, Some(id));
        }

        // Input deltas take effect immediately; the tick below integrates
        // them.
        if self.touch.drag_began() {
            self.controller.begin_drag(&mut self.store);
        }
        let wheel_delta = self.wheel.raw_delta() * self.config.input.wheel_sensitivity;
        if wheel_delta != 0.0 {
            self.controller
                .apply_wheel(&mut self.store, wheel_delta, self.config.input.touch_primary);
        }
        let drag_delta = self.touch.drag_delta() * self.config.input.touch_sensitivity;
        if drag_delta != 0.0 {
            self.controller.apply_drag(&mut self.store, drag_delta);
        }
        if self.touch.drag_released() {
            self.controller.release_drag(&mut self.store);
        }

        self.controller.update(&mut self.store, dt);

        update_hud(&mut self.hud, self.store.state(), dt);
        if let Some(window) = &self.window {
            window.set_title(&format_hud(&self.hud, self.config.debug.show_fps));
        }

        self.wheel.clear_transients();
        self.touch.clear_transients();
        self.keys.clear_transients();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = window_attributes_from_config(&self.config);
            match event_loop.create_window(attrs) {
                Ok(window) => {
                    info!(
                        "Window created: {}x{}",
                        self.config.window.width, self.config.window.height
                    );
                    self.window = Some(window);
                }
                Err(e) => {
                    error!("Failed to create window: {e}");
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.wheel.on_scroll(delta);
            }
            WindowEvent::Touch(touch) => {
                self.touch.on_touch(&touch);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keys.process_event(&event);
            }
            WindowEvent::RedrawRequested => {
                self.frame();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Continuous render loop: one frame per redraw.
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Creates the event loop and runs the viewer until exit.
pub fn run(config: Config) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = ViewerApp::new(config);
    event_loop.run_app(&mut app).expect("Event loop failed");
}
