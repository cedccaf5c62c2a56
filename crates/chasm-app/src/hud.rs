//! HUD readout displayed via the window title.
//!
//! Computes the depth readout, descent progress, active-section labels, and
//! smoothed FPS from the navigation state, formatted as a compact string.
//! The section shown is the nearest one by depth, independent of the anchor
//! logic, so the label tracks the viewpoint even in free fall.

use chasm_nav::NavPhase;
use chasm_sections::{descent_progress, nearest};
use chasm_store::NavState;

/// HUD values computed each frame.
#[derive(Debug, Clone)]
pub struct HudState {
    /// Depth readout in display meters (10 per depth unit).
    pub depth_m: i64,
    /// Descent progress, 0–100.
    pub progress_pct: f32,
    /// Display title of the nearest section.
    pub title: &'static str,
    /// Romanized subtitle of the nearest section.
    pub subtitle: &'static str,
    /// Current navigation phase.
    pub phase: NavPhase,
    /// Frames per second (smoothed).
    pub fps: f32,
    /// Exponential moving average of frame time.
    frame_time_ema: f32,
}

impl Default for HudState {
    fn default() -> Self {
        Self {
            depth_m: 0,
            progress_pct: 0.0,
            title: "",
            subtitle: "",
            phase: NavPhase::Free,
            fps: 0.0,
            frame_time_ema: 1.0 / 60.0,
        }
    }
}

/// Update HUD values from the current navigation state.
///
/// Call once per frame with the frame's elapsed time.
pub fn update_hud(hud: &mut HudState, state: &NavState, dt: f32) {
    hud.depth_m = (state.depth * 10.0).round().abs() as i64;
    hud.progress_pct = descent_progress(state.depth) * 100.0;

    let section = nearest(state.depth);
    hud.title = section.title;
    hud.subtitle = section.subtitle;
    hud.phase = NavPhase::of(state);

    if dt > 0.0 {
        // EMA with alpha = 0.1 for a stable display
        hud.frame_time_ema = hud.frame_time_ema * 0.9 + dt * 0.1;
        hud.fps = 1.0 / hud.frame_time_ema;
    }
}

/// Format HUD values as a compact string suitable for a window title.
///
/// Example: `上弦の鬼 Upper Moons | DEPTH: 500m | 33% | ANCHORED | FPS: 144`
#[must_use]
pub fn format_hud(hud: &HudState, show_fps: bool) -> String {
    let phase = match hud.phase {
        NavPhase::Free => "FREE",
        NavPhase::Anchored => "ANCHORED",
        NavPhase::Teleporting => "SEEK",
    };

    let mut title = format!(
        "{} {} | DEPTH: {}m | {:.0}% | {}",
        hud.title, hud.subtitle, hud.depth_m, hud.progress_pct, phase,
    );
    if show_fps {
        title.push_str(&format!(" | FPS: {:.0}", hud.fps));
    }
    title
}
