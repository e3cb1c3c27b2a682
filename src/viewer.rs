//! Transform state for the image viewer.
//!
//! The viewer keeps two positions: `pan` is the committed target that drags and
//! resets write to, and `displayed` is what is actually rendered. While a drag
//! is active the two are equal; otherwise [`advance`] moves `displayed` toward
//! `pan` once per animation frame.

use std::ops::{Add, Mul, Sub};

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 3.0;
pub const BUTTON_STEP: f64 = 0.25;
pub const WHEEL_STEP: f64 = 0.1;

/// Fraction of the remaining distance covered per nominal frame.
pub const SMOOTHING_FACTOR: f64 = 0.2;
/// Below this distance (px, per axis) the displayed position snaps to target.
pub const SETTLE_THRESHOLD: f64 = 0.1;
/// Length of one nominal frame in milliseconds (60 Hz).
pub const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ORIGIN: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Offset {
    type Output = Offset;

    fn mul(self, rhs: f64) -> Offset {
        Offset::new(self.x * rhs, self.y * rhs)
    }
}

/// Moves `current` toward `target` for a frame that took `dt_ms` milliseconds.
///
/// One nominal frame covers [`SMOOTHING_FACTOR`] of the remaining distance;
/// shorter frames compound the factor so high refresh rates settle in the same
/// time. `dt_ms` is capped at one nominal frame: the first delta after the
/// animation loop resumes spans the whole idle period. Once both axes are
/// within [`SETTLE_THRESHOLD`] the result is exactly `target`.
pub fn advance(current: Offset, target: Offset, dt_ms: f64) -> Offset {
    let delta = target - current;
    if delta.x.abs() < SETTLE_THRESHOLD && delta.y.abs() < SETTLE_THRESHOLD {
        return target;
    }
    let frames = dt_ms.clamp(0.0, FRAME_MS) / FRAME_MS;
    let fraction = 1.0 - (1.0 - SMOOTHING_FACTOR).powf(frames);
    current + delta * fraction
}

/// Quarter-turn rotation, always one of 0, 90, 180 or 270 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rotation(u16);

impl Rotation {
    pub fn degrees(self) -> u16 {
        self.0
    }

    pub fn turned(self) -> Self {
        Rotation((self.0 + 90) % 360)
    }

    /// Whether the image keeps its original orientation axis (0 or 180).
    pub fn is_upright(self) -> bool {
        self.0 % 180 == 0
    }
}

/// What the fullscreen button does given the document's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenAction {
    Enter,
    Exit,
}

impl FullscreenAction {
    pub fn toggling(active: bool) -> Self {
        if active {
            FullscreenAction::Exit
        } else {
            FullscreenAction::Enter
        }
    }

    /// DOM method to call: on the viewer element to enter, on the document to exit.
    pub fn method(self) -> &'static str {
        match self {
            FullscreenAction::Enter => "requestFullscreen",
            FullscreenAction::Exit => "exitFullscreen",
        }
    }

    pub fn failure(self) -> &'static str {
        match self {
            FullscreenAction::Enter => "Error attempting to enable fullscreen",
            FullscreenAction::Exit => "Error attempting to exit fullscreen",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    scale: f64,
    pan: Offset,
    displayed: Offset,
    rotation: Rotation,
    drag_anchor: Option<Offset>,
    fullscreen: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan: Offset::ORIGIN,
            displayed: Offset::ORIGIN,
            rotation: Rotation::default(),
            drag_anchor: None,
            fullscreen: false,
        }
    }
}

// All steps are multiples of 0.05; rounding keeps repeated wheel steps from
// drifting away from the clamp bounds.
fn quantize(scale: f64) -> f64 {
    (scale * 100.0).round() / 100.0
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Committed pan target.
    pub fn pan(&self) -> Offset {
        self.pan
    }

    /// Position currently rendered.
    pub fn displayed(&self) -> Offset {
        self.displayed
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn can_pan(&self) -> bool {
        self.scale > 1.0
    }

    pub fn can_zoom_in(&self) -> bool {
        self.scale < MAX_SCALE
    }

    pub fn can_zoom_out(&self) -> bool {
        self.scale > MIN_SCALE
    }

    pub fn is_settled(&self) -> bool {
        self.displayed == self.pan
    }

    /// Back to the opening transform. Fullscreen is left alone since it
    /// mirrors the document, not the image.
    pub fn reset(&mut self) {
        *self = Self {
            fullscreen: self.fullscreen,
            ..Self::default()
        };
    }

    pub fn zoom_in(&mut self, step: f64) {
        self.scale = quantize((self.scale + step).min(MAX_SCALE));
    }

    pub fn zoom_out(&mut self, step: f64) {
        self.scale = quantize((self.scale - step).max(MIN_SCALE));
        if self.scale <= 1.0 {
            self.pan = Offset::ORIGIN;
        }
    }

    /// Wheel up zooms in, wheel down zooms out.
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y < 0.0 {
            self.zoom_in(WHEEL_STEP);
        } else {
            self.zoom_out(WHEEL_STEP);
        }
    }

    pub fn reset_zoom(&mut self) {
        self.scale = 1.0;
        self.pan = Offset::ORIGIN;
    }

    pub fn rotate(&mut self) {
        self.rotation = self.rotation.turned();
    }

    /// Starts a drag at `pointer` (client coordinates). Ignored unless zoomed in.
    pub fn begin_drag(&mut self, pointer: Offset) -> bool {
        if !self.can_pan() {
            return false;
        }
        self.drag_anchor = Some(pointer - self.pan);
        true
    }

    /// Follows the pointer during a drag. Returns whether the pan changed.
    pub fn drag_to(&mut self, pointer: Offset) -> bool {
        match self.drag_anchor {
            Some(anchor) if self.can_pan() => {
                self.pan = pointer - anchor;
                self.displayed = self.pan;
                true
            }
            _ => false,
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    /// Runs one animation frame. Returns whether another frame is needed.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        if self.is_dragging() {
            self.displayed = self.pan;
            return false;
        }
        self.displayed = advance(self.displayed, self.pan, dt_ms);
        !self.is_settled()
    }

    pub fn zoom_percent(&self) -> i32 {
        (self.scale * 100.0).round() as i32
    }

    pub fn transform_css(&self) -> String {
        format!(
            "rotate({}deg) scale({}) translate({}px, {}px)",
            self.rotation.degrees(),
            self.scale,
            self.displayed.x / self.scale,
            self.displayed.y / self.scale,
        )
    }

    pub fn max_width(&self) -> &'static str {
        if self.rotation.is_upright() {
            "100%"
        } else {
            "80%"
        }
    }

    pub fn max_height(&self) -> &'static str {
        if self.rotation.is_upright() {
            "80%"
        } else {
            "100%"
        }
    }

    pub fn cursor(&self) -> &'static str {
        match (self.can_pan(), self.is_dragging()) {
            (false, _) => "default",
            (true, false) => "grab",
            (true, true) => "grabbing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoomed_and_panned() -> ViewerState {
        let mut v = ViewerState::new();
        v.zoom_in(BUTTON_STEP);
        v.zoom_in(BUTTON_STEP);
        assert!(v.begin_drag(Offset::new(10.0, 10.0)));
        v.drag_to(Offset::new(60.0, -30.0));
        v.end_drag();
        v
    }

    #[test]
    fn scale_stays_clamped() {
        let mut v = ViewerState::new();
        for _ in 0..50 {
            v.zoom_in(BUTTON_STEP);
            assert!(v.scale() <= MAX_SCALE);
        }
        assert_eq!(v.scale(), MAX_SCALE);
        assert!(!v.can_zoom_in());

        for _ in 0..50 {
            v.wheel(1.0);
            assert!(v.scale() >= MIN_SCALE);
        }
        assert_eq!(v.scale(), MIN_SCALE);
        assert!(!v.can_zoom_out());

        for _ in 0..40 {
            v.wheel(-1.0);
        }
        assert_eq!(v.scale(), MAX_SCALE);
    }

    #[test]
    fn zoom_in_then_out_sequence() {
        let mut v = ViewerState::new();
        v.zoom_in(BUTTON_STEP);
        v.zoom_in(BUTTON_STEP);
        assert_eq!(v.scale(), 1.5);

        v.begin_drag(Offset::ORIGIN);
        v.drag_to(Offset::new(40.0, 25.0));
        v.end_drag();
        assert_eq!(v.pan(), Offset::new(40.0, 25.0));

        v.zoom_out(BUTTON_STEP);
        assert_eq!(v.scale(), 1.25);
        assert_eq!(v.pan(), Offset::new(40.0, 25.0));

        v.zoom_out(BUTTON_STEP);
        assert_eq!(v.scale(), 1.0);
        assert_eq!(v.pan(), Offset::ORIGIN);

        v.zoom_out(BUTTON_STEP);
        assert_eq!(v.scale(), 0.75);
        assert_eq!(v.pan(), Offset::ORIGIN);
    }

    #[test]
    fn wheel_out_to_one_recenters() {
        let mut v = ViewerState::new();
        v.wheel(-1.0);
        assert_eq!(v.scale(), 1.1);
        v.begin_drag(Offset::ORIGIN);
        v.drag_to(Offset::new(5.0, 5.0));
        v.end_drag();

        v.wheel(1.0);
        assert_eq!(v.scale(), 1.0);
        assert_eq!(v.pan(), Offset::ORIGIN);
    }

    #[test]
    fn no_pan_at_or_below_one() {
        let mut v = ViewerState::new();
        assert!(!v.begin_drag(Offset::new(3.0, 3.0)));
        assert!(!v.drag_to(Offset::new(100.0, 100.0)));
        assert_eq!(v.pan(), Offset::ORIGIN);
        assert_eq!(v.cursor(), "default");
    }

    #[test]
    fn drag_is_anchored_at_start() {
        let mut v = zoomed_and_panned();
        assert_eq!(v.pan(), Offset::new(50.0, -40.0));

        // A second drag continues from the current pan, not from zero.
        v.begin_drag(Offset::new(100.0, 100.0));
        assert_eq!(v.cursor(), "grabbing");
        v.drag_to(Offset::new(110.0, 90.0));
        assert_eq!(v.pan(), Offset::new(60.0, -50.0));
        assert_eq!(v.displayed(), v.pan());
        v.end_drag();
        assert_eq!(v.cursor(), "grab");
    }

    #[test]
    fn rotation_cycles_by_quarter_turns() {
        let mut v = ViewerState::new();
        let mut seen = Vec::new();
        for _ in 0..8 {
            v.rotate();
            seen.push(v.rotation().degrees());
        }
        assert_eq!(seen, [90, 180, 270, 0, 90, 180, 270, 0]);
    }

    #[test]
    fn five_rotations_is_ninety() {
        let mut v = ViewerState::new();
        for _ in 0..5 {
            v.rotate();
        }
        assert_eq!(v.rotation().degrees(), 90);
        assert_eq!(v.max_width(), "80%");
        assert_eq!(v.max_height(), "100%");
    }

    #[test]
    fn reset_restores_opening_transform() {
        let mut v = zoomed_and_panned();
        v.rotate();
        v.set_fullscreen(true);
        v.begin_drag(Offset::ORIGIN);

        v.reset();
        assert_eq!(v.scale(), 1.0);
        assert_eq!(v.pan(), Offset::ORIGIN);
        assert_eq!(v.displayed(), Offset::ORIGIN);
        assert_eq!(v.rotation().degrees(), 0);
        assert!(!v.is_dragging());
        assert!(v.is_fullscreen());
    }

    #[test]
    fn double_click_reset_zoom() {
        let mut v = zoomed_and_panned();
        v.reset_zoom();
        assert_eq!(v.scale(), 1.0);
        assert_eq!(v.pan(), Offset::ORIGIN);
        // Rendered position is still catching up.
        assert!(!v.is_settled());
    }

    #[test]
    fn advance_covers_a_fifth_per_frame() {
        let next = advance(Offset::ORIGIN, Offset::new(100.0, -50.0), FRAME_MS);
        assert!((next.x - 20.0).abs() < 1e-9);
        assert!((next.y + 10.0).abs() < 1e-9);
    }

    #[test]
    fn fullscreen_toggle_picks_method() {
        let enter = FullscreenAction::toggling(false);
        assert_eq!(enter, FullscreenAction::Enter);
        assert_eq!(enter.method(), "requestFullscreen");
        assert!(enter.failure().contains("enable"));

        let exit = FullscreenAction::toggling(true);
        assert_eq!(exit.method(), "exitFullscreen");
        assert!(exit.failure().contains("exit"));
    }

    #[test]
    fn long_frame_moves_one_step() {
        let next = advance(Offset::new(100.0, 0.0), Offset::ORIGIN, 2000.0);
        assert!((next.x - 80.0).abs() < 1e-9, "{next:?}");
        assert_eq!(next.y, 0.0);
    }

    #[test]
    fn short_frames_compound() {
        let half = FRAME_MS / 2.0;
        let once = advance(Offset::new(100.0, 0.0), Offset::ORIGIN, half);
        let twice = advance(once, Offset::ORIGIN, half);
        assert!((twice.x - 80.0).abs() < 1e-9, "{twice:?}");
    }

    #[test]
    fn recentre_after_idle_still_eases() {
        let mut v = ViewerState::new();
        v.zoom_in(BUTTON_STEP);
        v.zoom_in(BUTTON_STEP);
        assert!(v.begin_drag(Offset::ORIGIN));
        v.drag_to(Offset::new(100.0, 0.0));
        v.end_drag();
        v.zoom_out(BUTTON_STEP);
        v.zoom_out(BUTTON_STEP);
        assert_eq!(v.pan(), Offset::ORIGIN);

        // the loop was paused, so the first delta covers the whole pause
        assert!(v.tick(2000.0));
        assert!((v.displayed().x - 80.0).abs() < 1e-9, "{:?}", v.displayed());
        assert!(v.tick(FRAME_MS));
        assert!((v.displayed().x - 64.0).abs() < 1e-9, "{:?}", v.displayed());
    }

    #[test]
    fn advance_snaps_when_close() {
        let target = Offset::new(10.0, 10.0);
        assert_eq!(advance(Offset::new(9.95, 10.05), target, FRAME_MS), target);
        assert_eq!(advance(Offset::new(9.95, 10.05), target, 0.0), target);
        // Only one axis close is not enough.
        assert_ne!(advance(Offset::new(9.95, 12.0), target, FRAME_MS), target);
    }

    #[test]
    fn tick_converges() {
        let mut v = zoomed_and_panned();
        v.reset_zoom();
        let mut frames = 0;
        while v.tick(FRAME_MS) {
            frames += 1;
            assert!(frames < 100, "easing never settled");
        }
        assert_eq!(v.displayed(), Offset::ORIGIN);
        assert!(v.is_settled());
    }

    #[test]
    fn tick_while_dragging_tracks_pointer() {
        let mut v = zoomed_and_panned();
        v.begin_drag(Offset::ORIGIN);
        v.drag_to(Offset::new(7.0, 7.0));
        assert!(!v.tick(FRAME_MS));
        assert_eq!(v.displayed(), v.pan());
    }

    #[test]
    fn css_reflects_state() {
        let mut v = ViewerState::new();
        assert_eq!(v.transform_css(), "rotate(0deg) scale(1) translate(0px, 0px)");
        v.zoom_in(BUTTON_STEP);
        v.zoom_in(BUTTON_STEP);
        v.begin_drag(Offset::ORIGIN);
        v.drag_to(Offset::new(30.0, -15.0));
        v.rotate();
        assert_eq!(
            v.transform_css(),
            "rotate(90deg) scale(1.5) translate(20px, -10px)"
        );
        assert_eq!(v.zoom_percent(), 150);
    }
}
