//! Scanning chrome: two-state tint and export-button animation

use serde::{Deserialize, Serialize};

/// Duration of the tint/opacity crossfade, in time units
pub const TRANSITION_DURATION: f32 = 1.0;

/// The chrome's two states, driven only by session start/stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChromeState {
    Scanning,
    Done,
}

/// Tint shared by the done and cancel controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    /// White, while scanning
    Active,
    /// System blue, when done
    Neutral,
}

impl Tint {
    /// Concrete color value for the tint
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            Tint::Active => [1.0, 1.0, 1.0, 1.0],
            Tint::Neutral => [0.0, 0.478, 1.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Fade {
    from: f32,
    to: f32,
    tint_from: [f32; 4],
    elapsed: f32,
}

impl Fade {
    fn progress(&self) -> f32 {
        (self.elapsed / TRANSITION_DURATION).min(1.0)
    }
}

/// Animated chrome state for the scanning screen
///
/// Entering `Scanning` crossfades the tint to active and fades the export
/// control out, hiding it once the fade settles. Entering `Done` unhides the
/// export control immediately, then fades it in while the tint crossfades
/// back to neutral. Transitions are idempotent: asking for the state the
/// chrome is already in (or already fading toward) is a no-op.
#[derive(Debug)]
pub struct ChromeController {
    state: ChromeState,
    tint: Tint,
    export_alpha: f32,
    export_hidden: bool,
    fade: Option<Fade>,
}

impl ChromeController {
    /// Chrome starts in the done state with the export control visible
    pub fn new() -> Self {
        Self {
            state: ChromeState::Done,
            tint: Tint::Neutral,
            export_alpha: 1.0,
            export_hidden: false,
            fade: None,
        }
    }

    pub fn state(&self) -> ChromeState {
        self.state
    }

    /// The tint target of the current state
    pub fn tint(&self) -> Tint {
        self.tint
    }

    /// The tint color as currently displayed, mid-crossfade included
    pub fn tint_rgba(&self) -> [f32; 4] {
        let target = self.tint.rgba();
        match &self.fade {
            Some(fade) => {
                let t = fade.progress();
                let mut color = [0.0; 4];
                for (i, channel) in color.iter_mut().enumerate() {
                    *channel = fade.tint_from[i] + (target[i] - fade.tint_from[i]) * t;
                }
                color
            }
            None => target,
        }
    }

    pub fn export_alpha(&self) -> f32 {
        self.export_alpha
    }

    pub fn export_hidden(&self) -> bool {
        self.export_hidden
    }

    /// Whether no transition animation is in flight
    pub fn is_settled(&self) -> bool {
        self.fade.is_none()
    }

    /// Enter the scanning state; no-op if already scanning
    pub fn begin_scanning(&mut self) {
        if self.state == ChromeState::Scanning {
            return;
        }
        self.state = ChromeState::Scanning;
        let tint_from = self.tint_rgba();
        self.tint = Tint::Active;
        self.fade = Some(Fade {
            from: self.export_alpha,
            to: 0.0,
            tint_from,
            elapsed: 0.0,
        });
    }

    /// Enter the done state; no-op if already done
    pub fn finish_scanning(&mut self) {
        if self.state == ChromeState::Done {
            return;
        }
        self.state = ChromeState::Done;
        let tint_from = self.tint_rgba();
        self.tint = Tint::Neutral;
        // unhidden immediately, the fade only restores opacity
        self.export_hidden = false;
        self.fade = Some(Fade {
            from: self.export_alpha,
            to: 1.0,
            tint_from,
            elapsed: 0.0,
        });
    }

    /// Advance the in-flight transition by `dt` time units
    pub fn tick(&mut self, dt: f32) {
        let Some(fade) = &mut self.fade else {
            return;
        };
        fade.elapsed += dt;
        let t = fade.progress();
        self.export_alpha = fade.from + (fade.to - fade.from) * t;
        if t >= 1.0 {
            self.fade = None;
            // the export control hides only once the fade-out settles
            if self.state == ChromeState::Scanning {
                self.export_hidden = true;
            }
        }
    }
}

impl Default for ChromeController {
    fn default() -> Self {
        Self::new()
    }
}
