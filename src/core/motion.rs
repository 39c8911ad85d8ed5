//! Decorative animation parameters.
//!
//! Nothing here affects structure or text. The renderer asks a
//! [`MotionTheme`] for each element's motion and gets `None` when motion is
//! turned off. Times are whole milliseconds and offsets whole pixels so a
//! rendered tree compares equal to itself.

use serde::Serialize;

pub const SECTION_FADE_MS: u32 = 800;
pub const FADE_IN_MS: u32 = 600;
pub const FADE_IN_OFFSET_PX: i32 = 20;
pub const STAGGER_MS: u32 = 200;
pub const BULLET_STAGGER_MS: u32 = 100;
pub const CARD_LIFT_PX: i32 = 5;
pub const HOVER_SCALE: u16 = 105;
pub const SOCIAL_HOVER_SCALE: u16 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Plays as soon as the page loads.
    Mount,
    /// Plays the first time the element scrolls into view.
    InView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Enter {
    pub trigger: Trigger,
    /// Starting opacity in percent.
    pub opacity: u8,
    pub x: i32,
    pub y: i32,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hover {
    /// Scale factor in percent (105 = 1.05).
    pub scale: u16,
    pub lift: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Motion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enter: Option<Enter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<Hover>,
}

impl Motion {
    pub fn is_empty(&self) -> bool {
        self.enter.is_none() && self.hover.is_none()
    }

    pub fn with_hover(mut self, scale: u16, lift: i32) -> Self {
        self.hover = Some(Hover { scale, lift });
        self
    }

    pub fn delayed(mut self, delay_ms: u32) -> Self {
        if let Some(enter) = self.enter.as_mut() {
            enter.delay_ms += delay_ms;
        }
        self
    }

    /// Space-separated tokens for the `data-motion` attribute.
    pub fn tokens(&self) -> String {
        let mut tokens = Vec::new();
        if let Some(enter) = &self.enter {
            tokens.push(match enter.trigger {
                Trigger::Mount => "enter",
                Trigger::InView => "inview",
            });
        }
        if self.hover.is_some() {
            tokens.push("hover");
        }
        tokens.join(" ")
    }

    /// CSS custom properties consumed by the stylesheet.
    pub fn css_vars(&self) -> String {
        let mut vars = Vec::new();
        if let Some(enter) = &self.enter {
            vars.push(format!("--m-opacity:{}", percent(enter.opacity as u16)));
            vars.push(format!("--m-x:{}px", enter.x));
            vars.push(format!("--m-y:{}px", enter.y));
            vars.push(format!("--m-duration:{}ms", enter.duration_ms));
            vars.push(format!("--m-delay:{}ms", enter.delay_ms));
        }
        if let Some(hover) = &self.hover {
            vars.push(format!("--m-scale:{}", percent(hover.scale)));
            vars.push(format!("--m-lift:{}px", hover.lift));
        }
        vars.join(";")
    }
}

fn percent(value: u16) -> String {
    format!("{}.{:02}", value / 100, value % 100)
}

fn enter(trigger: Trigger, opacity: u8, x: i32, y: i32, duration_ms: u32) -> Motion {
    Motion {
        enter: Some(Enter {
            trigger,
            opacity,
            x,
            y,
            duration_ms,
            delay_ms: 0,
        }),
        hover: None,
    }
}

/// Source of per-element motion. A disabled theme yields `None` everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MotionTheme {
    enabled: bool,
}

impl Default for MotionTheme {
    fn default() -> Self {
        Self::enabled()
    }
}

impl MotionTheme {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn from_flag(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn gate(&self, motion: Motion) -> Option<Motion> {
        self.enabled.then_some(motion)
    }

    /// Whole-section opacity fade.
    pub fn section_fade(&self, trigger: Trigger) -> Option<Motion> {
        self.gate(enter(trigger, 0, 0, 0, SECTION_FADE_MS))
    }

    /// Fade in while rising from below.
    pub fn rise(&self, trigger: Trigger) -> Option<Motion> {
        self.gate(enter(trigger, 0, 0, FADE_IN_OFFSET_PX, FADE_IN_MS))
    }

    /// Slide up into place without fading.
    pub fn lift_in(&self) -> Option<Motion> {
        self.gate(enter(Trigger::Mount, 100, 0, FADE_IN_OFFSET_PX, FADE_IN_MS))
    }

    /// Fade in from the left.
    pub fn slide_in(&self, trigger: Trigger, delay_ms: u32) -> Option<Motion> {
        self.gate(enter(trigger, 0, -FADE_IN_OFFSET_PX, 0, FADE_IN_MS).delayed(delay_ms))
    }

    /// `index`-th child of a staggered container.
    pub fn staggered(&self, trigger: Trigger, index: usize) -> Option<Motion> {
        self.rise(trigger).map(|m| m.delayed(stagger_delay(index, STAGGER_MS)))
    }

    pub fn hover(&self, scale: u16) -> Option<Motion> {
        self.gate(Motion::default().with_hover(scale, 0))
    }

    /// Staggered card that lifts on hover.
    pub fn card(&self, index: usize) -> Option<Motion> {
        self.staggered(Trigger::InView, index)
            .map(|m| m.with_hover(100, CARD_LIFT_PX))
    }

    /// Staggered link that grows on hover.
    pub fn link(&self, trigger: Trigger, index: usize, scale: u16) -> Option<Motion> {
        self.staggered(trigger, index)
            .map(|m| m.with_hover(scale, 0))
    }

    /// List bullet, each one a little later than the previous.
    pub fn bullet(&self, index: usize) -> Option<Motion> {
        self.slide_in(Trigger::InView, stagger_delay(index, BULLET_STAGGER_MS))
    }
}

fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}
