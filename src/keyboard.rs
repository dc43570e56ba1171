//! Keyboard section navigation
//!
//! Ctrl/Cmd + ArrowDown/ArrowUp steps through the named sections in page
//! order. No wraparound.

use crate::event::KeyPress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

impl Step {
    pub fn from_key(press: &KeyPress) -> Option<Self> {
        if !press.command_held() {
            return None;
        }
        match press.key.as_str() {
            "ArrowDown" => Some(Self::Next),
            "ArrowUp" => Some(Self::Previous),
            _ => None,
        }
    }
}

/// Index of the section straddling the probe line, the last match winning.
///
/// `spans` holds each named section's viewport `(top, bottom)`, `None` for
/// sections missing from the page.
pub fn current_section(spans: &[Option<(f64, f64)>], probe_line: f64) -> Option<usize> {
    spans
        .iter()
        .enumerate()
        .filter_map(|(i, span)| span.map(|s| (i, s)))
        .filter(|(_, (top, bottom))| *top <= probe_line && *bottom > probe_line)
        .map(|(i, _)| i)
        .last()
}

/// Section to move to, if any.
///
/// With no current section, `Next` goes to the first one and `Previous`
/// stays put.
pub fn step_target(current: Option<usize>, step: Step, section_count: usize) -> Option<usize> {
    match (step, current) {
        (Step::Next, None) if section_count > 0 => Some(0),
        (Step::Next, Some(i)) if i + 1 < section_count => Some(i + 1),
        (Step::Previous, Some(i)) if i > 0 => Some(i - 1),
        _ => None,
    }
}
