use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::error::{ChartError, ChartResult};

/// Zoom and pan policy for the index viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportPolicy {
    /// Smallest window length reachable by zooming in.
    pub min_points: usize,
    /// Window length change per zoom step.
    pub step: usize,
}

impl Default for ViewportPolicy {
    fn default() -> Self {
        Self {
            min_points: 5,
            step: 4,
        }
    }
}

impl ViewportPolicy {
    /// Rejects policies that would let a multi-point window collapse to a
    /// single index, which the consistency check treats as corrupt.
    pub fn validate(self) -> ChartResult<Self> {
        if self.min_points < 2 || self.step == 0 {
            return Err(ChartError::InvalidPolicy {
                min_points: self.min_points,
                step: self.step,
            });
        }
        Ok(self)
    }
}

/// Inclusive index range over the chart-point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewportWindow {
    pub start_index: usize,
    pub end_index: usize,
}

impl ViewportWindow {
    #[must_use]
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    /// Full range for `total` points, `{0, 0}` when empty.
    #[must_use]
    pub fn full(total: usize) -> Self {
        Self::new(0, total.saturating_sub(1))
    }

    /// Number of indices covered, counting both ends.
    #[must_use]
    pub fn length(self) -> usize {
        self.end_index.saturating_sub(self.start_index) + 1
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index >= self.start_index && index <= self.end_index
    }

    /// `false` when the window overruns `total` or is not strictly ordered.
    ///
    /// A single-point sequence is the one case where `start == end` is valid.
    #[must_use]
    pub fn is_consistent(self, total: usize) -> bool {
        if total <= 1 {
            return self.start_index == 0 && self.end_index == 0;
        }
        self.end_index < total && self.start_index < self.end_index
    }
}

/// Requested change to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewportCommand {
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    Reset,
}

/// Result of one viewport state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportTransition {
    pub window: ViewportWindow,
    /// Set when a corrupt input window was normalized to the full range.
    pub healed: bool,
}

impl ViewportTransition {
    fn new(window: ViewportWindow, healed: bool) -> Self {
        Self { window, healed }
    }
}

/// Applies `command` to `window` over `total` points.
///
/// Guards run in order: empty sequence, self-heal of a corrupt window, then
/// the command-specific floor/ceiling/boundary checks.
#[must_use]
pub fn transition(
    window: ViewportWindow,
    total: usize,
    policy: ViewportPolicy,
    command: ViewportCommand,
) -> ViewportTransition {
    if command == ViewportCommand::Reset {
        return ViewportTransition::new(ViewportWindow::full(total), false);
    }
    if total == 0 {
        return ViewportTransition::new(window, false);
    }

    let healed = !window.is_consistent(total);
    let window = if healed {
        ViewportWindow::full(total)
    } else {
        window
    };

    let next = match command {
        ViewportCommand::ZoomIn => zoom_in(window, total, policy),
        ViewportCommand::ZoomOut => zoom_out(window, total, policy),
        ViewportCommand::PanLeft => pan_left(window, total),
        ViewportCommand::PanRight => pan_right(window, total),
        ViewportCommand::Reset => ViewportWindow::full(total),
    };
    ViewportTransition::new(next, healed)
}

/// Shrinks the window by `policy.step` around its midpoint, down to
/// `policy.min_points`. Expects a consistent window.
#[must_use]
pub fn zoom_in(window: ViewportWindow, total: usize, policy: ViewportPolicy) -> ViewportWindow {
    let length = window.length();
    if length <= policy.min_points {
        return window;
    }
    let new_length = length.saturating_sub(policy.step).max(policy.min_points);
    recenter(window, new_length, total)
}

/// Grows the window by `policy.step` around its midpoint, up to `total`.
/// Expects a consistent window.
#[must_use]
pub fn zoom_out(window: ViewportWindow, total: usize, policy: ViewportPolicy) -> ViewportWindow {
    let length = window.length();
    if length >= total {
        return window;
    }
    let new_length = (length + policy.step).min(total);
    recenter(window, new_length, total)
}

/// Moves the window left by a third of its length, keeping the length.
#[must_use]
pub fn pan_left(window: ViewportWindow, total: usize) -> ViewportWindow {
    let length = window.length();
    if length >= total {
        return window;
    }
    let start = window.start_index.saturating_sub(pan_step(length));
    let end = (start + length - 1).min(total - 1);
    ViewportWindow::new(start, end)
}

/// Moves the window right by a third of its length, keeping the length.
#[must_use]
pub fn pan_right(window: ViewportWindow, total: usize) -> ViewportWindow {
    let length = window.length();
    if length >= total {
        return window;
    }
    let end = (window.end_index + pan_step(length)).min(total - 1);
    let start = (end + 1).saturating_sub(length);
    ViewportWindow::new(start, end)
}

fn pan_step(length: usize) -> usize {
    (length / 3).max(1)
}

/// Places a window of `new_length` on the midpoint of `window`, then shifts it
/// back inside `[0, total - 1]`.
fn recenter(window: ViewportWindow, new_length: usize, total: usize) -> ViewportWindow {
    let center = (window.start_index + window.end_index) as f64 / 2.0;
    // Half-up rounding keeps ties on the right of the midpoint.
    let raw_start = (center - (new_length as f64 - 1.0) / 2.0 + 0.5).floor();

    let mut start = if raw_start < 0.0 { 0 } else { raw_start as usize };
    let mut end = start + new_length - 1;
    if end > total - 1 {
        end = total - 1;
        start = total - new_length;
    }
    ViewportWindow::new(start, end)
}

/// Owns the window over a chart-point sequence of known length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportController {
    window: ViewportWindow,
    total_points: usize,
    policy: ViewportPolicy,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(0, ViewportPolicy::default())
    }
}

impl ViewportController {
    /// Creates a controller showing the full range. The policy is used as
    /// given; call [`ViewportPolicy::validate`] first for untrusted input.
    #[must_use]
    pub fn new(total_points: usize, policy: ViewportPolicy) -> Self {
        Self {
            window: ViewportWindow::full(total_points),
            total_points,
            policy,
        }
    }

    #[must_use]
    pub fn window(&self) -> ViewportWindow {
        self.window
    }

    #[must_use]
    pub fn total_points(&self) -> usize {
        self.total_points
    }

    #[must_use]
    pub fn policy(&self) -> ViewportPolicy {
        self.policy
    }

    /// Updates the sequence length, resetting to the full range when it changed.
    ///
    /// Returns `true` when the window was reset.
    pub fn resize(&mut self, total_points: usize) -> bool {
        if total_points == self.total_points {
            return false;
        }
        trace!(
            from = self.total_points,
            to = total_points,
            "viewport total changed"
        );
        self.total_points = total_points;
        self.reset();
        true
    }

    pub fn reset(&mut self) -> bool {
        self.apply(ViewportCommand::Reset)
    }

    pub fn zoom_in(&mut self) -> bool {
        self.apply(ViewportCommand::ZoomIn)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.apply(ViewportCommand::ZoomOut)
    }

    pub fn pan_left(&mut self) -> bool {
        self.apply(ViewportCommand::PanLeft)
    }

    pub fn pan_right(&mut self) -> bool {
        self.apply(ViewportCommand::PanRight)
    }

    /// Applies a command and returns `true` when the window changed.
    pub fn apply(&mut self, command: ViewportCommand) -> bool {
        let previous = self.window;
        let ViewportTransition { window, healed } =
            transition(previous, self.total_points, self.policy, command);
        if healed {
            warn!(
                start = previous.start_index,
                end = previous.end_index,
                total = self.total_points,
                "normalized inconsistent viewport window"
            );
        }
        self.window = window;
        trace!(
            ?command,
            start = window.start_index,
            end = window.end_index,
            "viewport transition"
        );
        window != previous
    }

    /// Replaces the window verbatim. Inconsistent windows are repaired by the
    /// next zoom or pan call.
    pub fn restore_window(&mut self, window: ViewportWindow) {
        self.window = window;
    }
}
