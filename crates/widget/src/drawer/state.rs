//! The visibility state machine of a [`Drawer`](super::Drawer).
use crate::core::time::{Duration, Instant};

/// The phase of a [`Drawer`](super::Drawer).
///
/// With [`Transition::Instant`] only [`Phase::Closed`] and [`Phase::Open`]
/// are ever observed.
///
/// A transitional phase entered from an event has no start until the next
/// frame observes it, so its full duration is always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The side content is detached.
    Closed,
    /// The side content is attached and entering.
    Opening {
        /// When the phase started, once a frame has observed it.
        started: Option<Instant>,
    },
    /// The side content is attached.
    Open,
    /// The side content is still attached, but leaving.
    Closing {
        /// When the phase started, once a frame has observed it.
        started: Option<Instant>,
    },
}

impl Phase {
    /// Returns true if the side content is attached in this phase.
    pub fn is_visible(self) -> bool {
        self != Phase::Closed
    }

    /// Returns true if the phase is heading towards [`Phase::Open`].
    pub fn is_opening_or_open(self) -> bool {
        matches!(self, Phase::Opening { .. } | Phase::Open)
    }
}

/// How a [`Drawer`](super::Drawer) moves between [`Phase::Closed`] and
/// [`Phase::Open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Phases change immediately.
    #[default]
    Instant,
    /// Entering and leaving each take the given [`Duration`].
    Timed(Duration),
}

/// The persistent state of a [`Drawer`](super::Drawer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    phase: Phase,
    last_open: bool,
}

impl State {
    /// Creates a closed [`State`] that has not seen any `open` input yet.
    pub fn new() -> Self {
        Self {
            phase: Phase::Closed,
            last_open: false,
        }
    }

    /// Returns the current [`Phase`].
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true if the side content is attached.
    pub fn is_visible(&self) -> bool {
        self.phase.is_visible()
    }

    /// Feeds the current `open` input.
    ///
    /// Only changes of the input move the drawer, so a drawer dismissed while
    /// `open` stays `true` remains closed until `open` goes `false` and back.
    ///
    /// Returns true if the [`Phase`] changed.
    pub fn sync(&mut self, open: bool, transition: Transition, now: Instant) -> bool {
        let before = self.phase;

        if open != self.last_open {
            self.last_open = open;

            if open {
                self.show(transition, Some(now));
            } else {
                self.hide(transition, Some(now));
            }
        }

        let _ = self.advance(transition, now);

        before != self.phase
    }

    /// Closes the drawer from the inside, as an overlay press or a back
    /// navigation does.
    ///
    /// A timed [`Phase::Closing`] starts at the next frame.
    ///
    /// Returns false if the drawer was already closed or closing.
    pub fn dismiss(&mut self, transition: Transition) -> bool {
        if !self.phase.is_opening_or_open() {
            return false;
        }

        self.hide(transition, None);

        log::debug!("Drawer dismissed, now {:?}", self.phase);

        true
    }

    /// Stamps transitional phases that have not started yet and completes
    /// the ones whose time is up.
    ///
    /// Returns true if the [`Phase`] changed.
    pub fn advance(&mut self, transition: Transition, now: Instant) -> bool {
        let elapsed = |started: Instant| match transition {
            Transition::Instant => true,
            Transition::Timed(duration) => now.duration_since(started) >= duration,
        };

        let next = match self.phase {
            Phase::Opening { started: None } => Phase::Opening { started: Some(now) },
            Phase::Closing { started: None } => Phase::Closing { started: Some(now) },
            Phase::Opening {
                started: Some(started),
            } if elapsed(started) => Phase::Open,
            Phase::Closing {
                started: Some(started),
            } if elapsed(started) => Phase::Closed,
            phase => phase,
        };

        if next == self.phase {
            return false;
        }

        log::trace!("Drawer phase {:?} -> {next:?}", self.phase);
        self.phase = next;

        true
    }

    fn show(&mut self, transition: Transition, started: Option<Instant>) {
        if self.phase.is_opening_or_open() {
            return;
        }

        self.phase = match transition {
            Transition::Instant => Phase::Open,
            Transition::Timed(_) => Phase::Opening { started },
        };
    }

    fn hide(&mut self, transition: Transition, started: Option<Instant>) {
        if !self.phase.is_opening_or_open() {
            return;
        }

        self.phase = match transition {
            Transition::Instant => Phase::Closed,
            Transition::Timed(_) => Phase::Closing { started },
        };
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_drawer_follows_the_input() {
        let now = Instant::now();
        let mut state = State::new();

        assert!(!state.sync(false, Transition::Instant, now));
        assert_eq!(state.phase(), Phase::Closed);

        assert!(state.sync(true, Transition::Instant, now));
        assert_eq!(state.phase(), Phase::Open);

        assert!(state.sync(false, Transition::Instant, now));
        assert_eq!(state.phase(), Phase::Closed);
    }

    #[test]
    fn rapid_toggling_converges_to_the_last_value() {
        let now = Instant::now();
        let mut state = State::new();

        for open in [true, false, true, false, true] {
            let _ = state.sync(open, Transition::Instant, now);
        }

        assert_eq!(state.phase(), Phase::Open);

        let _ = state.sync(false, Transition::Instant, now);
        assert!(!state.is_visible());
    }

    #[test]
    fn dismissed_drawer_waits_for_a_new_open_edge() {
        let now = Instant::now();
        let mut state = State::new();

        let _ = state.sync(true, Transition::Instant, now);
        assert!(state.dismiss(Transition::Instant));
        assert!(!state.dismiss(Transition::Instant));

        let _ = state.sync(true, Transition::Instant, now);
        assert_eq!(state.phase(), Phase::Closed);

        let _ = state.sync(false, Transition::Instant, now);
        let _ = state.sync(true, Transition::Instant, now);
        assert_eq!(state.phase(), Phase::Open);
    }

    #[test]
    fn timed_drawer_passes_through_transitional_phases() {
        let transition = Transition::Timed(Duration::from_millis(200));
        let start = Instant::now();
        let mut state = State::new();

        let _ = state.sync(true, transition, start);
        assert_eq!(state.phase(), Phase::Opening { started: Some(start) });
        assert!(state.is_visible());

        assert!(!state.advance(transition, start + Duration::from_millis(100)));
        assert!(state.advance(transition, start + Duration::from_millis(200)));
        assert_eq!(state.phase(), Phase::Open);

        let later = start + Duration::from_millis(300);
        let _ = state.sync(false, transition, later);
        assert_eq!(state.phase(), Phase::Closing { started: Some(later) });
        assert!(state.is_visible());

        assert!(state.advance(transition, later + Duration::from_secs(1)));
        assert_eq!(state.phase(), Phase::Closed);
    }

    #[test]
    fn reopening_while_closing_goes_back_to_opening() {
        let transition = Transition::Timed(Duration::from_millis(200));
        let start = Instant::now();
        let mut state = State::new();

        let _ = state.sync(true, transition, start);
        let _ = state.advance(transition, start + Duration::from_secs(1));

        let closing = start + Duration::from_secs(2);
        let _ = state.sync(false, transition, closing);
        let _ = state.sync(true, transition, closing);

        assert_eq!(state.phase(), Phase::Opening { started: Some(closing) });
    }

    #[test]
    fn dismissal_after_an_idle_gap_starts_closing_at_the_next_frame() {
        let transition = Transition::Timed(Duration::from_millis(200));
        let start = Instant::now();
        let mut state = State::new();

        let _ = state.sync(true, transition, start);
        let _ = state.advance(transition, start + Duration::from_secs(1));
        assert_eq!(state.phase(), Phase::Open);

        assert!(state.dismiss(transition));
        assert_eq!(state.phase(), Phase::Closing { started: None });

        let next_frame = start + Duration::from_secs(11);
        let _ = state.sync(true, transition, next_frame);
        assert_eq!(
            state.phase(),
            Phase::Closing {
                started: Some(next_frame)
            }
        );

        let _ = state.sync(true, transition, next_frame + Duration::from_millis(5));
        assert!(state.is_visible());

        let _ = state.sync(true, transition, next_frame + Duration::from_millis(200));
        assert_eq!(state.phase(), Phase::Closed);
    }
}
