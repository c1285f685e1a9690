// Pull-to-refresh gesture tracking, kept free of DOM types so it can be driven
// by synthetic event sequences.
use std::fmt;

use super::settings::PullConfig;

/// An in-progress drag that started while the viewport was at the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    pub origin_y: f64,
    /// Signed pixels dragged since `origin_y`; negative while pushing up.
    pub distance: f64,
    pub armed: bool,
}

impl GestureSession {
    fn open(origin_y: f64) -> Self {
        Self {
            origin_y,
            distance: 0.0,
            armed: false,
        }
    }

    fn track(&mut self, y: f64, config: &PullConfig) {
        self.distance = y - self.origin_y;
        self.armed = self.distance > config.arm_threshold;
    }

    pub fn offset(&self, cap: f64) -> f64 {
        self.distance.max(0.0).min(cap)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullPhase {
    Idle,
    Tracking { armed: bool },
}

/// Derived rendering signal for the pull indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PullFeedback {
    /// Visual travel in `0..=cap`.
    pub offset: f64,
    pub armed: bool,
}

impl PullFeedback {
    pub fn is_visible(&self) -> bool {
        self.offset > 0.0
    }

    /// The indicator only starts sliding once the pull is past the arm threshold.
    pub fn indicator_shift(&self, arm_threshold: f64) -> f64 {
        (self.offset - arm_threshold).max(0.0)
    }

    pub fn content_opacity(&self) -> f64 {
        if self.armed { 0.5 } else { 1.0 }
    }

    pub fn hint(&self) -> &'static str {
        if self.armed {
            "Soltar para actualizar"
        } else {
            "Arrastra para actualizar"
        }
    }
}

/// Pointer events as delivered by the host runtime.
pub trait GestureInput {
    /// Pointer down at `y` while the viewport is scrolled by `scroll_offset`.
    fn start(&mut self, y: f64, scroll_offset: f64);
    /// Returns true when the move is a downward pull the host should keep
    /// from scrolling the page.
    fn move_to(&mut self, y: f64, scroll_offset: f64) -> bool;
    /// Pointer up. Returns whether a refresh was requested.
    fn end(&mut self) -> bool;
    /// Pointer cancelled by the platform; never requests a refresh.
    fn cancel(&mut self);
}

pub struct PullController<F: FnMut() = Box<dyn FnMut()>> {
    config: PullConfig,
    session: Option<GestureSession>,
    on_refresh: F,
}

impl<F: FnMut()> PullController<F> {
    pub fn new(config: PullConfig, on_refresh: F) -> Self {
        Self {
            config: config.sanitized(),
            session: None,
            on_refresh,
        }
    }

    /// Applies to the open session from the next move onwards.
    pub fn set_config(&mut self, config: PullConfig) {
        self.config = config.sanitized();
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    pub fn phase(&self) -> PullPhase {
        match self.session {
            Some(s) => PullPhase::Tracking { armed: s.armed },
            None => PullPhase::Idle,
        }
    }

    pub fn feedback(&self) -> PullFeedback {
        match self.session {
            Some(s) => PullFeedback {
                offset: s.offset(self.config.cap),
                armed: s.armed,
            },
            None => PullFeedback::default(),
        }
    }
}

impl<F: FnMut()> GestureInput for PullController<F> {
    fn start(&mut self, y: f64, scroll_offset: f64) {
        if scroll_offset == 0.0 {
            self.session = Some(GestureSession::open(y));
        }
    }

    // Scrolling away from the top mid-gesture pauses tracking but keeps the
    // session open; the armed flag keeps its last value.
    fn move_to(&mut self, y: f64, scroll_offset: f64) -> bool {
        if scroll_offset > 0.0 {
            return false;
        }
        let config = self.config;
        match self.session.as_mut() {
            Some(session) => {
                session.track(y, &config);
                session.distance > 0.0
            }
            None => false,
        }
    }

    fn end(&mut self) -> bool {
        let fire = matches!(self.session.take(), Some(s) if s.armed);
        if fire {
            (self.on_refresh)();
        }
        fire
    }

    fn cancel(&mut self) {
        self.session = None;
    }
}

impl<F: FnMut()> fmt::Debug for PullController<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PullController")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(config: PullConfig) -> (PullController<impl FnMut()>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        (PullController::new(config, move || c.set(c.get() + 1)), calls)
    }

    fn standard() -> PullConfig {
        PullConfig {
            arm_threshold: 80.0,
            cap: 120.0,
        }
    }

    #[test]
    fn start_away_from_top_stays_idle() {
        let (mut pc, calls) = counting(standard());
        pc.start(100.0, 12.0);
        assert_eq!(pc.phase(), PullPhase::Idle);
        assert!(!pc.move_to(300.0, 0.0));
        assert!(!pc.end());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn retracting_below_threshold_disarms() {
        let (mut pc, calls) = counting(standard());
        pc.start(100.0, 0.0);

        assert!(pc.move_to(150.0, 0.0));
        assert_eq!(pc.feedback(), PullFeedback { offset: 50.0, armed: false });

        pc.move_to(200.0, 0.0);
        assert_eq!(pc.feedback(), PullFeedback { offset: 100.0, armed: true });
        assert_eq!(pc.phase(), PullPhase::Tracking { armed: true });

        pc.move_to(170.0, 0.0);
        assert_eq!(pc.feedback(), PullFeedback { offset: 70.0, armed: false });

        assert!(!pc.end());
        assert_eq!(calls.get(), 0);
        assert_eq!(pc.phase(), PullPhase::Idle);
        assert_eq!(pc.feedback(), PullFeedback::default());
    }

    #[test]
    fn release_past_threshold_refreshes_once() {
        let (mut pc, calls) = counting(standard());
        pc.start(100.0, 0.0);
        pc.move_to(230.0, 0.0);
        let fb = pc.feedback();
        assert_eq!(fb.offset, 120.0);
        assert!(fb.armed);

        assert!(pc.end());
        assert_eq!(calls.get(), 1);
        // a second release without a new session is a no-op
        assert!(!pc.end());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn upward_drag_keeps_session_open() {
        let (mut pc, calls) = counting(standard());
        pc.start(300.0, 0.0);
        assert!(!pc.move_to(250.0, 0.0));
        assert!(pc.is_tracking());
        assert_eq!(pc.feedback().offset, 0.0);
        assert_eq!(pc.session().map(|s| s.distance), Some(-50.0));

        // reversing direction still counts from where the touch began
        assert!(pc.move_to(390.0, 0.0));
        assert!(pc.end());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn moves_while_scrolled_are_ignored_but_session_survives() {
        let (mut pc, calls) = counting(standard());
        pc.start(0.0, 0.0);
        pc.move_to(100.0, 0.0);
        assert!(!pc.move_to(10.0, 40.0));
        assert_eq!(pc.feedback(), PullFeedback { offset: 100.0, armed: true });
        assert!(pc.end());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn cancel_never_refreshes() {
        let (mut pc, calls) = counting(standard());
        pc.start(0.0, 0.0);
        pc.move_to(200.0, 0.0);
        pc.cancel();
        assert_eq!(pc.phase(), PullPhase::Idle);
        assert!(!pc.end());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn exactly_at_threshold_is_not_armed() {
        let (mut pc, _) = counting(standard());
        pc.start(0.0, 0.0);
        pc.move_to(80.0, 0.0);
        assert!(!pc.feedback().armed);
        pc.move_to(80.5, 0.0);
        assert!(pc.feedback().armed);
    }

    #[test]
    fn restart_replaces_open_session() {
        let (mut pc, _) = counting(standard());
        pc.start(0.0, 0.0);
        pc.move_to(100.0, 0.0);
        pc.start(500.0, 0.0);
        assert_eq!(pc.session().map(|s| (s.origin_y, s.distance)), Some((500.0, 0.0)));
        assert_eq!(pc.phase(), PullPhase::Tracking { armed: false });
    }

    #[test]
    fn config_change_applies_on_next_move() {
        let (mut pc, _) = counting(standard());
        pc.start(0.0, 0.0);
        pc.move_to(60.0, 0.0);
        assert!(!pc.feedback().armed);
        pc.set_config(PullConfig {
            arm_threshold: 40.0,
            cap: 50.0,
        });
        pc.move_to(60.0, 0.0);
        assert_eq!(pc.feedback(), PullFeedback { offset: 50.0, armed: true });
    }

    #[test]
    fn independent_controllers_do_not_share_sessions() {
        let (mut outer, outer_calls) = counting(standard());
        let (mut inner, inner_calls) = counting(standard());
        outer.start(0.0, 0.0);
        inner.start(0.0, 30.0);
        outer.move_to(200.0, 0.0);
        inner.move_to(200.0, 0.0);
        assert!(outer.end());
        assert!(!inner.end());
        assert_eq!((outer_calls.get(), inner_calls.get()), (1, 0));
    }

    #[test]
    fn feedback_presentation() {
        let idle = PullFeedback::default();
        assert!(!idle.is_visible());
        assert_eq!(idle.content_opacity(), 1.0);
        assert_eq!(idle.hint(), "Arrastra para actualizar");

        let armed = PullFeedback { offset: 110.0, armed: true };
        assert!(armed.is_visible());
        assert_eq!(armed.indicator_shift(80.0), 30.0);
        assert_eq!(armed.content_opacity(), 0.5);
        assert_eq!(armed.hint(), "Soltar para actualizar");

        let short = PullFeedback { offset: 40.0, armed: false };
        assert_eq!(short.indicator_shift(80.0), 0.0);
    }

    #[test]
    fn boxed_callback_is_the_default() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let mut pc: PullController = PullController::new(
            standard(),
            Box::new(move || h.set(h.get() + 1)) as Box<dyn FnMut()>,
        );
        pc.start(0.0, 0.0);
        pc.move_to(81.0, 0.0);
        pc.end();
        assert_eq!(hits.get(), 1);
        assert!(format!("{pc:?}").starts_with("PullController"));
    }

    fn arb_moves() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-400.0..400.0_f64, 0..12)
    }

    proptest! {
        #[test]
        fn scrolled_start_never_refreshes(
            origin in 0.0..800.0_f64,
            scroll in 0.5..2000.0_f64,
            moves in arb_moves(),
        ) {
            let (mut pc, calls) = counting(standard());
            pc.start(origin, scroll);
            for dy in &moves {
                pc.move_to(origin + dy, 0.0);
            }
            prop_assert!(!pc.end());
            prop_assert_eq!(calls.get(), 0);
        }

        #[test]
        fn peak_at_or_below_threshold_never_refreshes(
            origin in 0.0..800.0_f64,
            moves in prop::collection::vec(-400.0..79.0_f64, 0..12),
        ) {
            let (mut pc, calls) = counting(standard());
            pc.start(origin, 0.0);
            for dy in &moves {
                pc.move_to(origin + dy, 0.0);
            }
            pc.end();
            prop_assert_eq!(calls.get(), 0);
        }

        #[test]
        fn armed_at_release_refreshes_exactly_once(
            origin in 0.0..800.0_f64,
            moves in arb_moves(),
            last in 80.001..600.0_f64,
        ) {
            let (mut pc, calls) = counting(standard());
            pc.start(origin, 0.0);
            for dy in &moves {
                pc.move_to(origin + dy, 0.0);
            }
            pc.move_to(origin + last, 0.0);
            prop_assert!(pc.end());
            prop_assert_eq!(calls.get(), 1);
        }

        #[test]
        fn every_release_resets_the_session(
            origin in 0.0..800.0_f64,
            moves in arb_moves(),
            next in 0.0..800.0_f64,
        ) {
            let (mut pc, _) = counting(standard());
            pc.start(origin, 0.0);
            for dy in &moves {
                pc.move_to(origin + dy, 0.0);
            }
            pc.end();
            prop_assert_eq!(pc.phase(), PullPhase::Idle);
            pc.start(next, 0.0);
            prop_assert_eq!(pc.session().map(|s| s.distance), Some(0.0));
            prop_assert_eq!(pc.feedback(), PullFeedback::default());
        }

        #[test]
        fn offset_is_clamped_distance(
            origin in -500.0..800.0_f64,
            y in -1000.0..1500.0_f64,
        ) {
            let (mut pc, _) = counting(standard());
            pc.start(origin, 0.0);
            pc.move_to(y, 0.0);
            let expected = (y - origin).max(0.0).min(120.0);
            let fb = pc.feedback();
            prop_assert_eq!(fb.offset, expected);
            prop_assert!(fb.offset >= 0.0 && fb.offset <= 120.0);
        }
    }
}
