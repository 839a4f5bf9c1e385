//! Scroll-reveal state machine shared by every page section.
//!
//! The browser wiring lives in `hooks::use_reveal`; everything here is plain
//! data so the transitions can be exercised without a DOM.

/// Viewports narrower than this are treated as mobile layouts.
pub const SMALL_VIEWPORT_BREAKPOINT_PX: f64 = 640.0;
/// Below this the two-column section grids collapse to one column.
pub const SINGLE_COLUMN_BREAKPOINT_PX: f64 = 1024.0;
/// Wait after a nav-link click so smooth scrolling has started before revealing.
pub const NAV_SCROLL_DELAY_MS: u32 = 100;
/// Gap between a section fading in and its dependent animations (progress bars etc).
pub const CHILD_REVEAL_DELAY_MS: u32 = 500;
pub const PROJECT_CARD_BASE_DELAY_MS: u32 = 300;
pub const PROJECT_CARD_STEP_MS: u32 = 200;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the section that must be on screen, 0.0..=1.0.
    pub threshold: f64,
    /// Keep the section revealed once triggered on small viewports.
    pub hold_on_small_viewport: bool,
    /// Reveal on mount on small viewports without waiting for the observer.
    pub eager_on_small_viewport: bool,
    /// Reveal on mount at any width (standalone pages).
    pub reveal_on_mount: bool,
    /// Width below which the viewport counts as small.
    pub breakpoint_px: f64,
    pub child_delay_ms: u32,
    pub nav_delay_ms: u32,
}

impl RevealConfig {
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            hold_on_small_viewport: false,
            eager_on_small_viewport: false,
            reveal_on_mount: false,
            breakpoint_px: SMALL_VIEWPORT_BREAKPOINT_PX,
            child_delay_ms: CHILD_REVEAL_DELAY_MS,
            nav_delay_ms: NAV_SCROLL_DELAY_MS,
        }
    }

    pub const fn hold_on_small_viewport(self) -> Self {
        Self { hold_on_small_viewport: true, ..self }
    }

    pub const fn eager_on_small_viewport(self) -> Self {
        Self { eager_on_small_viewport: true, ..self }
    }

    pub const fn reveal_on_mount(self) -> Self {
        Self { reveal_on_mount: true, ..self }
    }

    pub const fn breakpoint(self, breakpoint_px: f64) -> Self {
        Self { breakpoint_px, ..self }
    }

    pub fn is_small_viewport(&self, viewport_width: f64) -> bool {
        viewport_width < self.breakpoint_px
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub section_visible: bool,
    pub child_visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealSignal {
    Mounted { viewport_width: f64 },
    Entered,
    Exited { viewport_width: f64 },
    /// A nav anchor pointing at the section was clicked and the scroll delay elapsed.
    NavClicked,
    ChildTimerFired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEffect {
    None,
    ScheduleChild(u32),
    CancelChild,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next: RevealState,
    pub effect: RevealEffect,
}

/// True when an anchor's `href` points at the section with `section_id`.
pub fn is_nav_target(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(|h| h.strip_prefix('#'))
        .map_or(false, |target| target == section_id)
}

/// Delay before each of `count` items is revealed, in order.
pub fn stagger_delays(count: usize, base_ms: u32, step_ms: u32) -> Vec<u32> {
    (0..count as u32).map(|i| base_ms + i * step_ms).collect()
}

impl RevealState {
    pub fn apply(self, config: &RevealConfig, signal: RevealSignal) -> Transition {
        match signal {
            RevealSignal::Mounted { viewport_width } => {
                let eager = config.eager_on_small_viewport && config.is_small_viewport(viewport_width);
                if config.reveal_on_mount || eager {
                    self.reveal(config)
                } else {
                    self.unchanged()
                }
            }
            RevealSignal::Entered | RevealSignal::NavClicked => self.reveal(config),
            RevealSignal::Exited { viewport_width } => {
                let held = config.hold_on_small_viewport && config.is_small_viewport(viewport_width);
                if held || self == RevealState::default() {
                    self.unchanged()
                } else {
                    Transition {
                        next: RevealState::default(),
                        effect: RevealEffect::CancelChild,
                    }
                }
            }
            RevealSignal::ChildTimerFired => {
                if self.section_visible {
                    Transition {
                        next: RevealState { child_visible: true, ..self },
                        effect: RevealEffect::None,
                    }
                } else {
                    self.unchanged()
                }
            }
        }
    }

    fn reveal(self, config: &RevealConfig) -> Transition {
        if self.section_visible {
            return self.unchanged();
        }
        Transition {
            next: RevealState { section_visible: true, ..self },
            effect: RevealEffect::ScheduleChild(config.child_delay_ms),
        }
    }

    fn unchanged(self) -> Transition {
        Transition { next: self, effect: RevealEffect::None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: f64 = 1280.0;
    const NARROW: f64 = 390.0;

    fn run(config: &RevealConfig, signals: &[RevealSignal]) -> RevealState {
        signals
            .iter()
            .fold(RevealState::default(), |state, signal| state.apply(config, *signal).next)
    }

    #[test]
    fn entering_reveals_and_schedules_children() {
        let config = RevealConfig::new(0.3);
        let t = RevealState::default().apply(&config, RevealSignal::Entered);

        assert!(t.next.section_visible);
        assert!(!t.next.child_visible);
        assert_eq!(t.effect, RevealEffect::ScheduleChild(CHILD_REVEAL_DELAY_MS));
    }

    #[test]
    fn child_flag_follows_timer() {
        let config = RevealConfig::new(0.3);
        let state = run(&config, &[RevealSignal::Entered, RevealSignal::ChildTimerFired]);
        assert_eq!(state, RevealState { section_visible: true, child_visible: true });
    }

    #[test]
    fn stale_child_timer_is_ignored_after_reset() {
        let config = RevealConfig::new(0.3);
        let state = run(
            &config,
            &[
                RevealSignal::Entered,
                RevealSignal::Exited { viewport_width: WIDE },
                RevealSignal::ChildTimerFired,
            ],
        );
        assert_eq!(state, RevealState::default());
    }

    #[test]
    fn exit_on_wide_viewport_resets() {
        let config = RevealConfig::new(0.1).hold_on_small_viewport();
        let visible = run(&config, &[RevealSignal::Entered, RevealSignal::ChildTimerFired]);

        let t = visible.apply(&config, RevealSignal::Exited { viewport_width: 640.0 });
        assert_eq!(t.next, RevealState::default());
        assert_eq!(t.effect, RevealEffect::CancelChild);
    }

    #[test]
    fn exit_on_narrow_viewport_holds_when_configured() {
        let config = RevealConfig::new(0.1).hold_on_small_viewport();
        let visible = run(&config, &[RevealSignal::Entered, RevealSignal::ChildTimerFired]);

        let t = visible.apply(&config, RevealSignal::Exited { viewport_width: 639.0 });
        assert_eq!(t.next, visible);
        assert_eq!(t.effect, RevealEffect::None);
    }

    #[test]
    fn exit_on_narrow_viewport_resets_without_hold() {
        let config = RevealConfig::new(0.5);
        let state = run(
            &config,
            &[RevealSignal::Entered, RevealSignal::Exited { viewport_width: NARROW }],
        );
        assert_eq!(state, RevealState::default());
    }

    #[test]
    fn retrigger_while_visible_is_idempotent() {
        let config = RevealConfig::new(0.3);
        let visible = run(&config, &[RevealSignal::Entered]);

        for signal in [RevealSignal::Entered, RevealSignal::NavClicked] {
            let t = visible.apply(&config, signal);
            assert_eq!(t.next, visible);
            assert_eq!(t.effect, RevealEffect::None);
        }
    }

    #[test]
    fn nav_click_reveals_regardless_of_scroll() {
        let config = RevealConfig::new(0.5);
        let t = RevealState::default().apply(&config, RevealSignal::NavClicked);
        assert!(t.next.section_visible);
        assert_eq!(t.effect, RevealEffect::ScheduleChild(CHILD_REVEAL_DELAY_MS));
    }

    #[test]
    fn eager_sections_reveal_on_small_mount_only() {
        let config = RevealConfig::new(0.3).eager_on_small_viewport();

        let small = RevealState::default().apply(&config, RevealSignal::Mounted { viewport_width: NARROW });
        assert!(small.next.section_visible);

        let wide = RevealState::default().apply(&config, RevealSignal::Mounted { viewport_width: WIDE });
        assert_eq!(wide.next, RevealState::default());

        let lazy = RevealConfig::new(0.3);
        let small_lazy = RevealState::default().apply(&lazy, RevealSignal::Mounted { viewport_width: NARROW });
        assert_eq!(small_lazy.next, RevealState::default());
    }

    #[test]
    fn custom_breakpoint_widens_the_hold() {
        let config = RevealConfig::new(0.1)
            .hold_on_small_viewport()
            .breakpoint(SINGLE_COLUMN_BREAKPOINT_PX);
        let visible = run(&config, &[RevealSignal::Entered]);

        let tablet = visible.apply(&config, RevealSignal::Exited { viewport_width: 800.0 });
        assert_eq!(tablet.next, visible);

        let desktop = visible.apply(&config, RevealSignal::Exited { viewport_width: 1024.0 });
        assert_eq!(desktop.next, RevealState::default());

        let default_config = RevealConfig::new(0.1).hold_on_small_viewport();
        let reset = visible.apply(&default_config, RevealSignal::Exited { viewport_width: 800.0 });
        assert_eq!(reset.next, RevealState::default());
    }

    #[test]
    fn mount_reveal_then_child_timer() {
        let config = RevealConfig::new(0.1).reveal_on_mount();

        let mounted = RevealState::default().apply(&config, RevealSignal::Mounted { viewport_width: WIDE });
        assert_eq!(mounted.next, RevealState { section_visible: true, child_visible: false });
        assert_eq!(mounted.effect, RevealEffect::ScheduleChild(CHILD_REVEAL_DELAY_MS));

        let fired = mounted.next.apply(&config, RevealSignal::ChildTimerFired);
        assert_eq!(fired.next, RevealState { section_visible: true, child_visible: true });
    }

    #[test]
    fn nav_target_matches_hash_href_only() {
        assert!(is_nav_target(Some("#contact"), "contact"));
        assert!(!is_nav_target(Some("#about"), "contact"));
        assert!(!is_nav_target(Some("contact"), "contact"));
        assert!(!is_nav_target(Some("/#contact"), "contact"));
        assert!(!is_nav_target(None, "contact"));
    }

    #[test]
    fn project_cards_stagger() {
        assert_eq!(
            stagger_delays(5, PROJECT_CARD_BASE_DELAY_MS, PROJECT_CARD_STEP_MS),
            vec![300, 500, 700, 900, 1100]
        );
        assert!(stagger_delays(0, 300, 200).is_empty());
    }
}
