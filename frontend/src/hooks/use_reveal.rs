use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

use crate::reveal::{
    is_nav_target, stagger_delays, RevealConfig, RevealEffect, RevealSignal, RevealState,
};

/// Class added next to a `reveal-*` class once its flag is set.
pub fn revealed(visible: bool) -> Option<&'static str> {
    visible.then_some("is-visible")
}

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::MAX)
}

#[derive(Clone)]
struct RevealDriver {
    config: RevealConfig,
    machine: Rc<RefCell<RevealState>>,
    child_timer: Rc<RefCell<Option<Timeout>>>,
    view: UseStateHandle<RevealState>,
}

impl RevealDriver {
    fn dispatch(&self, signal: RevealSignal) {
        let transition = self.machine.borrow().apply(&self.config, signal);
        *self.machine.borrow_mut() = transition.next;

        match transition.effect {
            RevealEffect::ScheduleChild(delay) => {
                let driver = self.clone();
                let timer = Timeout::new(delay, move || {
                    driver.dispatch(RevealSignal::ChildTimerFired);
                });
                *self.child_timer.borrow_mut() = Some(timer);
            }
            RevealEffect::CancelChild => {
                self.child_timer.borrow_mut().take();
            }
            RevealEffect::None => {}
        }

        self.view.set(transition.next);
    }
}

/// Browser resources owned by one `use_reveal` instance. Dropping it detaches
/// everything, which also breaks the driver <-> timer reference cycles.
struct RevealListeners {
    observer: Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)>,
    nav_click: Option<(Document, Closure<dyn FnMut(Event)>)>,
    nav_timer: Rc<RefCell<Option<Timeout>>>,
    child_timer: Rc<RefCell<Option<Timeout>>>,
}

impl Drop for RevealListeners {
    fn drop(&mut self) {
        if let Some((observer, _)) = &self.observer {
            observer.disconnect();
        }
        if let Some((document, callback)) = &self.nav_click {
            let _ = document
                .remove_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        }
        self.nav_timer.borrow_mut().take();
        self.child_timer.borrow_mut().take();
    }
}

fn observe_section(
    driver: &RevealDriver,
    node: &NodeRef,
) -> Result<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>), JsValue> {
    let element = node
        .cast::<Element>()
        .ok_or_else(|| JsValue::from_str("section is not mounted"))?;

    let callback_driver = driver.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let signal = if entry.is_intersecting() {
                RevealSignal::Entered
            } else {
                RevealSignal::Exited { viewport_width: viewport_width() }
            };
            callback_driver.dispatch(signal);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(driver.config.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(&element);

    Ok((observer, callback))
}

fn clicked_href(event: &Event) -> Option<String> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("a").ok().flatten())
        .and_then(|anchor| anchor.get_attribute("href"))
}

fn listen_for_nav_clicks(
    driver: &RevealDriver,
    section_id: &'static str,
    nav_timer: Rc<RefCell<Option<Timeout>>>,
) -> Result<(Document, Closure<dyn FnMut(Event)>), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let driver = driver.clone();
    let callback = Closure::wrap(Box::new(move |event: Event| {
        if !is_nav_target(clicked_href(&event).as_deref(), section_id) {
            return;
        }
        let driver = driver.clone();
        let delay = driver.config.nav_delay_ms;
        *nav_timer.borrow_mut() = Some(Timeout::new(delay, move || {
            driver.dispatch(RevealSignal::NavClicked);
        }));
    }) as Box<dyn FnMut(Event)>);

    document.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
    Ok((document, callback))
}

/// Drives a section's reveal flags from viewport intersection and from
/// clicks on `a[href="#<section_id>"]` anywhere in the document.
#[hook]
pub fn use_reveal(section_id: &'static str, node: NodeRef, config: RevealConfig) -> RevealState {
    let view = use_state_eq(RevealState::default);
    let machine = use_mut_ref(RevealState::default);
    let child_timer = use_mut_ref(|| None::<Timeout>);

    let driver = RevealDriver {
        config,
        machine,
        child_timer,
        view: view.clone(),
    };

    use_effect_with_deps(
        move |_| {
            let nav_timer = Rc::new(RefCell::new(None::<Timeout>));

            let observer = observe_section(&driver, &node)
                .map_err(|e| warn!("Reveal observer for #{} unavailable: {:?}", section_id, e))
                .ok();
            let nav_click = listen_for_nav_clicks(&driver, section_id, nav_timer.clone())
                .map_err(|e| warn!("Nav listener for #{} unavailable: {:?}", section_id, e))
                .ok();

            driver.dispatch(RevealSignal::Mounted { viewport_width: viewport_width() });

            let listeners = RevealListeners {
                observer,
                nav_click,
                nav_timer,
                child_timer: driver.child_timer.clone(),
            };
            move || drop(listeners)
        },
        (),
    );

    *view
}

/// Reveal driven by mount alone, for sections rendered as their own page.
/// Nothing resets it afterwards; only the child timer runs.
#[hook]
pub fn use_page_reveal(config: RevealConfig) -> RevealState {
    let view = use_state_eq(RevealState::default);
    let machine = use_mut_ref(RevealState::default);
    let child_timer = use_mut_ref(|| None::<Timeout>);

    let driver = RevealDriver {
        config: config.reveal_on_mount(),
        machine,
        child_timer,
        view: view.clone(),
    };

    use_effect_with_deps(
        move |_| {
            driver.dispatch(RevealSignal::Mounted { viewport_width: viewport_width() });
            let child_timer = driver.child_timer.clone();
            move || {
                child_timer.borrow_mut().take();
            }
        },
        (),
    );

    *view
}

/// Reveals `count` items one after another once `active` turns true, and
/// hides them all again when it turns false.
#[hook]
pub fn use_stagger(active: bool, count: usize, base_ms: u32, step_ms: u32) -> Vec<bool> {
    let shown = use_state_eq(|| vec![false; count]);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |active| {
                let mut timers = Vec::new();
                if *active {
                    let progress = Rc::new(RefCell::new(vec![false; count]));
                    for (index, delay) in stagger_delays(count, base_ms, step_ms).into_iter().enumerate() {
                        let shown = shown.clone();
                        let progress = progress.clone();
                        timers.push(Timeout::new(delay, move || {
                            progress.borrow_mut()[index] = true;
                            shown.set(progress.borrow().clone());
                        }));
                    }
                } else {
                    shown.set(vec![false; count]);
                }
                move || drop(timers)
            },
            active,
        );
    }

    (*shown).clone()
}

/// One-shot entrance for content that is on screen at load (the hero).
#[hook]
pub fn use_mount_reveal() -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                visible.set(true);
                || ()
            },
            (),
        );
    }
    *visible
}

/// Inline style for per-item transition delays that CSS classes can't express.
pub fn transition_delay(ms: u32) -> String {
    format!("transition-delay: {}ms;", ms)
}
