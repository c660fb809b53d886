//! Leptos LongPress Utilities
//!
//! Long-press recognition for Leptos using mouse and touch events.
//! A pure press state machine drives a 0-100 progress value; movement
//! beyond a threshold cancels the press before it completes.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::{Callable, Callback};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, TouchEvent};

/// Hold duration for a completed long press
pub const LONG_PRESS_DURATION_MS: u32 = 800;
/// Progress tick interval
pub const TICK_INTERVAL_MS: u32 = 10;
/// Movement beyond this on either axis cancels the press
pub const MOVE_CANCEL_THRESHOLD_PX: f64 = 10.0;

/// Presses starting on these elements never begin a long press
const DEFAULT_IGNORED_SELECTOR: &str = "button, a, input";

/// Press state for one bound element
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PressPhase {
    #[default]
    Idle,
    Pressing {
        start_x: f64,
        start_y: f64,
        progress: f64,
    },
    Completed,
}

/// Outcome of a progress tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// No press in flight
    Ignored,
    /// Still holding, progress advanced
    Advanced(f64),
    /// Hold duration reached
    Completed,
}

/// Outcome of a pointer movement
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Movement {
    /// No press in flight
    Ignored,
    /// Within the threshold, press continues
    Held,
    /// Threshold exceeded, press cancelled
    Cancelled,
}

/// Pure long-press state machine: Idle -> Pressing -> Completed,
/// with release or movement returning to Idle.
#[derive(Debug, Default)]
pub struct PressMachine {
    phase: PressPhase,
}

impl PressMachine {
    pub fn new() -> Self {
        Self {
            phase: PressPhase::Idle,
        }
    }

    pub fn phase(&self) -> PressPhase {
        self.phase
    }

    pub fn progress(&self) -> f64 {
        match self.phase {
            PressPhase::Pressing { progress, .. } => progress,
            _ => 0.0,
        }
    }

    /// Begin a press cycle. Returns false while a press is already in flight.
    pub fn press(&mut self, x: f64, y: f64) -> bool {
        if matches!(self.phase, PressPhase::Pressing { .. }) {
            return false;
        }
        self.phase = PressPhase::Pressing {
            start_x: x,
            start_y: y,
            progress: 0.0,
        };
        true
    }

    /// Advance progress by one tick
    pub fn tick(&mut self) -> Tick {
        let PressPhase::Pressing {
            start_x,
            start_y,
            progress,
        } = self.phase
        else {
            return Tick::Ignored;
        };
        let step = TICK_INTERVAL_MS as f64 / LONG_PRESS_DURATION_MS as f64 * 100.0;
        let progress = progress + step;
        if progress >= 100.0 {
            self.phase = PressPhase::Completed;
            Tick::Completed
        } else {
            self.phase = PressPhase::Pressing {
                start_x,
                start_y,
                progress,
            };
            Tick::Advanced(progress)
        }
    }

    /// Cancel when the pointer moved past the threshold on either axis
    pub fn movement(&mut self, x: f64, y: f64) -> Movement {
        let PressPhase::Pressing {
            start_x, start_y, ..
        } = self.phase
        else {
            return Movement::Ignored;
        };
        if (x - start_x).abs() > MOVE_CANCEL_THRESHOLD_PX
            || (y - start_y).abs() > MOVE_CANCEL_THRESHOLD_PX
        {
            self.phase = PressPhase::Idle;
            Movement::Cancelled
        } else {
            Movement::Held
        }
    }

    /// Press released; pending progress is discarded
    pub fn release(&mut self) {
        self.phase = PressPhase::Idle;
    }
}

struct Inner {
    machine: PressMachine,
    /// Press began on a nested interactive control; ignore through release
    ignore_press: bool,
    ticker: Option<Interval>,
    ticker_generation: u32,
}

/// Long-press recognizer bound to one element through its event handlers.
/// Cheap to clone; clones share the same press state.
#[derive(Clone)]
pub struct LongPress {
    inner: Rc<RefCell<Inner>>,
    on_complete: Callback<()>,
    ignored_selector: &'static str,
}

impl LongPress {
    pub fn new(on_complete: Callback<()>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                machine: PressMachine::new(),
                ignore_press: false,
                ticker: None,
                ticker_generation: 0,
            })),
            on_complete,
            ignored_selector: DEFAULT_IGNORED_SELECTOR,
        }
    }

    /// Presses starting on elements matching this selector are ignored entirely
    pub fn with_ignored_selector(mut self, selector: &'static str) -> Self {
        self.ignored_selector = selector;
        self
    }

    pub fn handle_mouse_down(&self, ev: MouseEvent) {
        let on_control = target_matches(ev.target(), self.ignored_selector);
        let Some(element) = current_element(&ev) else {
            return;
        };
        self.start_press(element, ev.client_x() as f64, ev.client_y() as f64, on_control);
    }

    pub fn handle_touch_start(&self, ev: TouchEvent) {
        let on_control = target_matches(ev.target(), self.ignored_selector);
        let Some(element) = current_element(&ev) else {
            return;
        };
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        self.start_press(
            element,
            touch.client_x() as f64,
            touch.client_y() as f64,
            on_control,
        );
    }

    pub fn handle_mouse_up(&self, ev: MouseEvent) {
        self.end_press(current_element(&ev));
    }

    pub fn handle_mouse_leave(&self, ev: MouseEvent) {
        self.end_press(current_element(&ev));
    }

    pub fn handle_touch_end(&self, ev: TouchEvent) {
        self.end_press(current_element(&ev));
    }

    pub fn handle_touch_cancel(&self, ev: TouchEvent) {
        self.end_press(current_element(&ev));
    }

    pub fn handle_mouse_move(&self, ev: MouseEvent) {
        self.check_movement(
            current_element(&ev),
            ev.client_x() as f64,
            ev.client_y() as f64,
        );
    }

    pub fn handle_touch_move(&self, ev: TouchEvent) {
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        self.check_movement(
            current_element(&ev),
            touch.client_x() as f64,
            touch.client_y() as f64,
        );
    }

    fn start_press(&self, element: HtmlElement, x: f64, y: f64, on_control: bool) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.ignore_press = on_control;
            if on_control {
                return;
            }
            if !inner.machine.press(x, y) {
                return;
            }
        }
        apply_lift(&element);
        set_overlay_progress(&element, 0.0, true);

        let this = self.clone();
        let ticker_element = element.clone();
        let ticker = Interval::new(TICK_INTERVAL_MS, move || this.on_tick(&ticker_element));
        let mut inner = self.inner.borrow_mut();
        inner.ticker.take();
        inner.ticker_generation += 1;
        inner.ticker = Some(ticker);
    }

    fn on_tick(&self, element: &HtmlElement) {
        if !element.is_connected() {
            // unmounted mid-press: treat as cancellation
            self.inner.borrow_mut().machine.release();
            self.defer_ticker_stop();
            return;
        }
        let tick = self.inner.borrow_mut().machine.tick();
        match tick {
            Tick::Advanced(progress) => set_overlay_progress(element, progress, true),
            Tick::Completed => {
                self.defer_ticker_stop();
                self.on_complete.run(());
            }
            Tick::Ignored => {}
        }
    }

    /// The ticker cannot be dropped from inside its own callback, so
    /// completion schedules the drop on the next timer turn.
    fn defer_ticker_stop(&self) {
        let inner = Rc::clone(&self.inner);
        let generation = inner.borrow().ticker_generation;
        Timeout::new(0, move || {
            let mut inner = inner.borrow_mut();
            if inner.ticker_generation == generation {
                inner.ticker.take();
            }
        })
        .forget();
    }

    fn end_press(&self, element: Option<HtmlElement>) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.ignore_press {
                return;
            }
            inner.ticker.take();
            inner.machine.release();
        }
        if let Some(element) = element {
            reset_lift(&element);
            set_overlay_progress(&element, 0.0, false);
        }
    }

    fn check_movement(&self, element: Option<HtmlElement>, x: f64, y: f64) {
        let cancelled = {
            let mut inner = self.inner.borrow_mut();
            if inner.ignore_press {
                return;
            }
            match inner.machine.movement(x, y) {
                Movement::Cancelled => {
                    inner.ticker.take();
                    true
                }
                _ => false,
            }
        };
        if cancelled {
            if let Some(element) = element {
                reset_lift(&element);
                set_overlay_progress(&element, 0.0, false);
            }
        }
    }
}

fn current_element(ev: &web_sys::Event) -> Option<HtmlElement> {
    ev.current_target()?.dyn_into::<HtmlElement>().ok()
}

fn target_matches(target: Option<web_sys::EventTarget>, selector: &str) -> bool {
    let Some(element) = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return false;
    };
    element.closest(selector).ok().flatten().is_some()
}

/// Lift the card while the press is held
fn apply_lift(element: &HtmlElement) {
    let style = element.style();
    let _ = style.set_property("transform", "translateY(-12px) scale(1.03)");
    let _ = style.set_property(
        "box-shadow",
        "0 25px 50px -12px rgba(167, 139, 250, 0.4), 0 20px 25px -5px rgba(167, 139, 250, 0.3)",
    );
    let _ = style.set_property("transition", "all 0.3s cubic-bezier(0.34, 1.56, 0.64, 1)");
    let _ = style.set_property("filter", "brightness(1.05)");
}

fn reset_lift(element: &HtmlElement) {
    let style = element.style();
    let _ = style.remove_property("transform");
    let _ = style.remove_property("box-shadow");
    let _ = style.remove_property("filter");
    let _ = style.set_property("transition", "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)");
}

/// Drive the `.progress-overlay` child, if the element has one
fn set_overlay_progress(element: &HtmlElement, progress: f64, active: bool) {
    let Some(overlay) = element
        .query_selector(".progress-overlay")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    if active {
        let _ = overlay.class_list().add_1("active");
        let _ = overlay.style().set_property(
            "background",
            &format!(
                "linear-gradient(90deg, rgba(167, 139, 250, 0.3) {progress}%, transparent {progress}%)"
            ),
        );
    } else {
        let _ = overlay.class_list().remove_1("active");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_hold_completes_after_full_duration() {
        let mut machine = PressMachine::new();
        assert!(machine.press(100.0, 200.0));

        let ticks_to_complete = LONG_PRESS_DURATION_MS / TICK_INTERVAL_MS;
        for i in 1..ticks_to_complete {
            match machine.tick() {
                Tick::Advanced(progress) => assert!(progress < 100.0),
                other => panic!("unexpected {other:?} at tick {i}"),
            }
        }
        assert_eq!(machine.tick(), Tick::Completed);
        assert_eq!(machine.phase(), PressPhase::Completed);

        // further ticks are ignored until the next press cycle
        assert_eq!(machine.tick(), Tick::Ignored);
        assert!(machine.press(0.0, 0.0));
        assert_eq!(machine.progress(), 0.0);
    }

    #[test]
    fn test_movement_past_threshold_cancels() {
        let mut machine = PressMachine::new();
        machine.press(50.0, 50.0);
        machine.tick();
        machine.tick();

        assert_eq!(machine.movement(55.0, 52.0), Movement::Held);
        assert_eq!(machine.movement(61.0, 50.0), Movement::Cancelled);
        assert_eq!(machine.phase(), PressPhase::Idle);

        // a cancelled press never completes, progress restarts at zero
        assert_eq!(machine.tick(), Tick::Ignored);
        machine.press(50.0, 50.0);
        assert_eq!(machine.progress(), 0.0);
    }

    #[test]
    fn test_vertical_movement_also_cancels() {
        let mut machine = PressMachine::new();
        machine.press(50.0, 50.0);
        assert_eq!(machine.movement(50.0, 39.0), Movement::Cancelled);
    }

    #[test]
    fn test_release_discards_progress() {
        let mut machine = PressMachine::new();
        machine.press(0.0, 0.0);
        machine.tick();
        assert!(machine.progress() > 0.0);

        machine.release();
        assert_eq!(machine.phase(), PressPhase::Idle);
        assert_eq!(machine.progress(), 0.0);
    }

    #[test]
    fn test_press_while_pressing_is_rejected() {
        let mut machine = PressMachine::new();
        assert!(machine.press(0.0, 0.0));
        assert!(!machine.press(10.0, 10.0));
        assert_eq!(machine.movement(5.0, 5.0), Movement::Held);
    }

    #[test]
    fn test_movement_without_press_is_ignored() {
        let mut machine = PressMachine::new();
        assert_eq!(machine.movement(500.0, 500.0), Movement::Ignored);
        assert_eq!(machine.tick(), Tick::Ignored);
    }
}
