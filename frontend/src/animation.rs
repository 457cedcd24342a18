use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use yew::prelude::*;

/// Whether the user asked the OS to minimise motion.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// A number tween with cubic ease-out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    pub from: u32,
    pub to: u32,
    pub duration_ms: f64,
}

impl CountUp {
    /// Value after `elapsed_ms`, and whether the tween has finished.
    pub fn at(&self, elapsed_ms: f64) -> (u32, bool) {
        let t = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        };
        let eased = 1.0 - (1.0 - t).powi(3);
        let from = f64::from(self.from);
        let current = (from + (f64::from(self.to) - from) * eased).round();
        (current.max(0.0) as u32, t >= 1.0)
    }
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn schedule(slot: FrameSlot, shown: UseStateHandle<u32>, tween: CountUp, started: Option<f64>) {
    let next_slot = slot.clone();
    let handle = request_animation_frame(move |now| {
        let started = started.unwrap_or(now);
        let (value, done) = tween.at(now - started);
        shown.set(value);
        if done {
            next_slot.borrow_mut().take();
        } else {
            schedule(next_slot, shown, tween, Some(started));
        }
    });
    // Replacing the handle cancels whatever frame was pending before.
    *slot.borrow_mut() = Some(handle);
}

/// Displayed value that eases towards `target` every time it changes.
#[hook]
pub fn use_animated_number(target: u32, duration_ms: u32) -> u32 {
    let shown = use_state_eq(|| target);
    let frame = use_mut_ref(|| None::<AnimationFrame>);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |&target| {
                let pending = frame.clone();
                let from = *shown;
                if from == target || prefers_reduced_motion() {
                    frame.borrow_mut().take();
                    shown.set(target);
                } else {
                    let tween = CountUp {
                        from,
                        to: target,
                        duration_ms: f64::from(duration_ms),
                    };
                    schedule(frame, shown, tween, None);
                }
                move || {
                    pending.borrow_mut().take();
                }
            },
            target,
        );
    }

    *shown
}

/// `true` from each change of `value` until the pulse animation ends.
#[hook]
pub fn use_pulse<T>(value: T) -> (bool, Callback<AnimationEvent>)
where
    T: PartialEq + Clone + 'static,
{
    let pulsing = use_state(|| false);

    {
        let pulsing = pulsing.clone();
        use_effect_with_deps(
            move |_| {
                pulsing.set(true);
                || ()
            },
            value,
        );
    }

    let on_end = {
        let pulsing = pulsing.clone();
        Callback::from(move |_: AnimationEvent| pulsing.set(false))
    };

    (*pulsing, on_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin_and_ends_at_target() {
        let tween = CountUp { from: 5, to: 22, duration_ms: 600.0 };
        assert_eq!(tween.at(0.0), (5, false));
        assert_eq!(tween.at(600.0), (22, true));
        assert_eq!(tween.at(10_000.0), (22, true));
    }

    #[test]
    fn eases_out() {
        let tween = CountUp { from: 0, to: 100, duration_ms: 600.0 };
        // 1 - 0.5^3 = 0.875
        assert_eq!(tween.at(300.0), (88, false));
        let (early, _) = tween.at(60.0);
        let (late, _) = tween.at(540.0);
        assert!(early > 10, "ease-out should move fast at first");
        assert!(late >= 99);
    }

    #[test]
    fn counts_down_too() {
        let tween = CountUp { from: 130, to: 0, duration_ms: 600.0 };
        let (mid, done) = tween.at(300.0);
        assert!(mid < 130 && mid > 0);
        assert!(!done);
        assert_eq!(tween.at(600.0), (0, true));
    }

    #[test]
    fn zero_duration_jumps() {
        let tween = CountUp { from: 3, to: 9, duration_ms: 0.0 };
        assert_eq!(tween.at(0.0), (9, true));
    }
}
