use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::ObserverConfig;
use crate::error::{LandingError, Result};

// Browsers round the reported ratio, so a crossing at 0.5 can arrive as 0.4999.
const RATIO_EPSILON: f64 = 1e-3;

/// One-shot trigger for a single observed element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityGate {
    triggered: bool,
}

impl VisibilityGate {
    /// Feeds one intersection report. Returns `true` only for the first report
    /// that is intersecting at or above `threshold`.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
        if self.triggered || !is_intersecting || ratio + RATIO_EPSILON < threshold {
            return false;
        }
        self.triggered = true;
        true
    }
}

/// Live observation of one element. Dropping it disconnects the observer.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observes `element` and calls `on_visible` once it crosses the configured
/// threshold, then stops observing it.
pub fn observe_once<F>(element: &Element, options: &ObserverConfig, on_visible: F) -> Result<VisibilityWatch>
where
    F: FnOnce() + 'static,
{
    let threshold = options.threshold;
    let mut gate = VisibilityGate::default();
    let mut on_visible = Some(on_visible);

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if gate.observe(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                    observer.unobserve(&entry.target());
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    init.set_threshold(&JsValue::from_f64(threshold));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| LandingError::Observer(format!("{:?}", e)))?;
    observer.observe(element);

    Ok(VisibilityWatch {
        observer,
        _callback: callback,
    })
}

/// Returns `true` from the first render after the referenced element became
/// visible. Never flips back.
#[hook]
pub fn use_visibility(node: NodeRef, options: ObserverConfig) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let destructor: Box<dyn FnOnce()> = match node.cast::<Element>() {
                    Some(element) => {
                        let on_visible = {
                            let visible = visible.clone();
                            move || visible.set(true)
                        };
                        match observe_once(&element, &options, on_visible) {
                            Ok(watch) => Box::new(move || drop(watch)),
                            Err(e) => {
                                // Without an observer the content would stay hidden forever
                                log::error!("{}", e);
                                visible.set(true);
                                Box::new(|| ())
                            }
                        }
                    }
                    None => Box::new(|| ()),
                };
                move || destructor()
            },
            node,
        );
    }
    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers_on_first_crossing() {
        let mut gate = VisibilityGate::default();
        assert!(!gate.observe(false, 0.0, 0.1));
        assert!(!gate.observe(true, 0.05, 0.1));
        assert!(gate.observe(true, 0.2, 0.1));
        assert!(!gate.observe(true, 0.3, 0.1));
    }

    #[test]
    fn triggers_at_most_once_when_intersection_toggles() {
        let mut gate = VisibilityGate::default();
        let reports = [
            (true, 0.6),
            (false, 0.0),
            (true, 0.9),
            (false, 0.2),
            (true, 1.0),
        ];
        let fired = reports
            .iter()
            .filter(|(intersecting, ratio)| gate.observe(*intersecting, *ratio, 0.5))
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn tolerates_rounded_ratio_at_threshold() {
        let mut gate = VisibilityGate::default();
        assert!(gate.observe(true, 0.4999, 0.5));
    }

    #[test]
    fn stats_threshold_requires_half_visible() {
        let mut gate = VisibilityGate::default();
        assert!(!gate.observe(true, 0.3, 0.5));
        assert!(gate.observe(true, 0.5, 0.5));
    }
}
