use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::{LandingError, Result};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// High resolution timestamp in milliseconds, same clock as animation frames.
pub fn now_ms() -> Option<f64> {
    web_sys::window()?.performance().map(|p| p.now())
}

/// A self-rescheduling `requestAnimationFrame` chain.
///
/// The step closure receives the frame timestamp and returns whether another
/// frame is wanted. The chain releases its closure after the last frame.
/// Dropping the loop cancels a pending frame.
pub struct FrameLoop {
    slot: Rc<RefCell<Option<FrameCallback>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start<F>(mut step: F) -> Result<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window().ok_or(LandingError::MissingWindow)?;
        let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let callback = {
            let slot = slot.clone();
            let pending = pending.clone();
            Closure::<dyn FnMut(f64)>::new(move |now: f64| {
                pending.set(None);
                if !step(now) {
                    // Breaks the slot -> closure -> slot cycle
                    slot.borrow_mut().take();
                    return;
                }
                match request_frame(&slot) {
                    Ok(id) => pending.set(Some(id)),
                    Err(e) => {
                        log::error!("Animation stopped: {}", e);
                        slot.borrow_mut().take();
                    }
                }
            })
        };

        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        pending.set(Some(id));
        *slot.borrow_mut() = Some(callback);

        Ok(Self { slot, pending })
    }
}

fn request_frame(slot: &Rc<RefCell<Option<FrameCallback>>>) -> Result<i32> {
    let window = web_sys::window().ok_or(LandingError::MissingWindow)?;
    let slot = slot.borrow();
    let callback = slot.as_ref().ok_or(LandingError::Browser("frame callback released".into()))?;
    Ok(window.request_animation_frame(callback.as_ref().unchecked_ref())?)
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.slot.borrow_mut().take();
    }
}
