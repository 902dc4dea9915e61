use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

use crate::models::error::AppError;

/// Listens for window resizes and runs `callback` once resizing has been idle for `delay_ms`.
///
/// Each resize event replaces the pending timeout, so dragging a window edge triggers a
/// single chart re-render. Dropping the returned listener cancels the subscription.
pub fn debounced_resize<F>(delay_ms: u32, callback: F) -> Result<EventListener, AppError>
where
    F: Fn() + 'static,
{
    let window =
        web_sys::window().ok_or_else(|| AppError::MissingElement("window".to_string()))?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Ok(EventListener::new(&window, "resize", move |_| {
        let callback = callback.clone();
        // Replacing the handle drops, and so cancels, the previous timeout.
        pending
            .borrow_mut()
            .replace(Timeout::new(delay_ms, move || callback()));
    }))
}
