//! Deferred UI callbacks.

use crate::state::controls::SETTLE_DELAY_MS;

/// Run `f` once the settle delay has elapsed. Browser only; on the server the
/// callback is dropped.
pub fn after_settle_delay<F>(f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(SETTLE_DELAY_MS))).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (f, SETTLE_DELAY_MS);
    }
}
