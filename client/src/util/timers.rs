//! Delayed UI callbacks.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::banner::Banner;

/// Success banners on the invitation queue stay this long.
pub const INVITATION_BANNER_TTL: Duration = Duration::from_secs(5);
/// Success banners on the internship and user pages stay this long.
pub const ADMIN_BANNER_TTL: Duration = Duration::from_secs(3);
/// Pause between a modal's success message and it closing.
pub const MODAL_CLOSE_DELAY: Duration = Duration::from_millis(1500);

/// Run `f` after `delay` in the browser. Does nothing during server render.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            f();
        });
    }
}

/// Clear banner `seq` in `state` after `ttl`, unless a newer one replaced it.
pub fn expire_banner<T>(state: RwSignal<T>, ttl: Duration, seq: u64, banner: fn(&mut T) -> &mut Banner)
where
    T: Send + Sync + 'static,
{
    after(ttl, move || {
        state.update(|s| {
            if banner(s).expire(seq) {
                leptos::logging::log!("banner {seq} expired");
            }
        });
    });
}
