//! Timer-driven Effects
//!
//! The mount-time delayed load and the progress animation. Both run as
//! local tasks on `gloo-timers` futures.

use gloo_timers::future::sleep;
use leptos::task::spawn_local;
use showcase_core::ProgressStep;

use crate::context::ShowcaseContext;

/// Announce the mount, then finish the simulated load after a delay
pub fn schedule_initial_load(ctx: ShowcaseContext) {
    let delay = ctx.config().mount_log_delay();
    ctx.mutate(|state| state.mount());
    spawn_local(async move {
        sleep(delay).await;
        ctx.mutate(|state| state.finish_initial_load());
    });
}

/// Run the progress bar from 0 to 100, hold, then drop back to 0.
/// Calling again while a run is in flight restarts from 0; the older
/// task sees its run go stale and exits.
pub fn animate_progress(ctx: ShowcaseContext) {
    let config = ctx.config();
    let tick = config.progress_tick();
    let cooldown = config.progress_cooldown();
    let Some(run) = ctx.mutate(|state| state.start_progress()) else {
        return;
    };

    spawn_local(async move {
        loop {
            sleep(tick).await;
            match ctx.mutate(|state| state.advance_progress(run)) {
                Some(ProgressStep::Advanced(value)) => {
                    tracing::trace!(target: "showcase", value, "progress tick");
                }
                Some(ProgressStep::Finished) => break,
                Some(ProgressStep::Stale) | None => return,
            }
        }

        sleep(cooldown).await;
        ctx.mutate(|state| state.finish_progress(run));
    });
}
