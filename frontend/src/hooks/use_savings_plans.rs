use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{api::ApiClient, logging::Logger};
use crate::state::{SavingsPageAction, SavingsPageState};

/// Cancellation flag shared between a load task and the effect that started it.
///
/// Dropping the page runs the effect cleanup, which cancels the guard; the
/// task checks it before writing its result so nothing lands in discarded state.
#[derive(Debug, Clone, Default)]
pub struct LoadGuard {
    cancelled: Rc<Cell<bool>>,
}

impl LoadGuard {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Hand `value` to `deliver` unless the guard was cancelled. Returns whether it was delivered.
    pub fn deliver<T, F>(&self, value: T, deliver: F) -> bool
    where
        F: FnOnce(T),
    {
        if self.is_cancelled() {
            return false;
        }
        deliver(value);
        true
    }
}

/// Page state for the savings dashboard, loaded once on mount.
///
/// Exactly one `GET /api/savings-plans` is issued per mount. Failures are
/// logged and otherwise swallowed: the page just shows an empty list.
#[hook]
pub fn use_savings_plans(api_client: &ApiClient) -> UseReducerHandle<SavingsPageState> {
    let state = use_reducer(SavingsPageState::default);

    use_effect_with((), {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();

        move |_| {
            let guard = LoadGuard::default();
            let task_guard = guard.clone();

            Logger::debug_with_component("savings-plans", "Loading savings plans");
            spawn_local(async move {
                let result = api_client.get_savings_plans().await;

                match &result {
                    Ok(plans) => Logger::info_with_component(
                        "savings-plans",
                        &format!("Loaded {} savings plans", plans.len()),
                    ),
                    Err(e) => Logger::error_with_component(
                        "savings-plans",
                        &format!("Error fetching savings plans: {}", e),
                    ),
                }

                let delivered = task_guard.deliver(result, |result| {
                    dispatcher.dispatch(SavingsPageAction::PlansLoaded(result));
                });
                if !delivered {
                    Logger::debug_with_component("savings-plans", "Page closed before plans arrived, dropping result");
                }
            });

            move || guard.cancel()
        }
    });

    state
}
