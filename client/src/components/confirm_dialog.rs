//! Confirmation dialog for account-menu actions that leave the dashboard.

#[cfg(test)]
#[path = "confirm_dialog_test.rs"]
mod confirm_dialog_test;

use leptos::prelude::*;

use crate::state::dashboard::AccountAction;

/// Whether a keydown with this `key` value dismisses the dialog. `"Esc"` is
/// the legacy spelling some browsers still report.
#[must_use]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Modal alert dialog. Backdrop click, Escape, and Cancel all call
/// `on_cancel`.
///
/// Focus stays on whatever opened the dialog, so Escape is caught on the
/// window for as long as the dialog is mounted.
#[component]
pub fn ConfirmDialog(action: AccountAction, on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            if is_dismiss_key(&ev.key()) {
                ev.prevent_default();
                on_cancel.run(());
            }
        });
        on_cleanup(move || keydown.remove());
    }

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--confirm"
                role="alertdialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="dialog__header">
                    <h2 class="dialog__title">{action.title()}</h2>
                    <p class="dialog__description">{action.description()}</p>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>
                        {action.confirm_label()}
                    </button>
                </div>
            </div>
        </div>
    }
}
