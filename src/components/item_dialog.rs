//! Modal showing one item's full details.

use leptos::prelude::*;

use crate::net::types::ItemDetail;

/// Detail overlay driven entirely by `selection`.
///
/// Renders nothing while `selection` is `None`. Dismissal goes through
/// `on_dismiss` from the Close button, a click on the backdrop, or Escape.
/// Clicks inside the content box stop before they reach the backdrop.
#[component]
pub fn ItemDialog(#[prop(into)] selection: Signal<Option<ItemDetail>>, on_dismiss: Callback<()>) -> impl IntoView {
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_dismiss.run(());
        }
    });

    move || {
        selection.get().map(|item| {
            view! {
                <div class="dialog-overlay" on:click=move |_| on_dismiss.run(())>
                    <div
                        class="dialog-content"
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=move |ev| on_keydown.run(ev)
                        tabindex="0"
                    >
                        <h2>"Item Details"</h2>
                        <p>
                            <strong>"ID:"</strong>
                            " "
                            {item.id}
                        </p>
                        <p>
                            <strong>"Name:"</strong>
                            " "
                            {item.name}
                        </p>
                        <p>
                            <strong>"Description:"</strong>
                            " "
                            {item.description}
                        </p>
                        <button class="btn" on:click=move |_| on_dismiss.run(())>
                            "Close"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
