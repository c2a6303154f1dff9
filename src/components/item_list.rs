//! Item table with click-to-open detail dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! This view owns `ItemsState`. It fetches the list once when constructed and
//! one detail record per row click, applying each result through the state's
//! transition methods. Failures are logged and shown as a message above the
//! table; they never clear rows or close the dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::item_dialog::ItemDialog;
use crate::components::item_row::ItemRow;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::ItemId;
use crate::state::items::{DetailOutcome, ItemsState};

/// The items table plus its detail dialog.
#[component]
pub fn ItemListView() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let api_base = StoredValue::new(config.api_base);
    let state = RwSignal::new(ItemsState::default());

    // Initial list load.
    state.update(ItemsState::begin_list_load);
    spawn_local(async move {
        let base = api_base.get_value();
        let result = api::fetch_items(&base).await;
        match state.try_update(|s| s.finish_list_load(result)) {
            Some(Ok(count)) => log::info!("loaded {count} items"),
            Some(Err(err)) => log::error!("{err}"),
            None => log::debug!("item list disposed before load finished"),
        }
    });

    let on_select = Callback::new(move |id: ItemId| {
        let Some(request) = state.try_update(|s| s.begin_detail_load(id)) else {
            return;
        };
        spawn_local(async move {
            let base = api_base.get_value();
            let result = api::fetch_item(&base, request.id).await;
            match state.try_update(|s| s.finish_detail_load(request, result)) {
                Some(DetailOutcome::Shown) => log::debug!("showing item {}", request.id),
                Some(DetailOutcome::Failed(err)) => log::error!("{err}"),
                Some(DetailOutcome::Stale) => log::debug!("dropped stale response for item {}", request.id),
                None => {}
            }
        });
    });

    let on_dismiss = Callback::new(move |()| {
        state.maybe_update(ItemsState::dismiss);
    });
    let selection = Signal::derive(move || state.with(|s| s.selected.clone()));

    view! {
        <div class="item-list">
            {move || state.with(|s| s.error.clone()).map(|msg| view! { <p class="error">{msg}</p> })}
            <table class="item-table" aria-busy=move || state.with(|s| s.loading).to_string()>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.with(|s| s.items.clone())
                        key=|item| (item.id, item.name.clone())
                        children=move |item| view! { <ItemRow item=item on_select=on_select/> }
                    />
                </tbody>
            </table>
            <ItemDialog selection=selection on_dismiss=on_dismiss/>
        </div>
    }
}
