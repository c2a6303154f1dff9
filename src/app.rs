//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::item_list::ItemListView;
use crate::config::ClientConfig;

/// Root application component.
///
/// Provides the client config to the tree and renders the item list page.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Title text="Items List"/>

        <div class="app">
            <h1>"Items List"</h1>
            <ItemListView/>
        </div>
    }
}
