//! One clickable row of the item table.

use leptos::prelude::*;

use crate::net::types::{ItemId, ItemSummary};

/// Table row showing an item's id and name; a click reports the id.
#[component]
pub fn ItemRow(item: ItemSummary, on_select: Callback<ItemId>) -> impl IntoView {
    let id = item.id;

    view! {
        <tr class="item-table__row" on:click=move |_| on_select.run(id)>
            <td>{id}</td>
            <td>{item.name}</td>
        </tr>
    }
}
