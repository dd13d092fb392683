//! Search Bar Component

use leptos::prelude::*;

use crate::store::{store_set_search, use_app_store, AppStateStoreFields};

/// Title search input
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search..."
                prop:value=move || store.search().get()
                on:input=move |ev| store_set_search(&store, event_target_value(&ev))
            />
        </div>
    }
}
