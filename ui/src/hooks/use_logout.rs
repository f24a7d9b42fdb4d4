use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::state::State;
use crate::{Route, get_api_client, store_session_token};

/// Returns a callback that signs out: tells the identity provider, drops
/// the persisted token, clears all cached state, and lands on the login
/// page. The server call is best-effort; local state is cleared either way.
#[hook]
pub fn use_logout() -> Callback<()> {
    let dispatch = use_dispatch::<State>();
    let navigator = use_navigator().unwrap();

    Callback::from(move |_| {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();

        yew::platform::spawn_local(async move {
            let api_client = get_api_client();
            if let Err(e) = api_client.logout().await {
                tracing::warn!("logout request failed: {e}");
            }
            store_session_token(None);
            dispatch.reduce_mut(|s| s.logout());
            navigator.push(&Route::Login);
        });
    })
}
