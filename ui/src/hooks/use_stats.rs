use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch};
use crate::state::State;

// The dashboard fires both stats queries in parallel on mount; they are
// independent and neither blocks the other.

#[hook]
pub fn use_property_type_stats() -> FetchHookReturn<responses::PropertyTypeStats>
{
    let (state, _) = use_store::<State>();
    let authed = state.is_admin();

    use_fetch(authed, move || async move {
        if !authed {
            return Err("not signed in".to_string());
        }
        let api_client = get_api_client();
        api_client
            .get_property_type_stats()
            .await
            .map_err(|e| e.to_string())
    })
}

#[hook]
pub fn use_user_stats() -> FetchHookReturn<responses::UserStats> {
    let (state, _) = use_store::<State>();
    let authed = state.is_admin();

    use_fetch(authed, move || async move {
        if !authed {
            return Err("not signed in".to_string());
        }
        let api_client = get_api_client();
        api_client.get_user_stats().await.map_err(|e| e.to_string())
    })
}
