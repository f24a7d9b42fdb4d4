use payloads::{VillageId, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch_with_cache};
use crate::state::{CacheKey, State};

/// Error string used when a village ID resolves to nothing, so the edit
/// page can show its dedicated not-found screen.
pub const VILLAGE_NOT_FOUND: &str = "Village not found";

#[hook]
pub fn use_villages() -> FetchHookReturn<Vec<responses::Village>> {
    let (state, dispatch) = use_store::<State>();
    let version = state.cache_version(CacheKey::Villages);
    let authed = state.is_admin();

    let state_for_cache = state.clone();
    let state_for_check = state.clone();

    use_fetch_with_cache(
        (authed, version),
        move || state_for_cache.villages.as_ref().cloned(),
        move || {
            state_for_check.is_admin()
                && !state_for_check.villages.is_fetched()
        },
        move || {
            let dispatch = dispatch.clone();
            async move {
                let api_client = get_api_client();
                let villages = api_client
                    .get_villages()
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| s.set_villages(villages.clone()));
                Ok(villages)
            }
        },
    )
}

#[hook]
pub fn use_village(
    village_id: VillageId,
) -> FetchHookReturn<responses::Village> {
    let (state, dispatch) = use_store::<State>();
    let version = state.cache_version(CacheKey::Villages);
    let authed = state.is_admin();

    let state_for_cache = state.clone();
    let state_for_check = state.clone();

    use_fetch_with_cache(
        (village_id, authed, version),
        move || state_for_cache.get_village(village_id).cloned(),
        move || {
            state_for_check.is_admin()
                && state_for_check.get_village(village_id).is_none()
        },
        move || {
            let dispatch = dispatch.clone();
            async move {
                let api_client = get_api_client();
                match api_client.get_village(&village_id).await {
                    Ok(village) => {
                        dispatch.reduce_mut(|s| s.set_village(village.clone()));
                        Ok(village)
                    }
                    Err(e) if e.is_not_found() => {
                        Err(VILLAGE_NOT_FOUND.to_string())
                    }
                    Err(e) => Err(e.to_string()),
                }
            }
        },
    )
}
