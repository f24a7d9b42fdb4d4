use payloads::{PropertyId, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch_with_cache};
use crate::state::{CacheKey, State};

/// Error string used when a property ID resolves to nothing, so the detail
/// page can show its dedicated not-found screen.
pub const PROPERTY_NOT_FOUND: &str = "Property not found";

/// All listings, cached in the global store under `CacheKey::Properties`.
#[hook]
pub fn use_properties() -> FetchHookReturn<Vec<responses::Property>> {
    let (state, dispatch) = use_store::<State>();
    let version = state.cache_version(CacheKey::Properties);
    let authed = state.is_admin();

    let state_for_cache = state.clone();
    let state_for_check = state.clone();

    use_fetch_with_cache(
        (authed, version),
        move || state_for_cache.properties.as_ref().cloned(),
        move || {
            state_for_check.is_admin()
                && !state_for_check.properties.is_fetched()
        },
        move || {
            let dispatch = dispatch.clone();
            async move {
                let api_client = get_api_client();
                let properties = api_client
                    .get_properties()
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| s.set_properties(properties.clone()));
                Ok(properties)
            }
        },
    )
}

/// One listing, served from the canonical store when the list page already
/// fetched it.
#[hook]
pub fn use_property(
    property_id: PropertyId,
) -> FetchHookReturn<responses::Property> {
    let (state, dispatch) = use_store::<State>();
    let version = state.cache_version(CacheKey::Properties);
    let authed = state.is_admin();

    let state_for_cache = state.clone();
    let state_for_check = state.clone();

    use_fetch_with_cache(
        (property_id, authed, version),
        move || state_for_cache.get_property(property_id).cloned(),
        move || {
            state_for_check.is_admin()
                && state_for_check.get_property(property_id).is_none()
        },
        move || {
            let dispatch = dispatch.clone();
            async move {
                let api_client = get_api_client();
                match api_client.get_property(&property_id).await {
                    Ok(property) => {
                        dispatch
                            .reduce_mut(|s| s.set_property(property.clone()));
                        Ok(property)
                    }
                    Err(e) if e.is_not_found() => {
                        Err(PROPERTY_NOT_FOUND.to_string())
                    }
                    Err(e) => Err(e.to_string()),
                }
            }
        },
    )
}
