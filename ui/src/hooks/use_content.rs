use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch};
use crate::state::{CacheKey, State};

/// Live CMS entries for one page. Not cached globally: the editor merges
/// them with the static table into page-local state, and the PageContent
/// version bump after a save forces the refetch that re-runs the merge.
#[hook]
pub fn use_page_content(
    page_key: String,
) -> FetchHookReturn<responses::PageContent> {
    let (state, _) = use_store::<State>();
    let version = state.cache_version(CacheKey::PageContent);
    let authed = state.is_admin();

    let key = page_key.clone();
    use_fetch((page_key, authed, version), move || {
        let key = key.clone();
        async move {
            if !authed {
                return Err("not signed in".to_string());
            }
            let api_client = get_api_client();
            api_client
                .get_page_content(&key)
                .await
                .map_err(|e| e.to_string())
        }
    })
}
