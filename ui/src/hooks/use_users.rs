use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, FetchState, use_fetch_with_cache};
use crate::state::{AdminMutation, CacheKey, State};

/// Which account collection a user list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserScope {
    All,
    Sellers,
    Buyers,
}

impl UserScope {
    pub const ALL: [UserScope; 3] = [Self::All, Self::Sellers, Self::Buyers];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All users",
            Self::Sellers => "Sellers",
            Self::Buyers => "Buyers",
        }
    }

    pub fn cache_key(&self) -> CacheKey {
        match self {
            Self::All => CacheKey::Users,
            Self::Sellers => CacheKey::Sellers,
            Self::Buyers => CacheKey::Buyers,
        }
    }

    /// The mutation recorded when an account is soft-deleted from this
    /// scope's list.
    pub fn delete_mutation(&self) -> AdminMutation {
        match self {
            Self::All => AdminMutation::DeleteUser,
            Self::Sellers => AdminMutation::DeleteSeller,
            Self::Buyers => AdminMutation::DeleteBuyer,
        }
    }
}

fn collection<'a>(
    state: &'a State,
    scope: UserScope,
) -> &'a FetchState<Vec<responses::AdminUser>> {
    match scope {
        UserScope::All => &state.users,
        UserScope::Sellers => &state.sellers,
        UserScope::Buyers => &state.buyers,
    }
}

/// The account list for one scope, cached under the scope's cache key.
#[hook]
pub fn use_user_list(
    scope: UserScope,
) -> FetchHookReturn<Vec<responses::AdminUser>> {
    let (state, dispatch) = use_store::<State>();
    let version = state.cache_version(scope.cache_key());
    let authed = state.is_admin();

    let state_for_cache = state.clone();
    let state_for_check = state.clone();

    use_fetch_with_cache(
        (scope, authed, version),
        move || collection(&state_for_cache, scope).as_ref().cloned(),
        move || {
            state_for_check.is_admin()
                && !collection(&state_for_check, scope).is_fetched()
        },
        move || {
            let dispatch = dispatch.clone();
            async move {
                let api_client = get_api_client();
                let users = match scope {
                    UserScope::All => api_client.get_users().await,
                    UserScope::Sellers => api_client.get_sellers().await,
                    UserScope::Buyers => api_client.get_buyers().await,
                }
                .map_err(|e| e.to_string())?;
                let fetched = FetchState::Fetched(users.clone());
                dispatch.reduce_mut(|s| match scope {
                    UserScope::All => s.users = fetched,
                    UserScope::Sellers => s.sellers = fetched,
                    UserScope::Buyers => s.buyers = fetched,
                });
                Ok(users)
            }
        },
    )
}
