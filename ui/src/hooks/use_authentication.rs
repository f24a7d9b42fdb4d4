use yew::prelude::*;
use yewdux::prelude::*;

use crate::state::{AuthState, State};
use crate::{get_api_client, store_session_token, stored_session_token};

/// Resolve the ambient auth state once per app load.
///
/// If a session token is persisted, ask the identity provider who it
/// belongs to; a rejected token is dropped so the login page does not loop.
#[hook]
pub fn use_authentication() {
    let (state, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        if !matches!(state.auth_state, AuthState::Unknown) {
            return;
        }

        if stored_session_token().is_none() {
            dispatch.reduce_mut(|s| s.auth_state = AuthState::LoggedOut);
            return;
        }

        yew::platform::spawn_local(async move {
            let api_client = get_api_client();
            match api_client.session().await {
                Ok(user) => {
                    dispatch
                        .reduce_mut(|s| s.auth_state = AuthState::LoggedIn(user));
                }
                Err(e) => {
                    tracing::debug!("session restore failed: {e}");
                    store_session_token(None);
                    dispatch.reduce_mut(|s| s.auth_state = AuthState::LoggedOut);
                }
            }
        });
    });
}
