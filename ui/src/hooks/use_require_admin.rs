use payloads::responses::SessionUser;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::state::{AuthState, State};
use crate::{Route, hooks::use_authentication};

/// Gate a page on an admin session.
///
/// Returns `None` while auth is unresolved or the visitor is not an admin;
/// once the state resolves to anything other than an admin session, the
/// visitor is redirected to the login page.
#[hook]
pub fn use_require_admin() -> Option<SessionUser> {
    use_authentication();
    let (state, _) = use_store::<State>();
    let navigator = use_navigator().unwrap();

    let resolved_non_admin =
        !matches!(state.auth_state, AuthState::Unknown) && !state.is_admin();

    use_effect_with(resolved_non_admin, move |redirect| {
        if *redirect {
            navigator.push(&Route::Login);
        }
    });

    if state.is_admin() {
        state.session_user().cloned()
    } else {
        None
    }
}
