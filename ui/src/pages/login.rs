use payloads::{ClientError, Role, requests};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::state::{AuthState, State};
use crate::{Route, get_api_client, store_session_token};

#[function_component]
pub fn LoginPage() -> Html {
    let navigator = use_navigator().unwrap();
    let (state, dispatch) = use_store::<State>();

    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    // Already signed in as an admin: straight to the dashboard.
    {
        let navigator = navigator.clone();
        use_effect_with(state.is_admin(), move |is_admin| {
            if *is_admin {
                navigator.push(&Route::Home);
            }
        });
    }

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_input = email_ref.cast::<HtmlInputElement>().unwrap();
            let email = email_input.value().trim().to_string();
            let password_input =
                password_ref.cast::<HtmlInputElement>().unwrap();
            let password = password_input.value();

            if email.is_empty() || password.is_empty() {
                error_message
                    .set(Some("Please enter email and password".to_string()));
                return;
            }

            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let api_client = get_api_client();
                let credentials =
                    requests::LoginCredentials { email, password };
                match api_client.login(&credentials).await {
                    Ok(session) => {
                        if session.user.role != Role::Admin {
                            error_message.set(Some(
                                "This account does not have dashboard access"
                                    .to_string(),
                            ));
                        } else {
                            store_session_token(Some(&session.token));
                            dispatch.reduce_mut(|s| {
                                s.auth_state =
                                    AuthState::LoggedIn(session.user.clone());
                            });
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(ClientError::APIError(_, msg)) => {
                        error_message.set(Some(msg));
                    }
                    Err(ClientError::Network(_)) => {
                        error_message.set(Some(
                            "Network error. Please check your connection."
                                .to_string(),
                        ));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto py-16 px-4">
            <div class="bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Marketplace Admin"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Sign in with your staff account."}
                    </p>
                </div>

                <form onsubmit={on_submit} class="space-y-6">
                    if let Some(error) = &*error_message {
                        <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                        </div>
                    }

                    <div>
                        <label for="email" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                            {"Email"}
                        </label>
                        <input
                            ref={email_ref}
                            type="email"
                            id="email"
                            name="email"
                            required={true}
                            class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                                   rounded-md shadow-sm bg-white dark:bg-neutral-700
                                   text-neutral-900 dark:text-neutral-100
                                   focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500"
                        />
                    </div>

                    <div>
                        <label for="password" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                            {"Password"}
                        </label>
                        <input
                            ref={password_ref}
                            type="password"
                            id="password"
                            name="password"
                            required={true}
                            class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                                   rounded-md shadow-sm bg-white dark:bg-neutral-700
                                   text-neutral-900 dark:text-neutral-100
                                   focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled={*is_loading}
                        class="w-full flex justify-center py-2 px-4 border border-transparent
                               rounded-md shadow-sm text-sm font-medium text-white
                               bg-neutral-900 hover:bg-neutral-800
                               dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                               focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-neutral-500
                               disabled:opacity-50 disabled:cursor-not-allowed
                               transition-colors duration-200"
                    >
                        if *is_loading {
                            {"Signing in..."}
                        } else {
                            {"Sign in"}
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
