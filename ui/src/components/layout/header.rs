use yew::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_logout;
use crate::state::State;

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let logout = use_logout();

    let on_logout = Callback::from(move |_: MouseEvent| logout.emit(()));

    html! {
        <header class="border-b border-neutral-200 dark:border-neutral-700
                       bg-white dark:bg-neutral-900">
            <div class="px-4 sm:px-6 lg:px-8 py-3 flex items-center justify-end gap-4">
                {if let Some(user) = state.session_user() {
                    html! {
                        <span class="text-sm text-neutral-600 dark:text-neutral-400">
                            {&user.name}
                        </span>
                    }
                } else {
                    html! {}
                }}
                <button
                    onclick={on_logout}
                    class="text-sm font-medium text-neutral-600 dark:text-neutral-400
                           hover:text-neutral-900 dark:hover:text-neutral-100"
                >
                    {"Sign out"}
                </button>
            </div>
        </header>
    }
}
