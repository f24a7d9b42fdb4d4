use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="text-center py-16">
            <h1 class="text-4xl font-bold text-neutral-900 dark:text-neutral-100">{"404"}</h1>
            <p class="text-neutral-600 dark:text-neutral-400 mt-2">{"Page not found"}</p>
            <Link<Route>
                to={Route::Home}
                classes="inline-block mt-4 text-sm text-neutral-600 hover:text-neutral-800 dark:text-neutral-400 dark:hover:text-neutral-200"
            >
                {"← Back to dashboard"}
            </Link<Route>>
        </div>
    }
}
