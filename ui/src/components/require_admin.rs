use yew::prelude::*;

use crate::hooks::use_require_admin;

/// Renders its children only for a signed-in admin.
///
/// While the session resolves a placeholder is shown; anyone else is
/// redirected to the login page by `use_require_admin`. Children and their
/// hooks are never mounted for unauthenticated visitors.
#[derive(Properties, PartialEq)]
pub struct RequireAdminProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn RequireAdmin(props: &RequireAdminProps) -> Html {
    let session = use_require_admin();

    if session.is_none() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Checking session..."}
                </p>
            </div>
        };
    }

    html! {
        <>
            {for props.children.iter()}
        </>
    }
}
