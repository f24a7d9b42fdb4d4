use payloads::{UserId, responses};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::pagination_controls::page_slice;
use crate::components::{ConfirmationModal, PaginationControls};
use crate::contexts::toast::use_toast;
use crate::csv::{download_csv, users_csv};
use crate::get_api_client;
use crate::hooks::{UserScope, use_user_list};
use crate::state::State;

/// Client-side account filters, AND-combined like the listing filters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserFilters {
    /// Case-insensitive substring over name and email.
    pub search: String,
    /// `Some(true)` keeps verified accounts, `Some(false)` unverified.
    pub verified: Option<bool>,
}

impl UserFilters {
    pub fn matches(&self, user: &responses::AdminUser) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty()
            && !user.name.to_lowercase().contains(&search)
            && !user.email.to_lowercase().contains(&search)
        {
            return false;
        }

        if let Some(verified) = self.verified
            && user.email_verified != verified
        {
            return false;
        }

        true
    }

    pub fn apply<'a>(
        &self,
        users: &'a [responses::AdminUser],
    ) -> Vec<&'a responses::AdminUser> {
        users.iter().filter(|u| self.matches(u)).collect()
    }
}

#[function_component]
pub fn UsersPage() -> Html {
    let (_, dispatch) = use_store::<State>();
    let toast = use_toast();

    let scope = use_state(|| UserScope::All);
    let filters = use_state(UserFilters::default);
    let page = use_state(|| 0usize);
    let pending_delete = use_state(|| None::<responses::AdminUser>);
    let is_deleting = use_state(|| false);

    let users = use_user_list(*scope);

    let on_scope = {
        let scope = scope.clone();
        let page = page.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(next) = UserScope::ALL
                .into_iter()
                .find(|s| s.label() == select.value())
            {
                page.set(0);
                scope.set(next);
            }
        })
    };

    let on_search = {
        let filters = filters.clone();
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.search = input.value();
            page.set(0);
            filters.set(next);
        })
    };

    let on_verified = {
        let filters = filters.clone();
        let page = page.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.verified = match select.value().as_str() {
                "verified" => Some(true),
                "unverified" => Some(false),
                _ => None,
            };
            page.set(0);
            filters.set(next);
        })
    };

    let on_page = {
        let page = page.clone();
        Callback::from(move |p: usize| page.set(p))
    };

    let on_close_modal = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let on_confirm_delete = {
        let pending_delete = pending_delete.clone();
        let is_deleting = is_deleting.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        let scope = scope.clone();

        Callback::from(move |_| {
            let Some(user) = (*pending_delete).clone() else {
                return;
            };
            let user_id: UserId = user.id;
            let delete_mutation = scope.delete_mutation();

            let pending_delete = pending_delete.clone();
            let is_deleting = is_deleting.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_deleting.set(true);
                let api_client = get_api_client();
                match api_client.delete_user(&user_id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|s| {
                            s.record_mutation(delete_mutation);
                        });
                        toast.success(format!("Deleted {}", user.email));
                        pending_delete.set(None);
                    }
                    Err(e) => toast.error(e.to_string()),
                }
                is_deleting.set(false);
            });
        })
    };

    let input_classes = "px-3 py-2 border border-neutral-300 dark:border-neutral-600
                         rounded-md shadow-sm bg-white dark:bg-neutral-700
                         text-sm text-neutral-900 dark:text-neutral-100
                         focus:outline-none focus:ring-2 focus:ring-neutral-500";

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Accounts"}
                </h1>
            </div>

            <div class="flex flex-wrap items-end gap-3">
                <select onchange={on_scope} class={input_classes}>
                    { for UserScope::ALL.iter().map(|s| html! {
                        <option value={s.label()} selected={*scope == *s}>
                            {s.label()}
                        </option>
                    }) }
                </select>
                <input
                    type="text"
                    placeholder="Search name or email"
                    oninput={on_search}
                    class={classes!(input_classes, "flex-1", "min-w-48")}
                />
                <select onchange={on_verified} class={input_classes}>
                    <option value="all" selected={filters.verified.is_none()}>
                        {"All"}
                    </option>
                    <option
                        value="verified"
                        selected={filters.verified == Some(true)}
                    >
                        {"Verified email"}
                    </option>
                    <option
                        value="unverified"
                        selected={filters.verified == Some(false)}
                    >
                        {"Unverified email"}
                    </option>
                </select>
            </div>

            {users.render("accounts", |all, _, _| {
                let filtered = filters.apply(all);
                let mut rows: Vec<responses::AdminUser> =
                    filtered.iter().map(|u| (*u).clone()).collect();
                // Newest signups first.
                rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));

                let on_export = {
                    let rows = rows.clone();
                    Callback::from(move |_| {
                        download_csv("users.csv", &users_csv(&rows));
                    })
                };

                html! {
                    <div class="space-y-4">
                        <div class="flex items-center justify-between">
                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                {format!("{} of {} accounts", rows.len(), all.len())}
                            </p>
                            <button
                                onclick={on_export}
                                class="px-3 py-1.5 text-sm font-medium rounded-md border
                                       border-neutral-300 dark:border-neutral-600
                                       text-neutral-700 dark:text-neutral-300
                                       hover:bg-neutral-50 dark:hover:bg-neutral-700"
                            >
                                {"Export CSV"}
                            </button>
                        </div>

                        <div class="overflow-x-auto bg-white dark:bg-neutral-800 rounded-lg shadow">
                            <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                                <thead>
                                    <tr class="text-left text-xs font-medium uppercase tracking-wider
                                               text-neutral-500 dark:text-neutral-400">
                                        <th class="px-4 py-3">{"Name"}</th>
                                        <th class="px-4 py-3">{"Email"}</th>
                                        <th class="px-4 py-3">{"Phone"}</th>
                                        <th class="px-4 py-3">{"Role"}</th>
                                        <th class="px-4 py-3">{"Verified"}</th>
                                        <th class="px-4 py-3"></th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                                    { for page_slice(&rows, *page).iter().map(|u| {
                                        let on_delete = {
                                            let pending_delete = pending_delete.clone();
                                            let user = u.clone();
                                            Callback::from(move |_| {
                                                pending_delete.set(Some(user.clone()));
                                            })
                                        };
                                        let row_classes = if u.deleted_at.is_some() {
                                            "opacity-50"
                                        } else {
                                            "hover:bg-neutral-50 dark:hover:bg-neutral-700/50"
                                        };
                                        html! {
                                            <tr key={u.id.to_string()} class={row_classes}>
                                                <td class="px-4 py-3 text-sm font-medium
                                                           text-neutral-900 dark:text-neutral-100">
                                                    {&u.name}
                                                    if u.deleted_at.is_some() {
                                                        <span class="ml-2 text-xs text-neutral-500">
                                                            {"(deleted)"}
                                                        </span>
                                                    }
                                                </td>
                                                <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                                    {&u.email}
                                                </td>
                                                <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                                    {u.phone.as_deref().unwrap_or("—")}
                                                </td>
                                                <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                                    {u.role.label()}
                                                </td>
                                                <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                                    {if u.email_verified { "Yes" } else { "No" }}
                                                </td>
                                                <td class="px-4 py-3 text-right">
                                                    if u.deleted_at.is_none() {
                                                        <button
                                                            onclick={on_delete}
                                                            class="text-sm text-red-600 hover:text-red-800
                                                                   dark:text-red-400 dark:hover:text-red-300"
                                                        >
                                                            {"Delete"}
                                                        </button>
                                                    }
                                                </td>
                                            </tr>
                                        }
                                    }) }
                                </tbody>
                            </table>
                            if rows.is_empty() {
                                <p class="text-center py-8 text-sm text-neutral-500 dark:text-neutral-400">
                                    {"No accounts match the current filters"}
                                </p>
                            }
                        </div>

                        <PaginationControls
                            page={*page}
                            total_rows={rows.len()}
                            on_page={on_page.clone()}
                        />
                    </div>
                }
            })}

            if let Some(user) = &*pending_delete {
                <ConfirmationModal
                    title="Delete account"
                    message={format!(
                        "Delete {} ({})? The account is retained for audit \
                         but disappears from the marketplace.",
                        user.name, user.email
                    )}
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete}
                    on_close={on_close_modal}
                    is_loading={*is_deleting}
                />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use payloads::Role;
    use uuid::Uuid;

    fn user(
        name: &str,
        email: &str,
        verified: bool,
    ) -> responses::AdminUser {
        responses::AdminUser {
            id: UserId(Uuid::new_v4()),
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            role: Role::Buyer,
            email_verified: verified,
            phone_verified: false,
            created_at: Timestamp::UNIX_EPOCH,
            deleted_at: None,
        }
    }

    #[test]
    fn search_matches_name_and_email() {
        let rows = vec![
            user("Anu Tamm", "anu@example.com", true),
            user("Mart Kask", "mart@example.com", false),
        ];

        let by_name = UserFilters {
            search: "tamm".to_string(),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&rows).len(), 1);

        let by_email = UserFilters {
            search: "MART@".to_string(),
            ..Default::default()
        };
        assert_eq!(by_email.apply(&rows).len(), 1);
    }

    #[test]
    fn verified_filter_splits_accounts() {
        let rows = vec![
            user("Anu Tamm", "anu@example.com", true),
            user("Mart Kask", "mart@example.com", false),
        ];

        let verified = UserFilters {
            verified: Some(true),
            ..Default::default()
        };
        assert_eq!(verified.apply(&rows)[0].name, "Anu Tamm");

        let unverified = UserFilters {
            verified: Some(false),
            ..Default::default()
        };
        assert_eq!(unverified.apply(&rows)[0].name, "Mart Kask");
    }

    #[test]
    fn search_and_verified_combine_with_and() {
        let rows = vec![
            user("Anu Tamm", "anu@example.com", true),
            user("Anu Mets", "anu.mets@example.com", false),
        ];
        let filters = UserFilters {
            search: "anu".to_string(),
            verified: Some(false),
        };
        let filtered = filters.apply(&rows);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Anu Mets");
    }
}
