use payloads::{APIClient, PropertyId, StorageClient, VillageId};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod content;
mod csv;
mod hooks;
mod logs;
mod pages;
mod state;
mod village_form;

pub use state::State;

use components::RequireAdmin;
use components::layout::MainLayout;
use contexts::toast::ToastProvider;
use pages::{
    ContentEditorPage, CreateVillagePage, EditVillagePage, HomePage,
    LoginPage, NotFoundPage, PropertiesPage, PropertyDetailPage, UsersPage,
    VillagesPage,
};

const SESSION_TOKEN_KEY: &str = "admin_session_token";

fn backend_address() -> String {
    // Build-time override, falling back to same origin.
    option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        })
}

/// Global API client - configured at build time, bearer token from the
/// persisted session.
pub fn get_api_client() -> APIClient {
    APIClient {
        address: backend_address(),
        token: stored_session_token(),
        inner_client: reqwest::Client::new(),
    }
}

/// Global object-storage client for listing photos and village thumbnails.
pub fn get_storage_client() -> StorageClient {
    let address = option_env!("STORAGE_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| format!("{}/storage/v1", backend_address()));
    StorageClient {
        address,
        bucket: option_env!("STORAGE_BUCKET").unwrap_or("media").to_string(),
        folder: "uploads".to_string(),
        token: stored_session_token(),
        inner_client: reqwest::Client::new(),
    }
}

/// The session token survives reloads; everything else is page-visit state.
pub fn stored_session_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(SESSION_TOKEN_KEY).ok()?
}

pub fn store_session_token(token: Option<&str>) {
    let Some(storage) =
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    else {
        return;
    };
    let result = match token {
        Some(token) => storage.set_item(SESSION_TOKEN_KEY, token),
        None => storage.remove_item(SESSION_TOKEN_KEY),
    };
    if result.is_err() {
        tracing::warn!("failed to persist session token");
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <ToastProvider>
                <div class="min-h-screen bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
                    <Switch<Route> render={switch} />
                </div>
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/properties")]
    Properties,
    #[at("/properties/:id")]
    PropertyDetail { id: PropertyId },
    #[at("/users")]
    Users,
    #[at("/villages")]
    Villages,
    #[at("/villages/new")]
    CreateVillage,
    #[at("/villages/:id/edit")]
    EditVillage { id: VillageId },
    #[at("/content")]
    Content,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn admin_page(content: Html) -> Html {
    html! {
        <RequireAdmin>
            <MainLayout>
                {content}
            </MainLayout>
        </RequireAdmin>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => admin_page(html! { <HomePage /> }),
        Route::Login => html! { <LoginPage /> },
        Route::Properties => admin_page(html! { <PropertiesPage /> }),
        Route::PropertyDetail { id } => {
            admin_page(html! { <PropertyDetailPage {id} /> })
        }
        Route::Users => admin_page(html! { <UsersPage /> }),
        Route::Villages => admin_page(html! { <VillagesPage /> }),
        Route::CreateVillage => admin_page(html! { <CreateVillagePage /> }),
        Route::EditVillage { id } => {
            admin_page(html! { <EditVillagePage {id} /> })
        }
        Route::Content => admin_page(html! { <ContentEditorPage /> }),
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
