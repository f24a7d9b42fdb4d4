pub mod use_authentication;
pub mod use_content;
pub mod use_fetch;
pub mod use_image_upload;
pub mod use_logout;
pub mod use_properties;
pub mod use_push_route;
pub mod use_require_admin;
pub mod use_stats;
pub mod use_users;
pub mod use_villages;

pub use use_authentication::use_authentication;
pub use use_content::use_page_content;
pub use use_fetch::{FetchHookReturn, use_fetch, use_fetch_with_cache};
pub use use_image_upload::{
    ImageFile, ImageUploadHandle, UploadOutcome, use_image_upload,
};
pub use use_logout::use_logout;
pub use use_properties::{PROPERTY_NOT_FOUND, use_properties, use_property};
pub use use_push_route::use_push_route;
pub use use_require_admin::use_require_admin;
pub use use_stats::{use_property_type_stats, use_user_stats};
pub use use_users::{UserScope, use_user_list};
pub use use_villages::{VILLAGE_NOT_FOUND, use_village, use_villages};

/// Distinguishes "not fetched yet" from "fetched, possibly empty".
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(data) => Some(data),
            Self::NotFetched => None,
        }
    }
}
