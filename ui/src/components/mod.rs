pub mod confirmation_modal;
pub mod image_upload;
pub mod layout;
pub mod pagination_controls;
pub mod require_admin;
pub mod status_badge;
pub mod village_tab_header;

pub use confirmation_modal::ConfirmationModal;
pub use image_upload::ImageUpload;
pub use pagination_controls::PaginationControls;
pub use require_admin::RequireAdmin;
pub use status_badge::StatusBadge;
pub use village_tab_header::VillageTabHeader;
