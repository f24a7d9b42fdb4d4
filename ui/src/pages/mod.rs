pub mod content_editor;
pub mod home;
pub mod login;
pub mod not_found;
pub mod properties;
pub mod property_detail;
pub mod users;
pub mod village_create;
pub mod village_edit;
pub mod village_editor;
pub mod villages;

pub use content_editor::ContentEditorPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use properties::PropertiesPage;
pub use property_detail::PropertyDetailPage;
pub use users::UsersPage;
pub use village_create::CreateVillagePage;
pub use village_edit::EditVillagePage;
pub use villages::VillagesPage;
