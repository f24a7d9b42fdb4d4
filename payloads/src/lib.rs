use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod api_client;
pub mod requests;
pub mod responses;
pub mod storage_client;

pub use api_client::{APIClient, ClientError, ok_body, ok_empty};
pub use storage_client::StorageClient;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct PropertyId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct UserId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct VillageId(pub Uuid);

// Route parameters are parsed from path segments, so the ID newtypes need
// FromStr alongside Display.
macro_rules! id_from_str {
    ($($id:ident),*) => {
        $(impl std::str::FromStr for $id {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        })*
    };
}

id_from_str!(PropertyId, UserId, VillageId);

/// Listing lifecycle. Listings are created by sellers elsewhere; the
/// dashboard only transitions status and attaches a rejection reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    InReview,
    Published,
    Rejected,
    Sold,
}

impl PropertyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InReview => "In review",
            Self::Published => "Published",
            Self::Rejected => "Rejected",
            Self::Sold => "Sold",
        }
    }

    pub const ALL: [PropertyStatus; 4] = [
        Self::InReview,
        Self::Published,
        Self::Rejected,
        Self::Sold,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Seller,
    Buyer,
    Moderator,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Seller => "Seller",
            Self::Buyer => "Buyer",
            Self::Moderator => "Moderator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    House,
    Apartment,
    Farm,
    Land,
    Summerhouse,
}

impl PropertyType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Apartment => "Apartment",
            Self::Farm => "Farm",
            Self::Land => "Land",
            Self::Summerhouse => "Summer house",
        }
    }

    pub const ALL: [PropertyType; 5] = [
        Self::House,
        Self::Apartment,
        Self::Farm,
        Self::Land,
        Self::Summerhouse,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InternetType {
    Fiber,
    Cable,
    Dsl,
    Mobile,
    Satellite,
}

impl InternetType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fiber => "Fiber",
            Self::Cable => "Cable",
            Self::Dsl => "DSL",
            Self::Mobile => "Mobile (4G/5G)",
            Self::Satellite => "Satellite",
        }
    }

    pub const ALL: [InternetType; 5] = [
        Self::Fiber,
        Self::Cable,
        Self::Dsl,
        Self::Mobile,
        Self::Satellite,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyBasic {
    pub address: String,
    pub city: String,
    pub county: String,
    pub price: Decimal,
    pub rooms: u32,
    pub bedrooms: u32,
    pub area_m2: f64,
    pub property_type: PropertyType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaKind {
    Photo,
    Video,
    FloorPlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub url: String,
}

/// Seller identification bundled with display information.
///
/// Display `name`, but use `seller_id` for any API calls that reference
/// the seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerRef {
    pub seller_id: UserId,
    pub name: String,
    pub email: String,
}

/// Core village fields plus five independently-optional sub-records.
///
/// Each sub-record is nullable on the wire. The edit form must tolerate any
/// subset being absent and materialize `Default` values the first time a
/// user touches a previously-empty sub-record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VillageDetails {
    pub name: String,
    pub county: String,
    pub population: u32,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub thumbnail_url: Option<String>,
    pub infrastructure: Option<Infrastructure>,
    pub internet: Option<Internet>,
    pub transport: Option<Transport>,
    pub community: Option<CommunityLife>,
    pub leisure: Option<Leisure>,
    pub links: Vec<VillageLink>,
}

/// For distances, `None` means unknown; `Some(0.0)` means zero distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Infrastructure {
    pub has_grocery_store: bool,
    pub has_pharmacy: bool,
    pub has_school: bool,
    pub has_kindergarten: bool,
    pub restaurants_count: u32,
    pub grocery_store_distance_km: Option<f64>,
    pub hospital_distance_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Internet {
    pub average_speed_mbps: u32,
    pub types: Vec<InternetType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Transport {
    pub has_bus_stop: bool,
    pub bus_lines_count: u32,
    pub train_station_distance_km: Option<f64>,
    pub airport_distance_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CommunityLife {
    pub has_community_center: bool,
    pub has_village_society: bool,
    pub annual_events_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Leisure {
    pub has_playground: bool,
    pub has_sports_field: bool,
    pub has_hiking_trails: bool,
    pub beach_distance_km: Option<f64>,
    pub forest_distance_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VillageLink {
    pub title: String,
    pub url: String,
}

/// One localized text value for a public page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub section_key: String,
    pub language: String,
    pub content: String,
}

pub const MAX_IMAGE_SIZE_MB: usize = 5;
pub const MAX_IMAGE_SIZE: usize = MAX_IMAGE_SIZE_MB * 1024 * 1024;
pub const ALLOWED_IMAGE_TYPES: [&str; 3] =
    ["image/jpeg", "image/png", "image/webp"];

/// Validation result for image uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageValidation {
    Valid,
    DisallowedType,
    TooLarge,
}

impl ImageValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::DisallowedType => Some(
                "Only JPEG, PNG, and WebP images are supported".to_string(),
            ),
            Self::TooLarge => Some(format!(
                "Image is too large. Maximum size is {MAX_IMAGE_SIZE_MB}MB"
            )),
        }
    }
}

/// Validate an image before any network traffic happens.
pub fn validate_image(mime_type: &str, size: usize) -> ImageValidation {
    if !ALLOWED_IMAGE_TYPES.contains(&mime_type) {
        return ImageValidation::DisallowedType;
    }
    if size > MAX_IMAGE_SIZE {
        return ImageValidation::TooLarge;
    }
    ImageValidation::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disallowed_mime_type_is_rejected() {
        assert_eq!(
            validate_image("application/pdf", 1024),
            ImageValidation::DisallowedType
        );
        assert_eq!(
            validate_image("image/gif", 1024),
            ImageValidation::DisallowedType
        );
    }

    #[test]
    fn oversized_image_is_rejected() {
        assert_eq!(
            validate_image("image/png", MAX_IMAGE_SIZE + 1),
            ImageValidation::TooLarge
        );
    }

    #[test]
    fn allowed_image_passes() {
        for mime in ALLOWED_IMAGE_TYPES {
            assert!(validate_image(mime, MAX_IMAGE_SIZE).is_valid());
        }
    }
}
