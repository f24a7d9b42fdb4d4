use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    ContentEntry, MediaItem, PropertyBasic, PropertyId, PropertyLocation,
    PropertyStatus, PropertyType, Role, SellerRef, UserId, VillageDetails,
    VillageId,
};

/// A full listing record as the admin API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub status: PropertyStatus,
    pub basic: PropertyBasic,
    pub location: PropertyLocation,
    pub media: Vec<MediaItem>,
    pub seller: SellerRef,
    pub rejection_reason: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An account as seen by the admin user list. Read-mostly; soft delete is
/// the only mutation the dashboard exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub created_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Village {
    pub id: VillageId,
    pub details: VillageDetails,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// Live CMS entries for one public page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub page_key: String,
    pub entries: Vec<ContentEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTypeCount {
    pub property_type: PropertyType,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTypeStats {
    pub total: u64,
    pub in_review: u64,
    pub counts: Vec<PropertyTypeCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total: u64,
    pub sellers: u64,
    pub buyers: u64,
    pub verified: u64,
}

/// The signed-in account, returned on login and on session restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}
