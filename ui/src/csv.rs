//! CSV export of the currently filtered table rows.
//!
//! Fields are joined with raw commas and no quoting, so a description
//! containing a comma shifts its row's columns. Kept bug-for-bug compatible
//! with the exports staff already feed into their spreadsheets.

use payloads::responses;
use wasm_bindgen::JsCast;

pub const PROPERTY_COLUMNS: &str =
    "id,status,address,city,county,price,rooms,bedrooms,area_m2,type,seller_name,seller_email,created_at";

pub const USER_COLUMNS: &str =
    "id,name,email,phone,role,email_verified,phone_verified,created_at";

pub const VILLAGE_COLUMNS: &str =
    "id,name,county,population,latitude,longitude,links,created_at";

pub fn properties_csv(rows: &[responses::Property]) -> String {
    let mut out = String::from(PROPERTY_COLUMNS);
    out.push('\n');
    for p in rows {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
            p.id,
            p.status.label(),
            p.basic.address,
            p.basic.city,
            p.basic.county,
            p.basic.price,
            p.basic.rooms,
            p.basic.bedrooms,
            p.basic.area_m2,
            p.basic.property_type.label(),
            p.seller.name,
            p.seller.email,
            p.created_at,
        ));
    }
    out
}

pub fn users_csv(rows: &[responses::AdminUser]) -> String {
    let mut out = String::from(USER_COLUMNS);
    out.push('\n');
    for u in rows {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            u.id,
            u.name,
            u.email,
            u.phone.as_deref().unwrap_or(""),
            u.role.label(),
            u.email_verified,
            u.phone_verified,
            u.created_at,
        ));
    }
    out
}

pub fn villages_csv(rows: &[responses::Village]) -> String {
    let mut out = String::from(VILLAGE_COLUMNS);
    out.push('\n');
    for v in rows {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            v.id,
            v.details.name,
            v.details.county,
            v.details.population,
            v.details.latitude,
            v.details.longitude,
            v.details.links.len(),
            v.created_at,
        ));
    }
    out
}

/// Trigger a browser download of the given CSV content.
pub fn download_csv(filename: &str, content: &str) {
    let result = (|| -> Result<(), wasm_bindgen::JsValue> {
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8");
        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
        let blob = web_sys::Blob::new_with_str_sequence_and_options(
            &parts, &options,
        )?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
        let anchor: web_sys::HtmlAnchorElement =
            document.create_element("a")?.unchecked_into();
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
        web_sys::Url::revoke_object_url(&url)?;
        Ok(())
    })();

    if result.is_err() {
        tracing::warn!("CSV download failed for {filename}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use payloads::{
        MediaItem, MediaKind, PropertyBasic, PropertyId, PropertyLocation,
        PropertyStatus, PropertyType, SellerRef, UserId, VillageDetails,
        VillageId, responses,
    };
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn ts() -> Timestamp {
        Timestamp::UNIX_EPOCH
    }

    fn property() -> responses::Property {
        responses::Property {
            id: PropertyId(Uuid::nil()),
            status: PropertyStatus::InReview,
            basic: PropertyBasic {
                address: "Sepa 4".to_string(),
                city: "Haapsalu".to_string(),
                county: "Läänemaa".to_string(),
                price: Decimal::new(85_000, 0),
                rooms: 4,
                bedrooms: 2,
                area_m2: 96.5,
                property_type: PropertyType::House,
            },
            location: PropertyLocation {
                latitude: 58.94,
                longitude: 23.54,
            },
            media: vec![MediaItem {
                kind: MediaKind::Photo,
                url: "https://example.com/p.jpg".to_string(),
            }],
            seller: SellerRef {
                seller_id: UserId(Uuid::nil()),
                name: "Mari Maasikas".to_string(),
                email: "mari@example.com".to_string(),
            },
            rejection_reason: None,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    #[test]
    fn empty_filtered_set_emits_only_the_header() {
        assert_eq!(
            properties_csv(&[]),
            format!("{PROPERTY_COLUMNS}\n")
        );
        assert_eq!(users_csv(&[]), format!("{USER_COLUMNS}\n"));
        assert_eq!(villages_csv(&[]), format!("{VILLAGE_COLUMNS}\n"));
    }

    #[test]
    fn property_row_follows_the_column_order() {
        let out = properties_csv(&[property()]);
        let row = out.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(
            fields.len(),
            PROPERTY_COLUMNS.split(',').count()
        );
        assert_eq!(fields[1], "In review");
        assert_eq!(fields[2], "Sepa 4");
        assert_eq!(fields[5], "85000");
        assert_eq!(fields[9], "House");
    }

    #[test]
    fn village_row_counts_links() {
        let village = responses::Village {
            id: VillageId(Uuid::nil()),
            details: VillageDetails {
                name: "Kärla".to_string(),
                county: "Saaremaa".to_string(),
                population: 420,
                description: "A village".to_string(),
                latitude: 58.33,
                longitude: 22.25,
                thumbnail_url: None,
                infrastructure: None,
                internet: None,
                transport: None,
                community: None,
                leisure: None,
                links: vec![Default::default(), Default::default()],
            },
            created_at: ts(),
            updated_at: ts(),
            deleted_at: None,
        };
        let out = villages_csv(&[village]);
        let row = out.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields[1], "Kärla");
        assert_eq!(fields[6], "2");
    }
}
