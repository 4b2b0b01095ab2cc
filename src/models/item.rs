use serde::{Deserialize, Serialize};

/// A row of `Items_Catalogue`. `(seller_id, item_id)` is the natural key;
/// the schema does not enforce it, and `item_id` is only unique within one
/// seller's range.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CatalogueItem {
    pub seller_id: i64,
    pub item_id: i64,
    pub item_name: String,
    pub item_price: f64,
    pub item_qty: i32,
    pub item_desc: String,
    pub category: String,
    pub image_url: String,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of `POST /addItems`. Field casing follows the public API contract;
/// `item_id` is assigned server-side and never accepted from the client.
#[derive(Debug, Deserialize)]
pub struct NewItem {
    #[serde(rename = "Seller_ID")]
    pub seller_id: i64,
    #[serde(rename = "Item_Name")]
    pub item_name: String,
    #[serde(rename = "Item_Price")]
    pub item_price: f64,
    #[serde(rename = "Item_Qty")]
    pub item_qty: i32,
    #[serde(rename = "Item_Desc")]
    pub item_desc: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Image_URL")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "Seller_ID": 7,
            "Item_Name": "Desk lamp",
            "Item_Price": 24.99,
            "Item_Qty": 3,
            "Item_Desc": "Adjustable arm, warm white",
            "Category": "Lighting",
            "Image_URL": "https://img.example.com/lamp.png",
        })
    }

    #[test]
    fn new_item_accepts_api_field_casing() {
        let item: NewItem = serde_json::from_value(payload()).unwrap();
        assert_eq!(item.seller_id, 7);
        assert_eq!(item.item_name, "Desk lamp");
        assert_eq!(item.item_qty, 3);
    }

    #[test]
    fn new_item_rejects_missing_required_field() {
        let mut body = payload();
        body.as_object_mut().unwrap().remove("Image_URL");
        let result: Result<NewItem, _> = serde_json::from_value(body);
        assert!(result.is_err(), "a payload without Image_URL must be rejected");
    }

    #[test]
    fn new_item_rejects_non_numeric_qty() {
        let mut body = payload();
        body["Item_Qty"] = json!("three");
        let result: Result<NewItem, _> = serde_json::from_value(body);
        assert!(result.is_err());
    }

    #[test]
    fn catalogue_item_serializes_named_snake_case_fields() {
        let item = CatalogueItem {
            seller_id: 7,
            item_id: 7000,
            item_name: "Desk lamp".to_string(),
            item_price: 24.99,
            item_qty: 3,
            item_desc: "Adjustable arm".to_string(),
            category: "Lighting".to_string(),
            image_url: "https://img.example.com/lamp.png".to_string(),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["seller_id"], 7);
        assert_eq!(value["item_id"], 7000);
        assert_eq!(value["image_url"], "https://img.example.com/lamp.png");
        assert!(value.get("Seller_ID").is_none(), "rows use snake_case, not body casing");
    }
}
