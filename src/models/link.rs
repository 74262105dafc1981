use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Link {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub code: String,
    pub original_url: String,
    #[serde(default)]
    pub clicks: i64,
    pub created_at: i64, // epoch millis, set once on insert
    #[serde(default)]
    pub last_clicked: Option<i64>,
}

impl Link {
    pub fn new(code: String, original_url: String) -> Self {
        Self {
            id: None,
            code,
            original_url,
            clicks: 0,
            created_at: chrono::Utc::now().timestamp_millis(),
            last_clicked: None,
        }
    }
}
