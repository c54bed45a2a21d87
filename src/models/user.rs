use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    // Plaintext, carried over from the source system.
    pub password: String,
}

impl Record for User {
    fn id(&self) -> Uuid {
        self.id
    }
}
