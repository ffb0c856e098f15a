use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    // Never sent back in API responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: i64,
    pub sender: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Connection {
    pub id: i64,
    pub user_email: String,
    pub match_name: String,
    pub match_id: i64,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: i64,
    pub user_email: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub partner: String,
    pub amount: i64,
    pub created_at: String,
}
