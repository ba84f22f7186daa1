use crate::routes::MessageBody;
use rocket::serde::json::Json;

const RUNNING: &str = "Server is running";

#[get("/health")]
pub fn health() -> Json<MessageBody> {
    Json(MessageBody::new(RUNNING))
}

#[get("/")]
pub fn index() -> Json<MessageBody> {
    Json(MessageBody::new(RUNNING))
}
