use crate::routes::MessageBody;
use rocket::http::Status;
use rocket::response::status;
use rocket::response::status::BadRequest;
use rocket::serde::json::Json;
use rocket::Request;

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<MessageBody> {
    Json(MessageBody::new("Malformed request"))
}

/// Bodies that are valid JSON but have the wrong shape end up here.
#[catch(422)]
pub fn unprocessable_entity_to_bad_request(_req: &Request) -> BadRequest<Json<MessageBody>> {
    status::BadRequest(Json(MessageBody::new("Malformed submission payload")))
}

#[catch(404)]
pub fn not_found(req: &Request) -> Json<MessageBody> {
    Json(MessageBody::new(format!("No route for {}", req.uri())))
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<MessageBody> {
    Json(MessageBody::new("Internal server error"))
}

/// Every status without a dedicated catcher, e.g. 413 for an oversized body.
#[catch(default)]
pub fn any_error(status: Status, _req: &Request) -> (Status, Json<MessageBody>) {
    let message = status.reason().unwrap_or("Request failed");
    (status, Json(MessageBody::new(message)))
}
