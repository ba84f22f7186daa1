use crate::domain::SubmissionForm;
use crate::models::Submission;
use crate::routes::MessageBody;
use crate::service::{SubmissionError, SubmissionService};
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use uuid::Uuid;

#[derive(serde::Serialize)]
pub struct CreatedSubmission {
    message: &'static str,
    data: Submission,
}

#[tracing::instrument(
    name = "Listing submissions",
    skip(service),
    fields(request_id = %Uuid::new_v4())
)]
#[get("/submissions")]
pub async fn list_submissions(
    service: &State<SubmissionService>,
) -> Result<Json<Vec<Submission>>, SubmissionError> {
    service.list().await.map(Json)
}

#[tracing::instrument(
    name = "Adding a new submission",
    skip(body, service),
    fields(
        request_id = %Uuid::new_v4(),
        submission_fullname = ?body.fullname
    )
)]
#[post("/submissions", data = "<body>")]
pub async fn create_submission(
    body: Json<SubmissionForm>,
    service: &State<SubmissionService>,
) -> Result<(Status, Json<CreatedSubmission>), SubmissionError> {
    let submission = service.create(body.into_inner()).await?;
    Ok((
        Status::Created,
        Json(CreatedSubmission {
            message: "Submission saved successfully",
            data: submission,
        }),
    ))
}

#[tracing::instrument(
    name = "Fetching a submission",
    skip(service),
    fields(request_id = %Uuid::new_v4())
)]
#[get("/submissions/<id>")]
pub async fn get_submission(
    id: &str,
    service: &State<SubmissionService>,
) -> Result<Json<Submission>, SubmissionError> {
    service.get(id).await.map(Json)
}

#[tracing::instrument(
    name = "Deleting a submission",
    skip(service),
    fields(request_id = %Uuid::new_v4())
)]
#[delete("/submissions/<id>")]
pub async fn delete_submission(
    id: &str,
    service: &State<SubmissionService>,
) -> Result<Json<MessageBody>, SubmissionError> {
    service.delete(id).await?;
    Ok(Json(MessageBody::new("Submission deleted successfully")))
}
