use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};
use uuid::Uuid;

use crate::error::EventResult;
use crate::models::{
    CreateEvent, EventEnvelope, EventListEnvelope, EventResponse, MessageEnvelope, UpdateEvent,
};
use crate::repository::EventRepository;
use crate::service::EventService;

/// OpenAPI documentation for the Events API
#[derive(OpenApi)]
#[openapi(
    paths(list_events, create_event, update_event, delete_event),
    components(
        schemas(
            CreateEvent,
            UpdateEvent,
            EventResponse,
            EventEnvelope,
            EventListEnvelope,
            MessageEnvelope
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Events", description = "Calendar event endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Query parameters accepted by the listing endpoint
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListEventsQuery {
    /// Restrict the listing to a single event
    pub event_id: Option<Uuid>,
}

/// Create the events router with all HTTP endpoints
pub fn router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/events", get(list_events))
        .route("/event", post(create_event))
        .route("/event/{eventId}", put(update_event).delete(delete_event))
        .with_state(shared_service)
}

/// List events, optionally narrowed to a single id
#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    params(ListEventsQuery),
    responses(
        (status = 200, description = "List of events ordered by start date", body = EventListEnvelope),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    Query(query): Query<ListEventsQuery>,
) -> EventResult<Json<EventListEnvelope>> {
    let events = match query.event_id {
        Some(id) => vec![service.get_event(&id).await?],
        None => service.list_events().await?,
    };

    let data = events.iter().map(EventResponse::from).collect();
    Ok(Json(EventListEnvelope { code: 200, data }))
}

/// Create a new event
#[utoipa::path(
    post,
    path = "/event",
    tag = "Events",
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created successfully", body = EventEnvelope),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateEvent>,
) -> EventResult<impl IntoResponse> {
    let event = service.create_event(input).await?;

    let envelope = EventEnvelope {
        code: 201,
        data: EventResponse::from(&event),
    };
    Ok((StatusCode::CREATED, Json(envelope)))
}

/// Update an existing event
#[utoipa::path(
    put,
    path = "/event/{eventId}",
    tag = "Events",
    params(
        ("eventId" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEvent,
    responses(
        (status = 200, description = "Event updated successfully", body = EventEnvelope),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateEvent>,
) -> EventResult<Json<EventEnvelope>> {
    let event = service.update_event(&id, input).await?;

    Ok(Json(EventEnvelope {
        code: 200,
        data: EventResponse::from(&event),
    }))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/event/{eventId}",
    tag = "Events",
    params(
        ("eventId" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted successfully", body = MessageEnvelope),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    UuidPath(id): UuidPath,
) -> EventResult<Json<MessageEnvelope>> {
    service.delete_event(&id).await?;

    Ok(Json(MessageEnvelope {
        code: 200,
        message: "Successfully deleted the event".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventError;
    use crate::models::Event;
    use crate::repository::mock::MockEventRepository;
    use axum::body::Body;
    use axum::http::{Request, header};
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_app(repo: MockEventRepository) -> Router {
        router(EventService::new(repo))
    }

    fn sample_event() -> Event {
        Event {
            id: Uuid::now_v7(),
            title: "Team standup".to_string(),
            description: "Daily sync with the platform team".to_string(),
            start_date: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_event_returns_201_with_stored_values() {
        let mut repo = MockEventRepository::new();
        repo.expect_create().returning(Ok);

        let response = test_app(repo)
            .oneshot(json_request(
                "POST",
                "/event",
                json!({
                    "title": "Team standup",
                    "description": "Daily sync with the platform team",
                    "startDate": "2024-05-01",
                    "endDate": "2024-05-02"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response_json(response).await;
        assert_eq!(body["code"], 201);
        assert_eq!(body["data"]["title"], "Team standup");
        assert_eq!(body["data"]["start"], "2024-05-01");
        assert_eq!(body["data"]["end"], "2024-05-02");
        assert!(Uuid::parse_str(body["data"]["id"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_create_event_with_short_title_returns_400() {
        let mut repo = MockEventRepository::new();
        repo.expect_create().never();

        let response = test_app(repo)
            .oneshot(json_request(
                "POST",
                "/event",
                json!({
                    "title": "ab",
                    "description": "Daily sync with the platform team",
                    "startDate": "2024-05-01",
                    "endDate": "2024-05-02"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["details"].get("title").is_some());
    }

    #[tokio::test]
    async fn test_create_event_escapes_html_in_response() {
        let mut repo = MockEventRepository::new();
        repo.expect_create().returning(Ok);

        let response = test_app(repo)
            .oneshot(json_request(
                "POST",
                "/event",
                json!({
                    "title": "<script>alert(1)</script> standup",
                    "description": "Daily sync with the platform team",
                    "startDate": "2024-05-01",
                    "endDate": "2024-05-02"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response_json(response).await;
        let title = body["data"]["title"].as_str().unwrap();
        assert!(!title.contains('<'));
        assert!(title.starts_with("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn test_list_events_returns_all_with_formatted_dates() {
        let mut repo = MockEventRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![sample_event(), sample_event()]));

        let response = test_app(repo)
            .oneshot(Request::builder().uri("/events").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["code"], 200);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["start"], "2024-05-01");
        assert_eq!(body["data"][0]["end"], "2024-05-02");
    }

    #[tokio::test]
    async fn test_list_events_with_event_id_returns_single_match() {
        let event = sample_event();
        let id = event.id;

        let mut repo = MockEventRepository::new();
        repo.expect_get_by_id()
            .withf(move |candidate| *candidate == id)
            .returning(move |_| Ok(Some(event.clone())));
        repo.expect_list().never();

        let response = test_app(repo)
            .oneshot(
                Request::builder()
                    .uri(format!("/events?eventId={id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["id"], id.to_string());
    }

    #[tokio::test]
    async fn test_list_events_with_unknown_event_id_returns_404() {
        let mut repo = MockEventRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let response = test_app(repo)
            .oneshot(
                Request::builder()
                    .uri(format!("/events?eventId={}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response_json(response).await;
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_storage_fault_returns_500_without_internal_detail() {
        let mut repo = MockEventRepository::new();
        repo.expect_list()
            .returning(|| Err(EventError::Database("connection reset".to_string())));

        let response = test_app(repo)
            .oneshot(Request::builder().uri("/events").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response_json(response).await;
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert_eq!(body["message"], "The operation could not be completed");
        // The driver-level detail stays in the logs, never in the body
        assert!(!body.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_update_event_merges_and_returns_updated_fields() {
        let mut repo = MockEventRepository::new();
        repo.expect_update().returning(|id, input| {
            let mut event = sample_event();
            event.id = *id;
            event.apply_update(input);
            Ok(event)
        });

        let id = Uuid::now_v7();
        let response = test_app(repo)
            .oneshot(json_request(
                "PUT",
                &format!("/event/{id}"),
                json!({ "title": "Sprint review" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["code"], 200);
        assert_eq!(body["data"]["id"], id.to_string());
        assert_eq!(body["data"]["title"], "Sprint review");
        // Untouched fields keep their stored values
        assert_eq!(body["data"]["description"], "Daily sync with the platform team");
    }

    #[tokio::test]
    async fn test_update_nonexistent_event_returns_404() {
        let mut repo = MockEventRepository::new();
        repo.expect_update()
            .returning(|id, _| Err(EventError::NotFound(*id)));

        let response = test_app(repo)
            .oneshot(json_request(
                "PUT",
                &format!("/event/{}", Uuid::now_v7()),
                json!({ "title": "Sprint review" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_event_with_short_title_returns_400() {
        let mut repo = MockEventRepository::new();
        repo.expect_update().never();

        let response = test_app(repo)
            .oneshot(json_request(
                "PUT",
                &format!("/event/{}", Uuid::now_v7()),
                json!({ "title": "ab" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_event_returns_confirmation_message() {
        let mut repo = MockEventRepository::new();
        repo.expect_delete().returning(|_| Ok(true));

        let response = test_app(repo)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/event/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["code"], 200);
        assert_eq!(body["message"], "Successfully deleted the event");
    }

    #[tokio::test]
    async fn test_delete_nonexistent_event_returns_404() {
        let mut repo = MockEventRepository::new();
        repo.expect_delete()
            .returning(|id| Err(EventError::NotFound(*id)));

        let response = test_app(repo)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/event/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_with_invalid_uuid_returns_400() {
        let mut repo = MockEventRepository::new();
        repo.expect_delete().never();

        let response = test_app(repo)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/event/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
