use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;
use tower_http::{
	cors::CorsLayer,
	trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use stay_service::{
	DetailsRequest, DetailsResponse, Error as ServiceError, ListQuery, ListResponse,
	SuggestionsRequest, SuggestionsResponse,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/list", get(list))
		.route("/suggestions", get(suggestions))
		.route("/details", get(details))
		.layer(
			TraceLayer::new_for_http()
				.make_span_with(DefaultMakeSpan::new().level(Level::INFO))
				.on_response(DefaultOnResponse::new().level(Level::INFO)),
		)
		.layer(CorsLayer::permissive())
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn list(
	State(state): State<AppState>,
	Query(pairs): Query<Vec<(String, String)>>,
) -> Json<ListResponse> {
	Json(state.service.list(&ListQuery::from_pairs(&pairs)))
}

async fn suggestions(
	State(state): State<AppState>,
	Query(pairs): Query<Vec<(String, String)>>,
) -> Json<SuggestionsResponse> {
	Json(state.service.suggestions(&SuggestionsRequest::from_pairs(&pairs)))
}

async fn details(
	State(state): State<AppState>,
	Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<DetailsResponse>, ApiError> {
	let response = state.service.details(&DetailsRequest::from_pairs(&pairs))?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::NotFound { message } => ApiError::new(
				StatusCode::NOT_FOUND,
				"NOT_FOUND",
				message,
				Some(vec!["$.id".to_string()]),
			),
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}
