use std::convert::Infallible;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, error, info, warn};
use warp::filters::BoxedFilter;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reply::{Json, WithStatus};
use warp::{Filter, Rejection, Reply};

use crate::history::IntakeService;
use crate::triage::CheckResult;

const MAX_BODY_BYTES: u64 = 16 * 1024;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub items: Vec<CheckResult>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_reply(code: StatusCode, message: impl Into<String>) -> WithStatus<Json> {
    let body = ErrorResponse { error: message.into() };
    warp::reply::with_status(warp::reply::json(&body), code)
}

fn boxed_reply<R: Reply + 'static>(reply: R) -> Box<dyn Reply> {
    Box::new(reply)
}

pub struct RestApi {
    service: IntakeService,
    static_dir: Option<PathBuf>,
}

impl RestApi {
    pub fn new(service: IntakeService) -> Self {
        RestApi { service, static_dir: None }
    }

    /// Also serve dashboard files from `dir` for paths outside the API.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// All routes, with rejections turned into JSON error replies.
    pub fn routes(&self) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
        let api: BoxedFilter<(Box<dyn Reply>,)> = self.api_routes().map(boxed_reply).boxed();

        let routes = match &self.static_dir {
            Some(dir) => api
                .or(warp::fs::dir(dir.clone()).map(boxed_reply))
                .unify()
                .boxed(),
            None => api,
        };

        routes.recover(handle_rejection)
    }

    pub fn api_routes(&self) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
        self.health()
            .or(self.history())
            .or(self.check())
    }

    fn health(&self) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
        warp::path!("api" / "v1" / "health")
            .and(warp::get())
            .map(|| warp::reply::json(&HealthResponse { status: "ok" }))
    }

    fn history(&self) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
        let service = self.service.clone();

        warp::path!("api" / "v1" / "history")
            .and(warp::get())
            .map(move || {
                let items = service.history();
                debug!(count = items.len(), "serving check history");
                warp::reply::json(&HistoryResponse { items })
            })
    }

    fn check(&self) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
        let service = self.service.clone();

        warp::path!("api" / "v1" / "check")
            .and(warp::post())
            .and(warp::body::content_length_limit(MAX_BODY_BYTES))
            .and(warp::body::bytes())
            .and_then(move |body: Bytes| {
                let service = service.clone();
                async move {
                    // Bodies that are not JSON objects validate as empty records
                    let raw: serde_json::Value =
                        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

                    match service.check(&raw) {
                        Ok(result) => {
                            info!(status = %result.overall_status, notes = result.notes.len(), "check recorded");
                            Ok::<_, Infallible>(warp::reply::with_status(
                                warp::reply::json(&result),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            warn!(field = err.field(), "check rejected: {}", err);
                            Ok(error_reply(StatusCode::BAD_REQUEST, err.to_string()))
                        }
                    }
                }
            })
    }
}

async fn handle_rejection(err: Rejection) -> Result<WithStatus<Json>, Infallible> {
    let reply = if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        error_reply(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else if err.is_not_found() {
        error_reply(StatusCode::NOT_FOUND, "Not found")
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        error_reply(StatusCode::PAYLOAD_TOO_LARGE, "Payload too large")
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        error_reply(StatusCode::LENGTH_REQUIRED, "Length required")
    } else {
        error!("unhandled rejection: {:?}", err);
        error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };
    Ok(reply)
}
