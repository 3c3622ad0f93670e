use crate::core::service::ActivityService;
use crate::core::ActivityStore;
use crate::utils::error::{ErrorCategory, Result, SignupError};
use serde::Serialize;
use serde_json::{json, Value};
use tiny_http::Method;
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self { status: 200, body },
            Err(e) => Self::from_error(Operation::List, &SignupError::SerializationError(e)),
        }
    }

    fn detail(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "detail": message }),
        }
    }

    fn from_error(operation: Operation, error: &SignupError) -> Self {
        Self::detail(status_for(operation, error), &error.user_friendly_message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    List,
    SignUp,
    Unregister,
}

#[derive(Debug, PartialEq, Eq)]
enum Route {
    Activities,
    SignUp(String),
    Unregister(String),
}

/// 登記失敗一律回 400，取消失敗一律回 404
fn status_for(operation: Operation, error: &SignupError) -> u16 {
    match error.category() {
        ErrorCategory::NotFound | ErrorCategory::Conflict => match operation {
            Operation::SignUp => 400,
            Operation::Unregister | Operation::List => 404,
        },
        ErrorCategory::Request => 422,
        ErrorCategory::Internal | ErrorCategory::Configuration => 500,
    }
}

struct ParsedUrl {
    segments: Vec<String>,
    email: String,
}

fn parse_url(raw_url: &str) -> Result<ParsedUrl> {
    let invalid = |reason: String| SignupError::InvalidRequest {
        message: format!("Malformed request URL: {}", reason),
    };

    // 請求目標一律當作 path，`//x` 不能被解讀成 host
    if !raw_url.starts_with('/') {
        return Err(invalid(format!("request target must start with '/': {}", raw_url)));
    }
    let url = Url::parse(&format!("http://localhost{}", raw_url))
        .map_err(|e| invalid(e.to_string()))?;

    let mut segments = Vec::new();
    for segment in url.path_segments().into_iter().flatten() {
        if segment.is_empty() {
            continue;
        }
        let decoded = urlencoding::decode(segment).map_err(|e| invalid(e.to_string()))?;
        segments.push(decoded.into_owned());
    }

    let email = url
        .query_pairs()
        .find(|(key, _)| key == "email")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();

    Ok(ParsedUrl { segments, email })
}

fn match_route(segments: &[String]) -> Option<Route> {
    match segments {
        [root] if root == "activities" => Some(Route::Activities),
        [root, name, action] if root == "activities" && action == "signup" => {
            Some(Route::SignUp(name.clone()))
        }
        [root, name, action] if root == "activities" && action == "unregister" => {
            Some(Route::Unregister(name.clone()))
        }
        _ => None,
    }
}

pub fn handle<S: ActivityStore>(
    service: &ActivityService<S>,
    method: &Method,
    raw_url: &str,
) -> ApiResponse {
    let parsed = match parse_url(raw_url) {
        Ok(parsed) => parsed,
        Err(e) => return ApiResponse::detail(400, &e.user_friendly_message()),
    };

    let Some(route) = match_route(&parsed.segments) else {
        return ApiResponse::detail(404, "Not Found");
    };

    match (route, method) {
        (Route::Activities, Method::Get) => match service.list_activities() {
            Ok(directory) => ApiResponse::ok(&directory),
            Err(e) => ApiResponse::from_error(Operation::List, &e),
        },
        (Route::SignUp(activity), Method::Post) => {
            match service.sign_up(&activity, &parsed.email) {
                Ok(confirmation) => ApiResponse::ok(&confirmation),
                Err(e) => ApiResponse::from_error(Operation::SignUp, &e),
            }
        }
        (Route::Unregister(activity), Method::Delete) => {
            match service.unregister(&activity, &parsed.email) {
                Ok(confirmation) => ApiResponse::ok(&confirmation),
                Err(e) => ApiResponse::from_error(Operation::Unregister, &e),
            }
        }
        _ => ApiResponse::detail(405, "Method Not Allowed"),
    }
}
