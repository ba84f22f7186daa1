use crate::configuration::CorsSettings;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Method, Status};
use rocket::{Request, Response};
use std::path::PathBuf;

/// Adds CORS headers to responses for requests carrying an allowed `Origin`.
///
/// Preflight requests are answered by [`preflight`]; this fairing only
/// decorates the response.
pub struct Cors {
    allow_origins: Vec<String>,
    allow_methods: String,
    allow_headers: String,
    max_age: Option<String>,
}

impl Cors {
    pub fn new(settings: &CorsSettings) -> Self {
        Self {
            allow_origins: settings
                .allow_origins
                .iter()
                .map(|o| o.to_lowercase())
                .collect(),
            allow_methods: settings.allow_methods.join(", "),
            allow_headers: settings.allow_headers.join(", "),
            max_age: settings.max_age_seconds.map(|s| s.to_string()),
        }
    }

    /// The `Access-Control-Allow-Origin` value for `origin`, if it is allowed.
    fn allowed_origin(&self, origin: &str) -> Option<String> {
        if self.allow_origins.iter().any(|o| o == "*") {
            Some("*".to_string())
        } else if self.allow_origins.contains(&origin.to_lowercase()) {
            Some(origin.to_string())
        } else {
            None
        }
    }
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let origin = match request.headers().get_one("Origin") {
            Some(origin) => origin,
            None => return,
        };
        let allowed = match self.allowed_origin(origin) {
            Some(allowed) => allowed,
            None => return,
        };

        if allowed != "*" {
            response.set_header(Header::new("Vary", "Origin"));
        }
        response.set_header(Header::new("Access-Control-Allow-Origin", allowed));

        if request.method() != Method::Options {
            return;
        }
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            self.allow_methods.clone(),
        ));
        // "*" mirrors whatever headers the browser asked for.
        let allow_headers = match self.allow_headers.as_str() {
            "*" => request
                .headers()
                .get_one("Access-Control-Request-Headers")
                .map(str::to_string),
            "" => None,
            listed => Some(listed.to_string()),
        };
        if let Some(allow_headers) = allow_headers {
            response.set_header(Header::new("Access-Control-Allow-Headers", allow_headers));
        }
        if let Some(max_age) = &self.max_age {
            response.set_header(Header::new("Access-Control-Max-Age", max_age.clone()));
        }
    }
}

#[options("/<_path..>")]
pub fn preflight(_path: PathBuf) -> Status {
    Status::NoContent
}
