use crate::common::error::AppError;
use crate::common::sanitize::escape;
use crate::views::{View, ViewRenderer};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

/// What a catalog operation decided to send back.
#[derive(Debug)]
pub enum Page {
    Render(View),
    Redirect(String),
}

impl Page {
    pub fn redirect(location: impl Into<String>) -> Self {
        Page::Redirect(location.into())
    }

    pub fn respond(self, renderer: &dyn ViewRenderer) -> Result<Response, AppError> {
        match self {
            Page::Render(view) => {
                tracing::debug!(template = view.template.name(), "Rendering view");
                let body = renderer.render(&view).map_err(AppError::Render)?;
                Ok(Html(body).into_response())
            }
            Page::Redirect(location) => Ok(Redirect::to(&location).into_response()),
        }
    }
}

pub struct ErrorPage(pub String, pub StatusCode);

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        let (message, status) = (self.0, self.1);
        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><title>{code}</title></head>\
             <body><h1>{code}</h1><p>{message}</p><p><a href=\"/catalog/genres\">Back to genres</a></p></body></html>\n",
            code = status,
            message = escape(&message),
        );
        (status, Html(body)).into_response()
    }
}
