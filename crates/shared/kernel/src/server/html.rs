//! Minimal server-side rendering helpers.
//!
//! Views are plain functions producing HTML strings; every user-supplied value
//! must pass through [`escape`] before it is interpolated.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use std::borrow::Cow;
use std::fmt::Write;
use taco_domain::validation::FieldErrors;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
.grid{display:flex;flex-wrap:wrap;gap:1.5rem}\
.ingredient-group{min-width:12rem}\
.validationError{color:#b00020;display:block}\
label{display:block;margin:.25rem 0}";

/// Escapes the five HTML-significant characters.
#[must_use]
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Wraps `body` into the shared page layout. `title` is escaped, `body` is trusted.
#[must_use]
pub fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8"/>
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
    ))
}

/// Renders the messages recorded for `field`, or nothing when the field is valid.
#[must_use]
pub fn field_errors(errors: &FieldErrors, field: &str) -> String {
    errors.for_field(field).fold(String::new(), |mut out, message| {
        let _ = write!(out, r#"<span class="validationError">{}</span>"#, escape(message));
        out
    })
}

/// `302 Found` redirect to `location`.
#[must_use]
pub fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, HeaderValue::from_static(location))]).into_response()
}
