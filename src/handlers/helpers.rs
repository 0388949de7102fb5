use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::config::SESSION_COOKIE;
use crate::models::{AppState, Session, SessionView};
use crate::utils::{is_valid_instance_id, is_valid_region};

pub fn session_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

/// Session id and session for the request, when signed in.
pub fn current_session(state: &AppState, jar: &CookieJar) -> Option<(String, Session)> {
    let sid = session_id_from_jar(jar)?;
    let session = state.session(&sid)?;
    Some((sid, session))
}

pub fn take_flash_messages(state: &AppState, jar: &CookieJar) -> Vec<String> {
    let Some(sid) = session_id_from_jar(jar) else {
        return vec![];
    };
    match state.flash_store.lock() {
        Ok(mut fs) => fs.remove(&sid).unwrap_or_default(),
        Err(_) => vec![],
    }
}

pub fn push_flash(state: &AppState, jar: &CookieJar, message: impl Into<String>) {
    if let Some(sid) = session_id_from_jar(jar) {
        state.push_flash(&sid, message);
    }
}

/// Region and instance id come from the path and end up in redirects and
/// provider calls. Anything malformed is flashed and sent back to the list.
pub fn reject_malformed_target(state: &AppState, jar: &CookieJar, region: &str, instance_id: &str) -> Option<Response> {
    if is_valid_region(region) && is_valid_instance_id(instance_id) {
        return None;
    }
    tracing::warn!(region = ?region, instance_id = ?instance_id, "Rejected malformed instance target");
    push_flash(state, jar, format!("Unknown instance {} in {}", instance_id, region));
    Some(Redirect::to("/instances").into_response())
}

#[derive(Default)]
pub struct TemplateGlobals {
    pub session: Option<SessionView>,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
}

pub fn build_template_globals(state: &AppState, jar: &CookieJar) -> TemplateGlobals {
    let session = current_session(state, jar).map(|(_, s)| s.view());
    let flash_messages = take_flash_messages(state, jar);
    let has_flash_messages = !flash_messages.is_empty();
    TemplateGlobals {
        session,
        base_url: state.public_base_url.clone(),
        flash_messages,
        has_flash_messages,
    }
}

pub fn inject_context(state: &AppState, jar: &CookieJar, mut html: String) -> Response {
    // Exposes non-secret page context to scripts.
    let session = current_session(state, jar).map(|(_, s)| s.view());
    let context = serde_json::json!({
        "baseUrl": state.public_base_url,
        "session": session,
    });
    let context_str = serde_json::to_string(&context).unwrap_or_else(|_| "{}".into());
    let inject = format!(
        r#"<script>window.__APP_CONTEXT__ = {};</script></body>"#,
        context_str.replace("</", "<\\/")
    );
    html = html.replace("</body>", &inject);
    Html(html).into_response()
}

pub fn render_template<T: askama::Template>(state: &AppState, jar: &CookieJar, t: T) -> Response {
    match t.render() {
        Ok(body) => inject_context(state, jar, body),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
