use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::config::SESSION_COOKIE;
use crate::error::Error;
use crate::models::{AppState, AwsCredentials};
use crate::services::{open_session, random_session_id};
use crate::templates::LoginTemplate;

use super::helpers::{build_template_globals, current_session, render_template, session_id_from_jar, TemplateGlobals};

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub access_key_id: String,
    #[serde(default)]
    pub secret_access_key: String,
}

fn render_login(state: &AppState, jar: &CookieJar, error: Option<String>, account_id: String) -> Response {
    let TemplateGlobals {
        session,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(state, jar);
    render_template(
        state,
        jar,
        LoginTemplate {
            session,
            base_url,
            flash_messages,
            has_flash_messages,
            error,
            account_id,
        },
    )
}

pub async fn login_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if current_session(&state, &jar).is_some() {
        return Redirect::to("/instances").into_response();
    }
    render_login(&state, &jar, None, String::new())
}

pub async fn login_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    let credentials = AwsCredentials::new(form.account_id, form.access_key_id, form.secret_access_key);
    let account_id = credentials.account_id.clone();
    if !credentials.is_complete() {
        return render_login(&state, &jar, Some(Error::MissingCredentials.to_string()), account_id);
    }

    match open_session(state.connector.as_ref(), credentials).await {
        Ok(session) => {
            let sid = random_session_id();
            let previous = session_id_from_jar(&jar);
            state.insert_session(sid.clone(), session, previous.as_deref());
            let mut cookie = Cookie::new(SESSION_COOKIE, sid);
            cookie.set_path("/");
            cookie.set_http_only(true);
            cookie.set_same_site(SameSite::Strict);
            cookie.set_max_age(time::Duration::seconds(
                i64::try_from(state.session_idle_timeout.as_secs()).unwrap_or(i64::MAX),
            ));
            (jar.add(cookie), Redirect::to("/instances")).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, detail = ?e.detail(), account_id = %account_id, "Sign-in failed");
            render_login(&state, &jar, Some(format!("Error connecting to AWS: {}", e)), account_id)
        }
    }
}

pub async fn logout_post(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(sid) = session_id_from_jar(&jar) {
        state.remove_session(&sid);
        tracing::info!("Session closed; credentials discarded");
    }
    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");
    (jar.remove(removal), Redirect::to("/login")).into_response()
}

pub async fn root_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if current_session(&state, &jar).is_some() {
        return Redirect::to("/instances").into_response();
    }
    Redirect::to("/login").into_response()
}
