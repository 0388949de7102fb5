use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;

use crate::handlers::helpers::{build_template_globals, current_session, render_template, TemplateGlobals};
use crate::models::AppState;
use crate::templates::RegionsPageTemplate;

/// Regions as fetched at sign-in; no provider call here.
pub async fn regions_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let Some((_, session)) = current_session(&state, &jar) else {
        return Redirect::to("/login").into_response();
    };
    let TemplateGlobals { session: session_view, base_url, flash_messages, has_flash_messages } =
        build_template_globals(&state, &jar);
    render_template(&state, &jar, RegionsPageTemplate {
        session: session_view,
        base_url,
        flash_messages,
        has_flash_messages,
        regions: &session.regions,
        home_region: session.provider.home_region().to_string(),
    })
}
