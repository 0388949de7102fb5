use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;

use crate::models::{AppState, ConfirmationAction};
use crate::services::check_instance_block;
use crate::templates::ConfirmationTemplate;
use super::helpers::{build_template_globals, push_flash, reject_malformed_target, render_template, TemplateGlobals};

pub async fn confirmation_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((action, region, instance_id)): Path<(String, String, String)>,
) -> impl IntoResponse {
    let Some(action) = ConfirmationAction::from_str(&action) else {
        return Redirect::to("/instances").into_response();
    };
    if let Some(rejection) = reject_malformed_target(&state, &jar, &region, &instance_id) {
        return rejection;
    }
    if let Some(reason) = check_instance_block(&state.protected_instances, &instance_id) {
        push_flash(&state, &jar, reason.message());
        return Redirect::to("/instances").into_response();
    }

    let (title, target_url, form_method, confirm_label, button_class, hidden_fields) = match action {
        ConfirmationAction::StopInstance => (
            "Stop instance",
            format!("/instance/{}/{}/stop", region, instance_id),
            "post",
            "Stop Instance",
            "btn-stop",
            vec![],
        ),
        ConfirmationAction::TerminateInstance => (
            "Terminate instance",
            format!("/confirm/{}/{}/{}", ConfirmationAction::TerminateInstanceFinal.to_str(), region, instance_id),
            "get",
            "Continue",
            "btn-terminate",
            vec![],
        ),
        ConfirmationAction::TerminateInstanceFinal => (
            "Terminate instance",
            format!("/instance/{}/{}/terminate", region, instance_id),
            "post",
            "Terminate Instance",
            "btn-danger",
            vec![("confirmed".to_string(), "yes".to_string())],
        ),
    };

    let TemplateGlobals { session, base_url, flash_messages, has_flash_messages } = build_template_globals(&state, &jar);
    render_template(&state, &jar, ConfirmationTemplate {
        session,
        base_url,
        flash_messages,
        has_flash_messages,
        title: title.to_string(),
        message: action.message(&instance_id, &region),
        target_url,
        form_method: form_method.to_string(),
        confirm_label: confirm_label.to_string(),
        cancel_url: "/instances".to_string(),
        button_class: button_class.to_string(),
        hidden_fields,
    })
}
