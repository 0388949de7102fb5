use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::handlers::helpers::{
    build_template_globals, current_session, push_flash, reject_malformed_target, render_template, TemplateGlobals,
};
use crate::models::{AppState, InstanceView, LifecycleCommand, RegionSectionView};
use crate::services::{check_instance_block, execute_lifecycle, scan_running_instances};
use crate::templates::InstancesPageTemplate;

#[derive(Deserialize, Default)]
pub struct TerminateForm {
    #[serde(default)]
    pub confirmed: String,
}

/// Fresh sequential sweep over every region in the session.
pub async fn instances_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let Some((_, session)) = current_session(&state, &jar) else {
        return Redirect::to("/login").into_response();
    };

    let scan = scan_running_instances(session.provider.as_ref(), &session.regions).await;
    let sections: Vec<RegionSectionView> = scan
        .sections
        .iter()
        .map(|section| RegionSectionView {
            region: section.region.clone(),
            instances: section
                .instances
                .iter()
                .map(|i| {
                    InstanceView::from_instance(i, &section.region)
                        .protected(state.is_instance_protected(&i.instance_id))
                })
                .collect(),
        })
        .collect();

    let TemplateGlobals { session: session_view, base_url, flash_messages, has_flash_messages } =
        build_template_globals(&state, &jar);
    render_template(&state, &jar, InstancesPageTemplate {
        session: session_view,
        base_url,
        flash_messages,
        has_flash_messages,
        sections,
        failed_regions: scan.failed_regions,
        regions_scanned: session.regions.len(),
        total_count: scan.total,
    })
}

pub async fn instance_stop_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((region, instance_id)): Path<(String, String)>,
) -> impl IntoResponse {
    run_lifecycle(&state, &jar, LifecycleCommand::Stop, &region, &instance_id).await
}

pub async fn instance_terminate_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((region, instance_id)): Path<(String, String)>,
    Form(form): Form<TerminateForm>,
) -> impl IntoResponse {
    if let Some(rejection) = reject_malformed_target(&state, &jar, &region, &instance_id) {
        return rejection;
    }
    if form.confirmed != "yes" {
        return Redirect::to(&format!("/confirm/terminate-instance/{}/{}", region, instance_id)).into_response();
    }
    run_lifecycle(&state, &jar, LifecycleCommand::Terminate, &region, &instance_id).await
}

/// Fire one lifecycle command, flash the outcome and go back to the list,
/// which re-scans on load.
async fn run_lifecycle(
    state: &AppState,
    jar: &CookieJar,
    command: LifecycleCommand,
    region: &str,
    instance_id: &str,
) -> Response {
    let Some((_, session)) = current_session(state, jar) else {
        return Redirect::to("/login").into_response();
    };

    if let Some(rejection) = reject_malformed_target(state, jar, region, instance_id) {
        return rejection;
    }

    if let Some(reason) = check_instance_block(&state.protected_instances, instance_id) {
        tracing::warn!(instance_id, region, command = command.verb(), "Refused lifecycle command on protected instance");
        push_flash(state, jar, reason.message());
        return Redirect::to("/instances").into_response();
    }

    match execute_lifecycle(session.provider.as_ref(), command, region, instance_id).await {
        Ok(change) => {
            tracing::info!(
                instance_id,
                region,
                command = command.verb(),
                current_state = change.current.as_str(),
                "Lifecycle command accepted"
            );
            push_flash(state, jar, command.success_message(instance_id));
        }
        Err(e) => {
            tracing::error!(instance_id, region, command = command.verb(), error = %e, "Lifecycle command failed");
            push_flash(state, jar, command.failure_message(&e.to_string()));
        }
    }
    Redirect::to("/instances").into_response()
}
