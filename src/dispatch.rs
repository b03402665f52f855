//! Protocol dispatcher
//!
//! Routes a parsed request to a lifecycle handler, purely by value: the
//! dialect decides the routing rules (2.x names a command class and an
//! `Event` header; 3.0 names everything in the `ID` header), and a
//! data-driven table maps lifecycle events to handlers.

use crate::config::Config;
use crate::emergency::handlers::{self, EmergencyContext};
use crate::emergency::script;
use crate::protocol::{Dialect, Request, Response, Status};
use crate::state::SharedState;

/// A degraded-mode lifecycle handler
type LifecycleHandler = fn(&Request, &mut Response, &EmergencyContext);

/// Lifecycle routing table, shared by both dialects
const LIFECYCLE_HANDLERS: &[(&str, LifecycleHandler)] = &[
    ("OnFirstBoot", handlers::on_first_boot),
    ("OnBoot", handlers::on_boot),
    ("OnClose", handlers::on_close),
    ("OnGhostChanged", handlers::on_ghost_changed),
    ("OnShellChanged", handlers::on_shell_changed),
    ("OnMouseDoubleClick", handlers::on_mouse_double_click),
    ("OnChoiceSelect", handlers::on_choice_select),
];

fn lifecycle_handler(event: &str) -> Option<LifecycleHandler> {
    LIFECYCLE_HANDLERS
        .iter()
        .find(|(name, _)| *name == event)
        .map(|(_, handler)| *handler)
}

/// Dispatch a parsed request to its handler and return the response
///
/// The method token is normalized to uppercase before routing; anything
/// other than `GET` acknowledges with no content. The returned response is
/// always well-formed; unhandled paths keep the 500 default.
pub fn dispatch(request: &Request, config: &Config, state: &SharedState) -> Response {
    let mut response = Response::default();

    let method = request.method.to_ascii_uppercase();
    if method != "GET" {
        if request.name.is_none() {
            response.version = Dialect::V3;
        }
        response.status = Status::NoContent;
        return response;
    }

    response.status = Status::Ok;
    match request.name.as_deref() {
        Some(name) => dispatch_v2(name, request, &mut response, config, state),
        None => dispatch_v3(request, &mut response, config, state),
    }
    response
}

// =============================================================================
// SHIORI/2.x
// =============================================================================

fn dispatch_v2(
    name: &str,
    request: &Request,
    response: &mut Response,
    config: &Config,
    state: &SharedState,
) {
    match name {
        // Acknowledge only
        "Version" => {}

        "String" => handlers::get_string(request, response, &EmergencyContext {
            config,
            report: None,
        }),

        "Sentence" => {
            let Some(event) = request.headers.get_value("Event") else {
                response.status = Status::BadRequest;
                return;
            };
            tracing::debug!("Routing 2.x event {}", event);
            if !state.is_loaded() {
                let report = state.report();
                let ctx = EmergencyContext {
                    config,
                    report: report.as_ref(),
                };
                match lifecycle_handler(event) {
                    Some(handler) => handler(request, response, &ctx),
                    None => response.status = Status::NoContent,
                }
            } else {
                deliver_pending_report(event, request, response, config, state);
            }
        }

        // Unknown command classes acknowledge with no headers
        _ => {}
    }
}

// =============================================================================
// SHIORI/3.0
// =============================================================================

fn dispatch_v3(
    request: &Request,
    response: &mut Response,
    config: &Config,
    state: &SharedState,
) {
    // The 3.0 answer is always a 3.0 answer, whatever the request claimed
    response.version = Dialect::V3;

    let Some(id) = request.headers.get_value("ID") else {
        // No ID: hand the default response back as-is
        response.status = Status::InternalServerError;
        return;
    };
    tracing::debug!("Routing 3.0 id {}", id);

    let report = state.report();
    let ctx = EmergencyContext {
        config,
        report: report.as_ref(),
    };
    match id {
        "craftman" => handlers::get_craftman(request, response, &ctx),
        "name" => handlers::get_name(request, response, &ctx),
        "version" => handlers::get_version(request, response, &ctx),
        _ => {
            if !state.is_loaded() {
                if let Some(handler) = lifecycle_handler(id) {
                    handler(request, response, &ctx);
                } else if id.starts_with(|c: char| c.is_ascii_lowercase()) {
                    // Resource-string lookups use lowercase identifiers
                    handlers::get_string(request, response, &ctx);
                } else {
                    response.status = Status::NoContent;
                }
            } else {
                deliver_pending_report(id, request, response, config, state);
            }
        }
    }
}

// =============================================================================
// One-shot Error Reporting
// =============================================================================

/// Surface a pending failure exactly once
///
/// Applies only when the primary engine did initialize: the next lifecycle
/// event (identifier starting `"On"`) after a failure consumes the latch
/// and answers with the error report; other identifiers leave the latch
/// armed.
fn deliver_pending_report(
    identifier: &str,
    _request: &Request,
    response: &mut Response,
    config: &Config,
    state: &SharedState,
) {
    if !identifier.starts_with("On") {
        return;
    }
    if let Some(report) = state.take_pending_report() {
        let ctx = EmergencyContext {
            config,
            report: Some(&report),
        };
        handlers::essential(response, &ctx);
        response.append_content(&script::error_report(Some(&report)));
    }
}
