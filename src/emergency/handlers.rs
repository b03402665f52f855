//! Degraded-mode lifecycle handlers
//!
//! One handler per lifecycle event, each building a minimal valid response
//! from canned script. Handlers never fail; at worst they leave the
//! response untouched.

use crate::config::Config;
use crate::protocol::{Request, Response, Status};
use crate::state::ErrorReport;
use super::script;

/// Read-only context handed to every handler
#[derive(Debug, Clone, Copy)]
pub struct EmergencyContext<'a> {
    /// Response identity and menu targets
    pub config: &'a Config,

    /// The recorded failure, if any; handlers embed it into their scripts
    pub report: Option<&'a ErrorReport>,
}

/// Shared essential step: 200 OK, sender/charset identity, greeting script
///
/// The content header is dialect-dependent (`Sentence` vs `Value`); the
/// response's own dialect decides.
pub fn essential(response: &mut Response, ctx: &EmergencyContext) {
    response.status = Status::Ok;
    response.headers.set("Sender", &ctx.config.sender);
    response.headers.set("Charset", &ctx.config.charset);
    response.set_content(script::SHOW_SAKURA);
}

// =============================================================================
// Lifecycle Events
// =============================================================================

pub fn on_first_boot(_request: &Request, response: &mut Response, ctx: &EmergencyContext) {
    essential(response, ctx);
    response.append_content(&script::error_report(ctx.report));
}

pub fn on_boot(_request: &Request, response: &mut Response, ctx: &EmergencyContext) {
    essential(response, ctx);
    response.append_content(&script::error_report(ctx.report));
}

pub fn on_close(_request: &Request, response: &mut Response, ctx: &EmergencyContext) {
    essential(response, ctx);
    response.append_content(script::CLOSE_GHOST);
}

pub fn on_ghost_changed(_request: &Request, response: &mut Response, ctx: &EmergencyContext) {
    essential(response, ctx);
    response.append_content(&script::error_report(ctx.report));
}

pub fn on_shell_changed(_request: &Request, response: &mut Response, ctx: &EmergencyContext) {
    essential(response, ctx);
    response.append_content(&script::error_report(ctx.report));
}

pub fn on_mouse_double_click(_request: &Request, response: &mut Response, ctx: &EmergencyContext) {
    essential(response, ctx);
    response.append_content(&script::choice_menu(ctx.report));
}

/// Map a selected menu index back to its action
///
/// `Reference0` carries the index as a literal decimal string. Showing the
/// traceback is only offered while one exists; an unrecognized index, or a
/// request without `Reference0`, produces no response content.
pub fn on_choice_select(request: &Request, response: &mut Response, ctx: &EmergencyContext) {
    let Some(choice) = request.headers.get_value("Reference0") else {
        return;
    };
    let fragment: Option<String> = match choice {
        "0" => ctx
            .report
            .filter(|r| r.traceback.is_some())
            .map(|r| script::error_report(Some(r))),
        "1" => Some(script::OPEN_GHOST_EXPLORER.to_string()),
        "2" => Some(script::open_browser(&ctx.config.homepage_url)),
        "3" => Some(script::version_script()),
        "4" => Some(script::open_browser(&ctx.config.license_url)),
        "5" => Some(script::DISMISS_BALLOON.to_string()),
        "6" => Some(script::CLOSE_GHOST.to_string()),
        _ => None,
    };
    if let Some(fragment) = fragment {
        essential(response, ctx);
        response.append_content(&fragment);
    }
}

// =============================================================================
// 2.5 String Requests
// =============================================================================

/// Resource strings are never served in degraded mode
pub fn get_string(_request: &Request, response: &mut Response, _ctx: &EmergencyContext) {
    response.status = Status::NoContent;
}

// =============================================================================
// 3.0 Introspection
// =============================================================================

pub fn get_version(_request: &Request, response: &mut Response, ctx: &EmergencyContext) {
    essential(response, ctx);
    response.set_content(crate::VERSION);
}

pub fn get_craftman(_request: &Request, response: &mut Response, ctx: &EmergencyContext) {
    essential(response, ctx);
    response.set_content(crate::CREATOR);
}

pub fn get_name(_request: &Request, response: &mut Response, ctx: &EmergencyContext) {
    essential(response, ctx);
    response.set_content(crate::NAME);
}
