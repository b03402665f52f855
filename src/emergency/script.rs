//! Script fragments
//!
//! The canned talk-script pieces emitted by the degraded-mode handlers,
//! and the formatting of error reports and the fixed choice menu.

use crate::state::ErrorReport;

/// Greeting: show the main character, surface 0
pub const SHOW_SAKURA: &str = "\\h\\s0";

/// Shut the ghost down
pub const CLOSE_GHOST: &str = "\\-\\e";

/// Dismiss the balloon without further action
pub const DISMISS_BALLOON: &str = "\\b[-1]\\e";

/// Open the platform's ghost-selection UI
pub const OPEN_GHOST_EXPLORER: &str = "\\b[-1]\\![open,ghostexplorer]\\e";

/// Substituted when a failure was recorded without a message
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error.";

/// Fixed-order double-click menu; indices are positional and stable, and
/// `Show Traceback` (index 0) is only listed when a traceback exists
pub const MENU_ENTRIES: [&str; 7] = [
    "Show Traceback",
    "Change Ghost",
    "Homepage",
    "Version",
    "License",
    "Close",
    "Quit",
];

/// Open a URL in the host's browser
pub fn open_browser(url: &str) -> String {
    format!("\\b[-1]\\![open,browser,{url}]\\e")
}

/// Report the running product and version
pub fn version_script() -> String {
    format!("\\_q{}/{}\\e", crate::NAME, crate::VERSION)
}

/// Render a recorded failure as a talk script
///
/// The message is embedded verbatim; with a traceback the two are
/// separated by a blank line. Every caller gets the same markup wrapper.
pub fn error_report(report: Option<&ErrorReport>) -> String {
    let message = report
        .and_then(|r| r.message.as_deref())
        .unwrap_or(UNKNOWN_ERROR_MESSAGE);
    match report.and_then(|r| r.traceback.as_deref()) {
        Some(traceback) => format!("\\_q{message}\\n\\n{traceback}\\x\\c\\b[-1]\\e"),
        None => format!("\\_q{message}\\x\\c\\b[-1]\\e"),
    }
}

/// Render the double-click choice menu
///
/// Each entry renders as `- \q[label,index]` with its fixed positional
/// index, so the selection handler can map `Reference0` back by value.
pub fn choice_menu(report: Option<&ErrorReport>) -> String {
    let message = report
        .and_then(|r| r.message.as_deref())
        .unwrap_or(UNKNOWN_ERROR_MESSAGE);
    let has_traceback = report.and_then(|r| r.traceback.as_deref()).is_some();

    let mut script = format!("\\_q{message}\\n\\n");
    let first = if has_traceback { 0 } else { 1 };
    for (index, label) in MENU_ENTRIES.iter().enumerate().skip(first) {
        script.push_str(&format!("- \\q[{label},{index}]\\n"));
    }
    script.push_str("\\_q\\e");
    script
}
