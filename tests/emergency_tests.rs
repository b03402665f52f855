//! Emergency Handler Tests
//!
//! Degraded-mode responses: boot reports, the double-click menu, choice
//! mapping, and error-report formatting.

use kagari::config::Config;
use kagari::emergency::respond;
use kagari::state::{ErrorReport, SharedState};

fn answer(raw: &[u8], state: &SharedState) -> String {
    let config = Config::default();
    String::from_utf8(respond(raw, &config, state)).unwrap()
}

fn failed_state(message: &str, traceback: Option<&str>) -> SharedState {
    let state = SharedState::new();
    let report = match traceback {
        Some(tb) => ErrorReport::with_traceback(message, tb),
        None => ErrorReport::new(message),
    };
    state.record_load_failure(report);
    state
}

// =============================================================================
// Boot Event Tests
// =============================================================================

#[test]
fn test_boot_without_a_recorded_failure_reports_unknown_error() {
    let text = answer(
        b"GET Sentence SHIORI/2.2\r\nEvent: OnBoot\r\n\r\n",
        &SharedState::new(),
    );

    assert_eq!(
        text,
        "SHIORI/2.5 200 OK\r\n\
         Sender: kagari/embryo\r\n\
         Charset: US-ASCII\r\n\
         Sentence: \\h\\s0\\_qUnknown error.\\x\\c\\b[-1]\\e\r\n\r\n"
    );
}

#[test]
fn test_boot_embeds_the_recorded_message() {
    let state = failed_state("Unable to load the scripting runtime.", None);
    let text = answer(b"GET Sentence SHIORI/2.2\r\nEvent: OnFirstBoot\r\n\r\n", &state);

    assert!(text.contains(
        "Sentence: \\h\\s0\\_qUnable to load the scripting runtime.\\x\\c\\b[-1]\\e\r\n"
    ));
}

#[test]
fn test_boot_embeds_message_and_traceback_separated_by_a_blank_line() {
    let state = failed_state("boom", Some("line 1\\nline 2"));
    let text = answer(b"GET Sentence SHIORI/2.2\r\nEvent: OnBoot\r\n\r\n", &state);

    assert!(text.contains("\\_qboom\\n\\nline 1\\nline 2\\x\\c\\b[-1]\\e"));
}

#[test]
fn test_ghost_and_shell_changed_report_like_boot() {
    let state = failed_state("boom", None);
    for event in ["OnGhostChanged", "OnShellChanged"] {
        let raw = format!("GET Sentence SHIORI/2.2\r\nEvent: {event}\r\n\r\n");
        let text = answer(raw.as_bytes(), &state);
        assert!(text.contains("\\_qboom\\x\\c\\b[-1]\\e"), "event {event}");
    }
}

#[test]
fn test_close_appends_the_close_fragment_without_a_report() {
    let state = failed_state("boom", None);
    let text = answer(b"GET Sentence SHIORI/2.2\r\nEvent: OnClose\r\n\r\n", &state);

    assert!(text.contains("Sentence: \\h\\s0\\-\\e\r\n"));
    assert!(!text.contains("boom"));
}

// =============================================================================
// Double-click Menu Tests
// =============================================================================

#[test]
fn test_double_click_menu_lists_fixed_entries() {
    let text = answer(
        b"GET Sentence SHIORI/2.2\r\nEvent: OnMouseDoubleClick\r\n\r\n",
        &SharedState::new(),
    );

    // No traceback: Show Traceback is withheld, indices stay positional
    assert!(!text.contains("Show Traceback"));
    assert!(text.contains("- \\q[Change Ghost,1]\\n"));
    assert!(text.contains("- \\q[Homepage,2]\\n"));
    assert!(text.contains("- \\q[Version,3]\\n"));
    assert!(text.contains("- \\q[License,4]\\n"));
    assert!(text.contains("- \\q[Close,5]\\n"));
    assert!(text.contains("- \\q[Quit,6]\\n"));
    assert!(text.contains("\\_qUnknown error.\\n\\n"));
    assert!(text.contains("\\_q\\e"));
}

#[test]
fn test_double_click_menu_offers_traceback_only_when_one_exists() {
    let state = failed_state("boom", Some("trace"));
    let text = answer(
        b"GET Sentence SHIORI/2.2\r\nEvent: OnMouseDoubleClick\r\n\r\n",
        &state,
    );

    assert!(text.contains("- \\q[Show Traceback,0]\\n"));
    assert!(text.contains("\\_qboom\\n\\n"));
}

// =============================================================================
// Choice Selection Tests
// =============================================================================

fn choose(reference0: &str, state: &SharedState) -> String {
    let raw = format!(
        "GET Sentence SHIORI/2.2\r\nEvent: OnChoiceSelect\r\nReference0: {reference0}\r\n\r\n"
    );
    answer(raw.as_bytes(), state)
}

#[test]
fn test_choice_5_appends_the_close_fragment() {
    let text = choose("5", &SharedState::new());
    assert!(text.contains("Sentence: \\h\\s0\\b[-1]\\e\r\n"));
}

#[test]
fn test_choice_5_appends_the_close_fragment_in_the_v3_dialect() {
    // The mapping is dialect-independent; only the content key changes
    let text = answer(
        b"GET SHIORI/3.0\r\nID: OnChoiceSelect\r\nReference0: 5\r\n\r\n",
        &SharedState::new(),
    );
    assert!(text.contains("Value: \\h\\s0\\b[-1]\\e\r\n"));
}

#[test]
fn test_choice_0_shows_the_traceback_when_one_exists() {
    let state = failed_state("boom", Some("trace"));
    let text = choose("0", &state);
    assert!(text.contains("\\_qboom\\n\\ntrace\\x\\c\\b[-1]\\e"));
}

#[test]
fn test_choice_0_without_a_traceback_produces_no_content() {
    let state = failed_state("boom", None);
    let text = choose("0", &state);
    assert_eq!(text, "SHIORI/2.5 200 OK\r\n\r\n");
}

#[test]
fn test_choice_1_opens_the_ghost_explorer() {
    let text = choose("1", &SharedState::new());
    assert!(text.contains("\\b[-1]\\![open,ghostexplorer]\\e"));
}

#[test]
fn test_choice_2_opens_the_homepage() {
    let text = choose("2", &SharedState::new());
    let config = Config::default();
    assert!(text.contains(&format!("\\b[-1]\\![open,browser,{}]\\e", config.homepage_url)));
}

#[test]
fn test_choice_3_reports_the_running_version() {
    let text = choose("3", &SharedState::new());
    assert!(text.contains(&format!("\\_q{}/{}\\e", kagari::NAME, kagari::VERSION)));
}

#[test]
fn test_choice_4_opens_the_license() {
    let text = choose("4", &SharedState::new());
    let config = Config::default();
    assert!(text.contains(&format!("\\b[-1]\\![open,browser,{}]\\e", config.license_url)));
}

#[test]
fn test_choice_6_quits() {
    let text = choose("6", &SharedState::new());
    assert!(text.contains("\\h\\s0\\-\\e"));
}

#[test]
fn test_unrecognized_choice_produces_no_content() {
    let text = choose("7", &SharedState::new());
    assert_eq!(text, "SHIORI/2.5 200 OK\r\n\r\n");
}

#[test]
fn test_choice_without_reference0_produces_no_content() {
    let text = answer(
        b"GET Sentence SHIORI/2.2\r\nEvent: OnChoiceSelect\r\n\r\n",
        &SharedState::new(),
    );
    assert_eq!(text, "SHIORI/2.5 200 OK\r\n\r\n");
}

// =============================================================================
// One-shot Latch Tests
// =============================================================================

#[test]
fn test_pending_report_is_surfaced_once_after_the_engine_loaded() {
    let config = Config::default();
    let state = SharedState::new();
    state.mark_loaded();
    state.record_request_failure(ErrorReport::new("boom"));

    // First lifecycle event surfaces the failure and clears the latch
    let first = String::from_utf8(respond(
        b"GET Sentence SHIORI/2.2\r\nEvent: OnBoot\r\n\r\n",
        &config,
        &state,
    ))
    .unwrap();
    assert!(first.contains("\\_qboom\\x\\c\\b[-1]\\e"));

    // The second one passes through silently
    let second = String::from_utf8(respond(
        b"GET Sentence SHIORI/2.2\r\nEvent: OnBoot\r\n\r\n",
        &config,
        &state,
    ))
    .unwrap();
    assert_eq!(second, "SHIORI/2.5 200 OK\r\n\r\n");
}

#[test]
fn test_pending_report_waits_for_a_lifecycle_event() {
    let config = Config::default();
    let state = SharedState::new();
    state.mark_loaded();
    state.record_request_failure(ErrorReport::new("boom"));

    // A non-lifecycle identifier leaves the latch armed
    let other = String::from_utf8(respond(
        b"GET Sentence SHIORI/2.2\r\nEvent: SomethingElse\r\n\r\n",
        &config,
        &state,
    ))
    .unwrap();
    assert!(!other.contains("boom"));

    let next = String::from_utf8(respond(
        b"GET SHIORI/3.0\r\nID: OnBoot\r\n\r\n",
        &config,
        &state,
    ))
    .unwrap();
    assert!(next.contains("\\_qboom\\x\\c\\b[-1]\\e"));
    assert!(next.starts_with("SHIORI/3.0 200 OK\r\n"));
    assert!(next.contains("Value: "));
}
