use super::*;

#[test]
fn w_maps_to_save_action() {
    let mut ops = EditOps::from_bytes(b"abc".to_vec());
    let mut cur = 0usize;
    assert_eq!(execute("w", &mut ops, &mut cur, 0, None), ExAction::Save);
}

#[test]
fn q_with_dirty_buffer_is_reported_by_the_caller_not_here() {
    // The dirty check lives in the editor (it owns the dirty flag); ex
    // only ever reports the intent.
    let mut ops = EditOps::from_bytes(b"abc".to_vec());
    let mut cur = 0usize;
    assert_eq!(execute("q", &mut ops, &mut cur, 0, None), ExAction::Quit { force: false });
    assert_eq!(execute("q!", &mut ops, &mut cur, 0, None), ExAction::Quit { force: true });
}

#[test]
fn set_nu_and_rnu_toggle_options() {
    let mut ops = EditOps::from_bytes(Vec::new());
    let mut cur = 0usize;
    assert_eq!(
        execute("set nu", &mut ops, &mut cur, 0, None),
        ExAction::SetOption { show_num: true, show_num_rel: false }
    );
    assert_eq!(
        execute("set rnu", &mut ops, &mut cur, 0, None),
        ExAction::SetOption { show_num: true, show_num_rel: true }
    );
}

#[test]
fn unknown_command_reports_status() {
    let mut ops = EditOps::from_bytes(Vec::new());
    let mut cur = 0usize;
    let action = execute("bogus", &mut ops, &mut cur, 0, None);
    assert_eq!(action, ExAction::Status("unknown command: bogus".to_string()));
}

#[test]
fn percent_substitute_with_anchors_replaces_whole_matching_lines() {
    let mut ops = EditOps::from_bytes(b"ab\nab\naB".to_vec());
    let mut cur = 0usize;
    let action = execute("%s/^ab$/XX/", &mut ops, &mut cur, 0, None);
    assert_eq!(ops.bytes(), b"XX\nXX\naB");
    assert_eq!(action, ExAction::Status("2 substitutions".to_string()));
}

#[test]
fn substitute_with_no_range_defaults_to_current_line() {
    let mut ops = EditOps::from_bytes(b"foo\nfoo\n".to_vec());
    let mut cur = 4usize; // second line
    let action = execute("s/foo/bar/", &mut ops, &mut cur, 1, None);
    assert_eq!(ops.bytes(), b"foo\nbar\n");
    assert_eq!(action, ExAction::Status("1 substitution".to_string()));
    // Cursor lands on the match itself, not just the line start.
    assert_eq!(cur, 4);
}

#[test]
fn substitute_moves_cursor_to_first_match_past_line_start() {
    let mut ops = EditOps::from_bytes(b"  foo\n".to_vec());
    let mut cur = 0usize;
    execute("s/foo/bar/", &mut ops, &mut cur, 0, None);
    assert_eq!(ops.bytes(), b"  bar\n");
    assert_eq!(cur, 2);
}

#[test]
fn substitute_with_no_match_reports_no_match() {
    let mut ops = EditOps::from_bytes(b"foo\n".to_vec());
    let mut cur = 0usize;
    let action = execute("s/zzz/bar/", &mut ops, &mut cur, 0, None);
    assert_eq!(action, ExAction::Status("no match".to_string()));
    assert_eq!(ops.bytes(), b"foo\n");
}

#[test]
fn run_with_no_script_reports_usage() {
    let mut ops = EditOps::from_bytes(Vec::new());
    let mut cur = 0usize;
    let action = execute("run", &mut ops, &mut cur, 0, None);
    assert_eq!(action, ExAction::Status("usage: :run <script>".to_string()));
}

#[test]
fn run_inserts_captured_stdout_at_cursor() {
    let mut ops = EditOps::from_bytes(b"ab".to_vec());
    let mut cur = 0usize;
    let action = execute("run echo hi", &mut ops, &mut cur, 0, None);
    assert_eq!(ops.bytes(), b"ahi\nb");
    assert_eq!(action, ExAction::Status("run: 3 bytes".to_string()));
}

#[test]
fn search_forward_then_backward_repeat() {
    let bytes = b"alpha beta alpha gamma";
    let mut search = Vec::new();
    let hit = do_search(&mut search, Some(b"alpha"), true, bytes, 0).unwrap();
    assert_eq!(hit, 11);
    let second = do_search(&mut search, None, true, bytes, hit);
    assert_eq!(second, Err("pattern not found"));
}

#[test]
fn search_without_previous_pattern_errors() {
    let mut search = Vec::new();
    let result = do_search(&mut search, None, true, b"abc", 0);
    assert_eq!(result, Err("no previous search"));
}
