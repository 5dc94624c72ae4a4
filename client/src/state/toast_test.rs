use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(Notice::info("a", ""));
    let b = state.push(Notice::info("b", ""));
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn push_beyond_limit_drops_oldest() {
    let mut state = ToastState::default();
    for n in 0..5 {
        state.push(Notice::info(format!("t{n}"), ""));
    }
    let titles: Vec<&str> = state.items.iter().map(|t| t.notice.title.as_str()).collect();
    assert_eq!(titles, ["t2", "t3", "t4"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let keep = state.push(Notice::info("keep", ""));
    let gone = state.push(Notice::error("gone", ""));
    state.dismiss(gone);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, keep);
}

#[test]
fn notice_constructors_set_variant() {
    assert!(Notice::error("Error", "x").is_destructive());
    assert!(!Notice::info("Ok", "x").is_destructive());
}
