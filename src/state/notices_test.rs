use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut notices = NoticeState::default();
    let a = notices.success("saved");
    let b = notices.error("failed");
    assert!(b > a);
    assert_eq!(notices.items.len(), 2);
    assert_eq!(notices.latest().map(|n| n.level), Some(NoticeLevel::Error));
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut notices = NoticeState::default();
    let a = notices.success("one");
    let b = notices.success("two");
    notices.dismiss(a);
    assert_eq!(notices.items.len(), 1);
    assert_eq!(notices.items[0].id, b);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut notices = NoticeState::default();
    let a = notices.success("one");
    notices.dismiss(a);
    let b = notices.success("two");
    assert_ne!(a, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut notices = NoticeState::default();
    notices.success("one");
    notices.dismiss(99);
    assert_eq!(notices.items.len(), 1);
}

#[test]
fn level_css_modifiers() {
    assert_eq!(NoticeLevel::Success.css_modifier(), "notice--success");
    assert_eq!(NoticeLevel::Error.css_modifier(), "notice--error");
    assert_eq!(NoticeLevel::default(), NoticeLevel::Info);
}
