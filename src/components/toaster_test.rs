use super::*;
use crate::state::notices::NoticeState;

#[test]
fn only_notices_newer_than_last_scheduled_are_returned() {
    let mut notices = NoticeState::default();
    notices.success("one");
    notices.error("two");
    notices.success("three");
    assert_eq!(unscheduled_ids(&notices.items, 0), [1, 2, 3]);
    assert_eq!(unscheduled_ids(&notices.items, 2), [3]);
    assert!(unscheduled_ids(&notices.items, 3).is_empty());
}

#[test]
fn dismissed_notices_are_not_rescheduled() {
    let mut notices = NoticeState::default();
    let first = notices.success("one");
    notices.dismiss(first);
    notices.error("two");
    assert_eq!(unscheduled_ids(&notices.items, first), [2]);
}
