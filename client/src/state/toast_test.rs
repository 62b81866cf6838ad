use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Bid placed successfully!");
    let b = state.push(ToastKind::Error, "Bid too low");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].message, "Bid too low");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    state.push(ToastKind::Success, "two");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "two");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn overflow_drops_oldest() {
    let mut state = ToastState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push(ToastKind::Error, format!("m{i}"));
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert_eq!(state.items[0].message, "m2");
}
