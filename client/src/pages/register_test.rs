use super::*;

#[test]
fn set_optional_clears_blank_values() {
    let mut slot = Some("First Bank".to_owned());
    set_optional(&mut slot, "   ".to_owned());
    assert_eq!(slot, None);
}

#[test]
fn set_optional_keeps_typed_values() {
    let mut slot = None;
    set_optional(&mut slot, "ops@example.com".to_owned());
    assert_eq!(slot.as_deref(), Some("ops@example.com"));
}
