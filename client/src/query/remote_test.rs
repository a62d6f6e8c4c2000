use super::*;

#[test]
fn remote_starts_loading() {
    let remote = Remote::<u32>::default();
    assert!(remote.is_loading());
    assert_eq!(remote.value(), None);
}

#[test]
fn from_result_maps_both_outcomes() {
    assert_eq!(Remote::from_result(Ok(3)).value(), Some(&3));
    let failed = Remote::<u32>::from_result(Err(ApiError::Unauthorized));
    assert!(failed.is_error());
    assert!(!failed.is_loading());
}
