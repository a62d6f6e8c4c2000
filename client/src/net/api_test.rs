use super::*;

#[test]
fn endpoint_joins_base_and_path_with_single_slash() {
    let client = ApiClient::new("https://api.academy.test/");
    assert_eq!(client.base_url(), "https://api.academy.test");
    assert_eq!(client.endpoint("/auth/login"), "https://api.academy.test/auth/login");
    assert_eq!(client.endpoint("users"), "https://api.academy.test/users");
}

#[test]
fn with_token_sets_bearer_token() {
    let client = ApiClient::new("/api").with_token("abc");
    assert_eq!(client.token(), Some("abc"));
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn courses_params_omit_empty_filters() {
    let query = CourseQuery { category_id: None, page: 2, limit: 20, search: "  ".to_owned() };
    assert_eq!(courses_params(&query), vec![("page", "2".to_owned()), ("limit", "20".to_owned())]);
}

#[test]
fn courses_params_include_category_and_trimmed_search() {
    let query = CourseQuery { category_id: Some(4), page: 1, limit: 20, search: " rust & wasm ".to_owned() };
    assert_eq!(
        courses_params(&query),
        vec![
            ("page", "1".to_owned()),
            ("limit", "20".to_owned()),
            ("categoryId", "4".to_owned()),
            ("search", "rust & wasm".to_owned()),
        ]
    );
}

#[test]
fn users_params_clamp_page_to_one() {
    assert_eq!(users_params(0, 30), vec![("page", "1".to_owned()), ("limit", "30".to_owned())]);
}

#[test]
fn course_path_has_trailing_slash() {
    assert_eq!(course_path(12), "courses/12/");
}

#[test]
fn rejection_message_reads_failed_envelope() {
    assert_eq!(
        rejection_message(r#"{"success":false,"message":"Invalid email or password"}"#),
        Some("Invalid email or password".to_owned())
    );
}

#[test]
fn rejection_message_ignores_success_and_garbage() {
    assert_eq!(rejection_message(r#"{"success":true,"message":"ok"}"#), None);
    assert_eq!(rejection_message("<html>502</html>"), None);
    assert_eq!(rejection_message(r#"{"success":false}"#), None);
}

#[test]
fn status_mapping_distinguishes_unauthorized() {
    assert_eq!(ApiError::from_status(204), None);
    assert_eq!(ApiError::from_status(401), Some(ApiError::Unauthorized));
    assert_eq!(ApiError::from_status(500), Some(ApiError::Status { status: 500 }));
    assert!(ApiError::Unauthorized.is_unauthorized());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let client = ApiClient::new("/api").with_token("t");
    let result = futures::executor::block_on(client.fetch_users(1, 30));
    assert_eq!(result, Err(ApiError::Unavailable));
}
