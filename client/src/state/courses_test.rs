use super::*;

fn course(id: u64, title: &str, category_id: u64) -> Course {
    Course {
        id,
        title: title.to_owned(),
        description: format!("About {title}"),
        created_at: "2024-03-05".to_owned(),
        category_id,
        is_featured: false,
    }
}

fn categories() -> Vec<Category> {
    vec![
        Category { id: 1, name: "Programming".to_owned(), description: String::new() },
        Category { id: 2, name: "Design".to_owned(), description: String::new() },
    ]
}

#[test]
fn cache_key_covers_every_request_parameter() {
    let mut query = ListQuery::<CourseFilters>::new(COURSES_PAGE_SIZE);
    query.set_search_term(" rust ");
    query.set_filter(CourseFilters { category_id: Some(4) });
    let source = CoursesSource::for_query(ApiClient::new("/api"), &query);
    assert_eq!(source.cache_key(3).to_string(), "courses:4:3:20:rust");

    let unfiltered = CoursesSource::for_query(ApiClient::new("/api"), &ListQuery::new(COURSES_PAGE_SIZE));
    assert_eq!(unfiltered.cache_key(1).to_string(), "courses:all:1:20:");
}

#[test]
fn request_carries_category_and_search() {
    let mut query = ListQuery::<CourseFilters>::new(COURSES_PAGE_SIZE);
    query.set_search_term("wasm");
    query.set_filter(CourseFilters { category_id: Some(2) });
    let source = CoursesSource::for_query(ApiClient::new("/api"), &query);
    assert_eq!(
        source.request(5),
        CourseQuery { category_id: Some(2), page: 5, limit: 20, search: "wasm".to_owned() }
    );
}

#[test]
fn category_filter_and_search_predicates() {
    let filters = CourseFilters { category_id: Some(1) };
    assert!(filters.matches(&course(1, "Rust", 1)));
    assert!(!filters.matches(&course(2, "Figma", 2)));
    assert!(course(1, "Rust Basics", 1).matches_search("basics"));
    assert!(course(1, "Rust", 1).matches_search("about"));
}

#[test]
fn active_filters_include_search_and_category() {
    let mut list = courses_list();
    assert!(!list.has_active_filters());
    list.set_search_term("rust");
    assert!(list.has_active_filters());
    list.clear_filters();
    list.set_filter(CourseFilters { category_id: Some(1) });
    assert!(list.has_active_filters());
}

#[test]
fn header_prefers_category_over_search() {
    let cats = categories();
    let name = category_name(&cats, Some(2));
    assert_eq!(name, Some("Design"));
    assert_eq!(course_header(name, "rust"), ("Design".to_owned(), "Browse Design courses".to_owned()));
    assert_eq!(
        course_header(None, "rust"),
        ("Search Results for \"rust\"".to_owned(), "Showing courses matching \"rust\"".to_owned())
    );
    assert_eq!(course_header(None, " "), ("All Courses".to_owned(), "Browse all available courses".to_owned()));
    assert_eq!(category_name(&cats, Some(9)), None);
}
