use super::*;

#[test]
fn nav_items_cover_the_four_main_routes() {
    let paths: Vec<&str> = nav_items().iter().map(|(path, _)| *path).collect();
    assert_eq!(paths, vec!["/dashboard", "/upload", "/search", "/transactions"]);
}

#[test]
fn active_link_matches_exact_path() {
    assert!(is_active("/search", "/search"));
    assert!(!is_active("/search", "/upload"));
}

#[test]
fn dashboard_owns_the_root_path() {
    assert!(is_active("/", "/dashboard"));
    assert!(!is_active("/", "/search"));
}

#[test]
fn first_name_takes_the_leading_word() {
    assert_eq!(first_name("John Doe"), "John");
    assert_eq!(first_name("Mononym"), "Mononym");
    assert_eq!(first_name(""), "");
}
