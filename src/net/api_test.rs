use super::*;

#[test]
fn land_endpoint_formats_expected_path() {
    assert_eq!(land_endpoint(7), "/api/lands/7");
}

#[test]
fn search_endpoint_carries_the_query() {
    assert_eq!(search_endpoint("Kigali"), "/api/lands/search?q=Kigali");
}

#[test]
fn authorization_value_is_a_bearer_header() {
    assert_eq!(authorization_value("mock-jwt-token"), "Bearer mock-jwt-token");
}

#[test]
fn login_maps_unauthorized_to_invalid_credentials() {
    assert_eq!(login_error_for_status(401), ApiError::InvalidCredentials);
    assert_eq!(login_error_for_status(500), ApiError::Status(500));
}
