use super::*;

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status(404).to_string(), "request failed: 404");
}

#[test]
fn invalid_credentials_message_matches_login_banner() {
    assert_eq!(
        ApiError::InvalidCredentials.to_string(),
        "Invalid email or password. Please try again."
    );
}

#[test]
fn network_error_carries_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}
