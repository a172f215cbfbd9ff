use super::*;

// =============================================================
// Credential check
// =============================================================

#[test]
fn demo_credentials_are_accepted() {
    let session = check_credentials(DEMO_EMAIL, DEMO_PASSWORD);
    let session = session.expect("demo pair must authenticate");
    assert_eq!(session.user.name, "John Doe");
    assert_eq!(session.user.email, DEMO_EMAIL);
    assert_eq!(session.user.role, Role::Citizen);
    assert_eq!(session.token, "mock-jwt-token");
}

#[test]
fn any_other_pair_is_rejected() {
    assert_eq!(
        check_credentials("demo@rwanda.gov.rw", "wrong"),
        Err(ApiError::InvalidCredentials)
    );
    assert_eq!(
        check_credentials("other@rwanda.gov.rw", "password"),
        Err(ApiError::InvalidCredentials)
    );
    assert_eq!(check_credentials("", ""), Err(ApiError::InvalidCredentials));
}

#[test]
fn credential_check_is_case_sensitive() {
    assert_eq!(
        check_credentials("Demo@rwanda.gov.rw", DEMO_PASSWORD),
        Err(ApiError::InvalidCredentials)
    );
}

// =============================================================
// Fixtures
// =============================================================

#[test]
fn owner_fixture_is_scoped_to_one_owner() {
    let lands = my_lands_fixture();
    assert_eq!(lands.len(), 3);
    assert!(lands.iter().all(|l| l.owner_name == "John Doe"));
    assert!(lands.iter().all(|l| l.registered_by.is_some()));
}

#[test]
fn owner_fixture_has_mixed_verification_states() {
    let lands = my_lands_fixture();
    assert_eq!(lands.iter().filter(|l| l.verified).count(), 2);
    assert_eq!(lands.iter().filter(|l| !l.verified).count(), 1);
}

#[test]
fn search_fixture_echoes_the_query_as_a_location() {
    let results = search_fixture("Musanze");
    assert_eq!(results.len(), 4);
    assert!(results.iter().any(|r| r.location == "Musanze"));
}

#[test]
fn search_fixture_ids_are_unique() {
    let results = search_fixture("anything");
    let mut ids: Vec<u32> = results.iter().map(|r| r.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), results.len());
}

#[test]
fn transaction_fixture_covers_every_status() {
    let txs = transactions_fixture();
    assert_eq!(txs.len(), 4);
    assert!(txs.iter().any(|t| t.status == TransactionStatus::Completed));
    assert!(txs.iter().any(|t| t.status == TransactionStatus::Pending));
    assert!(txs.iter().any(|t| t.status == TransactionStatus::Rejected));
}

#[test]
fn registration_transaction_has_no_counterparty() {
    let txs = transactions_fixture();
    let registration = txs.iter().find(|t| t.kind == TransactionKind::Registration);
    assert_eq!(registration.map(|t| t.from_party.as_str()), Some("N/A"));
}
