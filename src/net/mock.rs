//! Fixture-backed record source simulating the remote registry.
//!
//! SYSTEM CONTEXT
//! ==============
//! No real backend exists: every operation awaits a fixed artificial delay
//! and then resolves from hard-coded data, except the single credential
//! check. Pages consume this module through explicit async request/response
//! functions so a live transport can replace it without touching the views.
//! Outside the browser the delay is skipped, which keeps tests instant.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use std::time::Duration;

use crate::net::error::ApiError;
use crate::net::types::{
    AuthSession, LandRecord, NewAccount, NewLandRecord, Role, Transaction, TransactionKind,
    TransactionStatus, User,
};

/// The single accepted demo credential pair.
pub const DEMO_EMAIL: &str = "demo@rwanda.gov.rw";
pub const DEMO_PASSWORD: &str = "password";

const LOGIN_DELAY_MS: u64 = 1500;
const REGISTER_DELAY_MS: u64 = 1500;
const LANDS_DELAY_MS: u64 = 1500;
const SEARCH_DELAY_MS: u64 = 1500;
const TRANSACTIONS_DELAY_MS: u64 = 1000;
const UPLOAD_DELAY_MS: u64 = 2000;

async fn simulate_latency(millis: u64) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(Duration::from_millis(millis)).await;
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = Duration::from_millis(millis);
    }
}

/// Authenticate against the demo credential pair.
///
/// # Errors
///
/// Any pair other than [`DEMO_EMAIL`]/[`DEMO_PASSWORD`] yields
/// [`ApiError::InvalidCredentials`].
pub async fn login(email: &str, password: &str) -> Result<AuthSession, ApiError> {
    simulate_latency(LOGIN_DELAY_MS).await;
    check_credentials(email, password)
}

fn check_credentials(email: &str, password: &str) -> Result<AuthSession, ApiError> {
    if email == DEMO_EMAIL && password == DEMO_PASSWORD {
        Ok(AuthSession {
            user: User {
                id: 1,
                name: "John Doe".to_owned(),
                email: email.to_owned(),
                role: Role::Citizen,
            },
            token: "mock-jwt-token".to_owned(),
        })
    } else {
        Err(ApiError::InvalidCredentials)
    }
}

/// Simulated account creation; always succeeds.
pub async fn register(account: &NewAccount) -> Result<(), ApiError> {
    let _ = account;
    simulate_latency(REGISTER_DELAY_MS).await;
    Ok(())
}

/// The signed-in user's parcels.
pub async fn my_lands() -> Vec<LandRecord> {
    simulate_latency(LANDS_DELAY_MS).await;
    my_lands_fixture()
}

/// Registry-wide search. The fixture echoes the query as one record's
/// location so results visibly react to input.
pub async fn search_lands(query: &str) -> Vec<LandRecord> {
    simulate_latency(SEARCH_DELAY_MS).await;
    search_fixture(query)
}

/// The signed-in user's transaction history.
pub async fn transactions() -> Vec<Transaction> {
    simulate_latency(TRANSACTIONS_DELAY_MS).await;
    transactions_fixture()
}

/// Simulated parcel registration; always succeeds.
pub async fn upload_land(submission: &NewLandRecord) -> Result<(), ApiError> {
    let _ = submission;
    simulate_latency(UPLOAD_DELAY_MS).await;
    Ok(())
}

fn my_lands_fixture() -> Vec<LandRecord> {
    vec![
        LandRecord {
            id: 1,
            title_number: "TL001234".to_owned(),
            location: "Kigali, Nyarugenge".to_owned(),
            area: "250".to_owned(),
            owner_name: "John Doe".to_owned(),
            verified: true,
            created_at: "2024-01-10".to_owned(),
            last_updated: "2024-01-15".to_owned(),
            estimated_value: "75,000,000".to_owned(),
            land_use: Some("Residential".to_owned()),
            soil_type: Some("Clay Loam".to_owned()),
            zoning: Some("R1".to_owned()),
            coordinates: Some("1.9500° S, 30.0586° E".to_owned()),
            boundaries: Some("North: Road, South: River, East: School, West: Commercial".to_owned()),
            registered_by: Some("Rwanda Land Authority".to_owned()),
            document_url: Some("/documents/tl001234.pdf".to_owned()),
        },
        LandRecord {
            id: 2,
            title_number: "TL001235".to_owned(),
            location: "Kigali, Gasabo".to_owned(),
            area: "180".to_owned(),
            owner_name: "John Doe".to_owned(),
            verified: false,
            created_at: "2024-01-15".to_owned(),
            last_updated: "2024-01-15".to_owned(),
            estimated_value: "45,000,000".to_owned(),
            land_use: Some("Commercial".to_owned()),
            soil_type: Some("Sandy Loam".to_owned()),
            zoning: Some("C2".to_owned()),
            coordinates: Some("1.9441° S, 30.0619° E".to_owned()),
            boundaries: Some("North: Residential, South: Park, East: Road, West: Residential".to_owned()),
            registered_by: Some("Rwanda Land Authority".to_owned()),
            document_url: Some("/documents/tl001235.pdf".to_owned()),
        },
        LandRecord {
            id: 3,
            title_number: "TL001236".to_owned(),
            location: "Kigali, Kicukiro".to_owned(),
            area: "320".to_owned(),
            owner_name: "John Doe".to_owned(),
            verified: true,
            created_at: "2024-01-08".to_owned(),
            last_updated: "2024-01-12".to_owned(),
            estimated_value: "95,000,000".to_owned(),
            land_use: Some("Agricultural".to_owned()),
            soil_type: Some("Volcanic Soil".to_owned()),
            zoning: Some("A1".to_owned()),
            coordinates: Some("1.9686° S, 30.1027° E".to_owned()),
            boundaries: Some("North: Forest, South: Road, East: Farmland, West: River".to_owned()),
            registered_by: Some("Rwanda Land Authority".to_owned()),
            document_url: Some("/documents/tl001236.pdf".to_owned()),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn search_parcel(
    id: u32,
    title_number: &str,
    location: &str,
    area: &str,
    owner_name: &str,
    verified: bool,
    created_at: &str,
    last_updated: &str,
    estimated_value: &str,
    land_use: &str,
) -> LandRecord {
    LandRecord {
        id,
        title_number: title_number.to_owned(),
        location: location.to_owned(),
        area: area.to_owned(),
        owner_name: owner_name.to_owned(),
        verified,
        created_at: created_at.to_owned(),
        last_updated: last_updated.to_owned(),
        estimated_value: estimated_value.to_owned(),
        land_use: Some(land_use.to_owned()),
        soil_type: None,
        zoning: None,
        coordinates: None,
        boundaries: None,
        registered_by: None,
        document_url: None,
    }
}

fn search_fixture(query: &str) -> Vec<LandRecord> {
    vec![
        search_parcel(
            1,
            "TL001234",
            "Kigali, Nyarugenge",
            "250",
            "John Doe",
            true,
            "2024-01-10",
            "2024-01-15",
            "75,000,000 RWF",
            "Residential",
        ),
        search_parcel(
            2,
            "TL001235",
            "Kigali, Gasabo",
            "180",
            "Jane Smith",
            false,
            "2024-01-15",
            "2024-01-15",
            "45,000,000 RWF",
            "Commercial",
        ),
        search_parcel(
            3,
            "TL001236",
            query,
            "300",
            "Robert Brown",
            true,
            "2024-01-12",
            "2024-01-14",
            "95,000,000 RWF",
            "Agricultural",
        ),
        search_parcel(
            4,
            "TL001237",
            "Kigali, Kicukiro",
            "450",
            "Alice Johnson",
            false,
            "2024-01-08",
            "2024-01-08",
            "120,000,000 RWF",
            "Residential",
        ),
    ]
}

fn transactions_fixture() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            kind: TransactionKind::Registration,
            land_title: "TL001234".to_owned(),
            from_party: "N/A".to_owned(),
            to_party: "John Doe".to_owned(),
            date: "2024-01-10".to_owned(),
            status: TransactionStatus::Completed,
            amount: "0 RWF".to_owned(),
        },
        Transaction {
            id: 2,
            kind: TransactionKind::Transfer,
            land_title: "TL001235".to_owned(),
            from_party: "John Doe".to_owned(),
            to_party: "Jane Smith".to_owned(),
            date: "2024-01-15".to_owned(),
            status: TransactionStatus::Pending,
            amount: "50,000 RWF".to_owned(),
        },
        Transaction {
            id: 3,
            kind: TransactionKind::Verification,
            land_title: "TL001236".to_owned(),
            from_party: "System".to_owned(),
            to_party: "John Doe".to_owned(),
            date: "2024-01-12".to_owned(),
            status: TransactionStatus::Completed,
            amount: "10,000 RWF".to_owned(),
        },
        Transaction {
            id: 4,
            kind: TransactionKind::Transfer,
            land_title: "TL001237".to_owned(),
            from_party: "Jane Smith".to_owned(),
            to_party: "Robert Brown".to_owned(),
            date: "2024-01-08".to_owned(),
            status: TransactionStatus::Rejected,
            amount: "75,000 RWF".to_owned(),
        },
    ]
}
