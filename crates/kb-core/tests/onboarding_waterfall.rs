//! End-to-end checks of the onboarding rules through the public API,
//! starting from stored profile documents.

use kb_core::gate::{decide_page, GateInput};
use kb_core::{
    AccessPolicy, AppConfig, GateDecision, Identity, OnboardingStatus, OnboardingStep,
    ProfileDocument,
};

fn document(json: &str) -> ProfileDocument {
    serde_json::from_str(json).expect("valid profile document")
}

#[test]
fn verified_user_with_terms_but_no_role_selects_role() {
    let doc = document(
        r#"{ "uid": "u1", "isVerified": true, "agreedToTermsAt": "2024-05-01T12:00:00Z" }"#,
    );
    assert_eq!(
        doc.snapshot().status(),
        OnboardingStatus::Pending(OnboardingStep::RoleSelection)
    );
}

#[test]
fn host_with_every_field_but_completion_enters_kako_id() {
    let doc = document(
        r#"{
            "uid": "host-1",
            "isVerified": true,
            "agreedToTermsAt": "2024-05-01T12:00:00Z",
            "role": "host",
            "birthDate": "1990-01-01",
            "gender": "male",
            "country": "Brasil",
            "phoneNumber": "+5511987654321",
            "foundUsVia": "instagram",
            "hasCompletedOnboarding": false
        }"#,
    );
    assert_eq!(
        doc.snapshot().status(),
        OnboardingStatus::Pending(OnboardingStep::KakoIdInput)
    );
}

#[test]
fn player_with_every_field_but_completion_checks_kako_account() {
    let doc = document(
        r#"{
            "uid": "player-1",
            "isVerified": true,
            "agreedToTermsAt": "2024-05-01T12:00:00Z",
            "role": "player",
            "birthDate": "1990-01-01",
            "gender": "male",
            "country": "Brasil",
            "phoneNumber": "+5511987654321",
            "foundUsVia": "instagram",
            "hasCompletedOnboarding": false
        }"#,
    );
    assert_eq!(
        doc.snapshot().status(),
        OnboardingStatus::Pending(OnboardingStep::KakoAccountCheck)
    );
}

#[test]
fn complete_document_passes_the_gate() {
    let doc = document(
        r#"{
            "uid": "player-2",
            "isVerified": true,
            "agreedToTermsAt": "2024-05-01T12:00:00Z",
            "role": "player",
            "birthDate": "1990-01-01",
            "gender": "female",
            "country": "Portugal",
            "phoneNumber": "+351912345678",
            "foundUsVia": "friend",
            "hasCompletedOnboarding": true
        }"#,
    );
    let identity = Identity::new("player-2");
    let input = GateInput {
        identity: Some(&identity),
        profile: Some(&doc),
        requested_path: "/dashboard",
    };

    assert!(doc.snapshot().is_complete());
    assert_eq!(
        decide_page(&input, &AccessPolicy::onboarded(), &AppConfig::default().routes),
        GateDecision::Allow
    );
}
