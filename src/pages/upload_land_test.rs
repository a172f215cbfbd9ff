use super::*;

#[test]
fn complete_form_produces_a_submission() {
    let payload = validate_upload("TL009999", "Kigali, Gasabo", "300", "deed.pdf");
    assert_eq!(
        payload,
        Ok(NewLandRecord {
            title_number: "TL009999".to_owned(),
            location: "Kigali, Gasabo".to_owned(),
            area: "300".to_owned(),
            document_name: Some("deed.pdf".to_owned()),
        })
    );
}

#[test]
fn missing_fields_are_rejected() {
    assert_eq!(validate_upload("", "Kigali", "300", "deed.pdf"), Err("Please fill in all fields"));
    assert_eq!(validate_upload("TL1", "", "300", "deed.pdf"), Err("Please fill in all fields"));
    assert_eq!(validate_upload("TL1", "Kigali", "", "deed.pdf"), Err("Please fill in all fields"));
    assert_eq!(validate_upload("TL1", "Kigali", "300", ""), Err("Please fill in all fields"));
}

#[test]
fn area_must_be_a_positive_integer() {
    assert_eq!(
        validate_upload("TL1", "Kigali", "0", "deed.pdf"),
        Err("Enter a valid area in square meters")
    );
    assert_eq!(
        validate_upload("TL1", "Kigali", "-5", "deed.pdf"),
        Err("Enter a valid area in square meters")
    );
    assert_eq!(
        validate_upload("TL1", "Kigali", "many", "deed.pdf"),
        Err("Enter a valid area in square meters")
    );
}

#[test]
fn inputs_are_trimmed() {
    let payload = validate_upload(" TL009999 ", " Kigali ", " 300 ", " deed.pdf ");
    assert_eq!(payload.map(|p| p.area), Ok("300".to_owned()));
}

#[test]
fn messages_match_the_simulated_outcomes() {
    assert_eq!(SUCCESS_MESSAGE, "Land record uploaded successfully! It will be verified soon.");
    assert_eq!(FAILURE_MESSAGE, "Failed to upload land record. Please try again.");
}
