use super::*;

fn valid_input() -> RegistrationInput {
    RegistrationInput {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "hunter22".to_owned(),
        password2: "hunter22".to_owned(),
        user_type: "job_seeker".to_owned(),
        first_name: " Alice ".to_owned(),
        last_name: String::new(),
        phone_number: String::new(),
    }
}

#[test]
fn valid_input_builds_registration_with_trimmed_fields() {
    let registration = validate_registration_input(&valid_input()).unwrap();
    assert_eq!(registration.username, "alice");
    assert_eq!(registration.user_type, UserType::JobSeeker);
    assert_eq!(registration.first_name, "Alice");
}

#[test]
fn employer_tag_maps_to_employer_role() {
    let mut input = valid_input();
    input.user_type = "employer".to_owned();
    let registration = validate_registration_input(&input).unwrap();
    assert_eq!(registration.user_type, UserType::Employer);
}

#[test]
fn missing_required_fields_are_rejected() {
    let mut input = valid_input();
    input.username = "   ".to_owned();
    assert_eq!(
        validate_registration_input(&input),
        Err("Username, email, and password are required.")
    );

    let mut input = valid_input();
    input.email = String::new();
    assert!(validate_registration_input(&input).is_err());

    let mut input = valid_input();
    input.password = String::new();
    input.password2 = String::new();
    assert!(validate_registration_input(&input).is_err());
}

#[test]
fn mismatched_passwords_are_rejected() {
    let mut input = valid_input();
    input.password2 = "different".to_owned();
    assert_eq!(validate_registration_input(&input), Err("Passwords do not match."));
}

#[test]
fn unrecognized_account_type_is_rejected() {
    let mut input = valid_input();
    input.user_type = "recruiter".to_owned();
    assert_eq!(validate_registration_input(&input), Err("Select an account type."));
}
