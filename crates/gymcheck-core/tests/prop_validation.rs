use gymcheck_core::{is_valid_email, validate_password, SignUpForm};
use proptest::prelude::*;

#[test]
fn sign_up_accepts_well_formed_form() {
    let form = SignUpForm {
        name: "Coach Carter".to_string(),
        email: "coach@box.gym".to_string(),
        password: "Thruster21".to_string(),
        confirm_password: "Thruster21".to_string(),
    };
    assert!(form.validate().is_ok());
}

proptest! {
    #[test]
    fn passwords_with_required_classes_are_valid(
        upper in "[A-Z]{1,4}",
        lower in "[a-z]{1,4}",
        digits in "[0-9]{1,4}",
        filler in "[a-zA-Z0-9!@#]{5,12}",
    ) {
        let password = format!("{filler}{upper}{lower}{digits}");
        let result = validate_password(&password);
        prop_assert!(result.is_valid());
        prop_assert_eq!(result.first_error(), None);
    }

    #[test]
    fn passwords_without_digits_are_rejected(password in "[a-zA-Z]{8,20}") {
        prop_assert!(!validate_password(&password).is_valid());
    }

    #[test]
    fn short_passwords_are_rejected(password in "[a-zA-Z0-9]{0,7}") {
        let result = validate_password(&password);
        prop_assert!(!result.min_length);
        prop_assert!(!result.is_valid());
    }

    #[test]
    fn generated_addresses_are_valid(
        local in "[a-z0-9._]{1,12}",
        domain in "[a-z0-9]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&email));
    }

    #[test]
    fn addresses_without_at_sign_are_invalid(value in "[a-z0-9.]{0,24}") {
        prop_assert!(!is_valid_email(&value));
    }
}
