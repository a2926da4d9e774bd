//! Client-side form validation for the create-record dialogs

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{CourseForm, FieldError, FormValidation, StudentForm};

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("static validation pattern compiles"))
}

fn course_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[A-Za-z]+$")
}

fn course_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[A-Za-z ]+$")
}

fn registration_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^S[0-9]{3}$")
}

fn full_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[a-zA-Z\s]+$")
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
}

fn contact_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[0-9]{3}-[0-9]{7}$")
}

const MIN_ADDRESS_LEN: usize = 3;

/// Blank check first, then the field's own rule
fn check(
    result: &mut FormValidation,
    field: &str,
    value: &str,
    required: &str,
    rule: impl FnOnce(&str) -> Option<FieldError>,
) {
    if value.trim().is_empty() {
        result.add_error(FieldError::required(field, required));
    } else if let Some(error) = rule(value) {
        result.add_error(error);
    }
}

fn matches(regex: &Regex, field: &str, message: &str) -> impl FnOnce(&str) -> Option<FieldError> {
    let field = field.to_string();
    let message = message.to_string();
    move |value: &str| (!regex.is_match(value)).then(|| FieldError::invalid_format(field, message))
}

/// Validate the "Add New Course" form
pub fn validate_course_form(form: &CourseForm) -> FormValidation {
    let mut result = FormValidation::success();

    check(
        &mut result,
        CourseForm::ID,
        &form.id,
        "Course ID is required",
        matches(course_id_regex(), CourseForm::ID, "Course ID must contain only letters"),
    );
    check(
        &mut result,
        CourseForm::NAME,
        &form.name,
        "Course name is required",
        matches(
            course_name_regex(),
            CourseForm::NAME,
            "Course name must contain only letters and spaces",
        ),
    );
    check(
        &mut result,
        CourseForm::DURATION,
        &form.duration,
        "Course duration is required",
        |_| None,
    );

    result
}

/// Validate the "Add New Student" form
pub fn validate_student_form(form: &StudentForm) -> FormValidation {
    let mut result = FormValidation::success();

    check(
        &mut result,
        StudentForm::REGISTRATION_NUMBER,
        &form.registration_number,
        "Registration number is required",
        matches(
            registration_number_regex(),
            StudentForm::REGISTRATION_NUMBER,
            "Registration number must follow the format SXXX",
        ),
    );
    check(
        &mut result,
        StudentForm::FULL_NAME,
        &form.full_name,
        "Full name is required",
        matches(
            full_name_regex(),
            StudentForm::FULL_NAME,
            "Full name should only contain letters and spaces",
        ),
    );
    check(
        &mut result,
        StudentForm::EMAIL,
        &form.email,
        "Email is required",
        matches(email_regex(), StudentForm::EMAIL, "Invalid email format"),
    );
    check(
        &mut result,
        StudentForm::CONTACT,
        &form.contact,
        "Contact number is required",
        matches(
            contact_regex(),
            StudentForm::CONTACT,
            "Contact must follow the format XXX-XXXXXXX",
        ),
    );
    check(
        &mut result,
        StudentForm::ADDRESS,
        &form.address,
        "Address is required",
        |value| {
            (value.chars().count() < MIN_ADDRESS_LEN).then(|| {
                FieldError::too_short(
                    StudentForm::ADDRESS,
                    "Address must contain at least 3 characters",
                )
            })
        },
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn course(id: &str, name: &str, duration: &str) -> CourseForm {
        CourseForm {
            id: id.into(),
            name: name.into(),
            duration: duration.into(),
        }
    }

    fn student() -> StudentForm {
        StudentForm {
            registration_number: "S001".into(),
            full_name: "Kasun Perera".into(),
            email: "kasun@example.lk".into(),
            contact: "077-1234567".into(),
            address: "Galle".into(),
        }
    }

    #[test]
    fn test_valid_course() {
        let result = validate_course_form(&course(
            "HDSE",
            "Higher Diploma in Software Engineering",
            "2 Years",
        ));
        assert!(result.is_valid());
    }

    #[test]
    fn test_blank_course_fields_are_required() {
        let result = validate_course_form(&course("  ", "", "\t"));
        assert_eq!(result.errors.len(), 3);
        assert_eq!(result.message_for("id"), Some("Course ID is required"));
        assert_eq!(result.message_for("name"), Some("Course name is required"));
        assert_eq!(result.message_for("duration"), Some("Course duration is required"));
        assert_eq!(result.first_invalid_field(), Some("id"));
    }

    #[test]
    fn test_course_id_letters_only() {
        for id in ["HDSE1", "GD-SE", "CM JD", "ÄBC"] {
            let result = validate_course_form(&course(id, "Name", "1 Year"));
            assert_eq!(
                result.message_for("id"),
                Some("Course ID must contain only letters"),
                "{id} should be rejected"
            );
        }
    }

    #[test]
    fn test_course_name_letters_and_spaces() {
        let result = validate_course_form(&course("DEP", "Diploma 2", "1 Year"));
        assert_eq!(
            result.message_for("name"),
            Some("Course name must contain only letters and spaces")
        );
        assert_eq!(result.first_invalid_field(), Some("name"));
    }

    #[test]
    fn test_duration_is_free_text() {
        assert!(validate_course_form(&course("ABC", "Abc", "6 months (part-time)")).is_valid());
    }

    #[test]
    fn test_valid_student() {
        assert!(validate_student_form(&student()).is_valid());
    }

    #[test]
    fn test_registration_number_format() {
        for bad in ["S1", "A001", "S0001", "s001", " S001"] {
            let form = StudentForm {
                registration_number: bad.into(),
                ..student()
            };
            assert_eq!(
                validate_student_form(&form).message_for("registrationNumber"),
                Some("Registration number must follow the format SXXX"),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_contact_format() {
        let form = StudentForm {
            contact: "0771234567".into(),
            ..student()
        };
        assert_eq!(
            validate_student_form(&form).message_for("contact"),
            Some("Contact must follow the format XXX-XXXXXXX")
        );
    }

    #[test]
    fn test_email_format() {
        for bad in ["kasun", "kasun@example", "ka sun@example.lk", "@example.lk"] {
            let form = StudentForm {
                email: bad.into(),
                ..student()
            };
            assert_eq!(
                validate_student_form(&form).message_for("email"),
                Some("Invalid email format"),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_address_minimum_length() {
        let form = StudentForm {
            address: "No".into(),
            ..student()
        };
        assert_eq!(
            validate_student_form(&form).message_for("address"),
            Some("Address must contain at least 3 characters")
        );

        let form = StudentForm {
            address: "   ".into(),
            ..student()
        };
        assert_eq!(
            validate_student_form(&form).message_for("address"),
            Some("Address is required")
        );
    }

    #[test]
    fn test_student_errors_follow_form_order() {
        let form = StudentForm {
            registration_number: "S001".into(),
            full_name: "R2D2".into(),
            email: String::new(),
            contact: "123".into(),
            address: "Colombo".into(),
        };
        let result = validate_student_form(&form);
        let fields: Vec<_> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["fullName", "email", "contact"]);
        assert_eq!(result.first_invalid_field(), Some("fullName"));
    }

    proptest! {
        #[test]
        fn course_id_with_digit_or_symbol_is_rejected(
            prefix in "[A-Za-z]{0,4}",
            bad in "[0-9!@#$%^&*_+=.-]",
            suffix in "[A-Za-z]{0,4}",
        ) {
            let id = format!("{prefix}{bad}{suffix}");
            let result = validate_course_form(&course(&id, "Name", "1 Year"));
            prop_assert!(result.message_for("id").is_some());
        }

        #[test]
        fn well_formed_registration_numbers_pass(digits in "[0-9]{3}") {
            let form = StudentForm { registration_number: format!("S{digits}"), ..student() };
            prop_assert!(validate_student_form(&form).is_valid());
        }

        #[test]
        fn well_formed_contacts_pass(area in "[0-9]{3}", number in "[0-9]{7}") {
            let form = StudentForm { contact: format!("{area}-{number}"), ..student() };
            prop_assert!(validate_student_form(&form).is_valid());
        }
    }
}
