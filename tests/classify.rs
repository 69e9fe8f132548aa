//! Scenario tests for `PasswordValidator::classify`.

use pwd_validation::{ConfigError, PasswordValidator, Rule, ValidatorConfig, Verdict};

const MIXED: &[&str] = &[
    "12G", "12K3", "1T234", "12O345",
    "asK", "asLd", "asUdf", "aOsdfg",
    "!E@", "!U@#", "!@K#$", "!@D#$%",
    "As", "As3", "sA@3", "Fs1%l",
    "dj12GkJ#@Kf^",
];

fn validator(config: ValidatorConfig) -> PasswordValidator {
    PasswordValidator::new(config).expect("valid config")
}

fn assert_all(validator: &PasswordValidator, inputs: &[&str], expected: Verdict) {
    for input in inputs {
        assert_eq!(validator.classify(input), expected, "input {input:?}");
    }
}

fn insufficient(rule: Rule, required: usize) -> Verdict {
    Verdict::Insufficient { rule, required }
}

#[test]
fn default_accepts_any_non_empty() {
    let v = PasswordValidator::default();
    assert_all(&v, &["A", "G", "f", "h", "#", "!", "5", "7", "AS", "ASDFG"], Verdict::Valid);
    assert_all(&v, MIXED, Verdict::Valid);
}

#[test]
fn default_rejects_empty() {
    let v = PasswordValidator::default();
    assert_eq!(v.classify(""), insufficient(Rule::MinLength, 1));
}

#[test]
fn min_length_valid() {
    let v = validator(ValidatorConfig { min_length: 2, ..Default::default() });
    assert_all(
        &v,
        &["12", "12345", "as", "asdfg", "AS", "!@", "!@#$%", "As", "Fs1%l"],
        Verdict::Valid,
    );
}

#[test]
fn min_length_invalid() {
    let v = validator(ValidatorConfig { min_length: 2, ..Default::default() });
    assert_all(&v, &["", "a", "D", "%", "4"], insufficient(Rule::MinLength, 2));
}

#[test]
fn min_length_out_of_bounds() {
    for min_length in [0, -1] {
        let result = PasswordValidator::new(ValidatorConfig { min_length, ..Default::default() });
        assert_eq!(result, Err(ConfigError::MinLengthNotPositive(min_length)));
    }
}

#[test]
fn uppercase_valid() {
    let v = validator(ValidatorConfig { min_uppercase: 1, ..Default::default() });
    assert_all(&v, &["A", "O", "ASDF", "12G", "!@D#$%", "sA@3"], Verdict::Valid);
}

#[test]
fn uppercase_invalid() {
    let v = validator(ValidatorConfig { min_uppercase: 1, ..Default::default() });
    assert_all(&v, &["g", "1", " ", "^", "g1 ^"], insufficient(Rule::UpperCase, 1));
}

#[test]
fn lowercase_valid() {
    let v = validator(ValidatorConfig { min_lowercase: 1, ..Default::default() });
    assert_all(&v, &["i", "u", "AaS", "ASDrFG", "asK", "Fs1%l"], Verdict::Valid);
}

#[test]
fn lowercase_invalid() {
    let v = validator(ValidatorConfig { min_lowercase: 1, ..Default::default() });
    assert_all(&v, &["K", "1", " ", "^", "!E@"], insufficient(Rule::LowerCase, 1));
}

#[test]
fn digits_valid() {
    let v = validator(ValidatorConfig { min_digits: 1, ..Default::default() });
    assert_all(
        &v,
        &["1", "0", "9", "a4sK", "a5sLd", "AS6jDF", "!E1@", "!@3D#$%", "A5s"],
        Verdict::Valid,
    );
}

#[test]
fn digits_invalid() {
    let v = validator(ValidatorConfig { min_digits: 1, ..Default::default() });
    assert_all(&v, &["K", "g", " ", "^", "aOsdfg"], insufficient(Rule::Digit, 1));
    // superscripts, fractions and other numerals are not decimal digits
    assert_all(&v, &["²", "½", "①", "〇", "x²"], insufficient(Rule::Digit, 1));
}

#[test]
fn special_valid() {
    let v = validator(ValidatorConfig { min_special: 1, ..Default::default() });
    // whitespace counts as special
    assert_all(
        &v,
        &["!", "@", "#", "^", " ", "1#", "g&", "H*", "!E1", "r4@", "Ky2#", "dj12GkJ#@Kf^"],
        Verdict::Valid,
    );
}

#[test]
fn special_invalid() {
    let v = validator(ValidatorConfig { min_special: 1, ..Default::default() });
    assert_all(&v, &["K", "g", "1", "a4sK"], insufficient(Rule::Special, 1));
}

#[test]
fn negative_class_thresholds_rejected() {
    let configs = [
        ValidatorConfig { min_uppercase: -1, ..Default::default() },
        ValidatorConfig { min_lowercase: -1, ..Default::default() },
        ValidatorConfig { min_digits: -1, ..Default::default() },
        ValidatorConfig { min_special: -1, ..Default::default() },
    ];
    for config in configs {
        assert!(matches!(
            PasswordValidator::new(config),
            Err(ConfigError::NegativeThreshold { value: -1, .. })
        ));
    }
}

#[test]
fn strict_policy_reports_first_failure() {
    let v = validator(ValidatorConfig {
        min_length: 8,
        min_uppercase: 2,
        min_lowercase: 2,
        min_digits: 2,
        min_special: 2,
    });
    assert_eq!(v.classify("Ab1!"), insufficient(Rule::MinLength, 8));
    assert_eq!(v.classify("Abcdef12!!"), insufficient(Rule::UpperCase, 2));
    assert_eq!(v.classify("ABcDEF12!!"), insufficient(Rule::LowerCase, 2));
    assert_eq!(v.classify("ABcdefg1!!"), insufficient(Rule::Digit, 2));
    assert_eq!(v.classify("ABcdef12!x"), insufficient(Rule::Special, 2));
    assert_eq!(v.classify("ABcdef12! "), Verdict::Valid);
}

#[test]
fn reason_for_failed_verdict() {
    let v = validator(ValidatorConfig { min_length: 8, ..Default::default() });
    assert_eq!(
        v.classify("short").reason().as_deref(),
        Some("Password must be at least 8 characters")
    );
    assert_eq!(v.classify("long enough").reason(), None);
}
