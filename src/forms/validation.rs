use std::collections::HashMap;

use crate::forms::fields::FieldKind;

/// Outcome of normalizing a Brazilian phone number. `formatted` always holds
/// the best-effort mask so the input field never loses what the user typed,
/// even when the number is rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct PhoneNumber {
    pub is_valid: bool,
    pub formatted: String,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: HashMap<String, String>,
}

fn strip_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// UX gate only: accepts anything shaped like `algo@dominio.tld` with no
/// whitespace. Deliverability is the webhook consumer's problem.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.is_empty() || raw.chars().any(char::is_whitespace) {
        return false;
    }
    let at = match raw.find('@') {
        Some(0) | None => return false,
        Some(at) => at,
    };
    let domain = &raw[at + 1..];
    match domain.rfind('.') {
        Some(0) | None => false,
        Some(dot) => dot + 1 < domain.len(),
    }
}

/// Progressive input mask, recomputed from scratch on every keystroke.
/// Always uses the celular 5-4 split since it can't know whether an 11th
/// digit is still coming; anything past 11 digits is ignored.
pub fn phone_mask(raw: &str) -> String {
    let mut digits = strip_digits(raw);
    digits.truncate(11);

    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({}", digits),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// Normalizes a Brazilian phone: 10 digits => `(AA) NNNN-NNNN`, 11 digits =>
/// `(AA) NNNNN-NNNN`, DDD between 11 and 99. The only two rejection reasons
/// are wrong length and bad DDD.
pub fn format_brazilian_phone(raw: &str) -> PhoneNumber {
    let digits = strip_digits(raw);

    if digits.len() != 10 && digits.len() != 11 {
        return PhoneNumber {
            is_valid: false,
            formatted: phone_mask(raw),
            error: Some("Telefone deve ter 10 ou 11 dígitos, incluindo o DDD".to_string()),
        };
    }

    let area_code: u8 = digits[..2].parse().unwrap_or(0);
    if !(11..=99).contains(&area_code) {
        return PhoneNumber {
            is_valid: false,
            formatted: phone_mask(raw),
            error: Some("DDD inválido".to_string()),
        };
    }

    let formatted = if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..])
    } else {
        format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])
    };

    PhoneNumber {
        is_valid: true,
        formatted,
        error: None,
    }
}

/// Whole-form check, recomputed in full on every submit attempt so stale
/// per-field errors can't survive a correction.
pub fn validate_required_fields(
    data: &HashMap<String, String>,
    required: &[FieldKind],
) -> ValidationResult {
    let mut errors = HashMap::new();

    for field in required {
        let key = field.key();
        let value = data.get(key).map(|v| v.trim()).unwrap_or("");

        if value.is_empty() {
            errors.insert(key.to_string(), field.descriptor().required_message.to_string());
            continue;
        }

        match field {
            FieldKind::Email if !is_valid_email(value) => {
                errors.insert(key.to_string(), "E-mail inválido".to_string());
            }
            FieldKind::Phone => {
                let phone = format_brazilian_phone(value);
                if let Some(message) = phone.error {
                    errors.insert(key.to_string(), message);
                }
            }
            _ => {}
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Pure projection run right before submit: trims everything, lowercases the
/// email, re-masks the phone (the mask is kept even when the number is
/// invalid; validation already had its chance to block). Idempotent.
pub fn sanitize_form_data(data: &HashMap<String, String>) -> HashMap<String, String> {
    data.iter()
        .map(|(key, value)| {
            let trimmed = value.trim();
            let clean = match key.as_str() {
                "email" => trimmed.to_lowercase(),
                "phone" => format_brazilian_phone(trimmed).formatted,
                _ => trimmed.to_string(),
            };
            (key.clone(), clean)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn accepts_ten_and_eleven_digit_numbers_with_valid_ddd() {
        let landline = format_brazilian_phone("1133334444");
        assert!(landline.is_valid);
        assert_eq!(landline.formatted, "(11) 3333-4444");
        assert_eq!(landline.error, None);

        let celular = format_brazilian_phone("85987654321");
        assert!(celular.is_valid);
        assert_eq!(celular.formatted, "(85) 98765-4321");
    }

    #[test]
    fn formats_ignore_existing_punctuation() {
        let phone = format_brazilian_phone("(11) 98765-4321");
        assert!(phone.is_valid);
        assert_eq!(phone.formatted, "(11) 98765-4321");
    }

    #[test]
    fn rejects_wrong_length_with_length_error() {
        for raw in ["119876543", "119876543210", "", "12345"] {
            let phone = format_brazilian_phone(raw);
            assert!(!phone.is_valid, "{:?} should be rejected", raw);
            let error = phone.error.expect("length error expected");
            assert!(error.contains("10 ou 11"), "unexpected message {}", error);
        }
    }

    #[test]
    fn rejects_bad_area_code_with_ddd_error() {
        for raw in ["0199887766", "10987654321", "0787654321"] {
            let phone = format_brazilian_phone(raw);
            assert!(!phone.is_valid, "{:?} should be rejected", raw);
            assert_eq!(phone.error.as_deref(), Some("DDD inválido"));
        }
    }

    #[test]
    fn mask_grows_monotonically_while_typing() {
        let full = "11987654321";
        let expected = [
            "(1",
            "(11",
            "(11) 9",
            "(11) 98",
            "(11) 987",
            "(11) 9876",
            "(11) 98765",
            "(11) 98765-4",
            "(11) 98765-43",
            "(11) 98765-432",
            "(11) 98765-4321",
        ];
        for (typed, want) in (1..=full.len()).map(|n| &full[..n]).zip(expected) {
            assert_eq!(phone_mask(typed), want, "while typing {:?}", typed);
        }
    }

    #[test]
    fn mask_is_idempotent_over_its_own_output() {
        for raw in ["1", "119", "1198765", "11987654321", "(11) 98765-4321", "11 9 8765 4321"] {
            let once = phone_mask(raw);
            assert_eq!(phone_mask(&once), once, "masking {:?} twice diverged", raw);
        }
    }

    #[test]
    fn mask_drops_digits_past_eleven() {
        assert_eq!(phone_mask("119876543210000"), "(11) 98765-4321");
    }

    #[test]
    fn email_gate_is_permissive_but_shaped() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a+b@sub.dominio.com.br"));
        // Shaped like an address is enough; we are a UX gate, not an RFC.
        assert!(is_valid_email("a@b@c.d"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@example."));
        assert!(!is_valid_email("ana @example.com"));
    }

    #[test]
    fn required_fields_fail_exactly_on_empty_or_malformed() {
        let required = [FieldKind::Name, FieldKind::Email, FieldKind::Phone];

        let good = form(&[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("phone", "11987654321"),
        ]);
        assert!(validate_required_fields(&good, &required).is_valid);

        let blank_name = form(&[
            ("name", "   "),
            ("email", "x@x.com"),
            ("phone", "11987654321"),
        ]);
        let result = validate_required_fields(&blank_name, &required);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors.get("name").map(String::as_str),
            Some(FieldKind::Name.descriptor().required_message)
        );
        assert!(!result.errors.contains_key("email"));

        let bad_email = form(&[
            ("name", "Ana"),
            ("email", "ana@semdominio"),
            ("phone", "11987654321"),
        ]);
        let result = validate_required_fields(&bad_email, &required);
        assert!(!result.is_valid);
        assert_eq!(result.errors.get("email").map(String::as_str), Some("E-mail inválido"));

        let short_phone = form(&[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("phone", "1198765"),
        ]);
        let result = validate_required_fields(&short_phone, &required);
        assert!(!result.is_valid);
        assert!(result.errors.get("phone").unwrap().contains("10 ou 11"));
    }

    #[test]
    fn errors_are_recomputed_wholesale() {
        let required = [FieldKind::Name, FieldKind::Email];
        let broken = form(&[("name", ""), ("email", "")]);
        assert_eq!(validate_required_fields(&broken, &required).errors.len(), 2);

        let fixed = form(&[("name", "Ana"), ("email", "ana@example.com")]);
        assert!(validate_required_fields(&fixed, &required).errors.is_empty());
    }

    #[test]
    fn sanitize_trims_lowercases_and_masks() {
        let raw = form(&[
            ("name", "  Ana  "),
            ("email", "ANA@Example.com"),
            ("phone", "11987654321"),
            ("company", " Acme "),
        ]);
        let clean = sanitize_form_data(&raw);
        assert_eq!(clean["name"], "Ana");
        assert_eq!(clean["email"], "ana@example.com");
        assert_eq!(clean["phone"], "(11) 98765-4321");
        assert_eq!(clean["company"], "Acme");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let raw = form(&[
            ("name", " Ana "),
            ("email", "ANA@Example.com"),
            ("phone", "1133334444"),
        ]);
        let once = sanitize_form_data(&raw);
        assert_eq!(sanitize_form_data(&once), once);
    }

    #[test]
    fn sanitize_keeps_mask_for_invalid_phone() {
        let raw = form(&[("phone", "11987")]);
        let clean = sanitize_form_data(&raw);
        assert_eq!(clean["phone"], "(11) 987");
    }
}
