use semilla::seed::Seed;
use semilla::totp::{PERIOD_SECONDS, build_totp, generate_code, seconds_remaining, verify_code};
use totp_rs::{Algorithm, TOTP};

/// RFC 6238 Appendix B reference secret ("12345678901234567890").
const RFC_SECRET: &[u8] = b"12345678901234567890";

fn rfc_totp() -> TOTP {
    TOTP::new(
        Algorithm::SHA1,
        6,
        1,
        PERIOD_SECONDS,
        RFC_SECRET.to_vec(),
        Some("semilla-test".to_string()),
        "student@example.com".to_string(),
    )
    .unwrap()
}

fn test_seed() -> Seed {
    Seed::parse("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f").unwrap()
}

#[test]
fn pinned_rfc6238_vectors() {
    // 6-digit truncations of the Appendix B SHA-1 vectors.
    let totp = rfc_totp();
    assert_eq!(generate_code(&totp, 59), "287082");
    assert_eq!(generate_code(&totp, 1111111109), "081804");
    assert_eq!(generate_code(&totp, 1111111111), "050471");
    assert_eq!(generate_code(&totp, 1234567890), "005924");
}

#[test]
fn codes_are_stable_within_a_step_and_change_across_steps() {
    let totp = build_totp("semilla-test", "student@example.com", &test_seed()).unwrap();
    assert_eq!(generate_code(&totp, 0), generate_code(&totp, 29));
    assert_eq!(generate_code(&totp, 60), generate_code(&totp, 89));

    // Pinned distinct steps from the RFC vectors.
    let rfc = rfc_totp();
    assert_ne!(generate_code(&rfc, 1111111109), generate_code(&rfc, 1111111111));
}

#[test]
fn base32_reencoding_matches_the_raw_bytes() {
    let zeros = Seed::parse(&"0".repeat(64)).unwrap();
    // 32 zero bytes -> 52 base32 chars, all 'A'.
    assert_eq!(zeros.to_base32(), "A".repeat(52));
    assert_eq!(test_seed().to_base32().len(), 52);
}

#[test]
fn verify_honors_the_tolerance_window() {
    let totp = rfc_totp();
    // Start of the step containing 1111111109, so the code is "081804".
    let t = 1111111080;
    let code = generate_code(&totp, t);
    assert_eq!(code, "081804");

    assert!(verify_code(&totp, &code, 1, t));
    assert!(verify_code(&totp, &code, 1, t + 29));
    // One step beyond the +/-1 window at 30s granularity.
    assert!(!verify_code(&totp, &code, 1, t + 61));
    // A wider window re-admits it; the width is a parameter, not a constant.
    assert!(verify_code(&totp, &code, 2, t + 61));
}

#[test]
fn malformed_candidates_never_match() {
    let totp = rfc_totp();
    for bad in ["", "12345", "1234567", "abcdef", "28708a", "287 82"] {
        assert!(!verify_code(&totp, bad, 1, 59), "{bad:?} should not verify");
    }
}

#[test]
fn wrong_code_is_a_plain_mismatch() {
    let totp = rfc_totp();
    // The code for a far-away step, well-formed but wrong here.
    assert!(!verify_code(&totp, "005924", 1, 59));
}

#[test]
fn seconds_remaining_boundaries() {
    assert_eq!(seconds_remaining(30, 90), 30);
    assert_eq!(seconds_remaining(30, 105), 15);
    assert_eq!(seconds_remaining(30, 0), 30);
    assert_eq!(seconds_remaining(30, 29), 1);
}
