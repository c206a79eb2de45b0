//! Unit tests for `mask_token`.
//! API keys must never appear whole in logs: first 7 + "***" + last 4 chars;
//! keys of length <= 11 are fully masked as "***".

use deepseek_client::mask_token;

#[test]
fn mask_token_short_returns_all_star() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("k"), "***");
    assert_eq!(mask_token("sk-12345"), "***");
    assert_eq!(mask_token("sk-abcdefgh"), "***");
}

#[test]
fn mask_token_long_shows_head_and_tail() {
    // Length > 11: show first 7 + "***" + last 4
    assert_eq!(mask_token("sk-abcdefghijklmnop"), "sk-abcd***mnop");
    assert_eq!(mask_token("sk-12345wxyz"), "sk-1234***wxyz");
}

#[test]
fn mask_token_typical_deepseek_key() {
    let key = "sk-1234567890abcdefghijklmnopqrstuvwxyz";
    let masked = mask_token(key);
    assert!(masked.starts_with("sk-1234"));
    assert!(masked.ends_with("wxyz"));
    assert!(masked.contains("***"));
    assert_eq!(masked.len(), 7 + 3 + 4);
}
