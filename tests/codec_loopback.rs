//! Integration tests: text → Morse → text loopback
//!
//! These tests run text through the encoder and back through the decoder
//! and check that the uppercased original comes out.

use morse_oracle_lib::codec::{self, SymbolTable, UNKNOWN_MARKER};

/// Helper: encode text, decode it, return the decoded string
fn loopback(text: &str) -> String {
    codec::decode(&codec::encode(text))
}

#[test]
fn test_known_vectors() {
    assert_eq!(codec::encode("SOS"), "... --- ...");
    assert_eq!(codec::decode("... --- ..."), "SOS");
    assert_eq!(codec::encode("Hello 123"), ".... . .-.. .-.. --- / .---- ..--- ...--");
}

#[test]
fn test_loopback_cq_call() {
    assert_eq!(loopback("cq cq de w1aw"), "CQ CQ DE W1AW");
}

#[test]
fn test_loopback_punctuation() {
    assert_eq!(loopback("Hello, world! (1+1=2) \"ok\" $5 @home"), "HELLO, WORLD! (1+1=2) \"OK\" $5 @HOME");
}

#[test]
fn test_loopback_every_table_character() {
    for ch in SymbolTable::characters() {
        let text = ch.to_string();
        assert_eq!(loopback(&text), text.to_uppercase(), "loopback failed for {ch:?}");
    }
}

#[test]
fn test_loopback_multiline() {
    assert_eq!(loopback("one\ntwo"), "ONE TWO");
}

#[test]
fn test_unknown_characters_hold_their_position() {
    let morse = codec::encode("a~b");
    assert_eq!(morse, format!(".- {UNKNOWN_MARKER} -..."));
    assert_eq!(codec::decode(&morse), format!("A{UNKNOWN_MARKER}B"));
}

#[test]
fn test_unknown_tokens_hold_their_position() {
    assert_eq!(
        codec::decode(".- ........ -... / ---------"),
        format!("A{UNKNOWN_MARKER}B {UNKNOWN_MARKER}")
    );
}
