use std::fs;

use passcrypt_core::{KeySize, PassphraseCipher, SealedMessage};

fn cipher() -> PassphraseCipher {
    PassphraseCipher::new(KeySize::Aes256, 1000).expect("valid configuration")
}

#[test]
fn test_sealed_file_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("message.json");
    let plaintext = "journal entry: hello world";

    let sealed = cipher()
        .seal("test-passphrase-secure-123", plaintext, 16)
        .expect("seal should succeed");
    fs::write(&path, sealed.to_json_pretty().expect("json")).expect("write should succeed");

    let on_disk = fs::read_to_string(&path).expect("read should succeed");
    let parsed = SealedMessage::from_json(&on_disk).expect("envelope should parse");
    let opened = parsed
        .open("test-passphrase-secure-123")
        .expect("open should succeed");
    assert_eq!(opened, plaintext);
}

#[test]
fn test_sealed_file_wrong_passphrase_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("message.json");

    let sealed = cipher()
        .seal("correct-passphrase-123", "secret entry", 16)
        .expect("seal should succeed");
    fs::write(&path, sealed.to_json().expect("json")).expect("write should succeed");

    let on_disk = fs::read_to_string(&path).expect("read should succeed");
    let parsed = SealedMessage::from_json(&on_disk).expect("envelope should parse");
    assert!(parsed.open("wrong-passphrase-456").is_err());
}

#[test]
fn test_sealed_file_does_not_contain_plaintext() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("message.json");

    let sealed = cipher()
        .seal(
            "test-passphrase-secure-123",
            "secret entry with marker: PLAINTEXT_MARKER_123",
            16,
        )
        .expect("seal should succeed");
    fs::write(&path, sealed.to_json().expect("json")).expect("write should succeed");

    let on_disk = fs::read_to_string(&path).expect("read should succeed");
    assert!(!on_disk.contains("PLAINTEXT_MARKER_123"));
    assert!(!on_disk.contains("test-passphrase-secure-123"));
}

#[test]
fn test_tampered_envelope_fails() {
    let sealed = cipher()
        .seal("test-passphrase-secure-123", "secret entry", 16)
        .expect("seal should succeed");

    let mut tampered = sealed.clone();
    tampered.salt = "00".repeat(16);
    if let Ok(opened) = tampered.open("test-passphrase-secure-123") {
        assert_ne!(opened, "secret entry");
    }

    let mut truncated = sealed;
    truncated.ciphertext.truncate(4);
    assert!(truncated.open("test-passphrase-secure-123").is_err());
}
