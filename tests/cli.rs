use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("udfcrypt"))
}

#[test]
fn pbkdf2_reproduces_published_vector() {
    // RFC 6070, PBKDF2-HMAC-SHA1("password", "salt", 1)
    bin()
        .args(["pbkdf2", "sha1", "password", "73616c74", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "0c60c80f961f0e71f3a9b524af6012062fe037a6",
        ));
}

#[test]
fn pbkdf2_unknown_digest_fails() {
    bin()
        .args(["pbkdf2", "md5", "password", "73616c74", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown digest"));
}

#[test]
fn pbkdf2_rejects_non_hex_salt() {
    bin()
        .args(["pbkdf2", "sha1", "password", "zz", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hex"));
}

#[test]
fn salt_prints_requested_length() {
    // 32 bytes of salt are 64 hex characters
    bin()
        .args(["salt", "32"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]{64}\n$").unwrap());
}

#[test]
fn salt_out_of_range_fails() {
    bin()
        .args(["salt", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed integer argument"));

    bin()
        .args(["salt", "65537"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 65536"));
}

#[test]
fn net6_network_and_last() {
    bin()
        .args(["net6", "network", "2001:db8::1", "64"])
        .assert()
        .success()
        .stdout("2001:db8::\n");

    bin()
        .args(["net6", "last", "2001:db8::1", "64"])
        .assert()
        .success()
        .stdout("2001:db8::ffff:ffff:ffff:ffff\n");
}

#[test]
fn net6_invalid_input_fails() {
    bin()
        .args(["net6", "network", "not-an-address", "64"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NULL"));

    bin()
        .args(["net6", "last", "::1", "129"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NULL"));
}
