//! Wire fixtures for the authenticated command family.

use enroll_protocol::authenticated_cmds::{
    AnyCmdReq, pki_enrollment_accept, pki_enrollment_list, pki_enrollment_reject,
};
use enroll_protocol::{AnyRequest, Bytes, CodecError, EnrollmentID, Reply, Request, Status};
use pretty_assertions::assert_eq;

fn bytes(hex: &str) -> Vec<u8> {
    hex::decode(hex).unwrap()
}

fn enrollment_id() -> EnrollmentID {
    EnrollmentID::from_hex("88a75cc10b8d43d9b1f91ad8a12be8ee").unwrap()
}

// {"cmd": "pki_enrollment_reject", "enrollment_id": h'88a75cc10b8d43d9b1f91ad8a12be8ee'}
const REJECT_REQ: &str = "a263636d6475706b695f656e726f6c6c6d656e745f72656a6563746d656e726f6c6c\
                          6d656e745f69645088a75cc10b8d43d9b1f91ad8a12be8ee";

#[test]
fn test_reject_req_wire_format() {
    let req = pki_enrollment_reject::Req {
        enrollment_id: enrollment_id(),
    };

    assert_eq!(req.dump().unwrap(), bytes(REJECT_REQ));
    assert_eq!(pki_enrollment_reject::Req::load(&bytes(REJECT_REQ)).unwrap(), req);
    assert_eq!(
        AnyCmdReq::load(&bytes(REJECT_REQ)).unwrap(),
        AnyCmdReq::PkiEnrollmentReject(req)
    );
}

#[test]
fn test_reject_req_echo_keeps_identifier() {
    let id = EnrollmentID::new();
    let raw = pki_enrollment_reject::Req { enrollment_id: id }.dump().unwrap();

    let AnyCmdReq::PkiEnrollmentReject(echoed) = AnyCmdReq::load(&raw).unwrap() else {
        panic!("decoded another command");
    };
    assert_eq!(echoed.enrollment_id, id);
    assert_eq!(echoed.enrollment_id.as_bytes(), id.as_bytes());
}

#[test]
fn test_list_req_wire_format() {
    // {"cmd": "pki_enrollment_list"}
    let raw = bytes("a163636d6473706b695f656e726f6c6c6d656e745f6c697374");

    assert_eq!(pki_enrollment_list::Req {}.dump().unwrap(), raw);
    assert_eq!(
        AnyCmdReq::load(&raw).unwrap(),
        AnyCmdReq::PkiEnrollmentList(pki_enrollment_list::Req {})
    );
}

#[test]
fn test_accept_req_wire_format() {
    let raw = bytes(
        "a963636d6475706b695f656e726f6c6c6d656e745f6163636570746e6163636570745f7061796c6f61\
         64473c64756d6d793e78186163636570745f7061796c6f61645f7369676e61747572654b3c7369676e\
         61747572653e781d61636365707465725f6465725f783530395f6365727469666963617465581f3c61\
         636365707465725f6465725f783530395f63657274696669636174653e726465766963655f63657274\
         69666963617465473c64756d6d793e6d656e726f6c6c6d656e745f69645056f48ed307984f10830e19\
         7287399c22781b72656461637465645f6465766963655f6365727469666963617465473c64756d6d79\
         3e781972656461637465645f757365725f6365727469666963617465473c64756d6d793e7075736572\
         5f6365727469666963617465473c64756d6d793e",
    );
    let req = pki_enrollment_accept::Req {
        accept_payload: Bytes::from_static(b"<dummy>"),
        accept_payload_signature: Bytes::from_static(b"<signature>"),
        accepter_der_x509_certificate: Bytes::from_static(b"<accepter_der_x509_certificate>"),
        device_certificate: Bytes::from_static(b"<dummy>"),
        enrollment_id: EnrollmentID::from_hex("56f48ed307984f10830e197287399c22").unwrap(),
        redacted_device_certificate: Bytes::from_static(b"<dummy>"),
        redacted_user_certificate: Bytes::from_static(b"<dummy>"),
        user_certificate: Bytes::from_static(b"<dummy>"),
    };

    assert_eq!(req.dump().unwrap(), raw);
    assert_eq!(pki_enrollment_accept::Req::load(&raw).unwrap(), req);
}

#[test]
fn test_loading_another_command_is_an_error() {
    assert_eq!(
        pki_enrollment_accept::Req::load(&bytes(REJECT_REQ)).unwrap_err(),
        CodecError::UnexpectedCommand {
            expected: "pki_enrollment_accept",
            actual: "pki_enrollment_reject",
        }
    );
}

#[test]
fn test_unknown_command_is_an_error() {
    // {"cmd": "pki_enrollment_submit", "enrollment_id": h'88a7...'}
    let raw = bytes(
        "a263636d6475706b695f656e726f6c6c6d656e745f7375626d69746d656e726f6c6c6d656e745f6964\
         5088a75cc10b8d43d9b1f91ad8a12be8ee",
    );

    assert_eq!(
        AnyCmdReq::load(&raw).unwrap_err(),
        CodecError::UnknownCommand("pki_enrollment_submit".to_string())
    );
}

#[test]
fn test_short_enrollment_id_is_an_error() {
    // enrollment_id is an 8-byte string
    let raw = bytes(
        "a263636d6475706b695f656e726f6c6c6d656e745f72656a6563746d656e726f6c6c6d656e745f6964\
         4888a75cc10b8d43d9",
    );

    assert!(matches!(
        pki_enrollment_reject::Req::load(&raw),
        Err(CodecError::DeserializationFailed(_))
    ));
}

#[test]
fn test_reject_rep_fixtures() {
    let cases = [
        // {"status": "ok"}
        ("a166737461747573626f6b", pki_enrollment_reject::Rep::Ok),
        // {"status": "not_allowed", "reason": "oof"}
        (
            "a2667374617475736b6e6f745f616c6c6f77656466726561736f6e636f6f66",
            pki_enrollment_reject::Rep::NotAllowed {
                reason: Some("oof".to_string()),
            },
        ),
        // {"status": "not_found", "reason": "no such request"}
        (
            "a266737461747573696e6f745f666f756e6466726561736f6e6f6e6f20737563682072657175657374",
            pki_enrollment_reject::Rep::NotFound {
                reason: Some("no such request".to_string()),
            },
        ),
        // {"status": "no_longer_available", "reason": "oof"}
        (
            "a266737461747573736e6f5f6c6f6e6765725f617661696c61626c6566726561736f6e636f6f66",
            pki_enrollment_reject::Rep::NoLongerAvailable {
                reason: Some("oof".to_string()),
            },
        ),
        // {"status": "not_allowed"}
        (
            "a1667374617475736b6e6f745f616c6c6f776564",
            pki_enrollment_reject::Rep::NotAllowed { reason: None },
        ),
        // {"status": "not_allowed", "reason": ""}
        (
            "a2667374617475736b6e6f745f616c6c6f77656466726561736f6e60",
            pki_enrollment_reject::Rep::NotAllowed {
                reason: Some(String::new()),
            },
        ),
        // {"status": "rate_limited", "reason": "try later"}
        (
            "a2667374617475736c726174655f6c696d6974656466726561736f6e69747279206c61746572",
            pki_enrollment_reject::Rep::UnknownStatus {
                unknown_status: "rate_limited".to_string(),
                reason: Some("try later".to_string()),
            },
        ),
    ];

    for (hex, expected) in cases {
        let raw = bytes(hex);
        let rep = pki_enrollment_reject::Rep::load(&raw).unwrap();
        assert_eq!(rep, expected);
        // Canonical: re-encoding gives back the exact bytes.
        assert_eq!(rep.dump().unwrap(), raw);
    }
}

#[test]
fn test_not_found_reason_is_exposed() {
    let raw = bytes(
        "a266737461747573696e6f745f666f756e6466726561736f6e6f6e6f20737563682072657175657374",
    );
    let rep = pki_enrollment_reject::Req::load_response(&raw).unwrap();

    assert_eq!(rep.status(), Status::NotFound);
    assert_eq!(rep.reason(), Some("no such request"));
}

#[test]
fn test_unknown_status_ignores_extra_fields() {
    // {"status": "rate_limited", "retry_after": 30, "reason": "try later"}
    let raw = bytes(
        "a3667374617475736c726174655f6c696d697465646b72657472795f6166746572181e66726561736f\
         6e69747279206c61746572",
    );
    let rep = pki_enrollment_reject::Rep::load(&raw).unwrap();

    assert_eq!(
        rep,
        pki_enrollment_reject::Rep::UnknownStatus {
            unknown_status: "rate_limited".to_string(),
            reason: Some("try later".to_string()),
        }
    );
    assert_eq!(rep.status(), Status::Unknown("rate_limited"));
}

#[test]
fn test_unknown_status_with_null_reason() {
    // {"status": "rate_limited", "reason": null}
    let raw = bytes("a2667374617475736c726174655f6c696d6974656466726561736f6ef6");

    assert_eq!(
        pki_enrollment_reject::Rep::load(&raw).unwrap(),
        pki_enrollment_reject::Rep::UnknownStatus {
            unknown_status: "rate_limited".to_string(),
            reason: None,
        }
    );
}

#[test]
fn test_ok_ignores_fields_from_newer_servers() {
    // {"status": "ok", "server_hint": "x"}
    let raw = bytes("a266737461747573626f6b6b7365727665725f68696e746178");

    assert_eq!(
        pki_enrollment_reject::Rep::load(&raw).unwrap(),
        pki_enrollment_reject::Rep::Ok
    );
}

#[test]
fn test_malformed_replies_are_errors() {
    let cases = [
        // truncated {"status": "ok"}
        ("a166737461747573626f", "truncated"),
        // {"status": 1}
        ("a16673746174757301", "non-text status"),
        // {"reason": "x"}
        ("a166726561736f6e6178", "missing status"),
        // ["status", "ok"]
        ("8266737461747573626f6b", "not a map"),
        // {"status": "not_found", "reason": 7}
        ("a266737461747573696e6f745f666f756e6466726561736f6e07", "known status, bad reason"),
        // {"status": "rate_limited", "reason": 7}
        ("a2667374617475736c726174655f6c696d6974656466726561736f6e07", "unknown status, bad reason"),
        // {"status": "ok"} followed by a stray byte
        ("a166737461747573626f6b00", "trailing bytes"),
        ("", "empty"),
    ];

    for (hex, label) in cases {
        assert!(
            pki_enrollment_reject::Rep::load(&bytes(hex)).is_err(),
            "{label} should not decode"
        );
    }
}

#[test]
fn test_list_rep_fixtures() {
    // {"status": "ok", "enrollments": [{
    //     "enrollment_id": h'e1fe88bd0f054261887a6c8039710b40',
    //     "submit_payload": h'3c64756d6d793e',
    //     "submit_payload_signature": h'3c7369676e61747572653e',
    //     "submitted_on": 1668594983390001,
    //     "submitter_der_x509_certificate": h'3c78353039206365727469663e'}]}
    let raw = bytes(
        "a266737461747573626f6b6b656e726f6c6c6d656e747381a56d656e726f6c6c6d656e745f696450e1\
         fe88bd0f054261887a6c8039710b406e7375626d69745f7061796c6f6164473c64756d6d793e781873\
         75626d69745f7061796c6f61645f7369676e61747572654b3c7369676e61747572653e6c7375626d69\
         747465645f6f6e1b0005ed940b424b31781e7375626d69747465725f6465725f783530395f63657274\
         696669636174654d3c78353039206365727469663e",
    );
    let expected = pki_enrollment_list::Rep::Ok {
        enrollments: vec![pki_enrollment_list::PkiEnrollmentListItem {
            enrollment_id: EnrollmentID::from_hex("e1fe88bd0f054261887a6c8039710b40").unwrap(),
            submit_payload: Bytes::from_static(b"<dummy>"),
            submit_payload_signature: Bytes::from_static(b"<signature>"),
            submitted_on: chrono::DateTime::from_timestamp_micros(1_668_594_983_390_001).unwrap(),
            submitter_der_x509_certificate: Bytes::from_static(b"<x509 certif>"),
        }],
    };

    let rep = pki_enrollment_list::Rep::load(&raw).unwrap();
    assert_eq!(rep, expected);
    assert_eq!(rep.dump().unwrap(), raw);

    // {"status": "ok", "enrollments": []}
    let raw = bytes("a266737461747573626f6b6b656e726f6c6c6d656e747380");
    assert_eq!(
        pki_enrollment_list::Rep::load(&raw).unwrap(),
        pki_enrollment_list::Rep::Ok {
            enrollments: Vec::new()
        }
    );
}

#[test]
fn test_status_known_to_one_command_is_unknown_to_another() {
    // {"status": "no_longer_available", "reason": "oof"}
    let raw = bytes(
        "a266737461747573736e6f5f6c6f6e6765725f617661696c61626c6566726561736f6e636f6f66",
    );

    assert_eq!(
        pki_enrollment_list::Rep::load(&raw).unwrap(),
        pki_enrollment_list::Rep::UnknownStatus {
            unknown_status: "no_longer_available".to_string(),
            reason: Some("oof".to_string()),
        }
    );
    assert_eq!(
        pki_enrollment_accept::Rep::load(&raw).unwrap(),
        pki_enrollment_accept::Rep::NoLongerAvailable {
            reason: Some("oof".to_string()),
        }
    );
}

#[test]
fn test_any_cmd_req_commands_match_variants() {
    let requests: Vec<AnyCmdReq> = vec![
        pki_enrollment_list::Req {}.into(),
        pki_enrollment_reject::Req {
            enrollment_id: enrollment_id(),
        }
        .into(),
    ];

    for req in requests {
        assert!(AnyCmdReq::COMMANDS.contains(&req.cmd()));
        assert_eq!(AnyCmdReq::load(&req.dump().unwrap()).unwrap(), req);
    }
}
