//! Edge-case coverage for the redaction walk and the encoder contract.
//!
//! These tests focus on the boundary behaviors the engine guarantees:
//! idempotence, empty and unpopulated inputs, list order preservation, map
//! opacity, and redaction reach through deeply nested values.

use std::collections::BTreeMap;

use scrubber::{
    redacted_copy, AnnotationMarker, Encoder, JsonMarshaller, Marshaller, Message, RedactionConfig,
};
use serde::Serialize;

const SENSITIVE: AnnotationMarker = AnnotationMarker::new("acme.v1.sensitive");

#[test]
fn test_empty_message() {
    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Empty {}

    let encoder = Encoder::new(RedactionConfig::new(SENSITIVE));
    let bytes = encoder.marshal(&Empty {}).unwrap();
    assert_eq!(bytes, b"{}");
}

#[test]
fn test_unpopulated_fields_serialize_as_absent() {
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Message)]
    struct Sparse {
        #[serde(skip_serializing_if = "Option::is_none")]
        #[message(marked(SENSITIVE))]
        token: Option<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        tags: Vec<String>,
    }

    let encoder = Encoder::new(RedactionConfig::new(SENSITIVE));
    let bytes = encoder.marshal(&Sparse::default()).unwrap();
    assert_eq!(bytes, b"{}");
}

#[test]
fn test_redaction_is_idempotent() {
    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Account {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        #[message(marked(SENSITIVE))]
        api_key: Option<String>,
    }

    let account = Account {
        name: "primary".into(),
        api_key: Some("sk_live_1234".into()),
    };

    let once = redacted_copy(&account, SENSITIVE);
    let twice = redacted_copy(&once, SENSITIVE);
    assert_eq!(once, twice);

    let encoder = Encoder::new(RedactionConfig::new(SENSITIVE));
    assert_eq!(
        encoder.marshal(&account).unwrap(),
        encoder.marshal(&once).unwrap()
    );
}

#[test]
fn test_recursive_reach_three_levels_deep() {
    // message → singular message → list-of-message element: a marker on the
    // leaf clears exactly that leaf field.
    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Grant {
        scope: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        #[message(marked(SENSITIVE))]
        secret: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Policy {
        name: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        #[message]
        grants: Vec<Grant>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Tenant {
        id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        #[message]
        policy: Option<Policy>,
    }

    let tenant = Tenant {
        id: 42,
        policy: Some(Policy {
            name: "default".into(),
            grants: vec![
                Grant {
                    scope: "read".into(),
                    secret: Some("g1".into()),
                },
                Grant {
                    scope: "write".into(),
                    secret: Some("g2".into()),
                },
            ],
        }),
    };

    let redacted = redacted_copy(&tenant, SENSITIVE);
    let policy = redacted.policy.as_ref().unwrap();
    assert_eq!(redacted.id, 42);
    assert_eq!(policy.name, "default");
    assert_eq!(policy.grants.len(), 2);
    assert_eq!(policy.grants[0].scope, "read");
    assert!(policy.grants[0].secret.is_none());
    assert_eq!(policy.grants[1].scope, "write");
    assert!(policy.grants[1].secret.is_none());
}

#[test]
fn test_list_order_and_length_survive_redaction() {
    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Entry {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        #[message(marked(SENSITIVE))]
        payload: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Batch {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        #[message]
        entries: Vec<Entry>,
    }

    let batch = Batch {
        entries: (0..5)
            .map(|index| Entry {
                label: format!("entry-{index}"),
                payload: Some("data".into()),
            })
            .collect(),
    };

    let redacted = redacted_copy(&batch, SENSITIVE);
    let labels: Vec<_> = redacted
        .entries
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();
    assert_eq!(
        labels,
        ["entry-0", "entry-1", "entry-2", "entry-3", "entry-4"]
    );
}

#[test]
fn test_map_values_are_not_descended_into() {
    // Map fields are opaque to the walk: values that are messages keep their
    // marked fields when the map itself is unmarked.
    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Secretive {
        #[serde(skip_serializing_if = "Option::is_none")]
        #[message(marked(SENSITIVE))]
        secret: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Registry {
        owner: String,
        by_name: BTreeMap<String, Secretive>,
    }

    let registry = Registry {
        owner: "ops".into(),
        by_name: BTreeMap::from([
            (
                "first".to_string(),
                Secretive {
                    secret: Some("alpha".into()),
                },
            ),
            (
                "second".to_string(),
                Secretive {
                    secret: Some("beta".into()),
                },
            ),
        ]),
    };

    let encoder = Encoder::new(RedactionConfig::new(SENSITIVE));
    let json = String::from_utf8(encoder.marshal(&registry).unwrap()).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"owner":"ops","by_name":{"#,
            r#""first":{"secret":"alpha"},"second":{"secret":"beta"}}}"#
        )
    );
}

#[test]
fn test_marked_map_is_cleared_whole() {
    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Tagged {
        name: String,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        #[message(marked(SENSITIVE))]
        tags: BTreeMap<String, String>,
    }

    let tagged = Tagged {
        name: "node".into(),
        tags: BTreeMap::from([("k".to_string(), "v".to_string())]),
    };

    let encoder = Encoder::new(RedactionConfig::new(SENSITIVE));
    let json = String::from_utf8(encoder.marshal(&tagged).unwrap()).unwrap();
    assert_eq!(json, r#"{"name":"node"}"#);
}

#[test]
fn test_scalar_list_passes_through() {
    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Labels {
        values: Vec<String>,
    }

    let labels = Labels {
        values: vec!["kept".into(), "also kept".into()],
    };
    let redacted = redacted_copy(&labels, SENSITIVE);
    assert_eq!(redacted, labels);
}

#[test]
fn test_unicode_values_survive_the_pipeline() {
    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Note {
        body: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        #[message(marked(SENSITIVE))]
        author_tax_id: Option<String>,
    }

    let note = Note {
        body: "秘密ではない 🔓".into(),
        author_tax_id: Some("078-05-1120".into()),
    };

    let encoder = Encoder::new(RedactionConfig::new(SENSITIVE));
    let json = String::from_utf8(encoder.marshal(&note).unwrap()).unwrap();
    assert_eq!(json, "{\"body\":\"秘密ではない 🔓\"}");
}

#[test]
fn test_deterministic_output_for_identical_inputs() {
    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Event {
        kind: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        #[message(marked(SENSITIVE))]
        detail: Option<String>,
    }

    let event = Event {
        kind: "login".into(),
        detail: Some("from 10.0.0.1".into()),
    };

    let encoder = Encoder::new(RedactionConfig::new(SENSITIVE));
    let first = encoder.marshal(&event).unwrap();
    let second = encoder.marshal(&event).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_shared_encoder_marshals_independent_messages() {
    // Calls on one instance are isolated: each works on its own copy.
    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Ping {
        seq: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        #[message(marked(SENSITIVE))]
        cookie: Option<String>,
    }

    let encoder = Encoder::new(RedactionConfig::new(SENSITIVE));
    let first = Ping {
        seq: 1,
        cookie: Some("c1".into()),
    };
    let second = Ping {
        seq: 2,
        cookie: Some("c2".into()),
    };

    assert_eq!(encoder.marshal(&first).unwrap(), br#"{"seq":1}"#);
    assert_eq!(encoder.marshal(&second).unwrap(), br#"{"seq":2}"#);
    assert_eq!(first.cookie.as_deref(), Some("c1"));
    assert_eq!(second.cookie.as_deref(), Some("c2"));
}

#[test]
fn test_passthrough_with_explicit_marshaller() {
    #[derive(Clone, Debug, PartialEq, Serialize, Message)]
    struct Payload {
        #[serde(skip_serializing_if = "Option::is_none")]
        #[message(marked(SENSITIVE))]
        body: Option<String>,
    }

    let payload = Payload {
        body: Some("visible when disabled".into()),
    };

    let config = RedactionConfig::new(SENSITIVE).with_enabled(false);
    let encoder = Encoder::with_marshaller(config, JsonMarshaller);
    assert_eq!(
        encoder.marshal(&payload).unwrap(),
        JsonMarshaller.marshal(&payload).unwrap()
    );
}
