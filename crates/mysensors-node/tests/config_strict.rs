#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use mysensors_core::protocol::catalog::SensorType;
use mysensors_node::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
node:
  id: 12
sensors:
  - id: 1
    knd: TEMP # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
node:
  id: 12
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.node.id, 12);
    assert_eq!(cfg.node.parent, 0);
    assert!(!cfg.node.request_ack);
    assert!(cfg.sensors.is_empty());
}

#[test]
fn sensor_kinds_parse_by_name() {
    let ok = r#"
version: 1
node:
  id: 3
sensors:
  - id: 1
    kind: TEMP
  - id: 2
    kind: ARDUINO_REPEATER_NODE
    description: "relay"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.sensors[0].kind, SensorType::Temp);
    assert_eq!(cfg.sensors[1].kind, SensorType::ArduinoRepeaterNode);
    assert_eq!(cfg.sensors[1].description.as_deref(), Some("relay"));
}

#[test]
fn wrong_version_is_rejected() {
    let bad = "version: 2\nnode:\n  id: 3\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn reserved_node_ids_are_rejected() {
    for id in [0, 255] {
        let bad = format!("version: 1\nnode:\n  id: {id}\n");
        let err = config::load_from_str(&bad).expect_err("must fail");
        assert_eq!(err.code().as_str(), "BAD_CONFIG", "id={id}");
    }

    let bad = "version: 1\nnode:\n  id: 4\n  parent: 4\n";
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn sensor_ids_must_be_unique_and_not_reserved() {
    let dup = r#"
version: 1
node:
  id: 3
sensors:
  - { id: 1, kind: DOOR }
  - { id: 1, kind: MOTION }
"#;
    assert_eq!(config::load_from_str(dup).unwrap_err().code().as_str(), "BAD_CONFIG");

    let reserved = r#"
version: 1
node:
  id: 3
sensors:
  - { id: 255, kind: DOOR }
"#;
    assert_eq!(config::load_from_str(reserved).unwrap_err().code().as_str(), "BAD_CONFIG");
}

#[test]
fn strings_must_fit_one_payload() {
    let bad = r#"
version: 1
node:
  id: 3
  sketch_name: "a sketch name that is far too long"
"#;
    assert_eq!(config::load_from_str(bad).unwrap_err().code().as_str(), "BAD_CONFIG");
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");
}

#[test]
fn example_config_loads() {
    let cfg = config::load_from_file("mysensors.example.yaml").expect("example must load");
    assert_eq!(cfg.node.id, 12);
    assert_eq!(cfg.sensors.len(), 2);
}
