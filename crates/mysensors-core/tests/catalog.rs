#![allow(clippy::unwrap_used)]

use mysensors_core::protocol::catalog::{
    Command, InternalType, PayloadType, SensorType, StreamType, VariableType,
};

#[test]
fn ids_match_catalog_positions() {
    assert_eq!(Command::Stream.as_u8(), 4);
    assert_eq!(PayloadType::Custom.as_u8(), 6);
    assert_eq!(VariableType::LockStatus.as_u8(), 36);
    assert_eq!(InternalType::SketchVersion.as_u8(), 12);
    assert_eq!(SensorType::ArduinoNode.as_u8(), 17);
    assert_eq!(SensorType::AirQuality.as_u8(), 22);
    assert_eq!(StreamType::Image.as_u8(), 2);
}

#[test]
fn from_u8_covers_every_entry() {
    for (i, v) in VariableType::ALL.iter().enumerate() {
        assert_eq!(VariableType::from_u8(i as u8), Some(*v));
    }
    for (i, s) in SensorType::ALL.iter().enumerate() {
        assert_eq!(SensorType::from_u8(i as u8), Some(*s));
    }
    assert_eq!(VariableType::ALL.len(), 37);
    assert_eq!(InternalType::ALL.len(), 13);
    assert_eq!(SensorType::ALL.len(), 23);
}

#[test]
fn unknown_ids_map_to_none() {
    assert_eq!(Command::from_u8(5), None);
    assert_eq!(PayloadType::from_u8(7), None);
    assert_eq!(StreamType::from_u8(200), None);
}

#[test]
fn names_serialize_screaming_snake() {
    let name = serde_json::to_string(&SensorType::ArduinoRepeaterNode).unwrap();
    assert_eq!(name, "\"ARDUINO_REPEATER_NODE\"");
    let v: VariableType = serde_json::from_str("\"RAIN_RATE\"").unwrap();
    assert_eq!(v, VariableType::RainRate);
}
