//! Shared catalog of command, payload, sensor and value identifiers.
//!
//! A [`Message`](super::Message) stores all of these as raw integers; the
//! enums here are for building and for display, never for validation.
//! Unknown ids stay representable on the wire and simply map to `None`.

use serde::{Deserialize, Serialize};

/// Address of the gateway node.
pub const GATEWAY_ADDRESS: u8 = 0;
/// Destination id addressing every node.
pub const BROADCAST_ADDRESS: u8 = 255;
/// Sensor id used for messages about the node itself.
pub const NODE_SENSOR_ID: u8 = 255;

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value ),+
        }

        impl $name {
            /// Every entry, in id order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn from_u8(v: u8) -> Option<Self> {
                match v {
                    $( $value => Some($name::$variant), )+
                    _ => None,
                }
            }

            pub fn as_u8(self) -> u8 {
                self as u8
            }
        }

        impl From<$name> for u8 {
            fn from(v: $name) -> u8 {
                v as u8
            }
        }
    };
}

catalog! {
    /// Top-level message category (3-bit field).
    pub enum Command {
        Presentation = 0,
        Set = 1,
        Req = 2,
        Internal = 3,
        /// Firmware and other data too large for one frame, sent in pieces.
        Stream = 4,
    }
}

catalog! {
    /// Payload type tag (4-bit field).
    pub enum PayloadType {
        String = 0,
        Byte = 1,
        Int16 = 2,
        Uint16 = 3,
        Long32 = 4,
        Ulong32 = 5,
        Custom = 6,
    }
}

catalog! {
    /// Value type carried by set/req messages.
    pub enum VariableType {
        Temp = 0,
        Hum = 1,
        Light = 2,
        Dimmer = 3,
        Pressure = 4,
        Forecast = 5,
        Rain = 6,
        RainRate = 7,
        Wind = 8,
        Gust = 9,
        Direction = 10,
        Uv = 11,
        Weight = 12,
        Distance = 13,
        Impedance = 14,
        Armed = 15,
        Tripped = 16,
        Watt = 17,
        Kwh = 18,
        SceneOn = 19,
        SceneOff = 20,
        Heater = 21,
        HeaterSw = 22,
        LightLevel = 23,
        Var1 = 24,
        Var2 = 25,
        Var3 = 26,
        Var4 = 27,
        Var5 = 28,
        Up = 29,
        Down = 30,
        Stop = 31,
        IrSend = 32,
        IrReceive = 33,
        Flow = 34,
        Volume = 35,
        LockStatus = 36,
    }
}

catalog! {
    /// Sub-type of internal messages.
    pub enum InternalType {
        BatteryLevel = 0,
        Time = 1,
        Version = 2,
        IdRequest = 3,
        IdResponse = 4,
        InclusionMode = 5,
        Config = 6,
        Ping = 7,
        PingAck = 8,
        LogMessage = 9,
        Children = 10,
        SketchName = 11,
        SketchVersion = 12,
    }
}

catalog! {
    /// Sensor kind announced in presentation messages.
    pub enum SensorType {
        Door = 0,
        Motion = 1,
        Smoke = 2,
        Light = 3,
        Dimmer = 4,
        Cover = 5,
        Temp = 6,
        Hum = 7,
        Baro = 8,
        Wind = 9,
        Rain = 10,
        Uv = 11,
        Weight = 12,
        Power = 13,
        Heater = 14,
        Distance = 15,
        LightLevel = 16,
        ArduinoNode = 17,
        ArduinoRepeaterNode = 18,
        Lock = 19,
        Ir = 20,
        Water = 21,
        AirQuality = 22,
    }
}

catalog! {
    /// Kind of data carried by stream messages.
    pub enum StreamType {
        Firmware = 0,
        Sound = 1,
        Image = 2,
    }
}
