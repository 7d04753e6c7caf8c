//! Frame vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use bytes::Bytes;

use mysensors_core::protocol::codec::{decode_frame, encode_frame};

mod vector_loader;
use vector_loader::{load_all, ExpectFrame};

#[test]
fn frame_vectors() {
    let vectors = load_all();
    assert_eq!(vectors.len(), 9);

    for (name, v) in vectors {
        let raw = v.raw();
        let res = decode_frame(raw.clone());

        match (&v.expect, &v.expect_error) {
            (None, Some(code)) => {
                let e = res.expect_err(&name);
                assert_eq!(e.code().as_str(), code, "{name}: {}", v.description);
            }
            (Some(expect), None) => {
                let msg = res.unwrap_or_else(|e| panic!("{name}: {e}"));
                assert_eq!(&ExpectFrame::of(&msg), expect, "{name}: {}", v.description);

                // re-encoding reproduces the frame without radio padding
                let encoded = encode_frame(&msg);
                assert_eq!(&encoded[..], &raw[..msg.wire_len()], "{name}");
            }
            _ => panic!("{name}: needs exactly one of expect / expect_error"),
        }
    }
}

#[test]
fn typed_reads_of_decoded_frames() {
    let int = decode_frame(Bytes::from(hex::decode("12210101000002d4fe").unwrap())).unwrap();
    assert_eq!(int.get_int(), -300);

    let time = decode_frame(Bytes::from(hex::decode("225300000901ff00f15365").unwrap())).unwrap();
    assert_eq!(time.get_ulong(), 1_700_000_000);

    let temp = decode_frame(Bytes::from(hex::decode("2201050500000132312e35").unwrap())).unwrap();
    assert_eq!(temp.get_str(), "21.5");
}
