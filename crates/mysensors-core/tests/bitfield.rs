use mysensors_core::protocol::bitfield::{bf_get, bf_mask, bf_prep, bf_set, bit_mask};

#[test]
fn masks() {
    assert_eq!(bit_mask(1), 0b1);
    assert_eq!(bit_mask(3), 0b111);
    assert_eq!(bit_mask(8), 0xFF);
    assert_eq!(bf_mask(3, 5), 0b1111_1000);
    assert_eq!(bf_prep(0xFF, 4, 4), 0xF0);
}

#[test]
fn set_replaces_only_the_field() {
    let y = 0b1010_1010;
    let z = bf_set(y, 0b01, 2, 2);
    assert_eq!(z, 0b1010_0110);
    assert_eq!(bf_get(z, 2, 2), 0b01);
    assert_eq!(bf_get(z, 4, 4), 0b1010);
}
