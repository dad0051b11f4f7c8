//! Unit tests for `TwaiFrame` construction and accessors.
use super::*;

//==================================================================================DATA_FRAME
#[test]
/// A standard data frame keeps its identifier and payload.
fn test_data_frame() {
    let frame = TwaiFrame::data_frame(0x123, false, &[0x01, 0x02]).expect("frame must build");
    assert_eq!(frame.identifier(), 0x123);
    assert_eq!(frame.payload(), Some(&[0x01, 0x02][..]));
    assert_eq!(frame.dlc(), 2);
    assert!(!frame.is_extended());
    assert!(!frame.is_remote_frame());
}

#[test]
/// Nine payload bytes exceed the classic CAN limit.
fn test_data_frame_too_large() {
    let err = TwaiFrame::data_frame(0x123, false, &[0u8; 9]).unwrap_err();
    assert_eq!(err, FrameError::TooLarge { len: 9 });
}

#[test]
/// Eight bytes and zero bytes are both valid lengths.
fn test_data_frame_bounds() {
    assert!(TwaiFrame::data_frame(0x7FF, false, &[0xAA; 8]).is_ok());
    let empty = TwaiFrame::data_frame(0, false, &[]).unwrap();
    assert_eq!(empty.payload(), Some(&[][..]));
}

//==================================================================================IDENTIFIER
#[test]
/// Standard frames reject identifiers above 11 bits, extended ones above 29 bits.
fn test_identifier_ranges() {
    assert_eq!(
        TwaiFrame::data_frame(0x800, false, &[]).unwrap_err(),
        FrameError::InvalidIdentifier { id: 0x800 }
    );

    let ext = TwaiFrame::data_frame(0x800, true, &[1]).unwrap();
    assert!(ext.is_extended());
    assert_eq!(ext.identifier(), 0x800);

    assert_eq!(
        TwaiFrame::data_frame(0x2000_0000, true, &[]).unwrap_err(),
        FrameError::InvalidIdentifier { id: 0x2000_0000 }
    );
}

//==================================================================================REMOTE
#[test]
/// Remote requests expose no payload.
fn test_remote_frame() {
    let frame = TwaiFrame::remote_frame(0x42, false).unwrap();
    assert!(frame.is_remote_frame());
    assert_eq!(frame.payload(), None);
    assert_eq!(frame.dlc(), 0);
    assert!(Frame::data(&frame).is_empty());
}

#[test]
/// A requested length on a remote request is dropped; the frame keeps DLC 0.
fn test_new_remote_drops_requested_length() {
    let id = StandardId::new(0x42).unwrap();
    let frame = <TwaiFrame as Frame>::new_remote(id, 4).unwrap();
    assert!(frame.is_remote_frame());
    assert_eq!(frame.dlc(), 0);
    assert_eq!(frame.payload(), None);
    assert_eq!(frame, TwaiFrame::remote_frame(0x42, false).unwrap());
}

//==================================================================================EMBEDDED_CAN
#[test]
/// The `embedded_can::Frame` constructors follow the same limits.
fn test_embedded_can_frame() {
    let id = StandardId::new(0x100).unwrap();
    let frame = <TwaiFrame as Frame>::new(id, &[1, 2, 3]).unwrap();
    assert_eq!(frame.id(), Id::Standard(id));
    assert_eq!(Frame::data(&frame), &[1, 2, 3]);

    assert!(<TwaiFrame as Frame>::new(id, &[0; 9]).is_none());
    assert!(<TwaiFrame as Frame>::new_remote(id, 9).is_none());
}
