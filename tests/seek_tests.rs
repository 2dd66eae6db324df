// tests/seek_tests.rs
use segfile_rs::*;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, Write};
use tempfile::NamedTempFile;

fn open_rw(tmp: &NamedTempFile) -> File {
    OpenOptions::new().read(true).write(true).open(tmp.path()).unwrap()
}

#[test]
fn test_seek_lands_on_translated_offset() {
    let tmp = NamedTempFile::new().unwrap();
    let layout = SegmentLayout::new(1024, 0).unwrap();
    let mut desc = SegmentDescriptor::new(open_rw(&tmp), layout);

    let ok = desc.seek(3, 100);
    assert_eq!(ok.offset, layout.translate(3, 100));
    assert_eq!(desc.file_mut().stream_position().unwrap(), 3172);
}

#[test]
fn test_marker_byte_round_trip() {
    let tmp = NamedTempFile::new().unwrap();
    let layout = SegmentLayout::new(1024, 0).unwrap();

    {
        let mut desc = SegmentDescriptor::new(open_rw(&tmp), layout);
        desc.seek(3, 100);
        desc.file_mut().write_all(&[0xA5]).unwrap();
        desc.file_mut().flush().unwrap();
    }

    // Independent handle on the same file
    let mut desc = SegmentDescriptor::new(File::open(tmp.path()).unwrap(), layout);
    desc.seek(3, 100);
    let mut byte = [0u8; 1];
    desc.file_mut().read_exact(&mut byte).unwrap();
    assert_eq!(byte[0], 0xA5);

    let contents = std::fs::read(tmp.path()).unwrap();
    assert_eq!(contents.len(), 3173);
    assert_eq!(contents[3172], 0xA5);
    assert!(contents[..3172].iter().all(|&b| b == 0));
}

#[test]
fn test_header_is_skipped() {
    let tmp = NamedTempFile::new().unwrap();
    let layout = SegmentLayout::new(1000, 512).unwrap();
    let mut desc = SegmentDescriptor::new(open_rw(&tmp), layout);

    desc.file_mut().write_all(&[0xEE; 512]).unwrap();
    for n in 0..4u64 {
        desc.seek(n, 0);
        desc.file_mut().write_all(&[n as u8 + 1; 1000]).unwrap();
    }

    let contents = std::fs::read(tmp.path()).unwrap();
    assert_eq!(contents.len(), 512 + 4 * 1000);
    assert!(contents[..512].iter().all(|&b| b == 0xEE));
    assert_eq!(contents[512], 1);
    assert_eq!(contents[3 * 1000 + 512], 4);
    assert_eq!(contents[3 * 1000 + 512 + 999], 4);
}

#[test]
fn test_seek_through_shared_file_reference() {
    let tmp = NamedTempFile::new().unwrap();
    let file = open_rw(&tmp);
    let layout = SegmentLayout::new(256, 0).unwrap();

    let mut desc = SegmentDescriptor::new(&file, layout);
    desc.seek(2, 3);
    desc.file_mut().write_all(b"seg").unwrap();

    let mut desc = SegmentDescriptor::new(&file, layout);
    desc.seek(2, 3);
    let mut buf = [0u8; 3];
    desc.file_mut().read_exact(&mut buf).unwrap();
    assert_eq!(&buf, b"seg");
}

#[test]
fn test_seek_past_4gib_is_sparse() {
    let tmp = NamedTempFile::new().unwrap();
    let layout = SegmentLayout::new(65536, 0).unwrap();
    let mut desc = SegmentDescriptor::new(open_rw(&tmp), layout);

    let ok = seek(&mut desc, 100_000, 0);
    assert_eq!(ok.offset, 6_553_600_000);
    assert_eq!(desc.file_mut().stream_position().unwrap(), 6_553_600_000);
}

#[test]
#[should_panic(expected = "segment_seek")]
fn test_offset_beyond_os_limit_is_fatal() {
    let tmp = NamedTempFile::new().unwrap();
    // 2^31 segments of 2^32 bytes put the offset at 2^63, which no OS accepts
    let layout = SegmentLayout::new(1 << 32, 0).unwrap();
    let mut desc = SegmentDescriptor::new(open_rw(&tmp), layout);
    desc.seek(1 << 31, 0);
}

#[test]
fn test_fatal_seek_never_reports_success() {
    let tmp = NamedTempFile::new().unwrap();
    let layout = SegmentLayout::new(1 << 32, 0).unwrap();

    let result = std::panic::catch_unwind(move || {
        let mut desc = SegmentDescriptor::new(open_rw(&tmp), layout);
        desc.seek(1 << 31, 0)
    });

    let payload = result.expect_err("seek beyond the OS limit must not succeed");
    let message = payload.downcast_ref::<String>().unwrap();
    assert!(message.starts_with("segment_seek: "));
}
