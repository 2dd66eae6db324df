// demos/basic_seek.rs
use segfile_rs::*;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};

const HEADER_SIZE: u64 = 64;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    fs::create_dir_all("demos/output")?;
    let path = "demos/output/basic.seg";
    let file = OpenOptions::new().read(true).write(true).create(true).truncate(true).open(path)?;

    // 1000 byte segments cannot use the shift path
    let layout = SegmentLayout::new(1000, HEADER_SIZE)?;
    println!("layout: {:?}", layout);

    let mut segment_file = SegmentDescriptor::new(file, layout);
    segment_file.file_mut().write_all(&[0u8; HEADER_SIZE as usize])?;

    for n in 0..8u64 {
        let pos = segment_file.seek(n, 0);
        segment_file.file_mut().write_all(&[n as u8; 1000])?;
        println!("segment {} written at offset {}", n, pos.offset);
    }

    segment_file.seek(5, 999);
    let mut last = [0u8; 1];
    segment_file.file_mut().read_exact(&mut last)?;
    println!("last byte of segment 5: {}", last[0]);

    Ok(())
}
