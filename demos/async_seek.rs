// demos/async_seek.rs
use segfile_rs::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tokio::fs::create_dir_all("demos/output").await?;
    let file = tokio::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open("demos/output/async.seg")
        .await?;

    let layout = SegmentLayout::new(4096, 0)?;
    let mut segment_file = SegmentDescriptor::new(file, layout);

    // Write one tag per segment, back to front
    for n in (0..16u64).rev() {
        segment_file.seek_async(n, 0).await;
        segment_file.file_mut().write_all(format!("segment-{:02}", n).as_bytes()).await?;
    }
    segment_file.file_mut().flush().await?;

    let pos = seek_async(&mut segment_file, 9, 0).await;
    let mut tag = [0u8; 10];
    segment_file.file_mut().read_exact(&mut tag).await?;
    println!("offset {}: {}", pos.offset, String::from_utf8_lossy(&tag));

    Ok(())
}
