use bytering::config::RingConfig;
use bytering::logging;
use bytering::ring::RingBuffer;
use tracing::{error, info};

fn main() {
    logging::init();
    if let Err(e) = run() {
        error!("smoke test failed: {}", e);
        std::process::exit(1);
    }
    info!("smoke test passed");
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut ring = RingBuffer::with_config(RingConfig::from_env()?);
    ring.init()?;

    ring.write_into(b"hello")?;

    let mut tmp = [0u8; 100];
    let n = ring.read_into(&mut tmp)?;
    if n != 5 {
        return Err(format!("expected 5 bytes back, read {}", n).into());
    }
    if &tmp[..n] != b"hello" {
        return Err(format!("read back {:?}", &tmp[..n]).into());
    }

    ring.destroy();
    Ok(())
}
