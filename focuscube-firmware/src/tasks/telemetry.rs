//! Telemetry UART transmit task
//!
//! Streams timer snapshots to the radio bridge.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;
use focuscube_protocol::{CubeMessage, TelemetryRecord, PROTOCOL_VERSION};

use crate::channels::TELEMETRY_SNAPSHOT;

/// Telemetry task - one frame per snapshot
#[embassy_executor::task]
pub async fn telemetry_task(mut tx: BufferedUartTx) {
    info!("Telemetry task started");

    send(
        &mut tx,
        CubeMessage::Hello {
            version: PROTOCOL_VERSION,
        },
    )
    .await;

    loop {
        let snapshot = TELEMETRY_SNAPSHOT.wait().await;
        let record = TelemetryRecord::from_snapshot(&snapshot);
        send(&mut tx, CubeMessage::Telemetry(record)).await;
    }
}

async fn send(tx: &mut BufferedUartTx, message: CubeMessage<'_>) {
    let bytes = match message.to_frame().and_then(|frame| frame.to_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to encode {:?}: {:?}", message, e);
            return;
        }
    };

    if let Err(e) = tx.write_all(&bytes).await {
        warn!("Telemetry write failed: {:?}", e);
    } else {
        trace!("Telemetry sent ({} bytes)", bytes.len());
    }
}
