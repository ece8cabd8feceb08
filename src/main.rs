//! Demo: replays a scripted two-finger gesture through the recording pipeline
//! and prints the emitted session document plus a draw-plan summary.

use touchtrace::capture::{ContactEvent, ContactToken, RawContact, ScriptedSource, TouchSource};
use touchtrace::session::{GestureSession, WriterSink};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PALETTE_SIZE: u32 = 8;

fn scripted_gesture() -> ScriptedSource {
    let c = |token: u64, t: f64, x: f64, y: f64| RawContact::new(ContactToken(token), t, x, y);

    ScriptedSource::new(vec![
        vec![ContactEvent::began(c(1, 0.00, 10.0, 10.0))],
        vec![
            ContactEvent::moved(c(1, 0.02, 14.0, 12.0)),
            ContactEvent::began(c(2, 0.02, 60.0, 40.0)),
        ],
        vec![
            ContactEvent::moved(c(1, 0.04, 18.0, 15.0)),
            ContactEvent::moved(c(2, 0.04, 55.0, 44.0)),
        ],
        vec![ContactEvent::ended(c(1, 0.06, 18.0, 15.0))],
        vec![ContactEvent::ended(c(2, 0.08, 52.0, 47.0))],
    ])
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "touchtrace=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting touchtrace demo v{}", env!("CARGO_PKG_VERSION"));

    let mut session = GestureSession::new(WriterSink::new(std::io::stdout()), PALETTE_SIZE);
    let mut source = scripted_gesture();

    while let Some(batch) = source.next_batch() {
        session.handle_batch(&batch)?;

        let list = session.display_list();
        tracing::debug!(
            polylines = list.polylines.len(),
            markers = list.markers.len(),
            highlights = list.highlights.len(),
            "render tick"
        );
    }

    Ok(())
}
