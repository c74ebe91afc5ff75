//! Inbound-queue orchestration.
//!
//! Platform adapters push normalized messages into an mpsc queue; the
//! runner drains it and spawns one dispatch task per message. Distinct
//! messages are independently schedulable, so a handler blocked on slow
//! I/O cannot stall dispatch of unrelated traffic.

use std::sync::Arc;

use tokio::sync::mpsc::Receiver;
use tracing::{debug, info};

use herald_channel::{InboundMessage, ReplySink};

use crate::dispatcher::Dispatcher;

/// Drain `inbound` until the senders drop, dispatching each message on its
/// own task.
pub async fn run(
    dispatcher: Arc<Dispatcher>,
    mut inbound: Receiver<InboundMessage>,
    sink: Arc<dyn ReplySink>,
) {
    info!(commands = dispatcher.registry().len(), "dispatch loop starting");

    while let Some(message) = inbound.recv().await {
        let dispatcher = Arc::clone(&dispatcher);
        let sink = Arc::clone(&sink);
        tokio::spawn(async move {
            let outcome = dispatcher.dispatch(message, sink.as_ref()).await;
            debug!(?outcome, "dispatch finished");
        });
    }

    info!("dispatch loop stopped");
}
