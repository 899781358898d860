//! Server loop with a bounded graceful shutdown

use std::{future::IntoFuture, sync::Arc, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::Notify};
use tracing::{info, warn};

/// How the server stopped after the shutdown signal fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every open connection finished within the drain timeout
    Drained,
    /// Connections were still open when the drain timeout elapsed
    TimedOut,
}

/// Serve `app` until `signal` resolves, then drain for at most `drain_timeout`
///
/// After the signal the listener stops accepting. In-flight requests get up to
/// `drain_timeout` to finish; anything still open after that is dropped.
pub async fn serve_until<S>(
    listener: TcpListener,
    app: Router,
    signal: S,
    drain_timeout: Duration,
) -> std::io::Result<ShutdownOutcome>
where
    S: Future<Output = ()> + Send + 'static,
{
    let triggered = Arc::new(Notify::new());
    let notifier = Arc::clone(&triggered);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            notifier.notify_one();
        })
        .into_future();

    let deadline = async move {
        triggered.notified().await;
        info!("Waiting up to {:?} for connections to close...", drain_timeout);
        tokio::time::sleep(drain_timeout).await;
    };

    tokio::select! {
        result = server => result.map(|()| ShutdownOutcome::Drained),
        () = deadline => {
            warn!(timeout = ?drain_timeout, "Connections still open after drain timeout, closing them");
            Ok(ShutdownOutcome::TimedOut)
        }
    }
}
