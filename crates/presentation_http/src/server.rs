//! Serving with a bounded graceful shutdown
//!
//! Once the shutdown future resolves, in-flight requests get `drain_timeout`
//! to finish. Connections still open after that are dropped.

use std::{future::Future, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// Serve `app` until `shutdown` resolves and in-flight requests drain
///
/// Returns once every connection has closed or `drain_timeout` has elapsed
/// after the shutdown signal, whichever comes first.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
    drain_timeout: Duration,
) -> std::io::Result<()> {
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = signalled_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    let deadline = async move {
        if signalled_rx.await.is_err() {
            // server finished without a shutdown signal
            std::future::pending::<()>().await;
        }
        info!("⏳ Waiting up to {:?} for connections to close...", drain_timeout);
        tokio::time::sleep(drain_timeout).await;
    };

    tokio::select! {
        result = &mut server => result,
        () = deadline => {
            warn!(?drain_timeout, "Connections still open after shutdown timeout, dropping them");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::routing::get;
    use tokio::{io::AsyncWriteExt, net::TcpStream, sync::Notify};

    use super::*;

    #[tokio::test]
    async fn stalled_request_does_not_hold_shutdown_open() {
        let started = Arc::new(Notify::new());
        let handler_started = Arc::clone(&started);
        let app = Router::new().route(
            "/stall",
            get(move || {
                let started = Arc::clone(&handler_started);
                async move {
                    started.notify_one();
                    std::future::pending::<&'static str>().await
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(
            listener,
            app,
            async move {
                let _ = stop_rx.await;
            },
            Duration::from_millis(100),
        ));

        let mut client = TcpStream::connect(addr).await.unwrap();
        client
            .write_all(b"GET /stall HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap();
        started.notified().await;

        stop_tx.send(()).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server should stop once the drain timeout passes");
        assert!(result.unwrap().is_ok());
    }

    #[tokio::test]
    async fn idle_server_stops_on_signal() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let app = Router::new().route("/health", get(|| async { "ok" }));

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            serve(listener, app, async {}, Duration::from_secs(30)),
        )
        .await;

        assert!(matches!(result, Ok(Ok(()))));
    }
}
