use anyhow::Context as _;
use std::net::{SocketAddr, TcpListener};
use std::path::Path;
use std::process::{Child, Command};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Child process that is killed (and reaped) when dropped.
pub struct KillOnDrop(pub Child);

impl Drop for KillOnDrop {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

/// Pick an unused TCP port on localhost.
///
/// Note: this does not reserve the port; it's still possible for another process to bind it
/// before you do.
///
/// # Errors
///
/// Returns an error if binding an ephemeral localhost port fails or if the bound socket's
/// local address cannot be read.
pub fn pick_unused_port() -> anyhow::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").context("bind ephemeral port")?;
    Ok(listener.local_addr()?.port())
}

/// Spawn a service binary listening on `127.0.0.1:<port>`.
///
/// Every service binary accepts `--bind` and `--log-level`.
///
/// # Errors
///
/// Returns an error if the process cannot be started.
pub fn spawn_service(bin: impl AsRef<Path>, port: u16) -> anyhow::Result<KillOnDrop> {
    let bin = bin.as_ref();
    let child = Command::new(bin)
        .arg("--bind")
        .arg(format!("127.0.0.1:{port}"))
        .arg("--log-level")
        .arg("info")
        .spawn()
        .with_context(|| format!("spawn {}", bin.display()))?;
    Ok(KillOnDrop(child))
}

/// Poll until something accepts TCP connections on `127.0.0.1:<port>`.
///
/// For services without a side-effect-free `GET` endpoint.
///
/// # Errors
///
/// Returns an error if the timeout elapses before a connection succeeds.
pub async fn wait_port_open(port: u16, timeout_dur: Duration) -> anyhow::Result<()> {
    let start = Instant::now();
    loop {
        if start.elapsed() > timeout_dur {
            anyhow::bail!("timed out waiting for 127.0.0.1:{port}");
        }

        match tokio::net::TcpStream::connect(("127.0.0.1", port)).await {
            Ok(_) => return Ok(()),
            Err(_) => tokio::time::sleep(Duration::from_millis(100)).await,
        }
    }
}

/// Poll an HTTP URL until it returns a success status (2xx/3xx).
///
/// # Errors
///
/// Returns an error if the timeout elapses before the endpoint returns a success status.
pub async fn wait_http_ok(url: &str, timeout_dur: Duration) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > timeout_dur {
            anyhow::bail!("timed out waiting for {url}");
        }

        match client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => tokio::time::sleep(Duration::from_millis(200)).await,
        }
    }
}

/// A router served in-process on an ephemeral localhost port.
pub struct RouterHandle {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    join: JoinHandle<std::io::Result<()>>,
}

impl RouterHandle {
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Trigger graceful shutdown and wait for the server task.
    ///
    /// # Errors
    ///
    /// Returns an error if the server task panicked or stopped with an IO error.
    pub async fn stop(mut self) -> anyhow::Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.join
            .await
            .context("join server task")?
            .context("serve router")?;
        Ok(())
    }
}

/// Serve `router` on `127.0.0.1:0` until [`RouterHandle::stop`] is called.
///
/// # Errors
///
/// Returns an error if binding the ephemeral port fails.
pub async fn spawn_router(router: axum::Router) -> anyhow::Result<RouterHandle> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("bind ephemeral port")?;
    let addr = listener.local_addr()?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, router).with_graceful_shutdown(async move {
        let _ = shutdown_rx.await;
    });
    let join = tokio::spawn(async move { server.await });

    Ok(RouterHandle {
        addr,
        shutdown: Some(shutdown_tx),
        join,
    })
}
