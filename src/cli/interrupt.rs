//! Ctrl-C handling for the interactive session.

use std::future::Future;
use std::io;

/// Start listening for Ctrl-C and return a future that completes on the
/// first one.
///
/// The signal handler is registered before this returns, so an interrupt
/// arriving while the greeting is still being printed is not lost.
/// Must be called from inside a tokio runtime.
///
/// # Errors
///
/// Returns an error if the signal handler cannot be registered.
#[cfg(unix)]
pub fn interrupt_listener() -> io::Result<impl Future<Output = ()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    Ok(async move {
        if sigint.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    })
}

/// Start listening for Ctrl-C and return a future that completes on the
/// first one.
///
/// # Errors
///
/// Returns an error if the console handler cannot be registered.
#[cfg(windows)]
pub fn interrupt_listener() -> io::Result<impl Future<Output = ()>> {
    let mut ctrl_c = tokio::signal::windows::ctrl_c()?;
    Ok(async move {
        if ctrl_c.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    })
}
