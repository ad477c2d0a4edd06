use crate::file_server::ShutdownHandle;
use anyhow::{Context, Result};
use std::{process, thread};
use tokio::runtime::{Builder, Runtime};

/// Triggers `handle` on the first Ctrl+C. A second one exits without waiting
/// for the accept loop to drain.
///
/// The signal is registered before this returns, so an interrupt sent once the
/// startup banner is printed is never lost.
#[cfg(unix)]
pub fn listen_for_interrupt(handle: ShutdownHandle) -> Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let runtime = signal_runtime()?;
    let mut interrupt = {
        let _guard = runtime.enter();
        signal(SignalKind::interrupt()).context("Could not listen for Ctrl+C")?
    };

    spawn(runtime, async move {
        if interrupt.recv().await.is_none() {
            return;
        }

        handle.trigger();

        if interrupt.recv().await.is_some() {
            println!("\nForced shutdown");
            process::exit(0);
        }
    })
}

#[cfg(not(unix))]
pub fn listen_for_interrupt(handle: ShutdownHandle) -> Result<()> {
    use tokio::signal::ctrl_c;

    spawn(signal_runtime()?, async move {
        if let Err(error) = ctrl_c().await {
            println!("Could not listen for Ctrl+C: {error}");
            return;
        }

        handle.trigger();

        if ctrl_c().await.is_ok() {
            println!("\nForced shutdown");
            process::exit(0);
        }
    })
}

fn signal_runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Could not create signal runtime")
}

fn spawn<F>(runtime: Runtime, listener: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    thread::Builder::new()
        .name("interrupt".into())
        .spawn(move || runtime.block_on(listener))
        .context("Could not spawn interrupt listener")?;

    Ok(())
}
