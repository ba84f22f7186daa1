use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Orbit, Rocket};
use tokio::sync::watch;

/// Creates a fairing that publishes the port Rocket ends up listening on,
/// together with the handle used to wait for it.
///
/// With a configured port of `0` the OS picks the port, so the only way to
/// learn it is after liftoff.
pub fn channel() -> (PortReporter, BoundPort) {
    let (tx, rx) = watch::channel(None);
    (PortReporter { tx }, BoundPort { rx })
}

pub struct BoundPort {
    rx: watch::Receiver<Option<u16>>,
}

impl BoundPort {
    /// Waits until the server has lifted off. Returns `None` if the server
    /// was dropped before it ever bound a socket.
    pub async fn get(&mut self) -> Option<u16> {
        loop {
            let current = *self.rx.borrow();
            if current.is_some() {
                return current;
            }
            if self.rx.changed().await.is_err() {
                return None;
            }
        }
    }
}

pub struct PortReporter {
    tx: watch::Sender<Option<u16>>,
}

#[rocket::async_trait]
impl Fairing for PortReporter {
    fn info(&self) -> Info {
        Info {
            name: "Bound Port Reporter",
            kind: Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let port = rocket.config().port;
        tracing::info!(port, "Server is listening");
        // Nobody waiting on the port is fine.
        let _ = self.tx.send(Some(port));
    }
}
