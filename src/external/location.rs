use async_channel::{Receiver, Sender};
use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};

use crate::{
    entities::Coordinates,
    error::{location_unavailable_error, Error},
};

/// Device positioning. Callers await `check_availability` before subscribing.
#[async_trait]
pub trait LocationSource {
    async fn check_availability(&self) -> Result<(), Error>;

    fn updates(&self) -> BoxStream<'static, Coordinates>;
}

/// Location fixes pushed in by the device shell.
///
/// Receivers share one queue, so every fix is delivered to exactly one
/// `updates()` stream.
#[derive(Clone, Debug)]
pub struct LocationFeed {
    sender: Sender<Coordinates>,
    receiver: Receiver<Coordinates>,
}

impl Default for LocationFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationFeed {
    pub fn new() -> Self {
        let (sender, receiver) = async_channel::unbounded();

        Self { sender, receiver }
    }

    #[tracing::instrument(skip(self))]
    pub async fn push(&self, coordinates: Coordinates) -> Result<(), Error> {
        self.sender
            .send(coordinates)
            .await
            .map_err(|_| location_unavailable_error())
    }

    /// Marks the source as unavailable (permission revoked, service off).
    pub fn close(&self) {
        self.sender.close();
    }
}

#[async_trait]
impl LocationSource for LocationFeed {
    async fn check_availability(&self) -> Result<(), Error> {
        if self.sender.is_closed() {
            return Err(location_unavailable_error());
        }

        Ok(())
    }

    fn updates(&self) -> BoxStream<'static, Coordinates> {
        self.receiver.clone().boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn delivers_pushed_fixes_in_order() {
        let feed = LocationFeed::new();
        let mut updates = feed.updates();

        assert_ok!(feed.push(Coordinates::new(1.0, 2.0)).await);
        assert_ok!(feed.push(Coordinates::new(3.0, 4.0)).await);

        assert_eq!(updates.next().await, Some(Coordinates::new(1.0, 2.0)));
        assert_eq!(updates.next().await, Some(Coordinates::new(3.0, 4.0)));
    }

    #[tokio::test]
    async fn closed_feed_is_unavailable() {
        let feed = LocationFeed::new();
        assert_ok!(feed.check_availability().await);

        feed.close();

        assert_err!(feed.check_availability().await);
        assert_err!(feed.push(Coordinates::new(1.0, 2.0)).await);
    }
}
