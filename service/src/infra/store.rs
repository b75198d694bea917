//! In-memory [`Store`] of the session [`Record`].

use secrecy::ExposeSecret as _;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::{
    session::{Bearer, Snapshot},
    Record,
};

/// Storage of the session [`Record`] of the signed-in user.
///
/// Holds at most one [`Record`] at a time.
#[derive(Debug, Default)]
pub struct Store(Mutex<Option<Record>>);

impl Store {
    /// Locks this [`Store`] for exclusive access to its [`Record`].
    ///
    /// Any other access waits until the returned guard is dropped.
    pub async fn lock(&self) -> MutexGuard<'_, Option<Record>> {
        self.0.lock().await
    }

    /// Puts the provided [`Record`] into this [`Store`], returning the
    /// replaced one, if any.
    pub async fn replace(&self, record: Record) -> Option<Record> {
        self.lock().await.replace(record)
    }

    /// Removes the [`Record`] from this [`Store`], returning it, if any.
    pub async fn clear(&self) -> Option<Record> {
        self.lock().await.take()
    }

    /// Removes the stored [`Record`] if the backend rejected its own
    /// [`Bearer::Backend`], returning it.
    ///
    /// A [`Record`] signed in after the provided [`Bearer`] was resolved is
    /// kept, as well as a [`Record`] in fallback, whose provider token the
    /// backend never accepts.
    pub async fn revoke(&self, rejected: &Bearer) -> Option<Record> {
        let Bearer::Backend(rejected) = rejected else {
            return None;
        };
        let mut record = self.lock().await;
        let issued = match record.as_ref()?.bearer()? {
            Bearer::Backend(token) => token,
            Bearer::Provider(_) => return None,
        };
        (issued.expose_secret() == rejected.expose_secret())
            .then(|| record.take())
            .flatten()
    }

    /// Returns a [`Snapshot`] of the stored [`Record`], if any.
    pub async fn snapshot(&self) -> Option<Snapshot> {
        self.lock().await.as_ref().map(Record::snapshot)
    }
}
