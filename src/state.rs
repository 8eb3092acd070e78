//! Estado de snapshot compartido
//!
//! Este módulo guarda el snapshot enriquecido más reciente de una pantalla.
//! No hay cancelación de pasadas en vuelo: cada pasada recibe un sello de
//! secuencia al empezar y el commit rechaza sellos viejos, de modo que una
//! respuesta llegada fuera de orden nunca pisa un snapshot más nuevo.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

/// Snapshot más reciente de tipo `T` con guardia de secuencia
#[derive(Debug, Clone)]
pub struct SnapshotState<T> {
    inner: Arc<Inner<T>>,
}

#[derive(Debug)]
struct Inner<T> {
    sequence: AtomicU64,
    committed: AtomicU64,
    snapshot: RwLock<Option<T>>,
}

impl<T: Clone> SnapshotState<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                sequence: AtomicU64::new(0),
                committed: AtomicU64::new(0),
                snapshot: RwLock::new(None),
            }),
        }
    }

    /// Empezar una pasada: devuelve el sello que debe acompañar al commit
    pub fn begin_pass(&self) -> u64 {
        self.inner.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publicar el resultado de una pasada. Devuelve false (y descarta el
    /// valor) si una pasada más nueva ya publicó la suya.
    pub async fn commit(&self, stamp: u64, value: T) -> bool {
        let mut snapshot = self.inner.snapshot.write().await;
        if stamp <= self.inner.committed.load(Ordering::SeqCst) {
            return false;
        }
        self.inner.committed.store(stamp, Ordering::SeqCst);
        *snapshot = Some(value);
        true
    }

    /// Snapshot publicado más reciente, si existe
    pub async fn current(&self) -> Option<T> {
        self.inner.snapshot.read().await.clone()
    }
}

impl<T: Clone> Default for SnapshotState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stale_commit_is_rejected() {
        let state: SnapshotState<Vec<i64>> = SnapshotState::new();

        let old_pass = state.begin_pass();
        let new_pass = state.begin_pass();

        // La pasada nueva termina primero
        assert!(state.commit(new_pass, vec![1, 2, 3]).await);
        // La vieja llega tarde y se descarta
        assert!(!state.commit(old_pass, vec![9]).await);

        assert_eq!(state.current().await, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_sequential_passes_replace_snapshot() {
        let state: SnapshotState<&'static str> = SnapshotState::new();
        assert_eq!(state.current().await, None);

        let first = state.begin_pass();
        assert!(state.commit(first, "primera").await);

        let second = state.begin_pass();
        assert!(state.commit(second, "segunda").await);

        assert_eq!(state.current().await, Some("segunda"));
    }
}
