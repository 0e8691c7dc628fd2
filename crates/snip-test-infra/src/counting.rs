use async_trait::async_trait;
use snip_core::error::Result;
use snip_core::{KeyValueStore, ReadStore};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A store decorator that counts the operations passing through it.
///
/// Lets tests assert how many reads and writes a service performed
/// without depending on a particular backend.
#[derive(Debug, Default)]
pub struct CountingStore<S> {
    inner: S,
    gets: AtomicUsize,
    exists: AtomicUsize,
    puts: AtomicUsize,
}

impl<S> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            gets: AtomicUsize::new(0),
            exists: AtomicUsize::new(0),
            puts: AtomicUsize::new(0),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn exists_checks(&self) -> usize {
        self.exists.load(Ordering::SeqCst)
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    /// Total number of reads, `get` and `exists` combined.
    pub fn reads(&self) -> usize {
        self.gets() + self.exists_checks()
    }
}

#[async_trait]
impl<S: ReadStore> ReadStore for CountingStore<S> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        self.exists.fetch_add(1, Ordering::SeqCst);
        self.inner.exists(key).await
    }
}

#[async_trait]
impl<S: KeyValueStore> KeyValueStore for CountingStore<S> {
    async fn put(&self, key: &str, value: String) -> Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(key, value).await
    }
}
