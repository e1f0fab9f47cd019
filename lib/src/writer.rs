use crate::core::Hashtags;

/// Destination of the final hashtags. Implementations serialize the value
/// as given, ordering included.
pub trait HashtagWriter {
    type Error;

    fn write(&mut self, hashtags: &Hashtags) -> Result<(), Self::Error>;
}

/// Keeps the written hashtags in memory.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    inner: Vec<Hashtags>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Hashtags> {
        self.inner.last()
    }

    pub fn into_inner(self) -> Vec<Hashtags> {
        self.inner
    }
}

impl HashtagWriter for MemoryWriter {
    type Error = std::convert::Infallible;

    fn write(&mut self, hashtags: &Hashtags) -> Result<(), Self::Error> {
        self.inner.push(hashtags.clone());
        Ok(())
    }
}
