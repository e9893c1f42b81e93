use bytes::{Buf, Bytes};

/// Invalid cursor placement on a [`ByteBuffer`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("limit {limit} exceeds capacity {capacity}")]
    LimitOutOfBounds { limit: usize, capacity: usize },

    #[error("position {position} exceeds limit {limit}")]
    PositionOutOfBounds { position: usize, limit: usize },
}

/// Position-tracking window over a shared byte region.
///
/// The region is reference-counted and never modified through the handle.
/// Reading (via [`Buf`]) only moves this handle's cursor: a clone gets its
/// own cursor over the same region.
///
/// Invariant: `position <= limit <= capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    region: Bytes,
    position: usize,
    limit: usize,
}

impl ByteBuffer {
    /// Handle over the whole region: position 0, limit = capacity.
    pub fn wrap(region: impl Into<Bytes>) -> Self {
        let region = region.into();
        let limit = region.len();
        Self { region, position: 0, limit }
    }

    /// Handle over `region[position..limit]`.
    pub fn with_window(
        region: impl Into<Bytes>,
        position: usize,
        limit: usize,
    ) -> Result<Self, BufferError> {
        let mut buf = Self::wrap(region);
        buf.set_limit(limit)?;
        buf.set_position(position)?;
        Ok(buf)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Length of the underlying region.
    pub fn capacity(&self) -> usize {
        self.region.len()
    }

    pub fn set_position(&mut self, position: usize) -> Result<(), BufferError> {
        if position > self.limit {
            return Err(BufferError::PositionOutOfBounds { position, limit: self.limit });
        }
        self.position = position;
        Ok(())
    }

    /// Move the limit. A position beyond the new limit is pulled back to it.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), BufferError> {
        if limit > self.capacity() {
            return Err(BufferError::LimitOutOfBounds { limit, capacity: self.capacity() });
        }
        self.limit = limit;
        self.position = self.position.min(limit);
        Ok(())
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// The shared region, regardless of the cursor.
    pub fn region(&self) -> &Bytes {
        &self.region
    }
}

impl Buf for ByteBuffer {
    fn remaining(&self) -> usize {
        self.limit - self.position
    }

    fn chunk(&self) -> &[u8] {
        &self.region[self.position..self.limit]
    }

    fn advance(&mut self, cnt: usize) {
        assert!(
            cnt <= self.remaining(),
            "cannot advance past limit: {cnt} > {}",
            self.remaining()
        );
        self.position += cnt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_covers_whole_region() {
        let buf = ByteBuffer::wrap(vec![1u8, 2, 3, 4]);
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.limit(), 4);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.remaining(), 4);
        assert_eq!(buf.chunk(), &[1, 2, 3, 4]);
    }

    #[test]
    fn window_limits_remaining() {
        let buf = ByteBuffer::with_window(&b"header:body!"[..], 7, 11).unwrap();
        assert_eq!(buf.remaining(), 4);
        assert_eq!(buf.chunk(), b"body");
    }

    #[test]
    fn window_rejects_bad_bounds() {
        assert_eq!(
            ByteBuffer::with_window(vec![0u8; 4], 0, 5),
            Err(BufferError::LimitOutOfBounds { limit: 5, capacity: 4 })
        );
        assert_eq!(
            ByteBuffer::with_window(vec![0u8; 4], 3, 2),
            Err(BufferError::PositionOutOfBounds { position: 3, limit: 2 })
        );
    }

    #[test]
    fn set_limit_clamps_position() {
        let mut buf = ByteBuffer::with_window(vec![0u8; 8], 6, 8).unwrap();
        buf.set_limit(4).unwrap();
        assert_eq!(buf.position(), 4);
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn draining_leaves_region_and_clones_intact() {
        let mut buf = ByteBuffer::wrap(vec![10u8, 20, 30]);
        let other = buf.clone();

        let mut out = [0u8; 3];
        buf.copy_to_slice(&mut out);

        assert_eq!(out, [10, 20, 30]);
        assert_eq!(buf.remaining(), 0);
        assert_eq!(buf.region().as_ref(), &[10, 20, 30]);
        assert_eq!(other.remaining(), 3);

        buf.rewind();
        assert_eq!(buf.remaining(), 3);
    }

    #[test]
    #[should_panic(expected = "cannot advance past limit")]
    fn advance_past_limit_panics() {
        let mut buf = ByteBuffer::wrap(vec![1u8]);
        buf.advance(2);
    }
}
