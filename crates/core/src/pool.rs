use common::types::Record;

/// Buffer length used by [`RecordPool::default`].
pub const DEFAULT_BUFFER_LEN: usize = 1024;

/// Caller-owned pool of fixed-length record buffers.
///
/// There is no global instance: whoever needs pooling creates a pool and
/// passes it around by `&mut`. Buffers come back zeroed from [`acquire`].
///
/// [`acquire`]: RecordPool::acquire
#[derive(Debug)]
pub struct RecordPool {
    buffer_len: usize,
    idle: Vec<Vec<Record>>,
    allocated: usize,
}

impl RecordPool {
    pub fn new(buffer_len: usize) -> Self {
        RecordPool {
            buffer_len,
            idle: Vec::new(),
            allocated: 0,
        }
    }

    /// Takes an idle buffer if one exists, otherwise allocates a new one.
    pub fn acquire(&mut self) -> Vec<Record> {
        match self.idle.pop() {
            Some(mut buffer) => {
                buffer.fill(Record::default());
                buffer
            }
            None => {
                self.allocated += 1;
                vec![Record::default(); self.buffer_len]
            }
        }
    }

    /// Returns a buffer to the pool.
    ///
    /// Buffers whose length no longer matches the pool's are dropped and
    /// `false` is returned.
    pub fn release(&mut self, buffer: Vec<Record>) -> bool {
        if buffer.len() != self.buffer_len {
            return false;
        }
        self.idle.push(buffer);
        true
    }

    pub fn buffer_len(&self) -> usize {
        self.buffer_len
    }

    /// Number of buffers waiting to be reused.
    pub fn idle(&self) -> usize {
        self.idle.len()
    }

    /// Number of buffers this pool has ever allocated.
    pub fn allocated(&self) -> usize {
        self.allocated
    }
}

impl Default for RecordPool {
    fn default() -> Self {
        RecordPool::new(DEFAULT_BUFFER_LEN)
    }
}
