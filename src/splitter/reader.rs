use std::io::{self, Read};

/// A contiguous slice of the input, in stream order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Zero-based sequence index
    pub index: usize,
    /// Byte offset of the first byte in the input
    pub offset: u64,
    /// Raw bytes, never empty
    pub data: Vec<u8>,
}

/// Reads an input stream as fixed-size chunks.
///
/// Every chunk except the last holds exactly `chunk_size` bytes; short reads
/// from the underlying reader are retried until the chunk is full or the
/// stream ends. Iteration stops after the first I/O error.
pub struct ChunkReader<R> {
    inner: R,
    chunk_size: usize,
    next_index: usize,
    offset: u64,
    done: bool,
}

impl<R: Read> ChunkReader<R> {
    pub fn new(inner: R, chunk_size: usize) -> Self {
        Self {
            inner,
            chunk_size,
            next_index: 0,
            offset: 0,
            done: chunk_size == 0,
        }
    }

    /// Total bytes handed out so far
    pub fn bytes_read(&self) -> u64 {
        self.offset
    }

    fn read_chunk(&mut self) -> io::Result<Option<Chunk>> {
        let mut data = Vec::with_capacity(self.chunk_size);
        (&mut self.inner)
            .take(self.chunk_size as u64)
            .read_to_end(&mut data)?;

        if data.is_empty() {
            return Ok(None);
        }

        let chunk = Chunk {
            index: self.next_index,
            offset: self.offset,
            data,
        };
        self.next_index += 1;
        self.offset += chunk.data.len() as u64;
        Ok(Some(chunk))
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = io::Result<Chunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_chunk() {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
