use bytes::buf::UninitSlice;
use std::io::{self, Read, Write};

// d0(consumed): ..pos
// d1(filled): pos..len
// d2(unfilled): len..
pub(crate) struct Buf {
    data: Box<[u8]>,
    pos: usize,
    len: usize,
}

impl Buf {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "buffer capacity must be non-zero");
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            pos: 0,
            len: 0,
        }
    }

    pub(crate) fn filled(&self) -> &[u8] {
        &self.data[self.pos..self.len]
    }

    pub(crate) fn unfilled_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.len..]
    }

    pub(crate) fn consume(&mut self, amt: usize) {
        assert!(amt <= self.len());
        self.pos += amt;
    }

    pub(crate) fn commit(&mut self, n: usize) {
        assert!(n <= self.data.len() - self.len);
        self.len += n;
    }

    pub(crate) fn clear(&mut self) {
        self.pos = 0;
        self.len = 0;
    }

    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pos == self.len
    }

    pub(crate) fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.len - self.pos
    }

    /// Discards the current contents and reads at most one chunk from `reader`.
    pub(crate) fn fill_from<R>(&mut self, reader: &mut R) -> io::Result<usize>
    where
        R: Read + ?Sized,
    {
        self.clear();
        loop {
            match reader.read(&mut self.data) {
                Ok(n) => {
                    self.commit(n);
                    break Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => (),
                Err(e) => break Err(e),
            }
        }
    }

    /// Writes every filled byte to `writer`, then resets both cursors.
    ///
    /// On error the unwritten tail stays buffered.
    pub(crate) fn drain_to<W>(&mut self, writer: &mut W) -> io::Result<usize>
    where
        W: Write + ?Sized,
    {
        let total = self.len();
        while !self.is_empty() {
            match writer.write(self.filled()) {
                Ok(0) => return Err(io::ErrorKind::WriteZero.into()),
                Ok(n) => self.consume(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => (),
                Err(e) => return Err(e),
            }
        }
        self.clear();
        Ok(total)
    }
}

impl bytes::Buf for Buf {
    fn remaining(&self) -> usize {
        self.len()
    }

    fn chunk(&self) -> &[u8] {
        self.filled()
    }

    fn advance(&mut self, cnt: usize) {
        self.consume(cnt)
    }
}

unsafe impl bytes::BufMut for Buf {
    fn remaining_mut(&self) -> usize {
        self.capacity() - self.len
    }

    unsafe fn advance_mut(&mut self, cnt: usize) {
        self.commit(cnt)
    }

    fn chunk_mut(&mut self) -> &mut UninitSlice {
        UninitSlice::new(self.unfilled_mut())
    }
}
