//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

use std::io::{self, Write};

use zeroize::Zeroize;

pub use charset::{CharClasses, Charset};
pub use generate::{Password, feasible, generate, minimum_duplicate_limit};
pub use output::generate_batch;

const SECURE_BUF_CAPACITY: usize = 8 * 1024;

/// Buffered writer that wipes its buffer after every flush and on drop,
/// so passwords do not linger in a reused allocation.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(SECURE_BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > SECURE_BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= SECURE_BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
        let _ = self.inner.flush();
    }
}
