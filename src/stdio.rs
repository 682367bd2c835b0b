use std::io::{self, Read, Write};
use std::os::fd::AsRawFd;

/// Unbuffered reader issuing one `read(2)` per call on `F`'s descriptor.
pub struct FdReader<F>(F);

/// Unbuffered writer issuing one `write(2)` per call on `F`'s descriptor.
pub struct FdWriter<F>(F);

pub type Stdin = FdReader<io::Stdin>;
pub type Stdout = FdWriter<io::Stdout>;

impl FdReader<io::Stdin> {
    pub fn stdin() -> Self {
        Self(io::stdin())
    }
}

impl FdWriter<io::Stdout> {
    pub fn stdout() -> Self {
        Self(io::stdout())
    }
}

impl<F> FdReader<F>
where
    F: AsRawFd,
{
    pub fn new(fd: F) -> Self {
        Self(fd)
    }

    pub fn get_ref(&self) -> &F {
        &self.0
    }

    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F> FdWriter<F>
where
    F: AsRawFd,
{
    pub fn new(fd: F) -> Self {
        Self(fd)
    }

    pub fn get_ref(&self) -> &F {
        &self.0
    }

    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F> Read for FdReader<F>
where
    F: AsRawFd,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        unsafe {
            let n = libc::read(self.0.as_raw_fd(), buf.as_mut_ptr().cast(), buf.len());
            if n >= 0 {
                Ok(n as _)
            } else {
                Err(io::Error::last_os_error())
            }
        }
    }
}

impl<F> Write for FdWriter<F>
where
    F: AsRawFd,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        unsafe {
            let n = libc::write(self.0.as_raw_fd(), buf.as_ptr().cast(), buf.len());
            if n >= 0 {
                Ok(n as _)
            } else {
                Err(io::Error::last_os_error())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
