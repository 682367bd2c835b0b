mod buf;
mod int;
mod io;
mod sort;
#[cfg(all(unix, feature = "stdio"))]
mod stdio;

pub use int::Integer;
#[cfg(all(unix, feature = "stdio"))]
pub use io::stdio;
pub use io::FastIo;
pub use sort::{sort, sort_by};
#[cfg(all(unix, feature = "stdio"))]
pub use stdio::{FdReader, FdWriter, Stdin, Stdout};

/// Default capacity of each of the input and output buffers.
pub const BUF_SIZE: usize = 1 << 16;
