//! File I/O for lithophane generation.
//!
//! - **Images** are decoded with the `image` crate into a
//!   [`PixelField`](litho_types::PixelField) with samples in `[0, 1]`
//! - **STL** output in binary (default) or ASCII, one facet per triangle in
//!   mesh order, vertices as 32-bit floats
//!
//! # Example
//!
//! ```no_run
//! use litho_io::{load_image, save_stl};
//! use litho_types::TriangleMesh;
//!
//! let pixels = load_image("photo.png").unwrap();
//! let mesh = TriangleMesh::new();
//! save_stl(&mesh, "photo.stl", true).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod decode;
mod error;
mod stl;

pub use decode::{load_image, pixel_field_from_image};
pub use error::{IoError, IoResult};
pub use stl::{load_stl_binary, read_stl_binary, save_stl, write_stl_ascii, write_stl_binary};
