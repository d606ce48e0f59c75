//! I/O module
//!
//! Handles encodings, fixed-width line layout and delimited output.
//!
//! # Components
//!
//! - `encoding` - Text encoding resolution, strict decode and encode
//! - `fixed_width` - Fixed-width layout, line classification and slicing
//! - `delimited` - CSV writer that re-encodes each row

pub mod delimited;
pub mod encoding;
pub mod fixed_width;

pub use delimited::DelimitedWriter;
pub use encoding::TextCodec;
pub use fixed_width::{classify_line, layout_line, pad_field, slice_fields, LineKind};
