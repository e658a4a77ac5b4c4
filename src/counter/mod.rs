//! Line classification used by the `tokount` helper.

mod comment;
mod sloc;

pub use comment::{BlockStart, CommentDetector};
pub use sloc::{LineCounter, LineStats};
