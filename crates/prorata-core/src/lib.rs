//! Core types and traits for the prorata apportionment engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the width abstraction over {native, double-width} integer pairs, the
//! exact multiply-divide primitive, the error taxonomy, and the
//! [`RowSource`] trait through which groups of rows are supplied.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod source;
pub mod width;

pub use error::SplitError;
pub use id::GroupId;
pub use source::RowSource;
pub use width::{DivPair, SplitWidth};
