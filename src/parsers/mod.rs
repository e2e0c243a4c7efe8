//! Tree-sitter parsers for locating declarations in source code
//!
//! Only C++ is supported: the structural extractor uses it to find a
//! scoped enum by name without relying on literal text layout.

pub mod cpp;

pub use cpp::find_scoped_enum;
