//! Core text-model primitives for Tessera: the virtual documents handed to
//! embedded language services, line/offset conversion between their
//! coordinate spaces, and the template-context seam that maps embedded
//! positions back into host-file offsets.

#![forbid(unsafe_code)]

pub mod context;
pub mod document;
pub mod text;

pub use context::{TemplateContext, TemplateRegion};
pub use document::TextDocument;
pub use text::LineIndex;
