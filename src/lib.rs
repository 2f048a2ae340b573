//! Image metadata block decoration.
//!
//! Converts `image-metadata` content blocks in an HTML document into
//! schema.org `ImageObject` JSON-LD published in the document `<head>`,
//! then removes each block's presentational container from the tree.
//!
//! Field entries are label/value rows; most values pass through as trimmed
//! text, `contentUrl` resolves to the canonical URL of the cell's image
//! (query string and fragment stripped), and `creator` / `copyrightHolder`
//! become nested `{"@type", "name"}` objects.
//!
//! ```
//! use image_ld::{DecorateOptions, Document, decorate};
//!
//! let html = r#"<html><head></head><body><main><div>
//!   <div class="image-metadata">
//!     <div><div>name</div><div>Sunset</div></div>
//!   </div>
//! </div></main></body></html>"#;
//!
//! let mut doc = Document::parse(html).unwrap();
//! let decorated = decorate(&mut doc, &DecorateOptions::default()).unwrap();
//! assert_eq!(decorated, 1);
//!
//! let rendered = doc.render();
//! assert!(rendered.contains("application/ld+json"));
//! assert!(!rendered.contains("image-metadata"));
//! ```

pub mod block;
pub mod config;
pub mod decorate;
pub mod dom;
pub mod error;
pub mod extract;
pub mod jsonld;
pub mod logger;
pub mod publish;
pub mod utils;

pub use config::{DecorateOptions, MalformedPolicy};
pub use decorate::{decorate, decorate_block};
pub use dom::{Document, Element, Node, NodePath, Text};
pub use error::DecorateError;
pub use publish::HeadSink;
