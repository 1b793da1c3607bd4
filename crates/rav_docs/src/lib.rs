// Branded document generation (DOCX, PPTX, Markdown)

pub mod brand;
pub mod docx;
pub mod markdown;
pub mod model;
pub mod pptx;

pub use docx::{BodyStyle, BrandedDocument, Logo};
pub use model::DocumentOutline;
pub use pptx::{Deck, Slide};
