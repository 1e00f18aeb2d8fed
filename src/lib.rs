// Rewrite personal-data form steps of a documents file into input-mode steps.
//
// Load -> convert in memory -> save, see `convert_steps` for the binary.

pub mod convert;
pub mod document;
pub mod keywords;
pub mod report;
pub mod store;

pub use convert::{convert_documents, convert_step, is_personal_data_step};
pub use document::{Document, Field, Step};
pub use keywords::Keywords;
pub use report::{ConversionReport, DocumentReport};
pub use store::{load_documents, save_documents};
