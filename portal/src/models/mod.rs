pub mod customer;
pub mod field;

pub use customer::{CustomerDraft, CustomerRecord, CustomerType, DocumentRef, FieldKindError};
pub use field::{Field, FieldSpec, InputKind, Section};
