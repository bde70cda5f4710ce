pub mod claim;
pub mod note;

pub use claim::{Claim, ClaimsFile};
pub use note::{Note, NotesFile};
