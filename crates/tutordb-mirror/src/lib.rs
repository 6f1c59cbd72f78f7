//! Typed mirror of the tutoring database.
//!
//! Tables live under [`public`] (re-exported here, since `public` is the
//! default schema) and the GraphQL gateway under [`graphql_public`]:
//!
//! ```ignore
//! use tutordb::{Tables, TablesInsert};
//! use tutordb_mirror::answers;
//!
//! let insert: TablesInsert<answers::Row> = answers::Insert {
//!     answer: "42".to_string(),
//!     correct: true,
//!     id: None,
//!     question_id: 7,
//!     quiz_id: 1,
//!     timestamp: None,
//!     user_id: 3,
//! };
//! ```
//!
//! Binaries that only use the catalog must call [`ensure_linked`] before
//! `tutordb::Catalog::collect()`, or the linker may drop the registrations.

pub mod graphql_public;
pub mod public;

pub use public::*;

/// Force this crate's registrations into the final binary.
#[inline(never)]
pub fn ensure_linked() {
    std::hint::black_box(());
}
