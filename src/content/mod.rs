//! Content records: the generic stored record, the typed site entities and
//! the collection they live in.

mod entities;
mod kind;
mod lenient;
mod record;

pub use entities::{Product, ResearchArticle, Sanitize, Service, TeamMember};
pub use kind::ContentKind;
pub use lenient::order_from_value;
pub use record::{OrderedCore, Record};

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
