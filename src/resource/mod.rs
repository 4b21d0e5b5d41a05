//! Resource machinery shared by every collection
//!
//! - [`query`] - sort validation and canonical query-string encoding
//! - [`object`] - lazy attribute-map resource values
//! - [`manager`] - the generic CRUD engine managers delegate to
//! - [`find`] - name-or-id resolution over three lookup strategies

pub mod find;
pub mod manager;
pub mod object;
pub mod query;

pub use find::{find_resource, Findable};
pub use manager::ResourceManager;
pub use object::{Resource, ResourceKind};
pub use query::{ListParams, SortEncoder};
