//! Single-operation entry points over an [`ObjectStorage`](crate::ObjectStorage).
//!
//! Each use case holds a shared backend and forwards its arguments and
//! result unchanged.

mod get_item;
mod get_temp_url;
mod remove_item;
mod set_item;

pub use get_item::GetItem;
pub use get_temp_url::GetTempUrl;
pub use remove_item::RemoveItem;
pub use set_item::SetItem;
