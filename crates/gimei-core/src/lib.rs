//! Value model for gimei.
//!
//! Defines the four-script lexical item, the sex tag, the shared rendering
//! contract, and the composite records (names, addresses, postal codes) that
//! the generator and finder hand out.

pub mod error;
pub mod item;
pub mod model;
pub mod render;
pub mod sex;

pub use error::{Error, Result};
pub use item::{Item, Script};
pub use model::{Address, Name, PostalCode};
pub use render::Renderable;
pub use sex::Sex;
