//! Core types for Shopmark.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod discount;
pub mod product;
pub mod session;
pub mod status;

pub use discount::DiscountInfo;
pub use product::NormalizedProduct;
pub use session::{SessionError, ShopSession};
pub use status::ProductStatus;
