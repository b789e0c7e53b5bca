//! News content.
//!
//! This module provides:
//! - NewsBlock: the tagged block model and its tolerant decoder
//! - BlockAction: navigation actions carried by blocks
//! - Category: feed categories
//! - NewsStore: the in-memory repository with pagination and search
//! - seed: built-in data used when no seed file is configured

pub mod actions;
pub mod blocks;
pub mod category;
pub mod seed;
pub mod store;

pub use actions::{BlockAction, BlockActionType};
pub use blocks::{NewsBlock, PostBlock, decode_blocks};
pub use category::{Category, UnknownCategory};
pub use store::{NewsSeed, NewsStore, paginate};
