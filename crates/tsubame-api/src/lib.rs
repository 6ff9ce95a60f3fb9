//! Client for the AniList GraphQL media catalog.
//!
//! Each lookup issues one unauthenticated POST against the public endpoint
//! and reshapes the nested response into a flat record.

pub mod anilist;

pub use anilist::{AniListClient, AniListError};
