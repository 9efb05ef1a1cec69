//! Deterministic fixture-data generation for a content-management domain.
//!
//! This crate builds a fully connected graph of synthetic records: customers
//! owning projects, users, and groups; projects owning folder trees holding
//! assets and collections; users and groups cross-linked by membership.
//! Relationships are carried as lightweight `{id, type}` stubs, so the graph
//! serializes to flat, cycle-free JSON suitable for seeding databases or
//! driving integration tests.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Reproducible graph generation from a fixed RNG seed
//! - Per-entity constructors with field-level overrides
//! - Flat JSON projection with back-references omitted
//! - Atomic export of the whole graph to a seed file
//!
//! # Example
//!
//! ```
//! use dam_seeds::{RecordKind, SeedOptions, Seeds};
//!
//! let mut seeds = Seeds::with_seed(42, SeedOptions::default());
//! seeds.init();
//!
//! let customers = seeds.serialize(RecordKind::Customers).expect("serialize");
//!
//! assert_eq!(customers.len(), SeedOptions::default().customer_count);
//! ```

mod config;
mod error;
mod export;
pub mod export_cli;
mod generator;
mod helpers;
mod provider;
mod record;
mod serialize;
mod store;
mod words;

pub use config::{
    DEFAULT_CUSTOMER_COUNT, DEFAULT_MAX_ASSETS, DEFAULT_MAX_COLLECTIONS, DEFAULT_MAX_FOLDERS,
    DEFAULT_MAX_FOLDER_DEPTH, DEFAULT_MAX_PROJECTS, SeedOptions,
};
pub use error::ExportError;
pub use export::write_seed_document;
pub use generator::Seeds;
pub use helpers::{Helpers, NamePool};
pub use provider::RandomProvider;
pub use record::{
    Asset, AssetOverrides, Collection, CollectionOverrides, Customer, CustomerOverrides, Folder,
    FolderOverrides, Group, GroupOverrides, Project, ProjectOverrides, RecordKind, RecordRef,
    User, UserOverrides,
};
pub use serialize::{serialize_all, serialize_kind};
pub use store::RecordStore;
