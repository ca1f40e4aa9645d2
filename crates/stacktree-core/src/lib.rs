//! Stacktree Core Types and Definitions
//!
//! This crate provides the foundational types shared by the template parser
//! and the renderers. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Elements**: Named, categorized template elements ([`element::Element`])
//! - **Graph**: The insertion-ordered dependency multigraph ([`graph::Graph`])
//! - **Filter**: Order-preserving classification of links by category ([`filter`])

pub mod element;
pub mod filter;
pub mod graph;
pub mod identifier;

pub use element::{Category, Element};
pub use graph::{DependencyGraph, Graph};
