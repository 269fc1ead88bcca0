//! Declared and installed Python packages.
//!
//! # Modules
//!
//! - [`manifest`] - Requirements manifest parsing
//! - [`installed`] - Listing the distributions installed in an environment
//! - [`layout`] - Where interpreters and site-packages live inside a venv
//! - [`name`] - Distribution-name normalization

pub mod installed;
pub mod layout;
pub mod manifest;
pub mod name;

pub use installed::{
    inspector_for, InspectorKind, InstalledPackages, PackageInspector, PipInspector,
    SitePackagesInspector,
};
pub use manifest::{Manifest, Requirement, SkipReason, SkippedLine};
pub use name::normalize;
