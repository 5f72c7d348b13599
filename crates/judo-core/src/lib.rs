// ABOUTME: Core types and constants for the judo training coach
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

#![deny(unsafe_code)]

//! # Judo Core
//!
//! Foundation crate providing shared types and constants for the judo
//! training coach. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Domain constants (field identifiers, labels, limits)
//! - **models**: Physical tests, post-training logs, athletes

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (physical tests, post-training logs, athletes)
pub mod models;
