// ABOUTME: Storage backends for the coach collaborators
// ABOUTME: Currently a single in-memory backend shared by the CLI and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

/// In-memory store
pub mod memory;

pub use memory::InMemoryStore;
