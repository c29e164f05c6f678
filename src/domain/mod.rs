//! Domain Layer
//!
//! The core of LookAtMe - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Asset)
//! - `value_objects/` - Immutable value types (AssetKind, AssetIdentifier, LoopMode)
//! - `services/` - Catalog, appearance plan, gesture machine, deferred timer
//! - `policies/` - Business rules (IntegrityPolicy)
//! - `ports/` - Interface definitions for infrastructure and the host platform
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Single context** - Nothing here spawns threads or fires on its own
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
