//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, the depth target, and
//! growable vertex buffers.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// wgpu device, surface, queue and depth-target initialization.
pub mod render_context;
