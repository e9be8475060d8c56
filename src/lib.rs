// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive viewer for a furnished office room built on wgpu.
//!
//! The room can be shown as a top-down floor plan, rasterised pixel by
//! pixel with Bresenham lines and midpoint circles, or walked through in
//! first person with keyboard movement and mouse-look. A hinged door and a
//! ceiling fan animate on a fixed tick.
//!
//! # Key entry points
//!
//! - [`engine::Session`] - window-independent input, camera and animation
//!   state
//! - [`engine::OfficeEngine`] - a session bound to a wgpu surface
//! - [`options::Options`] - runtime configuration (camera, animation,
//!   display, key bindings)
//! - [`scene`] - the floor plan and the room transform tree
//!
//! # Architecture
//!
//! Everything runs on the event-loop thread. Raw window events become
//! [`input::InputEvent`]s, the [`input::InputProcessor`] maps them to
//! [`engine::Command`]s, and the session applies each command at once.
//! Fixed ticks advance the fan, the door and (in the walkthrough) the
//! camera; each redraw renders the [`renderer::Frame`] derived from the
//! post-tick state.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{Command, Control, OfficeEngine, Session};
pub use error::DesignerError;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
