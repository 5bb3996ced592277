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

//! Particle-based animated entity with state-driven transitions.
//!
//! Animus animates a glowing "digital entity" built from thousands of soft
//! additive particles. The entity is always in one of three behavioral
//! states (resting, thinking, acting); switching states runs a timed, eased
//! transition during which every visual parameter blends between the two
//! states' values.
//!
//! # Key entry points
//!
//! - [`engine::EntityAnimator`] - owns the transition engine, camera and
//!   active particle form; driven by an external `tick(dt)`
//! - [`animation::TransitionEngine`] - the state machine and its eased
//!   progress
//! - [`form`] - the ring and cloud particle forms
//! - [`options::Options`] - TOML presets for every tunable
//! - [`render::RenderFrame`] - draw data handed to a rendering backend
//!
//! # Architecture
//!
//! Each tick advances the animation clock, then the transition engine, then
//! the camera, and finally the active form, which reads a copy of the
//! engine snapshot. Nothing runs in the background. A drawing backend
//! consumes [`render::RenderFrame`] batches as plain `Pod` instance data.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod form;
pub mod input;
pub mod options;
pub mod render;
pub mod util;

pub use animation::{EngineSnapshot, EntityState, TransitionEngine};
pub use engine::{EntityAnimator, EntityCommand};
pub use error::AnimusError;
pub use form::FormKind;
pub use options::Options;
