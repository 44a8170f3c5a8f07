//! # Headline Core
//!
//! Style-resolution and text-segmentation engine for styled headlines. Takes
//! a declarative [`spec::StyleSpec`] plus named sub-ranges of the text and
//! produces a deterministic rendering plan: disjoint text runs with segment
//! attribution, compiled visual property sets, and per-letter animation
//! schedules, plus exporters for data-document, stylesheet, and standalone
//! page forms.
//!
//! ## Design
//!
//! - **Pure and synchronous**: every resolution/compilation function takes
//!   an immutable spec snapshot and returns a fresh result. The host owns
//!   all mutation (see the `headline-editor` crate).
//! - **Zero-copy runs**: [`resolve::TextRun`] borrows from the spec text.
//! - **Never fatal**: segment ranges clamp instead of panicking, and the
//!   single external boundary (clipboard) reports failure as a boolean.
//!
//! ## Quick Start
//!
//! ```rust
//! use headline_core::export::{export, ExportFormat};
//! use headline_core::resolve::resolve;
//! use headline_core::spec::{SegmentId, SegmentStyle, StyleSpec};
//!
//! let mut spec = StyleSpec::default();
//! spec.text = "Hello World".to_string();
//! spec.segments.push(SegmentStyle::new(SegmentId::new(0), 0, 5));
//!
//! let runs = resolve(&spec.text, &spec.segments);
//! assert_eq!(runs.len(), 2);
//!
//! let css = export(&spec, ExportFormat::Css)?;
//! assert_eq!(css.file_name, "headline-style.css");
//! # Ok::<(), headline_core::utils::CoreError>(())
//! ```

#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod compile;
pub mod export;
pub mod plan;
pub mod resolve;
pub mod spec;
pub mod utils;

pub use compile::{compile_global, compile_segment, PropertySet};
pub use export::{export, ExportFormat, ExportPayload};
pub use plan::{plan_for_runs, plan_letter_delays};
pub use resolve::{resolve, TextRun};
pub use spec::{
    AnimationKind, AnimationPattern, EffectLevel, GradientDirection, SegmentId, SegmentStyle,
    StyleSpec,
};
pub use utils::{CoreError, Result};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
