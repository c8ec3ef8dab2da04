//! The control dialect: YAML with formula expressions and versioned type tags.
//!
//! ## Architecture
//!
//! The dialect is never parsed by hand. Formula lines and other values the
//! YAML parser would misread are escaped first, the structural codec does the
//! actual parsing, and a normalization pass classifies every value.
//!
//! ```text
//! ┌──────────────┐  escape   ┌────────────────┐  parse_tree  ┌──────────────┐
//! │ dialect text │ ────────▶ │  plain YAML    │ ───────────▶ │  YAML tree   │
//! └──────────────┘           └────────────────┘              └──────┬───────┘
//!        ▲                                                          │ normalize
//!        │ unescape          ┌────────────────┐  render_tree        ▼
//!        └────────────────── │  marked YAML   │ ◀─────────── ControlDocument
//!                            └────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use pacontrol::dialect::{parse_dialect, render_dialect};
//!
//! let doc = parse_dialect("- Button1:\n    Control: Button\n    Properties:\n      Text: =\"Go\"\n")?;
//! let text = render_dialect(&doc)?;
//! ```

mod codec;
mod document;
mod error;
pub mod escape;
pub mod samples;
mod scan;
mod structural;

pub use codec::{DialectCodec, format_control, parse_dialect, render_dialect};
pub use document::{ControlDocument, ControlNode};
pub use error::DialectError;
pub use scan::{ControlInfo, extract_control_info, extract_properties, validate};
pub use structural::{StructuralCodec, Yaml};
