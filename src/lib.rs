//! pathsplit splits compound SVG path data into the separate shapes it draws.
//!
//! A single `d` attribute often packs many contours: the letters of a logo, a row of icons, a
//! glyph with counters. [`decompose`] turns it into one path-data string per visual shape,
//! keeping every hole (the inside of an "O") together with the contour that encloses it.
//!
//! # Pipeline overview
//!
//! 1. **Lex**: path text -> command letters and numeric literals ([`lex`])
//! 2. **Interpret**: tokens -> moveto-delimited [`SubPath`]s with bounds, polygon and start
//!    point ([`collect_subpaths`])
//! 3. **Cluster**: subpaths ranked by bounding-box area, each joining the first larger shape
//!    that contains it ([`cluster_subpaths`])
//! 4. **Serialize**: each [`Cluster`] back to path data, reusing the original number text
//!
//! Around the engine sits a small SVG [`Document`] model (arena tree) with the editor-facing
//! operations built on top of it: [`Document::separate_compound_path`],
//! [`Document::smart_analyze`] and deterministic id allocation ([`IdAllocator`]).
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total**: the path engine never fails; input it cannot read comes back unchanged.
//! - **Deterministic**: identical input yields identical output, ids included.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod document;
mod foundation;
mod path;

pub use config::{AnalyzeOpts, DEFAULT_ID_TAGS};
pub use document::ids::{IdAllocator, next_id};
pub use document::tree::{Descendants, Document, Element, NodeId, NodeKind};
pub use document::xml::parse as parse_svg;
pub use foundation::core::{Bounds, Point, Rect, rect_area, rect_contains_rect};
pub use foundation::error::{SplitError, SplitResult};
pub use path::cluster::{Cluster, cluster_subpaths, point_in_polygon};
pub use path::decompose::{ClusterSummary, analyze, decompose, summarize};
pub use path::interp::{SubPath, collect_subpaths};
pub use path::lexer::{Command, CommandKind, PathError, Span, Token, TokenKind, lex};
