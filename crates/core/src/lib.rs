//! Core layout algorithms for comet: assigns scrolling comments to
//! collision-free display lanes and rewrites trajectories that would
//! cross fixed overlay regions.
//!
//! The pipeline is a pure transformation: an arrival-ordered sequence of
//! [`Comment`](comet_protocol::Comment)s plus a list of
//! [`OverlayInterval`](comet_protocol::OverlayInterval)s goes in, an
//! ordered list of positioned
//! [`ScheduledSegment`](comet_protocol::ScheduledSegment)s comes out.
//! Same input and configuration always produce bit-identical output.

pub mod layout;
pub mod stats;

pub use layout::{LayoutError, LayoutOutput, LayoutWarning, layout};
