//! Stream selection.
//!
//! Centralizes the rule for picking which of a video's streams to download,
//! so the GUI backend, the CLI `streams` listing and the orchestrator can
//! never disagree.
//!
//! # Selection Rules
//!
//! 1. Keep candidates whose format equals the target and whose resolution is
//!    at most the bound (inclusive).
//! 2. Among survivors pick the highest resolution.
//! 3. Ties go to the candidate that appears first in the input.
//!
//! An empty result is not an error here; callers report it as "no suitable
//! format" and skip the download.

use crate::domain::{StreamCriteria, StreamDescriptor, VideoFormat};

/// Pick the best stream for `target_format` no taller than `max_resolution`.
pub fn select_best(
    candidates: &[StreamDescriptor],
    target_format: VideoFormat,
    max_resolution: u32,
) -> Option<&StreamDescriptor> {
    select_with(candidates, &StreamCriteria::new(target_format, max_resolution))
}

/// Same rule as [`select_best`], driven by a [`StreamCriteria`].
pub fn select_with<'a>(
    candidates: &'a [StreamDescriptor],
    criteria: &StreamCriteria,
) -> Option<&'a StreamDescriptor> {
    // Iterator::max_by_key keeps the last of equal maxima; we want the first.
    candidates
        .iter()
        .filter(|stream| stream.matches(criteria))
        .fold(None, |best: Option<&StreamDescriptor>, stream| match best {
            Some(current) if current.resolution >= stream.resolution => Some(current),
            _ => Some(stream),
        })
}

/// Index of the stream [`select_with`] would pick, for listings that mark it.
pub fn selected_index(candidates: &[StreamDescriptor], criteria: &StreamCriteria) -> Option<usize> {
    let chosen = select_with(candidates, criteria)?;
    candidates
        .iter()
        .position(|stream| std::ptr::eq(stream, chosen))
}
