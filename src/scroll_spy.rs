use crate::portfolio::Section;

/// How far below the top of the viewport the probe line sits.
pub const SCROLL_OFFSET: f64 = 200.0;

/// Layout of one tracked section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

/// Picks the section under the probe line for a given vertical scroll offset.
///
/// `bounds` must be in document order. Each section owns the half-open range
/// `[top, top + height)`, cut short at the next section's `top`, so at most one
/// section can match even when live layout produces overlapping boxes.
/// Returns `None` when the probe falls outside every range; callers keep
/// whatever section was active before.
pub fn active_section(bounds: &[SectionBounds], scroll_y: f64) -> Option<Section> {
    let probe = scroll_y + SCROLL_OFFSET;
    bounds.iter().enumerate().find_map(|(i, b)| {
        let mut end = b.top + b.height;
        if let Some(next) = bounds.get(i + 1) {
            end = end.min(next.top);
        }
        (b.top <= probe && probe < end).then_some(b.section)
    })
}
