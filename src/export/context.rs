//! Mutable state threaded through one export pass.

use super::citations::CitationTracker;

/// Running figure number.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FigureCounter(usize);

impl FigureCounter {
    /// Advance and return the new figure number (1-based).
    pub fn next(&mut self) -> usize {
        self.0 += 1;
        self.0
    }

    /// Figures numbered so far.
    pub fn count(&self) -> usize {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Per-pass counters, reset at the start of every export.
#[derive(Debug, Default)]
pub struct ExportContext {
    pub citations: CitationTracker,
    pub figures: FigureCounter,
}

impl ExportContext {
    pub fn reset(&mut self) {
        self.citations.clear();
        self.figures.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_counter() {
        let mut figures = FigureCounter::default();
        assert_eq!(figures.count(), 0);
        assert_eq!(figures.next(), 1);
        assert_eq!(figures.next(), 2);
        assert_eq!(figures.count(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut ctx = ExportContext::default();
        ctx.figures.next();
        ctx.citations.register_occurrence("a");
        ctx.reset();
        assert_eq!(ctx.figures.count(), 0);
        assert!(ctx.citations.is_empty());
    }
}
