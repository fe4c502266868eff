//! Terminal viewport discovery.

/// Source of the terminal's visible grid size.
pub trait Viewport {
    /// `(columns, rows)`, or `None` when the size cannot be determined
    /// (e.g. output is piped).
    fn size(&self) -> Option<(u16, u16)>;
}

/// Queries the controlling terminal through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalViewport;

impl Viewport for TerminalViewport {
    fn size(&self) -> Option<(u16, u16)> {
        match crossterm::terminal::size() {
            Ok((cols, rows)) if cols > 0 && rows > 0 => Some((cols, rows)),
            Ok(_) => None,
            Err(e) => {
                log::debug!("terminal size unavailable: {}", e);
                None
            }
        }
    }
}

/// A viewport with a known size, or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedViewport(pub Option<(u16, u16)>);

impl FixedViewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self(Some((cols, rows)))
    }

    /// A viewport that never reports a size.
    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl Viewport for FixedViewport {
    fn size(&self) -> Option<(u16, u16)> {
        self.0
    }
}
