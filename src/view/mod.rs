//! TUI demo host (impure shell).
//!
//! A small ratatui browser over a synthetic item sequence, wiring terminal
//! key and resize events into the windowing engines. One content unit equals
//! one terminal row/column, so boxes map directly onto the frame. The engine
//! side stays renderer-agnostic: everything terminal-specific lives here.

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ResolvedConfig;
use crate::engine::{GridEngine, InfiniteScrollTrigger, ListEngine};
use crate::model::{EngineError, ItemBox, PositionedItem, TrackWidth};

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Engine rejected the demo content
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}

/// One synthetic demo item.
///
/// Items carry an explicit stable `id` distinct from their position; the
/// renderer keys everything off `id`, never the index, so reordering or
/// prepending pages cannot alias rendered state.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoItem {
    /// Stable identity, unique across the whole session.
    pub id: u64,
    /// Display label.
    pub label: String,
    /// Item extent in rows (list mode).
    pub extent: f64,
}

/// Generate `count` items starting at `first_id`, with a deterministic
/// spread of extents between 1 and 5 rows.
pub fn generate_items(first_id: u64, count: usize) -> Vec<DemoItem> {
    (0..count as u64)
        .map(|i| {
            let id = first_id + i;
            DemoItem {
                id,
                label: format!("item #{id}"),
                extent: 1.0 + (id * 7 % 5) as f64,
            }
        })
        .collect()
}

/// Which engine the demo is currently driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoMode {
    /// Variable-height vertical list.
    List,
    /// Uniform-cell grid.
    Grid,
}

/// Project a content-space bounding box into a frame rectangle.
///
/// Returns `None` when the box lies fully outside the viewport after the
/// scroll offset is applied. Partially visible boxes are clipped; callers
/// can rely on the result fitting inside `area`.
pub fn box_to_rect(bounds: ItemBox, scroll_offset: f64, area: Rect) -> Option<Rect> {
    let top = bounds.top - scroll_offset;
    let visible_top = top.max(0.0);
    let visible_bottom = (top + bounds.height).min(f64::from(area.height));
    if visible_bottom <= visible_top {
        return None;
    }

    let width = match bounds.width {
        TrackWidth::Fill => f64::from(area.width),
        TrackWidth::Px(w) => w,
    };
    let left = bounds.left.max(0.0);
    let right = (bounds.left + width).min(f64::from(area.width));
    if right <= left {
        return None;
    }

    // Content units are whole terminal cells here, so the casts are exact
    // for in-range values and the min() guards cap them at the frame edge.
    Some(Rect {
        x: area.x + left as u16,
        y: area.y + visible_top as u16,
        width: (right - left) as u16,
        height: (visible_bottom - visible_top) as u16,
    })
}

/// Demo application state plus terminal handle.
///
/// Generic over backend to support testing with `TestBackend`.
pub struct DemoApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    items: Vec<DemoItem>,
    list: ListEngine,
    grid: GridEngine,
    trigger: InfiniteScrollTrigger,
    mode: DemoMode,
    page_size: usize,
    max_items: usize,
    should_quit: bool,
}

impl DemoApp<CrosstermBackend<Stdout>> {
    /// Create and initialize the demo against the real terminal.
    ///
    /// Sets up raw mode with the alternate screen; [`DemoApp::run`] restores
    /// both on exit.
    pub fn new(config: &ResolvedConfig, mode: DemoMode) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Self::with_terminal(terminal, config, mode)
    }

    /// Run the event loop until the user quits, then restore the terminal.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.handle_resize(size.width, size.height);
        self.draw()?;

        while !self.should_quit {
            if event::poll(Duration::from_millis(250))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(width, height) => self.handle_resize(width, height),
                    _ => {}
                }
                self.draw()?;
            }
        }

        disable_raw_mode()?;
        self.terminal
            .backend_mut()
            .writer_mut()
            .execute(LeaveAlternateScreen)?;
        Ok(())
    }
}

impl<B> DemoApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create the demo over an existing terminal (used by tests with
    /// `TestBackend`).
    pub fn with_terminal(
        terminal: Terminal<B>,
        config: &ResolvedConfig,
        mode: DemoMode,
    ) -> Result<Self, TuiError> {
        let engine_config = config.engine();
        let items = generate_items(0, config.page_size);

        let mut list = ListEngine::new(engine_config);
        list.replace_items(&items, |item, _| item.extent)?;

        let mut grid = GridEngine::new(engine_config, 16.0, 4.0)?;
        grid.set_len(items.len());

        info!(items = items.len(), ?mode, "demo host ready");

        Ok(Self {
            terminal,
            items,
            list,
            grid,
            trigger: InfiniteScrollTrigger::new(engine_config.end_reached_threshold),
            mode,
            page_size: config.page_size,
            max_items: config.page_size.saturating_mul(20),
            should_quit: false,
        })
    }

    /// Current mode.
    pub fn mode(&self) -> DemoMode {
        self.mode
    }

    /// Access the underlying terminal (test support).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Number of items loaded so far.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply a key event to the demo state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        let page = self.viewport_extent();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('g') => self.toggle_mode(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1.0),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1.0),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::PageDown => self.scroll_by(page),
            KeyCode::Home => self.scroll_to(0.0),
            KeyCode::End => self.scroll_to(f64::MAX),
            _ => {}
        }
    }

    /// Apply a terminal resize to both engines.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let area = content_area(Rect::new(0, 0, width, height));
        self.list.on_resize(f64::from(area.height));
        self.grid.on_resize(f64::from(area.height));
        self.grid.set_container_width(f64::from(area.width));
        self.after_motion();
    }

    /// Render one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let mode = self.mode;
        let scroll = self.scroll_offset();
        let total = self.total_extent();
        let status = format!(
            " {} | {} items | scroll {:.0}/{:.0} | g: toggle grid  q: quit",
            match mode {
                DemoMode::List => "list",
                DemoMode::Grid => "grid",
            },
            self.items.len(),
            scroll,
            total,
        );

        let window = match mode {
            DemoMode::List => {
                let update = self.list.on_scroll(scroll);
                update.range.map(|r| self.list.materialize(r))
            }
            DemoMode::Grid => {
                let window = self.grid.on_scroll(scroll);
                window.rows.map(|r| self.grid.materialize(r))
            }
        };

        let items = &self.items;
        self.terminal.draw(|frame| {
            let outer = frame.area();
            let block = Block::default()
                .borders(Borders::ALL)
                .title("viewslice demo");
            let area = block.inner(outer);
            frame.render_widget(block, outer);

            if let Some(positioned) = &window {
                for placed in positioned {
                    render_item(frame, items, *placed, scroll, area);
                }
            }

            let status_area = Rect::new(outer.x, outer.bottom().saturating_sub(1), outer.width, 1);
            frame.render_widget(
                Paragraph::new(Line::from(status)).style(Style::default().add_modifier(Modifier::REVERSED)),
                status_area,
            );
        })?;
        Ok(())
    }

    fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            DemoMode::List => DemoMode::Grid,
            DemoMode::Grid => DemoMode::List,
        };
        debug!(mode = ?self.mode, "mode toggled");
        // Scroll spaces differ between modes; restart at the top.
        self.scroll_to(0.0);
    }

    fn viewport_extent(&self) -> f64 {
        match self.mode {
            DemoMode::List => self.list.viewport().extent(),
            DemoMode::Grid => self.grid_viewport_extent(),
        }
    }

    fn grid_viewport_extent(&self) -> f64 {
        // Both engines track the same content-area height.
        self.list.viewport().extent()
    }

    fn scroll_offset(&self) -> f64 {
        self.list.viewport().scroll_offset()
    }

    fn total_extent(&self) -> f64 {
        match self.mode {
            DemoMode::List => self.list.total_extent(),
            DemoMode::Grid => self.grid.total_extent(),
        }
    }

    fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.scroll_offset() + delta);
    }

    fn scroll_to(&mut self, offset: f64) {
        let max = match self.mode {
            DemoMode::List => self.list.max_scroll_offset(),
            DemoMode::Grid => {
                (self.grid.total_extent() - self.grid_viewport_extent()).max(0.0)
            }
        };
        let clamped = offset.clamp(0.0, max);
        self.list.on_scroll(clamped);
        self.grid.on_scroll(clamped);
        self.after_motion();
    }

    /// Drive the infinite-scroll trigger after any viewport motion.
    fn after_motion(&mut self) {
        let total = match self.mode {
            DemoMode::List => self.list.total_extent(),
            DemoMode::Grid => self.grid.total_extent(),
        };
        if self.trigger.observe(self.list.viewport(), total) {
            self.load_next_page();
        }
    }

    /// Synchronous "load more": append a page of synthetic items.
    fn load_next_page(&mut self) {
        self.trigger.loading_started();
        let next_id = self.items.len() as u64;
        self.items.extend(generate_items(next_id, self.page_size));
        // Sequence replacement is wholesale from the engines' point of view.
        if let Err(err) = self.list.replace_items(&self.items, |item, _| item.extent) {
            // Synthetic extents are always valid; keep the old table if not.
            debug!(%err, "page append rejected");
        }
        self.grid.set_len(self.items.len());
        let has_more = self.items.len() < self.max_items;
        self.trigger.loading_finished(has_more);
        info!(items = self.items.len(), has_more, "loaded page");

        // Content grew: re-evaluate sentinel visibility immediately so the
        // trigger can re-arm without waiting for another scroll event.
        let total = match self.mode {
            DemoMode::List => self.list.total_extent(),
            DemoMode::Grid => self.grid.total_extent(),
        };
        let _ = self.trigger.observe(self.list.viewport(), total);
    }
}

/// The inner area the engines render into, given the full frame.
fn content_area(frame_area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(frame_area)
}

/// Paint one materialized item into the frame.
fn render_item(
    frame: &mut ratatui::Frame<'_>,
    items: &[DemoItem],
    placed: PositionedItem,
    scroll_offset: f64,
    area: Rect,
) {
    let Some(rect) = box_to_rect(placed.bounds, scroll_offset, area) else {
        return;
    };
    let Some(item) = items.get(placed.index) else {
        return;
    };
    // Keys come from the item's stable id, never from its index.
    let text = format!("[{}] {}", item.id, item.label);
    let widget = if rect.height >= 3 {
        Paragraph::new(text).block(Block::default().borders(Borders::ALL))
    } else {
        Paragraph::new(text)
    };
    frame.render_widget(widget, rect);
}
