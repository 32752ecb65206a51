//! Terminal front end: feeds crossterm input into a [`WindowManager`] and
//! paints the scene once per loop tick.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use indoc::indoc;
use ratatui::layout::Rect;

use crate::component_context::ComponentContext;
use crate::components::{Component, StatusBar};
use crate::config::WmConfig;
use crate::constants::BOTTOM_NAV_PROPERTY;
use crate::drivers::pointer::pointer_from_mouse;
use crate::drivers::{InputDriver, OutputDriver};
use crate::event_loop::{ControlFlow, EventLoop};
use crate::host::StaticHost;
use crate::layout::DockZone;
use crate::persistence::KeyValueStore;
use crate::theme;
use crate::ui::{CellScale, UiFrame, render_scene};
use crate::window::FrameId;
use crate::window::WindowOptions;
use crate::window::decorator::OpenStepDecorator;
use crate::window::WindowManager;

const HELP_TEXT: &str = indoc! {"
    Drag the titlebar to move, drop on an edge to dock.
    Drop onto another titlebar to group as tabs.
    Double-click a titlebar to maximize.

    n new   x close   m minimize   r restore
    ←/→/↑ dock focused   u undock   q quit
"};

/// A manager bound to a terminal-sized host.
///
/// The host is shared with the manager, so resizing the terminal is a matter
/// of updating the host; the manager reads it on demand.
pub struct Workspace {
    wm: WindowManager,
    host: StaticHost,
    scale: CellScale,
    status: StatusBar,
    decorator: OpenStepDecorator,
    spawned: usize,
}

impl Workspace {
    pub fn new(
        host: StaticHost,
        store: impl KeyValueStore + 'static,
        config: WmConfig,
        scale: CellScale,
    ) -> Self {
        let wm = WindowManager::new(host.clone(), store, config);
        let mut status = StatusBar::new();
        status.set_style(
            ratatui::style::Style::default()
                .bg(theme::status_bg())
                .fg(theme::status_fg()),
        );
        Self {
            wm,
            host,
            scale,
            status,
            decorator: OpenStepDecorator,
            spawned: 0,
        }
    }

    pub fn manager(&self) -> &WindowManager {
        &self.wm
    }

    pub fn scale(&self) -> CellScale {
        self.scale
    }

    /// Match the host to a terminal of `columns` x `rows` cells. The last row
    /// is the status bar and is reported as the bottom navigation height.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        let (width, height) = self.scale.host_size(Rect::new(0, 0, columns, rows));
        self.host.set_size(width, height);
        self.host
            .set_property(BOTTOM_NAV_PROPERTY, format!("{}px", self.scale.cell_height));
        tracing::debug!(width, height, "host resized");
    }

    /// Open another demo window at the next cascade slot.
    pub fn open_demo_window(&mut self) -> String {
        self.spawned += 1;
        let title = format!("Panel {}", self.spawned);
        self.wm
            .create(
                WindowOptions::default()
                    .title(title)
                    .content(HELP_TEXT)
                    .persistent(true),
            )
            .id()
            .to_string()
    }

    /// Window keyboard commands act on: the top free window, or the active
    /// tab of the top group.
    pub fn focused_window(&self) -> Option<String> {
        match self.wm.stack().topmost()? {
            FrameId::Window(id) => Some(id.clone()),
            FrameId::Group(group) => self.wm.group(*group)?.active().map(str::to_string),
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(mouse) => {
                if let Some(pointer) = pointer_from_mouse(mouse, self.scale) {
                    self.wm.handle_pointer(pointer);
                }
                ControlFlow::Continue
            }
            Event::Resize(columns, rows) => {
                self.resize(*columns, *rows);
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return ControlFlow::Quit;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return ControlFlow::Quit,
            KeyCode::Char('n') => {
                self.open_demo_window();
            }
            KeyCode::Char('r') => {
                let minimized: Vec<String> = self
                    .wm
                    .minimize_dock()
                    .entries()
                    .iter()
                    .map(|entry| entry.window.clone())
                    .collect();
                for id in minimized {
                    self.wm.restore(&id);
                }
            }
            code => {
                let Some(id) = self.focused_window() else {
                    return ControlFlow::Continue;
                };
                match code {
                    KeyCode::Char('x') => {
                        self.wm.close(&id);
                    }
                    KeyCode::Char('m') => self.wm.minimize(&id),
                    KeyCode::Char('u') => {
                        self.wm.undock(&id);
                    }
                    KeyCode::Left => {
                        self.wm.dock(&id, DockZone::Left);
                    }
                    KeyCode::Right => {
                        self.wm.dock(&id, DockZone::Right);
                    }
                    KeyCode::Up => {
                        self.wm.dock(&id, DockZone::Top);
                    }
                    _ => {}
                }
            }
        }
        ControlFlow::Continue
    }

    pub fn draw(&mut self, mut frame: UiFrame<'_>) {
        let area = frame.area();
        render_scene(&mut frame, &mut self.wm, self.scale, &self.decorator);
        if area.height == 0 {
            return;
        }
        let windows = self.wm.windows().count();
        let minimized = self.wm.minimize_dock().entries().len();
        self.status.set_left(match self.focused_window() {
            Some(id) => format!(" {id}"),
            None => " no windows (n to open)".to_string(),
        });
        self.status
            .set_right(format!("{windows} windows, {minimized} minimized "));
        let row = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        self.status
            .render(&mut frame, row, &ComponentContext::default());
    }
}

/// Drive `workspace` until the user quits.
pub fn run_workspace<O, D>(
    output: &mut O,
    driver: D,
    workspace: &mut Workspace,
    poll_interval: Duration,
) -> io::Result<()>
where
    O: OutputDriver,
    D: InputDriver,
{
    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;
    event_loop.run(|_, event| match event {
        Some(event) => Ok(workspace.handle_event(&event)),
        None => {
            output.draw(|frame| workspace.draw(frame))?;
            Ok(ControlFlow::Continue)
        }
    })
}
