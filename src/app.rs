use crate::{
    config::Config,
    error::Result,
    events::{handler_for, AppEvent},
    input::TaskInput,
    store::TaskStore,
    style::Palette,
    types::{RowHandle, TaskList},
    views::{confirm::ConfirmDelete, list::ListView},
};
use log::{debug, info};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// The to-do window: store, task list, viewport and input field.
///
/// Every mutation keeps three things in step: the in-memory list, the store
/// and the rows owned by the view.
pub(crate) struct App {
    store: TaskStore,
    tasks: TaskList,
    view: ListView,
    input: TaskInput,
    palette: Palette,
    input_height: u16,
    pending: Option<ConfirmDelete>,
    list_area: Rect,
    running: bool,
}

impl App {
    pub(crate) fn new(store: TaskStore, config: &Config) -> Self {
        App {
            store,
            tasks: TaskList::new(),
            view: ListView::new(config.row_padding, config.scroll_step),
            input: TaskInput::new(),
            palette: config.palette,
            input_height: config.input_height,
            pending: None,
            list_area: Rect::default(),
            running: true,
        }
    }

    /// Fills the list from the store without writing anything back.
    pub(crate) fn hydrate(&mut self) -> Result<usize> {
        let texts = self.store.load_all()?;
        let mut loaded = 0;
        for text in texts {
            if text.trim().is_empty() {
                debug!("Skipping blank stored task.");
                continue;
            }
            self.add_task(text, false)?;
            loaded += 1;
        }
        info!("Loaded {loaded} tasks from {:?}", self.store.path());
        Ok(loaded)
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running
    }

    pub(crate) fn is_confirming(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn handle(&mut self, event: AppEvent) -> Result<()> {
        let kind = event.kind();
        match handler_for(kind) {
            Some(handler) => handler(self, event),
            None => {
                debug!("No handler for {kind:?}");
                Ok(())
            }
        }
    }

    fn add_task(&mut self, text: String, persist: bool) -> Result<()> {
        let scheme = self.palette.scheme_for(self.tasks.len());
        let task = self.tasks.append(text);
        let (handle, text) = (task.handle, task.text.clone());
        if persist {
            self.store.insert(&text)?;
        }
        debug!("Added {handle}: {text:?}");
        self.view.add_row(handle, text, scheme);
        Ok(())
    }

    fn delete_task(&mut self, handle: RowHandle) -> Result<bool> {
        let Some(task) = self.tasks.remove(handle) else {
            return Ok(false);
        };
        let removed = self.store.delete(&task.text)?;
        debug!("Deleted {handle}, {removed} stored rows matched {:?}", task.text);
        self.view.remove_row(handle);
        self.recolor_all();
        Ok(true)
    }

    fn recolor_all(&mut self) {
        for task in self.tasks.iter() {
            self.view
                .restyle(task.handle, self.palette.scheme_for(task.position));
        }
    }

    fn layout(&self, area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(self.input_height + 2),
            ])
            .split(area);
        (chunks[0], chunks[1])
    }

    fn fit(&mut self, area: Rect) {
        let (list_area, _) = self.layout(area);
        if list_area != self.list_area {
            self.list_area = list_area;
            self.view.on_viewport_resize(list_area.width, list_area.height);
        }
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();
        self.fit(area);
        let (list_area, input_area) = self.layout(area);
        frame.render_widget(&self.view, list_area);
        frame.render_widget(&self.input, input_area);
        match &self.pending {
            Some(dialog) => frame.render_widget(dialog, area),
            None => {
                let (x, y) = self.input.cursor_position(input_area);
                frame.set_cursor(x, y);
            }
        }
    }

    pub(crate) fn on_submit(&mut self, _event: AppEvent) -> Result<()> {
        if let Some(text) = self.input.submit() {
            self.add_task(text, true)?;
        }
        Ok(())
    }

    pub(crate) fn on_edit(&mut self, event: AppEvent) -> Result<()> {
        if let AppEvent::Edit(input) = event {
            self.input.input(input);
        }
        Ok(())
    }

    pub(crate) fn on_paste(&mut self, event: AppEvent) -> Result<()> {
        if let AppEvent::Paste(text) = event {
            self.input.paste(&text);
        }
        Ok(())
    }

    pub(crate) fn on_click(&mut self, event: AppEvent) -> Result<()> {
        let AppEvent::Click { column, row } = event else {
            return Ok(());
        };
        let area = self.list_area;
        let inside = column >= area.x
            && column < area.x + self.view.row_width()
            && row >= area.y
            && row < area.bottom();
        if !inside {
            return Ok(());
        }
        if let Some(task) = self
            .view
            .row_at(row - area.y)
            .and_then(|handle| self.tasks.get(handle))
        {
            self.pending = Some(ConfirmDelete::new(task.handle, task.text.as_str()));
        }
        Ok(())
    }

    pub(crate) fn on_answer(&mut self, event: AppEvent) -> Result<()> {
        let AppEvent::Answer(yes) = event else {
            return Ok(());
        };
        if let Some(dialog) = self.pending.take() {
            if yes {
                self.delete_task(dialog.handle)?;
            }
        }
        Ok(())
    }

    pub(crate) fn on_scroll(&mut self, event: AppEvent) -> Result<()> {
        if let AppEvent::Scroll(input) = event {
            self.view.scroll(input);
            debug!(
                "Scrolled to line {} of {}",
                self.view.offset(),
                self.view.scroll_region()
            );
        }
        Ok(())
    }

    pub(crate) fn on_resize(&mut self, event: AppEvent) -> Result<()> {
        if let AppEvent::Resize { width, height } = event {
            self.view.on_window_resize();
            self.fit(Rect::new(0, 0, width, height));
        }
        Ok(())
    }

    pub(crate) fn on_quit(&mut self, _event: AppEvent) -> Result<()> {
        info!("Quitting.");
        self.running = false;
        Ok(())
    }
}
