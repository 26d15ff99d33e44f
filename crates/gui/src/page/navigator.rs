use std::sync::Arc;

use dcrdesk_schema::conf::config_store::ConfigStore;
use dcrdesk_schema::config_data::DARK_MODE_CONFIG_KEY;
use eframe::egui;
use log::{debug, warn};

use crate::modal::Modal;
use crate::page::{GuiContext, Page};
use crate::theme::{SharedTheme, Theme};

pub enum NavCommand<G> {
    Display(Box<dyn Page<G>>),
    CloseCurrentPage,
    /// Re-run `on_navigated_to` of the page with this id if it is on top.
    ResumePage(String),
    ShowModal(Box<dyn Modal<G>>),
    DismissModal(String),
    RefreshTheme,
    Reload,
}

impl<G> NavCommand<G> {
    pub fn describe(&self) -> String {
        match self {
            NavCommand::Display(p) => format!("display:{}", p.id()),
            NavCommand::CloseCurrentPage => "close_current_page".to_string(),
            NavCommand::ResumePage(id) => format!("resume_page:{}", id),
            NavCommand::ShowModal(m) => format!("show_modal:{}", m.id()),
            NavCommand::DismissModal(id) => format!("dismiss_modal:{}", id),
            NavCommand::RefreshTheme => "refresh_theme".to_string(),
            NavCommand::Reload => "reload".to_string(),
        }
    }
}

/// Handle pages and modals use to request navigation. Requests are applied
/// by the page stack between interaction passes.
pub struct Navigator<G> {
    sender: flume::Sender<NavCommand<G>>,
}

impl<G> Clone for Navigator<G> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<G> Navigator<G> {
    pub fn channel() -> (Navigator<G>, flume::Receiver<NavCommand<G>>) {
        let (sender, receiver) = flume::unbounded();
        (Navigator { sender }, receiver)
    }

    fn send(&self, cmd: NavCommand<G>) {
        if self.sender.send(cmd).is_err() {
            warn!("Navigation request dropped, page stack is gone");
        }
    }

    pub fn display(&self, page: impl Page<G> + 'static) {
        self.send(NavCommand::Display(Box::new(page)));
    }

    pub fn close_current_page(&self) {
        self.send(NavCommand::CloseCurrentPage);
    }

    pub fn resume_page(&self, id: impl Into<String>) {
        self.send(NavCommand::ResumePage(id.into()));
    }

    pub fn show_modal(&self, modal: impl Modal<G> + 'static) {
        self.send(NavCommand::ShowModal(Box::new(modal)));
    }

    pub fn dismiss_modal(&self, id: impl Into<String>) {
        self.send(NavCommand::DismissModal(id.into()));
    }

    pub fn refresh_theme(&self) {
        self.send(NavCommand::RefreshTheme);
    }

    pub fn reload(&self) {
        self.send(NavCommand::Reload);
    }
}

/// Stack of pages with modals drawn over the top page.
pub struct PageStack<G> {
    pages: Vec<Box<dyn Page<G>>>,
    modals: Vec<Box<dyn Modal<G>>>,
    gctx: GuiContext<G>,
    receiver: flume::Receiver<NavCommand<G>>,
    theme_dirty: bool,
    repaint_requested: bool,
}

impl<G> PageStack<G> where G: ConfigStore + 'static {
    pub fn new(theme: SharedTheme) -> Self {
        let (nav, receiver) = Navigator::channel();
        Self {
            pages: vec![],
            modals: vec![],
            gctx: GuiContext { theme, nav },
            receiver,
            theme_dirty: true,
            repaint_requested: false,
        }
    }

    pub fn gui_context(&self) -> GuiContext<G> {
        self.gctx.clone()
    }

    pub fn navigator(&self) -> Navigator<G> {
        self.gctx.nav.clone()
    }

    pub fn current_page_id(&self) -> Option<&str> {
        self.pages.last().map(|p| p.id())
    }

    pub fn page_ids(&self) -> Vec<String> {
        self.pages.iter().map(|p| p.id().to_string()).collect()
    }

    pub fn modal_ids(&self) -> Vec<String> {
        self.modals.iter().map(|m| m.id().to_string()).collect()
    }

    pub fn process_commands(&mut self, g: &mut G) {
        while let Ok(cmd) = self.receiver.try_recv() {
            debug!("Navigation: {}", cmd.describe());
            match cmd {
                NavCommand::Display(mut page) => {
                    if let Some(top) = self.pages.last_mut() {
                        top.on_navigated_from();
                    }
                    page.on_navigated_to(g);
                    self.pages.push(page);
                }
                NavCommand::CloseCurrentPage => {
                    if self.pages.len() <= 1 {
                        warn!("Refusing to close the root page");
                        continue;
                    }
                    if let Some(mut page) = self.pages.pop() {
                        page.on_navigated_from();
                    }
                    if let Some(top) = self.pages.last_mut() {
                        top.on_navigated_to(g);
                    }
                }
                NavCommand::ResumePage(id) => {
                    if let Some(top) = self.pages.last_mut().filter(|p| p.id() == id) {
                        top.on_navigated_to(g);
                    }
                }
                NavCommand::ShowModal(mut modal) => {
                    modal.on_resume(g);
                    self.modals.push(modal);
                }
                NavCommand::DismissModal(id) => {
                    if let Some(pos) = self.modals.iter().rposition(|m| m.id() == id) {
                        let mut modal = self.modals.remove(pos);
                        modal.on_dismiss();
                    }
                }
                NavCommand::RefreshTheme => {
                    let dark = g.read_bool_config_value_for_key(DARK_MODE_CONFIG_KEY, false);
                    self.gctx.theme.store(Arc::new(Theme::new(dark)));
                    self.theme_dirty = true;
                }
                NavCommand::Reload => {
                    self.repaint_requested = true;
                }
            }
        }
    }

    /// Interaction pass: the top modal, or the top page when no modal is open.
    pub fn handle(&mut self, g: &mut G) {
        self.process_commands(g);
        if let Some(modal) = self.modals.last_mut() {
            modal.handle(g);
        } else if let Some(page) = self.pages.last_mut() {
            page.handle_user_interactions(g);
        }
        self.process_commands(g);
    }

    pub fn layout(&mut self, ctx: &egui::Context, g: &G) {
        if std::mem::take(&mut self.theme_dirty) {
            self.gctx.theme().apply(ctx);
        }
        let modal_open = !self.modals.is_empty();
        let pages = &mut self.pages;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                    if let Some(page) = pages.last_mut() {
                        page.layout(ui, g);
                    }
                });
            });
        });
        for modal in self.modals.iter_mut() {
            modal.layout(ctx, g);
        }
        if std::mem::take(&mut self.repaint_requested) {
            ctx.request_repaint();
        }
    }

    /// Cancels every page context, used on shutdown.
    pub fn close_all(&mut self) {
        while let Some(mut page) = self.pages.pop() {
            page.on_navigated_from();
        }
        while let Some(mut modal) = self.modals.pop() {
            modal.on_dismiss();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::shared_theme;
    use dcrdesk_schema::conf::config_store::MemoryConfigStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingPage {
        id: String,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Page<MemoryConfigStore> for RecordingPage {
        fn id(&self) -> &str {
            &self.id
        }
        fn on_navigated_to(&mut self, _g: &mut MemoryConfigStore) {
            self.log.borrow_mut().push(format!("to:{}", self.id));
        }
        fn handle_user_interactions(&mut self, _g: &mut MemoryConfigStore) {
            self.log.borrow_mut().push(format!("handle:{}", self.id));
        }
        fn layout(&mut self, _ui: &mut egui::Ui, _g: &MemoryConfigStore) {}
        fn on_navigated_from(&mut self) {
            self.log.borrow_mut().push(format!("from:{}", self.id));
        }
    }

    fn recording_page(id: &str, log: &Rc<RefCell<Vec<String>>>) -> RecordingPage {
        RecordingPage { id: id.to_string(), log: log.clone() }
    }

    #[test]
    fn display_and_close_drive_lifecycle() {
        let log = Rc::new(RefCell::new(vec![]));
        let mut g = MemoryConfigStore::default();
        let mut stack: PageStack<MemoryConfigStore> = PageStack::new(shared_theme(false));
        let nav = stack.navigator();
        nav.display(recording_page("a", &log));
        nav.display(recording_page("b", &log));
        stack.handle(&mut g);
        assert_eq!(stack.page_ids(), vec!["a", "b"]);
        nav.close_current_page();
        nav.close_current_page();
        stack.process_commands(&mut g);
        assert_eq!(stack.current_page_id(), Some("a"));
        assert_eq!(
            *log.borrow(),
            vec!["to:a", "from:a", "to:b", "handle:b", "from:b", "to:a"]
        );
    }

    #[test]
    fn refresh_theme_reads_dark_mode() {
        let mut g = MemoryConfigStore::default();
        g.set_bool_config_value_for_key(DARK_MODE_CONFIG_KEY, true);
        let mut stack: PageStack<MemoryConfigStore> = PageStack::new(shared_theme(false));
        stack.navigator().refresh_theme();
        stack.process_commands(&mut g);
        assert!(stack.gui_context().theme().dark_mode);
    }
}
