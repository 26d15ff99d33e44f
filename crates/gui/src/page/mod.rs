use eframe::egui::Ui;

use crate::page::navigator::Navigator;
use crate::theme::{SharedTheme, Theme};

pub mod navigator;
pub mod privacy;
pub mod settings;
pub mod wallets;

/// A screen managed by the page stack.
///
/// Each frame the stack calls `handle_user_interactions` on the top page
/// (unless a modal is open), then `layout`. `on_navigated_to` runs every
/// time the page becomes the top page, `on_navigated_from` every time it
/// stops being it; neither should rebuild widgets.
pub trait Page<G> {
    fn id(&self) -> &str;
    fn on_navigated_to(&mut self, _g: &mut G) {}
    fn handle_user_interactions(&mut self, g: &mut G);
    fn layout(&mut self, ui: &mut Ui, g: &G);
    fn on_navigated_from(&mut self) {}
}

/// Theme and navigator handles given to every page and modal.
pub struct GuiContext<G> {
    pub theme: SharedTheme,
    pub nav: Navigator<G>,
}

impl<G> Clone for GuiContext<G> {
    fn clone(&self) -> Self {
        Self {
            theme: self.theme.clone(),
            nav: self.nav.clone(),
        }
    }
}

impl<G> GuiContext<G> {
    pub fn theme(&self) -> arc_swap::Guard<std::sync::Arc<Theme>> {
        self.theme.load()
    }
}

/// Cancellation scope of a displayed page. Work spawned with
/// `interrupt()` is dropped once the context is cancelled.
#[derive(Debug)]
pub struct PageContext {
    cancel: Option<flume::Sender<()>>,
    done: flume::Receiver<()>,
}

impl PageContext {
    pub fn new() -> Self {
        let (cancel, done) = flume::bounded(1);
        Self { cancel: Some(cancel), done }
    }

    pub fn interrupt(&self) -> flume::Receiver<()> {
        self.done.clone()
    }

    pub fn cancel(&mut self) {
        self.cancel.take();
    }

    pub fn is_cancelled(&self) -> bool {
        self.done.is_disconnected()
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancels the current context, if any, and opens a fresh one.
pub fn renew_context(ctx: &mut Option<PageContext>) -> flume::Receiver<()> {
    if let Some(c) = ctx.as_mut() {
        c.cancel();
    }
    let fresh = PageContext::new();
    let interrupt = fresh.interrupt();
    *ctx = Some(fresh);
    interrupt
}
