use std::time::Duration;

use dcrdesk_gui::dependencies::gui_depends::WalletDepends;
use dcrdesk_gui::page::navigator::PageStack;
use dcrdesk_gui::page::wallets::WalletsPage;
use dcrdesk_gui::theme::SharedTheme;
use eframe::{egui, Frame};

pub mod initialize;
pub mod native_gui_dependencies;

const IDLE_REPAINT: Duration = Duration::from_millis(250);

pub struct ClientApp<G> where G: WalletDepends {
    stack: PageStack<G>,
    gui_depends: G,
}

impl<G> ClientApp<G> where G: WalletDepends {
    pub fn new(gui_depends: G, theme: SharedTheme) -> Self {
        let stack = PageStack::new(theme);
        let gctx = stack.gui_context();
        gctx.nav.display(WalletsPage::new(&gctx));
        Self { stack, gui_depends }
    }

    /// One frame: consume last frame's clicks, then draw.
    pub fn frame(&mut self, ctx: &egui::Context) {
        self.stack.handle(&mut self.gui_depends);
        self.stack.layout(ctx, &self.gui_depends);
    }

    pub fn stack(&self) -> &PageStack<G> {
        &self.stack
    }

    pub fn depends_mut(&mut self) -> &mut G {
        &mut self.gui_depends
    }
}

impl<G> eframe::App for ClientApp<G> where G: WalletDepends {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.frame(ctx);
        // Background results arrive over channels without an input event.
        ctx.request_repaint_after(IDLE_REPAINT);
    }
}

impl<G> Drop for ClientApp<G> where G: WalletDepends {
    fn drop(&mut self) {
        self.stack.close_all();
    }
}
