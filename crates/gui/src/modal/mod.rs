use dcrdesk_schema::ErrorInfo;
use eframe::egui;
use eframe::egui::{Align2, Color32, Id, Key, Margin, Order, Ui};

use crate::components::clickable::Clickable;
use crate::page::navigator::Navigator;
use crate::theme::{values, Theme};

pub mod create_password;
pub mod list_preference;
pub mod password;

/// A dialog drawn over the current page. While any modal is open the page
/// underneath is rendered disabled and only the top modal is handled.
pub trait Modal<G> {
    fn id(&self) -> &str;
    /// Runs when the modal is pushed onto the stack.
    fn on_resume(&mut self, _g: &mut G) {}
    fn handle(&mut self, g: &mut G);
    fn layout(&mut self, ctx: &egui::Context, g: &G);
    fn on_dismiss(&mut self) {}
}

/// Results from work spawned on behalf of a password style modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordModalEvent {
    SetError(String),
    SetLoading(bool),
    Dismiss,
}

/// Cloneable sender handed to spawned work; delivered on the next handle pass.
#[derive(Debug, Clone)]
pub struct ModalEventSender {
    sender: flume::Sender<PasswordModalEvent>,
}

impl ModalEventSender {
    fn send(&self, event: PasswordModalEvent) {
        // A closed receiver means the modal is already gone.
        let _ = self.sender.send(event);
    }

    pub fn set_error(&self, error: impl Into<String>) {
        self.send(PasswordModalEvent::SetError(error.into()));
    }

    pub fn set_loading(&self, loading: bool) {
        self.send(PasswordModalEvent::SetLoading(loading));
    }

    pub fn dismiss(&self) {
        self.send(PasswordModalEvent::Dismiss);
    }

    /// Shows a failed wallet call in the modal and leaves the loading state.
    pub fn fail(&self, error: &ErrorInfo) {
        self.set_error(error.modal_message());
        self.set_loading(false);
    }
}

pub fn modal_event_channel() -> (ModalEventSender, flume::Receiver<PasswordModalEvent>) {
    let (sender, receiver) = flume::unbounded();
    (ModalEventSender { sender }, receiver)
}

/// Window chrome, backdrop and dismissal bookkeeping shared by every modal.
pub struct ModalFrame<G> {
    id: String,
    nav: Navigator<G>,
    dismissed: bool,
    backdrop: Clickable,
}

impl<G> ModalFrame<G> {
    pub fn new(id: impl Into<String>, nav: Navigator<G>) -> Self {
        Self {
            id: id.into(),
            nav,
            dismissed: false,
            backdrop: Clickable::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn nav(&self) -> &Navigator<G> {
        &self.nav
    }

    /// Requests removal from the modal stack; repeated calls are no-ops.
    pub fn dismiss(&mut self) {
        if !self.dismissed {
            self.dismissed = true;
            self.nav.dismiss_modal(self.id.clone());
        }
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn click_backdrop(&mut self) {
        self.backdrop.click();
    }

    pub fn backdrop_clicked(&mut self) -> bool {
        self.backdrop.clicked()
    }

    pub fn layout<R>(&mut self, ctx: &egui::Context, theme: &Theme, add_contents: impl FnOnce(&mut Ui) -> R) -> Option<R> {
        let screen = ctx.screen_rect();
        egui::Area::new(Id::new(&self.id).with("backdrop"))
            .order(Order::Middle)
            .fixed_pos(screen.min)
            .interactable(false)
            .show(ctx, |ui| {
                ui.painter().rect_filled(screen, 0.0, Color32::from_black_alpha(120));
            });

        let frame = egui::Frame::window(&ctx.style())
            .fill(theme.color.surface)
            .rounding(values::CARD_RADIUS)
            .inner_margin(Margin::same(values::MARGIN_PADDING_24));

        let shown = egui::Window::new(self.id.clone())
            .id(Id::new(&self.id))
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .frame(frame)
            .show(ctx, |ui| {
                ui.set_width(values::MODAL_WIDTH);
                add_contents(ui)
            })?;

        // Both live on the middle order; the window must stay in front.
        ctx.move_to_top(shown.response.layer_id);
        let rect = shown.response.rect;
        let outside = ctx.input(|i| {
            i.pointer.any_click() && i.pointer.interact_pos().map(|p| !rect.contains(p)).unwrap_or(false)
        });
        let escape = ctx.input(|i| i.key_pressed(Key::Escape));
        if outside || escape {
            self.backdrop.click();
        }
        shown.inner
    }
}
