use std::collections::BTreeMap;

use dcrdesk_schema::conf::config_store::ConfigStore;
use dcrdesk_schema::values::{string, Str};
use eframe::egui;
use eframe::egui::Layout;
use log::debug;

use crate::common::{h6, outline_button};
use crate::components::clickable::Clickable;
use crate::components::radio_group::RadioGroup;
use crate::modal::{Modal, ModalFrame};
use crate::page::GuiContext;
use crate::theme::values;

type UpdateValues<G> = Box<dyn FnMut(&str, &mut G)>;

/// Radio list bound to one persisted config key. Picking an option writes
/// it, runs the update callback, refreshes the theme and closes the modal.
pub struct ListPreferenceModal<G> {
    frame: ModalFrame<G>,
    gctx: GuiContext<G>,
    title: String,
    preference_key: String,
    default_value: String,
    // BTreeMap keeps keys sorted for a stable display order
    items: BTreeMap<String, String>,
    options: RadioGroup,
    cancel: Clickable,
    update_values: Option<UpdateValues<G>>,
}

impl<G: ConfigStore + 'static> ListPreferenceModal<G> {
    pub fn new(
        gctx: &GuiContext<G>,
        preference_key: impl Into<String>,
        default_value: impl Into<String>,
        items: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let preference_key = preference_key.into();
        Self {
            frame: ModalFrame::new(format!("list_preference_{}", preference_key), gctx.nav.clone()),
            gctx: gctx.clone(),
            title: String::new(),
            preference_key,
            default_value: default_value.into(),
            items: items.into_iter().collect(),
            options: RadioGroup::default(),
            cancel: Clickable::new(),
            update_values: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn update_values(mut self, callback: impl FnMut(&str, &mut G) + 'static) -> Self {
        self.update_values = Some(Box::new(callback));
        self
    }

    pub fn current_value(&self) -> &str {
        &self.options.value
    }

    pub fn keys(&self) -> Vec<&str> {
        self.items.keys().map(|k| k.as_str()).collect()
    }

    /// Same as clicking the radio button of `key`.
    pub fn select(&mut self, key: &str) {
        if self.items.contains_key(key) {
            self.options.select(key);
        }
    }

    pub fn cancel(&mut self) {
        self.cancel.click();
    }

    pub fn click_backdrop(&mut self) {
        self.frame.click_backdrop();
    }

    pub fn is_dismissed(&self) -> bool {
        self.frame.is_dismissed()
    }
}

impl<G: ConfigStore + 'static> Modal<G> for ListPreferenceModal<G> {
    fn id(&self) -> &str {
        self.frame.id()
    }

    fn on_resume(&mut self, g: &mut G) {
        let mut current = g.read_string_config_value_for_key(&self.preference_key);
        if current.is_empty() {
            current = self.default_value.clone();
        }
        // Loading the stored value is not a selection.
        self.options.value = current;
        self.options.changed();
    }

    fn handle(&mut self, g: &mut G) {
        if self.options.changed() {
            let value = self.options.value.clone();
            debug!("Preference {} set to {}", self.preference_key, value);
            g.save_user_config_value(&self.preference_key, &value);
            if let Some(callback) = self.update_values.as_mut() {
                callback(&value, g);
            }
            self.gctx.nav.refresh_theme();
            self.frame.dismiss();
            return;
        }

        let cancelled = self.cancel.clicked();
        if cancelled || self.frame.backdrop_clicked() {
            self.frame.dismiss();
        }
    }

    fn layout(&mut self, ctx: &egui::Context, _g: &G) {
        let theme = self.gctx.theme();
        let title = &self.title;
        let items = &self.items;
        let options = &mut self.options;
        let cancel = &mut self.cancel;
        self.frame.layout(ctx, &theme, |ui| {
            h6(ui, &theme, title.clone());
            ui.add_space(values::MARGIN_PADDING_8);
            for (key, label) in items.iter() {
                options.radio(ui, key, label, theme.color.text);
            }
            ui.add_space(values::MARGIN_PADDING_16);
            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                cancel.add(ui, outline_button(&theme, string(Str::Cancel)));
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::navigator::{NavCommand, Navigator};
    use crate::theme::shared_theme;
    use dcrdesk_schema::conf::config_store::MemoryConfigStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Config store that records writes alongside the navigation requests
    /// already sent, so ordering can be checked.
    #[derive(Default)]
    struct RecordingStore {
        inner: MemoryConfigStore,
        writes: Vec<(String, String)>,
    }

    impl ConfigStore for RecordingStore {
        fn read_string_config_value_for_key(&self, key: &str) -> String {
            self.inner.read_string_config_value_for_key(key)
        }
        fn save_user_config_value(&mut self, key: &str, value: &str) {
            self.writes.push((key.to_string(), value.to_string()));
            self.inner.save_user_config_value(key, value);
        }
    }

    fn modal(nav: Navigator<RecordingStore>) -> ListPreferenceModal<RecordingStore> {
        let gctx = GuiContext { theme: shared_theme(false), nav };
        let items = [("k2", "Two"), ("k1", "One"), ("k3", "Three")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()));
        ListPreferenceModal::new(&gctx, "prefKey", "k1", items).title("Pick")
    }

    #[test]
    fn missing_value_resumes_to_default() {
        let (nav, _rx) = Navigator::channel();
        let mut store = RecordingStore::default();
        let mut m = modal(nav);
        assert_eq!(m.current_value(), "");
        m.on_resume(&mut store);
        assert_eq!(m.current_value(), "k1");
        assert_eq!(m.keys(), vec!["k1", "k2", "k3"]);
        m.handle(&mut store);
        assert!(store.writes.is_empty());
        assert!(!m.is_dismissed());
    }

    #[test]
    fn stored_value_wins_over_default() {
        let (nav, _rx) = Navigator::channel();
        let mut store = RecordingStore::default();
        store.inner.save_user_config_value("prefKey", "k3");
        let mut m = modal(nav);
        m.on_resume(&mut store);
        assert_eq!(m.current_value(), "k3");
    }

    #[test]
    fn selection_writes_then_calls_back_then_dismisses() {
        let (nav, rx) = Navigator::channel();
        let order = Rc::new(RefCell::new(Vec::<String>::new()));
        let seen = order.clone();
        let rx_seen = rx.clone();
        let mut m = modal(nav).update_values(move |value, store: &mut RecordingStore| {
            assert_eq!(store.writes.len(), 1);
            // nothing sent to the navigator yet
            assert!(rx_seen.is_empty());
            seen.borrow_mut().push(format!("callback:{}", value));
        });
        let mut store = RecordingStore::default();
        m.on_resume(&mut store);
        m.select("k2");
        m.handle(&mut store);

        assert_eq!(store.writes, vec![("prefKey".to_string(), "k2".to_string())]);
        assert_eq!(*order.borrow(), vec!["callback:k2"]);
        let sent: Vec<String> = rx.try_iter().map(|c: NavCommand<RecordingStore>| c.describe()).collect();
        assert_eq!(sent, vec!["refresh_theme", "dismiss_modal:list_preference_prefKey"]);

        m.handle(&mut store);
        assert_eq!(store.writes.len(), 1);
        assert!(rx.is_empty());
    }

    #[test]
    fn reselecting_current_does_nothing() {
        let (nav, rx) = Navigator::channel();
        let mut store = RecordingStore::default();
        let mut m = modal(nav);
        m.on_resume(&mut store);
        m.select("k1");
        m.select("nope");
        m.handle(&mut store);
        assert!(store.writes.is_empty());
        assert!(rx.is_empty());
    }

    #[test]
    fn cancel_and_backdrop_dismiss_without_writing() {
        for backdrop in [false, true] {
            let (nav, rx) = Navigator::channel();
            let mut store = RecordingStore::default();
            let mut m = modal(nav);
            m.on_resume(&mut store);
            if backdrop {
                m.click_backdrop();
            } else {
                m.cancel();
            }
            m.handle(&mut store);
            assert!(store.writes.is_empty());
            assert!(m.is_dismissed());
            assert_eq!(rx.len(), 1);
        }
    }

    #[test]
    fn renders_headless() {
        let (nav, _rx) = Navigator::channel();
        let mut store = RecordingStore::default();
        let mut m = modal(nav);
        m.on_resume(&mut store);
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            m.layout(ctx, &store);
        });
        assert_eq!(m.current_value(), "k1");
    }
}
