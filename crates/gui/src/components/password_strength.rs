use std::collections::HashMap;

use eframe::egui;
use eframe::egui::{Color32, Ui};

use crate::theme::Theme;

/// Shannon entropy of the character distribution, in bits per character.
pub fn shannon_entropy(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in text.chars() {
        *freq.entry(c).or_default() += 1;
    }
    freq.values()
        .map(|n| {
            let p = *n as f64 / total as f64;
            -p * p.log2()
        })
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PasswordStrength {
    pub progress: f32,
}

impl PasswordStrength {
    pub fn compute(&mut self, password: &str) {
        self.progress = (shannon_entropy(password) / 4.0).clamp(0.0, 1.0) as f32;
    }

    pub fn color(&self, theme: &Theme) -> Color32 {
        match self.progress {
            p if p < 0.35 => theme.color.danger,
            p if p < 0.7 => theme.color.yellow,
            _ => theme.color.success,
        }
    }

    pub fn layout(&self, ui: &mut Ui, theme: &Theme) {
        ui.add(
            egui::ProgressBar::new(self.progress)
                .fill(self.color(theme))
                .desired_height(4.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_of_known_strings() {
        assert_eq!(shannon_entropy(""), 0.0);
        assert_eq!(shannon_entropy("aaaa"), 0.0);
        assert!((shannon_entropy("abcd") - 2.0).abs() < 1e-9);
    }

    #[test]
    fn strength_is_clamped_and_colored() {
        let theme = Theme::new(false);
        let mut s = PasswordStrength::default();
        s.compute("aaaaaa");
        assert_eq!(s.progress, 0.0);
        assert_eq!(s.color(&theme), theme.color.danger);
        s.compute("abcd");
        assert_eq!(s.progress, 0.5);
        assert_eq!(s.color(&theme), theme.color.yellow);
        s.compute("abcdefghijklmnopqrstuvwxyz0123456789");
        assert_eq!(s.progress, 1.0);
        assert_eq!(s.color(&theme), theme.color.success);
    }
}
