use fltk::{
    app::Sender,
    button::RadioRoundButton,
    enums::Color,
    frame::Frame,
    group::Group,
    prelude::*,
    window::Window,
};

use crate::app::messages::Message;
use crate::screen::DeviceCategory;

/// Operator panel for pinning the device category. Hidden by default,
/// toggled with Ctrl+Shift+Z. A thin view over the override store:
/// every radio press goes through the channel as a `SetOverride`
/// message, and the radios are re-synced from the store whenever the
/// panel is shown or the screen state changes.
pub struct OverridePanel {
    window: Window,
    auto_btn: RadioRoundButton,
    category_btns: Vec<(DeviceCategory, RadioRoundButton)>,
}

impl OverridePanel {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut window = Window::default()
            .with_size(300, 235)
            .with_label("Screen Size Override");
        window.set_color(Color::from_rgb(35, 35, 35));

        let group = Group::default().with_pos(15, 15).with_size(270, 160);
        let mut auto_btn = RadioRoundButton::default()
            .with_pos(15, 15)
            .with_size(270, 25)
            .with_label("Auto");
        auto_btn.set_label_color(Color::from_rgb(220, 220, 220));
        let sender_auto = sender.clone();
        auto_btn.set_callback(move |_| sender_auto.send(Message::SetOverride(None)));

        let mut category_btns = Vec::new();
        for (i, category) in DeviceCategory::all().iter().enumerate() {
            let label = format!(
                "{} ({})",
                capitalized(category.as_label()),
                category.description()
            );
            let mut btn = RadioRoundButton::default()
                .with_pos(15, 45 + 30 * i as i32)
                .with_size(270, 25)
                .with_label(&label);
            btn.set_label_color(Color::from_rgb(220, 220, 220));
            let sender_btn = sender.clone();
            let category = *category;
            btn.set_callback(move |_| sender_btn.send(Message::SetOverride(Some(category))));
            category_btns.push((category, btn));
        }
        group.end();

        let mut hint = Frame::default()
            .with_pos(15, 195)
            .with_size(270, 25)
            .with_label("Press Ctrl+Shift+Z to hide");
        hint.set_label_size(11);
        hint.set_label_color(Color::from_rgb(150, 150, 150));

        window.end();

        Self {
            window,
            auto_btn,
            category_btns,
        }
    }

    /// Show or hide the panel next to the main window.
    pub fn toggle(&mut self, parent: &Window, detected: DeviceCategory, overridden: Option<DeviceCategory>) {
        if self.window.shown() {
            self.window.hide();
        } else {
            self.sync(detected, overridden);
            self.window
                .set_pos(parent.x() + parent.w() - self.window.w() - 20, parent.y() + 20);
            self.window.show();
        }
    }

    /// Reflect the store's current value in the radios; the auto
    /// radio shows what detection alone would pick.
    pub fn sync(&mut self, detected: DeviceCategory, overridden: Option<DeviceCategory>) {
        self.auto_btn
            .set_label(&format!("Auto (detected: {detected})"));
        match overridden {
            None => self.auto_btn.set_value(true),
            Some(overridden) => {
                for (category, btn) in &mut self.category_btns {
                    if *category == overridden {
                        btn.set_value(true);
                    }
                }
            }
        }
    }

    pub fn shown(&self) -> bool {
        self.window.shown()
    }
}

fn capitalized(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized() {
        assert_eq!(capitalized("small"), "Small");
        assert_eq!(capitalized("extra-large"), "Extra-large");
        assert_eq!(capitalized(""), "");
    }
}
