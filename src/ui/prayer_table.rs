use fltk::{
    enums::{Align, FrameType},
    frame::Frame,
    group::Flex,
    prelude::*,
};

use crate::data::DailyPrayerTimes;

use super::theme::{self, Scale};

fn cell(label: &str, size: i32, color: fltk::enums::Color, align: Align) -> Frame {
    let mut frame = Frame::default().with_label(label);
    frame.set_label_size(size);
    frame.set_label_color(color);
    frame.set_align(align | Align::Inside);
    frame
}

/// Build the prayer-time table for today, with tomorrow's headline
/// times as a footer. `next` is the row to highlight as the next
/// prayer to start. Must be called inside an open FLTK group.
pub fn build_prayer_table(
    today: &DailyPrayerTimes,
    tomorrow: &DailyPrayerTimes,
    next: Option<usize>,
    scale: &Scale,
) -> Flex {
    let mut table = Flex::default_fill().column();
    table.set_pad(scale.pad / 2);

    // Header
    let header = Flex::default().row();
    cell("Prayer", scale.small_size, theme::text_muted(), Align::Left);
    cell("Start", scale.small_size, theme::text_muted(), Align::Right);
    cell("Jamaa'ah", scale.small_size, theme::text_muted(), Align::Right);
    header.end();
    table.fixed(&header, scale.small_size + 8);

    for (i, (name, entry)) in today.rows().iter().enumerate() {
        let is_next = next == Some(i);
        let color = if is_next {
            theme::accent_gold()
        } else {
            theme::text_white()
        };
        let mut row = Flex::default().row();
        if is_next {
            row.set_frame(FrameType::FlatBox);
            row.set_color(theme::mosque_green_dark());
        }
        cell(name, scale.body_size, color, Align::Left);
        cell(&entry.start, scale.body_size, color, Align::Right);
        cell(&entry.jamaah, scale.body_size, color, Align::Right);
        row.end();
    }

    // Tomorrow's headline times
    let footer_text = format!(
        "Tomorrow  Fajr {}  ·  Maghrib {}",
        tomorrow.fajr.start, tomorrow.maghrib.start
    );
    let footer = cell(&footer_text, scale.small_size, theme::text_muted(), Align::Left);
    table.fixed(&footer, scale.small_size + 10);

    table.end();
    table
}

/// Sunrise and jummah times as a single tile row.
pub fn build_tiles_row(sunrise: &str, jummah: &[String], scale: &Scale) -> Flex {
    let mut row = Flex::default().row();
    row.set_pad(scale.pad);
    cell(
        &format!("Sunrise {}", sunrise),
        scale.body_size,
        theme::text_white(),
        Align::Center,
    );
    for (i, time) in jummah.iter().enumerate() {
        cell(
            &format!("Jummah {} {}", i + 1, time),
            scale.body_size,
            theme::accent_gold(),
            Align::Center,
        );
    }
    row.end();
    row
}
