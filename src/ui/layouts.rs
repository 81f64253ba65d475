use fltk::{
    enums::Align,
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use chrono::Local;

use crate::data::SignageData;
use crate::screen::DeviceCategory;

use super::clock::{format_clock, format_date, next_prayer_index};
use super::prayer_table::{build_prayer_table, build_tiles_row};
use super::theme::{self, scale_for, Scale};

/// Widgets a layout hands back: the root group (marked resizable so
/// the tree tracks the window), the frames the app relabels on every
/// clock tick, and the prayer row the table was built highlighting so
/// the tick handler can tell when the highlight has to move.
pub struct LayoutWidgets {
    pub root: Flex,
    pub clock: Frame,
    pub date: Frame,
    pub next_prayer: Option<usize>,
}

/// Builds one pre-built layout tree inside the (already `begin`ed)
/// window group.
pub type LayoutBuilder = fn(&Window, &SignageData) -> LayoutWidgets;

/// Category -> layout mapping. Pure selection: categories without an
/// explicit layout fall back to the caller-supplied default builder.
pub struct LayoutTable {
    pub small: Option<LayoutBuilder>,
    pub medium: Option<LayoutBuilder>,
    pub large: Option<LayoutBuilder>,
    pub extra_large: Option<LayoutBuilder>,
    pub fallback: LayoutBuilder,
}

impl LayoutTable {
    pub fn builder_for(&self, category: DeviceCategory) -> LayoutBuilder {
        let explicit = match category {
            DeviceCategory::Small => self.small,
            DeviceCategory::Medium => self.medium,
            DeviceCategory::Large => self.large,
            DeviceCategory::ExtraLarge => self.extra_large,
        };
        explicit.unwrap_or(self.fallback)
    }
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self {
            small: Some(small_layout),
            medium: Some(medium_layout),
            large: Some(large_layout),
            extra_large: Some(extra_large_layout),
            fallback: medium_layout,
        }
    }
}

/// Tear down the window's current children and render the layout for
/// the given category.
pub fn render_layout(
    window: &mut Window,
    data: &SignageData,
    category: DeviceCategory,
    table: &LayoutTable,
) -> LayoutWidgets {
    window.clear();
    window.begin();
    let widgets = (table.builder_for(category))(window, data);
    window.end();
    window.resizable(&widgets.root);
    window.redraw();
    widgets
}

fn heading(label: &str, size: i32) -> Frame {
    let mut frame = Frame::default().with_label(label);
    frame.set_label_size(size);
    frame.set_label_color(theme::text_white());
    frame.set_align(Align::Inside | Align::Left);
    frame
}

fn metadata_block(data: &SignageData, scale: &Scale, flex: &mut Flex) {
    let title = heading(&data.metadata.name, scale.title_size);
    flex.fixed(&title, scale.title_size + 8);
    let mut address = heading(&data.metadata.address, scale.small_size);
    address.set_label_color(theme::text_muted());
    flex.fixed(&address, scale.small_size + 6);
}

fn clock_block(scale: &Scale, align: Align) -> (Frame, Frame) {
    let now = Local::now();
    let mut clock = Frame::default().with_label(&format_clock(now));
    clock.set_label_size(scale.clock_size);
    clock.set_label_color(theme::text_white());
    clock.set_align(Align::Inside | align);
    let mut date = Frame::default().with_label(&format_date(now));
    date.set_label_size(scale.small_size);
    date.set_label_color(theme::text_muted());
    date.set_align(Align::Inside | align);
    (clock, date)
}

fn notice_line(data: &SignageData, scale: &Scale, align: Align) -> Frame {
    let mut notice = Frame::default().with_label(&data.notice);
    notice.set_label_size(scale.small_size);
    notice.set_label_color(theme::text_muted());
    notice.set_align(Align::Inside | align);
    notice
}

/// Phones and small tablets: everything in one stacked column.
fn small_layout(window: &Window, data: &SignageData) -> LayoutWidgets {
    let scale = scale_for(DeviceCategory::Small);
    let next = next_prayer_index(Local::now().time(), &data.today);
    let mut column = Flex::new(0, 0, window.w(), window.h(), None).column();
    column.set_margin(scale.pad);
    column.set_pad(scale.pad);

    metadata_block(data, &scale, &mut column);
    let (clock, date) = clock_block(&scale, Align::Left);
    column.fixed(&clock, scale.clock_size + 10);
    column.fixed(&date, scale.small_size + 6);
    let tiles = build_tiles_row(&data.today.sunrise, &data.jummah, &scale);
    column.fixed(&tiles, scale.body_size + 16);
    build_prayer_table(&data.today, &data.tomorrow, next, &scale);
    let notice = notice_line(data, &scale, Align::Left);
    column.fixed(&notice, scale.small_size + 8);

    column.end();
    LayoutWidgets {
        root: column,
        clock,
        date,
        next_prayer: next,
    }
}

/// Laptops and desktop monitors: header row with the clock on the
/// right, table filling the rest.
fn medium_layout(window: &Window, data: &SignageData) -> LayoutWidgets {
    build_header_layout(window, data, DeviceCategory::Medium)
}

/// Large monitors and small TVs: same arrangement as medium with a
/// larger scale.
fn large_layout(window: &Window, data: &SignageData) -> LayoutWidgets {
    build_header_layout(window, data, DeviceCategory::Large)
}

fn build_header_layout(
    window: &Window,
    data: &SignageData,
    category: DeviceCategory,
) -> LayoutWidgets {
    let scale = scale_for(category);
    let next = next_prayer_index(Local::now().time(), &data.today);
    let mut column = Flex::new(0, 0, window.w(), window.h(), None).column();
    column.set_margin(scale.pad);
    column.set_pad(scale.pad);

    let header = Flex::default().row();
    let mut left = Flex::default().column();
    metadata_block(data, &scale, &mut left);
    left.end();
    let mut right = Flex::default().column();
    let (clock, date) = clock_block(&scale, Align::Right);
    right.fixed(&clock, scale.clock_size + 10);
    right.fixed(&date, scale.small_size + 6);
    right.end();
    header.end();
    column.fixed(&header, scale.clock_size + scale.small_size + 24);

    let tiles = build_tiles_row(&data.today.sunrise, &data.jummah, &scale);
    column.fixed(&tiles, scale.body_size + 20);
    build_prayer_table(&data.today, &data.tomorrow, next, &scale);
    let notice = notice_line(data, &scale, Align::Right);
    column.fixed(&notice, scale.small_size + 8);

    column.end();
    LayoutWidgets {
        root: column,
        clock,
        date,
        next_prayer: next,
    }
}

/// Large TVs and dedicated signage: three-way header with a centered
/// clock, and a wider gutter everywhere.
fn extra_large_layout(window: &Window, data: &SignageData) -> LayoutWidgets {
    let scale = scale_for(DeviceCategory::ExtraLarge);
    let next = next_prayer_index(Local::now().time(), &data.today);
    let mut column = Flex::new(0, 0, window.w(), window.h(), None).column();
    column.set_margin(scale.pad);
    column.set_pad(scale.pad);

    let now = Local::now();
    let mut header = Flex::default().row();
    header.set_pad(scale.pad);
    let mut left = Flex::default().column();
    metadata_block(data, &scale, &mut left);
    left.end();
    let mut clock = Frame::default().with_label(&format_clock(now));
    clock.set_label_size(scale.clock_size);
    clock.set_label_color(theme::text_white());
    clock.set_align(Align::Inside | Align::Center);
    let mut date = Frame::default().with_label(&format_date(now));
    date.set_label_size(scale.body_size);
    date.set_label_color(theme::text_white());
    date.set_align(Align::Inside | Align::Right);
    header.end();
    column.fixed(&header, scale.clock_size + 20);

    let tiles = build_tiles_row(&data.today.sunrise, &data.jummah, &scale);
    column.fixed(&tiles, scale.body_size + 28);
    build_prayer_table(&data.today, &data.tomorrow, next, &scale);
    let notice = notice_line(data, &scale, Align::Right);
    column.fixed(&notice, scale.small_size + 10);

    column.end();
    LayoutWidgets {
        root: column,
        clock,
        date,
        next_prayer: next,
    }
}
