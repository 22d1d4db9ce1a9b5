#![forbid(unsafe_code)]

//! Menu drawing for each layout style.
//!
//! [`render`] is a pure function of a [`MenuSnapshot`] and a style: it
//! clears the canvas and redraws everything, so it can run outside the
//! model lock and be replayed against a [`lcdmenu_render::RecordingCanvas`]
//! in tests.

use lcdmenu_core::{IconAnimation, MenuStyle};
use lcdmenu_render::elements::{
    bold_rounded_frame, frame, scrollable_text_line, scrollbar, scrollbar_horizontal,
    slightly_rounded_box, slightly_rounded_frame,
};
use lcdmenu_render::{Align, Canvas, Color, Font, Orientation};

use super::item::{grid_label, short_label};
use super::model::MenuSnapshot;
use super::navigation::{WINDOW_ROWS, grid_render_start};

/// Placeholder shown when the menu has no items.
pub const EMPTY_LABEL: &str = "Empty";

/// Draw `snapshot` in `style`.
pub fn render<C: Canvas + ?Sized>(canvas: &mut C, snapshot: &MenuSnapshot, style: MenuStyle) {
    canvas.clear();

    if snapshot.items.is_empty() {
        canvas.draw_str(2, 32, EMPTY_LABEL);
        scrollbar(canvas, 0, 0);
        return;
    }

    match style {
        MenuStyle::List => render_list(canvas, snapshot),
        MenuStyle::Wii => render_grid(canvas, snapshot),
        MenuStyle::Dsi => render_carousel(canvas, snapshot),
        MenuStyle::Vertical => render_column(canvas, snapshot),
    }
}

/// Draw `icon` centered in the `width` x `height` box at `(x, y)`.
fn centered_icon<C: Canvas + ?Sized>(
    canvas: &mut C,
    icon: &IconAnimation,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) {
    let dx = (width - i32::from(icon.width())) / 2;
    let dy = (height - i32::from(icon.height())) / 2;
    canvas.draw_icon_animation(x + dx, y + dy, icon);
}

/// Three rows with the selection framed in the middle.
fn render_list<C: Canvas + ?Sized>(canvas: &mut C, snapshot: &MenuSnapshot) {
    let count = snapshot.items.len();
    let position = snapshot.position.min(count - 1);
    for row in 0..3usize {
        canvas.set_font(if row == 1 { Font::Primary } else { Font::Secondary });
        let index = (position + count + row - 1) % count;
        let item = &snapshot.items[index];
        let y = 22 * row as i32;
        centered_icon(canvas, &item.icon, 4, 3 + y, 14, 14);
        let scroll = if row == 1 {
            snapshot.scroll_for(snapshot.position)
        } else {
            0
        };
        scrollable_text_line(canvas, 22, 14 + y, 98, &item.label, scroll, false, false);
    }
    frame(canvas, 0, 21, 128 - 5, 21);
    scrollbar(canvas, position, count);
}

/// Two rows of 40x30 tiles, three columns visible.
fn render_grid<C: Canvas + ?Sized>(canvas: &mut C, snapshot: &MenuSnapshot) {
    let count = snapshot.items.len();
    let start = grid_render_start(snapshot.position, count);
    canvas.set_font(Font::Secondary);
    for slot in 0..6usize {
        let index = start + slot;
        let Some(item) = snapshot.items.get(index) else {
            continue;
        };
        let x = (slot / 2) as i32 * 43 + 1;
        let y = (slot % 2) as i32 * 32;
        let selected = index == snapshot.position;
        if selected {
            slightly_rounded_box(canvas, x, y, 40, 30);
            canvas.set_color(Color::White);
        }
        centered_icon(canvas, &item.icon, x, y, 40, 20);
        scrollable_text_line(
            canvas,
            20 + x,
            26 + y,
            36,
            grid_label(&item.label),
            snapshot.scroll_for(index),
            false,
            true,
        );
        if selected {
            canvas.set_color(Color::Black);
        } else {
            frame(canvas, x, y, 40, 30);
        }
    }
}

/// Five slots around a large center tile and a label banner on top.
fn render_carousel<C: Canvas + ?Sized>(canvas: &mut C, snapshot: &MenuSnapshot) {
    let count = snapshot.items.len();
    let position = snapshot.position.min(count - 1);
    for offset in -2i32..=2 {
        let index = (position as i64 + count as i64 + i64::from(offset)).rem_euclid(count as i64)
            as usize;
        let item = &snapshot.items[index];
        let mut width: i32 = 24;
        let mut height: i32 = 26;
        let mut x: i32 = 64;
        let mut y: i32 = 36;
        if offset == 0 {
            width += 6;
            height += 4;
            bold_rounded_frame(
                canvas,
                x - width / 2,
                y - height / 2,
                width as u32,
                (height + 5) as u32,
            );
            canvas.set_font(Font::BatteryPercent);
            let caption_y = y + height / 2 + 1;
            canvas.draw_str_aligned(x - 9, caption_y, Align::Center, Align::Bottom, "S");
            canvas.draw_str_aligned(x, caption_y, Align::Center, Align::Bottom, "TAR");
            canvas.draw_str_aligned(x + 9, caption_y, Align::Center, Align::Bottom, "T");

            // Label banner with a notch pointing at the center tile.
            canvas.draw_rframe(0, 0, 128, 18, 3);
            canvas.draw_line(60, 18, 64, 26);
            canvas.draw_line(64, 26, 68, 18);
            canvas.set_color(Color::White);
            canvas.draw_line(60, 17, 68, 17);
            canvas.draw_box(62, 21, 5, 2);
            canvas.set_color(Color::Black);

            canvas.set_font(Font::Primary);
            scrollable_text_line(
                canvas,
                x,
                y - height / 2 - 8,
                126,
                &item.label,
                snapshot.scroll_for(snapshot.position),
                false,
                true,
            );
        } else {
            x += (width + 6) * offset;
            y += 2;
            slightly_rounded_frame(
                canvas,
                x - width / 2,
                y - height / 2,
                width as u32,
                height as u32,
            );
        }
        centered_icon(canvas, &item.icon, x - 7, y - 7, 14, 14);
    }
    scrollbar_horizontal(canvas, 0, 64, 128, position, count);
}

/// Rotated display, eight 16 px rows.
fn render_column<C: Canvas + ?Sized>(canvas: &mut C, snapshot: &MenuSnapshot) {
    canvas.set_orientation(Orientation::Vertical);
    canvas.set_font(Font::Secondary);
    for row in 0..WINDOW_ROWS {
        let index = snapshot.viewport_offset + row;
        let Some(item) = snapshot.items.get(index) else {
            continue;
        };
        let y = 16 * row as i32;
        let selected = index == snapshot.position;
        if selected {
            slightly_rounded_box(canvas, 0, y, 64, 16);
            canvas.set_color(Color::White);
        }
        centered_icon(canvas, &item.icon, 0, y, 16, 16);
        scrollable_text_line(
            canvas,
            17,
            y + 12,
            46,
            short_label(&item.label),
            snapshot.scroll_for(index),
            false,
            false,
        );
        if selected {
            canvas.set_color(Color::Black);
        }
    }
    canvas.set_orientation(Orientation::Horizontal);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::model::ItemSnapshot;
    use lcdmenu_core::PLUGINS_14;
    use lcdmenu_render::{DrawCommand, RecordingCanvas};

    fn snapshot(labels: &[&'static str], position: usize) -> MenuSnapshot {
        MenuSnapshot {
            items: labels
                .iter()
                .map(|label| ItemSnapshot {
                    label: (*label).into(),
                    icon: IconAnimation::new(&PLUGINS_14),
                })
                .collect(),
            position,
            scroll_counter: 0,
            viewport_offset: 0,
        }
    }

    fn draw(snap: &MenuSnapshot, style: MenuStyle) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        render(&mut canvas, snap, style);
        canvas
    }

    #[test]
    fn empty_menu_draws_placeholder_in_every_style() {
        for style in MenuStyle::ALL {
            let canvas = draw(&MenuSnapshot::default(), style);
            assert_eq!(canvas.texts().collect::<Vec<_>>(), [EMPTY_LABEL]);
            assert_eq!(canvas.icons().count(), 0);
        }
    }

    #[test]
    fn list_shows_neighbours_around_selection() {
        let canvas = draw(&snapshot(&["A", "B", "C", "D"], 0), MenuStyle::List);
        assert_eq!(canvas.texts().collect::<Vec<_>>(), ["D", "A", "B"]);
        let middle = canvas
            .commands()
            .iter()
            .find(|cmd| matches!(cmd, DrawCommand::Text { text, .. } if text == "A"));
        assert!(matches!(
            middle,
            Some(DrawCommand::Text {
                x: 22,
                y: 36,
                font: Font::Primary,
                ..
            })
        ));
    }

    #[test]
    fn list_icons_are_centered_in_rows() {
        let canvas = draw(&snapshot(&["A", "B", "C"], 1), MenuStyle::List);
        assert_eq!(
            canvas.icons().map(|(x, y, _)| (x, y)).collect::<Vec<_>>(),
            [(4, 3), (4, 25), (4, 47)]
        );
    }

    #[test]
    fn grid_uses_synonyms_and_highlights_selection() {
        let canvas = draw(
            &snapshot(&["Applications", "Sub-GHz", "[T] NFC"], 1),
            MenuStyle::Wii,
        );
        assert_eq!(canvas.texts().collect::<Vec<_>>(), ["Apps", "SubGHz", "NFC"]);
        assert!(canvas.commands().contains(&DrawCommand::RoundedBox {
            x: 1,
            y: 32,
            width: 40,
            height: 30,
            radius: 1,
            color: Color::Black,
        }));
        let selected_text_color = canvas.commands().iter().find_map(|cmd| match cmd {
            DrawCommand::Text { text, color, .. } if text == "SubGHz" => Some(*color),
            _ => None,
        });
        assert_eq!(selected_text_color, Some(Color::White));
        assert_eq!(canvas.color(), Color::Black);
    }

    #[test]
    fn carousel_center_label_and_caption() {
        let canvas = draw(&snapshot(&["A", "B", "C", "D", "E"], 4), MenuStyle::Dsi);
        let texts: Vec<_> = canvas.texts().collect();
        assert_eq!(texts, ["S", "TAR", "T", "E"]);
        assert!(canvas.commands().contains(&DrawCommand::RoundedFrame {
            x: 0,
            y: 0,
            width: 128,
            height: 18,
            radius: 3,
            color: Color::Black,
        }));
        // Center icon sits in the 14x14 box around (64, 36).
        assert!(canvas.icons().any(|(x, y, _)| (x, y) == (57, 29)));
    }

    #[test]
    fn grid_scrolls_window_past_second_column() {
        let labels = [
            "Item 0", "Item 1", "Item 2", "Item 3", "Item 4", "Item 5", "Item 6", "Item 7",
            "Item 8", "Item 9",
        ];

        let canvas = draw(&snapshot(&labels, 5), MenuStyle::Wii);
        assert_eq!(
            canvas.texts().collect::<Vec<_>>(),
            ["Item 2", "Item 3", "Item 4", "Item 5", "Item 6", "Item 7"]
        );
        // Item 5 is the bottom of the middle column.
        assert!(canvas.commands().contains(&DrawCommand::RoundedBox {
            x: 44,
            y: 32,
            width: 40,
            height: 30,
            radius: 1,
            color: Color::Black,
        }));

        // Last column: the window ends on the final pair.
        let canvas = draw(&snapshot(&labels, 8), MenuStyle::Wii);
        assert_eq!(
            canvas.texts().collect::<Vec<_>>(),
            ["Item 4", "Item 5", "Item 6", "Item 7", "Item 8", "Item 9"]
        );
        assert!(canvas.commands().contains(&DrawCommand::RoundedBox {
            x: 87,
            y: 0,
            width: 40,
            height: 30,
            radius: 1,
            color: Color::Black,
        }));
    }

    #[test]
    fn grid_odd_count_last_column_holds_lone_item() {
        let labels = ["A", "B", "C", "D", "E", "F", "G", "H", "I"];
        let canvas = draw(&snapshot(&labels, 8), MenuStyle::Wii);
        assert_eq!(canvas.texts().collect::<Vec<_>>(), ["E", "F", "G", "H", "I"]);
    }

    #[test]
    fn column_draws_window_from_offset() {
        let mut snap = snapshot(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"], 6);
        snap.viewport_offset = 3;
        let canvas = draw(&snap, MenuStyle::Vertical);
        assert_eq!(
            canvas.texts().collect::<Vec<_>>(),
            ["D", "E", "F", "G", "H", "I", "J", "K"]
        );
        // Row 3 of the window holds the selection.
        assert!(canvas.commands().contains(&DrawCommand::RoundedBox {
            x: 0,
            y: 48,
            width: 64,
            height: 16,
            radius: 1,
            color: Color::Black,
        }));

        // Clipped at the end of the list.
        snap.viewport_offset = 8;
        snap.position = 9;
        let canvas = draw(&snap, MenuStyle::Vertical);
        assert_eq!(canvas.texts().collect::<Vec<_>>(), ["I", "J", "K"]);
        assert_eq!(canvas.icons().count(), 3);
    }

    #[test]
    fn only_selected_label_scrolls() {
        const LONG: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let mut snap = snapshot(&[LONG, LONG, LONG], 1);

        snap.scroll_counter = 1;
        let canvas = draw(&snap, MenuStyle::List);
        assert!(canvas.texts().all(|t| t.starts_with("ABC")));

        snap.scroll_counter = 3;
        let canvas = draw(&snap, MenuStyle::List);
        let texts: Vec<_> = canvas.texts().collect();
        assert_eq!(texts.len(), 3);
        assert!(texts[0].starts_with("ABC"));
        assert!(texts[1].starts_with("CDE"), "selected row skips two: {}", texts[1]);
        assert!(texts[2].starts_with("ABC"));

        // Same rule in the column layout.
        let canvas = draw(&snap, MenuStyle::Vertical);
        let texts: Vec<_> = canvas.texts().collect();
        assert!(texts[0].starts_with("ABC"));
        assert!(texts[1].starts_with("CDE"));
        assert!(texts[2].starts_with("ABC"));
    }

    #[test]
    fn column_restores_orientation() {
        let canvas = draw(&snapshot(&["[x] One", "Two"], 0), MenuStyle::Vertical);
        assert_eq!(canvas.orientation(), Orientation::Horizontal);
        assert_eq!(canvas.texts().collect::<Vec<_>>(), ["One", "Two"]);
        assert_eq!(
            canvas.commands()[1],
            DrawCommand::Orientation(Orientation::Vertical)
        );
    }
}
