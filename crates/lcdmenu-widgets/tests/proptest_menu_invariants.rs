#![forbid(unsafe_code)]

//! Property tests for selection movement.
//!
//! Navigation is exercised both through the pure transition function and
//! through a live menu, for every layout style.

use lcdmenu_core::{InputEvent, InputKey, MenuStyle};
use lcdmenu_render::RecordingCanvas;
use lcdmenu_widgets::View;
use lcdmenu_widgets::menu::navigation::{Cursor, Direction, WINDOW_ROWS, navigate, seat_window};
use lcdmenu_widgets::menu::Menu;
use proptest::prelude::*;

fn style_strategy() -> impl Strategy<Value = MenuStyle> {
    prop_oneof![
        Just(MenuStyle::List),
        Just(MenuStyle::Wii),
        Just(MenuStyle::Dsi),
        Just(MenuStyle::Vertical),
    ]
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn key_for(direction: Direction) -> InputKey {
    match direction {
        Direction::Up => InputKey::Up,
        Direction::Down => InputKey::Down,
        Direction::Left => InputKey::Left,
        Direction::Right => InputKey::Right,
    }
}

proptest! {
    #[test]
    fn position_stays_in_range(
        style in style_strategy(),
        count in 1usize..40,
        moves in prop::collection::vec(direction_strategy(), 0..80),
    ) {
        let mut cursor = Cursor::default();
        for direction in moves {
            if let Some(next) = navigate(style, direction, cursor, count) {
                cursor = next;
            }
            prop_assert!(cursor.position < count);
            prop_assert!(cursor.viewport_offset <= count.saturating_sub(WINDOW_ROWS));
        }
    }

    #[test]
    fn linear_styles_keep_selection_in_window(
        style in prop_oneof![Just(MenuStyle::List), Just(MenuStyle::Vertical)],
        count in 1usize..40,
        start in 0usize..40,
        moves in prop::collection::vec(direction_strategy(), 0..80),
    ) {
        let start = start % count;
        let mut cursor = Cursor::new(start, seat_window(style, start, count));
        prop_assert!(cursor.position >= cursor.viewport_offset);
        prop_assert!(cursor.position < cursor.viewport_offset + WINDOW_ROWS);
        for direction in moves {
            if let Some(next) = navigate(style, direction, cursor, count) {
                cursor = next;
            }
            prop_assert!(cursor.position >= cursor.viewport_offset);
            prop_assert!(cursor.position < cursor.viewport_offset + WINDOW_ROWS);
        }
    }

    #[test]
    fn linear_forward_then_back_is_identity(
        count in 1usize..40,
        start in 0usize..40,
    ) {
        let start = start % count;
        for (style, fwd, back) in [
            (MenuStyle::List, Direction::Down, Direction::Up),
            (MenuStyle::Vertical, Direction::Right, Direction::Left),
            (MenuStyle::Dsi, Direction::Right, Direction::Left),
        ] {
            let cursor = Cursor::new(start, 0);
            let there = navigate(style, fwd, cursor, count).expect("handled");
            let back_again = navigate(style, back, there, count).expect("handled");
            prop_assert_eq!(back_again.position, start);
        }
    }

    #[test]
    fn selected_item_stays_in_window_after_jump(
        style in style_strategy(),
        count in 1usize..40,
        start in 0usize..40,
        moves in prop::collection::vec(direction_strategy(), 0..60),
    ) {
        let menu = Menu::with_style(0, style);
        for i in 0..count {
            menu.add_item(format!("Entry number {i}"), None, i as u32, None);
        }
        menu.set_selected_item(start % count);
        let view = menu.view();
        let in_window = |menu: &Menu| {
            let (position, offset) = (menu.selected(), menu.viewport_offset());
            offset <= position && position < offset + WINDOW_ROWS
        };
        prop_assert!(in_window(&menu));
        for direction in moves {
            view.input(InputEvent::short(key_for(direction)));
            prop_assert!(in_window(&menu), "after {:?}", direction);
        }
    }

    #[test]
    fn carousel_slots_are_distinct(count in 5usize..60, position in 0usize..60) {
        let position = position % count;
        let mut slots: Vec<usize> = (-2i64..=2)
            .map(|i| (position as i64 + count as i64 + i).rem_euclid(count as i64) as usize)
            .collect();
        prop_assert_eq!(slots[2], position);
        slots.sort_unstable();
        slots.dedup();
        prop_assert_eq!(slots.len(), 5);
    }

    #[test]
    fn grid_left_right_are_inverse_away_from_wrap(
        count in 1usize..40,
        position in 0usize..40,
    ) {
        let position = position % count;
        let cursor = Cursor::new(position, 0);
        let right = navigate(MenuStyle::Wii, Direction::Right, cursor, count).expect("handled");
        let odd_wrap = count % 2 == 1 && position + 2 >= count;
        if !odd_wrap {
            let left = navigate(MenuStyle::Wii, Direction::Left, right, count).expect("handled");
            prop_assert_eq!(left.position, position);
        }
    }

    #[test]
    fn grid_up_down_stay_in_column(count in 2usize..40, position in 0usize..40) {
        let position = position % count;
        let next = navigate(MenuStyle::Wii, Direction::Up, Cursor::new(position, 0), count)
            .expect("handled");
        if count % 2 == 1 && position == count - 1 {
            // The unpaired last item steps back to the previous column.
            prop_assert_eq!(next.position, position - 1);
        } else {
            prop_assert_eq!(next.position / 2, position / 2);
            prop_assert_ne!(next.position, position);
        }
    }

    #[test]
    fn live_menu_matches_pure_navigation(
        style in style_strategy(),
        count in 1usize..20,
        moves in prop::collection::vec(direction_strategy(), 0..40),
    ) {
        let menu = Menu::with_style(0, style);
        for i in 0..count {
            menu.add_item(format!("Entry number {i}"), None, i as u32, None);
        }
        let view = menu.view();
        let mut cursor = Cursor::default();
        let mut canvas = RecordingCanvas::new();
        for direction in moves {
            prop_assert!(view.input(InputEvent::short(key_for(direction))));
            if let Some(next) = navigate(style, direction, cursor, count) {
                cursor = next;
            }
            prop_assert_eq!(menu.selected(), cursor.position);
            prop_assert_eq!(menu.viewport_offset(), cursor.viewport_offset);
            view.draw(&mut canvas);
        }
    }
}
