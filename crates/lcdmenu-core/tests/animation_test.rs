//! Integration tests for icon animation playback.

use lcdmenu_core::animation::IconAnimation;
use lcdmenu_core::assets::{Icon, PLUGINS_14};
use proptest::prelude::*;
use std::time::Duration;

static BLINK: Icon = Icon {
    width: 1,
    height: 1,
    frame_rate: 2,
    frames: &[&[0x01], &[0x00]],
};

#[test]
fn blink_alternates_every_half_second() {
    let mut anim = IconAnimation::new(&BLINK);
    anim.start();
    assert!(anim.pixel(0, 0));
    anim.tick(Duration::from_millis(500));
    assert!(!anim.pixel(0, 0));
    anim.tick(Duration::from_millis(500));
    assert!(anim.pixel(0, 0));
}

#[test]
fn many_small_ticks_match_one_large_tick() {
    let mut small = IconAnimation::new(&PLUGINS_14);
    let mut large = IconAnimation::new(&PLUGINS_14);
    small.start();
    large.start();
    for _ in 0..100 {
        small.tick(Duration::from_millis(10));
    }
    large.tick(Duration::from_secs(1));
    assert_eq!(small.frame_index(), large.frame_index());
}

#[test]
fn clone_is_independent() {
    let mut anim = IconAnimation::new(&PLUGINS_14);
    anim.start();
    let snapshot = anim.clone();
    anim.tick(Duration::from_secs(1));
    assert_eq!(snapshot.frame_index(), 0);
    assert_ne!(anim.frame_index(), snapshot.frame_index());
}

proptest! {
    #[test]
    fn frame_index_stays_in_range(ticks in proptest::collection::vec(0u64..5_000, 0..64)) {
        let mut anim = IconAnimation::new(&PLUGINS_14);
        anim.start();
        for ms in ticks {
            anim.tick(Duration::from_millis(ms));
            prop_assert!(anim.frame_index() < PLUGINS_14.frame_count());
            prop_assert_eq!(anim.frame().len(), 28);
        }
    }

    #[test]
    fn stopped_animation_never_moves(ticks in proptest::collection::vec(0u64..u64::from(u32::MAX), 0..16)) {
        let mut anim = IconAnimation::new(&PLUGINS_14);
        for ms in ticks {
            anim.tick(Duration::from_millis(ms));
        }
        prop_assert_eq!(anim.frame_index(), 0);
    }
}
