//! End-to-end behavior of the transition engine against a recorded transport.

mod common;

use common::{CountingDelay, RecordingStrip};
use cubelamp_engine::color::{BLACK, WHITE};
use cubelamp_engine::{CubeLayout, Frame, Rgb, fade};
use pretty_assertions::assert_eq;

#[test]
fn fade_black_to_white_renders_exactly_255_ticks() {
    let layout = CubeLayout::new(1).unwrap();
    let mut strip = RecordingStrip::new(layout.led_count());
    let mut delay = CountingDelay::default();

    let mut current = Frame::black(layout);
    let target = Frame::filled(layout, WHITE);
    fade(&mut strip, &mut delay, &mut current, &target, 0);

    assert_eq!(strip.frames.len(), 255);
    assert_eq!(delay.ms_calls, 255);
    assert!(strip.last_frame().iter().all(|&px| px == WHITE));
    assert_eq!(current, target);
}

#[test]
fn fade_with_matching_frames_performs_zero_ticks() {
    let layout = CubeLayout::new(2).unwrap();
    let mut strip = RecordingStrip::new(layout.led_count());
    let mut delay = CountingDelay::default();

    let mut current = Frame::filled(layout, WHITE);
    let target = current.clone();
    fade(&mut strip, &mut delay, &mut current, &target, 10);

    assert!(strip.frames.is_empty());
    assert_eq!(delay.ms_calls, 0);
}

#[test]
fn fade_tick_count_is_the_longest_channel_distance() {
    let layout = CubeLayout::new(1).unwrap();
    let mut strip = RecordingStrip::new(layout.led_count());
    let mut delay = CountingDelay::default();

    let mut current = Frame::black(layout);
    let mut target = Frame::black(layout);
    target.set(0, Rgb::new(40, 0, 0));
    target.set(5, Rgb::new(0, 0, 12));
    fade(&mut strip, &mut delay, &mut current, &target, 0);

    assert_eq!(strip.frames.len(), 40);
    assert_eq!(current, target);
}

#[test]
fn fade_renders_partially_advanced_frames_along_the_way() {
    let layout = CubeLayout::new(1).unwrap();
    let mut strip = RecordingStrip::new(layout.led_count());
    let mut delay = CountingDelay::default();

    let mut current = Frame::black(layout);
    let mut target = Frame::black(layout);
    target.set(2, Rgb::new(3, 200, 0));
    fade(&mut strip, &mut delay, &mut current, &target, 0);

    // first tick: both moving channels advanced by exactly one unit
    assert_eq!(strip.frames[0][2], Rgb::new(1, 1, 0));
    // red settles after 3 ticks and stays put while green keeps climbing
    assert_eq!(strip.frames[5][2], Rgb::new(3, 6, 0));
    assert_eq!(strip.frames.len(), 200);
    // untouched pixels never rendered anything but black
    assert!(strip.frames.iter().all(|frame| frame[0] == BLACK));
}
