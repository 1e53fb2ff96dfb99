use std::time::Duration;

use tui_starfield::core::{Scheduler, StarBlinker};
use tui_starfield::term::{encode_diff_into, encode_full_into, HeadlessSurface};

#[test]
fn blink_tic_encodes_a_single_cell_update() {
    let mut surface = HeadlessSurface::new(10, 20);
    let mut sched = Scheduler::new(1).with_tic_duration(Duration::ZERO);
    sched.push(StarBlinker::new(3, 4, '+').with_delay_range(1..=1));

    sched.tic(&mut surface);
    let before = surface.framebuffer().clone();
    sched.tic(&mut surface);

    let mut out = Vec::new();
    encode_diff_into(&before, surface.framebuffer(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches('+').count(), 1);
    assert!(text.contains("\x1b[4;5H"), "{text:?}");
    assert!(text.contains("\x1b[2m"), "dim expected: {text:?}");
}

#[test]
fn quiet_tic_encodes_nothing() {
    let mut surface = HeadlessSurface::new(10, 20);
    let mut sched = Scheduler::new(1).with_tic_duration(Duration::ZERO);
    sched.push(StarBlinker::new(3, 4, '+').with_delay_range(1..=1));

    sched.tic(&mut surface);
    sched.tic(&mut surface);
    let before = surface.framebuffer().clone();
    // Inside the 20-tic dim hold.
    sched.tic(&mut surface);

    let mut out = Vec::new();
    encode_diff_into(&before, surface.framebuffer(), &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn full_redraw_covers_the_grid() {
    let surface = HeadlessSurface::new(5, 7);
    let mut out = Vec::new();
    encode_full_into(surface.framebuffer(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("\r\n").count(), 4);
    assert_eq!(text.matches(' ').count(), 35);
}
