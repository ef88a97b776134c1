use embedded_hal::digital::OutputPin;
use pretty_assertions::assert_eq;
use zone::Zone;

use crate::{LedGrid, LedMask, Polarity, mock::MockBoard};

#[test]
fn new_grid_starts_dark() {
    for polarity in [Polarity::ActiveHigh, Polarity::ActiveLow] {
        let board = MockBoard::new(polarity);
        let grid = LedGrid::new(board.pins(), polarity);

        assert_eq!(board.lit(), LedMask::NONE);
        assert_eq!(grid.lit(), LedMask::NONE);
    }
}

#[test]
fn after_clear_and_render_exactly_one_led_is_lit() {
    for polarity in [Polarity::ActiveHigh, Polarity::ActiveLow] {
        let board = MockBoard::new(polarity);
        let mut grid = LedGrid::new(board.pins(), polarity);

        for zone in Zone::PRIORITY {
            grid.clear_all();
            grid.render(zone);

            assert_eq!(board.lit(), LedMask::for_zone(zone));
            assert_eq!(board.lit().count(), 1);
            assert!(board.lit().is_lit(zone.led_index()));
            assert_eq!(grid.lit(), board.lit());
        }
    }
}

#[test]
fn render_twice_keeps_the_same_led() {
    let board = MockBoard::new(Polarity::ActiveLow);
    let mut grid = LedGrid::new(board.pins(), Polarity::ActiveLow);

    grid.clear_all();
    grid.render(Zone::TopRight);
    board.reset_peak();
    grid.render(Zone::TopRight);

    assert_eq!(board.lit(), LedMask::for_zone(Zone::TopRight));
    assert_eq!(board.peak_lit(), 1);
}

#[test]
fn render_without_clear_never_lights_two() {
    let board = MockBoard::new(Polarity::ActiveHigh);
    let mut grid = LedGrid::new(board.pins(), Polarity::ActiveHigh);

    grid.render(Zone::BottomLeft);
    board.reset_peak();
    grid.render(Zone::TopRight);

    assert_eq!(board.lit(), LedMask::for_zone(Zone::TopRight));
    assert_eq!(board.peak_lit(), 1);
}

#[test]
fn active_low_drives_the_lit_pin_low() {
    let board = MockBoard::new(Polarity::ActiveLow);
    let mut grid = LedGrid::new(board.pins(), Polarity::ActiveLow);

    grid.render(Zone::Center);

    assert_eq!(
        board.levels(),
        [true, true, true, true, false, true, true, true, true]
    );
}

#[test]
fn set_led_updates_the_mask() {
    let board = MockBoard::new(Polarity::ActiveHigh);
    let mut grid = LedGrid::new(board.pins(), Polarity::ActiveHigh);

    grid.set_led(2, true);
    grid.set_led(6, true);
    assert_eq!(grid.lit().bits(), 0b0_0100_0100);
    assert_eq!(board.lit(), grid.lit());

    grid.set_led(2, false);
    assert_eq!(grid.lit().bits(), 0b0_0100_0000);

    grid.clear_all();
    assert_eq!(board.lit(), LedMask::NONE);
}

#[test]
fn zone_masks_match_led_indices() {
    assert_eq!(LedMask::for_zone(Zone::TopLeft).bits(), 0b0_0000_0001);
    assert_eq!(LedMask::for_zone(Zone::Center).bits(), 0b0_0001_0000);
    assert_eq!(LedMask::for_zone(Zone::BottomRight).bits(), 0b1_0000_0000);
}

#[test]
#[should_panic]
fn set_led_past_the_grid_panics() {
    let board = MockBoard::new(Polarity::ActiveHigh);
    let mut grid = LedGrid::new(board.pins(), Polarity::ActiveHigh);

    grid.set_led(9, true);
}

#[test]
fn release_hands_back_pins_in_their_last_state() {
    let board = MockBoard::new(Polarity::ActiveHigh);
    let mut grid = LedGrid::new(board.pins(), Polarity::ActiveHigh);
    grid.render(Zone::MiddleRight);

    let mut pins = grid.release();
    assert_eq!(board.lit(), LedMask::for_zone(Zone::MiddleRight));

    // Released pins are driven directly, without the grid's bookkeeping.
    pins[0].set_high().unwrap();
    assert_eq!(board.lit().count(), 2);
}
