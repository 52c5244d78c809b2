use cinema_booking::{config::Config, console, AppState};
use std::io::Cursor;

fn state() -> AppState {
    let mut config = Config::default();
    config.auth.bcrypt_cost = 4;
    AppState::new(config).expect("state should build")
}

fn run_script(state: &mut AppState, script: &str) -> String {
    let mut out = Vec::new();
    console::run(state, Cursor::new(script.to_string()), &mut out)
        .expect("session should succeed");
    String::from_utf8(out).expect("output is utf-8")
}

#[test]
fn register_book_and_review() {
    let mut state = state();
    let script = "\
1
neo
matrix
1
2
1
1, 2, 11
2
1
2
3
4
";
    let out = run_script(&mut state, script);

    assert!(out.contains("User registered successfully."));
    assert!(out.contains("1. Inception at 5:00 PM on Screen 1 (10/10 seats available)"));
    assert!(out.contains("Invalid seat: 11"));
    assert!(out.contains(
        "Booking Confirmed:\nBooking for Inception at 5:00 PM on Screen 1\nSeats: 1 2"
    ));
    // second attempt at seat 2
    assert!(out.contains("Seat 2 - Booked"));
    assert!(out.contains("Seat 2 already booked."));
    assert!(out.contains("No seats booked."));
    assert!(out.contains(
        "1. Booking for Inception at 5:00 PM on Screen 1\nSeats: 1 2\nBooked at: "
    ));
    assert!(!out.contains("2. Booking for"));
    assert!(out.trim_end().ends_with("Goodbye!"));

    let user = state.users.get("neo").unwrap();
    assert_eq!(user.bookings.len(), 1);
}

#[test]
fn duplicate_registration_then_login() {
    let mut state = state();
    run_script(&mut state, "1\ntrinity\nwhite-rabbit\n4\n");

    let out = run_script(
        &mut state,
        "1\ntrinity\nother\n2\ntrinity\nbad\n2\ntrinity\nwhite-rabbit\n3\n4\n",
    );

    assert!(out.contains("Username already exists."));
    assert!(out.contains("Invalid credentials."));
    assert!(out.contains("Login successful!"));
    assert!(out.contains("No bookings yet."));
}

#[test]
fn cancelling_frees_seats_for_others() {
    let mut state = state();
    run_script(&mut state, "1\nmorpheus\nred\n2\n2\n5,6\n5\n1\n4\n");

    let screen = state.catalog.screen(2).unwrap();
    assert_eq!(screen.available_count(), 10);

    let out = run_script(&mut state, "1\ncypher\nsteak\n2\n2\n5\n4\n");
    assert!(out.contains(
        "Booking Confirmed:\nBooking for Titanic at 8:00 PM on Screen 2\nSeats: 5"
    ));
}

#[test]
fn end_of_input_in_main_menu_says_goodbye() {
    let mut state = state();
    let out = run_script(&mut state, "1\ntank\nop\n1\n");
    assert!(out.contains("Available Shows:"));
    assert!(out.trim_end().ends_with("Goodbye!"));
}
