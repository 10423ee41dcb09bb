use parking_attendant::desk::report::StatusFormat;
use parking_attendant::desk::{FrontDesk, RequestError};
use parking_attendant::facility::{ParkingError, ParkingStrategy};

fn ticket_of(confirmation: &str) -> String {
    confirmation
        .strip_prefix("Car parked with ticket id ")
        .expect("park confirmation")
        .to_string()
}

#[test]
fn desk_session_covers_every_request() {
    let mut desk = FrontDesk::new(ParkingStrategy::HighestCapacity);

    assert_eq!(desk.status(), Err(RequestError::NoParkingLotConfigured));
    desk.setup("2,1").expect("valid layout");

    let first = ticket_of(&desk.park("A1").expect("room"));
    desk.park("A2").expect("room");
    desk.park("A3").expect("room");
    assert_eq!(
        desk.park("A4"),
        Err(RequestError::Parking(ParkingError::UnavailablePosition))
    );
    assert_eq!(
        desk.park("A1"),
        Err(RequestError::Parking(ParkingError::ParkedTwice))
    );

    assert_eq!(
        desk.unpark(&first),
        Ok("Car A1 successfully unparked!".to_string())
    );
    let status = desk.status().expect("configured");
    assert!(status.starts_with("Parking Lot Status:\nLot #1: 1 spaces left\n"));
    assert!(status.contains("Lot #2: 0 spaces left\n"));
    assert!(!status.contains(&first));
}

#[test]
fn error_messages_are_user_presentable() {
    let mut desk = FrontDesk::default();

    let messages: Vec<String> = vec![
        desk.setup("a,b").unwrap_err().to_string(),
        desk.park("B1234").unwrap_err().to_string(),
    ];
    assert_eq!(messages, ["invalid input", "parking lot hasn't been set up"]);

    desk.setup("1").expect("valid layout");
    assert_eq!(
        desk.unpark("nope").unwrap_err().to_string(),
        "unrecognized parking ticket"
    );
    desk.park("B1234").expect("room");
    assert_eq!(desk.park("B1234").unwrap_err().to_string(), "car already inside");
    assert_eq!(desk.park("C1").unwrap_err().to_string(), "no available position");
}

#[test]
fn status_report_renders_every_format() {
    let mut desk = FrontDesk::default();
    desk.setup("1,2").expect("valid layout");
    let ticket = ticket_of(&desk.park("B1234").expect("room"));
    let report = desk.status_report().expect("configured");

    let text = report.render(StatusFormat::Text).expect("text");
    let json = report.render(StatusFormat::Json).expect("json");
    let csv = report.render(StatusFormat::Csv).expect("csv");

    assert!(text.contains(&format!("#{ticket} B1234")));
    assert!(json.contains("\"plate_number\": \"B1234\""));
    assert!(csv.contains(&format!("1,1,0,{ticket},B1234")));
}
