//! Unit tests for mouse event types.

use whitecanvas::{CanvasError, Modifiers, MouseButton, MouseEvent, MouseEventType, Point};

#[test]
fn test_button_display_round_trips() {
    for button in [
        MouseButton::Left,
        MouseButton::Middle,
        MouseButton::Right,
        MouseButton::Back,
        MouseButton::Forward,
    ] {
        assert_eq!(button.to_string().parse::<MouseButton>().unwrap(), button);
    }
}

#[test]
fn test_modifiers_parse_is_order_independent() {
    let a: Modifiers = "shift+ctrl".parse().unwrap();
    let b: Modifiers = "ctrl+shift".parse().unwrap();
    let c: Modifiers = "shift+ctrl+shift".parse().unwrap();
    assert_eq!(a, Modifiers::SHIFT | Modifiers::CTRL);
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn test_modifiers_parse_empty_and_invalid() {
    assert_eq!("".parse::<Modifiers>().unwrap(), Modifiers::empty());
    assert_eq!("none".parse::<Modifiers>().unwrap(), Modifiers::empty());
    assert!(matches!(
        "shift+hyper".parse::<Modifiers>(),
        Err(CanvasError::InvalidModifier(_))
    ));
}

#[test]
fn test_modifiers_display() {
    assert_eq!(Modifiers::empty().to_string(), "None");
    assert_eq!((Modifiers::CTRL | Modifiers::SHIFT).to_string(), "Shift+Ctrl");
}

#[test]
fn test_event_constructors() {
    let press = MouseEvent::press(MouseButton::Left, Modifiers::ALT, (1.0, 2.0));
    assert!(press.is_press());
    assert_eq!(press.pos, Point::new(1.0, 2.0));
    assert_eq!(press.modifiers, Modifiers::ALT);

    let moved = MouseEvent::moved(MouseButton::Left, Modifiers::empty(), [3.0, 4.0]);
    assert!(moved.is_move());
    assert!(!moved.is_press());

    let release = MouseEvent::release(MouseButton::Left, Modifiers::empty(), (5.0, 6.0));
    assert!(release.is_release());
    assert_eq!(release.event_type, MouseEventType::Release);
}
