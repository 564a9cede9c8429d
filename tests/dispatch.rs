use flying_objects::{is, narrow, Flock, Flyable, FlyingHuman, MallardDuck, ToyAirplane};

fn scenario() -> Flock {
    let mut flock = Flock::new();
    flock.push(FlyingHuman::new("Hussain Naeem", 20.0));
    flock.push(MallardDuck::new(81));
    flock.push(ToyAirplane::new(5300));
    flock
}

#[test]
fn test_three_flyers_three_lines() {
    let mut out = Vec::new();
    assert_eq!(scenario().dispatch(&mut out).unwrap(), 3);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("20"));
    assert!(lines[1].contains("81"));
    assert!(lines[2].contains("5300"));
}

#[test]
fn test_empty_flock_prints_nothing() {
    let mut out = Vec::new();
    assert_eq!(Flock::new().dispatch(&mut out).unwrap(), 0);
    assert!(out.is_empty());
}

#[test]
fn test_duck_narrows_only_to_duck() {
    let duck: Box<dyn Flyable> = Box::new(MallardDuck::default());

    assert!(is::<MallardDuck>(duck.as_ref()));
    assert_eq!(narrow::<MallardDuck>(duck.as_ref()).map(|d| d.wing_span()), Some(81));
    assert!(narrow::<ToyAirplane>(duck.as_ref()).is_none());
}

#[test]
fn test_same_value_different_variants() {
    let duck = MallardDuck::new(100).fly();
    let toy = ToyAirplane::new(100).fly();
    assert_ne!(duck, toy);
}
