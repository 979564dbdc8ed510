use ackermann_events::Event;

/// Built-in feed: a car heading up and to the right, steering progressively
/// left, briefly reporting a perpendicular (singular) steering angle, then
/// steering right. Position fixes start later than the first steering sample.
pub fn events() -> Vec<Event> {
    vec![
        Event::velocity(0.5, 0.0, 2.0),
        Event::position(1.0, 2.0, 3.0),
        Event::velocity(1.5, 12.0, 2.0),
        Event::position(2.0, 3.0, 4.0),
        Event::velocity(2.5, 25.0, 2.0),
        Event::position(3.0, 4.0, 5.0),
        Event::velocity(3.0, 90.0, 2.0),
        Event::velocity(3.5, -18.0, 2.0),
        Event::position(4.0, 5.0, 6.0),
    ]
}
