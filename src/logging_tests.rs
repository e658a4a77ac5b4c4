use super::*;

#[test]
fn quiet_takes_precedence() {
    assert_eq!(LogLevel::from_flags(true, true), LogLevel::Quiet);
    assert_eq!(LogLevel::from_flags(false, true), LogLevel::Verbose);
    assert_eq!(LogLevel::from_flags(false, false), LogLevel::Normal);
}

#[test]
fn filters_per_level() {
    assert_eq!(LogLevel::Quiet.filter(), LevelFilter::ERROR);
    assert_eq!(LogLevel::Normal.filter(), LevelFilter::INFO);
    assert_eq!(LogLevel::Verbose.filter(), LevelFilter::DEBUG);
}

#[test]
fn init_twice_is_harmless() {
    init(LogLevel::Quiet);
    init(LogLevel::Verbose);
}
