use super::*;

#[test]
fn hidden_in_quiet_mode_still_counts() {
    let progress = FetchProgress::new(3, true);
    progress.set_message("a/b");
    progress.inc();
    progress.inc();
    assert_eq!(progress.position(), 2);
    progress.finish();
}

#[test]
fn hidden_without_tty() {
    let progress = FetchProgress::new_with_visibility(5, false, false);
    assert!(progress.progress_bar.is_hidden());
    progress.finish();
}

#[test]
fn visible_bar_on_tty() {
    let progress = FetchProgress::new_with_visibility(5, false, true);
    progress.inc();
    assert_eq!(progress.position(), 1);
    progress.finish();
}
