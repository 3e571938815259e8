//! Tests for series progress tracking

#[cfg(test)]
mod tests {
    use quilter::io::progress::ProgressManager;
    use quilter::series::classifier::SeriesKey;
    use std::time::Duration;

    // Tests completed series are counted in order
    // Verified by not incrementing the bar on completion
    #[test]
    fn test_progress_counts_completed_series() {
        let mut progress = ProgressManager::hidden(3);
        let first = SeriesKey::new("a", "png");
        let second = SeriesKey::new("b", "png");

        progress.start_series(&first, 4);
        progress.complete_series(&first, Duration::from_millis(5));
        progress.start_series(&second, 2);
        progress.complete_series(&second, Duration::from_millis(7));

        assert_eq!(progress.position(), 2);
        let keys: Vec<&str> = progress
            .completed()
            .iter()
            .map(|(key, _)| key.as_str())
            .collect();
        assert_eq!(keys, vec!["a_png", "b_png"]);
        progress.finish();
    }

    // Tests a fresh manager has nothing completed
    // Verified by seeding the completion list
    #[test]
    fn test_progress_starts_empty() {
        let progress = ProgressManager::hidden(0);
        assert_eq!(progress.position(), 0);
        assert!(progress.completed().is_empty());
        progress.finish();
    }
}
