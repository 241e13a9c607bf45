//! Tests for coalesced, debounced render scheduling

#[cfg(test)]
mod tests {
    use barmosaic::render::scheduler::RenderScheduler;
    use std::time::{Duration, Instant};

    const QUIESCENCE: Duration = Duration::from_millis(250);

    #[test]
    fn test_idle_scheduler_never_fires() {
        let mut scheduler = RenderScheduler::new(QUIESCENCE);
        assert!(!scheduler.is_pending());
        assert!(!scheduler.take_due(Instant::now()));
    }

    #[test]
    fn test_request_fires_only_after_quiescence() {
        let mut scheduler = RenderScheduler::new(QUIESCENCE);
        let t0 = Instant::now();

        scheduler.request(t0);
        assert!(scheduler.is_pending());
        assert!(!scheduler.take_due(t0 + Duration::from_millis(100)));
        assert!(scheduler.is_pending());

        assert!(scheduler.take_due(t0 + Duration::from_millis(250)));
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn test_fires_at_most_once_per_burst() {
        let mut scheduler = RenderScheduler::new(QUIESCENCE);
        let t0 = Instant::now();

        scheduler.request(t0);
        assert!(scheduler.take_due(t0 + Duration::from_millis(300)));
        assert!(!scheduler.take_due(t0 + Duration::from_millis(600)));
    }

    #[test]
    fn test_repeated_requests_coalesce_and_restart_the_window() {
        let mut scheduler = RenderScheduler::new(QUIESCENCE);
        let t0 = Instant::now();

        scheduler.request(t0);
        scheduler.request(t0 + Duration::from_millis(200));

        // 250ms after the first request, but only 50ms after the second
        assert!(!scheduler.take_due(t0 + Duration::from_millis(250)));
        assert!(scheduler.take_due(t0 + Duration::from_millis(450)));
    }

    #[test]
    fn test_default_uses_the_configured_resize_quiescence() {
        let mut scheduler = RenderScheduler::default();
        let t0 = Instant::now();
        scheduler.request(t0);
        assert!(!scheduler.take_due(t0 + Duration::from_millis(249)));
        assert!(scheduler.take_due(t0 + Duration::from_millis(250)));
    }
}
