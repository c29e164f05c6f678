//! Property tests for the deferred action timer.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use lookatme::application::TimerPurpose;
use lookatme::domain::services::DeferredActionTimer;

fn purpose() -> impl Strategy<Value = TimerPurpose> {
    prop_oneof![
        Just(TimerPurpose::Unlock),
        Just(TimerPurpose::SettingsReveal),
        Just(TimerPurpose::SoundStart),
        Just(TimerPurpose::CrackEffect),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An action cancelled before its delay never comes due.
    #[test]
    fn property_cancelled_action_never_fires(
        purpose in purpose(),
        delay_ms in 1u64..10_000,
        cancel_fraction in 0.0f64..1.0,
        poll_after_ms in 0u64..60_000,
    ) {
        let start = Instant::now();
        let mut timer = DeferredActionTimer::new();
        let handle = timer.schedule(purpose, "fired", Duration::from_millis(delay_ms), start);

        let cancel_at = (delay_ms as f64 * cancel_fraction) as u64;
        prop_assert!(timer.poll(start + Duration::from_millis(cancel_at)).is_empty());
        prop_assert!(timer.cancel(handle));

        prop_assert!(timer.poll(start + Duration::from_millis(poll_after_ms)).is_empty());
        prop_assert!(timer.is_empty());
    }

    /// PROPERTY: Due actions come out in due order, each exactly once.
    #[test]
    fn property_poll_returns_due_order(
        delays in proptest::collection::vec((purpose(), 0u64..5_000), 1..8),
    ) {
        let start = Instant::now();
        let mut timer = DeferredActionTimer::new();
        for (purpose, delay) in &delays {
            timer.schedule(*purpose, *delay, Duration::from_millis(*delay), start);
        }

        let fired = timer.poll(start + Duration::from_secs(10));
        let fired_delays: Vec<u64> = fired.iter().map(|(_, d)| *d).collect();

        let mut sorted = fired_delays.clone();
        sorted.sort();
        prop_assert_eq!(&fired_delays, &sorted);

        // Rescheduling a purpose replaces it, so one action per distinct purpose
        let fired_purposes: HashSet<_> = fired.iter().map(|(p, _)| *p).collect();
        let scheduled_purposes: HashSet<_> = delays.iter().map(|(p, _)| *p).collect();
        prop_assert_eq!(fired.len(), fired_purposes.len());
        prop_assert_eq!(fired_purposes, scheduled_purposes);
        prop_assert!(timer.is_empty());
    }
}
