//! Concurrency Tests

use std::sync::Arc;
use std::thread;
use ukit_stopwatch::Stopwatch;

const THREADS: usize = 8;
const CYCLES: u64 = 200;

#[test]
fn test_shared_timer_counts_every_cycle() {
    let stopwatch = Stopwatch::new();

    thread::scope(|scope| {
        for worker in 0..THREADS {
            let stopwatch = &stopwatch;
            scope.spawn(move || {
                let name = format!("worker-{worker}");
                for _ in 0..CYCLES {
                    stopwatch.start(&name);
                    stopwatch.stop(&name);
                }
            });
        }
    });

    assert_eq!(stopwatch.len(), THREADS);
    for worker in 0..THREADS {
        assert_eq!(
            stopwatch.timer_stats(&format!("worker-{worker}")).count,
            CYCLES
        );
    }
}

#[test]
fn test_arc_shared_across_threads() {
    let stopwatch = Arc::new(Stopwatch::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let stopwatch = Arc::clone(&stopwatch);
            thread::spawn(move || {
                for _ in 0..CYCLES {
                    stopwatch.measure("shared", || ());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Interleaved starts fold into one run, so the count can only drop below
    // the number of cycles, never exceed it.
    let stats = stopwatch.timer_stats("shared");
    assert!(stats.count >= 1);
    assert!(stats.count <= THREADS as u64 * CYCLES);
    assert_eq!(stopwatch.names(), vec!["shared"]);
    assert!(!stopwatch.is_running("shared"));
}

#[test]
fn test_stats_while_others_run() {
    let stopwatch = Stopwatch::new();

    thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..CYCLES {
                stopwatch.start("writer");
                stopwatch.stop("writer");
            }
        });
        scope.spawn(|| {
            for _ in 0..20 {
                let stats = stopwatch.stats();
                assert!(stats.starts_with("Stopwatch Results:\n"));
            }
        });
    });

    assert!(!stopwatch.is_running("writer"));
}
