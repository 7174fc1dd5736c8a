use flamewright::ingest::build_intervals;
use flamewright::profile::{EventKind, FrameTable, ProfileEvent};
use flamewright::utils::IngestError;

fn table(names: &[&str]) -> FrameTable {
    let mut frames = FrameTable::new();
    for name in names {
        frames.push(*name, None, None);
    }
    frames
}

fn open(at: f64, frame: usize) -> ProfileEvent {
    ProfileEvent {
        kind: EventKind::Open,
        at,
        frame,
    }
}

fn close(at: f64, frame: usize) -> ProfileEvent {
    ProfileEvent {
        kind: EventKind::Close,
        at,
        frame,
    }
}

#[test]
fn test_one_interval_per_matched_pair() {
    let frames = table(&["a", "b", "c"]);
    let events = vec![
        open(0.0, 0),
        open(1.0, 1),
        close(2.0, 1),
        open(3.0, 2),
        close(4.0, 2),
        close(5.0, 0),
    ];

    let intervals = build_intervals(&events, &frames).unwrap();

    assert_eq!(intervals.len(), 3);
    for iv in &intervals {
        assert!(iv.end >= iv.start);
    }
}

#[test]
fn test_output_is_close_order() {
    let frames = table(&["root", "child"]);
    let events = vec![open(0.0, 0), open(1.0, 1), close(2.0, 1), close(5.0, 0)];

    let intervals = build_intervals(&events, &frames).unwrap();

    // The child closes first, so it is emitted first
    assert_eq!(intervals[0].frame, 1);
    assert_eq!(intervals[1].frame, 0);
}

#[test]
fn test_depth_counts_enclosing_frames() {
    let frames = table(&["root", "mid", "leaf"]);
    let events = vec![
        open(0.0, 0),
        open(1.0, 1),
        open(2.0, 2),
        close(3.0, 2),
        close(4.0, 1),
        close(5.0, 0),
    ];

    let intervals = build_intervals(&events, &frames).unwrap();

    let leaf = intervals.iter().find(|iv| iv.frame == 2).unwrap();
    let mid = intervals.iter().find(|iv| iv.frame == 1).unwrap();
    let root = intervals.iter().find(|iv| iv.frame == 0).unwrap();
    assert_eq!(leaf.depth, 2);
    assert_eq!(mid.depth, 1);
    assert_eq!(root.depth, 0);
}

#[test]
fn test_interval_spans_open_to_close() {
    let frames = table(&["a"]);
    let events = vec![open(1.5, 0), close(7.25, 0)];

    let intervals = build_intervals(&events, &frames).unwrap();

    assert_eq!(intervals[0].start, 1.5);
    assert_eq!(intervals[0].end, 7.25);
    assert_eq!(intervals[0].width(), 5.75);
}

#[test]
fn test_mismatched_close_fails() {
    let frames = table(&["a", "b"]);
    let events = vec![open(0.0, 0), open(1.0, 1), close(2.0, 0), close(3.0, 1)];

    let err = build_intervals(&events, &frames).unwrap_err();

    assert!(matches!(
        err,
        IngestError::MismatchedClose {
            expected: 1,
            found: 0,
            ..
        }
    ));
}

#[test]
fn test_close_on_empty_stack_fails() {
    let frames = table(&["a"]);
    let events = vec![close(1.0, 0)];

    let err = build_intervals(&events, &frames).unwrap_err();

    assert!(matches!(err, IngestError::UnexpectedClose { frame: 0, .. }));
}

#[test]
fn test_unclosed_frames_fail() {
    let frames = table(&["a", "b"]);
    let events = vec![open(0.0, 0), open(1.0, 1), close(1.0, 1)];

    let err = build_intervals(&events, &frames).unwrap_err();

    assert!(matches!(err, IngestError::UnclosedFrames { count: 1 }));
}

#[test]
fn test_unknown_frame_index_fails() {
    let frames = table(&["a"]);
    let events = vec![open(0.0, 7)];

    let err = build_intervals(&events, &frames).unwrap_err();

    assert!(matches!(err, IngestError::UnknownFrame { index: 7, .. }));
}

#[test]
fn test_empty_stream_yields_no_intervals() {
    let frames = table(&[]);
    let intervals = build_intervals(&[], &frames).unwrap();
    assert!(intervals.is_empty());
}

#[test]
fn test_deep_nesting_does_not_recurse() {
    // Well past any default call-stack limit if ingestion recursed
    let frames = table(&["f"]);
    let depth = 100_000;
    let mut events = Vec::with_capacity(depth * 2);
    for i in 0..depth {
        events.push(open(i as f64, 0));
    }
    for i in 0..depth {
        events.push(close((depth + i) as f64, 0));
    }

    let intervals = build_intervals(&events, &frames).unwrap();

    assert_eq!(intervals.len(), depth);
    assert_eq!(intervals.last().unwrap().depth, 0);
}
