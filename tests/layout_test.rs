use approx::assert_relative_eq;
use fastener::{validate, AxialLayout, BoltSpec, HeadStyle, ThreadTable};

fn plan(total: f64, shank: f64) -> AxialLayout {
    let spec = BoltSpec::new("M8x1.25", HeadStyle::Hex, 0.0, total, shank);
    let thread = validate(&spec, ThreadTable::standard()).unwrap();
    AxialLayout::plan(&spec, thread)
}

fn hex_height() -> f64 {
    ThreadTable::standard().lookup("M8x1.25").unwrap().hex_height()
}

#[test]
fn m8_example_offsets() {
    let layout = plan(20.0, 5.0);
    let shank = 5.0 + hex_height() / 2.0;
    assert_eq!(layout.head_offset(), 0.0);
    assert_relative_eq!(layout.effective_shank_length, shank, epsilon = 1e-12);
    assert_relative_eq!(layout.shank_offset, shank / 2.0, epsilon = 1e-12);
    assert_relative_eq!(layout.thread_length, 15.0);
    assert_relative_eq!(layout.thread_offset, 7.5 + shank, epsilon = 1e-12);
    assert!(layout.has_thread());
}

#[test]
fn shank_sinks_half_way_into_the_head() {
    let layout = plan(12.0, 4.0);
    // near face of the shank sits at the head's center
    assert_relative_eq!(layout.shank_offset - layout.effective_shank_length / 2.0, 0.0);
    // far face clears the head by exactly the shank length
    let far = layout.shank_offset + layout.effective_shank_length / 2.0;
    assert_relative_eq!(far - hex_height() / 2.0, 4.0, epsilon = 1e-12);
}

#[test]
fn thread_abuts_shank_without_gap_or_overlap() {
    for (total, shank) in [(20.0, 5.0), (8.0, 0.0), (30.5, 29.5)] {
        let layout = plan(total, shank);
        let shank_end = layout.shank_offset + layout.effective_shank_length / 2.0;
        let thread_start = layout.thread_offset - layout.thread_length / 2.0;
        assert_relative_eq!(thread_start, shank_end, epsilon = 1e-12);
    }
}

#[test]
fn no_thread_when_shank_covers_total() {
    for (total, shank) in [(5.0, 5.0), (3.0, 10.0), (0.0, 0.0)] {
        let layout = plan(total, shank);
        assert_eq!(layout.thread_length, 0.0);
        assert!(!layout.has_thread());
    }
}

#[test]
fn offsets_are_monotonic_in_shank_length() {
    let mut prev = plan(40.0, 0.0);
    for i in 1..=60 {
        let next = plan(40.0, i as f64 * 0.5);
        assert!(next.shank_offset >= prev.shank_offset);
        assert!(next.thread_offset >= prev.thread_offset);
        prev = next;
    }
}

#[test]
fn offsets_are_monotonic_in_total_length() {
    let mut prev = plan(0.0, 6.0);
    for i in 1..=60 {
        let next = plan(i as f64 * 0.5, 6.0);
        assert!(next.shank_offset >= prev.shank_offset);
        assert!(next.thread_offset >= prev.thread_offset);
        prev = next;
    }
}
