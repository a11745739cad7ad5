use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use blobtap::bot::frame::Frame;
use blobtap::bot::vision::{ColorRange, RegionDetector};

/// A BGR tone whose HSV value sits inside the default color range.
const TARGET_BGR: [u8; 3] = [84, 126, 182];

fn frame_with_target(width: u32, height: u32) -> Frame {
    let mut data = vec![0u8; (width as usize) * (height as usize) * 3];
    // A block covering the central ninth of the frame.
    let (bx, by) = (width / 3, height / 3);
    for y in by..2 * by {
        for x in bx..2 * bx {
            let i = ((y * width + x) * 3) as usize;
            data[i..i + 3].copy_from_slice(&TARGET_BGR);
        }
    }
    Frame::new(width, height, data)
}

fn benchmark_detect_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_by_frame_size");

    let sizes = vec![(320, 240, "320x240"), (1280, 720, "1280x720"), (1920, 1080, "1920x1080")];

    for (width, height, label) in sizes {
        let frame = frame_with_target(width, height);
        let range = ColorRange::new([3, 97, 142], [23, 177, 222]).unwrap();
        let detector = RegionDetector::new(range, 800.0);

        group.bench_with_input(BenchmarkId::from_parameter(label), &frame, |b, frame| {
            b.iter(|| detector.detect(black_box(frame)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_detect_sizes);
criterion_main!(benches);
