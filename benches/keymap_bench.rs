//! Criterion benchmarks for the key translation table and descriptor builders.
//!
//! Both sit on the per-event hot path, so they should stay in the
//! nanosecond class: the keymap is a single array index and the packet
//! builders are branch-only.
//!
//! Run with:
//! ```bash
//! cargo bench --bench keymap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use syninput::event::{InputKey, InputState, KeyEvent, MouseButton, MouseEvent};
use syninput::keymap::native_key_code;
use syninput::packet::{build_key_packet, build_mouse_packets};

/// Well-known keys covering letters, modifiers, navigation, and the sentinel.
const BENCH_KEYS: &[InputKey] = &[
    InputKey::A,
    InputKey::Z,
    InputKey::Enter,
    InputKey::Escape,
    InputKey::Space,
    InputKey::LeftShift,
    InputKey::RightControl,
    InputKey::ArrowLeft,
    InputKey::F1,
    InputKey::F24,
    InputKey::NumPad5,
    InputKey::Undefined,
];

fn bench_key_to_native(c: &mut Criterion) {
    c.bench_function("keymap/native_key_code", |b| {
        b.iter(|| {
            for &key in BENCH_KEYS {
                black_box(native_key_code(black_box(key)));
            }
        })
    });
}

fn bench_build_key_packet(c: &mut Criterion) {
    let event = KeyEvent::new(InputKey::A, InputState::Press);
    c.bench_function("packet/build_key_packet", |b| {
        b.iter(|| black_box(build_key_packet(black_box(event))))
    });
}

fn bench_build_mouse_packets(c: &mut Criterion) {
    let click = MouseEvent {
        x: 640,
        y: 480,
        scroll: 1,
        button: MouseButton::LEFT,
        state: InputState::Press,
    };
    let extended = MouseEvent {
        x: 640,
        y: 480,
        scroll: 0,
        button: MouseButton::Button3,
        state: InputState::Press,
    };

    c.bench_function("packet/build_mouse_packets/primary_only", |b| {
        b.iter(|| black_box(build_mouse_packets(black_box(click), black_box((0, 0)))))
    });
    c.bench_function("packet/build_mouse_packets/with_extended", |b| {
        b.iter(|| black_box(build_mouse_packets(black_box(extended), black_box((0, 0)))))
    });
}

criterion_group!(
    benches,
    bench_key_to_native,
    bench_build_key_packet,
    bench_build_mouse_packets
);
criterion_main!(benches);
