use criterion::{criterion_group, criterion_main, Criterion};
use planestack::{ElementKind, ImageStack, PlanarVolumeLoader, StackGeometry, UnsignedShort};
use std::hint::black_box;

const GEOMETRY: StackGeometry = StackGeometry {
    width: 512,
    height: 512,
    slices: 32,
    channels: 3,
    frames: 2,
};

fn bench_get_image(c: &mut Criterion) {
    let stack = ImageStack::zeroed(GEOMETRY, ElementKind::UInt16).unwrap();
    let loader = PlanarVolumeLoader::<_, UnsignedShort>::new(&stack).unwrap();
    c.bench_function("get_image", |b| {
        b.iter(|| {
            let setup = loader.get_setup_img_loader(black_box(2)).unwrap();
            setup.get_image(black_box(1), &[]).unwrap()
        })
    });
}

fn bench_sum_volume(c: &mut Criterion) {
    let stack = ImageStack::zeroed(GEOMETRY, ElementKind::UInt16).unwrap();
    let loader = PlanarVolumeLoader::<_, UnsignedShort>::new(&stack).unwrap();
    let volume = loader.get_setup_img_loader(0).unwrap().get_image(0, &[]).unwrap();
    c.bench_function("sum_volume", |b| {
        b.iter(|| {
            volume
                .planes()
                .flat_map(|plane| plane.iter())
                .map(|value| *value as u64)
                .sum::<u64>()
        })
    });
}

criterion_group!(benches, bench_get_image, bench_sum_volume);
criterion_main!(benches);
