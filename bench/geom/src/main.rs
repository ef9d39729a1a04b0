extern crate planar_geom;
#[macro_use]
extern crate bencher;

use bencher::{black_box, Bencher};

use planar_geom::{point, vector, AffineTransform, Angle, LineSegment, Scale};

const N: usize = 100;

fn fan(count: usize) -> Vec<LineSegment<f64>> {
    (0..count)
        .map(|i| {
            let a = Angle::degrees(i as f64 * 360.0 / count as f64 + 0.5);
            let (sin, cos) = a.sin_cos();
            LineSegment::new(point(10.0 * cos, 10.0 * sin), point(-10.0 * cos, -10.0 * sin))
        })
        .collect()
}

fn crossing_test(bench: &mut Bencher) {
    let segments = fan(N);

    bench.iter(|| {
        let mut crossings = 0;
        for s1 in &segments {
            for s2 in &segments {
                if s1.crosses(s2) {
                    crossings += 1;
                }
            }
        }
        black_box(crossings)
    });
}

fn crossing_point(bench: &mut Bencher) {
    let segments = fan(N);

    bench.iter(|| {
        for s1 in &segments {
            for s2 in &segments {
                black_box(s1.crossing_point(s2));
            }
        }
    });
}

fn projection(bench: &mut Bencher) {
    let segments = fan(N);
    let p = point(3.0, -7.0);

    bench.iter(|| {
        for s in &segments {
            black_box(s.project_point_on_line(p));
            black_box(s.mirror_point_across_perpendicular(p));
        }
    });
}

fn circle_centers(bench: &mut Bencher) {
    let segments = fan(N);

    bench.iter(|| {
        for s in &segments {
            black_box(s.circle_centers(12.0));
        }
    });
}

fn transform_composition(bench: &mut Bencher) {
    let t = AffineTransform::from_parts(Scale::new(1.01, 0.99), Angle::degrees(1.0), vector(0.5, -0.5));

    bench.iter(|| {
        let mut acc = AffineTransform::identity();
        for _ in 0..N {
            acc = acc.then(&t).translated_by(vector(0.1, 0.1));
        }
        black_box(acc.inverse())
    });
}

benchmark_group!(segments, crossing_test, crossing_point, projection, circle_centers);
benchmark_group!(transforms, transform_composition);

benchmark_main!(segments, transforms);
