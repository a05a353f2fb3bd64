use criterion::{criterion_group, criterion_main, Criterion};
use rpicam_params::{params::Params, wire};

pub fn benchmark_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    for (name, buffer) in [
        ("single", "Bitrate=2000000"),
        (
            "typical",
            "Brightness=0.2 Contrast=1.1 Saturation=0.9 Sharpness=0.7 \
             ROI=0.25,0.25,0.5,0.5 Bitrate=2000000",
        ),
        (
            "full",
            "CameraID=1 Width=1280 Height=720 HFlip=1 VFlip=0 Brightness=0.2 \
             Contrast=1.1 Saturation=0.9 Sharpness=0.7 Exposure=short \
             AWB=daylight Denoise=cdn_fast Shutter=8000 Metering=spot Gain=2.0 \
             EV=0.5 ROI=0.25,0.25,0.5,0.5 TuningFile=/tmp/tuning.json \
             Mode=1920:1080:10:P FPS=25 IDRPeriod=50 Bitrate=2000000 \
             Profile=baseline Level=4.0 AfMode=continuous AfRange=macro \
             AfSpeed=fast LensPosition=0.4 AfWindow=0.4,0.4,0.2,0.2",
        ),
    ] {
        group.bench_with_input(name, buffer, |b, buffer| {
            let mut params = Params::default();
            b.iter(|| wire::apply(buffer.as_bytes(), &mut params).unwrap())
        });
    }
}

criterion_group!(benches, benchmark_apply);
criterion_main!(benches);
