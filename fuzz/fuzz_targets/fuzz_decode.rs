#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Half the inputs run with a row store cap so the limit path is covered too.
    let limits = zenbmp::Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };

    // Must never panic
    let _ = zenbmp::ImageInfo::from_bytes(data);
    let mut request = zenbmp::DecodeRequest::new(data);
    if data.len() % 2 == 0 {
        request = request.with_limits(&limits);
    }
    if let Ok(decoded) = request.decode(enough::Unstoppable) {
        assert_eq!(
            decoded.pixels().len(),
            decoded.width() as usize * decoded.height() as usize * 3
        );
    }
});
