#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 24-bit 1x1, Windows header
    let mut bmp = vec![0u8; 58]; // 54 header + 4 pixel (3 + 1 padding)
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&58u32.to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&1i32.to_le_bytes()); // width
    bmp[22..26].copy_from_slice(&1i32.to_le_bytes()); // height
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[54] = 0xff; bmp[55] = 0x00; bmp[56] = 0x00; // BGR
    fs::write(format!("{dir}/bmp24_1x1.bmp"), bmp).unwrap();

    // 8-bit 2x1, Windows header, 2-entry palette
    let mut bmp = vec![0u8; 66]; // 54 header + 8 palette + 4 pixel
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&66u32.to_le_bytes());
    bmp[10..14].copy_from_slice(&62u32.to_le_bytes());
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes());
    bmp[18..22].copy_from_slice(&2i32.to_le_bytes());
    bmp[22..26].copy_from_slice(&1i32.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes());
    bmp[28..30].copy_from_slice(&8u16.to_le_bytes());
    bmp[46..50].copy_from_slice(&2u32.to_le_bytes()); // colors used
    bmp[54..58].copy_from_slice(&[0x00, 0x00, 0xff, 0x00]); // red
    bmp[58..62].copy_from_slice(&[0xff, 0x00, 0x00, 0x00]); // blue
    bmp[62] = 0; bmp[63] = 1;
    fs::write(format!("{dir}/bmp8_2x1.bmp"), bmp).unwrap();

    // 24-bit 1x1, OS/2 core header
    let mut bmp = vec![0u8; 30]; // 26 header + 4 pixel
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[10..14].copy_from_slice(&26u32.to_le_bytes());
    bmp[14..18].copy_from_slice(&12u32.to_le_bytes());
    bmp[18..20].copy_from_slice(&1u16.to_le_bytes());
    bmp[20..22].copy_from_slice(&1u16.to_le_bytes());
    bmp[22..24].copy_from_slice(&1u16.to_le_bytes());
    bmp[24..26].copy_from_slice(&24u16.to_le_bytes());
    fs::write(format!("{dir}/os2_1x1.bmp"), bmp).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
