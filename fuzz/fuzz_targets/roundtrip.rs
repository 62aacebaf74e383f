#![no_main]
use libfuzzer_sys::fuzz_target;

use std::io::Read;

use runlength_rs::DecoderReader;

fuzz_target!(|data: &[u8]| {
    let encoded = encode(data);

    let mut decoder = DecoderReader::new(encoded.as_slice());

    let mut out = Vec::with_capacity(data.len());
    decoder.read_to_end(&mut out).unwrap();

    assert_eq!(data, out.as_slice());
});

/// Reference run length encoder; encoding is not part of the crate's API
fn encode(mut data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();

    while !data.is_empty() {
        let run = data
            .iter()
            .take(128)
            .take_while(|&&byte| byte == data[0])
            .count();

        if run >= 2 {
            out.push((257 - run) as u8);
            out.push(data[0]);
            data = &data[run..];
        } else {
            let mut len = 1;
            while len < data.len()
                && len < 128
                && (len + 1 >= data.len() || data[len] != data[len + 1])
            {
                len += 1;
            }

            out.push((len - 1) as u8);
            out.extend_from_slice(&data[..len]);
            data = &data[len..];
        }
    }

    out.push(128);
    out
}
