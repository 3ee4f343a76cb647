//! Decoder fuzz target: build a record from arbitrary comma-separated text
//! and decode it. The decoder must not panic; every input ends in
//! Ok(Some(..)), Ok(None), or Err(..).
//! Build with: cargo fuzz run decode_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    let mut fields = s.split(',').map(str::to_string);
    let name = match fields.next() {
        Some(n) => n,
        None => return,
    };
    let values: Vec<String> = fields.collect();
    let kind = match data.len() % 3 {
        0 => gerber_attrs::AttributeKind::File,
        1 => gerber_attrs::AttributeKind::Aperture,
        _ => gerber_attrs::AttributeKind::Object,
    };
    let record = gerber_attrs::GenericRecord::new(name, kind, values);
    let _ = gerber_attrs::decode(&record);
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run decode_fuzz");
}
