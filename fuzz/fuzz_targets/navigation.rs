#![no_main]
use jsonnav::PathValue;
use libfuzzer_sys::fuzz_target;

fn walk(path: &PathValue, depth: usize) {
    let _ = path.as_string();
    let _ = path.as_f32();
    let _ = path.as_i8();
    let _ = path.as_u64();
    let _ = path.as_usize();
    let _ = path.as_string_map();
    let _ = path.index(-1_i64);
    let _ = path.index(path.len());
    if depth == 0 {
        return;
    }
    for item in path.elements() {
        walk(&item, depth - 1);
    }
    for name in path.fields() {
        walk(&path.field(&name), depth - 1);
    }
}

fuzz_target!(|data: &[u8]| {
    let mut path = PathValue::default();
    if path.parse(data).is_err() {
        assert!(path.is_null());
        assert_eq!(path.as_string(), "");
        return;
    }
    walk(&path, 8);
});
