//! 基于 proptest 的性质测试：幂等、前缀完整性、截断检测

use proptest::prelude::*;
use scrub_core::{scrub_bytes, ErrorKind, Quiet};

/// 非 EOI / SOS / 0x00 / 0xFF 的标记码
fn segment_code() -> impl Strategy<Value = u8> {
    (0x01u8..=0xFE).prop_filter("sentinel codes", |c| *c != 0xD9 && *c != 0xDA)
}

fn segment() -> impl Strategy<Value = (u8, Vec<u8>)> {
    (segment_code(), prop::collection::vec(any::<u8>(), 0..40))
}

fn encode(code: u8, payload: &[u8]) -> Vec<u8> {
    let mut v = vec![0xFF, code];
    v.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    v.extend_from_slice(payload);
    v
}

/// 生成 (输入, 期望输出)；tail 为 None 时以 EOI 结束，否则以 SOS + 扫描数据结束
fn build(segments: &[(u8, Vec<u8>)], tail: Option<&[u8]>) -> (Vec<u8>, Vec<u8>) {
    let mut input = vec![0xFF, 0xD8];
    let mut expected = vec![0xFF, 0xD8];
    for (code, payload) in segments {
        let bytes = encode(*code, payload);
        input.extend_from_slice(&bytes);
        if *code < 0xE0 {
            expected.extend_from_slice(&bytes);
        }
    }
    match tail {
        None => {
            input.extend_from_slice(&[0xFF, 0xD9]);
            expected.extend_from_slice(&[0xFF, 0xD9]);
        }
        Some(scan) => {
            let sos = encode(0xDA, &[0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]);
            input.extend_from_slice(&sos);
            input.extend_from_slice(scan);
            expected.extend_from_slice(&sos);
            expected.extend_from_slice(scan);
        }
    }
    (input, expected)
}

proptest! {
    #[test]
    fn output_is_kept_segments_in_order(
        segs in prop::collection::vec(segment(), 0..12),
        scan in prop::option::of(prop::collection::vec(any::<u8>(), 0..64)),
    ) {
        let (input, expected) = build(&segs, scan.as_deref());
        let out = scrub_bytes(&input, Quiet).unwrap();
        prop_assert_eq!(out.data, expected);
    }

    #[test]
    fn scrubbing_twice_changes_nothing(
        segs in prop::collection::vec(segment(), 0..12),
        scan in prop::option::of(prop::collection::vec(any::<u8>(), 0..64)),
    ) {
        let (input, _) = build(&segs, scan.as_deref());
        let once = scrub_bytes(&input, Quiet).unwrap();
        let twice = scrub_bytes(&once.data, Quiet).unwrap();
        prop_assert_eq!(&twice.data, &once.data);
        prop_assert_eq!(twice.report.removed().count(), 0);
    }

    #[test]
    fn any_proper_prefix_is_truncation(
        segs in prop::collection::vec(segment(), 0..8),
        cut in any::<prop::sample::Index>(),
    ) {
        let (input, _) = build(&segs, None);
        let len = cut.index(input.len());
        let err = scrub_bytes(&input[..len], Quiet).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Truncated);
    }
}
