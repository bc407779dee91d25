//! Round-trip and malformed-stream tests for alert headlines.
//!
//! Run with:
//!   cargo test -p wx-alerts --test headlines_parcel

use parcel::{
    Parcel, ParcelError, ParcelLimits, Parcelable, WriteFlags, DEFAULT_MAX_LIST_LEN,
    DEFAULT_MAX_STRING_LEN,
};
use wx_alerts::{Alert, WxAlertHeadlines, WxDataHeader};

fn header() -> WxDataHeader {
    WxDataHeader::new("47.61,-122.33", 1_700_000_000_000, 1_700_000_900_000)
}

fn headlines_with(keys: &[&str]) -> WxAlertHeadlines {
    WxAlertHeadlines::with_alerts(header(), keys.iter().map(|k| Alert::new(*k)).collect())
}

fn roundtrip(headlines: &WxAlertHeadlines) -> WxAlertHeadlines {
    let mut parcel = Parcel::new();
    headlines
        .write_to_parcel(&mut parcel, WriteFlags::NONE)
        .unwrap();
    parcel.set_data_position(0).unwrap();
    let back = WxAlertHeadlines::read_from_parcel(&mut parcel).unwrap();
    assert_eq!(parcel.data_avail(), 0);
    back
}

// ============================================================================
// Round trips
// ============================================================================

mod roundtrip_tests {
    use super::*;

    #[test]
    fn test_various_lengths() {
        for len in [0usize, 1, 2, 7, 64] {
            let keys: Vec<String> = (0..len).map(|i| format!("key-{i}")).collect();
            let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
            let headlines = headlines_with(&refs);
            assert_eq!(roundtrip(&headlines), headlines, "len {len}");
        }
    }

    #[test]
    fn test_two_known_keys_in_order() {
        let headlines = headlines_with(&[
            "59c65e0f-9c3b-3daf-b0b0-f804e56d6e87",
            "00000000-0000-0000-0000-000000000000",
        ]);
        let back = roundtrip(&headlines);
        let keys: Vec<&str> = back.iter().map(|a| a.detail_key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "59c65e0f-9c3b-3daf-b0b0-f804e56d6e87",
                "00000000-0000-0000-0000-000000000000",
            ]
        );
    }

    #[test]
    fn test_order_is_not_resorted() {
        let severe = Alert::new("severe").with_severity_code(1);
        let mild = Alert::new("mild").with_severity_code(4);

        let forward = WxAlertHeadlines::with_alerts(header(), vec![mild.clone(), severe.clone()]);
        let reverse = WxAlertHeadlines::with_alerts(header(), vec![severe, mild]);

        assert_eq!(roundtrip(&forward), forward);
        assert_eq!(roundtrip(&reverse), reverse);
    }

    #[test]
    fn test_duplicates_survive() {
        let headlines = headlines_with(&["dup", "dup", "other", "dup"]);
        assert_eq!(roundtrip(&headlines).len(), 4);
    }

    #[test]
    fn test_empty_list_is_empty_not_absent() {
        let headlines = WxAlertHeadlines::new(header());
        let back = roundtrip(&headlines);
        assert!(back.is_empty());
        assert_eq!(back.header, header());
    }

    #[test]
    fn test_null_list_marker_reads_empty() {
        let mut parcel = Parcel::new();
        header().write_to_parcel(&mut parcel, WriteFlags::NONE).unwrap();
        parcel.write_null_list();
        parcel.set_data_position(0).unwrap();
        let back = WxAlertHeadlines::read_from_parcel(&mut parcel).unwrap();
        assert!(back.alerts.is_empty());
    }

    #[test]
    fn test_flags_do_not_change_field_bytes() {
        let headlines = headlines_with(&["a", "b"]);
        let plain = parcel::to_bytes(&headlines, WriteFlags::NONE).unwrap();
        for bits in [0x1, 0x2, 0xffff_ffff] {
            let flagged = parcel::to_bytes(&headlines, WriteFlags::from_bits(bits)).unwrap();
            assert_eq!(plain, flagged, "flags {bits:#x}");
        }
    }

    #[test]
    fn test_nested_in_outer_parcel() {
        let headlines = headlines_with(&["x"]);
        let mut parcel = Parcel::new();
        parcel.write_i32(42);
        parcel
            .write_parcelable(&headlines, WriteFlags::RETURN_VALUE)
            .unwrap();
        parcel.set_data_position(0).unwrap();
        assert_eq!(parcel.read_i32().unwrap(), 42);
        let back: WxAlertHeadlines = parcel.read_parcelable().unwrap();
        assert_eq!(back, headlines);
    }
}

// ============================================================================
// Malformed streams
// ============================================================================

mod malformed_tests {
    use super::*;

    fn encoded() -> Vec<u8> {
        parcel::to_bytes(
            &headlines_with(&["59c65e0f-9c3b-3daf-b0b0-f804e56d6e87", "second"]),
            WriteFlags::NONE,
        )
        .unwrap()
    }

    fn header_len() -> usize {
        parcel::to_bytes(&header(), WriteFlags::NONE).unwrap().len()
    }

    #[test]
    fn test_truncated_before_count() {
        let bytes = encoded();
        let cut = &bytes[..header_len()];
        let result = parcel::from_bytes::<WxAlertHeadlines>(cut);
        assert!(matches!(result, Err(ParcelError::Truncated { .. })));
    }

    #[test]
    fn test_truncated_inside_header() {
        let bytes = encoded();
        let result = parcel::from_bytes::<WxAlertHeadlines>(&bytes[..6]);
        assert!(result.is_err());
    }

    #[test]
    fn test_every_truncation_fails() {
        let bytes = encoded();
        for cut in 0..bytes.len() {
            assert!(
                parcel::from_bytes::<WxAlertHeadlines>(&bytes[..cut]).is_err(),
                "cut at {cut} should fail"
            );
        }
        assert!(parcel::from_bytes::<WxAlertHeadlines>(&bytes).is_ok());
    }

    #[test]
    fn test_count_exceeds_elements() {
        let mut bytes = encoded();
        let count_at = header_len();
        bytes[count_at..count_at + 4].copy_from_slice(&3i32.to_le_bytes());
        assert!(parcel::from_bytes::<WxAlertHeadlines>(&bytes).is_err());
    }

    #[test]
    fn test_negative_count() {
        let mut bytes = encoded();
        let count_at = header_len();
        bytes[count_at..count_at + 4].copy_from_slice(&(-2i32).to_le_bytes());
        assert!(matches!(
            parcel::from_bytes::<WxAlertHeadlines>(&bytes),
            Err(ParcelError::InvalidLength(-2))
        ));
    }

    #[test]
    fn test_wrong_element_type() {
        let mut parcel = Parcel::new();
        header().write_to_parcel(&mut parcel, WriteFlags::NONE).unwrap();
        parcel
            .write_typed_list(&[header()], WriteFlags::NONE)
            .unwrap();
        parcel.set_data_position(0).unwrap();

        match WxAlertHeadlines::read_from_parcel(&mut parcel) {
            Err(ParcelError::UnexpectedType { expected, actual }) => {
                assert_eq!(expected, Alert::DESCRIPTOR);
                assert_eq!(actual, WxDataHeader::DESCRIPTOR);
            }
            other => panic!("expected UnexpectedType, got {other:?}"),
        }
    }
}

// ============================================================================
// Size limits
// ============================================================================

mod limit_tests {
    use super::*;

    fn many_alerts(count: usize) -> WxAlertHeadlines {
        WxAlertHeadlines::with_alerts(
            header(),
            (0..count).map(|i| Alert::new(format!("k{i}"))).collect(),
        )
    }

    #[test]
    fn test_list_at_limit_roundtrips() {
        let headlines = many_alerts(DEFAULT_MAX_LIST_LEN);
        assert_eq!(roundtrip(&headlines).len(), DEFAULT_MAX_LIST_LEN);
    }

    #[test]
    fn test_list_over_limit_fails_on_write() {
        let headlines = many_alerts(DEFAULT_MAX_LIST_LEN + 1);
        let mut parcel = Parcel::new();
        let result = headlines.write_to_parcel(&mut parcel, WriteFlags::NONE);
        assert!(matches!(
            result,
            Err(ParcelError::LimitExceeded { what: "list length", .. })
        ));
    }

    #[test]
    fn test_headline_text_at_and_over_limit() {
        let at_limit = WxAlertHeadlines::with_alerts(
            header(),
            vec![Alert::new("long").with_headline_text("h".repeat(DEFAULT_MAX_STRING_LEN))],
        );
        let bytes = parcel::to_bytes(&at_limit, WriteFlags::NONE).unwrap();
        assert_eq!(parcel::from_bytes::<WxAlertHeadlines>(&bytes).unwrap(), at_limit);

        let over = WxAlertHeadlines::with_alerts(
            header(),
            vec![Alert::new("long").with_headline_text("h".repeat(70_000))],
        );
        assert!(matches!(
            parcel::to_bytes(&over, WriteFlags::NONE),
            Err(ParcelError::LimitExceeded { what: "string length", .. })
        ));
    }

    #[test]
    fn test_write_and_read_agree_under_custom_limits() {
        let limits = ParcelLimits::default().with_max_list_len(2);
        for count in [0usize, 1, 2, 3] {
            let headlines = many_alerts(count);
            let written = parcel::to_bytes_with_limits(&headlines, WriteFlags::NONE, limits);
            match written {
                Ok(bytes) => {
                    let back = parcel::from_bytes_with_limits::<WxAlertHeadlines>(&bytes, limits);
                    assert_eq!(back.unwrap(), headlines, "count {count}");
                }
                Err(err) => {
                    assert!(count > 2, "count {count} failed to write: {err}");
                }
            }
        }
    }
}
