use super::*;

#[test]
fn chart_type_strings_match_serde_names() {
    for kind in ChartKind::ALL {
        let json = serde_json::to_value(kind).unwrap();
        assert_eq!(json, kind.as_str());
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn only_tables_use_portal_data() {
    for kind in ChartKind::ALL {
        let expected = if kind == ChartKind::Table {
            EnvelopeShape::PortalData
        } else {
            EnvelopeShape::Parameters
        };
        assert_eq!(kind.envelope_shape(), expected);
    }
}
