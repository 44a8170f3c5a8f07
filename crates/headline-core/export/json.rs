//! Data-document export: the full spec serialized verbatim

use crate::spec::StyleSpec;
use crate::utils::Result;

/// Serialize the spec as a pretty-printed JSON data document
///
/// The document round-trips through [`StyleSpec::from_json`] field-for-field.
///
/// # Errors
///
/// Returns [`crate::utils::CoreError::Document`] if serialization fails.
pub fn data_document(spec: &StyleSpec) -> Result<String> {
    Ok(serde_json::to_string_pretty(spec)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{AnimationKind, EffectLevel, SegmentId, SegmentStyle};

    #[test]
    fn document_round_trips_field_for_field() {
        let mut spec = StyleSpec::default();
        spec.enable_gradient = true;
        spec.text_shadow = EffectLevel::Lg;
        spec.letter_animation_type = AnimationKind::HeartBeat;
        let mut segment = SegmentStyle::new(SegmentId::new(3), 5, 12);
        segment.highlight = true;
        spec.segments.push(segment);
        spec.next_segment_id = 4;

        let document = data_document(&spec).unwrap();
        let restored = StyleSpec::from_json(&document).unwrap();
        assert_eq!(restored, spec);
    }

    #[test]
    fn document_uses_camel_case_keys() {
        let document = data_document(&StyleSpec::default()).unwrap();
        assert!(document.contains("\"fontFamily\""));
        assert!(document.contains("\"gradientDirection\": \"to right\""));
        assert!(document.contains("\"letterAnimationType\": \"bounce\""));
    }
}
