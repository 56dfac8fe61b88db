//! Typed bodies for the remote `/api/predict` call.
//!
//! The remote service takes three positional inputs plus an `fn_index` selecting the
//! operation. Each struct below is one operation; serde renames map its fields onto
//! `input_1`, `input_2`, `input_3` in declaration order.

use serde::Serialize;

pub const DEFAULT_TEXT: &str = "Howdy!";
pub const DEFAULT_VOICE_TYPE: &str = "random";
pub const DEFAULT_MODEL_PRESET: &str = "ultrafast";
pub const DEFAULT_SPLIT_IN_CHUNKS: bool = true;

pub const PRESET_VOICE_FN_INDEX: i64 = 0;
pub const CUSTOM_VOICES_FN_INDEX: i64 = 1;
pub const ONE_FILE_FN_INDEX: i64 = 2;

/// A body the remote `/api/predict` endpoint accepts.
pub trait Prediction: Serialize {
    fn fn_index(&self) -> i64;
}

/// Synthesis with one of the service's built-in voices.
///
/// The slot order is voice, text, preset. It differs from the other two operations
/// and downstream consumers rely on it, so it stays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetVoicePrediction {
    #[serde(rename = "input_1")]
    pub voice_type: String,
    #[serde(rename = "input_2")]
    pub text: String,
    #[serde(rename = "input_3")]
    pub model_preset: String,
    pub fn_index: i64,
}

impl Default for PresetVoicePrediction {
    fn default() -> Self {
        Self {
            voice_type: DEFAULT_VOICE_TYPE.to_string(),
            text: DEFAULT_TEXT.to_string(),
            model_preset: DEFAULT_MODEL_PRESET.to_string(),
            fn_index: PRESET_VOICE_FN_INDEX,
        }
    }
}

/// Voice cloning from several reference recordings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomVoicesPrediction {
    #[serde(rename = "input_1")]
    pub path_to_audios: Vec<String>,
    #[serde(rename = "input_2")]
    pub split_in_chunks: bool,
    #[serde(rename = "input_3")]
    pub text: String,
    pub fn_index: i64,
}

impl CustomVoicesPrediction {
    pub fn new(path_to_audios: Vec<String>) -> Self {
        Self {
            path_to_audios,
            split_in_chunks: DEFAULT_SPLIT_IN_CHUNKS,
            text: DEFAULT_TEXT.to_string(),
            fn_index: CUSTOM_VOICES_FN_INDEX,
        }
    }
}

/// Voice cloning from a single recording.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OneFilePrediction {
    #[serde(rename = "input_1")]
    pub path_to_audio: String,
    #[serde(rename = "input_2")]
    pub split_in_chunks: bool,
    #[serde(rename = "input_3")]
    pub text: String,
    pub fn_index: i64,
}

impl OneFilePrediction {
    pub fn new(path_to_audio: String) -> Self {
        Self {
            path_to_audio,
            split_in_chunks: DEFAULT_SPLIT_IN_CHUNKS,
            text: DEFAULT_TEXT.to_string(),
            fn_index: ONE_FILE_FN_INDEX,
        }
    }
}

impl Prediction for PresetVoicePrediction {
    fn fn_index(&self) -> i64 {
        self.fn_index
    }
}

impl Prediction for CustomVoicesPrediction {
    fn fn_index(&self) -> i64 {
        self.fn_index
    }
}

impl Prediction for OneFilePrediction {
    fn fn_index(&self) -> i64 {
        self.fn_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_voice_slot_order() {
        let payload = PresetVoicePrediction {
            text: "Hello".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"input_1":"random","input_2":"Hello","input_3":"ultrafast","fn_index":0}"#
        );
    }

    #[test]
    fn test_custom_voices_wire_shape() {
        let mut payload = CustomVoicesPrediction::new(vec!["a.wav".into(), "b.wav".into()]);
        payload.fn_index = 5;
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"input_1":["a.wav","b.wav"],"input_2":true,"input_3":"Howdy!","fn_index":5}"#
        );
    }

    #[test]
    fn test_custom_voices_defaults() {
        let payload = CustomVoicesPrediction::new(vec!["a.wav".into()]);
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"input_1":["a.wav"],"input_2":true,"input_3":"Howdy!","fn_index":1}"#
        );
    }

    #[test]
    fn test_one_file_defaults() {
        let payload = OneFilePrediction::new("https://example.com/me.wav".into());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "input_1": "https://example.com/me.wav",
                "input_2": true,
                "input_3": "Howdy!",
                "fn_index": 2
            })
        );
    }
}
