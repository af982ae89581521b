use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum ModelSource {
    Onnx(PathBuf),
    /// Random scores, for running the window without a model file.
    #[allow(dead_code)]
    Fake,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelSource,
    pub labels_path: PathBuf,
    pub show_institution_guide: bool,
    pub logger_timezone: chrono::FixedOffset,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelSource::Onnx(PathBuf::from("./model/keras_model.onnx")),
            labels_path: PathBuf::from("./model/labels.txt"),
            show_institution_guide: true,
            logger_timezone: mountain_standard_time(),
            window_size: [1200.0, 720.0],
        }
    }
}

impl Config {
    /// Upload types accepted by the file picker.
    pub const IMAGE_EXTENSIONS: [&'static str; 3] = ["jpeg", "jpg", "png"];

    pub fn accepts_path(path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .is_some_and(|ext| Self::IMAGE_EXTENSIONS.contains(&ext.as_str()))
    }
}

// Arizona does not observe daylight saving time.
fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).expect("UTC-7 is a valid offset")
}
