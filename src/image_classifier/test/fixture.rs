use crate::image_classifier::ImageClassifier;
use crate::label_table::LabelTable;
use crate::library::logger::{impl_console::LoggerConsole, interface::Logger};
use crate::model::impl_fake::{FakeScores, ModelFake};
use crate::waste_classifier::WasteClassifier;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;
use std::sync::Arc;

pub const CARDBOARD_SCORES: [f32; 9] = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0];

pub fn logger() -> Arc<dyn Logger + Send + Sync> {
    Arc::new(LoggerConsole::new(
        chrono::FixedOffset::west_opt(7 * 3600).unwrap(),
    ))
}

pub struct Fixture {
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub labels: Arc<LabelTable>,
    pub image_classifier: ImageClassifier,
}

impl Fixture {
    pub fn new(scores: FakeScores) -> Self {
        let logger = logger();
        let labels = Arc::new(LabelTable::standard());
        let model = Arc::new(ModelFake::new(scores, logger.clone()));
        let image_classifier = ImageClassifier::new(model, labels.clone(), logger.clone());

        Self {
            logger,
            labels,
            image_classifier,
        }
    }

    pub fn with_scores(scores: &[f32]) -> Self {
        Self::new(FakeScores::Fixed(scores.to_vec()))
    }

    pub fn waste_classifier(&self, show_institution: bool) -> WasteClassifier {
        WasteClassifier::new(
            Ok(self.image_classifier.clone()),
            show_institution,
            self.logger.clone(),
        )
    }
}

pub fn white_image() -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_pixel(224, 224, Rgb([255u8, 255, 255])))
}

pub fn png_bytes(image: &DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}
