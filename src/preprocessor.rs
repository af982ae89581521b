use crate::error::ClassifyError;
use image::{imageops, imageops::FilterType, DynamicImage, RgbImage};
use tract_onnx::prelude::*;

pub const INPUT_SIZE: u32 = 224;
pub const INPUT_SHAPE: [usize; 4] = [1, INPUT_SIZE as usize, INPUT_SIZE as usize, 3];

/// A single normalized RGB image in NHWC layout, shape (1, 224, 224, 3).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    data: tract_ndarray::Array4<f32>,
    source_dimensions: (u32, u32),
}

impl ImageTensor {
    /// Wraps an already prepared array. Only the (1, 224, 224, 3) shape is accepted.
    #[allow(dead_code)]
    pub fn from_array(data: tract_ndarray::Array4<f32>) -> Result<Self, ClassifyError> {
        if data.shape() != INPUT_SHAPE {
            return Err(ClassifyError::ShapeMismatch {
                expected: INPUT_SHAPE.to_vec(),
                actual: data.shape().to_vec(),
            });
        }

        Ok(Self {
            data,
            source_dimensions: (INPUT_SIZE, INPUT_SIZE),
        })
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    #[allow(dead_code)]
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.data.iter().copied()
    }

    /// Width and height of the image before resizing.
    pub fn source_dimensions(&self) -> (u32, u32) {
        self.source_dimensions
    }

    #[allow(dead_code)]
    pub fn get(&self, y: usize, x: usize, channel: usize) -> Option<f32> {
        self.data.get([0, y, x, channel]).copied()
    }

    pub fn to_tract_tensor(&self) -> Tensor {
        self.data.clone().into_tensor()
    }
}

pub fn normalize(raw: u8) -> f32 {
    raw as f32 / 127.5 - 1.0
}

/// Centered crop of `(w, h)` matching the `width:height` aspect ratio,
/// as `(x, y, crop_w, crop_h)` in source pixels.
fn center_crop_rect(w: u32, h: u32, width: u32, height: u32) -> (u32, u32, u32, u32) {
    let (w, h) = (w.max(1), h.max(1));
    let target = width as f64 / height as f64;

    let (crop_w, crop_h) = if w as f64 / h as f64 > target {
        (((h as f64 * target).round() as u32).clamp(1, w), h)
    } else {
        (w, ((w as f64 / target).round() as u32).clamp(1, h))
    };

    ((w - crop_w) / 2, (h - crop_h) / 2, crop_w, crop_h)
}

/// Crops the overflow evenly from both ends of the longer side, then scales
/// the crop to the target. Nothing larger than the source or the target is
/// ever allocated.
pub fn fit_center(image: &DynamicImage, width: u32, height: u32) -> RgbImage {
    let rgb = image.to_rgb8();
    let (x, y, crop_w, crop_h) = center_crop_rect(rgb.width(), rgb.height(), width, height);

    let cropped = imageops::crop_imm(&rgb, x, y, crop_w, crop_h).to_image();

    imageops::resize(&cropped, width, height, FilterType::Lanczos3)
}

fn rgb_to_array(rgb: &RgbImage) -> tract_ndarray::Array4<f32> {
    tract_ndarray::Array4::from_shape_fn(
        (1, rgb.height() as usize, rgb.width() as usize, 3),
        |(_, y, x, c)| normalize(rgb.get_pixel(x as u32, y as u32)[c]),
    )
}

pub fn preprocess_image(image: &DynamicImage) -> ImageTensor {
    let fitted = fit_center(image, INPUT_SIZE, INPUT_SIZE);

    ImageTensor {
        data: rgb_to_array(&fitted),
        source_dimensions: (image.width(), image.height()),
    }
}

pub fn preprocess_bytes(bytes: &[u8]) -> Result<ImageTensor, ClassifyError> {
    let image = image::load_from_memory(bytes).map_err(ClassifyError::InvalidImage)?;

    Ok(preprocess_image(&image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, ImageFormat, Luma, Rgb};
    use std::io::Cursor;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb(color)))
    }

    fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
        bytes
    }

    #[test]
    fn test_normalize_endpoints() {
        assert_eq!(normalize(0), -1.0);
        assert_eq!(normalize(255), 1.0);
        assert!((normalize(128) - 0.003_921_628).abs() < 1e-6);
    }

    #[test]
    fn test_shape_and_range_for_various_sizes() {
        for (w, h) in [(224, 224), (640, 480), (31, 400), (1, 1), (400, 3)] {
            let tensor = preprocess_image(&solid(w, h, [10, 200, 255]));

            assert_eq!(tensor.shape(), &INPUT_SHAPE);
            assert_eq!(tensor.source_dimensions(), (w, h));
            assert!(tensor.values().all(|v| (-1.0..=1.0).contains(&v)));
        }
    }

    #[test]
    fn test_black_and_white() {
        let black = preprocess_image(&solid(224, 224, [0, 0, 0]));
        let white = preprocess_image(&solid(224, 224, [255, 255, 255]));

        assert!(black.values().all(|v| v == -1.0));
        assert!(white.values().all(|v| v == 1.0));
    }

    #[test]
    fn test_channels_are_last() {
        let tensor = preprocess_image(&solid(300, 300, [255, 0, 0]));

        assert_eq!(tensor.get(112, 112, 0), Some(1.0));
        assert_eq!(tensor.get(112, 112, 1), Some(-1.0));
        assert_eq!(tensor.get(112, 112, 2), Some(-1.0));
    }

    #[test]
    fn test_grayscale_becomes_three_channels() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(50, 80, Luma([255])));

        let tensor = preprocess_image(&gray);

        assert_eq!(tensor.shape(), &INPUT_SHAPE);
        assert!(tensor.values().all(|v| (v - 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_wide_image_is_cropped_from_center() {
        // red stripe on the far left falls outside the centered crop
        let mut img = ImageBuffer::from_pixel(300, 100, Rgb([255u8, 255, 255]));
        for y in 0..100 {
            for x in 0..20 {
                img.put_pixel(x, y, Rgb([255, 0, 0]));
            }
        }

        let tensor = preprocess_image(&DynamicImage::ImageRgb8(img));

        assert!(tensor.values().all(|v| v > 0.99));
    }

    #[test]
    fn test_tall_image_is_cropped_from_center() {
        let mut img = ImageBuffer::from_pixel(100, 300, Rgb([0u8, 0, 0]));
        for y in 280..300 {
            for x in 0..100 {
                img.put_pixel(x, y, Rgb([0, 0, 255]));
            }
        }

        let tensor = preprocess_image(&DynamicImage::ImageRgb8(img));

        assert!(tensor.values().all(|v| v < -0.99));
    }

    #[test]
    fn test_center_crop_rect() {
        assert_eq!(center_crop_rect(300, 100, 224, 224), (100, 0, 100, 100));
        assert_eq!(center_crop_rect(100, 300, 224, 224), (0, 100, 100, 100));
        assert_eq!(center_crop_rect(224, 224, 224, 224), (0, 0, 224, 224));
        assert_eq!(center_crop_rect(1, 20_000, 224, 224), (0, 9_999, 1, 1));
        assert_eq!(center_crop_rect(20_000, 1, 224, 224), (9_999, 0, 1, 1));
    }

    #[test]
    fn test_very_thin_image_keeps_center() {
        // only the middle rows are red, so the 1x1 center crop must land there
        let mut img = ImageBuffer::from_pixel(1, 20_000, Rgb([0u8, 0, 255]));
        for y in 9_990..10_010 {
            img.put_pixel(0, y, Rgb([255, 0, 0]));
        }
        let started = std::time::Instant::now();

        let tensor = preprocess_image(&DynamicImage::ImageRgb8(img));

        assert!(started.elapsed() < std::time::Duration::from_secs(5));
        assert_eq!(tensor.shape(), &INPUT_SHAPE);
        assert_eq!(tensor.source_dimensions(), (1, 20_000));
        assert_eq!(tensor.get(0, 0, 0), Some(1.0));
        assert_eq!(tensor.get(223, 223, 2), Some(-1.0));
    }

    #[test]
    fn test_very_wide_image_bytes() {
        let image = solid(20_000, 1, [255, 255, 255]);

        let tensor = preprocess_bytes(&encode(&image, ImageFormat::Png)).unwrap();

        assert_eq!(tensor.shape(), &INPUT_SHAPE);
        assert!(tensor.values().all(|v| v == 1.0));
    }

    #[test]
    fn test_preprocess_png_and_jpeg_bytes() {
        let image = solid(120, 90, [0, 128, 255]);

        for format in [ImageFormat::Png, ImageFormat::Jpeg] {
            let tensor = preprocess_bytes(&encode(&image, format)).unwrap();
            assert_eq!(tensor.shape(), &INPUT_SHAPE);
            assert_eq!(tensor.source_dimensions(), (120, 90));
        }
    }

    #[test]
    fn test_undecodable_bytes() {
        let err = preprocess_bytes(&[0x00, 0x01, 0x02, 0x03, 0xff]).unwrap_err();

        assert!(matches!(err, ClassifyError::InvalidImage(_)));
    }

    #[test]
    fn test_from_array_checks_shape() {
        let nchw = tract_ndarray::Array4::<f32>::zeros((1, 3, 224, 224));
        assert!(matches!(
            ImageTensor::from_array(nchw),
            Err(ClassifyError::ShapeMismatch { .. })
        ));

        let nhwc = tract_ndarray::Array4::<f32>::zeros((1, 224, 224, 3));
        let tensor = ImageTensor::from_array(nhwc).unwrap();
        assert_eq!(tensor.to_tract_tensor().shape(), &INPUT_SHAPE);
    }
}
