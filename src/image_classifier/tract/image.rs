use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

/// Channel statistics the bundled ImageNet classifiers were trained with.
const CHANNEL_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const CHANNEL_STD: [f32; 3] = [0.229, 0.224, 0.225];

pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.width() == image.height() {
        return image.resize_exact(width, height, imageops::FilterType::Triangle);
    }

    // Non-square input: scale to fit, then center on a black canvas.
    let scaled = image.resize(width, height, imageops::FilterType::Triangle);
    let x_offset = (width - scaled.width()) / 2;
    let y_offset = (height - scaled.height()) / 2;

    let mut canvas = image::RgbImage::new(width, height);
    imageops::overlay(
        &mut canvas,
        &scaled.to_rgb8(),
        x_offset as i64,
        y_offset as i64,
    );

    DynamicImage::ImageRgb8(canvas)
}

pub fn image_to_tensor(image: &DynamicImage) -> Tensor {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        let value = rgb[(x as u32, y as u32)][c] as f32 / 255.0;
        (value - CHANNEL_MEAN[c]) / CHANNEL_STD[c]
    })
    .into()
}

pub fn resize_image_to_tensor(image: &DynamicImage, width: u32, height: u32) -> Tensor {
    image_to_tensor(&resize_image(image, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, Rgb};

    fn solid_image(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        let mut img = ImageBuffer::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = Rgb(color);
        }
        DynamicImage::ImageRgb8(img)
    }

    fn normalized(value: u8, channel: usize) -> f32 {
        (value as f32 / 255.0 - CHANNEL_MEAN[channel]) / CHANNEL_STD[channel]
    }

    #[test]
    fn test_image_to_tensor_shape() {
        let image = solid_image(100, 100, [255, 0, 0]);
        let tensor = resize_image_to_tensor(&image, 224, 224);
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);
    }

    #[test]
    fn test_image_to_tensor_normalizes_channels() {
        let image = solid_image(100, 100, [255, 0, 0]);
        let tensor = resize_image_to_tensor(&image, 224, 224);
        let slice = tensor.as_slice::<f32>().unwrap();

        // Red channel holds 255, green and blue hold 0.
        assert!((slice[0] - normalized(255, 0)).abs() < 0.0001);
        assert!((slice[224 * 224] - normalized(0, 1)).abs() < 0.0001);
        assert!((slice[2 * 224 * 224] - normalized(0, 2)).abs() < 0.0001);
    }

    #[test]
    fn test_non_square_image_is_centered() {
        // A 200x100 image scales to 224x112 and sits centered on the canvas.
        let image = solid_image(200, 100, [255, 255, 255]);
        let tensor = resize_image_to_tensor(&image, 224, 224);
        let slice = tensor.as_slice::<f32>().unwrap();

        let center = 112 * 224 + 112;
        assert!((slice[center] - normalized(255, 0)).abs() < 0.0001);

        // Rows above the scaled image stay black.
        let padding = 10 * 224 + 112;
        assert!((slice[padding] - normalized(0, 0)).abs() < 0.0001);
    }
}
