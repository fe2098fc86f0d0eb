use std::io::Cursor;

use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::PipelineError;

/// Scales `data` down to fit within `max_width` x `max_height`, keeping its
/// aspect ratio. Images already inside the box keep their dimensions. The
/// result is encoded in the same format as the input.
pub(crate) fn resize_to_fit(
    data: &[u8],
    max_width: u32,
    max_height: u32,
) -> Result<Vec<u8>, PipelineError> {
    let format = image::guess_format(data).map_err(PipelineError::Decode)?;
    let img = image::load_from_memory_with_format(data, format).map_err(PipelineError::Decode)?;
    let resized = fit_within(img, max_width, max_height);

    let mut buf = Vec::new();
    resized
        .write_to(&mut Cursor::new(&mut buf), format)
        .map_err(PipelineError::Encode)?;
    Ok(buf)
}

fn fit_within(img: DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    if img.width() <= max_width && img.height() <= max_height {
        return img;
    }
    img.resize(max_width, max_height, FilterType::Lanczos3)
}
